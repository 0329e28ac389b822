use crate::model::{ProposalStatus, SessionStatus, VetoStatus};

/// Proposal lifecycle adjacency. Any pair not listed is illegal,
/// irrespective of caller role.
pub fn proposal_can_transition(from: ProposalStatus, to: ProposalStatus) -> bool {
    use ProposalStatus::*;
    matches!(
        (from, to),
        (Apresentada, EmTramitacao)
            | (EmTramitacao, EmPauta)
            | (EmTramitacao, Aprovada)
            | (EmTramitacao, Rejeitada)
            | (EmTramitacao, Arquivada)
            | (EmPauta, EmDiscussao)
            | (EmPauta, EmTramitacao)
            | (EmDiscussao, Aprovada)
            | (EmDiscussao, Rejeitada)
            | (Aprovada, Vetada)
            | (Aprovada, Arquivada)
            | (Rejeitada, Arquivada)
            | (Vetada, Arquivada)
    )
}

/// Session lifecycle adjacency. `Concluida` is terminal; `Cancelada` and
/// `SemQuorum` can only be rescheduled.
pub fn session_can_transition(from: SessionStatus, to: SessionStatus) -> bool {
    use SessionStatus::*;
    matches!(
        (from, to),
        (Agendada, Convocada)
            | (Agendada, Cancelada)
            | (Convocada, EmAndamento)
            | (Convocada, Cancelada)
            | (Convocada, Agendada)
            | (EmAndamento, Suspensa)
            | (EmAndamento, Concluida)
            | (EmAndamento, SemQuorum)
            | (Suspensa, EmAndamento)
            | (Suspensa, Concluida)
            | (Suspensa, Cancelada)
            | (Cancelada, Agendada)
            | (SemQuorum, Agendada)
    )
}

/// Veto lifecycle adjacency. Both appreciation outcomes are terminal.
pub fn veto_can_transition(from: VetoStatus, to: VetoStatus) -> bool {
    use VetoStatus::*;
    matches!(
        (from, to),
        (Registrado, EmApreciacao) | (EmApreciacao, Mantido) | (EmApreciacao, Rejeitado)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ProposalStatus, SessionStatus, VetoStatus};

    const ALL_PROPOSAL: [ProposalStatus; 8] = [
        ProposalStatus::Apresentada,
        ProposalStatus::EmTramitacao,
        ProposalStatus::EmPauta,
        ProposalStatus::EmDiscussao,
        ProposalStatus::Aprovada,
        ProposalStatus::Rejeitada,
        ProposalStatus::Vetada,
        ProposalStatus::Arquivada,
    ];

    const ALL_SESSION: [SessionStatus; 7] = [
        SessionStatus::Agendada,
        SessionStatus::Convocada,
        SessionStatus::EmAndamento,
        SessionStatus::Suspensa,
        SessionStatus::Concluida,
        SessionStatus::Cancelada,
        SessionStatus::SemQuorum,
    ];

    #[test]
    fn archived_proposal_is_terminal() {
        for to in ALL_PROPOSAL {
            assert!(!proposal_can_transition(ProposalStatus::Arquivada, to));
        }
    }

    #[test]
    fn proposal_happy_path() {
        assert!(proposal_can_transition(
            ProposalStatus::Apresentada,
            ProposalStatus::EmTramitacao
        ));
        assert!(proposal_can_transition(
            ProposalStatus::EmTramitacao,
            ProposalStatus::Aprovada
        ));
        assert!(proposal_can_transition(
            ProposalStatus::Aprovada,
            ProposalStatus::Vetada
        ));
        assert!(proposal_can_transition(
            ProposalStatus::Vetada,
            ProposalStatus::Arquivada
        ));
    }

    #[test]
    fn proposal_cannot_skip_presentation() {
        assert!(!proposal_can_transition(
            ProposalStatus::Apresentada,
            ProposalStatus::Aprovada
        ));
        assert!(!proposal_can_transition(
            ProposalStatus::Rejeitada,
            ProposalStatus::Aprovada
        ));
    }

    #[test]
    fn concluded_session_is_terminal() {
        for to in ALL_SESSION {
            assert!(!session_can_transition(SessionStatus::Concluida, to));
        }
    }

    #[test]
    fn cancelled_session_only_reschedules() {
        for to in ALL_SESSION {
            let legal = session_can_transition(SessionStatus::Cancelada, to);
            assert_eq!(legal, to == SessionStatus::Agendada);
        }
    }

    #[test]
    fn session_suspension_roundtrip() {
        assert!(session_can_transition(
            SessionStatus::EmAndamento,
            SessionStatus::Suspensa
        ));
        assert!(session_can_transition(
            SessionStatus::Suspensa,
            SessionStatus::EmAndamento
        ));
    }

    #[test]
    fn veto_outcomes_are_terminal() {
        for from in [VetoStatus::Mantido, VetoStatus::Rejeitado] {
            for to in [
                VetoStatus::Registrado,
                VetoStatus::EmApreciacao,
                VetoStatus::Mantido,
                VetoStatus::Rejeitado,
            ] {
                assert!(!veto_can_transition(from, to));
            }
        }
    }
}
