use legis_core::{
    proposal_can_transition, session_can_transition, veto_can_transition, ProposalStatus,
    SessionStatus, VetoStatus,
};
use legis_validate::ValidationResult;

/// Transition validators wrap the pure adjacency tables into the same
/// two-severity shape every other rule produces, naming the illegal pair.
/// API handlers re-run these before committing any status write.

pub fn validate_proposal_transition(
    from: ProposalStatus,
    to: ProposalStatus,
) -> ValidationResult {
    if proposal_can_transition(from, to) {
        ValidationResult::ok()
    } else {
        ValidationResult::error(format!(
            "transição de proposição inválida: {from:?} → {to:?}"
        ))
    }
}

pub fn validate_session_transition(from: SessionStatus, to: SessionStatus) -> ValidationResult {
    if session_can_transition(from, to) {
        ValidationResult::ok()
    } else {
        ValidationResult::error(format!("transição de sessão inválida: {from:?} → {to:?}"))
    }
}

pub fn validate_veto_transition(from: VetoStatus, to: VetoStatus) -> ValidationResult {
    if veto_can_transition(from, to) {
        ValidationResult::ok()
    } else {
        ValidationResult::error(format!("transição de veto inválida: {from:?} → {to:?}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn legal_transition_is_valid() {
        let result = validate_proposal_transition(
            ProposalStatus::Apresentada,
            ProposalStatus::EmTramitacao,
        );
        assert!(result.valid);
    }

    #[test]
    fn illegal_transition_names_the_pair() {
        let result =
            validate_proposal_transition(ProposalStatus::Arquivada, ProposalStatus::Aprovada);
        assert!(!result.valid);
        assert!(result.errors[0].contains("Arquivada"));
        assert!(result.errors[0].contains("Aprovada"));
    }

    #[test]
    fn session_and_veto_wrappers_agree_with_tables() {
        assert!(validate_session_transition(SessionStatus::Agendada, SessionStatus::Convocada).valid);
        assert!(!validate_session_transition(SessionStatus::Concluida, SessionStatus::Agendada).valid);
        assert!(validate_veto_transition(VetoStatus::Registrado, VetoStatus::EmApreciacao).valid);
        assert!(!validate_veto_transition(VetoStatus::Mantido, VetoStatus::Rejeitado).valid);
    }
}
