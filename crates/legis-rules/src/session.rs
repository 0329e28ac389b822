use chrono::{DateTime, Duration, Utc};

use legis_core::{
    compute_quorum, AgendaSection, ParlamentarId, ProposalType, QuorumKind, QuorumResult, Session,
    SessionId, SessionStatus, SessionType,
};
use legis_storage::{MemberRepository, PresenceWriter, SessionRepository};
use legis_validate::ValidationResult;

/// Minimum convocation lead time for an extraordinary session before
/// RN-041 raises a warning.
const MIN_CONVOCATION_LEAD_HOURS: i64 = 24;

/// Fixed opening/closing overhead of the duration estimate, in minutes.
const OPENING_MINUTES: u32 = 15;
const CLOSING_MINUTES: u32 = 5;

/// Session statuses that still accept presence registration (RN-044).
const PRESENCE_OPEN_STATUSES: [SessionStatus; 3] = [
    SessionStatus::Agendada,
    SessionStatus::Convocada,
    SessionStatus::EmAndamento,
];

#[derive(Clone, Debug)]
pub struct InstallationQuorum {
    pub result: ValidationResult,
    pub quorum: Option<QuorumResult>,
}

/// RN-040 — installation quorum: absolute majority of the active-mandate
/// membership of the session's legislature (chamber-wide count when the
/// session has no legislature link).
pub fn validate_installation_quorum(
    members: &dyn MemberRepository,
    sessions: &dyn SessionRepository,
    session_id: &SessionId,
) -> anyhow::Result<InstallationQuorum> {
    let result = ValidationResult::ok().with_code("RN-040");

    let Some(session) = sessions.find_by_id_with_presences(session_id)? else {
        return Ok(InstallationQuorum {
            result: result.with_error("sessão não encontrada"),
            quorum: None,
        });
    };

    let total = members.count_active_by_legislature(session.legislature_id.as_ref())?;
    let present = session.presences.iter().filter(|p| p.present).count() as u32;
    let quorum = compute_quorum(total, present, QuorumKind::AbsoluteMajorityOfTotal);

    let result = if quorum.met {
        result
    } else {
        result.with_error(format!(
            "quórum de instalação não atingido: {} presentes de {} membros (mínimo {})",
            quorum.present, quorum.total_members, quorum.required
        ))
    };
    Ok(InstallationQuorum {
        result,
        quorum: Some(quorum),
    })
}

/// RN-041 — convocation checks. Lead time and venue are advisory; a
/// scheduled date in the past blocks any non-ordinary session.
pub fn validate_convocation(session: &Session, as_of: DateTime<Utc>) -> ValidationResult {
    let mut result = ValidationResult::ok().with_code("RN-041");

    if session.session_type != SessionType::Ordinaria && session.scheduled_at < as_of {
        result = result.with_error("data da sessão está no passado");
    }

    if session.session_type == SessionType::Extraordinaria
        && session.scheduled_at >= as_of
        && session.scheduled_at - as_of < Duration::hours(MIN_CONVOCATION_LEAD_HOURS)
    {
        result = result.with_warning(format!(
            "convocação extraordinária com menos de {MIN_CONVOCATION_LEAD_HOURS}h de antecedência"
        ));
    }

    if session.venue.as_deref().map_or(true, |v| v.trim().is_empty()) {
        result = result.with_warning("local não definido; será utilizada a sede da câmara");
    }

    result
}

/// RN-043 — agenda section ordering. Missing sections are tolerated with
/// a warning; an inverted ordering is a hard error.
pub fn validate_agenda_order(session: &Session) -> ValidationResult {
    let mut result = ValidationResult::ok().with_code("RN-043");

    let first_position = |section: AgendaSection| {
        session
            .agenda
            .iter()
            .filter(|item| item.section == section)
            .map(|item| item.position)
            .min()
    };

    let expediente = first_position(AgendaSection::Expediente);
    let ordem_do_dia = first_position(AgendaSection::OrdemDoDia);

    if expediente.is_none() {
        result = result.with_warning("pauta sem seção de Expediente");
    }
    if ordem_do_dia.is_none() {
        result = result.with_warning("pauta sem seção de Ordem do Dia");
    }
    if let (Some(exp), Some(ord)) = (expediente, ordem_do_dia) {
        if exp >= ord {
            result = result.with_error("o Expediente deve preceder a Ordem do Dia na pauta");
        }
    }

    result
}

/// RN-044 — presence registration. On success performs the idempotent
/// upsert keyed by (session, parlamentar); the writer implementation is
/// responsible for serializing concurrent calls on the same key.
pub fn register_presence(
    members: &dyn MemberRepository,
    sessions: &dyn SessionRepository,
    writer: &dyn PresenceWriter,
    session_id: &SessionId,
    parlamentar_id: &ParlamentarId,
    present: bool,
    justification: Option<&str>,
) -> anyhow::Result<ValidationResult> {
    let mut result = ValidationResult::ok().with_code("RN-044");

    match members.find_active_by_id(parlamentar_id)? {
        None => {
            result = result.with_error("parlamentar não encontrado ou inativo");
        }
        Some(parlamentar) if !parlamentar.has_active_mandate => {
            result = result.with_error(format!(
                "parlamentar {} não possui mandato vigente",
                parlamentar.name
            ));
        }
        Some(_) => {}
    }

    match sessions.find_by_id_with_presences(session_id)? {
        None => {
            result = result.with_error("sessão não encontrada");
        }
        Some(session) if !PRESENCE_OPEN_STATUSES.contains(&session.status) => {
            result = result.with_error(format!(
                "sessão em status {:?} não admite registro de presença",
                session.status
            ));
        }
        Some(_) => {}
    }

    if !present && justification.map_or(true, |j| j.trim().is_empty()) {
        result = result.with_warning("ausência registrada sem justificativa");
    }

    if result.valid {
        writer.upsert(session_id, parlamentar_id, present, justification)?;
        tracing::debug!(
            session = %session_id.as_str(),
            parlamentar = %parlamentar_id.as_str(),
            present,
            "presence upserted"
        );
    }
    Ok(result)
}

/// Planning aid only: estimated session length in minutes. Never blocks
/// session start.
pub fn estimate_duration_minutes(session: &Session) -> u32 {
    let items: u32 = session
        .agenda
        .iter()
        .map(|item| match item.proposal_type {
            Some(ProposalType::ProjetoLeiComplementar) => 20,
            Some(ProposalType::ProjetoLei) => 15,
            Some(ProposalType::ProjetoDecretoLegislativo)
            | Some(ProposalType::ProjetoResolucao) => 15,
            Some(_) | None => 10,
        })
        .sum();
    OPENING_MINUTES + CLOSING_MINUTES + items
}
