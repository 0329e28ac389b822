use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{ids::*, model::*};

/// Persisted proposal as read through the repository port.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Proposal {
    pub id: ProposalId,
    pub proposal_type: ProposalType,
    pub year: i32,
    pub number: u32,
    pub ementa: String,
    pub status: ProposalStatus,
    pub legislature_id: Option<LegislatureId>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AgendaItem {
    pub section: AgendaSection,
    pub position: u32,
    pub proposal_type: Option<ProposalType>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Presence {
    pub parlamentar_id: ParlamentarId,
    pub present: bool,
    pub justification: Option<String>,
}

/// Persisted session plus its presence records, as read through the
/// repository port.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Session {
    pub id: SessionId,
    pub session_type: SessionType,
    pub status: SessionStatus,
    pub scheduled_at: DateTime<Utc>,
    pub legislature_id: Option<LegislatureId>,
    pub venue: Option<String>,
    pub agenda: Vec<AgendaItem>,
    pub presences: Vec<Presence>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Parlamentar {
    pub id: ParlamentarId,
    pub name: String,
    pub active: bool,
    pub has_active_mandate: bool,
}

/// Transient proposal payload assembled per validation call. Never stored
/// verbatim.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ProposalInput {
    pub proposal_type: ProposalType,
    pub ementa: String,
    pub justificativa: String,
    pub texto: String,
    pub author_id: String,
    pub author_kind: AuthorKind,
    pub subject_tags: Vec<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AmendmentInput {
    pub target_proposal_id: ProposalId,
    pub text: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Signature {
    pub name: String,
    pub cpf: Option<String>,
    pub voter_title: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PopularInitiativeInput {
    pub total_electorate: u64,
    pub signatures: Vec<Signature>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct VetoData {
    pub proposal_id: ProposalId,
    pub kind: VetoKind,
    pub motivo: VetoMotive,
    pub razoes: String,
    pub vetoed_provisions: Vec<String>,
    pub veto_date: DateTime<Utc>,
}
