use legis_core::{
    LegislatureId, Parlamentar, Proposal, ProposalId, ProposalStatus, ProposalType, Session,
    SessionId, ParlamentarId,
};

/// Read access to proposals. RN-023 (analogous matter) and the
/// sanction/veto rules are the only consumers.
pub trait ProposalRepository: Send + Sync {
    fn find_by_id(&self, id: &ProposalId) -> anyhow::Result<Option<Proposal>>;

    fn count_by_type_and_year(&self, ty: ProposalType, year: i32) -> anyhow::Result<u32>;

    /// Proposals of the given year whose status is in `statuses`,
    /// optionally scoped to one legislature.
    fn list_by_status_and_year(
        &self,
        statuses: &[ProposalStatus],
        year: i32,
        legislature: Option<&LegislatureId>,
    ) -> anyhow::Result<Vec<Proposal>>;
}

pub trait SessionRepository: Send + Sync {
    fn find_by_id_with_presences(&self, id: &SessionId) -> anyhow::Result<Option<Session>>;
}

pub trait MemberRepository: Send + Sync {
    /// Count of active-mandate members; `None` means the chamber-wide
    /// active count (used when a session has no legislature link).
    fn count_active_by_legislature(
        &self,
        legislature: Option<&LegislatureId>,
    ) -> anyhow::Result<u32>;

    fn find_active_by_id(&self, id: &ParlamentarId) -> anyhow::Result<Option<Parlamentar>>;
}

/// The single write port the rules need. The upsert must be atomic per
/// (session, parlamentar) key; a database-backed implementation uses a
/// unique constraint plus upsert so concurrent toggles never produce
/// duplicate rows.
pub trait PresenceWriter: Send + Sync {
    fn upsert(
        &self,
        session_id: &SessionId,
        parlamentar_id: &ParlamentarId,
        present: bool,
        justification: Option<&str>,
    ) -> anyhow::Result<()>;
}
