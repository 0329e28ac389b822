use std::collections::HashMap;
use std::sync::Mutex;

use legis_core::{
    LegislatureId, Parlamentar, ParlamentarId, Presence, Proposal, ProposalId, ProposalStatus,
    ProposalType, Session, SessionId,
};

use crate::traits::{MemberRepository, PresenceWriter, ProposalRepository, SessionRepository};

/// In-memory implementation of every port, for tests. Not durable. The
/// single mutex also serializes the presence upsert per key, matching the
/// unique-constraint guarantee a real backend provides.
#[derive(Default)]
pub struct InMemoryStorage {
    inner: Mutex<Inner>,
}

#[derive(Default)]
struct Inner {
    proposals: HashMap<String, Proposal>,
    sessions: HashMap<String, Session>,
    members: HashMap<String, Member>,
}

struct Member {
    parlamentar: Parlamentar,
    legislature_id: Option<LegislatureId>,
}

impl InMemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_proposal(&self, proposal: Proposal) {
        let mut inner = self.inner.lock().unwrap();
        inner.proposals.insert(proposal.id.0.clone(), proposal);
    }

    pub fn insert_session(&self, session: Session) {
        let mut inner = self.inner.lock().unwrap();
        inner.sessions.insert(session.id.0.clone(), session);
    }

    pub fn insert_member(&self, parlamentar: Parlamentar, legislature_id: Option<LegislatureId>) {
        let mut inner = self.inner.lock().unwrap();
        inner.members.insert(
            parlamentar.id.0.clone(),
            Member {
                parlamentar,
                legislature_id,
            },
        );
    }

    pub fn set_proposal_status(&self, id: &ProposalId, status: ProposalStatus) {
        let mut inner = self.inner.lock().unwrap();
        if let Some(p) = inner.proposals.get_mut(&id.0) {
            p.status = status;
        }
    }
}

impl ProposalRepository for InMemoryStorage {
    fn find_by_id(&self, id: &ProposalId) -> anyhow::Result<Option<Proposal>> {
        let inner = self.inner.lock().unwrap();
        Ok(inner.proposals.get(&id.0).cloned())
    }

    fn count_by_type_and_year(&self, ty: ProposalType, year: i32) -> anyhow::Result<u32> {
        let inner = self.inner.lock().unwrap();
        Ok(inner
            .proposals
            .values()
            .filter(|p| p.proposal_type == ty && p.year == year)
            .count() as u32)
    }

    fn list_by_status_and_year(
        &self,
        statuses: &[ProposalStatus],
        year: i32,
        legislature: Option<&LegislatureId>,
    ) -> anyhow::Result<Vec<Proposal>> {
        let inner = self.inner.lock().unwrap();
        Ok(inner
            .proposals
            .values()
            .filter(|p| p.year == year && statuses.contains(&p.status))
            .filter(|p| match legislature {
                Some(l) => p.legislature_id.as_ref() == Some(l),
                None => true,
            })
            .cloned()
            .collect())
    }
}

impl SessionRepository for InMemoryStorage {
    fn find_by_id_with_presences(&self, id: &SessionId) -> anyhow::Result<Option<Session>> {
        let inner = self.inner.lock().unwrap();
        Ok(inner.sessions.get(&id.0).cloned())
    }
}

impl MemberRepository for InMemoryStorage {
    fn count_active_by_legislature(
        &self,
        legislature: Option<&LegislatureId>,
    ) -> anyhow::Result<u32> {
        let inner = self.inner.lock().unwrap();
        Ok(inner
            .members
            .values()
            .filter(|m| m.parlamentar.active && m.parlamentar.has_active_mandate)
            .filter(|m| match legislature {
                Some(l) => m.legislature_id.as_ref() == Some(l),
                None => true,
            })
            .count() as u32)
    }

    fn find_active_by_id(&self, id: &ParlamentarId) -> anyhow::Result<Option<Parlamentar>> {
        let inner = self.inner.lock().unwrap();
        Ok(inner
            .members
            .get(&id.0)
            .map(|m| m.parlamentar.clone())
            .filter(|p| p.active))
    }
}

impl PresenceWriter for InMemoryStorage {
    fn upsert(
        &self,
        session_id: &SessionId,
        parlamentar_id: &ParlamentarId,
        present: bool,
        justification: Option<&str>,
    ) -> anyhow::Result<()> {
        let mut inner = self.inner.lock().unwrap();
        let session = inner
            .sessions
            .get_mut(&session_id.0)
            .ok_or_else(|| anyhow::anyhow!("session {} not found", session_id.as_str()))?;
        let record = Presence {
            parlamentar_id: parlamentar_id.clone(),
            present,
            justification: justification.map(|s| s.to_string()),
        };
        match session
            .presences
            .iter_mut()
            .find(|p| p.parlamentar_id == *parlamentar_id)
        {
            Some(existing) => *existing = record,
            None => session.presences.push(record),
        }
        Ok(())
    }
}
