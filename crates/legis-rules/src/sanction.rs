use chrono::{DateTime, Duration, Utc};

use legis_core::{
    add_business_days, compute_quorum, difference_in_days, proposal_can_transition, ProposalId,
    ProposalStatus, QuorumKind, QuorumResult, VetoData, VetoKind,
};
use legis_storage::ProposalRepository;
use legis_validate::ValidationResult;

/// Sanction window: 15 business days from submission to the executive.
pub const SANCTION_DEADLINE_BUSINESS_DAYS: u32 = 15;

/// Veto appreciation window: 30 calendar days from the veto date. The
/// asymmetry with the business-day sanction window is statutory.
pub const APPRECIATION_DEADLINE_DAYS: i64 = 30;

/// Appreciation is flagged urgent within this many days of the deadline.
pub const APPRECIATION_URGENT_WINDOW_DAYS: i64 = 7;

/// Submission and promulgation are expected within 48 hours of the
/// triggering act; veto reasons must also reach the chamber within 48h.
pub const FORTY_EIGHT_HOURS: i64 = 48;

/// Default municipal vacatio legis, surfaced as a reminder on publication.
pub const VACATIO_LEGIS_DAYS: i64 = 45;

const MIN_VETO_REASONS_CHARS: usize = 50;

#[derive(Clone, Debug)]
pub struct SubmissionOutcome {
    pub result: ValidationResult,
    /// Sanction deadline computed from the submission instant.
    pub prazo_sancao: DateTime<Utc>,
}

/// RN-080 — submission of an approved proposal to the executive.
pub fn validate_submission_to_executive(
    repo: &dyn ProposalRepository,
    proposal_id: &ProposalId,
    approved_at: DateTime<Utc>,
    as_of: DateTime<Utc>,
) -> anyhow::Result<SubmissionOutcome> {
    let mut result = ValidationResult::ok().with_code("RN-080");

    match repo.find_by_id(proposal_id)? {
        None => {
            result = result.with_error("proposição não encontrada");
        }
        Some(p) if p.status != ProposalStatus::Aprovada => {
            result = result.with_error(format!(
                "apenas proposições aprovadas podem ser enviadas ao executivo (status atual: {:?})",
                p.status
            ));
        }
        Some(_) => {}
    }

    if as_of - approved_at > Duration::hours(FORTY_EIGHT_HOURS) {
        result = result.with_warning(format!(
            "envio ao executivo após {FORTY_EIGHT_HOURS}h da votação"
        ));
    }

    Ok(SubmissionOutcome {
        result,
        prazo_sancao: add_business_days(as_of, SANCTION_DEADLINE_BUSINESS_DAYS),
    })
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SanctionDeadline {
    pub expired: bool,
    pub days_remaining: i64,
    pub final_deadline: DateTime<Utc>,
}

/// RN-081 — pure tacit-sanction deadline check: 15 business days from
/// submission. Past the deadline the proposal becomes law tacitly.
pub fn check_sanction_deadline(
    submission_date: DateTime<Utc>,
    as_of: DateTime<Utc>,
) -> SanctionDeadline {
    let final_deadline = add_business_days(submission_date, SANCTION_DEADLINE_BUSINESS_DAYS);
    SanctionDeadline {
        expired: as_of > final_deadline,
        days_remaining: difference_in_days(final_deadline, as_of),
        final_deadline,
    }
}

/// RN-081 — expressed sanction. A missing law number does not block; the
/// number may be assigned at promulgation.
pub fn validate_sanction(
    repo: &dyn ProposalRepository,
    proposal_id: &ProposalId,
    law_number: Option<&str>,
) -> anyhow::Result<ValidationResult> {
    let mut result = ValidationResult::ok().with_code("RN-081");

    match repo.find_by_id(proposal_id)? {
        None => {
            result = result.with_error("proposição não encontrada");
        }
        Some(p) if p.status != ProposalStatus::Aprovada => {
            result = result.with_error(format!(
                "apenas proposições aprovadas podem ser sancionadas (status atual: {:?})",
                p.status
            ));
        }
        Some(_) => {}
    }

    if law_number.map_or(true, |n| n.trim().is_empty()) {
        result = result.with_warning("número da lei não informado no ato da sanção");
    }

    Ok(result)
}

#[derive(Clone, Debug)]
pub struct VetoOutcome {
    pub result: ValidationResult,
    /// Deadline for the chamber to appreciate the veto: veto date plus 30
    /// calendar days.
    pub appreciation_deadline: DateTime<Utc>,
}

/// RN-082/083 — veto registration. The motive is a closed enum, so only
/// the structural requirements are checked at runtime.
pub fn validate_veto(
    repo: &dyn ProposalRepository,
    veto: &VetoData,
) -> anyhow::Result<VetoOutcome> {
    let mut result = ValidationResult::ok().with_code("RN-082");

    match repo.find_by_id(&veto.proposal_id)? {
        None => {
            result = result.with_error("proposição não encontrada");
        }
        Some(p) if p.status != ProposalStatus::Aprovada => {
            result = result.with_error(format!(
                "apenas proposições aprovadas podem ser vetadas (status atual: {:?})",
                p.status
            ));
        }
        Some(_) => {}
    }

    if veto.kind == VetoKind::Parcial && veto.vetoed_provisions.is_empty() {
        result = result.with_error("veto parcial exige a indicação dos dispositivos vetados");
    }

    if veto.razoes.trim().chars().count() < MIN_VETO_REASONS_CHARS {
        result = result.with_error(format!(
            "razões do veto devem ter no mínimo {MIN_VETO_REASONS_CHARS} caracteres"
        ));
    }

    result = result.with_warning(format!(
        "as razões do veto devem ser comunicadas à câmara em até {FORTY_EIGHT_HOURS} horas"
    ));

    Ok(VetoOutcome {
        result,
        appreciation_deadline: veto.veto_date + Duration::days(APPRECIATION_DEADLINE_DAYS),
    })
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AppreciationDeadline {
    pub final_deadline: DateTime<Utc>,
    pub days_remaining: i64,
    pub overdue: bool,
    pub urgent: bool,
}

/// RN-084 — pure deadline status for a registered veto.
pub fn check_appreciation_deadline(
    veto_date: DateTime<Utc>,
    as_of: DateTime<Utc>,
) -> AppreciationDeadline {
    let final_deadline = veto_date + Duration::days(APPRECIATION_DEADLINE_DAYS);
    let days_remaining = difference_in_days(final_deadline, as_of);
    AppreciationDeadline {
        final_deadline,
        days_remaining,
        overdue: days_remaining < 0,
        urgent: (0..=APPRECIATION_URGENT_WINDOW_DAYS).contains(&days_remaining),
    }
}

#[derive(Clone, Debug)]
pub struct VetoAppreciation {
    pub result: ValidationResult,
    /// Present only when a rejection was attempted.
    pub quorum: Option<QuorumResult>,
}

/// RN-085 — veto appreciation outcome. Overriding (rejecting) a veto
/// requires an absolute majority of the chamber's total membership voting
/// for rejection; a maintained veto leads to archival of the proposal.
pub fn appreciate_veto(
    total_members: u32,
    votes_for_rejection: u32,
    reject: bool,
) -> VetoAppreciation {
    let result = ValidationResult::ok().with_code("RN-085");

    if !reject {
        return VetoAppreciation {
            result: result.with_warning("veto mantido: a proposição será arquivada"),
            quorum: None,
        };
    }

    let quorum = compute_quorum(
        total_members,
        votes_for_rejection,
        QuorumKind::AbsoluteMajorityOfTotal,
    );
    let result = if quorum.met {
        result.with_warning(format!(
            "veto rejeitado: promulgação pelo presidente da câmara em até {FORTY_EIGHT_HOURS} horas"
        ))
    } else {
        result.with_error(format!(
            "maioria absoluta não atingida para rejeitar o veto: {} votos de {} exigidos (faltam {})",
            quorum.present,
            quorum.required,
            quorum.required - quorum.present
        ))
    };
    VetoAppreciation {
        result,
        quorum: Some(quorum),
    }
}

/// RN-086 — promulgation preconditions.
pub fn validate_promulgation(
    repo: &dyn ProposalRepository,
    proposal_id: &ProposalId,
    law_number: &str,
    after_veto_rejection: bool,
) -> anyhow::Result<ValidationResult> {
    let mut result = ValidationResult::ok().with_code("RN-086");

    if law_number.trim().is_empty() {
        result = result.with_error("número da lei é obrigatório para promulgação");
    }

    match repo.find_by_id(proposal_id)? {
        None => {
            result = result.with_error("proposição não encontrada");
        }
        Some(p) => {
            if after_veto_rejection && p.status != ProposalStatus::Vetada {
                result = result.with_error(format!(
                    "promulgação após rejeição de veto exige proposição vetada (status atual: {:?})",
                    p.status
                ));
            }
            if p.proposal_type.bypasses_sanction() {
                result = result.with_warning(
                    "resoluções e decretos legislativos dispensam sanção e são promulgados diretamente",
                );
            }
        }
    }

    Ok(result)
}

/// RN-087 — publication in the official gazette.
pub fn validate_publication(
    gazette: &str,
    publication_date: Option<DateTime<Utc>>,
) -> ValidationResult {
    let mut result = ValidationResult::ok().with_code("RN-087");

    if gazette.trim().is_empty() {
        result = result.with_error("veículo oficial de publicação é obrigatório");
    }
    if publication_date.is_none() {
        result = result.with_error("data de publicação é obrigatória");
    }

    result.with_warning(format!(
        "verificar cláusula de vigência: sem disposição expressa, a lei entra em vigor {VACATIO_LEGIS_DAYS} dias após a publicação"
    ))
}

#[derive(Clone, Debug)]
pub struct ArchivalOutcome {
    pub result: ValidationResult,
    /// Status for the caller to persist when the guard passes.
    pub new_status: Option<ProposalStatus>,
}

/// Archival after a maintained veto: guarded transition to `Arquivada`.
/// The durable write belongs to the caller's persistence layer.
pub fn archive_after_maintained_veto(
    repo: &dyn ProposalRepository,
    proposal_id: &ProposalId,
) -> anyhow::Result<ArchivalOutcome> {
    let result = ValidationResult::ok().with_code("RN-085");

    let Some(proposal) = repo.find_by_id(proposal_id)? else {
        return Ok(ArchivalOutcome {
            result: result.with_error("proposição não encontrada"),
            new_status: None,
        });
    };

    if proposal.status != ProposalStatus::Vetada
        || !proposal_can_transition(proposal.status, ProposalStatus::Arquivada)
    {
        return Ok(ArchivalOutcome {
            result: result.with_error(format!(
                "arquivamento pós-veto exige proposição vetada (status atual: {:?})",
                proposal.status
            )),
            new_status: None,
        });
    }

    Ok(ArchivalOutcome {
        result,
        new_status: Some(ProposalStatus::Arquivada),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use legis_core::{Proposal, ProposalType, VetoMotive};
    use legis_storage::InMemoryStorage;

    fn at(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 12, 0, 0).unwrap()
    }

    fn stored(id: &str, ty: ProposalType, status: ProposalStatus) -> Proposal {
        Proposal {
            id: ProposalId::from_str(id),
            proposal_type: ty,
            year: 2024,
            number: 12,
            ementa: "Institui a política municipal de dados abertos".into(),
            status,
            legislature_id: None,
        }
    }

    fn veto(id: &str, kind: VetoKind) -> VetoData {
        VetoData {
            proposal_id: ProposalId::from_str(id),
            kind,
            motivo: VetoMotive::InteressePublico,
            razoes: "r".repeat(60),
            vetoed_provisions: vec!["art. 3º".into()],
            veto_date: at(2024, 1, 1),
        }
    }

    #[test]
    fn submission_requires_approved_status() {
        let storage = InMemoryStorage::new();
        storage.insert_proposal(stored("p1", ProposalType::ProjetoLei, ProposalStatus::EmPauta));
        let out = validate_submission_to_executive(
            &storage,
            &ProposalId::from_str("p1"),
            at(2024, 3, 1),
            at(2024, 3, 1),
        )
        .unwrap();
        assert!(!out.result.valid);
        assert!(out.result.errors[0].contains("EmPauta"));
    }

    #[test]
    fn late_submission_warns_and_computes_deadline() {
        let storage = InMemoryStorage::new();
        storage.insert_proposal(stored("p1", ProposalType::ProjetoLei, ProposalStatus::Aprovada));
        // Approved Friday 2024-03-01, submitted Tuesday 2024-03-05 (>48h).
        let as_of = at(2024, 3, 5);
        let out = validate_submission_to_executive(
            &storage,
            &ProposalId::from_str("p1"),
            at(2024, 3, 1),
            as_of,
        )
        .unwrap();
        assert!(out.result.valid);
        assert_eq!(out.result.warnings.len(), 1);
        assert_eq!(out.prazo_sancao, add_business_days(as_of, 15));
    }

    #[test]
    fn sanction_deadline_expires_after_15_business_days() {
        // Submitted Monday 2024-01-01; deadline Monday 2024-01-22.
        let submitted = at(2024, 1, 1);
        let open = check_sanction_deadline(submitted, at(2024, 1, 19));
        assert!(!open.expired);
        assert_eq!(open.final_deadline, at(2024, 1, 22));
        assert_eq!(open.days_remaining, 3);

        let expired = check_sanction_deadline(submitted, at(2024, 1, 23));
        assert!(expired.expired);
        assert!(expired.days_remaining < 0);
    }

    #[test]
    fn sanction_without_law_number_warns() {
        let storage = InMemoryStorage::new();
        storage.insert_proposal(stored("p1", ProposalType::ProjetoLei, ProposalStatus::Aprovada));
        let result = validate_sanction(&storage, &ProposalId::from_str("p1"), None).unwrap();
        assert!(result.valid);
        assert!(result.warnings[0].contains("número da lei"));

        let with_number =
            validate_sanction(&storage, &ProposalId::from_str("p1"), Some("123/2024")).unwrap();
        assert!(with_number.warnings.is_empty());
    }

    #[test]
    fn partial_veto_without_provisions_single_error_plus_standing_warning() {
        let storage = InMemoryStorage::new();
        storage.insert_proposal(stored("p1", ProposalType::ProjetoLei, ProposalStatus::Aprovada));
        let mut v = veto("p1", VetoKind::Parcial);
        v.vetoed_provisions.clear();
        let out = validate_veto(&storage, &v).unwrap();
        assert!(!out.result.valid);
        assert_eq!(out.result.errors.len(), 1);
        assert!(out.result.errors[0].contains("dispositivos vetados"));
        assert_eq!(out.result.warnings.len(), 1);
        assert!(out.result.warnings[0].contains("48 horas"));
    }

    #[test]
    fn veto_appreciation_deadline_is_30_calendar_days() {
        let storage = InMemoryStorage::new();
        storage.insert_proposal(stored("p1", ProposalType::ProjetoLei, ProposalStatus::Aprovada));
        let out = validate_veto(&storage, &veto("p1", VetoKind::Total)).unwrap();
        assert!(out.result.valid);
        assert_eq!(out.appreciation_deadline, at(2024, 1, 31));
    }

    #[test]
    fn short_reasons_are_rejected() {
        let storage = InMemoryStorage::new();
        storage.insert_proposal(stored("p1", ProposalType::ProjetoLei, ProposalStatus::Aprovada));
        let mut v = veto("p1", VetoKind::Total);
        v.razoes = "insuficiente".into();
        let out = validate_veto(&storage, &v).unwrap();
        assert!(!out.result.valid);
    }

    #[test]
    fn veto_of_unapproved_proposal_is_rejected() {
        let storage = InMemoryStorage::new();
        storage.insert_proposal(stored("p1", ProposalType::ProjetoLei, ProposalStatus::Rejeitada));
        let out = validate_veto(&storage, &veto("p1", VetoKind::Total)).unwrap();
        assert!(!out.result.valid);
    }

    #[test]
    fn appreciation_deadline_overdue_and_urgency() {
        let status = check_appreciation_deadline(at(2024, 1, 1), at(2024, 2, 5));
        assert_eq!(status.final_deadline, at(2024, 1, 31));
        assert!(status.overdue);
        assert!(!status.urgent);
        assert_eq!(status.days_remaining, -5);

        let urgent = check_appreciation_deadline(at(2024, 1, 1), at(2024, 1, 28));
        assert!(!urgent.overdue);
        assert!(urgent.urgent);

        let comfortable = check_appreciation_deadline(at(2024, 1, 1), at(2024, 1, 5));
        assert!(!comfortable.urgent);
    }

    #[test]
    fn veto_rejection_needs_absolute_majority() {
        let short = appreciate_veto(9, 4, true);
        assert!(!short.result.valid);
        assert!(short.result.errors[0].contains("faltam 1"));
        assert_eq!(short.quorum.unwrap().required, 5);

        let passed = appreciate_veto(9, 5, true);
        assert!(passed.result.valid);
        assert!(passed.result.warnings[0].contains("48 horas"));
    }

    #[test]
    fn maintained_veto_warns_about_archival() {
        let maintained = appreciate_veto(9, 0, false);
        assert!(maintained.result.valid);
        assert!(maintained.result.warnings[0].contains("arquivada"));
        assert!(maintained.quorum.is_none());
    }

    #[test]
    fn promulgation_requires_law_number() {
        let storage = InMemoryStorage::new();
        storage.insert_proposal(stored("p1", ProposalType::ProjetoLei, ProposalStatus::Vetada));
        let result =
            validate_promulgation(&storage, &ProposalId::from_str("p1"), "  ", true).unwrap();
        assert!(!result.valid);
    }

    #[test]
    fn promulgation_after_veto_rejection_requires_vetada() {
        let storage = InMemoryStorage::new();
        storage.insert_proposal(stored("p1", ProposalType::ProjetoLei, ProposalStatus::Aprovada));
        let result =
            validate_promulgation(&storage, &ProposalId::from_str("p1"), "123/2024", true).unwrap();
        assert!(!result.valid);
        assert!(result.errors[0].contains("Aprovada"));
    }

    #[test]
    fn resolution_bypasses_sanction_with_a_note() {
        let storage = InMemoryStorage::new();
        storage.insert_proposal(stored(
            "p1",
            ProposalType::ProjetoResolucao,
            ProposalStatus::Aprovada,
        ));
        let result =
            validate_promulgation(&storage, &ProposalId::from_str("p1"), "5/2024", false).unwrap();
        assert!(result.valid);
        assert!(result.warnings[0].contains("dispensam sanção"));
    }

    #[test]
    fn publication_always_carries_vacatio_reminder() {
        let ok = validate_publication("Diário Oficial do Município", Some(at(2024, 4, 1)));
        assert!(ok.valid);
        assert!(ok.warnings[0].contains("45 dias"));

        let missing = validate_publication("", None);
        assert!(!missing.valid);
        assert_eq!(missing.errors.len(), 2);
    }

    #[test]
    fn archival_guard_requires_vetada() {
        let storage = InMemoryStorage::new();
        storage.insert_proposal(stored("p1", ProposalType::ProjetoLei, ProposalStatus::Vetada));
        let out = archive_after_maintained_veto(&storage, &ProposalId::from_str("p1")).unwrap();
        assert!(out.result.valid);
        assert_eq!(out.new_status, Some(ProposalStatus::Arquivada));

        storage.set_proposal_status(&ProposalId::from_str("p1"), ProposalStatus::Arquivada);
        let again = archive_after_maintained_veto(&storage, &ProposalId::from_str("p1")).unwrap();
        assert!(!again.result.valid);
        assert!(again.new_status.is_none());
    }
}
