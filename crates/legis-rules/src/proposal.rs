use std::sync::Arc;

use chrono::{Datelike, Utc};

use legis_core::{
    jaccard, normalize, AmendmentInput, AuthorKind, LegislatureId, PopularInitiativeInput,
    ProposalInput, ProposalStatus,
};
use legis_storage::ProposalRepository;
use legis_validate::{AggregatedResult, RuleEngine, ValidationResult, ValidationRule};

/// Matters reserved to the Executive's initiative (RN-020). Stored
/// pre-normalized; the scanned text goes through the same normalization.
const RESERVED_MATTER_KEYWORDS: &[&str] = &[
    "criacao de cargo",
    "criacao de emprego publico",
    "aumento de vencimentos",
    "aumento de remuneracao",
    "reajuste salarial",
    "reajuste de vencimentos",
    "reorganizacao administrativa",
    "estrutura administrativa",
    "regime juridico dos servidores",
    "plano plurianual",
    "diretrizes orcamentarias",
    "orcamento anual",
    "credito suplementar",
    "incentivo fiscal",
    "isencao fiscal",
    "beneficio fiscal",
];

/// Subject-tag codes that mark a reserved matter regardless of the text.
const RESERVED_SUBJECT_TAGS: &[&str] = &[
    "cargos-publicos",
    "remuneracao-servidores",
    "estrutura-administrativa",
    "orcamento",
    "incentivo-fiscal",
];

/// Keywords that suggest an amendment increases expenditure (RN-024).
const EXPENDITURE_KEYWORDS: &[&str] = &[
    "aumento de despesa",
    "nova despesa",
    "criacao de despesa",
    "ampliacao de despesa",
];

/// RN-023 similarity thresholds. Fixed constants carried over from the
/// chamber's regimento practice; do not re-derive.
pub const SIMILARITY_BLOCK_THRESHOLD: f64 = 0.7;
pub const SIMILARITY_WARN_THRESHOLD: f64 = 0.5;

/// RN-025: popular initiatives need signatures from 5% of the electorate.
pub const POPULAR_INITIATIVE_RATE: f64 = 0.05;

const MIN_EMENTA_CHARS: usize = 10;
const MIN_JUSTIFICATIVA_CHARS: usize = 50;
const MIN_TEXTO_CHARS: usize = 100;
const MIN_AMENDMENT_CHARS: usize = 20;

/// Statuses a proposal may hold in RN-023's conflict scan.
const ANALOGOUS_SCAN_STATUSES: [ProposalStatus; 3] = [
    ProposalStatus::Rejeitada,
    ProposalStatus::Vetada,
    ProposalStatus::Arquivada,
];

/// Statuses that still admit amendments (pre-vote).
const AMENDABLE_STATUSES: [ProposalStatus; 3] = [
    ProposalStatus::EmTramitacao,
    ProposalStatus::EmPauta,
    ProposalStatus::EmDiscussao,
];

/// RN-020 — iniciativa privativa. The Executive may originate anything;
/// for law-like types from other authors, scan the full text against the
/// reserved-matter keyword list and the explicit subject tags.
pub fn validate_reserved_initiative(input: &ProposalInput) -> ValidationResult {
    let result = ValidationResult::ok().with_code("RN-020");
    if input.author_kind == AuthorKind::Executivo {
        return result;
    }
    if !input.proposal_type.is_law_like() {
        return result;
    }

    let haystack = normalize(&format!(
        "{} {} {}",
        input.ementa, input.justificativa, input.texto
    ));
    for keyword in RESERVED_MATTER_KEYWORDS {
        if haystack.contains(keyword) {
            return result.with_error(format!(
                "matéria de iniciativa privativa do Poder Executivo (termo encontrado: \"{keyword}\")"
            ));
        }
    }

    for tag in &input.subject_tags {
        if RESERVED_SUBJECT_TAGS.contains(&normalize(tag).replace(' ', "-").as_str()) {
            return result.with_error(format!(
                "assunto \"{tag}\" é de iniciativa privativa do Poder Executivo"
            ));
        }
    }

    result
}

/// RN-022 — minimum content.
pub fn validate_minimum_content(input: &ProposalInput) -> ValidationResult {
    let mut result = ValidationResult::ok().with_code("RN-022");

    let ementa = input.ementa.trim();
    if ementa.is_empty() {
        result = result.with_error("ementa é obrigatória");
    } else if ementa.chars().count() < MIN_EMENTA_CHARS {
        result = result.with_error(format!(
            "ementa deve ter no mínimo {MIN_EMENTA_CHARS} caracteres"
        ));
    }

    if input.proposal_type.is_project_like() {
        let justificativa = input.justificativa.trim();
        if justificativa.chars().count() < MIN_JUSTIFICATIVA_CHARS {
            result = result.with_error(format!(
                "justificativa é obrigatória com no mínimo {MIN_JUSTIFICATIVA_CHARS} caracteres"
            ));
        }
        let texto = input.texto.trim();
        if texto.chars().count() < MIN_TEXTO_CHARS {
            result = result.with_error(format!(
                "texto da proposição é obrigatório com no mínimo {MIN_TEXTO_CHARS} caracteres"
            ));
        } else {
            let lowered = texto.to_lowercase();
            if !lowered.contains("art.") && !lowered.contains("artigo") {
                result = result
                    .with_warning("texto não contém artigos (\"art.\" ou \"artigo\")");
            }
        }
    }

    if input.author_id.trim().is_empty() {
        result = result.with_error("autor é obrigatório");
    }

    result
}

/// RN-023 — analogous matter. Scans same-year proposals already rejected,
/// vetoed or archived for ementa similarity.
pub fn validate_analogous_matter(
    repo: &dyn ProposalRepository,
    input: &ProposalInput,
    year: i32,
    legislature: Option<&LegislatureId>,
) -> anyhow::Result<ValidationResult> {
    let mut result = ValidationResult::ok().with_code("RN-023");
    let candidates = repo.list_by_status_and_year(&ANALOGOUS_SCAN_STATUSES, year, legislature)?;

    for candidate in candidates {
        let similarity = jaccard(&input.ementa, &candidate.ementa);
        if similarity > SIMILARITY_BLOCK_THRESHOLD {
            result = result.with_error(format!(
                "matéria análoga à proposição {}/{} ({:?}), similaridade {:.0}%",
                candidate.number,
                candidate.year,
                candidate.status,
                similarity * 100.0
            ));
        } else if similarity >= SIMILARITY_WARN_THRESHOLD {
            result = result.with_warning(format!(
                "possível semelhança com a proposição {}/{} ({:?}), similaridade {:.0}%",
                candidate.number,
                candidate.year,
                candidate.status,
                similarity * 100.0
            ));
        }
    }

    Ok(result)
}

/// RN-024 — amendment admissibility. Expenditure findings never block;
/// the chamber may still register the amendment pending review.
pub fn validate_amendment(
    repo: &dyn ProposalRepository,
    amendment: &AmendmentInput,
) -> anyhow::Result<ValidationResult> {
    let mut result = ValidationResult::ok().with_code("RN-024");

    match repo.find_by_id(&amendment.target_proposal_id)? {
        None => {
            result = result.with_error("proposição alvo da emenda não encontrada");
        }
        Some(target) if !AMENDABLE_STATUSES.contains(&target.status) => {
            result = result.with_error(format!(
                "proposição em status {:?} não admite emendas",
                target.status
            ));
        }
        Some(_) => {}
    }

    if amendment.text.trim().chars().count() < MIN_AMENDMENT_CHARS {
        result = result.with_error(format!(
            "texto da emenda deve ter no mínimo {MIN_AMENDMENT_CHARS} caracteres"
        ));
    }

    let haystack = normalize(&amendment.text);
    if EXPENDITURE_KEYWORDS.iter().any(|k| haystack.contains(k)) {
        result = result
            .with_warning("emenda sugere aumento de despesa: indicar a fonte de custeio");
    }

    Ok(result)
}

/// RN-025 — popular initiative signature thresholds.
pub fn validate_popular_initiative(input: &PopularInitiativeInput) -> ValidationResult {
    let mut result = ValidationResult::ok().with_code("RN-025");

    let required = (input.total_electorate as f64 * POPULAR_INITIATIVE_RATE).ceil() as u64;
    let collected = input.signatures.len() as u64;
    if collected < required {
        result = result.with_error(format!(
            "assinaturas insuficientes: {collected} coletadas, {required} exigidas (faltam {})",
            required - collected
        ));
    }

    let incomplete = input
        .signatures
        .iter()
        .filter(|s| {
            let has_name = !s.name.trim().is_empty();
            let has_document = s.cpf.as_deref().is_some_and(|c| !c.trim().is_empty())
                || s.voter_title.as_deref().is_some_and(|t| !t.trim().is_empty());
            !(has_name && has_document)
        })
        .count();
    if incomplete > 0 {
        result = result.with_error(format!(
            "{incomplete} assinatura(s) sem nome ou documento (CPF ou título de eleitor)"
        ));
    }

    result
}

/// Context handed to the composed proposal engine; bundles the input with
/// the repository port RN-023 needs. Owns its data so rule closures stay
/// `'static`.
pub struct ProposalContext {
    pub input: ProposalInput,
    pub repo: Arc<dyn ProposalRepository>,
    pub year: i32,
    pub legislature: Option<LegislatureId>,
}

/// The composed admissibility engine: RN-022 → RN-020 → RN-023, in that
/// order, without short-circuiting. Callers wanting fail-fast derive a
/// variant with `clone().stop_on_first_error()`.
pub fn proposal_engine() -> RuleEngine<ProposalContext> {
    let mut engine = RuleEngine::new();
    engine.add_rules([
        ValidationRule::new("minimum-content", |ctx: &ProposalContext| {
            Ok(validate_minimum_content(&ctx.input))
        })
        .with_code("RN-022"),
        ValidationRule::new("reserved-initiative", |ctx: &ProposalContext| {
            Ok(validate_reserved_initiative(&ctx.input))
        })
        .with_code("RN-020"),
        ValidationRule::new("analogous-matter", |ctx: &ProposalContext| {
            validate_analogous_matter(ctx.repo.as_ref(), &ctx.input, ctx.year, ctx.legislature.as_ref())
        })
        .with_code("RN-023"),
    ]);
    engine
}

/// Composed entry point over the current legislative year.
pub fn validate_proposal_complete(
    repo: Arc<dyn ProposalRepository>,
    input: &ProposalInput,
    legislature: Option<&LegislatureId>,
) -> AggregatedResult {
    let ctx = ProposalContext {
        input: input.clone(),
        repo,
        year: Utc::now().year(),
        legislature: legislature.cloned(),
    };
    proposal_engine().validate(&ctx)
}
