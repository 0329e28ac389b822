use thiserror::Error;

use crate::result::AggregatedResult;

/// Raised only by [`RuleEngine::validate_or_throw`](crate::RuleEngine::validate_or_throw).
/// Carries the full report so callers can surface every failing rule,
/// not just the first.
#[derive(Debug, Error)]
#[error("validation failed: {}", .report.errors.join("; "))]
pub struct ValidationError {
    pub report: AggregatedResult,
}
