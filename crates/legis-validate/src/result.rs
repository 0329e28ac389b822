use serde::{Deserialize, Serialize};

/// Outcome of a single rule. Built with the consuming helpers below and
/// treated as immutable once returned.
///
/// Two severities only: errors block the operation, warnings are recorded
/// and surfaced but never block.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ValidationResult {
    pub valid: bool,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    pub rule_code: Option<String>,
}

impl ValidationResult {
    pub fn ok() -> Self {
        Self {
            valid: true,
            errors: vec![],
            warnings: vec![],
            rule_code: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::ok().with_error(message)
    }

    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.rule_code = Some(code.into());
        self
    }

    pub fn with_error(mut self, message: impl Into<String>) -> Self {
        self.valid = false;
        self.errors.push(message.into());
        self
    }

    pub fn with_warning(mut self, message: impl Into<String>) -> Self {
        self.warnings.push(message.into());
        self
    }

    /// Absorb another result's findings; validity is the conjunction.
    pub fn merge(mut self, other: ValidationResult) -> Self {
        self.valid = self.valid && other.valid;
        self.errors.extend(other.errors);
        self.warnings.extend(other.warnings);
        self
    }
}

/// Per-rule entry in an [`AggregatedResult`]. Rules skipped by a
/// short-circuit do not produce an entry.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RuleReport {
    pub name: String,
    pub rule_code: Option<String>,
    pub result: ValidationResult,
}

/// Aggregate outcome of one engine run. Owned by the caller, built fresh
/// per invocation.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AggregatedResult {
    pub valid: bool,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    pub per_rule: Vec<RuleReport>,
    pub elapsed_ms: u64,
}

impl AggregatedResult {
    pub fn passing() -> Self {
        Self {
            valid: true,
            errors: vec![],
            warnings: vec![],
            per_rule: vec![],
            elapsed_ms: 0,
        }
    }
}
