use std::sync::Arc;
use std::time::Instant;

use tracing::{debug, warn};

use crate::error::ValidationError;
use crate::result::{AggregatedResult, RuleReport, ValidationResult};

type CheckFn<T> = Arc<dyn Fn(&T) -> anyhow::Result<ValidationResult> + Send + Sync>;

/// One named rule over inputs of type `T`.
///
/// The check returns `Err` only for unexpected faults (a repository port
/// failing, not a business-rule violation); the engine degrades such a
/// fault into a synthetic failing result scoped to this rule.
pub struct ValidationRule<T> {
    pub name: String,
    pub rule_code: Option<String>,
    pub enabled: bool,
    pub stop_on_error: bool,
    check: CheckFn<T>,
}

impl<T> Clone for ValidationRule<T> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            rule_code: self.rule_code.clone(),
            enabled: self.enabled,
            stop_on_error: self.stop_on_error,
            check: Arc::clone(&self.check),
        }
    }
}

impl<T> ValidationRule<T> {
    pub fn new(
        name: impl Into<String>,
        check: impl Fn(&T) -> anyhow::Result<ValidationResult> + Send + Sync + 'static,
    ) -> Self {
        Self {
            name: name.into(),
            rule_code: None,
            enabled: true,
            stop_on_error: false,
            check: Arc::new(check),
        }
    }

    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.rule_code = Some(code.into());
        self
    }

    pub fn stop_on_error(mut self) -> Self {
        self.stop_on_error = true;
        self
    }

    pub fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }
}

/// Ordered rule composition. Instances are cheap, stateless after
/// construction and reusable across concurrent validations of different
/// inputs.
pub struct RuleEngine<T> {
    rules: Vec<ValidationRule<T>>,
    stop_on_first_error: bool,
}

impl<T> Clone for RuleEngine<T> {
    fn clone(&self) -> Self {
        Self {
            rules: self.rules.clone(),
            stop_on_first_error: self.stop_on_first_error,
        }
    }
}

impl<T> Default for RuleEngine<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> RuleEngine<T> {
    pub fn new() -> Self {
        Self {
            rules: vec![],
            stop_on_first_error: false,
        }
    }

    /// Global fail-fast: halt at the first rule that produces an error.
    pub fn stop_on_first_error(mut self) -> Self {
        self.stop_on_first_error = true;
        self
    }

    pub fn add_rule(&mut self, rule: ValidationRule<T>) -> &mut Self {
        self.rules.push(rule);
        self
    }

    pub fn add_rules(&mut self, rules: impl IntoIterator<Item = ValidationRule<T>>) -> &mut Self {
        self.rules.extend(rules);
        self
    }

    /// Removes every rule with the given name.
    pub fn remove_rule(&mut self, name: &str) {
        self.rules.retain(|r| r.name != name);
    }

    /// Enables/disables the first rule with the given name, in
    /// registration order. Duplicate names are the caller's concern.
    pub fn set_rule_enabled(&mut self, name: &str, enabled: bool) {
        if let Some(rule) = self.rules.iter_mut().find(|r| r.name == name) {
            rule.enabled = enabled;
        }
    }

    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// Execute enabled rules in registration order and aggregate their
    /// findings. A rule that returns a fault degrades to a synthetic
    /// failing result; it never aborts the batch unless short-circuiting
    /// is configured.
    pub fn validate(&self, input: &T) -> AggregatedResult {
        let started = Instant::now();
        let mut aggregate = AggregatedResult::passing();

        for rule in self.rules.iter().filter(|r| r.enabled) {
            let result = match (rule.check)(input) {
                Ok(result) => result,
                Err(fault) => {
                    warn!(rule = %rule.name, %fault, "rule raised a fault, degrading to error");
                    let mut synthetic = ValidationResult::error(format!(
                        "rule '{}' failed to execute: {}",
                        rule.name, fault
                    ));
                    synthetic.rule_code = rule.rule_code.clone();
                    synthetic
                }
            };
            debug!(rule = %rule.name, valid = result.valid, "rule executed");

            aggregate.valid = aggregate.valid && result.valid;
            aggregate.errors.extend(result.errors.iter().cloned());
            aggregate.warnings.extend(result.warnings.iter().cloned());

            let invalid = !result.valid;
            aggregate.per_rule.push(RuleReport {
                name: rule.name.clone(),
                rule_code: rule.rule_code.clone(),
                result,
            });

            if invalid && (self.stop_on_first_error || rule.stop_on_error) {
                break;
            }
        }

        aggregate.elapsed_ms = started.elapsed().as_millis() as u64;
        aggregate
    }

    /// Like [`validate`](Self::validate), but returns the input unchanged
    /// on success so callers can chain pipeline steps, and a typed error
    /// carrying the full report on failure.
    pub fn validate_or_throw(&self, input: T) -> Result<T, ValidationError> {
        let report = self.validate(&input);
        if report.valid {
            Ok(input)
        } else {
            Err(ValidationError { report })
        }
    }
}
