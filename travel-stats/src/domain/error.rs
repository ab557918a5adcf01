//! Rule contract errors.

/// A hardcoded rule was handed a line label it cannot reason about.
///
/// This is an internal-invariant failure for a single trip, not a fatal
/// error: the classifier logs it and reports the trip as unknown.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{operator} expects {expected}, got line {line:?}")]
pub struct RuleViolation {
    operator: &'static str,
    expected: &'static str,
    line: String,
}

impl RuleViolation {
    /// Create a new violation for `operator` on `line`.
    pub fn new(operator: &'static str, expected: &'static str, line: impl Into<String>) -> Self {
        Self {
            operator,
            expected,
            line: line.into(),
        }
    }

    /// The operator whose rule was violated.
    pub fn operator(&self) -> &'static str {
        self.operator
    }

    /// The offending line label.
    pub fn line(&self) -> &str {
        &self.line
    }
}
