//! Verdict types returned by the detailed validation API.

use crate::policy::Band;

/// Final outcome of a validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    Accepted,
    Rejected,
    /// Validation was cancelled before every section ran.
    NotEvaluated,
}

/// Detailed result of validating one password.
///
/// Reasons never contain the password itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verdict {
    pub band: Band,
    pub reasons: Vec<String>,
    pub outcome: Outcome,
}

impl Verdict {
    pub(crate) fn cancelled(band: Band, mut reasons: Vec<String>) -> Self {
        reasons.push("Validation cancelled".to_string());
        Self {
            band,
            reasons,
            outcome: Outcome::NotEvaluated,
        }
    }

    pub(crate) fn completed(band: Band, reasons: Vec<String>) -> Self {
        let outcome = if reasons.is_empty() {
            Outcome::Accepted
        } else {
            Outcome::Rejected
        };
        Self {
            band,
            reasons,
            outcome,
        }
    }

    pub fn is_accepted(&self) -> bool {
        self.outcome == Outcome::Accepted
    }
}
