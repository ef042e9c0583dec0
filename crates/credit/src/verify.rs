//! Tolerance comparison of observed vs expected monetary values.

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Immutable record of a single monetary comparison.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerificationOutcome {
    pub passed: bool,
    pub context: String,
    pub observed: f64,
    pub expected: f64,
    pub tolerance: f64,
    pub message: String,
}

/// Compare an observed value against the reference within an absolute
/// tolerance. The boundary case `|observed - expected| == tolerance`
/// passes.
pub fn verify(observed: f64, expected: f64, tolerance: f64, context: &str) -> VerificationOutcome {
    let passed = (observed - expected).abs() <= tolerance;
    let message = if passed {
        format!("{context} matches: observed {observed:.2}, expected {expected:.2} (tolerance {tolerance})")
    } else {
        format!("{context} mismatch: observed {observed:.2}, expected {expected:.2} (tolerance {tolerance})")
    };

    debug!(context, observed, expected, tolerance, passed, "compared displayed value");

    VerificationOutcome {
        passed,
        context: context.to_string(),
        observed,
        expected,
        tolerance,
        message,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn passes_within_tolerance() {
        let outcome = verify(6291.57, 6291.57, 0.01, "monthly payment");
        assert!(outcome.passed);
        assert!(outcome.message.contains("monthly payment matches"));
    }

    #[test]
    fn passes_on_the_inclusive_boundary() {
        let outcome = verify(4213.57, 4213.56, 0.01, "monthly payment");
        assert!(outcome.passed);
    }

    #[test]
    fn fails_beyond_tolerance() {
        let outcome = verify(4213.59, 4213.56, 0.01, "balance after credit");
        assert!(!outcome.passed);
        assert!(outcome.message.contains("balance after credit mismatch"));
        assert!(outcome.message.contains("4213.59"));
        assert!(outcome.message.contains("4213.56"));
    }

    #[test]
    fn records_both_values_and_the_tolerance() {
        let outcome = verify(1.0, 2.0, 0.5, "balance");
        assert_eq!(outcome.observed, 1.0);
        assert_eq!(outcome.expected, 2.0);
        assert_eq!(outcome.tolerance, 0.5);
        assert_eq!(outcome.context, "balance");
    }
}
