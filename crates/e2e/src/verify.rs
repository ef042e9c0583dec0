//! Reported monetary verification
//!
//! Wraps the pure comparison from `demobank-credit` with the reporting
//! side effect: every outcome lands in the report before a failed
//! comparison is turned into the error that halts the scenario. A
//! scenario cannot continue past a failed financial check, but the
//! report always shows what was compared.

use crate::error::{E2eError, E2eResult};
use crate::report::Reporter;

pub struct Verifier<'a> {
    reporter: &'a mut Reporter,
    tolerance: f64,
}

impl<'a> Verifier<'a> {
    pub fn new(reporter: &'a mut Reporter, tolerance: f64) -> Self {
        Self {
            reporter,
            tolerance,
        }
    }

    /// Compare an observed value against the reference; report the
    /// outcome, then fail the scenario if it exceeded the tolerance
    pub fn check(&mut self, context: &str, observed: f64, expected: f64) -> E2eResult<()> {
        let outcome = demobank_credit::verify(observed, expected, self.tolerance, context);

        if outcome.passed {
            self.reporter.pass(&outcome.message);
            Ok(())
        } else {
            self.reporter.fail(&outcome.message);
            Err(E2eError::Verification {
                context: outcome.context,
                observed: outcome.observed,
                expected: outcome.expected,
                tolerance: outcome.tolerance,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::ReportStatus;

    #[test]
    fn passing_check_records_a_pass_entry() {
        let mut reporter = Reporter::new();
        let mut verifier = Verifier::new(&mut reporter, 0.01);

        verifier.check("monthly payment", 6291.57, 6291.57).unwrap();

        assert_eq!(reporter.entries().len(), 1);
        assert_eq!(reporter.entries()[0].status, ReportStatus::Pass);
    }

    #[test]
    fn failing_check_reports_before_propagating() {
        let mut reporter = Reporter::new();
        let mut verifier = Verifier::new(&mut reporter, 0.01);

        let err = verifier
            .check("balance after credit", 135_000.00, 135_100.00)
            .unwrap_err();

        // the report entry exists even though the check failed
        assert_eq!(reporter.entries().len(), 1);
        assert_eq!(reporter.entries()[0].status, ReportStatus::Fail);
        assert!(matches!(err, E2eError::Verification { .. }));
    }

    #[test]
    fn one_cent_difference_is_within_tolerance() {
        let mut reporter = Reporter::new();
        let mut verifier = Verifier::new(&mut reporter, 0.01);

        assert!(verifier.check("monthly payment", 4213.57, 4213.56).is_ok());
    }
}
