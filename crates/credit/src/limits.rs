//! Application bounds enforced by the web demo's form validation.
//!
//! The suite checks a loan request against these bounds before driving
//! the UI; a request outside them would be rejected by the form and the
//! scenario would stall waiting for a result that never renders.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApplicationLimits {
    pub min_amount: f64,
    pub max_amount: f64,
    pub min_term_months: u32,
    pub max_term_months: u32,
}

impl Default for ApplicationLimits {
    fn default() -> Self {
        Self {
            min_amount: 1_000.0,
            max_amount: 1_000_000.0,
            min_term_months: 3,
            max_term_months: 240,
        }
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum LimitError {
    #[error("loan amount {amount} is below the minimum of {min}")]
    AmountTooLow { amount: f64, min: f64 },

    #[error("loan amount {amount} exceeds the maximum of {max}")]
    AmountTooHigh { amount: f64, max: f64 },

    #[error("loan term of {term} months is below the minimum of {min}")]
    TermTooShort { term: u32, min: u32 },

    #[error("loan term of {term} months exceeds the maximum of {max}")]
    TermTooLong { term: u32, max: u32 },
}

impl ApplicationLimits {
    pub fn validate(&self, amount: f64, term_months: u32) -> Result<(), LimitError> {
        if amount < self.min_amount {
            return Err(LimitError::AmountTooLow {
                amount,
                min: self.min_amount,
            });
        }
        if amount > self.max_amount {
            return Err(LimitError::AmountTooHigh {
                amount,
                max: self.max_amount,
            });
        }
        if term_months < self.min_term_months {
            return Err(LimitError::TermTooShort {
                term: term_months,
                min: self.min_term_months,
            });
        }
        if term_months > self.max_term_months {
            return Err(LimitError::TermTooLong {
                term: term_months,
                max: self.max_term_months,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_the_default_request() {
        assert!(ApplicationLimits::default().validate(100_000.0, 36).is_ok());
    }

    #[test]
    fn accepts_the_boundaries() {
        let limits = ApplicationLimits::default();
        assert!(limits.validate(1_000.0, 3).is_ok());
        assert!(limits.validate(1_000_000.0, 240).is_ok());
    }

    #[test]
    fn rejects_out_of_range_requests() {
        let limits = ApplicationLimits::default();
        assert!(matches!(
            limits.validate(999.0, 36),
            Err(LimitError::AmountTooLow { .. })
        ));
        assert!(matches!(
            limits.validate(2_000_000.0, 36),
            Err(LimitError::AmountTooHigh { .. })
        ));
        assert!(matches!(
            limits.validate(100_000.0, 2),
            Err(LimitError::TermTooShort { .. })
        ));
        assert!(matches!(
            limits.validate(100_000.0, 241),
            Err(LimitError::TermTooLong { .. })
        ));
    }
}
