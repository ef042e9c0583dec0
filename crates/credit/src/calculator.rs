//! Monthly-payment reference calculation.
//!
//! Standard annuity pricing: a constant installment that retires the
//! principal plus accrued interest over a fixed number of months, with
//! the tax surcharges folded into the effective monthly rate. Matches
//! the web demo's own pricing at the cent level.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::money::{format_amount, round_to_cents};
use crate::rates::RateSchedule;

/// Reference pricing engine for a fixed-rate annuity loan.
#[derive(Debug, Clone, Copy, Default)]
pub struct CreditCalculator {
    rates: RateSchedule,
}

/// Installment plus the totals derived from it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PaymentBreakdown {
    pub monthly_payment: f64,
    pub total_payment: f64,
    pub total_interest: f64,
}

impl CreditCalculator {
    pub fn new(rates: RateSchedule) -> Self {
        Self { rates }
    }

    pub fn rates(&self) -> &RateSchedule {
        &self.rates
    }

    /// Expected monthly installment, rounded to the nearest cent with
    /// half-up semantics.
    ///
    /// Non-positive principal or a zero term price to `0.0` rather than
    /// an error; the demo's form blocks those inputs, and its own
    /// pricing returns zero for them.
    pub fn monthly_payment(&self, principal: f64, term_months: u32) -> f64 {
        if principal <= 0.0 || term_months == 0 {
            return 0.0;
        }

        let rate = self.rates.effective_monthly_rate();
        if rate <= 0.0 {
            return 0.0;
        }

        let growth = (1.0 + rate).powi(term_months as i32);
        let denominator = growth - 1.0;
        if denominator == 0.0 {
            return 0.0;
        }

        let payment = principal * rate * growth / denominator;
        debug!(principal, term_months, rate, payment, "priced installment");

        round_to_cents(payment)
    }

    /// Display form of [`Self::monthly_payment`]: two fractional
    /// digits, comma-grouped thousands, e.g. `"6,291.57"`.
    pub fn monthly_payment_text(&self, principal: f64, term_months: u32) -> String {
        format_amount(self.monthly_payment(principal, term_months))
    }

    /// Installment plus total payment and total interest over the term.
    pub fn payment_breakdown(&self, principal: f64, term_months: u32) -> PaymentBreakdown {
        let monthly_payment = self.monthly_payment(principal, term_months);
        if monthly_payment == 0.0 {
            return PaymentBreakdown {
                monthly_payment: 0.0,
                total_payment: 0.0,
                total_interest: 0.0,
            };
        }

        let total_payment = monthly_payment * term_months as f64;
        PaymentBreakdown {
            monthly_payment,
            total_payment,
            total_interest: total_payment - principal,
        }
    }
}
