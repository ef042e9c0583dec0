//! Interest-rate configuration for the reference calculator.

use serde::{Deserialize, Serialize};

/// Monthly pricing parameters used by the system under test.
///
/// The nominal rate is a percentage; the two tax surcharges (KKDF and
/// BSMV) are fractions applied on top of it. Defaults mirror the rates
/// the web demo bakes into its own pricing, and the suite config can
/// override them to exercise alternate rate regimes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RateSchedule {
    /// Nominal monthly interest rate, in percent.
    pub nominal_monthly_pct: f64,
    /// Resource Utilization Support Fund surcharge, as a fraction.
    pub kkdf_rate: f64,
    /// Banking and Insurance Transactions Tax surcharge, as a fraction.
    pub bsmv_rate: f64,
}

impl Default for RateSchedule {
    fn default() -> Self {
        Self {
            nominal_monthly_pct: 4.09,
            kkdf_rate: 0.15,
            bsmv_rate: 0.15,
        }
    }
}

impl RateSchedule {
    /// Effective monthly rate as a fraction: the nominal rate inflated
    /// by both surcharges. The default schedule gives `0.05317`.
    pub fn effective_monthly_rate(&self) -> f64 {
        self.nominal_monthly_pct * (1.0 + self.kkdf_rate + self.bsmv_rate) / 100.0
    }
}
