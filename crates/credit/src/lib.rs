//! Reference loan pricing and monetary verification for the DemoBank
//! E2E suite.
//!
//! The web demo under test prices a fixed-rate annuity loan in its own
//! frontend. This crate reproduces that pricing independently so the
//! suite can cross-check every monetary value the UI displays:
//!
//! - [`RateSchedule`] - the nominal monthly rate and the two tax
//!   surcharges folded into the effective rate
//! - [`CreditCalculator`] - the annuity formula with half-up cent
//!   rounding and grouped display formatting
//! - [`ApplicationLimits`] - the amount/term bounds the demo's form
//!   validation enforces
//! - [`parse_display_amount`] - normalization of locale-formatted
//!   display text (`"12.345,67 TL"`) into a canonical decimal
//! - [`verify`] - tolerance comparison of an observed value against
//!   the reference, producing an immutable [`VerificationOutcome`]
//!
//! Everything here is pure and synchronous; browser orchestration and
//! report persistence live in the `demobank-e2e` crate.

pub mod calculator;
pub mod currency;
pub mod limits;
pub mod money;
pub mod rates;
pub mod verify;

pub use calculator::{CreditCalculator, PaymentBreakdown};
pub use currency::{parse_display_amount, CurrencyError};
pub use limits::{ApplicationLimits, LimitError};
pub use money::{format_amount, round_to_cents};
pub use rates::RateSchedule;
pub use verify::{verify, VerificationOutcome};
