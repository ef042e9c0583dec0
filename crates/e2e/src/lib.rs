//! DemoBank E2E Test Suite
//!
//! This crate drives the DemoBank web demo through a real browser and
//! cross-checks every monetary value the UI displays against the
//! independent reference pricing in `demobank-credit`:
//! - Spawns the web app as a subprocess (or targets a deployed URL)
//! - Controls Playwright via generated Node.js scripts
//! - Runs declarative YAML smoke specs plus built-in Rust scenarios
//! - Verifies displayed amounts within a one-cent tolerance and records
//!   every outcome in a JSON report
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                     SuiteRunner (Rust)                      │
//! ├─────────────────────────────────────────────────────────────┤
//! │  SuiteRunner                                                │
//! │    ├── start_server() -> ServerHandle                       │
//! │    ├── run_spec(spec: TestSpec) -> ScenarioResult           │
//! │    ├── run_scenario(login | credit-application)             │
//! │    └── write_results() -> results.json                      │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Scenario (one browser session per flow)                    │
//! │    ├── steps: navigate, click, fill, wait, extract, ...     │
//! │    ├── extracted text -> parse_display_amount -> f64        │
//! │    └── Verifier.check(context, observed, expected)          │
//! │          └── demobank_credit::verify + Reporter             │
//! └─────────────────────────────────────────────────────────────┘
//! ```

pub mod config;
pub mod error;
pub mod pages;
pub mod playwright;
pub mod report;
pub mod runner;
pub mod scenario;
pub mod server;
pub mod spec;
pub mod verify;

pub use config::SuiteConfig;
pub use error::{E2eError, E2eResult};
pub use report::Reporter;
pub use runner::SuiteRunner;
pub use spec::{TestSpec, TestStep};
