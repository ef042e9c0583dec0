//! Suite configuration
//!
//! Loaded from an `e2e.yaml` file with every field defaulted, so a
//! missing file or a partial file both work; the harness CLI can
//! override the common knobs on top.

use std::path::{Path, PathBuf};
use serde::{Deserialize, Serialize};

use demobank_credit::{ApplicationLimits, RateSchedule};

use crate::error::E2eResult;
use crate::playwright::Browser;
use crate::server::ServerConfig;
use crate::spec::Viewport;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SuiteConfig {
    /// Base URL of a deployed instance; replaced by the spawned
    /// server's URL when `server` is configured
    pub base_url: String,

    pub browser: Browser,
    pub headless: bool,
    pub viewport: Viewport,

    /// Account used by the login and credit scenarios
    pub credentials: Credentials,

    /// Loan request driven through the credit-application flow
    pub loan: LoanRequestConfig,

    /// Rate schedule for the reference calculator
    pub rates: RateSchedule,

    /// Form bounds checked before driving the credit flow
    pub limits: ApplicationLimits,

    /// Absolute tolerance for monetary comparisons
    pub tolerance: f64,

    /// Directory of declarative YAML specs
    pub specs_dir: PathBuf,

    /// Directory for results, report and screenshots
    pub output_dir: PathBuf,

    /// Spawn the app locally when set; otherwise `base_url` is used
    pub server: Option<ServerConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Default for Credentials {
    fn default() -> Self {
        Self {
            email: "demo@demobank.test".to_string(),
            password: "Demo123!".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct LoanRequestConfig {
    pub amount: f64,
    pub term_months: u32,
}

impl Default for LoanRequestConfig {
    fn default() -> Self {
        Self {
            amount: 100_000.0,
            term_months: 36,
        }
    }
}

impl Default for SuiteConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:5173".to_string(),
            browser: Browser::Chromium,
            headless: true,
            viewport: Viewport {
                width: 1280,
                height: 720,
            },
            credentials: Credentials::default(),
            loan: LoanRequestConfig::default(),
            rates: RateSchedule::default(),
            limits: ApplicationLimits::default(),
            tolerance: 0.01,
            specs_dir: PathBuf::from("crates/e2e/specs"),
            output_dir: PathBuf::from("test-results"),
            server: None,
        }
    }
}

impl SuiteConfig {
    /// Parse a config file
    pub fn load(path: &Path) -> E2eResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_yaml::from_str(&content)?)
    }

    /// Parse a config file, or fall back to defaults when it is absent
    pub fn load_or_default(path: &Path) -> E2eResult<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }
}
