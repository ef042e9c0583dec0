//! Error types for the E2E suite

use thiserror::Error;

#[derive(Error, Debug)]
pub enum E2eError {
    #[error("Server failed to start: {0}")]
    ServerStartup(String),

    #[error("Server health check failed after {0} attempts")]
    ServerHealthCheck(usize),

    #[error("Playwright not found. Install with: npx playwright install")]
    PlaywrightNotFound,

    #[error("Playwright error: {0}")]
    Playwright(String),

    #[error("Test spec parse error: {0}")]
    SpecParse(String),

    #[error("No value extracted for '{0}'")]
    MissingValue(String),

    #[error("Verification failed: {context}: observed {observed:.2}, expected {expected:.2} (tolerance {tolerance})")]
    Verification {
        context: String,
        observed: f64,
        expected: f64,
        tolerance: f64,
    },

    #[error("Invalid loan request: {0}")]
    Limits(#[from] demobank_credit::LimitError),

    #[error("Observed value unusable: {0}")]
    Currency(#[from] demobank_credit::CurrencyError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

pub type E2eResult<T> = Result<T, E2eError>;
