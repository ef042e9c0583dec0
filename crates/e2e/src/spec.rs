//! Declarative YAML test specification
//!
//! Smoke flows with no oracle logic (navigation checks, form
//! validation) are written as YAML step lists and discovered from the
//! specs directory. Scenarios that need the reference calculator are
//! built in Rust (see `scenario`) from the same step vocabulary.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{E2eError, E2eResult};

/// A complete test specification parsed from YAML
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestSpec {
    /// Unique name for this test
    pub name: String,

    /// Human-readable description
    #[serde(default)]
    pub description: String,

    /// Tags for filtering tests
    #[serde(default)]
    pub tags: Vec<String>,

    /// Viewport size for the browser
    #[serde(default = "default_viewport")]
    pub viewport: Viewport,

    /// Steps to execute in order
    pub steps: Vec<TestStep>,
}

fn default_viewport() -> Viewport {
    Viewport {
        width: 1280,
        height: 720,
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

/// A single step in a test
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum TestStep {
    /// Navigate to a URL (relative to base)
    Navigate {
        url: String,
        #[serde(default)]
        wait_for_selector: Option<String>,
    },

    /// Click an element
    Click {
        selector: String,
        #[serde(default)]
        timeout_ms: Option<u64>,
    },

    /// Fill an input field
    Fill {
        selector: String,
        value: String,
        #[serde(default)]
        clear_first: bool,
    },

    /// Press a key
    Press {
        selector: Option<String>,
        key: String,
    },

    /// Wait for an element to appear
    Wait {
        selector: String,
        #[serde(default = "default_wait_timeout")]
        timeout_ms: u64,
        #[serde(default)]
        state: WaitState,
    },

    /// Wait for a fixed amount of time (use sparingly)
    Sleep { ms: u64 },

    /// Assert something about an element
    Assert {
        selector: String,
        #[serde(default)]
        visible: Option<bool>,
        #[serde(default)]
        text: Option<String>,
        #[serde(default)]
        text_contains: Option<String>,
    },

    /// Capture an element's text content into a named slot
    Extract { selector: String, key: String },

    /// Take a screenshot
    Screenshot {
        name: String,
        #[serde(default)]
        full_page: bool,
    },

    /// Log a message (for debugging)
    Log { message: String },
}

fn default_wait_timeout() -> u64 {
    5000 // 5 seconds default
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WaitState {
    #[default]
    Visible,
    Hidden,
}

impl TestStep {
    /// Short label used in step results and logs
    pub fn label(&self) -> String {
        match self {
            TestStep::Navigate { url, .. } => format!("navigate:{}", url),
            TestStep::Click { selector, .. } => format!("click:{}", selector),
            TestStep::Fill { selector, .. } => format!("fill:{}", selector),
            TestStep::Press { key, .. } => format!("press:{}", key),
            TestStep::Wait { selector, .. } => format!("wait:{}", selector),
            TestStep::Sleep { ms } => format!("sleep:{}ms", ms),
            TestStep::Assert { selector, .. } => format!("assert:{}", selector),
            TestStep::Extract { key, .. } => format!("extract:{}", key),
            TestStep::Screenshot { name, .. } => format!("screenshot:{}", name),
            TestStep::Log { message } => {
                let head: String = message.chars().take(30).collect();
                format!("log:{head}")
            }
        }
    }
}

impl TestSpec {
    /// Parse a test spec from YAML string
    pub fn from_yaml(yaml: &str) -> E2eResult<Self> {
        serde_yaml::from_str(yaml).map_err(E2eError::from)
    }

    /// Parse a test spec from a YAML file
    pub fn from_file(path: &Path) -> E2eResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Load all test specs from a directory
    pub fn load_all(dir: &Path) -> E2eResult<Vec<Self>> {
        let mut specs = Vec::new();

        for entry in walkdir::WalkDir::new(dir)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| {
                e.path()
                    .extension()
                    .map(|ext| ext == "yaml" || ext == "yml")
                    .unwrap_or(false)
            })
        {
            let spec = Self::from_file(entry.path())?;
            specs.push(spec);
        }

        Ok(specs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_login_validation_spec() {
        let yaml = r#"
name: login-validation
description: Rejected credentials surface the error message
tags:
  - auth
  - smoke
steps:
  - action: navigate
    url: /
  - action: click
    selector: "text=Giriş Yap"
  - action: fill
    selector: "input[type='email']"
    value: nobody@example.com
  - action: fill
    selector: "input[type='password']"
    value: wrong
  - action: click
    selector: "button[type='submit']"
  - action: wait
    selector: ".error-message"
"#;
        let spec = TestSpec::from_yaml(yaml).unwrap();
        assert_eq!(spec.name, "login-validation");
        assert_eq!(spec.steps.len(), 6);
        assert_eq!(spec.tags, vec!["auth", "smoke"]);
    }

    #[test]
    fn test_parse_extract_step() {
        let yaml = r#"
name: balance-read
steps:
  - action: extract
    selector: ".account-details"
    key: balance
"#;
        let spec = TestSpec::from_yaml(yaml).unwrap();
        assert!(matches!(
            &spec.steps[0],
            TestStep::Extract { key, .. } if key == "balance"
        ));
    }

    #[test]
    fn test_default_viewport_applies() {
        let yaml = r#"
name: defaults
steps:
  - action: sleep
    ms: 10
"#;
        let spec = TestSpec::from_yaml(yaml).unwrap();
        assert_eq!(spec.viewport.width, 1280);
        assert_eq!(spec.viewport.height, 720);
    }

    #[test]
    fn test_step_labels() {
        let step = TestStep::Fill {
            selector: "input[type='email']".into(),
            value: "user@example.com".into(),
            clear_first: false,
        };
        assert_eq!(step.label(), "fill:input[type='email']");

        let step = TestStep::Extract {
            selector: "div".into(),
            key: "monthly_payment".into(),
        };
        assert_eq!(step.label(), "extract:monthly_payment");
    }
}
