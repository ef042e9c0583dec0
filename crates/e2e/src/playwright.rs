//! Playwright browser automation
//!
//! Drives Playwright through generated Node.js scripts executed with
//! `node`. A whole step list becomes one self-contained script running
//! in a single browser session, so state established by early steps
//! (login cookies, in-page navigation) carries through to later ones.
//! The script records per-step timing, collects extracted element text,
//! and prints a single result marker line that the Rust side parses.

use std::collections::HashMap;
use std::path::PathBuf;
use std::process::{Command, Stdio};
use serde::{Deserialize, Serialize};
use tokio::process::Command as TokioCommand;
use tracing::debug;

use crate::error::{E2eError, E2eResult};
use crate::spec::{TestStep, WaitState};

const RESULT_MARKER: &str = "__E2E_RESULT__";

/// Playwright browser handle
pub struct PlaywrightHandle {
    /// Base URL of the application under test
    base_url: String,

    /// Directory for screenshots
    screenshot_dir: PathBuf,

    /// Viewport dimensions
    viewport_width: u32,
    viewport_height: u32,

    /// Browser type
    browser: Browser,

    /// Run without a visible window
    headless: bool,

    /// Auto-accept confirm/alert dialogs raised by the page
    accept_dialogs: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Browser {
    #[default]
    Chromium,
    Firefox,
    Webkit,
}

impl Browser {
    pub fn as_str(&self) -> &'static str {
        match self {
            Browser::Chromium => "chromium",
            Browser::Firefox => "firefox",
            Browser::Webkit => "webkit",
        }
    }
}

/// Result of executing a single test step
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StepResult {
    pub name: String,
    pub success: bool,
    pub duration_ms: u64,
    #[serde(default)]
    pub error: Option<String>,
}

/// Everything a generated script reports back: per-step results, the
/// text slots captured by extract steps, and the first failure if any.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScriptOutcome {
    pub success: bool,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub steps: Vec<StepResult>,
    #[serde(default)]
    pub extracted: HashMap<String, String>,
}

impl ScriptOutcome {
    /// Text captured by an extract step, or `MissingValue`
    pub fn extracted(&self, key: &str) -> E2eResult<&str> {
        self.extracted
            .get(key)
            .map(String::as_str)
            .ok_or_else(|| E2eError::MissingValue(key.to_string()))
    }
}

impl PlaywrightHandle {
    /// Create a new Playwright handle
    pub fn new(config: PlaywrightConfig) -> E2eResult<Self> {
        // Verify playwright is installed
        Self::check_playwright_installed()?;

        // Create screenshot directory; the script runs from a temp dir,
        // so the path baked into it must be absolute
        std::fs::create_dir_all(&config.screenshot_dir)?;
        let screenshot_dir = config.screenshot_dir.canonicalize()?;

        Ok(Self {
            base_url: config.base_url,
            screenshot_dir,
            viewport_width: config.viewport_width,
            viewport_height: config.viewport_height,
            browser: config.browser,
            headless: config.headless,
            accept_dialogs: config.accept_dialogs,
        })
    }

    /// Check if Playwright is installed
    pub fn check_playwright_installed() -> E2eResult<()> {
        let output = Command::new("npx")
            .args(["playwright", "--version"])
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status();

        match output {
            Ok(status) if status.success() => Ok(()),
            _ => Err(E2eError::PlaywrightNotFound),
        }
    }

    /// Build the Playwright script for a step list
    pub fn build_script(&self, steps: &[TestStep]) -> String {
        let mut script = String::new();

        script.push_str(&format!(
            r#"const {{ chromium, firefox, webkit }} = require('playwright');

(async () => {{
  const browser = await {browser}.launch({{ headless: {headless} }});
  const context = await browser.newContext({{
    viewport: {{ width: {width}, height: {height} }}
  }});
  const page = await context.newPage();
  const baseUrl = {base_url};
"#,
            browser = self.browser.as_str(),
            headless = self.headless,
            width = self.viewport_width,
            height = self.viewport_height,
            base_url = js_str(&self.base_url),
        ));

        if self.accept_dialogs {
            script.push_str("  page.on('dialog', dialog => dialog.accept().catch(() => {}));\n");
        }

        script.push_str(
            r#"
  const results = [];
  const extracted = {};
  let failure = null;

  async function step(name, fn) {
    const t0 = Date.now();
    try {
      await fn();
      results.push({ name, success: true, duration_ms: Date.now() - t0 });
    } catch (err) {
      const error = String((err && err.message) || err);
      results.push({ name, success: false, duration_ms: Date.now() - t0, error });
      throw err;
    }
  }

  try {
"#,
        );

        for (i, test_step) in steps.iter().enumerate() {
            script.push_str(&format!(
                "\n    // Step {}: {}\n",
                i + 1,
                test_step.label()
            ));
            script.push_str(&format!(
                "    await step({}, async () => {{\n{}\n    }});\n",
                js_str(&test_step.label()),
                self.step_to_js(test_step)
            ));
        }

        script.push_str(&format!(
            r#"  }} catch (err) {{
    failure = String((err && err.message) || err);
  }} finally {{
    console.log({marker} + JSON.stringify({{
      success: failure === null,
      error: failure,
      steps: results,
      extracted,
    }}));
    await browser.close();
  }}
}})();
"#,
            marker = js_str(RESULT_MARKER),
        ));

        script
    }

    /// Convert a step to the JavaScript body of its `step()` call
    fn step_to_js(&self, step: &TestStep) -> String {
        match step {
            TestStep::Navigate {
                url,
                wait_for_selector,
            } => {
                let wait = wait_for_selector
                    .as_ref()
                    .map(|s| format!("\n      await page.waitForSelector({});", js_str(s)))
                    .unwrap_or_default();
                format!(
                    "      await page.goto(baseUrl + {});{}",
                    js_str(url),
                    wait
                )
            }
            TestStep::Click {
                selector,
                timeout_ms,
            } => {
                let timeout = timeout_ms.unwrap_or(5000);
                format!(
                    "      await page.click({}, {{ timeout: {} }});",
                    js_str(selector),
                    timeout
                )
            }
            TestStep::Fill {
                selector,
                value,
                clear_first,
            } => {
                let sel = js_str(selector);
                if *clear_first {
                    format!(
                        "      await page.fill({sel}, '');\n      await page.fill({sel}, {});",
                        js_str(value)
                    )
                } else {
                    format!("      await page.fill({sel}, {});", js_str(value))
                }
            }
            TestStep::Press { selector, key } => match selector {
                Some(sel) => format!(
                    "      await page.locator({}).press({});",
                    js_str(sel),
                    js_str(key)
                ),
                None => format!("      await page.keyboard.press({});", js_str(key)),
            },
            TestStep::Wait {
                selector,
                timeout_ms,
                state,
            } => {
                let state_str = match state {
                    WaitState::Visible => "visible",
                    WaitState::Hidden => "hidden",
                };
                format!(
                    "      await page.waitForSelector({}, {{ state: '{}', timeout: {} }});",
                    js_str(selector),
                    state_str,
                    timeout_ms
                )
            }
            TestStep::Sleep { ms } => {
                format!("      await page.waitForTimeout({});", ms)
            }
            TestStep::Assert {
                selector,
                visible,
                text,
                text_contains,
            } => {
                let sel = js_str(selector);
                let mut assertions = Vec::new();

                if let Some(vis) = visible {
                    if *vis {
                        assertions.push(format!(
                            "      if (!(await page.locator({sel}).first().isVisible())) throw new Error('expected ' + {sel} + ' to be visible');"
                        ));
                    } else {
                        assertions.push(format!(
                            "      if (await page.locator({sel}).first().isVisible()) throw new Error('expected ' + {sel} + ' to be hidden');"
                        ));
                    }
                }

                if let Some(t) = text {
                    assertions.push(format!(
                        "      {{ const text = ((await page.locator({sel}).first().textContent()) || '').trim(); if (text !== {expected}) throw new Error('expected ' + {sel} + ' to have text ' + {expected} + ', got ' + text); }}",
                        expected = js_str(t)
                    ));
                }

                if let Some(tc) = text_contains {
                    assertions.push(format!(
                        "      {{ const text = ((await page.locator({sel}).first().textContent()) || ''); if (!text.includes({expected})) throw new Error('expected ' + {sel} + ' to contain ' + {expected}); }}",
                        expected = js_str(tc)
                    ));
                }

                assertions.join("\n")
            }
            TestStep::Extract { selector, key } => {
                format!(
                    "      extracted[{}] = ((await page.locator({}).first().textContent()) || '').trim();",
                    js_str(key),
                    js_str(selector)
                )
            }
            TestStep::Screenshot { name, full_page } => {
                let path = self.screenshot_dir.join(format!("{}.png", name));
                format!(
                    "      await page.screenshot({{ path: {}, fullPage: {} }});",
                    js_str(&path.to_string_lossy()),
                    full_page
                )
            }
            TestStep::Log { message } => {
                format!("      console.log('[TEST] ' + {});", js_str(message))
            }
        }
    }

    /// Execute a step list as one script in one browser session
    pub async fn run_steps(&self, steps: &[TestStep]) -> E2eResult<ScriptOutcome> {
        let script = self.build_script(steps);

        // Write script to temp file
        let temp_dir = tempfile::tempdir()?;
        let script_path = temp_dir.path().join("test.js");
        std::fs::write(&script_path, &script)?;

        debug!("Running Playwright script: {}", script_path.display());

        let output = TokioCommand::new("node")
            .arg(&script_path)
            .current_dir(temp_dir.path())
            .output()
            .await?;

        let stdout = String::from_utf8_lossy(&output.stdout);
        let stderr = String::from_utf8_lossy(&output.stderr);

        Self::parse_outcome(&stdout).ok_or_else(|| {
            E2eError::Playwright(format!(
                "Script produced no result:\nstdout: {}\nstderr: {}",
                stdout, stderr
            ))
        })
    }

    /// Find and decode the result marker line in script output
    fn parse_outcome(stdout: &str) -> Option<ScriptOutcome> {
        let marker = regex::Regex::new(r"(?m)^__E2E_RESULT__(.*)$").ok()?;
        let captured = marker.captures(stdout)?.get(1)?.as_str();
        serde_json::from_str(captured).ok()
    }
}

/// Encode a string as a JavaScript double-quoted literal so selectors
/// and values with quotes or non-ASCII text survive script generation.
fn js_str(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if (c as u32) < 0x20 => {
                out.push_str(&format!("\\u{:04x}", c as u32));
            }
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

/// Configuration for Playwright
#[derive(Debug, Clone)]
pub struct PlaywrightConfig {
    pub base_url: String,
    pub screenshot_dir: PathBuf,
    pub viewport_width: u32,
    pub viewport_height: u32,
    pub browser: Browser,
    pub headless: bool,
    pub accept_dialogs: bool,
}

impl Default for PlaywrightConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:5173".to_string(),
            screenshot_dir: PathBuf::from("test-results/screenshots"),
            viewport_width: 1280,
            viewport_height: 720,
            browser: Browser::Chromium,
            headless: true,
            accept_dialogs: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn handle(accept_dialogs: bool) -> PlaywrightHandle {
        PlaywrightHandle {
            base_url: "http://127.0.0.1:5173".into(),
            screenshot_dir: PathBuf::from("test-results/screenshots"),
            viewport_width: 1280,
            viewport_height: 720,
            browser: Browser::Chromium,
            headless: true,
            accept_dialogs,
        }
    }

    #[test]
    fn js_str_escapes_quotes_and_keeps_unicode() {
        assert_eq!(js_str(r#"input[placeholder='örnek: 100000']"#),
            r#""input[placeholder='örnek: 100000']""#);
        assert_eq!(js_str(r#"say "hi""#), r#""say \"hi\"""#);
        assert_eq!(js_str("a\\b"), r#""a\\b""#);
    }

    #[test]
    fn script_contains_steps_in_order() {
        let steps = vec![
            TestStep::Navigate {
                url: "/".into(),
                wait_for_selector: None,
            },
            TestStep::Fill {
                selector: "input[type='email']".into(),
                value: "demo@demobank.test".into(),
                clear_first: true,
            },
            TestStep::Extract {
                selector: "div".into(),
                key: "balance".into(),
            },
        ];
        let script = handle(false).build_script(&steps);

        let nav = script.find("page.goto(baseUrl").unwrap();
        let fill = script.find("page.fill").unwrap();
        let extract = script.find("extracted[\"balance\"]").unwrap();
        assert!(nav < fill && fill < extract);
        assert!(script.contains("chromium.launch({ headless: true })"));
        assert!(!script.contains("page.on('dialog'"));
    }

    #[test]
    fn script_accepts_dialogs_when_requested() {
        let script = handle(true).build_script(&[TestStep::Sleep { ms: 1 }]);
        assert!(script.contains("page.on('dialog', dialog => dialog.accept()"));
    }

    #[test]
    fn parses_result_marker_from_noisy_stdout() {
        let stdout = "\
[TEST] logging in\n\
__E2E_RESULT__{\"success\":true,\"error\":null,\"steps\":[{\"name\":\"navigate:/\",\"success\":true,\"duration_ms\":412}],\"extracted\":{\"balance_before\":\"35.000,00 TL\"}}\n";
        let outcome = PlaywrightHandle::parse_outcome(stdout).unwrap();
        assert!(outcome.success);
        assert_eq!(outcome.steps.len(), 1);
        assert_eq!(
            outcome.extracted("balance_before").unwrap(),
            "35.000,00 TL"
        );
        assert!(matches!(
            outcome.extracted("missing"),
            Err(E2eError::MissingValue(_))
        ));
    }

    #[test]
    fn missing_marker_yields_none() {
        assert!(PlaywrightHandle::parse_outcome("node crashed\n").is_none());
    }
}
