//! Main runner that orchestrates the server, Playwright, and the report
//!
//! Runs the declarative YAML specs from the specs directory first, then
//! the built-in scenarios (login, credit application). Each scenario
//! gets its own browser session; results are aggregated and written as
//! JSON next to the pass/fail report.

use std::path::PathBuf;
use std::time::Instant;
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info};

use crate::config::SuiteConfig;
use crate::error::E2eResult;
use crate::playwright::{PlaywrightConfig, PlaywrightHandle, StepResult};
use crate::report::Reporter;
use crate::scenario;
use crate::server::ServerHandle;
use crate::spec::TestSpec;

/// Result of running a single scenario or spec
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioResult {
    pub name: String,
    pub success: bool,
    pub duration_ms: u64,
    pub steps: Vec<StepResult>,
    pub error: Option<String>,
}

impl ScenarioResult {
    pub fn passed(name: &str, start: Instant, steps: Vec<StepResult>) -> Self {
        Self {
            name: name.to_string(),
            success: true,
            duration_ms: start.elapsed().as_millis() as u64,
            steps,
            error: None,
        }
    }

    pub fn failed(name: &str, start: Instant, steps: Vec<StepResult>, error: String) -> Self {
        Self {
            name: name.to_string(),
            success: false,
            duration_ms: start.elapsed().as_millis() as u64,
            steps,
            error: Some(error),
        }
    }
}

/// Result of running the whole suite
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuiteResult {
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    pub duration_ms: u64,
    pub results: Vec<ScenarioResult>,
}

/// Main suite runner
pub struct SuiteRunner {
    config: SuiteConfig,

    /// Running server handle (if spawned)
    server: Option<ServerHandle>,

    /// Effective base URL: the spawned server's, or the configured one
    base_url: String,
}

impl SuiteRunner {
    pub fn new(config: SuiteConfig) -> Self {
        let base_url = config.base_url.clone();
        Self {
            config,
            server: None,
            base_url,
        }
    }

    /// Spawn the app under test when the config asks for it
    pub async fn start_server(&mut self) -> E2eResult<()> {
        if self.server.is_some() {
            return Ok(()); // Already running
        }

        if let Some(server_config) = self.config.server.clone() {
            let server = ServerHandle::spawn(server_config).await?;
            self.base_url = server.base_url().to_string();
            self.server = Some(server);
        }

        Ok(())
    }

    /// Stop the server
    pub fn stop_server(&mut self) -> E2eResult<()> {
        if let Some(mut server) = self.server.take() {
            server.stop()?;
        }
        Ok(())
    }

    /// Run the YAML specs plus the built-in scenarios, optionally
    /// filtered by name
    pub async fn run(
        &mut self,
        reporter: &mut Reporter,
        name_filter: Option<&str>,
    ) -> E2eResult<SuiteResult> {
        let start = Instant::now();

        self.start_server().await?;

        let mut results = Vec::new();

        let specs = TestSpec::load_all(&self.config.specs_dir)?;
        for spec in specs
            .iter()
            .filter(|s| name_filter.map_or(true, |n| s.name == n))
        {
            results.push(self.run_spec(spec, reporter).await);
        }

        for name in [scenario::LOGIN, scenario::CREDIT_APPLICATION] {
            if name_filter.map_or(true, |n| n == name) {
                results.push(self.run_scenario(name, reporter).await);
            }
        }

        if let Some(name) = name_filter {
            if results.is_empty() {
                return Err(crate::error::E2eError::SpecParse(format!(
                    "Test not found: {}",
                    name
                )));
            }
        }

        let passed = results.iter().filter(|r| r.success).count();
        let failed = results.len() - passed;
        let duration_ms = start.elapsed().as_millis() as u64;

        for result in &results {
            if result.success {
                info!("✓ {} ({} ms)", result.name, result.duration_ms);
            } else {
                error!(
                    "✗ {} - {}",
                    result.name,
                    result.error.as_deref().unwrap_or("unknown error")
                );
            }
        }

        info!("");
        info!(
            "Suite results: {} passed, {} failed ({} ms)",
            passed, failed, duration_ms
        );

        Ok(SuiteResult {
            total: results.len(),
            passed,
            failed,
            duration_ms,
            results,
        })
    }

    /// Run one declarative spec in its own browser session
    async fn run_spec(&self, spec: &TestSpec, reporter: &mut Reporter) -> ScenarioResult {
        let start = Instant::now();
        debug!("Running spec: {}", spec.name);

        let pw = match self.playwright_handle(false, Some((spec.viewport.width, spec.viewport.height))) {
            Ok(pw) => pw,
            Err(e) => return ScenarioResult::failed(&spec.name, start, vec![], e.to_string()),
        };

        match pw.run_steps(&spec.steps).await {
            Ok(outcome) if outcome.success => {
                reporter.pass(format!("spec '{}' completed", spec.name));
                ScenarioResult::passed(&spec.name, start, outcome.steps)
            }
            Ok(outcome) => {
                let reason = outcome
                    .error
                    .unwrap_or_else(|| "unknown error".to_string());
                reporter.fail(format!("spec '{}' failed: {}", spec.name, reason));
                ScenarioResult::failed(&spec.name, start, outcome.steps, reason)
            }
            Err(e) => {
                reporter.fail(format!("spec '{}' aborted: {}", spec.name, e));
                ScenarioResult::failed(&spec.name, start, vec![], e.to_string())
            }
        }
    }

    /// Run one built-in scenario in its own browser session
    async fn run_scenario(&self, name: &str, reporter: &mut Reporter) -> ScenarioResult {
        let start = Instant::now();

        // the credit flow raises a confirm dialog when applying
        let accept_dialogs = name == scenario::CREDIT_APPLICATION;
        let pw = match self.playwright_handle(accept_dialogs, None) {
            Ok(pw) => pw,
            Err(e) => return ScenarioResult::failed(name, start, vec![], e.to_string()),
        };

        let run = match name {
            scenario::LOGIN => scenario::login(&pw, &self.config, reporter).await,
            scenario::CREDIT_APPLICATION => {
                scenario::credit_application(&pw, &self.config, reporter).await
            }
            other => {
                return ScenarioResult::failed(
                    other,
                    start,
                    vec![],
                    format!("unknown scenario: {other}"),
                )
            }
        };

        match run {
            Ok(result) => result,
            Err(e) => {
                reporter.fail(format!("scenario '{}' aborted: {}", name, e));
                ScenarioResult::failed(name, start, vec![], e.to_string())
            }
        }
    }

    fn playwright_handle(
        &self,
        accept_dialogs: bool,
        viewport: Option<(u32, u32)>,
    ) -> E2eResult<PlaywrightHandle> {
        let (width, height) = viewport.unwrap_or((
            self.config.viewport.width,
            self.config.viewport.height,
        ));

        PlaywrightHandle::new(PlaywrightConfig {
            base_url: self.base_url.clone(),
            screenshot_dir: self.config.output_dir.join("screenshots"),
            viewport_width: width,
            viewport_height: height,
            browser: self.config.browser,
            headless: self.config.headless,
            accept_dialogs,
        })
    }

    /// Write suite results to a JSON file
    pub fn write_results(&self, results: &SuiteResult) -> E2eResult<PathBuf> {
        std::fs::create_dir_all(&self.config.output_dir)?;

        let path = self.config.output_dir.join("results.json");
        let json = serde_json::to_string_pretty(results)?;
        std::fs::write(&path, json)?;

        info!("Results written to: {}", path.display());
        Ok(path)
    }
}

impl Drop for SuiteRunner {
    fn drop(&mut self) {
        let _ = self.stop_server();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scenario_result_constructors_track_success() {
        let start = Instant::now();
        let ok = ScenarioResult::passed("login", start, vec![]);
        assert!(ok.success);
        assert!(ok.error.is_none());

        let bad = ScenarioResult::failed("login", start, vec![], "timeout".into());
        assert!(!bad.success);
        assert_eq!(bad.error.as_deref(), Some("timeout"));
    }

    #[test]
    fn suite_results_serialize_round_trip() {
        let suite = SuiteResult {
            total: 2,
            passed: 1,
            failed: 1,
            duration_ms: 1234,
            results: vec![ScenarioResult::passed(
                "credit-application",
                Instant::now(),
                vec![],
            )],
        };
        let json = serde_json::to_string(&suite).unwrap();
        let back: SuiteResult = serde_json::from_str(&json).unwrap();
        assert_eq!(back.total, 2);
        assert_eq!(back.results[0].name, "credit-application");
    }
}
