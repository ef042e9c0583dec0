//! Built-in scenarios
//!
//! Flows that need the reference calculator are written here in Rust on
//! top of the same step vocabulary the YAML specs use. The credit
//! scenario is the reason this suite exists: it scrapes every monetary
//! value the UI displays during a credit application and cross-checks
//! each one against the independent pricing in `demobank-credit`.

use std::time::Instant;
use tracing::info;

use demobank_credit::{parse_display_amount, CreditCalculator};

use crate::config::SuiteConfig;
use crate::error::E2eResult;
use crate::pages;
use crate::playwright::PlaywrightHandle;
use crate::report::Reporter;
use crate::runner::ScenarioResult;
use crate::spec::{TestStep, WaitState};
use crate::verify::Verifier;

pub const LOGIN: &str = "login";
pub const CREDIT_APPLICATION: &str = "credit-application";

// The demo re-renders some views slowly; waits mirror the patience the
// suite needs against the deployed instance.
const STEP_TIMEOUT_MS: u64 = 22_000;

/// Steps from the landing page to a logged-in session
pub fn login_steps(config: &SuiteConfig) -> Vec<TestStep> {
    vec![
        TestStep::Navigate {
            url: "/".into(),
            wait_for_selector: Some(pages::home::LOGIN_LINK.into()),
        },
        TestStep::Click {
            selector: pages::home::LOGIN_LINK.into(),
            timeout_ms: Some(STEP_TIMEOUT_MS),
        },
        TestStep::Wait {
            selector: pages::login::EMAIL_INPUT.into(),
            timeout_ms: STEP_TIMEOUT_MS,
            state: WaitState::Visible,
        },
        TestStep::Fill {
            selector: pages::login::EMAIL_INPUT.into(),
            value: config.credentials.email.clone(),
            clear_first: true,
        },
        TestStep::Fill {
            selector: pages::login::PASSWORD_INPUT.into(),
            value: config.credentials.password.clone(),
            clear_first: true,
        },
        TestStep::Click {
            selector: pages::login::SUBMIT_BUTTON.into(),
            timeout_ms: Some(STEP_TIMEOUT_MS),
        },
        TestStep::Wait {
            selector: pages::home::ACCOUNT_LINK.into(),
            timeout_ms: STEP_TIMEOUT_MS,
            state: WaitState::Visible,
        },
    ]
}

/// Full credit-application flow: login, read the current balance, file
/// the application, and read back the priced installment and the
/// updated balance
pub fn credit_application_steps(config: &SuiteConfig) -> Vec<TestStep> {
    let mut steps = login_steps(config);

    steps.extend([
        TestStep::Wait {
            selector: pages::account::BALANCE.into(),
            timeout_ms: STEP_TIMEOUT_MS,
            state: WaitState::Visible,
        },
        TestStep::Extract {
            selector: pages::account::BALANCE.into(),
            key: "balance_before".into(),
        },
        TestStep::Click {
            selector: pages::home::CREDIT_APPLICATION_LINK.into(),
            timeout_ms: Some(STEP_TIMEOUT_MS),
        },
        TestStep::Wait {
            selector: pages::credit::LOAN_AMOUNT_INPUT.into(),
            timeout_ms: STEP_TIMEOUT_MS,
            state: WaitState::Visible,
        },
        TestStep::Fill {
            selector: pages::credit::LOAN_AMOUNT_INPUT.into(),
            value: input_number(config.loan.amount),
            clear_first: true,
        },
        TestStep::Fill {
            selector: pages::credit::LOAN_TERM_INPUT.into(),
            value: config.loan.term_months.to_string(),
            clear_first: true,
        },
        TestStep::Click {
            selector: pages::credit::CALCULATE_BUTTON.into(),
            timeout_ms: Some(STEP_TIMEOUT_MS),
        },
        TestStep::Wait {
            selector: pages::credit::MONTHLY_PAYMENT_RESULT.into(),
            timeout_ms: STEP_TIMEOUT_MS,
            state: WaitState::Visible,
        },
        TestStep::Extract {
            selector: pages::credit::MONTHLY_PAYMENT_RESULT.into(),
            key: "monthly_payment".into(),
        },
        // the apply confirmation dialog is auto-accepted by the handle
        TestStep::Click {
            selector: pages::credit::APPLY_BUTTON.into(),
            timeout_ms: Some(STEP_TIMEOUT_MS),
        },
        TestStep::Wait {
            selector: pages::account::BALANCE.into(),
            timeout_ms: STEP_TIMEOUT_MS,
            state: WaitState::Visible,
        },
        TestStep::Extract {
            selector: pages::account::BALANCE.into(),
            key: "balance_after".into(),
        },
        TestStep::Screenshot {
            name: "credit-application".into(),
            full_page: false,
        },
    ]);

    steps
}

/// Login smoke scenario: valid credentials reach the account view
pub async fn login(
    pw: &PlaywrightHandle,
    config: &SuiteConfig,
    reporter: &mut Reporter,
) -> E2eResult<ScenarioResult> {
    let start = Instant::now();
    info!("Running scenario: {}", LOGIN);

    let outcome = pw.run_steps(&login_steps(config)).await?;
    if !outcome.success {
        let reason = outcome
            .error
            .unwrap_or_else(|| "unknown error".to_string());
        reporter.fail(format!("login flow failed: {reason}"));
        return Ok(ScenarioResult::failed(LOGIN, start, outcome.steps, reason));
    }

    reporter.pass("login flow reached the account view");
    Ok(ScenarioResult::passed(LOGIN, start, outcome.steps))
}

/// Credit-application scenario with both financial invariants checked:
/// the displayed installment against the reference calculation, and the
/// post-application balance against `balance before + principal`
pub async fn credit_application(
    pw: &PlaywrightHandle,
    config: &SuiteConfig,
    reporter: &mut Reporter,
) -> E2eResult<ScenarioResult> {
    let start = Instant::now();
    info!("Running scenario: {}", CREDIT_APPLICATION);

    let amount = config.loan.amount;
    let term = config.loan.term_months;

    // A request the form itself would reject can never produce a result
    config.limits.validate(amount, term)?;

    let outcome = pw.run_steps(&credit_application_steps(config)).await?;
    if !outcome.success {
        let reason = outcome
            .error
            .unwrap_or_else(|| "unknown error".to_string());
        reporter.fail(format!("credit application flow failed: {reason}"));
        return Ok(ScenarioResult::failed(
            CREDIT_APPLICATION,
            start,
            outcome.steps,
            reason,
        ));
    }

    let balance_before = parse_display_amount(outcome.extracted("balance_before")?)?;
    let observed_payment = parse_display_amount(outcome.extracted("monthly_payment")?)?;
    let balance_after = parse_display_amount(outcome.extracted("balance_after")?)?;

    let calculator = CreditCalculator::new(config.rates);
    let expected_payment = calculator.monthly_payment(amount, term);
    let expected_balance = balance_before + amount;

    let mut verifier = Verifier::new(reporter, config.tolerance);
    verifier.check("monthly payment", observed_payment, expected_payment)?;
    verifier.check("balance after credit", balance_after, expected_balance)?;

    Ok(ScenarioResult::passed(
        CREDIT_APPLICATION,
        start,
        outcome.steps,
    ))
}

/// Render a number the way a user would type it into the form
fn input_number(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}
