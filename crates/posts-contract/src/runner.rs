// crates/posts-contract/src/runner.rs
// ============================================================================
// Module: Suite Runner
// Description: Option handling, execution, and rendering for `posts-contract run`.
// Purpose: Keep the command-line runner's behavior testable without a process.
// Dependencies: clap, posts-contract
// ============================================================================

//! ## Overview
//! [`RunOptions`] is the argument set of `posts-contract run`.
//! [`resolve_config`] layers those options over the environment
//! configuration, [`execute`] loads schemas and runs the selected scenarios in
//! order, and [`render_report`] turns the outcome into the text the binary
//! prints. [`exit_code`] maps the outcome to the process exit status.
//!
//! Invariants:
//! - Configuration and setup failures surface before any request is sent.
//! - Scenarios run in the order given; an empty selection runs all of them.

use std::fmt::Write as _;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Args;

use crate::check::CheckMode;
use crate::client::PostsClient;
use crate::config::ContractConfig;
use crate::config::parse_base_url;
use crate::config::parse_timeout_seconds;
use crate::error::ConfigError;
use crate::error::RunError;
use crate::scenario::Scenario;
use crate::scenario::ScenarioStatus;
use crate::scenario::SuiteReport;
use crate::scenario::run_suite;
use crate::schema::SchemaSet;
use crate::schema::SchemaSource;

// ============================================================================
// SECTION: Options
// ============================================================================

/// Arguments for `run`.
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct RunOptions {
    /// Posts collection URL (overrides `POSTS_CONTRACT_BASE_URL`).
    #[arg(long, value_name = "URL")]
    pub base_url: Option<String>,
    /// Scenario to run; repeat to select several. Defaults to all.
    #[arg(long = "scenario", value_name = "NAME")]
    pub scenarios: Vec<Scenario>,
    /// Also check field values (`userId`, `id`, `title`).
    #[arg(long)]
    pub check_values: bool,
    /// Request timeout in seconds (overrides `POSTS_CONTRACT_TIMEOUT_SEC`).
    #[arg(long, value_name = "SECONDS")]
    pub timeout_sec: Option<String>,
    /// Directory holding `postSchema.json` and `postArraySchema.json`.
    #[arg(long, value_name = "DIR")]
    pub schema_dir: Option<PathBuf>,
}

impl RunOptions {
    /// Returns the scenarios to run, in run order.
    #[must_use]
    pub fn selected_scenarios(&self) -> Vec<Scenario> {
        if self.scenarios.is_empty() { Scenario::ALL.to_vec() } else { self.scenarios.clone() }
    }

    /// Returns the check mode implied by `--check-values`.
    #[must_use]
    pub const fn mode(&self) -> CheckMode {
        if self.check_values { CheckMode::Values } else { CheckMode::Shape }
    }
}

// ============================================================================
// SECTION: Execution
// ============================================================================

/// Applies command-line overrides on top of the environment configuration.
///
/// # Errors
///
/// Returns [`ConfigError`] when `--base-url` or `--timeout-sec` is invalid.
pub fn resolve_config(
    options: &RunOptions,
    mut config: ContractConfig,
) -> Result<ContractConfig, ConfigError> {
    if let Some(base_url) = &options.base_url {
        config.base_url = parse_base_url("--base-url", base_url)?;
    }
    if let Some(timeout) = &options.timeout_sec {
        config.timeout = Some(parse_timeout_seconds("--timeout-sec", timeout)?);
    }
    if let Some(schema_dir) = &options.schema_dir {
        config.schema_dir = Some(schema_dir.clone());
    }
    Ok(config)
}

/// Resolves configuration, loads schemas, and runs the selected scenarios.
///
/// # Errors
///
/// Returns [`RunError`] when configuration is invalid, schemas fail to load,
/// or the HTTP client cannot be built. Scenario failures are reported in the
/// returned [`SuiteReport`], not as errors.
pub async fn execute(options: &RunOptions, config: ContractConfig) -> Result<SuiteReport, RunError> {
    let config = resolve_config(options, config)?;
    let schemas = SchemaSet::load(&SchemaSource::from_config(&config))?;
    let client = PostsClient::from_config(&config)?;
    let scenarios = options.selected_scenarios();
    tracing::info!(
        base_url = %config.base_url,
        scenarios = scenarios.len(),
        mode = ?options.mode(),
        "running posts contract suite"
    );
    Ok(run_suite(&client, &schemas, &scenarios, options.mode()).await)
}

// ============================================================================
// SECTION: Output
// ============================================================================

/// Renders verdict lines, diagnostics, and a totals line.
#[must_use]
pub fn render_report(report: &SuiteReport) -> String {
    let mut output = String::new();
    for result in &report.results {
        let _ = writeln!(output, "{:<5} {}", result.status().to_string(), result.scenario);
        for diagnostic in result.diagnostics() {
            let _ = writeln!(output, "      {diagnostic}");
        }
    }
    let passed =
        report.results.iter().filter(|result| result.status() == ScenarioStatus::Passed).count();
    let _ = writeln!(
        output,
        "{passed} passed, {} failed",
        report.results.len().saturating_sub(passed)
    );
    output
}

/// Returns success only when every scenario passed.
#[must_use]
pub fn exit_code(report: &SuiteReport) -> ExitCode {
    if report.all_passed() { ExitCode::SUCCESS } else { ExitCode::FAILURE }
}
