// crates/posts-contract/src/main.rs
// ============================================================================
// Module: Posts Contract Runner
// Description: Command-line runner for the posts contract scenarios.
// Purpose: Check an endpoint outside the test harness with a clear exit code.
// Dependencies: clap, posts-contract, tokio
// ============================================================================

//! ## Overview
//! `posts-contract run` loads the schemas, runs the selected scenarios in
//! order, prints one verdict line per scenario followed by its diagnostics,
//! and exits non-zero when any scenario fails or errors. Setup and
//! configuration failures abort before any request is sent.

use std::io::Write;
use std::process::ExitCode;

use clap::Parser;
use clap::Subcommand;
use posts_contract::ContractConfig;
use posts_contract::RunOptions;
use posts_contract::Scenario;
use posts_contract::logging;
use posts_contract::runner;

// ============================================================================
// SECTION: CLI Definition
// ============================================================================

/// Posts API contract runner.
#[derive(Parser, Debug)]
#[command(name = "posts-contract", disable_help_subcommand = true)]
struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    command: Commands,
}

/// Top-level commands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Run contract scenarios against the posts endpoint.
    Run(RunOptions),
    /// List scenario names.
    List,
}

// ============================================================================
// SECTION: Entry Point
// ============================================================================

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    logging::init();
    let cli = Cli::parse();
    match cli.command {
        Commands::List => list_scenarios(),
        Commands::Run(options) => run(&options).await,
    }
}

/// Prints every scenario name.
fn list_scenarios() -> ExitCode {
    let mut output = String::new();
    for scenario in Scenario::ALL {
        output.push_str(scenario.name());
        output.push('\n');
    }
    match write_stdout(&output) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => emit_error(&format!("failed to write stdout: {err}")),
    }
}

/// Executes `run`.
async fn run(options: &RunOptions) -> ExitCode {
    let config = match ContractConfig::load() {
        Ok(config) => config,
        Err(err) => return emit_error(&format!("config load failed: {err}")),
    };
    let report = match runner::execute(options, config).await {
        Ok(report) => report,
        Err(err) => return emit_error(&err.to_string()),
    };
    if let Err(err) = write_stdout(&runner::render_report(&report)) {
        return emit_error(&format!("failed to write stdout: {err}"));
    }
    runner::exit_code(&report)
}

// ============================================================================
// SECTION: Output
// ============================================================================

/// Writes text to stdout.
fn write_stdout(text: &str) -> std::io::Result<()> {
    let mut stdout = std::io::stdout();
    stdout.write_all(text.as_bytes())?;
    stdout.flush()
}

/// Emits an error message to stderr and returns a failure exit code.
fn emit_error(message: &str) -> ExitCode {
    let mut stderr = std::io::stderr();
    let _ = writeln!(&mut stderr, "posts-contract: {message}");
    ExitCode::FAILURE
}
