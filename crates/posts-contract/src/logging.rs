// crates/posts-contract/src/logging.rs
// ============================================================================
// Module: Logging
// Description: `tracing` subscriber setup for the runner and test binaries.
// Purpose: Route request, response, and validation events to stderr.
// Dependencies: tracing, tracing-subscriber
// ============================================================================

//! ## Overview
//! Events are filtered by the `POSTS_CONTRACT_LOG` directive (default `warn`)
//! and written to stderr, leaving stdout to the runner's report. Test binaries
//! use the test writer so output is captured per test.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;

use crate::config::ContractEnv;

/// Filter used when `POSTS_CONTRACT_LOG` is unset or invalid.
const DEFAULT_FILTER: &str = "warn";

/// Builds the filter from `POSTS_CONTRACT_LOG`, falling back to [`DEFAULT_FILTER`].
fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(ContractEnv::Log.as_str())
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Installs the global subscriber writing to stderr.
///
/// Leaves an already installed subscriber in place.
pub fn init() {
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .with(env_filter())
        .try_init();
}

/// Installs a subscriber that writes through the test harness capture.
///
/// Safe to call from every test; only the first call installs.
pub fn init_for_tests() {
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_test_writer())
        .with(env_filter())
        .try_init();
}
