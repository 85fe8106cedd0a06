// crates/posts-contract/src/error.rs
// ============================================================================
// Module: Contract Errors
// Description: Error taxonomy for setup, configuration, and request failures.
// Purpose: Keep failure classes distinct so diagnostics name the root cause.
// Dependencies: thiserror
// ============================================================================

//! ## Overview
//! Three error families exist: [`SetupError`] for schema loading,
//! [`ConfigError`] for environment and CLI configuration, and
//! [`ContractError`] for anything that aborts a single scenario.
//! [`RunError`] wraps whichever of them stops a runner invocation. Assertion
//! mismatches are not errors; they are reported as
//! [`crate::check::AssertionFailure`] values.

use thiserror::Error;

use crate::check::AssertionFailure;
use crate::schema::SchemaName;

/// Schema setup failure.
///
/// # Invariants
/// - Every variant names the schema that failed so the diagnostic is actionable.
/// - The type is `Clone` so a cached setup result can be handed to every caller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SetupError {
    /// Schema document could not be read.
    #[error("schema {schema} missing at {path}: {message}")]
    Missing {
        /// Schema that failed to load.
        schema: SchemaName,
        /// Location that was read.
        path: String,
        /// Underlying I/O message.
        message: String,
    },
    /// Schema document is not valid JSON.
    #[error("schema {schema} is not valid json: {message}")]
    Parse {
        /// Schema that failed to parse.
        schema: SchemaName,
        /// Parser message.
        message: String,
    },
    /// Schema document is not a usable JSON Schema.
    #[error("schema {schema} failed to compile: {message}")]
    Compile {
        /// Schema that failed to compile.
        schema: SchemaName,
        /// Compiler message.
        message: String,
    },
}

/// Configuration failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Environment variable is not valid UTF-8.
    #[error("{0} must be valid UTF-8")]
    NotUtf8(String),
    /// Environment variable is set but empty.
    #[error("{0} must not be empty")]
    Empty(String),
    /// Value failed validation.
    #[error("{name} {message}")]
    Invalid {
        /// Setting name.
        name: String,
        /// Validation message.
        message: String,
    },
}

/// Failure that aborts a single scenario.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContractError {
    /// Schema setup failed before the scenario could run.
    #[error("setup failed: {0}")]
    Setup(#[from] SetupError),
    /// Request URL could not be built from the base URL.
    #[error("invalid url: {0}")]
    InvalidUrl(String),
    /// The request could not be completed.
    #[error("transport failure: {0}")]
    Transport(String),
    /// Response body could not be parsed as JSON.
    #[error("invalid json body (status {status}): {message}")]
    InvalidBody {
        /// Status code of the response that carried the body.
        status: u16,
        /// Parser message.
        message: String,
        /// Status and header failures found before the body was parsed.
        failures: Vec<AssertionFailure>,
    },
}

/// Failure that stops a runner invocation before any scenario result exists.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RunError {
    /// Environment or command-line configuration is invalid.
    #[error("config load failed: {0}")]
    Config(#[from] ConfigError),
    /// Schemas could not be loaded.
    #[error("setup failed: {0}")]
    Setup(#[from] SetupError),
    /// The HTTP client could not be built.
    #[error("{0}")]
    Client(#[from] ContractError),
}
