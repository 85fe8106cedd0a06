// crates/posts-contract/src/config/env.rs
// ============================================================================
// Module: Contract Environment
// Description: Environment-backed configuration for the contract checks.
// Purpose: Centralize env parsing with strict UTF-8 validation.
// Dependencies: std, url
// ============================================================================

//! ## Overview
//! Environment values are parsed with strict UTF-8 enforcement to avoid silent
//! misconfiguration. Invalid UTF-8 or empty values fail closed.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::path::PathBuf;
use std::time::Duration;

use url::Url;

use crate::error::ConfigError;

// ============================================================================
// SECTION: Environment Constants
// ============================================================================

/// Posts collection endpoint checked when no override is given.
pub const DEFAULT_BASE_URL: &str = "https://jsonplaceholder.typicode.com/posts";

/// Environment keys for contract configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContractEnv {
    /// Optional posts collection URL override.
    BaseUrl,
    /// Optional request timeout in seconds (positive integer).
    TimeoutSeconds,
    /// Optional directory holding schema documents instead of the bundled ones.
    SchemaDir,
    /// Optional `tracing` filter directive.
    Log,
}

impl ContractEnv {
    /// Returns the canonical environment variable name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::BaseUrl => "POSTS_CONTRACT_BASE_URL",
            Self::TimeoutSeconds => "POSTS_CONTRACT_TIMEOUT_SEC",
            Self::SchemaDir => "POSTS_CONTRACT_SCHEMA_DIR",
            Self::Log => "POSTS_CONTRACT_LOG",
        }
    }
}

// ============================================================================
// SECTION: Config Types
// ============================================================================

/// Typed contract configuration derived from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContractConfig {
    /// Posts collection URL.
    pub base_url: Url,
    /// Optional request timeout; `None` keeps the HTTP client default.
    pub timeout: Option<Duration>,
    /// Optional schema directory override.
    pub schema_dir: Option<PathBuf>,
}

impl ContractConfig {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when an environment value is not valid UTF-8, is
    /// empty, or fails validation (for example, an invalid URL or timeout).
    pub fn load() -> Result<Self, ConfigError> {
        let base_url = read_env_nonempty(ContractEnv::BaseUrl.as_str())?
            .map(|value| parse_base_url(ContractEnv::BaseUrl.as_str(), &value))
            .unwrap_or_else(|| parse_base_url(ContractEnv::BaseUrl.as_str(), DEFAULT_BASE_URL))?;
        let timeout = read_env_nonempty(ContractEnv::TimeoutSeconds.as_str())?
            .map(|value| parse_timeout_seconds(ContractEnv::TimeoutSeconds.as_str(), &value))
            .transpose()?;
        let schema_dir = read_env_nonempty(ContractEnv::SchemaDir.as_str())?.map(PathBuf::from);
        Ok(Self {
            base_url,
            timeout,
            schema_dir,
        })
    }
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Reads an environment variable and enforces UTF-8 validity.
///
/// # Errors
///
/// Returns [`ConfigError::NotUtf8`] when the variable contains invalid UTF-8.
pub fn read_env_strict(name: &str) -> Result<Option<String>, ConfigError> {
    std::env::var_os(name).map_or(Ok(None), |raw| {
        raw.into_string().map(Some).map_err(|_| ConfigError::NotUtf8(name.to_string()))
    })
}

/// Reads an environment variable and rejects blank values.
///
/// # Errors
///
/// Returns [`ConfigError::Empty`] when the variable is set but blank.
pub fn read_env_nonempty(name: &str) -> Result<Option<String>, ConfigError> {
    match read_env_strict(name)? {
        Some(value) if value.trim().is_empty() => Err(ConfigError::Empty(name.to_string())),
        Some(value) => Ok(Some(value)),
        None => Ok(None),
    }
}

/// Parses an absolute `http`/`https` URL for the posts collection.
///
/// # Errors
///
/// Returns [`ConfigError::Invalid`] when the value is not an absolute HTTP URL.
pub fn parse_base_url(name: &str, raw: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(raw.trim()).map_err(|err| ConfigError::Invalid {
        name: name.to_string(),
        message: format!("must be an absolute url: {err}"),
    })?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(ConfigError::Invalid {
            name: name.to_string(),
            message: format!("must use http or https, got {other}"),
        }),
    }
}

/// Parses a positive timeout value in seconds.
///
/// # Errors
///
/// Returns [`ConfigError::Invalid`] when the value is non-numeric or zero.
pub fn parse_timeout_seconds(name: &str, raw: &str) -> Result<Duration, ConfigError> {
    let invalid = |message: &str| ConfigError::Invalid {
        name: name.to_string(),
        message: message.to_string(),
    };
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(invalid("must be a positive integer number of seconds"));
    }
    let secs: u64 =
        trimmed.parse().map_err(|_| invalid("must be a positive integer number of seconds"))?;
    if secs == 0 {
        return Err(invalid("must be greater than zero"));
    }
    Ok(Duration::from_secs(secs))
}
