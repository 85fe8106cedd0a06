// crates/posts-contract/src/config/mod.rs
// ============================================================================
// Module: Contract Configuration
// Description: Centralized configuration for the posts contract checks.
// Purpose: Provide typed access to endpoint, timeout, and schema settings.
// Dependencies: std, url
// ============================================================================

//! ## Overview
//! Contract configuration is read from environment variables and mapped into a
//! small typed structure shared by the runner binary and the system tests.

// ============================================================================
// SECTION: Modules
// ============================================================================

mod env;

// ============================================================================
// SECTION: Tests
// ============================================================================


// ============================================================================
// SECTION: Re-exports
// ============================================================================

pub use env::ContractConfig;
pub use env::ContractEnv;
pub use env::DEFAULT_BASE_URL;
pub use env::parse_base_url;
pub use env::parse_timeout_seconds;
pub use env::read_env_nonempty;
pub use env::read_env_strict;
