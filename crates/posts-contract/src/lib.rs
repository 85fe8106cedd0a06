// crates/posts-contract/src/lib.rs
// ============================================================================
// Module: Posts Contract Library
// Description: Contract checks for the posts collection REST endpoint.
// Purpose: Share schema setup, HTTP access, and response checks across runners.
// Dependencies: jsonschema, reqwest, serde_json, thiserror, tracing, url
// ============================================================================

//! ## Overview
//! This crate checks a posts collection endpoint against a fixed contract:
//! status code, exact `content-type`, and JSON Schema shape (plus optional
//! field-level values). The `system-tests` crate drives these checks against a
//! local stub and the live endpoint; the `posts-contract` binary runs them
//! from the command line.
//!
//! Invariants:
//! - Schema validators are compiled once per process and shared read-only.
//! - Responses are fully read and released before any assertion runs.
//! - A failing scenario never prevents the remaining scenarios from running.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod check;
pub mod client;
pub mod config;
pub mod error;
pub mod logging;
pub mod report;
pub mod request;
pub mod runner;
pub mod scenario;
pub mod schema;

// ============================================================================
// SECTION: Re-exports
// ============================================================================

pub use check::AssertionFailure;
pub use check::CheckMode;
pub use check::CheckOutcome;
pub use check::Expectation;
pub use check::FieldExpectation;
pub use client::HttpResponse;
pub use client::PostsClient;
pub use config::ContractConfig;
pub use error::ConfigError;
pub use error::ContractError;
pub use error::RunError;
pub use error::SetupError;
pub use report::ValidationReport;
pub use request::PostsRequest;
pub use runner::RunOptions;
pub use scenario::Scenario;
pub use scenario::ScenarioResult;
pub use scenario::ScenarioStatus;
pub use scenario::SuiteReport;
pub use scenario::run_scenario;
pub use scenario::run_suite;
pub use schema::SchemaName;
pub use schema::SchemaSet;
pub use schema::SchemaSource;
