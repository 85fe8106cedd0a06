// system-tests/tests/helpers/mod.rs
// ============================================================================
// Module: System Test Helpers
// Description: Shared helpers for posts contract system-tests.
// Purpose: Provide the stub endpoint, harness setup, and artifact utilities.
// Dependencies: system-tests, posts-contract
// ============================================================================

//! ## Overview
//! Shared helpers for posts contract system-tests.
//! Invariants:
//! - Schemas are compiled once per test binary and shared read-only.
//! - Every test writes a summary artifact, even when it panics.

#![allow(dead_code, reason = "Shared helpers are reused across multiple test suites.")]

pub mod posts_stub;
