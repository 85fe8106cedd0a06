// system-tests/src/lib.rs
// ============================================================================
// Module: Posts Contract System Tests Library
// Description: Shared configuration for system test scenarios.
// Purpose: Provide common settings for the posts contract test binaries.
// Dependencies: std
// ============================================================================

//! ## Overview
//! This crate hosts shared configuration used by the system-test binaries in
//! `system-tests/tests`: the stubbed suite, which always runs, and the live
//! suite, which is gated behind the `system-tests` feature.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod config;
