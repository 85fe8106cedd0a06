// crates/posts-contract/src/report.rs
// ============================================================================
// Module: Validation Report
// Description: Library-neutral outcome of validating JSON against a schema.
// Purpose: Keep schema results portable across validator implementations.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! [`ValidationReport`] records whether one JSON value conformed to one schema
//! and, if not, every violation message the validator produced. Response
//! checks attach it to their outcome so callers can log or serialize schema
//! results without depending on the validator crate's error types.

use std::fmt;

use serde::Serialize;

/// Outcome of validating one JSON value against one schema.
///
/// # Invariants
/// - `success` is true exactly when `violations` is empty.
/// - `violations` keep the order reported by the validator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    /// True when the value conforms to the schema.
    pub success: bool,
    /// Violation messages in validator order.
    pub violations: Vec<String>,
}

impl ValidationReport {
    /// Builds a report from collected violation messages.
    #[must_use]
    pub fn from_violations(violations: Vec<String>) -> Self {
        Self {
            success: violations.is_empty(),
            violations,
        }
    }

    /// Returns a passing report.
    #[must_use]
    pub const fn passed() -> Self {
        Self {
            success: true,
            violations: Vec::new(),
        }
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.success {
            return f.write_str("validation succeeded");
        }
        write!(f, "validation failed: {}", self.violations.join("; "))
    }
}
