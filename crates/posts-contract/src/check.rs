// crates/posts-contract/src/check.rs
// ============================================================================
// Module: Response Checks
// Description: Evaluates an HTTP response against the posts contract.
// Purpose: Report every failed expectation for a response in one pass.
// Dependencies: serde_json, jsonschema (via schema)
// ============================================================================

//! ## Overview
//! An [`Expectation`] names the status code, exact `content-type`, schema, and
//! optional field values a response must satisfy. [`evaluate`] checks all of
//! them and collects every mismatch as an [`AssertionFailure`]; it only stops
//! early when the body is not JSON, which is returned as
//! [`ContractError::InvalidBody`].
//!
//! Invariants:
//! - Status and content-type mismatches are both reported; neither hides the other.
//! - An empty body is a failure, never a parse error.

use std::fmt;

use serde::Serialize;
use serde_json::Value;

use crate::client::HttpResponse;
use crate::error::ContractError;
use crate::report::ValidationReport;
use crate::schema::SchemaName;
use crate::schema::SchemaSet;

/// Status code every scenario expects.
pub const EXPECTED_STATUS: u16 = 200;
/// Exact `content-type` every scenario expects.
pub const EXPECTED_CONTENT_TYPE: &str = "application/json; charset=utf-8";

// ============================================================================
// SECTION: Expectations
// ============================================================================

/// How strictly a scenario checks the body.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckMode {
    /// Schema shape only.
    #[default]
    Shape,
    /// Schema shape plus field-level values.
    Values,
}

/// Expected value of one field.
///
/// Applied to each element when the body is an array, otherwise to the body
/// object itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldExpectation {
    /// Field name.
    pub field: String,
    /// Expected JSON value.
    pub expected: Value,
}

impl FieldExpectation {
    /// Creates a field expectation.
    #[must_use]
    pub fn new(field: impl Into<String>, expected: impl Into<Value>) -> Self {
        Self {
            field: field.into(),
            expected: expected.into(),
        }
    }
}

/// Everything a response must satisfy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Expectation {
    /// Expected status code.
    pub status: u16,
    /// Expected `content-type`, compared exactly.
    pub content_type: String,
    /// Schema the parsed body must satisfy.
    pub schema: SchemaName,
    /// Field values checked in [`CheckMode::Values`].
    pub fields: Vec<FieldExpectation>,
}

impl Expectation {
    /// Standard contract: status 200, JSON content type, and the given schema.
    #[must_use]
    pub fn json_ok(schema: SchemaName) -> Self {
        Self {
            status: EXPECTED_STATUS,
            content_type: EXPECTED_CONTENT_TYPE.to_string(),
            schema,
            fields: Vec::new(),
        }
    }

    /// Adds a field-level expectation.
    #[must_use]
    pub fn with_field(mut self, field: impl Into<String>, expected: impl Into<Value>) -> Self {
        self.fields.push(FieldExpectation::new(field, expected));
        self
    }
}

// ============================================================================
// SECTION: Outcomes
// ============================================================================

/// One failed expectation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AssertionFailure {
    /// Status code differs.
    Status {
        /// Expected status.
        expected: u16,
        /// Received status.
        actual: u16,
    },
    /// `content-type` differs or is missing.
    ContentType {
        /// Expected header value.
        expected: String,
        /// Received header value.
        actual: Option<String>,
    },
    /// Body was empty, so nothing could be validated.
    EmptyBody,
    /// Body does not satisfy the schema.
    Schema {
        /// Schema that was applied.
        schema: SchemaName,
        /// Violation messages in validator order.
        violations: Vec<String>,
    },
    /// A field value differs.
    Field {
        /// Location of the field, such as `[3].userId` or `id`.
        path: String,
        /// Expected value.
        expected: Value,
        /// Received value, or `None` when the field is absent.
        actual: Option<Value>,
    },
}

impl fmt::Display for AssertionFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Status {
                expected,
                actual,
            } => write!(f, "status: expected {expected}, got {actual}"),
            Self::ContentType {
                expected,
                actual: Some(actual),
            } => write!(f, "content-type: expected \"{expected}\", got \"{actual}\""),
            Self::ContentType {
                expected,
                actual: None,
            } => write!(f, "content-type: expected \"{expected}\", header missing"),
            Self::EmptyBody => f.write_str("body: empty response body"),
            Self::Schema {
                schema,
                violations,
            } => write!(f, "schema {schema}: {}", violations.join("; ")),
            Self::Field {
                path,
                expected,
                actual: Some(actual),
            } => write!(f, "field {path}: expected {expected}, got {actual}"),
            Self::Field {
                path,
                expected,
                actual: None,
            } => write!(f, "field {path}: expected {expected}, field missing"),
        }
    }
}

/// Result of evaluating one response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckOutcome {
    /// Failures in check order.
    pub failures: Vec<AssertionFailure>,
    /// Schema validation report, when the body was validated.
    pub report: Option<ValidationReport>,
}

impl CheckOutcome {
    /// Returns true when no expectation failed.
    #[must_use]
    pub fn passed(&self) -> bool {
        self.failures.is_empty()
    }
}

// ============================================================================
// SECTION: Evaluation
// ============================================================================

/// Evaluates a response against an expectation.
///
/// Field expectations are only applied in [`CheckMode::Values`].
///
/// # Errors
///
/// Returns [`ContractError::InvalidBody`] when a non-empty body is not JSON;
/// the error keeps the status and content-type failures already found.
pub fn evaluate(
    expectation: &Expectation,
    response: &HttpResponse,
    schemas: &SchemaSet,
    mode: CheckMode,
) -> Result<CheckOutcome, ContractError> {
    let mut failures = Vec::new();
    if response.status != expectation.status {
        failures.push(AssertionFailure::Status {
            expected: expectation.status,
            actual: response.status,
        });
    }
    if response.content_type.as_deref() != Some(expectation.content_type.as_str()) {
        failures.push(AssertionFailure::ContentType {
            expected: expectation.content_type.clone(),
            actual: response.content_type.clone(),
        });
    }
    if response.body.trim().is_empty() {
        failures.push(AssertionFailure::EmptyBody);
        return Ok(CheckOutcome {
            failures,
            report: None,
        });
    }

    let body: Value = match serde_json::from_str(&response.body) {
        Ok(body) => body,
        Err(err) => {
            return Err(ContractError::InvalidBody {
                status: response.status,
                message: err.to_string(),
                failures,
            });
        }
    };
    let report = schemas.validate(expectation.schema, &body);
    if !report.success {
        failures.push(AssertionFailure::Schema {
            schema: expectation.schema,
            violations: report.violations.clone(),
        });
    }
    if mode == CheckMode::Values {
        check_fields(&expectation.fields, &body, &mut failures);
    }
    Ok(CheckOutcome {
        failures,
        report: Some(report),
    })
}

/// Applies field expectations to an object or to every element of an array.
fn check_fields(fields: &[FieldExpectation], body: &Value, failures: &mut Vec<AssertionFailure>) {
    match body {
        Value::Array(items) => {
            for (index, item) in items.iter().enumerate() {
                check_object_fields(fields, item, &format!("[{index}]."), failures);
            }
        }
        other => check_object_fields(fields, other, "", failures),
    }
}

/// Compares each expected field on a single JSON value.
fn check_object_fields(
    fields: &[FieldExpectation],
    item: &Value,
    prefix: &str,
    failures: &mut Vec<AssertionFailure>,
) {
    for expectation in fields {
        let actual = item.get(&expectation.field);
        if actual != Some(&expectation.expected) {
            failures.push(AssertionFailure::Field {
                path: format!("{prefix}{}", expectation.field),
                expected: expectation.expected.clone(),
                actual: actual.cloned(),
            });
        }
    }
}

// ============================================================================
// SECTION: Tests
// ============================================================================
