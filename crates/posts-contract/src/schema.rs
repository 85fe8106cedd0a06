// crates/posts-contract/src/schema.rs
// ============================================================================
// Module: Post Schemas
// Description: Loads and compiles the post and post-array JSON Schemas.
// Purpose: Fail fast on unusable schemas and share compiled validators.
// Dependencies: jsonschema, serde_json
// ============================================================================

//! ## Overview
//! Two schema documents describe the contract: one post object and an array of
//! posts. They ship inside the crate and can be replaced by a directory of
//! documents with the same file names. Setup is all-or-nothing: a missing,
//! unparsable, or uncompilable document yields a [`SetupError`] that names
//! the schema.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;
use std::fs;
use std::path::PathBuf;
use std::sync::OnceLock;

use jsonschema::Draft;
use jsonschema::Validator;
use serde::Serialize;
use serde_json::Value;

use crate::config::ContractConfig;
use crate::error::SetupError;
use crate::report::ValidationReport;

// ============================================================================
// SECTION: Bundled Documents
// ============================================================================

/// Bundled single-post schema document.
const POST_SCHEMA: &str = include_str!("../schemas/postSchema.json");
/// Bundled post-array schema document.
const POST_ARRAY_SCHEMA: &str = include_str!("../schemas/postArraySchema.json");

// ============================================================================
// SECTION: Schema Names
// ============================================================================

/// Schemas known to the contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SchemaName {
    /// A single post object.
    Post,
    /// An array of post objects.
    PostArray,
}

impl SchemaName {
    /// All schemas in load order.
    pub const ALL: [Self; 2] = [Self::Post, Self::PostArray];

    /// Returns the resource file name for the schema.
    #[must_use]
    pub const fn file_name(self) -> &'static str {
        match self {
            Self::Post => "postSchema.json",
            Self::PostArray => "postArraySchema.json",
        }
    }

    /// Returns the bundled document text.
    const fn bundled_text(self) -> &'static str {
        match self {
            Self::Post => POST_SCHEMA,
            Self::PostArray => POST_ARRAY_SCHEMA,
        }
    }
}

impl fmt::Display for SchemaName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.file_name())
    }
}

// ============================================================================
// SECTION: Schema Sources
// ============================================================================

/// Where schema documents are read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchemaSource {
    /// Documents compiled into the crate.
    Bundled,
    /// Documents read by file name from a directory.
    Directory(PathBuf),
}

impl SchemaSource {
    /// Selects the source configured for the run.
    #[must_use]
    pub fn from_config(config: &ContractConfig) -> Self {
        config.schema_dir.clone().map_or(Self::Bundled, Self::Directory)
    }

    /// Reads the raw document text for a schema.
    fn read(&self, schema: SchemaName) -> Result<String, SetupError> {
        match self {
            Self::Bundled => Ok(schema.bundled_text().to_string()),
            Self::Directory(dir) => {
                let path = dir.join(schema.file_name());
                fs::read_to_string(&path).map_err(|err| SetupError::Missing {
                    schema,
                    path: path.display().to_string(),
                    message: err.to_string(),
                })
            }
        }
    }
}

// ============================================================================
// SECTION: Compiled Schemas
// ============================================================================

/// Compiled validators for both contract schemas.
///
/// # Invariants
/// - Both validators compiled successfully; a partial set is never constructed.
pub struct SchemaSet {
    /// Validator for a single post.
    post: Validator,
    /// Validator for an array of posts.
    post_array: Validator,
}

impl fmt::Debug for SchemaSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SchemaSet").finish_non_exhaustive()
    }
}

impl SchemaSet {
    /// Loads and compiles both schemas from the given source.
    ///
    /// # Errors
    ///
    /// Returns [`SetupError`] for the first schema that is missing, not JSON,
    /// or not a valid JSON Schema.
    pub fn load(source: &SchemaSource) -> Result<Self, SetupError> {
        let post = compile(SchemaName::Post, &source.read(SchemaName::Post)?)?;
        let post_array = compile(SchemaName::PostArray, &source.read(SchemaName::PostArray)?)?;
        tracing::debug!(?source, "compiled post schemas");
        Ok(Self {
            post,
            post_array,
        })
    }

    /// Returns the bundled schemas, compiled once per process.
    ///
    /// # Errors
    ///
    /// Returns the cached [`SetupError`] when the bundled documents are unusable.
    pub fn bundled() -> Result<&'static Self, SetupError> {
        static BUNDLED: OnceLock<Result<SchemaSet, SetupError>> = OnceLock::new();
        BUNDLED.get_or_init(|| Self::load(&SchemaSource::Bundled)).as_ref().map_err(Clone::clone)
    }

    /// Returns the compiled validator for a schema.
    #[must_use]
    pub const fn validator(&self, schema: SchemaName) -> &Validator {
        match schema {
            SchemaName::Post => &self.post,
            SchemaName::PostArray => &self.post_array,
        }
    }

    /// Validates a JSON value and collects every violation.
    #[must_use]
    pub fn validate(&self, schema: SchemaName, instance: &Value) -> ValidationReport {
        let violations =
            self.validator(schema).iter_errors(instance).map(|err| err.to_string()).collect();
        ValidationReport::from_violations(violations)
    }
}

/// Parses and compiles one schema document.
fn compile(schema: SchemaName, text: &str) -> Result<Validator, SetupError> {
    let document: Value = serde_json::from_str(text).map_err(|err| SetupError::Parse {
        schema,
        message: err.to_string(),
    })?;
    jsonschema::options().with_draft(Draft::Draft7).build(&document).map_err(|err| {
        SetupError::Compile {
            schema,
            message: err.to_string(),
        }
    })
}

// ============================================================================
// SECTION: Tests
// ============================================================================
