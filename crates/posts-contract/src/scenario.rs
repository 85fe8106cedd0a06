// crates/posts-contract/src/scenario.rs
// ============================================================================
// Module: Contract Scenarios
// Description: The four posts endpoint scenarios and the sequential runner.
// Purpose: Pair each request with its expectation and run them independently.
// Dependencies: posts-contract client/check/schema, tracing
// ============================================================================

//! ## Overview
//! Each [`Scenario`] sends one GET and checks status, `content-type`, and
//! schema shape. [`run_suite`] runs scenarios one after another and keeps
//! going after failures so every scenario gets its own verdict.
//!
//! Invariants:
//! - Scenarios share only the read-only [`SchemaSet`] and the HTTP client.
//! - A transport failure or malformed body errors one scenario, not the suite.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::check::AssertionFailure;
use crate::check::CheckMode;
use crate::check::CheckOutcome;
use crate::check::Expectation;
use crate::check::evaluate;
use crate::client::PostsClient;
use crate::error::ContractError;
use crate::request::PostsRequest;
use crate::schema::SchemaName;
use crate::schema::SchemaSet;

/// User id used by the filtered scenarios.
pub const FILTER_USER_ID: u64 = 1;
/// Post id fetched by the single-post scenario.
pub const FETCH_POST_ID: u64 = 2;
/// Title used by the user-and-title scenario.
pub const FILTER_TITLE: &str = "qui est esse";

// ============================================================================
// SECTION: Scenarios
// ============================================================================

/// Contract scenarios against the posts collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Scenario {
    /// `GET /posts`.
    ListAllPosts,
    /// `GET /posts?userId=1`.
    ListPostsByUserId,
    /// `GET /posts/2`.
    FetchPostById,
    /// `GET /posts?userId=1&title=qui est esse`.
    ListPostsByUserIdAndTitle,
}

impl Scenario {
    /// All scenarios in run order.
    pub const ALL: [Self; 4] = [
        Self::ListAllPosts,
        Self::ListPostsByUserId,
        Self::FetchPostById,
        Self::ListPostsByUserIdAndTitle,
    ];

    /// Returns the stable scenario name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::ListAllPosts => "list_all_posts",
            Self::ListPostsByUserId => "list_posts_by_user_id",
            Self::FetchPostById => "fetch_post_by_id",
            Self::ListPostsByUserIdAndTitle => "list_posts_by_user_id_and_title",
        }
    }

    /// Returns the request the scenario sends.
    #[must_use]
    pub fn request(self) -> PostsRequest {
        match self {
            Self::ListAllPosts => PostsRequest::list(),
            Self::ListPostsByUserId => PostsRequest::list().with_user_id(FILTER_USER_ID),
            Self::FetchPostById => PostsRequest::by_id(FETCH_POST_ID),
            Self::ListPostsByUserIdAndTitle => {
                PostsRequest::list().with_user_id(FILTER_USER_ID).with_title(FILTER_TITLE)
            }
        }
    }

    /// Returns what the response must satisfy.
    #[must_use]
    pub fn expectation(self) -> Expectation {
        match self {
            Self::ListAllPosts => Expectation::json_ok(SchemaName::PostArray),
            Self::ListPostsByUserId => {
                Expectation::json_ok(SchemaName::PostArray).with_field("userId", FILTER_USER_ID)
            }
            Self::FetchPostById => {
                Expectation::json_ok(SchemaName::Post).with_field("id", FETCH_POST_ID)
            }
            Self::ListPostsByUserIdAndTitle => Expectation::json_ok(SchemaName::PostArray)
                .with_field("userId", FILTER_USER_ID)
                .with_field("title", FILTER_TITLE),
        }
    }
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Scenario {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL.into_iter().find(|scenario| scenario.name() == value).ok_or_else(|| {
            let known: Vec<&str> = Self::ALL.iter().map(|scenario| scenario.name()).collect();
            format!("unknown scenario {value}; expected one of {}", known.join(", "))
        })
    }
}

// ============================================================================
// SECTION: Results
// ============================================================================

/// Verdict for one scenario.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScenarioStatus {
    /// Every expectation held.
    Passed,
    /// At least one expectation failed.
    Failed,
    /// The scenario could not be evaluated.
    Errored,
}

impl fmt::Display for ScenarioStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Passed => "pass",
            Self::Failed => "fail",
            Self::Errored => "error",
        })
    }
}

/// Outcome of running one scenario.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScenarioResult {
    /// Scenario that ran.
    pub scenario: Scenario,
    /// Check mode used.
    pub mode: CheckMode,
    /// Evaluation outcome, or the error that aborted the scenario.
    pub outcome: Result<CheckOutcome, ContractError>,
}

impl ScenarioResult {
    /// Returns the verdict.
    #[must_use]
    pub fn status(&self) -> ScenarioStatus {
        match &self.outcome {
            Ok(outcome) if outcome.passed() => ScenarioStatus::Passed,
            Ok(_) => ScenarioStatus::Failed,
            Err(_) => ScenarioStatus::Errored,
        }
    }

    /// Returns the failed expectations, including those found before an
    /// invalid body aborted the scenario.
    #[must_use]
    pub fn failures(&self) -> &[AssertionFailure] {
        match &self.outcome {
            Ok(outcome) => &outcome.failures,
            Err(ContractError::InvalidBody {
                failures, ..
            }) => failures,
            Err(_) => &[],
        }
    }

    /// Returns human-readable diagnostics, one per failure or error.
    #[must_use]
    pub fn diagnostics(&self) -> Vec<String> {
        match &self.outcome {
            Ok(outcome) => outcome.failures.iter().map(ToString::to_string).collect(),
            Err(
                err @ ContractError::InvalidBody {
                    failures, ..
                },
            ) => {
                let mut lines: Vec<String> = failures.iter().map(ToString::to_string).collect();
                lines.push(err.to_string());
                lines
            }
            Err(err) => vec![err.to_string()],
        }
    }
}

/// Outcomes of a suite run, in run order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SuiteReport {
    /// Per-scenario results.
    pub results: Vec<ScenarioResult>,
}

impl SuiteReport {
    /// Returns true when every scenario passed.
    #[must_use]
    pub fn all_passed(&self) -> bool {
        self.results.iter().all(|result| result.status() == ScenarioStatus::Passed)
    }

    /// Returns the results that did not pass.
    #[must_use]
    pub fn unsuccessful(&self) -> Vec<&ScenarioResult> {
        self.results.iter().filter(|result| result.status() != ScenarioStatus::Passed).collect()
    }
}

// ============================================================================
// SECTION: Runner
// ============================================================================

/// Sends one request and evaluates the response.
///
/// # Errors
///
/// Returns [`ContractError`] when the request cannot be sent or the body is
/// not JSON.
pub async fn run_check(
    client: &PostsClient,
    schemas: &SchemaSet,
    request: &PostsRequest,
    expectation: &Expectation,
    mode: CheckMode,
) -> Result<CheckOutcome, ContractError> {
    let response = client.fetch(request).await?;
    evaluate(expectation, &response, schemas, mode)
}

/// Runs one scenario.
pub async fn run_scenario(
    client: &PostsClient,
    schemas: &SchemaSet,
    scenario: Scenario,
    mode: CheckMode,
) -> ScenarioResult {
    let outcome =
        run_check(client, schemas, &scenario.request(), &scenario.expectation(), mode).await;
    match &outcome {
        Ok(outcome) => {
            if let Some(report) = &outcome.report {
                tracing::info!(
                    scenario = scenario.name(),
                    success = report.success,
                    violations = report.violations.len(),
                    "{report}"
                );
            }
            for failure in &outcome.failures {
                tracing::warn!(scenario = scenario.name(), "{failure}");
            }
        }
        Err(err) => tracing::error!(scenario = scenario.name(), error = %err, "scenario aborted"),
    }
    ScenarioResult {
        scenario,
        mode,
        outcome,
    }
}

/// Runs scenarios sequentially; a failure never stops later scenarios.
pub async fn run_suite(
    client: &PostsClient,
    schemas: &SchemaSet,
    scenarios: &[Scenario],
    mode: CheckMode,
) -> SuiteReport {
    let mut results = Vec::with_capacity(scenarios.len());
    for scenario in scenarios {
        results.push(run_scenario(client, schemas, *scenario, mode).await);
    }
    SuiteReport {
        results,
    }
}
