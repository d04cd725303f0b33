// src/github/graphql.rs
// =============================================================================
// Fetches pattern metadata from aws-samples/serverless-patterns with a single
// GraphQL query instead of one REST call per directory.
//
// The query walks two levels of the HEAD tree:
//
//   <root>/
//     <pattern-dir>/
//       example-pattern.json   <- blob text is read
//
// Every example-pattern.json whose `patternType` is "terraform" becomes a
// PatternSummary. Blobs that aren't valid JSON are skipped silently; one bad
// file in a repository of hundreds shouldn't sink the run.
//
// The query also asks for `rateLimit`, which gets logged after every call.
// =============================================================================

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::client::GraphqlExecutor;
use super::retry::{or_fallback, retry_transient, RetryPolicy};
use crate::error::Result;

pub const PATTERNS_OWNER: &str = "aws-samples";
pub const PATTERNS_REPO: &str = "serverless-patterns";

// "owner/name" form, as recorded in the pattern collection metadata
pub fn patterns_repository() -> String {
    format!("{}/{}", PATTERNS_OWNER, PATTERNS_REPO)
}

const PATTERN_FILE: &str = "example-pattern.json";

pub const PATTERNS_QUERY: &str = r#"
query($owner: String!, $name: String!) {
  rateLimit {
    remaining
    limit
    cost
  }
  repository(owner: $owner, name: $name) {
    object(expression: "HEAD:") {
      ... on Tree {
        entries {
          name
          type
          object {
            ... on Tree {
              entries {
                name
                type
                object {
                  ... on Blob {
                    text
                  }
                }
              }
            }
          }
        }
      }
    }
  }
}
"#;

/// One Terraform pattern described by an example-pattern.json file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatternSummary {
    pub title: String,
    #[serde(default)]
    pub services: Vec<String>,
    pub pattern_type: String,
}

/// The `rateLimit` descriptor GitHub returns alongside query data.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct RateLimit {
    pub remaining: u64,
    pub limit: u64,
    pub cost: u64,
}

impl RateLimit {
    /// Pulls the descriptor out of a response's `data` object, if present.
    pub fn from_data(data: &Value) -> Option<Self> {
        data.get("rateLimit")
            .and_then(|v| serde_json::from_value(v.clone()).ok())
    }

    pub fn describe(&self) -> String {
        format!("Rate limit: {}/{} (cost {})", self.remaining, self.limit, self.cost)
    }
}

/// Runs the patterns query once. Errors propagate.
pub async fn fetch_terraform_patterns(client: &dyn GraphqlExecutor) -> Result<Vec<PatternSummary>> {
    let data = run_patterns_query(client).await?;
    log_rate_limit(&data);
    Ok(process_patterns_response(&data))
}

/// Runs the patterns query under `policy`, never failing.
///
/// Transient errors are retried; if every attempt fails (or the error isn't
/// retryable) the result is an empty list and the failure is logged.
pub async fn fetch_terraform_patterns_with_retries(
    client: &dyn GraphqlExecutor,
    policy: &RetryPolicy,
) -> Vec<PatternSummary> {
    let outcome = retry_transient(policy, || run_patterns_query(client)).await;

    match &outcome {
        Ok(data) => log_rate_limit(data),
        Err(_) => tracing::info!("Rate limit: unavailable (query failed)"),
    }

    or_fallback(outcome.map(|data| process_patterns_response(&data)), Vec::new())
}

async fn run_patterns_query(client: &dyn GraphqlExecutor) -> Result<Value> {
    let variables = serde_json::json!({ "owner": PATTERNS_OWNER, "name": PATTERNS_REPO });
    client.execute(PATTERNS_QUERY, variables).await
}

fn log_rate_limit(data: &Value) {
    if let Some(rate_limit) = RateLimit::from_data(data) {
        tracing::info!(
            remaining = rate_limit.remaining,
            limit = rate_limit.limit,
            cost = rate_limit.cost,
            "{}",
            rate_limit.describe()
        );
    }
}

/// Flattens the tree response into Terraform pattern summaries.
pub fn process_patterns_response(data: &Value) -> Vec<PatternSummary> {
    let root_entries = data
        .pointer("/repository/object/entries")
        .and_then(Value::as_array);

    let Some(root_entries) = root_entries else {
        return Vec::new();
    };

    root_entries
        .iter()
        .filter(|entry| entry.get("type").and_then(Value::as_str) == Some("tree"))
        .filter_map(|entry| entry.pointer("/object/entries").and_then(Value::as_array))
        .flatten()
        .filter(|file| file.get("name").and_then(Value::as_str) == Some(PATTERN_FILE))
        .filter_map(|file| file.pointer("/object/text").and_then(Value::as_str))
        .filter_map(parse_pattern_file)
        .filter(|pattern| pattern.pattern_type == "terraform")
        .collect()
}

fn parse_pattern_file(text: &str) -> Option<PatternSummary> {
    serde_json::from_str(text).ok()
}
