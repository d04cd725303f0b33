// src/github/mod.rs
// =============================================================================
// Everything that talks to GitHub.
//
// Submodules:
// - client:  reqwest-backed REST/GraphQL client + the traits pipelines use
// - fetch:   GitHub URL parsing and README fetching
// - graphql: the serverless-patterns tree query and its response processing
// - retry:   bounded retry with backoff for transient failures
// =============================================================================

mod client;
mod fetch;
mod graphql;
mod retry;

pub use client::{ContentSource, GithubClient, Repository};
// Only fakes implementing ContentSource need to name directory entries
#[cfg(test)]
pub use client::ContentEntry;
pub use fetch::{fetch_repository_readme, parse_github_url};
pub use graphql::{
    fetch_terraform_patterns, fetch_terraform_patterns_with_retries, patterns_repository,
    PATTERNS_OWNER, PATTERNS_REPO,
};
pub use retry::RetryPolicy;
