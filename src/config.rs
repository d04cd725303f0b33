// src/config.rs
// =============================================================================
// Runtime configuration, read from the process environment.
//
// A .env file in the working directory is loaded first (via dotenvy), so
// local runs can keep GITHUB_TOKEN out of the shell history.
//
// Variables:
//   GITHUB_TOKEN        bearer credential (required by every fetching command)
//   GITHUB_API_URL      REST base URL, default https://api.github.com
//   GITHUB_GRAPHQL_URL  GraphQL endpoint, default <GITHUB_API_URL>/graphql
// =============================================================================

use crate::error::{CookbookError, Result};

pub const DEFAULT_API_URL: &str = "https://api.github.com";

#[derive(Debug, Clone)]
pub struct Config {
    pub github_token: Option<String>,
    pub api_url: String,
    pub graphql_url: String,
}

impl Config {
    // Loads `.env` (if present) and reads the environment.
    pub fn from_env() -> Self {
        // A missing .env is the normal case in CI
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    // Split out so tests don't have to mutate the real process environment
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let github_token = lookup("GITHUB_TOKEN").filter(|t| !t.trim().is_empty());

        let api_url = lookup("GITHUB_API_URL")
            .unwrap_or_else(|| DEFAULT_API_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        let graphql_url =
            lookup("GITHUB_GRAPHQL_URL").unwrap_or_else(|| format!("{}/graphql", api_url));

        Self { github_token, api_url, graphql_url }
    }

    // Returns the token or fails with `MissingToken`.
    //
    // Fetching commands call this before building a client, so a missing
    // credential halts the run before any request goes out.
    pub fn require_token(&self) -> Result<&str> {
        self.github_token.as_deref().ok_or(CookbookError::MissingToken)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Config {
        let env: HashMap<String, String> =
            pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        Config::from_lookup(|key| env.get(key).cloned())
    }

    #[test]
    fn test_defaults_without_environment() {
        let config = config_from(&[]);
        assert!(config.github_token.is_none());
        assert_eq!(config.api_url, "https://api.github.com");
        assert_eq!(config.graphql_url, "https://api.github.com/graphql");
    }

    #[test]
    fn test_missing_token_is_an_error() {
        let config = config_from(&[]);
        assert!(matches!(config.require_token(), Err(CookbookError::MissingToken)));
    }

    #[test]
    fn test_blank_token_counts_as_missing() {
        let config = config_from(&[("GITHUB_TOKEN", "  ")]);
        assert!(config.require_token().is_err());
    }

    #[test]
    fn test_token_and_custom_api_url() {
        let config = config_from(&[
            ("GITHUB_TOKEN", "ghp_test"),
            ("GITHUB_API_URL", "https://github.example.com/api/v3/"),
        ]);
        assert_eq!(config.require_token().unwrap(), "ghp_test");
        assert_eq!(config.api_url, "https://github.example.com/api/v3");
        assert_eq!(config.graphql_url, "https://github.example.com/api/v3/graphql");
    }
}
