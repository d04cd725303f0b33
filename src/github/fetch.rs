// src/github/fetch.rs
// =============================================================================
// Helpers for turning GitHub URLs into API coordinates and fetching the
// README of a repository.
//
// Strategy:
// - Parse the repository URL with the `url` crate to get owner and repo
// - Ask the contents API for README.md (base64-decoded by the client)
//
// The catalog stores human-facing URLs such as
//   https://github.com/terraform-aws-modules/terraform-aws-lambda
//   https://github.com/terraform-aws-modules/terraform-aws-lambda/tree/master/examples/simple
// so both the bare form and the /tree/<branch>/<path> form are understood.
// =============================================================================

use url::Url;

use super::client::ContentSource;
use crate::error::{CookbookError, Result};

// Owner/repo pair (plus an optional in-repo path) parsed from a GitHub URL.
#[derive(Debug, Clone, PartialEq)]
pub struct RepositoryRef {
    pub owner: String,
    pub repo: String,
    // Path after `/tree/<branch>/`, if the URL pointed inside the repo
    pub path: Option<String>,
}

// Parses a GitHub URL into owner, repo and optional directory path.
//
// Supported formats:
//   - https://github.com/owner/repo
//   - https://github.com/owner/repo.git
//   - github.com/owner/repo
//   - https://github.com/owner/repo/tree/main/some/dir
pub fn parse_github_url(input: &str) -> Result<RepositoryRef> {
    // Url::parse needs a scheme; allow the bare "github.com/..." form too
    let with_scheme = if input.contains("://") {
        input.to_string()
    } else {
        format!("https://{}", input)
    };

    let url = Url::parse(&with_scheme).map_err(|_| CookbookError::InvalidUrl(input.to_string()))?;

    let host = url.host_str().unwrap_or_default();
    if host != "github.com" && host != "www.github.com" {
        return Err(CookbookError::InvalidUrl(input.to_string()));
    }

    let segments: Vec<&str> = url
        .path_segments()
        .map(|s| s.filter(|seg| !seg.is_empty()).collect())
        .unwrap_or_default();

    if segments.len() < 2 {
        return Err(CookbookError::InvalidUrl(input.to_string()));
    }

    let owner = segments[0].to_string();
    let repo = segments[1].trim_end_matches(".git").to_string();

    // /tree/<branch>/<path...>
    let path = match segments.get(2..) {
        Some(["tree", _branch, rest @ ..]) if !rest.is_empty() => Some(rest.join("/")),
        _ => None,
    };

    Ok(RepositoryRef { owner, repo, path })
}

// Fetches and decodes README.md from the repository root.
pub async fn fetch_repository_readme(
    source: &dyn ContentSource,
    owner: &str,
    repo: &str,
) -> Result<String> {
    source.read_file(owner, repo, "README.md").await
}
