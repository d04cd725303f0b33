// src/github/client.rs
// =============================================================================
// A thin GitHub API client on top of reqwest.
//
// Endpoints used:
//   GET  /orgs/{org}/repos                       - organization listing
//   GET  /repos/{owner}/{repo}/contents/{path}   - directory listing OR file
//   POST /graphql                                - tree-traversal queries
//
// The pipelines never talk to GithubClient directly. They are written against
// two small traits (ContentSource and GraphqlExecutor) so the tests can hand
// them an in-memory fake instead of the network.
//
// Rust concepts:
// - async-trait: async fns in traits that can be used as `&dyn Trait`
// - #[serde(untagged)]: one endpoint, two response shapes
// =============================================================================

use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use reqwest::header::ACCEPT;
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::config::Config;
use crate::error::{CookbookError, Result};

/// A repository from an organization listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Repository {
    pub name: String,
    pub clone_url: String,
}

/// One item of a directory listing from the contents API.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ContentEntry {
    pub name: String,
    pub path: String,
    /// "file", "dir", "symlink" or "submodule"
    #[serde(rename = "type")]
    pub kind: String,
}

impl ContentEntry {
    pub fn is_dir(&self) -> bool {
        self.kind == "dir"
    }

    pub fn is_file(&self) -> bool {
        self.kind == "file"
    }
}

// The contents endpoint answers with an array for directories and an object
// for files, so we let serde try both shapes.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ContentsResponse {
    Directory(Vec<ContentEntry>),
    File(FileBody),
}

#[derive(Debug, Deserialize)]
struct FileBody {
    #[serde(default)]
    content: Option<String>,
}

/// Read access to repository contents.
#[async_trait]
pub trait ContentSource: Send + Sync {
    async fn list_org_repositories(&self, org: &str) -> Result<Vec<Repository>>;

    async fn list_directory(&self, owner: &str, repo: &str, path: &str) -> Result<Vec<ContentEntry>>;

    /// Returns the decoded UTF-8 text of a single file.
    async fn read_file(&self, owner: &str, repo: &str, path: &str) -> Result<String>;
}

/// Executes a GraphQL query and returns its `data` object.
#[async_trait]
pub trait GraphqlExecutor: Send + Sync {
    async fn execute(&self, query: &str, variables: serde_json::Value) -> Result<serde_json::Value>;
}

pub struct GithubClient {
    http: Client,
    token: String,
    api_url: String,
    graphql_url: String,
}

impl GithubClient {
    /// Builds an authenticated client. Fails with `MissingToken` if the
    /// config carries no credential.
    pub fn from_config(config: &Config) -> Result<Self> {
        let token = config.require_token()?.to_string();

        // GitHub rejects requests without a User-Agent
        let http = Client::builder()
            .user_agent(concat!("tf-cookbook/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(30))
            .build()?;

        Ok(Self {
            http,
            token,
            api_url: config.api_url.clone(),
            graphql_url: config.graphql_url.clone(),
        })
    }

    fn contents_url(&self, owner: &str, repo: &str, path: &str) -> String {
        let path = path.trim_matches('/');
        if path.is_empty() {
            format!("{}/repos/{}/{}/contents", self.api_url, owner, repo)
        } else {
            format!("{}/repos/{}/{}/contents/{}", self.api_url, owner, repo, path)
        }
    }

    async fn send_json<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T> {
        let response = request
            .bearer_auth(&self.token)
            .header(ACCEPT, "application/vnd.github+json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(CookbookError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        Ok(response.json::<T>().await?)
    }
}

#[async_trait]
impl ContentSource for GithubClient {
    async fn list_org_repositories(&self, org: &str) -> Result<Vec<Repository>> {
        let url = format!("{}/orgs/{}/repos", self.api_url, org);
        let request = self
            .http
            .get(&url)
            .query(&[("type", "public"), ("per_page", "100")]);

        self.send_json(request).await
    }

    async fn list_directory(&self, owner: &str, repo: &str, path: &str) -> Result<Vec<ContentEntry>> {
        let url = self.contents_url(owner, repo, path);
        match self.send_json::<ContentsResponse>(self.http.get(&url)).await? {
            ContentsResponse::Directory(entries) => Ok(entries),
            ContentsResponse::File(_) => Err(CookbookError::NotADirectory(path.to_string())),
        }
    }

    async fn read_file(&self, owner: &str, repo: &str, path: &str) -> Result<String> {
        let url = self.contents_url(owner, repo, path);
        match self.send_json::<ContentsResponse>(self.http.get(&url)).await? {
            ContentsResponse::File(FileBody { content: Some(content) }) => {
                decode_base64_content(&content)
            }
            _ => Err(CookbookError::NotAFile(path.to_string())),
        }
    }
}

#[async_trait]
impl GraphqlExecutor for GithubClient {
    async fn execute(&self, query: &str, variables: serde_json::Value) -> Result<serde_json::Value> {
        let payload = serde_json::json!({ "query": query, "variables": variables });
        let mut body: serde_json::Value = self
            .send_json(self.http.post(&self.graphql_url).json(&payload))
            .await?;

        if let Some(errors) = body.get("errors").and_then(|e| e.as_array()) {
            if !errors.is_empty() {
                let messages: Vec<&str> = errors
                    .iter()
                    .filter_map(|e| e.get("message").and_then(|m| m.as_str()))
                    .collect();
                return Err(CookbookError::GraphQl(messages.join("; ")));
            }
        }

        match body.get_mut("data") {
            Some(data) if !data.is_null() => Ok(data.take()),
            _ => Err(CookbookError::GraphQl("response carried no data".to_string())),
        }
    }
}

/// Decodes a base64 file body from the contents API.
///
/// GitHub wraps the encoded text at 60 columns, so whitespace is stripped
/// before decoding.
pub fn decode_base64_content(encoded: &str) -> Result<String> {
    let cleaned: String = encoded.chars().filter(|c| !c.is_whitespace()).collect();

    let bytes = STANDARD
        .decode(cleaned.as_bytes())
        .map_err(|e| CookbookError::Decode(e.to_string()))?;

    String::from_utf8(bytes).map_err(|e| CookbookError::Decode(e.to_string()))
}
