// src/patterns/ingest.rs
// =============================================================================
// The two ingestion scrapers.
//
// 1. Organization modules (default org: serverless-tf)
//      list repos -> keep Terraform-named ones -> read main.tf -> pattern
//
// 2. aws-samples/serverless-patterns
//      list root -> keep pattern-looking dirs -> list dir -> first infra file
//      -> pattern (code truncated to 1000 chars)
//
// Both run strictly one request at a time with a short pause between items to
// stay under GitHub's secondary rate limits. A failure on one item is logged
// and skipped; only a failure of the top-level listing aborts the run.
// =============================================================================

use std::time::Duration;

use super::classify::{
    category_from_services, description_from_repo, extract_aws_services, is_infrastructure_file,
    is_pattern_directory, is_terraform_module,
};
use super::TerraformPattern;
use crate::error::Result;
use crate::github::{ContentSource, Repository, PATTERNS_OWNER, PATTERNS_REPO};

const EXAMPLE_CODE_LIMIT: usize = 1000;

#[derive(Debug, Clone, Copy)]
pub struct ScrapeOptions {
    // Maximum number of items (repos or directories) to process
    pub limit: usize,
    // Pause between items
    pub pause: Duration,
}

impl Default for ScrapeOptions {
    fn default() -> Self {
        Self {
            limit: 5,
            pause: Duration::from_millis(100),
        }
    }
}

// Keeps repositories whose names mark them as Terraform modules.
pub fn filter_terraform_modules(repositories: Vec<Repository>) -> Vec<Repository> {
    repositories
        .into_iter()
        .filter(|repo| is_terraform_module(&repo.name))
        .collect()
}

// Builds a pattern from a module repository and its Terraform source.
pub fn extract_terraform_pattern(repository: &Repository, terraform: &str) -> TerraformPattern {
    let services = extract_aws_services(terraform);

    TerraformPattern {
        title: repository.name.clone(),
        description: description_from_repo(&repository.name, &services),
        category: category_from_services(&services).to_string(),
        services,
        repository_url: repository.clone_url.clone(),
        example_code: terraform.to_string(),
        pattern_path: Some("main.tf".to_string()),
    }
}

// Scrapes `main.tf` from every Terraform module repository in `org`.
pub async fn scrape_module_patterns(
    source: &dyn ContentSource,
    org: &str,
    options: ScrapeOptions,
) -> Result<Vec<TerraformPattern>> {
    let repositories = source.list_org_repositories(org).await?;
    let modules = filter_terraform_modules(repositories);

    println!("🎯 Found {} Terraform module repositories in {}", modules.len(), org);

    let mut patterns = Vec::new();
    for (index, repository) in modules.iter().take(options.limit).enumerate() {
        if index > 0 {
            tokio::time::sleep(options.pause).await;
        }

        println!("  📦 Processing: {}", repository.name);

        match source.read_file(org, &repository.name, "main.tf").await {
            Ok(content) => {
                let pattern = extract_terraform_pattern(repository, &content);
                if pattern.services.is_empty() {
                    tracing::debug!(repo = %repository.name, "main.tf declares no AWS resources");
                    continue;
                }
                println!("    ✅ Services: {}", pattern.services.join(", "));
                patterns.push(pattern);
            }
            Err(e) => {
                tracing::warn!(repo = %repository.name, "Could not read main.tf: {}", e);
            }
        }
    }

    Ok(patterns)
}

// Scrapes infrastructure files from aws-samples/serverless-patterns.
pub async fn scrape_serverless_patterns(
    source: &dyn ContentSource,
    options: ScrapeOptions,
) -> Result<Vec<TerraformPattern>> {
    let root = source.list_directory(PATTERNS_OWNER, PATTERNS_REPO, "").await?;
    println!("📂 Found {} items in repository root", root.len());

    let directories: Vec<_> = root
        .into_iter()
        .filter(|entry| entry.is_dir() && is_pattern_directory(&entry.name))
        .collect();
    println!("🎯 Found {} potential pattern directories", directories.len());

    let mut patterns = Vec::new();
    for (index, dir) in directories.iter().take(options.limit).enumerate() {
        if index > 0 {
            tokio::time::sleep(options.pause).await;
        }

        println!("  📁 Processing: {}", dir.name);

        match scrape_pattern_directory(source, &dir.name).await {
            Ok(Some(pattern)) => {
                println!("    🎉 Extracted pattern with services: {}", pattern.services.join(", "));
                patterns.push(pattern);
            }
            Ok(None) => {}
            Err(e) => {
                tracing::warn!(dir = %dir.name, "Could not process directory: {}", e);
            }
        }
    }

    Ok(patterns)
}

async fn scrape_pattern_directory(
    source: &dyn ContentSource,
    dir_name: &str,
) -> Result<Option<TerraformPattern>> {
    let entries = source.list_directory(PATTERNS_OWNER, PATTERNS_REPO, dir_name).await?;

    let Some(first) = entries
        .iter()
        .find(|entry| entry.is_file() && is_infrastructure_file(&entry.name))
    else {
        return Ok(None);
    };

    let pattern_path = format!("{}/{}", dir_name, first.name);
    let content = source.read_file(PATTERNS_OWNER, PATTERNS_REPO, &pattern_path).await?;

    let services = extract_aws_services(&content);
    if services.is_empty() {
        return Ok(None);
    }

    Ok(Some(TerraformPattern {
        title: dir_name.to_string(),
        description: format!(
            "Serverless pattern: {} using {}",
            dir_name.replace('-', " "),
            services.join(", ")
        ),
        category: category_from_services(&services).to_string(),
        services,
        repository_url: format!(
            "https://github.com/{}/{}/tree/main/{}",
            PATTERNS_OWNER, PATTERNS_REPO, dir_name
        ),
        example_code: truncate_code(&content, EXAMPLE_CODE_LIMIT),
        pattern_path: Some(pattern_path),
    }))
}

// Cuts on a char boundary and marks the cut with "..."
fn truncate_code(content: &str, limit: usize) -> String {
    match content.char_indices().nth(limit) {
        Some((byte_index, _)) => format!("{}...", &content[..byte_index]),
        None => content.to_string(),
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why `&dyn ContentSource`?
//    - `dyn Trait` means "any type that implements the trait", chosen at runtime
//    - In main it is the real GithubClient; in the tests it is an in-memory fake
//
// 2. What is `let ... else`?
//    - `let Some(first) = ... else { return Ok(None); };`
//    - Binds the value if the pattern matches, otherwise runs the else block
//    - The else block must leave the function (return, continue, break)
//
// 3. Why char_indices().nth(limit) in truncate_code?
//    - Slicing a String by byte index panics in the middle of a multi-byte char
//    - char_indices gives byte positions that are always on a char boundary
// -----------------------------------------------------------------------------
