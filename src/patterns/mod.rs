// src/patterns/mod.rs
// =============================================================================
// The ingestion side of the cookbook: Terraform patterns scraped from GitHub.
//
// Submodules:
// - classify: service-tag extraction and category rules (pure functions)
// - ingest:   the two scrapers (organization modules, serverless-patterns)
// =============================================================================

mod classify;
mod ingest;

use serde::{Deserialize, Serialize};

pub use ingest::{scrape_module_patterns, scrape_serverless_patterns, ScrapeOptions};

// One reusable Terraform example tied to the AWS services it declares.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TerraformPattern {
    pub title: String,
    pub description: String,
    pub category: String,
    pub services: Vec<String>,
    pub repository_url: String,
    pub example_code: String,
    // Repository-relative file the example code was read from
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern_path: Option<String>,
}
