// src/catalog/mod.rs
// =============================================================================
// The curated AWS service catalog that the documentation is generated from.
//
// Submodules:
// - services: the hand-maintained list of services and their examples
// - example:  fetching an example directory and flattening it to markdown
// - readme:   reading Inputs/Outputs tables out of module READMEs
// - enrich:   filling the catalog in with live GitHub data
//
// JSON field names are camelCase here (serviceName, terraformExamples, ...)
// because the docs site and its tests were written against that shape.
// =============================================================================

mod enrich;
mod example;
mod readme;
mod services;

use serde::{Deserialize, Serialize};

pub use enrich::enrich_services;
pub use services::aws_service_catalog;

// One AWS service with its Terraform module and worked examples.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AwsService {
    pub service_name: String,
    pub description: String,
    pub repository_url: String,
    pub examples_url: String,
    #[serde(default)]
    pub terraform_examples: Vec<TerraformExample>,
    #[serde(default)]
    pub documentation: Documentation,
}

// One worked example inside a service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TerraformExample {
    pub title: String,
    pub url: String,
    #[serde(default)]
    pub services: Vec<String>,
    #[serde(default)]
    pub code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    // Several `## <filename>` sections, each with a fenced code block
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub markdown_content: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Documentation {
    #[serde(default)]
    pub readme: String,
    #[serde(default)]
    pub variables: Vec<DocumentedItem>,
    #[serde(default)]
    pub outputs: Vec<DocumentedItem>,
}

// A module input or output as listed in the README.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentedItem {
    pub name: String,
    pub description: String,
}
