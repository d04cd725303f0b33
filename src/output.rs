// src/output.rs
// =============================================================================
// JSON artifacts written by the ingestion flows and read back by `docs`.
//
//   { "patterns": [...], "metadata": { generated_at, total_patterns, categories, ... } }
//   { "services": [...], "metadata": { generated_at, total_services, service_names } }
//
// The metadata block is only ever built from the collection it wraps, inside
// the one constructor, so the counts can't drift from the data.
// =============================================================================

use std::fs;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::catalog::AwsService;
use crate::error::Result;
use crate::patterns::TerraformPattern;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatternMetadata {
    pub generated_at: DateTime<Utc>,
    pub total_patterns: usize,
    pub categories: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_repository: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatternCollection {
    pub patterns: Vec<TerraformPattern>,
    pub metadata: PatternMetadata,
}

impl PatternCollection {
    pub fn from_patterns(patterns: Vec<TerraformPattern>, source_repository: Option<String>) -> Self {
        Self::from_patterns_at(patterns, source_repository, Utc::now())
    }

    fn from_patterns_at(
        patterns: Vec<TerraformPattern>,
        source_repository: Option<String>,
        generated_at: DateTime<Utc>,
    ) -> Self {
        let categories = unique(patterns.iter().map(|p| p.category.as_str()));
        let metadata = PatternMetadata {
            generated_at,
            total_patterns: patterns.len(),
            categories,
            source_repository,
        };
        Self { patterns, metadata }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogMetadata {
    pub generated_at: DateTime<Utc>,
    pub total_services: usize,
    pub service_names: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceCatalog {
    pub services: Vec<AwsService>,
    // Optional on read: hand-edited catalogs often drop it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<CatalogMetadata>,
}

impl ServiceCatalog {
    pub fn from_services(services: Vec<AwsService>) -> Self {
        Self::from_services_at(services, Utc::now())
    }

    fn from_services_at(services: Vec<AwsService>, generated_at: DateTime<Utc>) -> Self {
        let metadata = CatalogMetadata {
            generated_at,
            total_services: services.len(),
            service_names: unique(services.iter().map(|s| s.service_name.as_str())),
        };
        Self {
            services,
            metadata: Some(metadata),
        }
    }
}

// First-seen order, no repeats.
fn unique<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    for value in values {
        if !seen.iter().any(|s| s == value) {
            seen.push(value.to_string());
        }
    }
    seen
}

// Writes `value` to `path` as pretty-printed JSON.
pub fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    fs::write(path, json)?;
    tracing::debug!(path = %path.display(), "Wrote JSON artifact");
    Ok(())
}

// Reads a service catalog written by the `catalog` command.
pub fn read_service_catalog(path: &Path) -> Result<ServiceCatalog> {
    let json = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&json)?)
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why DateTime<Utc> and not a String?
//    - chrono's "serde" feature serializes it as an RFC 3339 string for us
//    - and parses it back when reading, so the type stays checked
//
// 2. What does #[serde(default)] on an Option do?
//    - A missing field deserializes as None instead of failing
//    - skip_serializing_if = "Option::is_none" leaves it out when writing
//
// 3. Why is from_patterns_at private?
//    - Tests need a fixed timestamp; everyone else should get Utc::now()
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::aws_service_catalog;

    fn pattern(title: &str, category: &str) -> TerraformPattern {
        TerraformPattern {
            title: title.to_string(),
            description: String::new(),
            category: category.to_string(),
            services: vec!["lambda".to_string()],
            repository_url: String::new(),
            example_code: String::new(),
            pattern_path: None,
        }
    }

    #[test]
    fn test_pattern_metadata_matches_collection() {
        let patterns = vec![
            pattern("a", "compute"),
            pattern("b", "storage"),
            pattern("c", "compute"),
        ];
        let collection = PatternCollection::from_patterns(patterns, None);

        assert_eq!(collection.metadata.total_patterns, collection.patterns.len());
        assert_eq!(collection.metadata.categories, vec!["compute", "storage"]);
    }

    #[test]
    fn test_empty_collection() {
        let collection = PatternCollection::from_patterns(Vec::new(), None);
        assert_eq!(collection.metadata.total_patterns, 0);
        assert!(collection.metadata.categories.is_empty());

        let json = serde_json::to_value(&collection).unwrap();
        assert_eq!(json["patterns"], serde_json::json!([]));
        assert!(json["metadata"].get("generated_at").is_some());
        assert!(json["metadata"].get("source_repository").is_none());
    }

    #[test]
    fn test_generated_at_is_the_given_instant() {
        let now = Utc::now();
        let collection =
            PatternCollection::from_patterns_at(vec![pattern("a", "compute")], Some("aws-samples/serverless-patterns".to_string()), now);
        assert_eq!(collection.metadata.generated_at, now);
        assert_eq!(
            collection.metadata.source_repository.as_deref(),
            Some("aws-samples/serverless-patterns")
        );
    }

    #[test]
    fn test_catalog_metadata() {
        let catalog = ServiceCatalog::from_services(aws_service_catalog());
        let metadata = catalog.metadata.as_ref().unwrap();

        assert_eq!(metadata.total_services, 12);
        assert_eq!(metadata.service_names.len(), 12);
        assert_eq!(metadata.service_names[0], catalog.services[0].service_name);
    }

    #[test]
    fn test_catalog_round_trips_through_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("terraform-aws-services.json");

        let catalog = ServiceCatalog::from_services(aws_service_catalog());
        write_json(&path, &catalog).unwrap();

        let read = read_service_catalog(&path).unwrap();
        assert_eq!(read, catalog);
    }

    #[test]
    fn test_catalog_read_tolerates_missing_metadata_and_extra_fields() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("services.json");
        fs::write(
            &path,
            r#"{
                "services": [{
                    "serviceName": "Amazon S3",
                    "description": "Object storage.",
                    "repositoryUrl": "https://github.com/terraform-aws-modules/terraform-aws-s3-bucket",
                    "examplesUrl": "",
                    "owner": "someone"
                }],
                "version": 2
            }"#,
        )
        .unwrap();

        let catalog = read_service_catalog(&path).unwrap();
        assert_eq!(catalog.services.len(), 1);
        assert!(catalog.metadata.is_none());
    }

    #[test]
    fn test_read_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_service_catalog(&dir.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, crate::error::CookbookError::Io(_)));
    }
}
