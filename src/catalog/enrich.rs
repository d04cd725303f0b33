// src/catalog/enrich.rs
// =============================================================================
// Fills the curated catalog in with live data from GitHub:
//
// - documentation.readme     <- README.md of the module repository
// - documentation.variables  <- README "Inputs" table
// - documentation.outputs    <- README "Outputs" table
// - example.markdownContent  <- every file of the example directory
//
// Nothing here is fatal. If the README or an example can't be fetched the
// entry keeps its stub values and the run moves on.
// =============================================================================

use std::time::Duration;

use super::example::{fetch_terraform_example, format_example_as_markdown};
use super::readme::parse_module_interface;
use super::{AwsService, TerraformExample};
use crate::github::{fetch_repository_readme, parse_github_url, ContentSource};

// Enriches every service in turn, pausing `pause` between services.
//
// Without a content source (no credential) the catalog is returned as is.
pub async fn enrich_services(
    source: Option<&dyn ContentSource>,
    services: Vec<AwsService>,
    pause: Duration,
) -> Vec<AwsService> {
    let Some(source) = source else {
        tracing::info!("No GitHub credential, returning the basic catalog");
        return services;
    };

    let mut enriched = Vec::with_capacity(services.len());
    for (index, service) in services.into_iter().enumerate() {
        if index > 0 {
            tokio::time::sleep(pause).await;
        }
        println!("  🔧 Enriching: {}", service.service_name);
        enriched.push(enrich_service(source, service).await);
    }

    enriched
}

async fn enrich_service(source: &dyn ContentSource, mut service: AwsService) -> AwsService {
    let repo = match parse_github_url(&service.repository_url) {
        Ok(repo) => repo,
        Err(e) => {
            tracing::warn!(service = %service.service_name, "Skipping enrichment: {}", e);
            return service;
        }
    };

    match fetch_repository_readme(source, &repo.owner, &repo.repo).await {
        Ok(readme) => {
            let interface = parse_module_interface(&readme);
            service.documentation.readme = readme;
            service.documentation.variables = interface.variables;
            service.documentation.outputs = interface.outputs;
        }
        Err(e) => {
            tracing::warn!(service = %service.service_name, "Could not fetch README: {}", e);
        }
    }

    for example in &mut service.terraform_examples {
        enrich_example(source, example).await;
    }

    service
}

async fn enrich_example(source: &dyn ContentSource, example: &mut TerraformExample) {
    let location = match parse_github_url(&example.url) {
        Ok(location) => location,
        Err(e) => {
            tracing::warn!(example = %example.title, "Bad example URL: {}", e);
            return;
        }
    };

    let Some(path) = location.path else {
        tracing::warn!(example = %example.title, "Example URL has no directory path");
        return;
    };

    match fetch_terraform_example(source, &location.owner, &location.repo, &path).await {
        Ok(files) => {
            if let Some(main) = files.files.iter().find(|f| f.name == "main.tf") {
                example.code = main.content.clone();
            }
            example.markdown_content = Some(format_example_as_markdown(&files));
        }
        Err(e) => {
            tracing::warn!(example = %example.title, "Could not fetch example files: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::aws_service_catalog;
    use crate::error::{CookbookError, Result};
    use crate::github::{ContentEntry, Repository};
    use async_trait::async_trait;

    // Serves the Lambda module only; every other repository 404s
    struct LambdaOnly;

    const LAMBDA_README: &str = "# AWS Lambda Terraform module\n\n## Inputs\n\n| Name | Description |\n|---|---|\n| create | Whether to create |\n";

    #[async_trait]
    impl ContentSource for LambdaOnly {
        async fn list_org_repositories(&self, _org: &str) -> Result<Vec<Repository>> {
            Ok(Vec::new())
        }

        async fn list_directory(&self, _owner: &str, repo: &str, path: &str) -> Result<Vec<ContentEntry>> {
            if repo == "terraform-aws-lambda" && path == "examples/simple" {
                return Ok(vec![ContentEntry {
                    name: "main.tf".to_string(),
                    path: "examples/simple/main.tf".to_string(),
                    kind: "file".to_string(),
                }]);
            }
            Err(CookbookError::Api { status: 404, message: "Not Found".to_string() })
        }

        async fn read_file(&self, _owner: &str, repo: &str, path: &str) -> Result<String> {
            match (repo, path) {
                ("terraform-aws-lambda", "README.md") => Ok(LAMBDA_README.to_string()),
                ("terraform-aws-lambda", "examples/simple/main.tf") => {
                    Ok("resource \"aws_lambda_function\" \"this\" {}".to_string())
                }
                _ => Err(CookbookError::Api { status: 404, message: "Not Found".to_string() }),
            }
        }
    }

    #[tokio::test]
    async fn test_without_source_returns_basic_catalog() {
        let services = enrich_services(None, aws_service_catalog(), Duration::ZERO).await;
        assert_eq!(services.len(), 12);
        assert_eq!(services[0].documentation.readme, "");
    }

    #[tokio::test]
    async fn test_enriches_what_it_can_and_skips_the_rest() {
        let services = enrich_services(Some(&LambdaOnly), aws_service_catalog(), Duration::ZERO).await;
        assert_eq!(services.len(), 12);

        let lambda = &services[0];
        assert!(lambda.documentation.readme.starts_with("# AWS Lambda Terraform module"));
        assert_eq!(lambda.documentation.variables.len(), 1);
        assert_eq!(lambda.documentation.variables[0].name, "create");

        let simple = &lambda.terraform_examples[0];
        let markdown = simple.markdown_content.as_deref().unwrap();
        assert!(markdown.contains("## main.tf"));
        assert_eq!(simple.code, "resource \"aws_lambda_function\" \"this\" {}");

        // complete example 404s: stub kept
        assert!(lambda.terraform_examples[1].markdown_content.is_none());

        // other services keep their empty documentation
        assert!(services[1..].iter().all(|s| s.documentation.readme.is_empty()));
    }
}
