// src/docs/writer.rs
// =============================================================================
// Writes the rendered pages into the docs tree:
//
//   <docs_dir>/patterns/<category>/index.md
//   <docs_dir>/patterns/<category>/<service-slug>.md
//   <docs_dir>/patterns/<category>/<service-slug>/<example-slug>.md   (optional)
//
// The tree is regenerated on every run; existing files are overwritten.
// =============================================================================

use std::fs;
use std::path::Path;

use super::render::{
    example_slug, generate_category_index, generate_pattern_markdown, generate_service_markdown,
    service_category, service_slug,
};
use crate::catalog::AwsService;
use crate::error::Result;

// Categories that always get an index page, even when empty.
pub const DOCS_CATEGORIES: &[&str] = &["compute", "integration", "storage", "security"];

#[derive(Debug, Clone, Copy, Default)]
pub struct DocsOptions {
    // Also write one page per example next to each service page
    pub example_pages: bool,
}

// What a docs run produced.
#[derive(Debug, Default, PartialEq)]
pub struct DocsSummary {
    pub service_pages: usize,
    pub example_pages: usize,
    pub index_pages: usize,
}

// Renders and writes every page for `services` under `docs_dir`.
pub fn generate_all_docs(services: &[AwsService], docs_dir: &Path, options: DocsOptions) -> Result<DocsSummary> {
    let patterns_dir = docs_dir.join("patterns");
    let mut summary = DocsSummary::default();

    let categories = categories_in_use(services);
    for category in &categories {
        fs::create_dir_all(patterns_dir.join(category))?;
    }

    for service in services {
        let category_dir = patterns_dir.join(service_category(&service.service_name));
        let slug = service_slug(&service.service_name);

        let path = category_dir.join(format!("{}.md", slug));
        write_page(&path, &generate_service_markdown(service)?)?;
        summary.service_pages += 1;

        if options.example_pages && !service.terraform_examples.is_empty() {
            let service_dir = category_dir.join(&slug);
            fs::create_dir_all(&service_dir)?;

            for example in &service.terraform_examples {
                let path = service_dir.join(format!("{}.md", example_slug(service, example)));
                write_page(&path, &generate_pattern_markdown(service, example)?)?;
                summary.example_pages += 1;
            }
        }
    }

    for category in &categories {
        let path = patterns_dir.join(category).join("index.md");
        write_page(&path, &generate_category_index(category, services))?;
        summary.index_pages += 1;
    }

    tracing::info!(
        services = summary.service_pages,
        examples = summary.example_pages,
        indexes = summary.index_pages,
        "Generated documentation with tabbed examples"
    );

    Ok(summary)
}

// The fixed categories first, then any others the services fall into.
fn categories_in_use(services: &[AwsService]) -> Vec<String> {
    let mut categories: Vec<String> = DOCS_CATEGORIES.iter().map(|c| c.to_string()).collect();
    for service in services {
        let category = service_category(&service.service_name);
        if !categories.iter().any(|c| c == category) {
            categories.push(category.to_string());
        }
    }
    categories
}

fn write_page(path: &Path, content: &str) -> Result<()> {
    tracing::debug!(path = %path.display(), "Writing page");
    fs::write(path, content)?;
    Ok(())
}
