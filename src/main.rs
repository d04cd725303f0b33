// src/main.rs
// =============================================================================
// Entry point of the tf-cookbook CLI.
//
// What happens here:
// 1. Set up logging (RUST_LOG, default "info") and load configuration
// 2. Parse command-line arguments using clap
// 3. Dispatch to the subcommand handler
// 4. Exit with proper code (0 = success, 1 = nothing produced, 2 = error)
//
// Progress lines for the person running the tool go to stdout with println!;
// diagnostics (skipped items, retries, rate limits) go through tracing.
// =============================================================================

mod catalog;       // src/catalog/ - AWS service catalog and its enrichment
mod cli;           // src/cli.rs - command-line parsing
mod config;        // src/config.rs - environment configuration
mod docs;          // src/docs/ - MkDocs page generation
mod error;         // src/error.rs - crate error type
mod github;        // src/github/ - GitHub REST/GraphQL access
mod output;        // src/output.rs - JSON artifacts
mod patterns;      // src/patterns/ - pattern ingestion and classification

use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};
use config::Config;
use error::CookbookError;
use github::{patterns_repository, ContentSource, GithubClient, RetryPolicy};
use output::{PatternCollection, ServiceCatalog};
use patterns::{ScrapeOptions, TerraformPattern};

// Pause between services while enriching the catalog
const ENRICH_PAUSE: Duration = Duration::from_millis(100);

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let exit_code = match run().await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("❌ Error: {:#}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

// Returns:
//   Ok(0) = artifact produced
//   Ok(1) = the flow ran but produced nothing
//   Err   = fatal error (missing credential, unreadable input, ...)
async fn run() -> Result<i32> {
    let cli = Cli::parse();
    let config = Config::from_env();

    match cli.command {
        Commands::Modules { org, limit, output } => handle_modules(&config, &org, limit, &output).await,
        Commands::Patterns { limit, output } => handle_patterns(&config, limit, &output).await,
        Commands::Catalog { output } => handle_catalog(&config, &output).await,
        Commands::Docs { input, docs_dir, examples } => handle_docs(&input, &docs_dir, examples),
        Commands::Graphql { no_retry } => handle_graphql(&config, no_retry).await,
    }
}

// Handles the 'modules' subcommand
async fn handle_modules(config: &Config, org: &str, limit: usize, output: &Path) -> Result<i32> {
    let client = GithubClient::from_config(config)?;
    println!("🔍 Scraping Terraform modules from github.com/{}", org);

    let options = ScrapeOptions { limit, ..ScrapeOptions::default() };
    let found = patterns::scrape_module_patterns(&client, org, options)
        .await
        .with_context(|| format!("listing repositories of {}", org))?;

    write_patterns(found, org.to_string(), output)
}

// Handles the 'patterns' subcommand
async fn handle_patterns(config: &Config, limit: usize, output: &Path) -> Result<i32> {
    let client = GithubClient::from_config(config)?;
    println!("🔍 Scraping {} (limit {})", patterns_repository(), limit);

    let options = ScrapeOptions { limit, ..ScrapeOptions::default() };
    let found = patterns::scrape_serverless_patterns(&client, options)
        .await
        .context("listing the serverless-patterns repository")?;

    write_patterns(found, patterns_repository(), output)
}

fn write_patterns(patterns: Vec<TerraformPattern>, source: String, output: &Path) -> Result<i32> {
    let collection = PatternCollection::from_patterns(patterns, Some(source));
    output::write_json(output, &collection)
        .with_context(|| format!("writing {}", output.display()))?;

    println!(
        "💾 Saved {} pattern(s) across {} categories to {}",
        collection.metadata.total_patterns,
        collection.metadata.categories.len(),
        output.display()
    );

    if collection.patterns.is_empty() {
        println!("⚠️  No patterns were extracted");
        return Ok(1);
    }
    Ok(0)
}

// Handles the 'catalog' subcommand
//
// Unlike the scrapers this works without a token: it just skips enrichment.
async fn handle_catalog(config: &Config, output: &Path) -> Result<i32> {
    let client = match GithubClient::from_config(config) {
        Ok(client) => Some(client),
        Err(CookbookError::MissingToken) => {
            println!("⚠️  GITHUB_TOKEN not set, writing the catalog without README data");
            None
        }
        Err(e) => return Err(e.into()),
    };

    println!("📚 Building AWS service catalog");
    let source = client.as_ref().map(|c| c as &dyn ContentSource);
    let services = catalog::enrich_services(source, catalog::aws_service_catalog(), ENRICH_PAUSE).await;

    let service_catalog = ServiceCatalog::from_services(services);
    output::write_json(output, &service_catalog)
        .with_context(|| format!("writing {}", output.display()))?;

    println!(
        "💾 Saved {} service(s) to {}",
        service_catalog.services.len(),
        output.display()
    );

    if service_catalog.services.is_empty() {
        return Ok(1);
    }
    Ok(0)
}

// Handles the 'docs' subcommand
fn handle_docs(input: &Path, docs_dir: &Path, examples: bool) -> Result<i32> {
    let service_catalog = output::read_service_catalog(input)
        .with_context(|| format!("reading {}", input.display()))?;

    if service_catalog.services.is_empty() {
        println!("⚠️  {} lists no services", input.display());
        return Ok(1);
    }

    println!(
        "📝 Generating docs for {} service(s) into {}",
        service_catalog.services.len(),
        docs_dir.display()
    );

    let options = docs::DocsOptions { example_pages: examples };
    let summary = docs::generate_all_docs(&service_catalog.services, docs_dir, options)
        .with_context(|| format!("writing pages under {}", docs_dir.display()))?;

    println!("✅ Documentation generated:");
    println!("   📄 Service pages: {}", summary.service_pages);
    println!("   🧩 Example pages: {}", summary.example_pages);
    println!("   📋 Index pages: {}", summary.index_pages);
    Ok(0)
}

// Handles the 'graphql' subcommand
async fn handle_graphql(config: &Config, no_retry: bool) -> Result<i32> {
    let client = GithubClient::from_config(config)?;
    println!("🔍 Querying {} over GraphQL", patterns_repository());

    let summaries = if no_retry {
        github::fetch_terraform_patterns(&client).await?
    } else {
        github::fetch_terraform_patterns_with_retries(&client, &RetryPolicy::default()).await
    };

    println!("{}", serde_json::to_string_pretty(&summaries)?);
    println!("📊 Found {} Terraform pattern(s)", summaries.len());

    if summaries.is_empty() {
        return Ok(1);
    }
    Ok(0)
}
