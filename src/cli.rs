// src/cli.rs
// =============================================================================
// Command-line interface, defined with clap's derive API.
//
// Four flows produce artifacts and one is a diagnostic:
//
//   modules   org repos       -> serverless-tf-patterns.json
//   patterns  serverless-patterns -> serverless-cookbook-real.json
//   catalog   curated services    -> terraform-aws-services.json
//   docs      terraform-aws-services.json -> docs/patterns/<category>/*.md
//   graphql   one tree query against serverless-patterns, printed as JSON
//
// Every option has a default, so each flow runs with no flags at all.
// =============================================================================

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "tf-cookbook",
    version,
    about = "Builds a Terraform-on-AWS cookbook from GitHub examples",
    long_about = "tf-cookbook collects real Terraform examples from GitHub, tags them with the AWS \
                  services they use, and renders them as MkDocs pages with tabbed code blocks."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Scrape main.tf from every Terraform module repository of an organization
    ///
    /// Example: tf-cookbook modules --org serverless-tf
    Modules {
        /// GitHub organization to list
        #[arg(long, default_value = "serverless-tf")]
        org: String,

        /// Maximum number of module repositories to read
        #[arg(long, default_value_t = 100)]
        limit: usize,

        /// Where to write the pattern collection
        #[arg(long, default_value = "serverless-tf-patterns.json")]
        output: PathBuf,
    },

    /// Scrape infrastructure files from aws-samples/serverless-patterns
    ///
    /// Example: tf-cookbook patterns --limit 10
    Patterns {
        /// Maximum number of pattern directories to visit
        #[arg(long, default_value_t = 5)]
        limit: usize,

        /// Where to write the pattern collection
        #[arg(long, default_value = "serverless-cookbook-real.json")]
        output: PathBuf,
    },

    /// Build the AWS service catalog, enriched from GitHub when GITHUB_TOKEN is set
    Catalog {
        /// Where to write the service catalog
        #[arg(long, default_value = "terraform-aws-services.json")]
        output: PathBuf,
    },

    /// Render MkDocs pages from a service catalog
    ///
    /// Example: tf-cookbook docs --docs-dir site/docs --examples
    Docs {
        /// Service catalog written by `catalog`
        #[arg(long, default_value = "terraform-aws-services.json")]
        input: PathBuf,

        /// Root of the MkDocs docs tree
        #[arg(long, default_value = "docs")]
        docs_dir: PathBuf,

        /// Also write one page per example
        #[arg(long)]
        examples: bool,
    },

    /// Query serverless-patterns over GraphQL and print the Terraform patterns
    Graphql {
        /// Fail on the first error instead of retrying and falling back
        #[arg(long)]
        no_retry: bool,
    },
}
