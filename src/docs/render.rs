// src/docs/render.rs
// =============================================================================
// Renders catalog entries into MkDocs Material markdown.
//
// Page layout (one page per service):
//
//   ---                     <- YAML frontmatter: title, description, tags
//   # <Service>
//   ## At a Glance          <- summary table
//   ## When to Use <Service>
//   ## Architecture
//   ## Examples             <- one tab per example, nested tabs per file
//      (or ## Implementation when there is a single example)
//   ## Next Steps
//   ## Contributing
//
// Tabs use the pymdownx.tabbed syntax (`=== "Label"`), whose content must be
// indented by four spaces per nesting level. Every code body goes through
// sections::indent_code before it is emitted.
// =============================================================================

use std::fmt::Write as _;

use super::sections::{
    indent_code, split_example_sections, ExampleSections, TerraformFile, NESTED_TAB_INDENT,
    SINGLE_TAB_INDENT,
};
use serde::{Deserialize, Serialize};

use crate::catalog::{AwsService, TerraformExample};
use crate::error::Result;

// Docs category of each known service; anything else is "general".
const SERVICE_CATEGORIES: &[(&str, &str)] = &[
    ("AWS Lambda", "compute"),
    ("AWS AppSync", "integration"),
    ("Amazon EventBridge", "integration"),
    ("AWS Step Functions", "integration"),
    ("Amazon CloudFront", "storage"),
    ("Amazon Aurora Serverless", "storage"),
    ("Amazon RDS Proxy", "storage"),
    ("Amazon S3", "storage"),
    ("Amazon SNS", "integration"),
    ("AWS AppConfig", "security"),
    ("AWS SSM Parameter Store", "security"),
    ("AWS Secrets Manager", "security"),
    ("Amazon DynamoDB", "storage"),
];

pub const GENERAL_CATEGORY: &str = "general";

const BASE_TAGS: &[&str] = &["serverless", "terraform", "aws"];

const COMPLEXITY_KEYWORDS: &[&str] = &[
    "vpc", "security", "custom", "advanced", "complex", "multi", "container", "cicd", "pipeline",
];

// Tabs shown for a single example (top-level tabs)
const SINGLE_EXAMPLE_TABS: &[(&str, TerraformFile)] = &[
    ("Main Configuration (`main.tf`)", TerraformFile::Main),
    ("Variables (`variables.tf`)", TerraformFile::Variables),
    ("Outputs (`outputs.tf`)", TerraformFile::Outputs),
    ("Requirements (`versions.tf`)", TerraformFile::Versions),
];

// Tabs shown inside each example tab when a service has several examples
const NESTED_EXAMPLE_TABS: &[(&str, TerraformFile)] = &[
    ("Configuration", TerraformFile::Main),
    ("Outputs", TerraformFile::Outputs),
    ("Variables", TerraformFile::Variables),
    ("Requirements", TerraformFile::Versions),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Difficulty {
    Beginner,
    Intermediate,
}

impl Difficulty {
    fn label(self) -> &'static str {
        match self {
            Difficulty::Beginner => "Beginner",
            Difficulty::Intermediate => "Intermediate",
        }
    }

    fn stars(self) -> &'static str {
        match self {
            Difficulty::Beginner => "★",
            Difficulty::Intermediate => "★★",
        }
    }
}

pub fn service_category(service_name: &str) -> &'static str {
    SERVICE_CATEGORIES
        .iter()
        .find(|(name, _)| *name == service_name)
        .map(|(_, category)| *category)
        .unwrap_or(GENERAL_CATEGORY)
}

// "Amazon S3" -> "S3", "AWS Step Functions" -> "Step Functions"
pub fn clean_service_name(service_name: &str) -> String {
    let name = strip_vendor_prefix(service_name);
    capitalize_first(name)
}

// "AWS SSM Parameter Store" -> "ssm-parameter-store"
pub fn service_slug(service_name: &str) -> String {
    slugify(strip_vendor_prefix(service_name))
}

fn strip_vendor_prefix(name: &str) -> &str {
    let name = strip_word_prefix(name, "AWS");
    strip_word_prefix(name, "Amazon")
}

// Strips `word` plus the whitespace after it, only if whitespace follows
fn strip_word_prefix<'a>(name: &'a str, word: &str) -> &'a str {
    match name.strip_prefix(word) {
        Some(rest) if rest.starts_with(char::is_whitespace) => rest.trim_start(),
        _ => name,
    }
}

pub fn slugify(text: &str) -> String {
    let lowered = text.to_lowercase();
    lowered
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '-')
        .collect()
}

fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

// Upper-cases the first letter of every word
fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut at_word_start = true;
    for c in text.chars() {
        if c.is_alphanumeric() {
            if at_word_start {
                out.extend(c.to_uppercase());
            } else {
                out.push(c);
            }
            at_word_start = false;
        } else {
            out.push(c);
            at_word_start = true;
        }
    }
    out
}

// Example title without the "<Service> - " prefix and vendor prefix.
//
// "AWS Lambda - container-image" -> "container-image"
fn short_example_title(service: &AwsService, example: &TerraformExample) -> String {
    let prefix = format!("{} - ", service.service_name);
    let title = example.title.strip_prefix(&prefix).unwrap_or(&example.title);
    strip_vendor_prefix(title).to_string()
}

// File-system slug for a per-example page.
pub fn example_slug(service: &AwsService, example: &TerraformExample) -> String {
    slugify(&short_example_title(service, example).replace('_', "-"))
}

// Base tags plus up to five title words longer than two characters.
pub fn extract_service_tags(example: &TerraformExample) -> Vec<String> {
    let title = example.title.to_lowercase();
    let title_tags = title
        .split(|c: char| c.is_whitespace() || c == '-' || c == '_')
        .filter(|word| word.chars().count() > 2)
        .take(5);

    let mut tags: Vec<String> = BASE_TAGS.iter().map(|t| t.to_string()).collect();
    for word in title_tags {
        if !tags.iter().any(|t| t == word) {
            tags.push(word.to_string());
        }
    }
    tags
}

// Rough difficulty from the example's title and description.
//
// "simple"/"basic" in the title wins outright; otherwise any complexity
// keyword or a long hyphenated title makes it intermediate.
pub fn generate_difficulty_level(example: &TerraformExample) -> Difficulty {
    let title = example.title.to_lowercase();
    let description = example.description.as_deref().unwrap_or_default().to_lowercase();

    if title.contains("simple") || title.contains("basic") {
        return Difficulty::Beginner;
    }

    let has_complexity = COMPLEXITY_KEYWORDS
        .iter()
        .any(|keyword| title.contains(keyword) || description.contains(keyword));

    if has_complexity || title.split('-').count() > 4 {
        Difficulty::Intermediate
    } else {
        Difficulty::Beginner
    }
}

// YAML frontmatter block at the top of every page. Titles, descriptions and
// tags come from the catalog JSON, which may be hand-edited, so the block is
// always produced by serde_yaml rather than by string formatting.
#[derive(Debug, PartialEq, Serialize, Deserialize)]
struct Frontmatter {
    title: String,
    description: String,
    tags: Vec<String>,
}

fn frontmatter(title: &str, description: &str, tags: &[String]) -> Result<String> {
    let block = Frontmatter {
        title: title.to_string(),
        description: single_line(description),
        tags: tags.to_vec(),
    };
    Ok(format!("---\n{}---", serde_yaml::to_string(&block)?))
}

// Collapses line breaks so the text stays inside table cells and list items
fn single_line(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn example_page_title(service: &AwsService, example: &TerraformExample) -> String {
    capitalize_first(&short_example_title(service, example).replace('-', " "))
}

fn example_description<'a>(service: &'a AwsService, example: &'a TerraformExample) -> &'a str {
    example
        .description
        .as_deref()
        .filter(|d| !d.is_empty())
        .unwrap_or(service.description.as_str())
}

// Frontmatter for a per-example page
pub fn generate_frontmatter(service: &AwsService, example: &TerraformExample) -> Result<String> {
    frontmatter(
        &example_page_title(service, example),
        example_description(service, example),
        &extract_service_tags(example),
    )
}

// Frontmatter for a service page: union of all example tags
pub fn generate_service_frontmatter(service: &AwsService) -> Result<String> {
    let mut tags: Vec<String> = Vec::new();
    for tag in service.terraform_examples.iter().flat_map(extract_service_tags) {
        if !tags.contains(&tag) {
            tags.push(tag);
        }
    }
    if tags.is_empty() {
        tags = BASE_TAGS.iter().map(|t| t.to_string()).collect();
    }

    frontmatter(&clean_service_name(&service.service_name), &service.description, &tags)
}

fn code_list(services: &[String]) -> String {
    services.iter().map(|s| format!("`{}`", s)).collect::<Vec<_>>().join(", ")
}

fn glance_table(rows: &[(&str, String)]) -> String {
    let mut out = String::from("<div class=\"at-a-glance\" markdown=\"1\">\n\n| Property | Value |\n| --- | --- |\n");
    for (property, value) in rows {
        let _ = writeln!(out, "| **{}** | {} |", property, value);
    }
    out.push_str("\n</div>");
    out
}

// At-a-glance table for a single example (with difficulty).
pub fn generate_at_a_glance_section(service: &AwsService, example: &TerraformExample) -> String {
    let difficulty = generate_difficulty_level(example);

    glance_table(&[
        ("Level", format!("{} **{}**", difficulty.stars(), difficulty.label())),
        ("AWS Services", code_list(&example.services)),
        ("Primary Use Case", single_line(&service.description)),
        ("Source Repo", format!("[terraform-aws-modules]({})", service.repository_url)),
        ("Category", service_category(&service.service_name).to_string()),
    ])
}

// At-a-glance table for a service page.
pub fn generate_service_at_a_glance_section(service: &AwsService) -> String {
    let count = service.terraform_examples.len();

    let mut services: Vec<String> = Vec::new();
    for s in service.terraform_examples.iter().flat_map(|e| e.services.iter()) {
        if !services.contains(s) {
            services.push(s.clone());
        }
    }

    glance_table(&[
        ("Examples", format!("{} implementation pattern{}", count, plural(count))),
        ("AWS Services", code_list(&services)),
        ("Primary Use Case", single_line(&service.description)),
        ("Source Repo", format!("[terraform-aws-modules]({})", service.repository_url)),
        ("Category", service_category(&service.service_name).to_string()),
    ])
}

fn plural(count: usize) -> &'static str {
    if count == 1 {
        ""
    } else {
        "s"
    }
}

fn raw_code_or_placeholder(example: &TerraformExample) -> &str {
    let code = example.code.trim();
    if code.is_empty() {
        "# No code available"
    } else {
        code
    }
}

// Emits one `=== "Label"` tab per file. `tab_indent` is the indent of the
// tab markers themselves; code goes one level deeper.
fn file_tabs(
    tabs: &[(&str, TerraformFile)],
    sections: &ExampleSections,
    tab_indent: &str,
    code_indent: &str,
) -> String {
    tabs.iter()
        .map(|(label, file)| {
            format!(
                "{tab}=== \"{label}\"\n\n{code}```terraform title=\"{name}\"\n{body}\n{code}```",
                tab = tab_indent,
                label = label,
                code = code_indent,
                name = file.filename(),
                body = indent_code(sections.get(*file), code_indent),
            )
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

// `## Implementation` with top-level file tabs (single-example services).
pub fn generate_single_example_tabs(example: &TerraformExample) -> String {
    let Some(markdown) = example.markdown_content.as_deref() else {
        return format!(
            "## Implementation\n\n```terraform title=\"main.tf\"\n{}\n```",
            raw_code_or_placeholder(example)
        );
    };

    let sections = split_example_sections(markdown, &example.code);

    format!(
        "## Implementation\n\nComplete Terraform configuration files for this pattern:\n\n{}",
        file_tabs(SINGLE_EXAMPLE_TABS, &sections, "", SINGLE_TAB_INDENT)
    )
}

// Body of one example tab: file tabs nested one level down.
pub fn generate_single_example_content(example: &TerraformExample) -> String {
    let Some(markdown) = example.markdown_content.as_deref() else {
        return format!(
            "{indent}```terraform title=\"main.tf\"\n{body}\n{indent}```",
            indent = SINGLE_TAB_INDENT,
            body = indent_code(raw_code_or_placeholder(example), SINGLE_TAB_INDENT),
        );
    };

    let sections = split_example_sections(markdown, &example.code);
    file_tabs(NESTED_EXAMPLE_TABS, &sections, SINGLE_TAB_INDENT, NESTED_TAB_INDENT)
}

// The examples part of a service page, shaped by how many examples exist.
pub fn generate_service_example_tabs(service: &AwsService) -> String {
    match service.terraform_examples.as_slice() {
        [] => "## Examples\n\nNo examples available for this service.".to_string(),
        [only] => generate_single_example_tabs(only),
        examples => {
            let tabs = examples
                .iter()
                .map(|example| {
                    let label = title_case(&short_example_title(service, example).replace(['-', '_'], " "));
                    format!("=== \"{}\"\n\n{}", label, generate_single_example_content(example))
                })
                .collect::<Vec<_>>()
                .join("\n\n");

            format!(
                "## Examples\n\nExplore different usage patterns and configurations. \
                 Click through the tabs to see various implementation approaches:\n\n{}",
                tabs
            )
        }
    }
}

// Full markdown page for one service
pub fn generate_service_markdown(service: &AwsService) -> Result<String> {
    let name = clean_service_name(&service.service_name);

    Ok(format!(
        r#"{frontmatter}

# {name}

{description}

<div class="md-typeset" markdown>
<div class="md-grid">
<div class="md-cell md-cell--12">
<a href="{repo}" title="View Source" class="md-button md-button--primary">
View Source Repository
</a>
</div>
</div>
</div>

---

## At a Glance

{glance}

---

## When to Use {name}

!!! info "Use {name} when you need to:"

    * {use_case}
    * Build serverless applications with {full_name}
    * Implement scalable, cost-effective solutions
    * Follow infrastructure as code best practices

---

## Architecture

{name} is a key component of AWS serverless architecture. The implementation follows AWS best practices and uses the terraform-aws-modules for reliable, tested infrastructure components.

{examples}

---

{footer}"#,
        frontmatter = generate_service_frontmatter(service)?,
        name = name,
        full_name = service.service_name,
        description = service.description,
        use_case = single_line(&service.description),
        repo = service.repository_url,
        glance = generate_service_at_a_glance_section(service),
        examples = generate_service_example_tabs(service),
        footer = next_steps_and_contributing(service),
    ))
}

// Markdown page for a single example of a service
pub fn generate_pattern_markdown(service: &AwsService, example: &TerraformExample) -> Result<String> {
    let title = example_page_title(service, example);

    Ok(format!(
        r#"{frontmatter}

# {title}

{description}

---

## At a Glance

{glance}

---

## When to Use

!!! info "Use this pattern when you need to:"

    * {use_case}
    * Build serverless applications with {full_name}

---

## Architecture

This example uses the [{full_name} module]({repo}) from terraform-aws-modules. Browse the [example source]({url}) for the complete directory.

{implementation}

---

{footer}"#,
        frontmatter = generate_frontmatter(service, example)?,
        title = title,
        description = example_description(service, example),
        use_case = single_line(example_description(service, example)),
        glance = generate_at_a_glance_section(service, example),
        full_name = service.service_name,
        repo = service.repository_url,
        url = example.url,
        implementation = generate_single_example_tabs(example),
        footer = next_steps_and_contributing(service),
    ))
}

fn next_steps_and_contributing(service: &AwsService) -> String {
    format!(
        r#"## Next Steps

!!! tip "Related Resources"

    * [Official {full_name} Documentation](https://docs.aws.amazon.com/)
    * [Terraform AWS Provider Documentation](https://registry.terraform.io/providers/hashicorp/aws/latest)
    * [Source Repository]({repo})

---

## Contributing

Found an issue or want to improve these patterns? [Open an issue]({repo}/issues) or submit a pull request to the source repository.
"#,
        full_name = service.service_name,
        repo = service.repository_url,
    )
}

// Landing page for one docs category: a card per service in it.
pub fn generate_category_index(category: &str, services: &[AwsService]) -> String {
    let mut cards = String::new();
    for service in services.iter().filter(|s| service_category(&s.service_name) == category) {
        let count = service.terraform_examples.len();
        let _ = write!(
            cards,
            "\n<div class=\"pattern-card\">\n<h3>{name}</h3>\n<p>{description}</p>\n<p><strong>{count} example{s}</strong> available</p>\n<a href=\"{slug}/\" class=\"md-button\">View Patterns</a>\n</div>",
            name = clean_service_name(&service.service_name),
            description = service.description,
            count = count,
            s = plural(count),
            slug = service_slug(&service.service_name),
        );
    }

    format!(
        "# {title} Patterns\n\nCollection of {category} patterns for AWS serverless architecture.\n\n<div class=\"pattern-grid\">\n{cards}\n\n</div>\n",
        title = capitalize_first(category),
        category = category,
        cards = cards,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Documentation;

    fn lambda_service(examples: Vec<TerraformExample>) -> AwsService {
        AwsService {
            service_name: "AWS Lambda".to_string(),
            description: "AWS Lambda lets you run code without provisioning or managing servers.".to_string(),
            repository_url: "https://github.com/terraform-aws-modules/terraform-aws-lambda".to_string(),
            examples_url: "https://github.com/terraform-aws-modules/terraform-aws-lambda/tree/master/examples".to_string(),
            terraform_examples: examples,
            documentation: Documentation::default(),
        }
    }

    fn simple_example() -> TerraformExample {
        TerraformExample {
            title: "AWS Lambda - simple".to_string(),
            url: "https://github.com/terraform-aws-modules/terraform-aws-lambda/tree/master/examples/simple".to_string(),
            services: vec!["aws-lambda".to_string()],
            code: "resource \"aws_lambda_function\" \"example\" {}".to_string(),
            description: Some("Simple Lambda example".to_string()),
            markdown_content: Some(
                "# Simple Example\n\n## main.tf\n\n```hcl\nresource \"aws_lambda_function\" \"example\" {}\n```".to_string(),
            ),
        }
    }

    fn parse_frontmatter(page: &str) -> Frontmatter {
        let body = page.strip_prefix("---\n").unwrap();
        let end = body.find("\n---").unwrap();
        serde_yaml::from_str(&body[..end]).unwrap()
    }

    fn titled(title: &str) -> TerraformExample {
        TerraformExample { title: title.to_string(), ..simple_example() }
    }

    #[test]
    fn test_extract_service_tags() {
        let tags = extract_service_tags(&simple_example());
        assert_eq!(tags, vec!["serverless", "terraform", "aws", "lambda", "simple"]);
    }

    #[test]
    fn test_tags_are_capped_and_deduplicated() {
        let tags = extract_service_tags(&titled("AWS Lambda - lambda-with-vpc-and-security-groups-extra"));
        // only the first five title words are considered, then duplicates drop out
        assert_eq!(tags, vec!["serverless", "terraform", "aws", "lambda", "with", "vpc"]);
    }

    #[test]
    fn test_difficulty_simple_is_beginner() {
        assert_eq!(generate_difficulty_level(&simple_example()), Difficulty::Beginner);
    }

    #[test]
    fn test_difficulty_complex_is_intermediate() {
        let example = titled("AWS Lambda - container-image-with-vpc-and-security-groups");
        assert_eq!(generate_difficulty_level(&example), Difficulty::Intermediate);
    }

    #[test]
    fn test_difficulty_simple_short_circuits_keywords() {
        let example = titled("simple-vpc-pipeline");
        assert_eq!(generate_difficulty_level(&example), Difficulty::Beginner);
    }

    #[test]
    fn test_difficulty_from_description_and_hyphens() {
        let mut example = titled("AWS Lambda - alias");
        example.description = Some("Deploys through a CICD pipeline".to_string());
        assert_eq!(generate_difficulty_level(&example), Difficulty::Intermediate);

        let mut example = titled("a-b-c-d-e");
        example.description = None;
        assert_eq!(generate_difficulty_level(&example), Difficulty::Intermediate);

        let mut example = titled("AWS Lambda - alias");
        example.description = None;
        assert_eq!(generate_difficulty_level(&example), Difficulty::Beginner);
    }

    #[test]
    fn test_service_names_and_slugs() {
        assert_eq!(clean_service_name("AWS Lambda"), "Lambda");
        assert_eq!(clean_service_name("Amazon S3"), "S3");
        assert_eq!(service_slug("AWS SSM Parameter Store"), "ssm-parameter-store");
        assert_eq!(service_slug("Amazon Aurora Serverless"), "aurora-serverless");
        assert_eq!(service_slug("AWSome Tool"), "awsome-tool");
        assert_eq!(service_category("AWS Lambda"), "compute");
        assert_eq!(service_category("Amazon Kinesis"), "general");
    }

    #[test]
    fn test_pattern_markdown_has_frontmatter_and_sections() {
        let service = lambda_service(vec![simple_example()]);
        let markdown = generate_pattern_markdown(&service, &service.terraform_examples[0]).unwrap();

        assert!(markdown.starts_with("---\n"));
        let frontmatter = parse_frontmatter(&markdown);
        assert_eq!(frontmatter.title, "Simple");
        assert_eq!(frontmatter.description, "Simple Lambda example");
        assert_eq!(frontmatter.tags[0], "serverless");
        assert!(markdown.contains("# Simple"));
        assert!(markdown.contains("## At a Glance"));
        assert!(markdown.contains("★ **Beginner**"));
        assert!(markdown.contains("## Implementation"));
        assert!(markdown.contains("```terraform"));
    }

    #[test]
    fn test_missing_markdown_content_is_handled() {
        let example = TerraformExample { markdown_content: None, description: None, ..simple_example() };
        let service = lambda_service(vec![example]);
        let markdown = generate_pattern_markdown(&service, &service.terraform_examples[0]).unwrap();

        assert!(markdown.contains("# Simple"));
        assert!(markdown.contains("```terraform title=\"main.tf\"\nresource \"aws_lambda_function\" \"example\" {}\n```"));
        assert!(!markdown.contains("undefined"));
    }

    #[test]
    fn test_single_example_tabs_indent_and_placeholders() {
        let tabs = generate_single_example_tabs(&simple_example());

        assert!(tabs.contains("=== \"Main Configuration (`main.tf`)\""));
        assert!(tabs.contains("    ```terraform title=\"main.tf\"\n    resource \"aws_lambda_function\" \"example\" {}\n    ```"));
        assert!(tabs.contains("    # No variables defined"));
        assert!(tabs.contains("    # No outputs defined"));
        assert!(tabs.contains("    # No versions file"));
        assert!(!tabs.contains("undefined"));
    }

    #[test]
    fn test_multiple_examples_nest_file_tabs() {
        let mut container = titled("AWS Lambda - container-image");
        container.markdown_content = None;
        container.code = "module \"a\" {}\nmodule \"b\" {}".to_string();
        let service = lambda_service(vec![simple_example(), container]);

        let section = generate_service_example_tabs(&service);

        assert!(section.starts_with("## Examples"));
        assert!(section.contains("=== \"Simple\"\n\n    === \"Configuration\""));
        assert!(section.contains("        resource \"aws_lambda_function\" \"example\" {}"));
        assert!(section.contains("        # No outputs defined"));
        // degraded path: one fenced block, no nested tabs
        assert!(section.contains("=== \"Container Image\"\n\n    ```terraform title=\"main.tf\"\n    module \"a\" {}\n    module \"b\" {}\n    ```"));
    }

    #[test]
    fn test_service_without_examples() {
        let service = lambda_service(Vec::new());
        let markdown = generate_service_markdown(&service).unwrap();

        assert!(markdown.contains("No examples available for this service."));
        assert!(markdown.contains("| **Examples** | 0 implementation patterns |"));
        assert_eq!(parse_frontmatter(&markdown).tags, vec!["serverless", "terraform", "aws"]);
    }

    #[test]
    fn test_service_markdown_sections_in_order() {
        let service = lambda_service(vec![simple_example()]);
        let markdown = generate_service_markdown(&service).unwrap();

        let headings = [
            "# Lambda",
            "## At a Glance",
            "## When to Use Lambda",
            "## Architecture",
            "## Implementation",
            "## Next Steps",
            "## Contributing",
        ];
        let positions: Vec<usize> = headings.iter().map(|h| markdown.find(h).unwrap()).collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));

        assert!(markdown.contains("| **Examples** | 1 implementation pattern |"));
        assert!(markdown.contains("| **Category** | compute |"));
        assert!(markdown.contains("(https://github.com/terraform-aws-modules/terraform-aws-lambda/issues)"));
    }

    #[test]
    fn test_category_index_lists_only_its_services() {
        let lambda = lambda_service(vec![simple_example()]);
        let mut s3 = lambda_service(Vec::new());
        s3.service_name = "Amazon S3".to_string();

        let index = generate_category_index("compute", &[lambda, s3]);

        assert!(index.starts_with("# Compute Patterns"));
        assert!(index.contains("<h3>Lambda</h3>"));
        assert!(index.contains("<strong>1 example</strong>"));
        assert!(index.contains("href=\"lambda/\""));
        assert!(!index.contains("<h3>S3</h3>"));
    }

    #[test]
    fn test_frontmatter_survives_yaml_special_characters() {
        let mut example = titled("AWS Lambda - with-[x]-and-key:");
        example.description = Some("Supports:".to_string());
        let mut service = lambda_service(vec![example]);
        service.description = "Supports:".to_string();

        let frontmatter = parse_frontmatter(&generate_service_frontmatter(&service).unwrap());
        assert_eq!(frontmatter.description, "Supports:");
        assert!(frontmatter.tags.contains(&"[x]".to_string()));

        let page = generate_pattern_markdown(&service, &service.terraform_examples[0]).unwrap();
        assert_eq!(parse_frontmatter(&page).description, "Supports:");
    }

    #[test]
    fn test_multiline_description_stays_in_admonition() {
        let mut service = lambda_service(vec![simple_example()]);
        service.description = "Runs code.\nNo servers to manage.".to_string();

        let markdown = generate_service_markdown(&service).unwrap();

        assert!(markdown.contains("    * Runs code. No servers to manage.\n"));
        assert!(markdown.contains("| **Primary Use Case** | Runs code. No servers to manage. |"));
        assert_eq!(parse_frontmatter(&markdown).description, "Runs code. No servers to manage.");
    }
}
