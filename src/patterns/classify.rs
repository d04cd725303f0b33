// src/patterns/classify.rs
// =============================================================================
// Turns Terraform source text into short AWS service tags and a category.
//
//   resource "aws_lambda_function" "fn" { ... }   -> "lambda"
//   resource "aws_iam_role_policy_attachment" ... -> "iam"
//   resource "aws_ecr_repository" ...             -> "ecr"   (prefix fallback)
//
// Both the subtype table and the category rules are plain ordered tables so
// that the priority order is visible in one place and testable on its own.
// =============================================================================

use once_cell::sync::Lazy;
use regex::Regex;

static AWS_RESOURCE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"resource\s+"aws_(\w+)"#).expect("valid resource regex"));

// Resource subtypes whose service tag isn't simply the text before the first
// underscore.
const SERVICE_BY_SUBTYPE: &[(&str, &str)] = &[
    ("lambda_function", "lambda"),
    ("lambda_permission", "lambda"),
    ("lambda_alias", "lambda"),
    ("lambda_layer_version", "lambda"),
    ("iam_role", "iam"),
    ("iam_policy", "iam"),
    ("iam_role_policy_attachment", "iam"),
    ("s3_bucket", "s3"),
    ("s3_object", "s3"),
    ("dynamodb_table", "dynamodb"),
    ("dynamodb_item", "dynamodb"),
    ("apigatewayv2_api", "apigateway"),
    ("apigatewayv2_stage", "apigateway"),
    ("apigatewayv2_integration", "apigateway"),
    ("api_gateway_rest_api", "apigateway"),
    ("cloudwatch_log_group", "cloudwatch"),
    ("sns_topic", "sns"),
    ("sqs_queue", "sqs"),
    ("kinesis_stream", "kinesis"),
    ("eventbridge_rule", "eventbridge"),
];

// First match wins. Lambda outranks everything else it appears with.
const CATEGORY_RULES: &[(&str, &str)] = &[
    ("lambda", "compute"),
    ("dynamodb", "database"),
    ("s3", "storage"),
    ("apigateway", "api"),
    ("eventbridge", "messaging"),
];

pub const DEFAULT_CATEGORY: &str = "infrastructure";

// Extracts the AWS service tags referenced by `resource "aws_*"` blocks,
// deduplicated in order of first appearance.
pub fn extract_aws_services(terraform: &str) -> Vec<String> {
    let mut services: Vec<String> = Vec::new();

    for caps in AWS_RESOURCE.captures_iter(terraform) {
        let subtype = &caps[1];
        let service = service_for_subtype(subtype);

        if !service.is_empty() && !services.iter().any(|s| s == service) {
            services.push(service.to_string());
        }
    }

    services
}

fn service_for_subtype(subtype: &str) -> &str {
    SERVICE_BY_SUBTYPE
        .iter()
        .find(|(known, _)| *known == subtype)
        .map(|(_, service)| *service)
        .unwrap_or_else(|| subtype.split('_').next().unwrap_or_default())
}

// Picks a category for a set of service tags (see CATEGORY_RULES).
pub fn category_from_services<S: AsRef<str>>(services: &[S]) -> &'static str {
    CATEGORY_RULES
        .iter()
        .find(|(service, _)| services.iter().any(|s| s.as_ref() == *service))
        .map(|(_, category)| *category)
        .unwrap_or(DEFAULT_CATEGORY)
}

// Organization repos that look like Terraform modules.
pub fn is_terraform_module(repo_name: &str) -> bool {
    repo_name.contains("terraform") || repo_name.contains("tf-module") || repo_name.starts_with("tf-")
}

// "terraform-aws-lambda-sqs" + [lambda, sqs] -> "aws lambda sqs using lambda, sqs"
pub fn description_from_repo(repo_name: &str, services: &[String]) -> String {
    let stem = repo_name
        .strip_prefix("terraform-")
        .or_else(|| repo_name.strip_prefix("tf-module-"))
        .unwrap_or(repo_name);

    format!("{} using {}", stem.replace('-', " "), services.join(", "))
}

const PATTERN_DIR_MARKERS: &[&str] = &[
    "terraform", "tf-", "cdk-", "lambda-", "eventbridge-", "s3-", "api-", "dynamodb-",
];

// Root directories of serverless-patterns worth looking inside.
pub fn is_pattern_directory(dir_name: &str) -> bool {
    PATTERN_DIR_MARKERS.iter().any(|marker| dir_name.contains(marker))
}

// Files that carry infrastructure definitions.
pub fn is_infrastructure_file(file_name: &str) -> bool {
    file_name.ends_with(".tf") || file_name == "template.yaml" || file_name == "template.yml"
}
