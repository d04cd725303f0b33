// src/catalog/services.rs
// Hand-maintained service list. Every service maps to a terraform-aws-modules
// repository; examples are directories under its examples/ folder.

use super::{AwsService, Documentation, TerraformExample};

const MODULES_ORG_URL: &str = "https://github.com/terraform-aws-modules";

struct ServiceSeed {
    name: &'static str,
    description: &'static str,
    // terraform-aws-<module>
    module: &'static str,
    // Short service tag used in example service lists
    tag: &'static str,
    // (directory under examples/, description)
    examples: &'static [(&'static str, &'static str)],
}

const SEEDS: &[ServiceSeed] = &[
    ServiceSeed {
        name: "AWS Lambda",
        description: "AWS Lambda lets you run code without provisioning or managing servers.",
        module: "lambda",
        tag: "lambda",
        examples: &[
            ("simple", "Simple Lambda function packaged from local sources"),
            ("complete", "Lambda function using most of the module's features"),
            ("container-image", "Lambda function deployed from a container image"),
            ("with-vpc", "Lambda function attached to private VPC subnets"),
            ("event-source-mapping", "Lambda triggered by SQS, Kinesis and DynamoDB streams"),
        ],
    },
    ServiceSeed {
        name: "AWS AppSync",
        description: "AWS AppSync creates serverless GraphQL and Pub/Sub APIs.",
        module: "appsync",
        tag: "appsync",
        examples: &[("complete", "GraphQL API with Lambda, DynamoDB and HTTP resolvers")],
    },
    ServiceSeed {
        name: "Amazon EventBridge",
        description: "Amazon EventBridge is a serverless event bus that connects applications with events.",
        module: "eventbridge",
        tag: "eventbridge",
        examples: &[
            ("simple", "Event bus with a single rule and target"),
            ("complete", "Event bus with rules, targets, archives and permissions"),
            ("api-destination", "Rules delivering events to external HTTP API destinations"),
        ],
    },
    ServiceSeed {
        name: "AWS Step Functions",
        description: "AWS Step Functions orchestrates services into serverless workflows.",
        module: "step-functions",
        tag: "stepfunctions",
        examples: &[
            ("simple", "Minimal state machine definition"),
            ("complete", "State machine with service integrations and logging"),
        ],
    },
    ServiceSeed {
        name: "Amazon CloudFront",
        description: "Amazon CloudFront delivers content with low latency through a global CDN.",
        module: "cloudfront",
        tag: "cloudfront",
        examples: &[("complete", "Distribution with S3 and custom origins, cache behaviours and OAC")],
    },
    ServiceSeed {
        name: "Amazon Aurora Serverless",
        description: "Amazon Aurora Serverless scales relational database capacity on demand.",
        module: "rds-aurora",
        tag: "rds",
        examples: &[
            ("serverless", "Aurora Serverless v2 cluster for PostgreSQL and MySQL"),
            ("postgresql", "Provisioned Aurora PostgreSQL cluster"),
        ],
    },
    ServiceSeed {
        name: "Amazon RDS Proxy",
        description: "Amazon RDS Proxy pools and shares database connections for serverless applications.",
        module: "rds-proxy",
        tag: "rds",
        examples: &[
            ("postgresql-cluster", "Proxy in front of an Aurora PostgreSQL cluster"),
            ("mysql-iam-instance", "Proxy with IAM authentication for a MySQL instance"),
        ],
    },
    ServiceSeed {
        name: "Amazon S3",
        description: "Amazon S3 is object storage built to retrieve any amount of data from anywhere.",
        module: "s3-bucket",
        tag: "s3",
        examples: &[
            ("complete", "Bucket with versioning, encryption, lifecycle and logging"),
            ("notification", "Bucket notifications to Lambda, SQS and SNS"),
        ],
    },
    ServiceSeed {
        name: "Amazon SNS",
        description: "Amazon SNS is a fully managed pub/sub messaging service.",
        module: "sns",
        tag: "sns",
        examples: &[
            ("simple", "Standard topic with default settings"),
            ("complete", "Topics with subscriptions, policies and encryption"),
            ("fifo", "FIFO topic with content-based deduplication"),
        ],
    },
    ServiceSeed {
        name: "AWS AppConfig",
        description: "AWS AppConfig deploys application configuration and feature flags safely.",
        module: "appconfig",
        tag: "appconfig",
        examples: &[("complete", "Application, environments and hosted configuration profiles")],
    },
    ServiceSeed {
        name: "AWS SSM Parameter Store",
        description: "AWS Systems Manager Parameter Store provides secure storage for configuration data.",
        module: "ssm-parameter",
        tag: "ssm",
        examples: &[("complete", "String, list and secure string parameters")],
    },
    ServiceSeed {
        name: "AWS Secrets Manager",
        description: "AWS Secrets Manager rotates, manages and retrieves secrets through their lifecycle.",
        module: "secrets-manager",
        tag: "secretsmanager",
        examples: &[("complete", "Secrets with policies, replication and rotation")],
    },
];

// The catalog without any live GitHub data (empty documentation).
pub fn aws_service_catalog() -> Vec<AwsService> {
    SEEDS.iter().map(ServiceSeed::to_service).collect()
}

impl ServiceSeed {
    fn to_service(&self) -> AwsService {
        let repository_url = format!("{}/terraform-aws-{}", MODULES_ORG_URL, self.module);
        let examples_url = format!("{}/tree/master/examples", repository_url);

        let terraform_examples = self
            .examples
            .iter()
            .map(|(dir, description)| TerraformExample {
                title: format!("{} - {}", self.name, dir),
                url: format!("{}/{}", examples_url, dir),
                services: vec![self.tag.to_string()],
                code: format!(
                    "module \"{}\" {{\n  source = \"terraform-aws-modules/{}/aws\"\n}}",
                    dir.replace('-', "_"),
                    self.module
                ),
                description: Some(description.to_string()),
                markdown_content: None,
            })
            .collect();

        AwsService {
            service_name: self.name.to_string(),
            description: self.description.to_string(),
            repository_url,
            examples_url,
            terraform_examples,
            documentation: Documentation::default(),
        }
    }
}
