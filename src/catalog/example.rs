// src/catalog/example.rs
// =============================================================================
// Fetches one example directory and flattens it into a single markdown blob.
//
// The blob format is what the docs splitter (docs::sections) parses back:
//
//   # Terraform Example: examples/simple
//
//   ## main.tf
//
//   ```hcl
//   ...
//   ```
//
//   ## README.md
//
//   <readme text, unfenced>
//
// Only a handful of extensions are fetched; binaries, lock files and the like
// are left alone.
// =============================================================================

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::github::ContentSource;

const FETCHED_EXTENSIONS: &[&str] = &[".tf", ".md", ".json", ".yml", ".yaml", ".sh"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileType {
    Terraform,
    Markdown,
    Json,
    Yaml,
    Shell,
    Text,
}

impl FileType {
    // Infers the type from a file name's extension.
    pub fn from_filename(name: &str) -> Self {
        let extension = name.rsplit('.').next().unwrap_or_default().to_lowercase();

        match extension.as_str() {
            "tf" | "hcl" => FileType::Terraform,
            "md" => FileType::Markdown,
            "json" => FileType::Json,
            "yml" | "yaml" => FileType::Yaml,
            "sh" => FileType::Shell,
            _ => FileType::Text,
        }
    }

    // Info string used on the fenced block.
    fn fence_language(self) -> &'static str {
        match self {
            FileType::Terraform => "hcl",
            FileType::Markdown => "markdown",
            FileType::Json => "json",
            FileType::Yaml => "yaml",
            FileType::Shell => "shell",
            FileType::Text => "text",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExampleFile {
    pub name: String,
    pub content: String,
    #[serde(rename = "type")]
    pub file_type: FileType,
}

// The fetched and typed contents of one example directory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TerraformExampleFiles {
    pub path: String,
    pub files: Vec<ExampleFile>,
}

// Lists `example_path` and downloads every file with a known extension.
//
// Fails if the path is not a directory or any file can't be read; callers
// treat the whole example as unavailable in that case.
pub async fn fetch_terraform_example(
    source: &dyn ContentSource,
    owner: &str,
    repo: &str,
    example_path: &str,
) -> Result<TerraformExampleFiles> {
    let entries = source.list_directory(owner, repo, example_path).await?;

    let mut files = Vec::new();
    for entry in entries.iter().filter(|e| e.is_file() && is_fetched_file(&e.name)) {
        let content = source.read_file(owner, repo, &entry.path).await?;

        files.push(ExampleFile {
            name: entry.name.clone(),
            content,
            file_type: FileType::from_filename(&entry.name),
        });
    }

    Ok(TerraformExampleFiles {
        path: example_path.to_string(),
        files,
    })
}

fn is_fetched_file(name: &str) -> bool {
    FETCHED_EXTENSIONS.iter().any(|ext| name.ends_with(ext))
}

// Renders fetched files as `## <name>` sections. Markdown files are inlined;
// everything else goes into a fenced block.
pub fn format_example_as_markdown(example: &TerraformExampleFiles) -> String {
    let mut parts = vec![format!("# Terraform Example: {}", example.path), String::new()];

    for file in &example.files {
        parts.push(format!("## {}", file.name));
        parts.push(String::new());

        if file.file_type == FileType::Markdown {
            parts.push(file.content.clone());
        } else {
            parts.push(format!("```{}", file.file_type.fence_language()));
            parts.push(file.content.trim_end_matches('\n').to_string());
            parts.push("```".to_string());
        }

        parts.push(String::new());
    }

    parts.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CookbookError;
    use crate::github::{ContentEntry, Repository};
    use async_trait::async_trait;

    #[test]
    fn test_file_type_from_extension() {
        assert_eq!(FileType::from_filename("main.tf"), FileType::Terraform);
        assert_eq!(FileType::from_filename("backend.hcl"), FileType::Terraform);
        assert_eq!(FileType::from_filename("README.MD"), FileType::Markdown);
        assert_eq!(FileType::from_filename("policy.json"), FileType::Json);
        assert_eq!(FileType::from_filename("ci.yml"), FileType::Yaml);
        assert_eq!(FileType::from_filename("template.yaml"), FileType::Yaml);
        assert_eq!(FileType::from_filename("build.sh"), FileType::Shell);
        assert_eq!(FileType::from_filename("index.py"), FileType::Text);
        assert_eq!(FileType::from_filename("Makefile"), FileType::Text);
    }

    #[test]
    fn test_format_example_as_markdown() {
        let example = TerraformExampleFiles {
            path: "examples/simple".to_string(),
            files: vec![
                ExampleFile {
                    name: "main.tf".to_string(),
                    content: "resource \"aws_sqs_queue\" \"q\" {}\n".to_string(),
                    file_type: FileType::Terraform,
                },
                ExampleFile {
                    name: "README.md".to_string(),
                    content: "# Simple".to_string(),
                    file_type: FileType::Markdown,
                },
            ],
        };

        let markdown = format_example_as_markdown(&example);

        assert!(markdown.starts_with("# Terraform Example: examples/simple\n"));
        assert!(markdown.contains("## main.tf\n\n```hcl\nresource \"aws_sqs_queue\" \"q\" {}\n```\n"));
        assert!(markdown.contains("## README.md\n\n# Simple\n"));
    }

    struct ExampleDir;

    #[async_trait]
    impl ContentSource for ExampleDir {
        async fn list_org_repositories(&self, _org: &str) -> Result<Vec<Repository>> {
            Ok(Vec::new())
        }

        async fn list_directory(&self, _owner: &str, _repo: &str, path: &str) -> Result<Vec<ContentEntry>> {
            if path != "examples/simple" {
                return Err(CookbookError::NotADirectory(path.to_string()));
            }
            let entry = |name: &str, kind: &str| ContentEntry {
                name: name.to_string(),
                path: format!("{}/{}", path, name),
                kind: kind.to_string(),
            };
            Ok(vec![
                entry("main.tf", "file"),
                entry("outputs.tf", "file"),
                entry("src", "dir"),
                entry("package.zip", "file"),
            ])
        }

        async fn read_file(&self, _owner: &str, _repo: &str, path: &str) -> Result<String> {
            Ok(format!("# contents of {}", path))
        }
    }

    #[tokio::test]
    async fn test_fetch_terraform_example_keeps_known_files() {
        let example = fetch_terraform_example(&ExampleDir, "o", "r", "examples/simple").await.unwrap();

        let names: Vec<&str> = example.files.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["main.tf", "outputs.tf"]);
        assert_eq!(example.files[1].content, "# contents of examples/simple/outputs.tf");
        assert!(example.files.iter().all(|f| f.file_type == FileType::Terraform));
    }

    #[tokio::test]
    async fn test_fetch_terraform_example_rejects_files() {
        assert!(fetch_terraform_example(&ExampleDir, "o", "r", "main.tf").await.is_err());
    }
}
