// src/docs/sections.rs
// =============================================================================
// Splits an example's combined markdown blob back into per-file code.
//
// The blob is produced by catalog::example::format_example_as_markdown and
// looks like:
//
//   # Terraform Example: examples/simple
//   ## main.tf
//   ```hcl
//   ...
//   ```
//   ## variables.tf
//   ...
//
// The split is tied to that exact shape: sections are found by
// splitting on the literal "## " and checking which filename a section starts
// with. This is not a general markdown parser, and missing sections or fences
// turn into fixed placeholder comments rather than errors.
// =============================================================================

use once_cell::sync::Lazy;
use regex::Regex;

// Literal heading prefix that separates file sections in the blob.
pub const SECTION_DELIMITER: &str = "## ";

// Indent for code inside a single level of tabs.
pub const SINGLE_TAB_INDENT: &str = "    ";
// Indent for code inside file tabs nested in example tabs.
pub const NESTED_TAB_INDENT: &str = "        ";

static HCL_BLOCK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)```hcl\n(.*?)\n```").expect("valid hcl fence regex"));
static TERRAFORM_BLOCK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)```terraform\n(.*?)\n```").expect("valid terraform fence regex"));

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerraformFile {
    Main,
    Variables,
    Outputs,
    Versions,
}

impl TerraformFile {
    pub fn filename(self) -> &'static str {
        match self {
            TerraformFile::Main => "main.tf",
            TerraformFile::Variables => "variables.tf",
            TerraformFile::Outputs => "outputs.tf",
            TerraformFile::Versions => "versions.tf",
        }
    }

    fn placeholder(self) -> &'static str {
        match self {
            TerraformFile::Main => "# No main.tf code available",
            TerraformFile::Variables => "# No variables defined",
            TerraformFile::Outputs => "# No outputs defined",
            TerraformFile::Versions => "# No versions file",
        }
    }
}

// Code for each of the four standard files (never empty).
#[derive(Debug, Clone, PartialEq)]
pub struct ExampleSections {
    pub main: String,
    pub variables: String,
    pub outputs: String,
    pub versions: String,
}

impl ExampleSections {
    pub fn get(&self, file: TerraformFile) -> &str {
        match file {
            TerraformFile::Main => &self.main,
            TerraformFile::Variables => &self.variables,
            TerraformFile::Outputs => &self.outputs,
            TerraformFile::Versions => &self.versions,
        }
    }
}

// Extracts the four standard files from `markdown`.
//
// `fallback_main` (the example's raw code) stands in for a missing main.tf
// before the placeholder does.
pub fn split_example_sections(markdown: &str, fallback_main: &str) -> ExampleSections {
    let sections: Vec<&str> = markdown.split(SECTION_DELIMITER).collect();

    let code_for = |file: TerraformFile| -> String {
        find_section(&sections, file.filename())
            .and_then(extract_code)
            .unwrap_or_else(|| match file {
                TerraformFile::Main if !fallback_main.trim().is_empty() => fallback_main.trim().to_string(),
                _ => file.placeholder().to_string(),
            })
    };

    ExampleSections {
        main: code_for(TerraformFile::Main),
        variables: code_for(TerraformFile::Variables),
        outputs: code_for(TerraformFile::Outputs),
        versions: code_for(TerraformFile::Versions),
    }
}

fn find_section<'a>(sections: &[&'a str], filename: &str) -> Option<&'a str> {
    sections
        .iter()
        .find(|section| section.trim().starts_with(filename))
        .copied()
}

// First ```hcl block, else first ```terraform block; trimmed. Empty bodies
// count as missing.
pub fn extract_code(section: &str) -> Option<String> {
    HCL_BLOCK
        .captures(section)
        .or_else(|| TERRAFORM_BLOCK.captures(section))
        .map(|caps| caps[1].trim().to_string())
        .filter(|code| !code.is_empty())
}

// Prefixes every line of `code` with `indent`.
pub fn indent_code(code: &str, indent: &str) -> String {
    code.split('\n')
        .map(|line| format!("{}{}", indent, line))
        .collect::<Vec<_>>()
        .join("\n")
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. What does (?s) do in the regexes?
//    - It lets `.` match newlines too
//    - Without it `(.*?)` would stop at the end of the first code line
//
// 2. Why `.*?` instead of `.*`?
//    - `?` makes the repetition lazy: it stops at the FIRST closing fence
//    - `.*` would run on to the last fence in the section
//
// 3. What is `caps[1]`?
//    - The text matched by the first (...) group in the pattern
//    - `caps[0]` would be the whole match, fences included
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    const FULL_BLOB: &str = "# Terraform Example: examples/simple\n\n## main.tf\n\n```hcl\nmodule \"lambda\" {\n  source = \"../../\"\n}\n```\n\n## variables.tf\n\n```hcl\nvariable \"name\" {}\n```\n\n## outputs.tf\n\n```terraform\noutput \"arn\" {\n  value = module.lambda.arn\n}\n```\n\n## versions.tf\n\n```hcl\nterraform {\n  required_version = \">= 1.0\"\n}\n```\n";

    #[test]
    fn test_splits_all_four_files() {
        let sections = split_example_sections(FULL_BLOB, "");

        assert_eq!(sections.main, "module \"lambda\" {\n  source = \"../../\"\n}");
        assert_eq!(sections.variables, "variable \"name\" {}");
        // terraform-tagged fences are accepted too
        assert_eq!(sections.outputs, "output \"arn\" {\n  value = module.lambda.arn\n}");
        assert!(sections.versions.contains("required_version"));
    }

    #[test]
    fn test_missing_sections_get_placeholders() {
        let sections = split_example_sections("## main.tf\n```hcl\nresource \"x\" \"y\" {}\n```", "");

        assert_eq!(sections.main, "resource \"x\" \"y\" {}");
        assert_eq!(sections.variables, "# No variables defined");
        assert_eq!(sections.outputs, "# No outputs defined");
        assert_eq!(sections.versions, "# No versions file");
    }

    #[test]
    fn test_main_falls_back_to_raw_code_then_placeholder() {
        let blob = "# Example\n\n## README.md\n\nJust docs.\n";
        assert_eq!(split_example_sections(blob, "module \"m\" {}").main, "module \"m\" {}");
        assert_eq!(split_example_sections(blob, "").main, "# No main.tf code available");
    }

    #[test]
    fn test_section_without_fence_uses_placeholder() {
        let blob = "## variables.tf\n\nNo fenced block here\n\n## outputs.tf\n\n```json\n{}\n```\n";
        let sections = split_example_sections(blob, "");
        assert_eq!(sections.variables, "# No variables defined");
        assert_eq!(sections.outputs, "# No outputs defined");
    }

    #[test]
    fn test_hcl_is_preferred_over_terraform() {
        let section = "main.tf\n\n```terraform\nold\n```\n\n```hcl\nnew\n```\n";
        assert_eq!(extract_code(section).as_deref(), Some("new"));
    }

    #[test]
    fn test_indent_code() {
        assert_eq!(indent_code("a\n  b", SINGLE_TAB_INDENT), "    a\n      b");
        assert_eq!(indent_code("x", NESTED_TAB_INDENT), "        x");
    }

    #[test]
    fn test_get_by_file() {
        let sections = split_example_sections(FULL_BLOB, "");
        assert_eq!(sections.get(TerraformFile::Variables), "variable \"name\" {}");
        assert_eq!(TerraformFile::Versions.filename(), "versions.tf");
    }
}
