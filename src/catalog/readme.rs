// src/catalog/readme.rs
// =============================================================================
// Reads module inputs and outputs out of a terraform-aws-modules README.
//
// Those READMEs are generated by terraform-docs and contain two tables:
//
//   ## Inputs
//   | Name | Description | Type | Default | Required |
//   |------|-------------|------|---------|:--------:|
//   | <a name="input_create"></a> [create](#input\_create) | Controls ... | `bool` | `true` | no |
//
//   ## Outputs
//   | Name | Description |
//   |------|-------------|
//   | <a name="output_arn"></a> [arn](#output\_arn) | The ARN of ... |
//
// We walk pulldown-cmark's event stream, remember which `##` heading we are
// under, and keep the text of the first two cells of every body row.
// =============================================================================

use pulldown_cmark::{Event, Options, Parser, Tag};

use super::DocumentedItem;

#[derive(Debug, Clone, Copy, PartialEq)]
enum Section {
    Inputs,
    Outputs,
    Other,
}

// Module inputs and outputs listed in a README.
#[derive(Debug, Default, PartialEq)]
pub struct ModuleInterface {
    pub variables: Vec<DocumentedItem>,
    pub outputs: Vec<DocumentedItem>,
}

// Parses the `## Inputs` and `## Outputs` tables of a module README.
pub fn parse_module_interface(readme: &str) -> ModuleInterface {
    let mut interface = ModuleInterface::default();

    let mut section = Section::Other;
    let mut in_heading = false;
    let mut heading = String::new();

    let mut in_table_head = false;
    let mut in_cell = false;
    let mut cell = String::new();
    let mut row: Vec<String> = Vec::new();

    for event in Parser::new_ext(readme, Options::ENABLE_TABLES) {
        match event {
            Event::Start(Tag::Heading(..)) => {
                in_heading = true;
                heading.clear();
            }
            Event::End(Tag::Heading(..)) => {
                in_heading = false;
                section = match heading.trim() {
                    "Inputs" => Section::Inputs,
                    "Outputs" => Section::Outputs,
                    _ => Section::Other,
                };
            }

            Event::Start(Tag::TableHead) => in_table_head = true,
            Event::End(Tag::TableHead) => {
                in_table_head = false;
                row.clear();
            }
            Event::Start(Tag::TableRow) => row.clear(),
            Event::Start(Tag::TableCell) => {
                in_cell = true;
                cell.clear();
            }
            Event::End(Tag::TableCell) => {
                in_cell = false;
                row.push(cell.trim().to_string());
            }
            Event::End(Tag::TableRow) => {
                if in_table_head || row.len() < 2 || row[0].is_empty() {
                    continue;
                }
                let item = DocumentedItem {
                    name: row[0].clone(),
                    description: row[1].clone(),
                };
                match section {
                    Section::Inputs => interface.variables.push(item),
                    Section::Outputs => interface.outputs.push(item),
                    Section::Other => {}
                }
            }

            Event::Text(text) | Event::Code(text) => {
                if in_heading {
                    heading.push_str(&text);
                } else if in_cell {
                    cell.push_str(&text);
                }
            }
            _ => {}
        }
    }

    interface
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. What is an event stream?
//    - pulldown-cmark doesn't build a tree; it yields Start/End/Text events
//    - Start(TableCell), Text("create"), End(TableCell) for one cell
//    - We keep a few flags (in_heading, in_cell) to know where we are
//
// 2. Why `Event::Text(text) | Event::Code(text)`?
//    - One arm can match several patterns with `|`
//    - Both variants carry the same kind of value, so they bind the same name
// -----------------------------------------------------------------------------
