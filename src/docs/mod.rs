// src/docs/mod.rs
// =============================================================================
// The documentation side: catalog JSON in, MkDocs markdown out.
//
// Submodules:
// - sections: splits an example's combined markdown back into per-file code
// - render:   page templates (frontmatter, at-a-glance, tabs, indexes)
// - writer:   lays the pages out on disk by category
// =============================================================================

mod render;
mod sections;
mod writer;

pub use writer::{generate_all_docs, DocsOptions};
