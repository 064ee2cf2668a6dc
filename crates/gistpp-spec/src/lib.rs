//! Reading and validating gistpp specification documents.
//!
//! A spec is a Markdown file with a single level-1 title naming what is
//! being built, an optional introduction, and a fixed set of level-2
//! sections (`Behavior`, `Tests`, `Dependencies` by default).
//!
//! ## Modules
//!
//! - **`rules`**: `SpecRules`, the configurable section and target lists
//! - **`reader`**: `SpecDocument::read` for well-formed specs
//! - **`validate`**: `validate` collecting structural diagnostics

pub mod reader;
pub mod rules;
pub mod validate;

pub use reader::{SpecDocument, SpecError};
pub use rules::SpecRules;
pub use validate::{Diagnostic, Rule, Validation, validate};
