//! # Inline Scanning
//!
//! Cursor-based scanning of paragraph content into text, link and image
//! tokens.
//!
//! ## Modules
//!
//! - **`types`**: `InlineNode` enum (Text, Link)
//! - **`kinds`**: `LinkSyntax` delimiter constants
//! - **`cursor`**: `Cursor` for byte-by-byte scanning with position tracking
//! - **`parser`**: `parse_inline()` entry point with `try_parse_*` helpers
//!
//! Nested brackets and emphasis are not recognised; anything that does not
//! form a complete `[label](href)` stays text.

pub mod cursor;
pub mod kinds;
pub mod parser;
pub mod types;

pub use parser::parse_inline;
pub use types::InlineNode;
