//! # Block Parsing
//!
//! Two-phase block parsing over a line-oriented grammar.
//!
//! ## Parsing Phases
//!
//! 1. **Line Classification** (`classify`): each line is classified into a
//!    `LineClass` holding local facts (blank, fence shape, heading shape)
//!
//! 2. **Block Construction** (`builder`): a `BlockBuilder` walks the
//!    classified lines, keeps a heading stack and attaches blocks to the
//!    document arena
//!
//! ## Modules
//!
//! - **`kinds`**: block-specific types with owned delimiters (CodeFence, AtxHeading)
//! - **`classify`**: `MarkdownLineClassifier` produces `LineClass` for each line
//! - **`builder`**: `BlockBuilder` state machine for block construction
//!
//! ## Key Invariants
//!
//! - Blank lines are never blocks: they become the leading trivia of the
//!   document or the suffix of the block before them
//! - Fenced code blocks are raw zones: no block or inline parsing inside
//! - An unterminated fence is not a code block; its opening line is
//!   reparsed as paragraph content

pub mod builder;
pub mod classify;
pub mod kinds;

pub use builder::BlockBuilder;
pub use classify::{LineClass, MarkdownLineClassifier};
