//! Block syntax, one type per construct.
//!
//! Each type owns its delimiters and its line grammar; the classifier and
//! builder only call into these.

pub mod code_fence;
pub mod heading;

pub use code_fence::{CodeFence, FenceKind, FenceLine};
pub use heading::{AtxHeading, HeadingLine};
