//! Lossless Markdown document model.
//!
//! Parses a small Markdown subset (ATX headings, fenced code blocks,
//! paragraphs with links and images) into a tree that reproduces its input
//! byte-for-byte and regenerates only what has been edited.
//!
//! ```
//! use gistpp_markdown::{Document, NodeKind};
//!
//! let mut doc = Document::parse("# Title\n\nSee [docs](http://a).\n");
//! let link = doc.root().find_all(NodeKind::Link).next().unwrap().id();
//! doc.set_href(link, "http://b").unwrap();
//! assert_eq!(doc.to_markdown(), "# Title\n\nSee [docs](http://b).\n");
//! ```

pub mod document;
pub mod error;
pub mod io;
pub mod node;
pub mod parsing;
pub mod serialize;
pub mod trivia;

pub use document::{Children, Document, Edit, NodeRef, Position, Walk};
pub use error::{Capability, DocumentError};
pub use io::{Encoding, IoError};
pub use node::{NodeData, NodeId, NodeKind};
pub use parsing::rope::Span;
