use std::fmt;

use thiserror::Error;

use crate::node::{NodeId, NodeKind};

/// A mutation a node kind may or may not support.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    TextAssignment,
    Href,
    InfoString,
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Capability::TextAssignment => f.write_str("Text assignment"),
            Capability::Href => f.write_str("href assignment"),
            Capability::InfoString => f.write_str("info string assignment"),
        }
    }
}

/// Misuse of the mutation API. Parsing itself never fails.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DocumentError {
    #[error("{kind} does not support {capability}")]
    Unsupported { kind: NodeKind, capability: Capability },

    #[error("{parent} cannot contain {child}")]
    InvalidChild { parent: NodeKind, child: NodeKind },

    #[error("Heading level {0} is outside 1-6")]
    InvalidHeadingLevel(u8),

    #[error("Node {0} does not belong to this document")]
    UnknownNode(NodeId),
}
