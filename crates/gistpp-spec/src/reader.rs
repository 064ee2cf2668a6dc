use gistpp_markdown::{Document, NodeId, NodeKind, NodeRef};
use thiserror::Error;

use crate::rules::SpecRules;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SpecError {
    #[error("Spec has no level-1 title")]
    MissingTitle,

    #[error("Unknown target type in \"{title}\": title should contain one of {}", .expected.join(", "))]
    UnknownTargetType { title: String, expected: Vec<String> },

    #[error("Spec has no \"{0}\" section")]
    MissingSection(String),
}

/// A level-2 section under the title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub title: String,
    pub heading: NodeId,
    /// Direct children of the section heading.
    pub body: Vec<NodeId>,
}

/// The parts of a spec a generator works from. Node ids point into the
/// document the spec was read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecDocument {
    pub title: String,
    pub title_node: NodeId,
    /// One of the configured target types.
    pub target_type: String,
    /// Paragraphs directly under the title, separated by a blank line.
    pub intro: String,
    pub sections: Vec<Section>,
}

impl SpecDocument {
    /// Reads a spec without checking its layout; run
    /// [`crate::validate`] first to get diagnostics for malformed input.
    pub fn read(doc: &Document, rules: &SpecRules) -> Result<Self, SpecError> {
        let title_node = doc
            .root()
            .child(0)
            .filter(|n| n.kind() == NodeKind::Heading(1))
            .ok_or(SpecError::MissingTitle)?;
        let title = title_node.text();

        let target_type = rules
            .classify(&title)
            .ok_or_else(|| SpecError::UnknownTargetType {
                title: title.clone(),
                expected: rules.target_types.clone(),
            })?
            .to_string();

        let mut intro = vec![];
        let mut sections: Vec<Section> = vec![];
        for child in title_node.children() {
            match child.kind() {
                NodeKind::Paragraph => intro.push(child.text()),
                NodeKind::Heading(2) => {
                    let section = Section {
                        title: child.text(),
                        heading: child.id(),
                        body: child.children().map(NodeRef::id).collect(),
                    };
                    // A repeated title replaces the earlier section in place
                    match sections.iter_mut().find(|s| s.title == section.title) {
                        Some(earlier) => *earlier = section,
                        None => sections.push(section),
                    }
                }
                _ => {}
            }
        }

        if let Some(missing) = rules
            .required_sections
            .iter()
            .find(|r| !sections.iter().any(|s| &s.title == *r))
        {
            return Err(SpecError::MissingSection(missing.clone()));
        }

        log::debug!(
            "read {target_type} spec \"{title}\" with {} sections",
            sections.len()
        );

        Ok(Self {
            title,
            title_node: title_node.id(),
            target_type,
            intro: intro.join("\n\n"),
            sections,
        })
    }

    pub fn section(&self, title: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.title == title)
    }

    /// Nodes under `## Behavior`.
    pub fn behavior(&self) -> &[NodeId] {
        self.section_body(SpecRules::BEHAVIOR)
    }

    /// Nodes under `## Tests`; empty when there is no such section.
    pub fn tests(&self) -> &[NodeId] {
        self.section_body(SpecRules::TESTS)
    }

    /// Nodes under `## Dependencies`; empty when there is no such section.
    pub fn dependencies(&self) -> &[NodeId] {
        self.section_body(SpecRules::DEPENDENCIES)
    }

    fn section_body(&self, title: &str) -> &[NodeId] {
        self.section(title)
            .map(|s| s.body.as_slice())
            .unwrap_or_default()
    }
}
