use std::fmt;

use gistpp_markdown::{Document, NodeKind, NodeRef};

use crate::rules::SpecRules;

/// The structural rule a diagnostic comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rule {
    SingleTitle,
    TitleChildren,
    AllowedSection,
    RequiredSection,
    BehaviorBody,
    DuplicateSection,
}

impl Rule {
    /// Stable kebab-case name.
    pub fn name(self) -> &'static str {
        match self {
            Rule::SingleTitle => "single-title",
            Rule::TitleChildren => "title-children",
            Rule::AllowedSection => "allowed-section",
            Rule::RequiredSection => "required-section",
            Rule::BehaviorBody => "behavior-body",
            Rule::DuplicateSection => "duplicate-section",
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub rule: Rule,
    pub message: String,
    /// 1-based line of the offending node, when it came from the source.
    pub line: Option<usize>,
    pub column: Option<usize>,
}

impl Diagnostic {
    fn at(rule: Rule, node: NodeRef<'_>, message: impl Into<String>) -> Self {
        let pos = node.position();
        Self {
            rule,
            message: message.into(),
            line: pos.map(|p| p.line),
            column: pos.map(|p| p.column),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.line, self.column) {
            (Some(line), Some(column)) => write!(f, "{line}:{column}: ")?,
            (Some(line), None) => write!(f, "{line}: ")?,
            _ => {}
        }
        write!(f, "{} [{}]", self.message, self.rule)
    }
}

/// Outcome of [`validate`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Validation {
    pub diagnostics: Vec<Diagnostic>,
}

impl Validation {
    pub fn is_valid(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// True if any diagnostic comes from `rule`.
    pub fn violates(&self, rule: Rule) -> bool {
        self.diagnostics.iter().any(|d| d.rule == rule)
    }
}

/// Checks the layout of a spec document. Never fails; every problem found
/// becomes a diagnostic.
///
/// When there is no level-1 title at the start of the document nothing else
/// is checked.
pub fn validate(doc: &Document, rules: &SpecRules) -> Validation {
    let mut out = Validation::default();
    let root = doc.root();

    let Some(title) = root
        .child(0)
        .filter(|n| n.kind() == NodeKind::Heading(1))
    else {
        out.diagnostics.push(Diagnostic {
            rule: Rule::SingleTitle,
            message: "Spec must start with a single level-1 heading".into(),
            line: None,
            column: None,
        });
        return out;
    };
    for extra in root.children().skip(1) {
        out.diagnostics.push(Diagnostic::at(
            Rule::SingleTitle,
            extra,
            format!("Only one top-level node allowed, found {}", extra.kind()),
        ));
    }

    let mut sections: Vec<(String, NodeRef<'_>)> = vec![];
    for child in title.children() {
        match child.kind() {
            NodeKind::Paragraph => {}
            NodeKind::Heading(2) => {
                let name = child.text();
                if !rules.is_allowed(&name) {
                    out.diagnostics.push(Diagnostic::at(
                        Rule::AllowedSection,
                        child,
                        format!(
                            "Invalid section \"{name}\": only {} allowed",
                            rules.allowed_sections.join(", ")
                        ),
                    ));
                }
                if sections.iter().any(|(seen, _)| *seen == name) {
                    out.diagnostics.push(Diagnostic::at(
                        Rule::DuplicateSection,
                        child,
                        format!("Section \"{name}\" appears more than once"),
                    ));
                } else {
                    sections.push((name, child));
                }
            }
            other => out.diagnostics.push(Diagnostic::at(
                Rule::TitleChildren,
                child,
                format!("Only text and level-2 headings may sit under the title, found {other}"),
            )),
        }
    }

    for required in &rules.required_sections {
        if !sections.iter().any(|(name, _)| name == required) {
            out.diagnostics.push(Diagnostic::at(
                Rule::RequiredSection,
                title,
                format!("Missing required section \"{required}\""),
            ));
        }
    }

    if let Some((_, behavior)) = sections
        .iter()
        .find(|(name, _)| name == SpecRules::BEHAVIOR)
    {
        check_behavior(*behavior, &mut out);
    }

    if !out.is_valid() {
        log::debug!("spec has {} problems", out.diagnostics.len());
    }
    out
}

/// Behavior holds either level-3 subsections or prose, never both.
fn check_behavior(behavior: NodeRef<'_>, out: &mut Validation) {
    let mut has_subsections = false;
    let mut has_prose = false;
    for child in behavior.children() {
        match child.kind() {
            NodeKind::Heading(3) => has_subsections = true,
            NodeKind::List | NodeKind::Paragraph => has_prose = true,
            other => out.diagnostics.push(Diagnostic::at(
                Rule::BehaviorBody,
                child,
                format!("Invalid {other} inside Behavior"),
            )),
        }
    }
    if has_subsections && has_prose {
        out.diagnostics.push(Diagnostic::at(
            Rule::BehaviorBody,
            behavior,
            "Behavior must have either subheadings or text, not both",
        ));
    }
}
