use crate::document::Document;

/// Validates parser output invariants.
///
/// Asserts that:
/// - Every node span is within the source bounds
/// - Child spans are contained within their parent's span
/// - Every child points back at its parent
/// - The unedited document serializes to exactly `source`
///
/// # Panics
/// Panics with a descriptive message if any invariant is violated.
pub fn check(doc: &Document, source: &str) {
    let n = source.len();
    for node in doc.root().walk() {
        let Some(span) = node.source_span() else {
            panic!("parsed node {:?} has no span", node);
        };
        assert!(
            span.start <= span.end && span.end <= n,
            "span out of bounds: {span:?} (source len: {n})"
        );
        for child in node.children() {
            assert_eq!(
                child.parent().map(|p| p.id()),
                Some(node.id()),
                "child {child:?} does not point back at {node:?}"
            );
            if let Some(child_span) = child.source_span() {
                assert!(
                    span.contains(child_span),
                    "child span not contained in parent: child {child_span:?}, parent {span:?}"
                );
            }
        }
    }
    assert_eq!(doc.to_markdown(), source, "round trip changed the text");
}
