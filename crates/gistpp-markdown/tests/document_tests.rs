//! Behavioural tests for the document model through its public API.

use gistpp_markdown::{Document, DocumentError, NodeData, NodeKind, NodeRef};
use pretty_assertions::assert_eq;
use rstest::rstest;

fn titles<'a>(nodes: impl Iterator<Item = NodeRef<'a>>) -> Vec<String> {
    nodes.map(|n| n.text()).collect()
}

#[rstest]
#[case::empty("")]
#[case::only_blanks("\n \n\t\n")]
#[case::no_trailing_newline("# Title")]
#[case::whitespace_tail("para\n\n   ")]
#[case::crlf("# A\r\n\r\ntext\r\n")]
#[case::lone_cr("a\rb\r\n")]
#[case::cr_only("# A\r## B\rtext\r")]
#[case::unicode("# Überschrift ✓\n\nÄ [ö](ü) ![ß](€)\n")]
#[case::brackets_without_links("[a] (b) [c](d [e]\n")]
#[case::heading_trailing_hashes("## Title ##\n")]
#[case::deep_nesting("# 1\n## 2\n### 3\n#### 4\n##### 5\n###### 6\n# 1b\n")]
#[case::fence_in_paragraph("text\n```\ncode\n```\nmore\n")]
fn unedited_documents_round_trip(#[case] md: &str) {
    let doc = Document::parse(md);
    assert_eq!(doc.to_markdown(), md);
    assert!(!doc.is_dirty());
}

#[rstest]
#[case("# A\n\nSome [x](y) text\n")]
#[case("````\nnot closed\n```\n")]
#[case("\n\n## Lonely\n~~~\n~~\n~~~~\n")]
fn serialization_is_idempotent(#[case] md: &str) {
    let once = Document::parse(md).to_markdown();
    let twice = Document::parse(&once).to_markdown();
    assert_eq!(twice, once);
}

#[test]
fn heading_nesting() {
    // Given
    let doc = Document::parse("# A\n## B\n### C\n## D\n");

    // When
    let a = doc.root().child(0).unwrap();

    // Then
    assert_eq!(doc.root().child_count(), 1);
    assert_eq!(titles(a.children()), vec!["B", "D"]);
    assert_eq!(titles(a.child(0).unwrap().children()), vec!["C"]);
    assert_eq!(a.child(1).unwrap().child_count(), 0);
}

#[test]
fn carriage_return_line_endings_nest_headings() {
    let md = "# A\r## B\rtext\r";
    let mut doc = Document::parse(md);

    let a = doc.root().child(0).unwrap();
    let b = a.child(0).unwrap();
    assert_eq!(doc.root().child_count(), 1);
    assert_eq!(a.text(), "A");
    assert_eq!(titles(a.children()), vec!["B"]);
    assert_eq!(b.child(0).map(|p| p.kind()), Some(NodeKind::Paragraph));
    assert_eq!(b.child(0).map(|p| p.text()), Some("text".to_string()));
    assert_eq!(b.child(0).and_then(|p| p.position()).map(|p| p.line), Some(3));

    let b = b.id();
    doc.set_text(b, "Renamed").unwrap();
    assert_eq!(doc.to_markdown(), "# A\r## Renamed\rtext\r");
}

#[test]
fn code_edit_keeps_a_carriage_return_closing_fence() {
    let mut doc = Document::parse("~~~~\ncode\n~~~~\rafter\n");
    let code = doc.root().find_all(NodeKind::CodeBlock).next().unwrap().id();

    doc.set_text(code, "x\n").unwrap();

    assert_eq!(doc.to_markdown(), "~~~~\nx\n~~~~\rafter\n");
}

#[test]
fn longer_fence_is_not_closed_by_shorter() {
    let md = "````\ncode\n```\n";
    let doc = Document::parse(md);
    assert_eq!(doc.root().find_all(NodeKind::CodeBlock).count(), 0);
    assert!(
        doc.root()
            .children()
            .all(|n| n.kind() == NodeKind::Paragraph)
    );
    assert_eq!(doc.to_markdown(), md);
}

#[test]
fn link_scanning() {
    let doc = Document::parse("See [docs](http://x) and ![img](y.png).");
    let para = doc.root().child(0).unwrap();
    let kinds: Vec<_> = para.children().map(|n| n.kind()).collect();
    assert_eq!(
        kinds,
        vec![
            NodeKind::Text,
            NodeKind::Link,
            NodeKind::Text,
            NodeKind::Image,
            NodeKind::Text,
        ]
    );
    let raw: Vec<_> = para.children().map(|n| n.to_markdown()).collect();
    assert_eq!(raw, vec!["See ", "[docs](http://x)", " and ", "![img](y.png)", "."]);

    let link = para.child(1).unwrap();
    assert_eq!(link.text(), "docs");
    assert_eq!(link.href(), Some("http://x"));
    let image = para.child(3).unwrap();
    assert_eq!(image.text(), "img");
    assert_eq!(image.href(), Some("y.png"));
}

#[test]
fn capability_error_on_root() {
    let mut doc = Document::parse("# T\n");
    let err = doc.set_text(doc.root().id(), "nope").unwrap_err();
    assert!(matches!(err, DocumentError::Unsupported { kind: NodeKind::Root, .. }));
    assert_eq!(err.to_string(), "Root does not support Text assignment");
    assert_eq!(doc.to_markdown(), "# T\n");
}

#[test]
fn minimal_diff_on_heading_rename() {
    let md = "#  Old Title  \n\nIntro  with [odd](  spacing  ).\n\n##\tBehavior\n\n```\nx\n```\n";
    let mut doc = Document::parse(md);
    let title = doc.title().unwrap().id();

    doc.set_text(title, "  New Title ").unwrap();

    assert_eq!(
        doc.to_markdown(),
        "#  New Title  \n\nIntro  with [odd](  spacing  ).\n\n##\tBehavior\n\n```\nx\n```\n"
    );
}

#[test]
fn minimal_diff_on_link_edit() {
    let md = "# T\n\n  Lead   [ label ]( old.md )  tail\nsecond line\n\nOther para.\n";
    let mut doc = Document::parse(md);
    let link = doc.root().find_all(NodeKind::Link).next().unwrap().id();

    doc.set_href(link, "new.md").unwrap();
    doc.set_text(link, "renamed").unwrap();

    assert_eq!(
        doc.to_markdown(),
        "# T\n\n  Lead   [ renamed ]( new.md )  tail\nsecond line\n\nOther para.\n"
    );
}

#[test]
fn code_block_edit_keeps_fences() {
    let md = "  ~~~~  js  \nold();\n  ~~~~~ \n\nafter\n";
    let mut doc = Document::parse(md);
    let code = doc.root().find_all(NodeKind::CodeBlock).next().unwrap().id();

    doc.set_text(code, "fresh();\n").unwrap();
    assert_eq!(doc.to_markdown(), "  ~~~~  js  \nfresh();\n  ~~~~~ \n\nafter\n");

    doc.set_info_string(code, "ts").unwrap();
    assert_eq!(doc.to_markdown(), "  ~~~~ ts\nfresh();\n  ~~~~~ \n\nafter\n");
}

#[test]
fn built_document_serializes() {
    let mut doc = Document::new();
    let title = doc
        .append_child(doc.root().id(), NodeData::heading(1, "Greeter App").unwrap())
        .unwrap();
    doc.append_child(title, NodeData::paragraph("Says hello."))
        .unwrap();
    let behavior = doc
        .append_child(title, NodeData::heading(2, "Behavior").unwrap())
        .unwrap();
    doc.append_child(behavior, NodeData::code_block("sh", "echo hi"))
        .unwrap();

    let md = doc.to_markdown();
    assert_eq!(
        md,
        "# Greeter App\n\nSays hello.\n\n## Behavior\n\n```sh\necho hi\n```\n\n"
    );
    assert_eq!(Document::parse(&md).to_markdown(), md);
}

#[test]
fn walk_and_find_all() {
    let doc = Document::parse("# T\n\n[a](1)\n\n## S\n\n[b](2) [c](3)\n");
    let hrefs: Vec<_> = doc
        .root()
        .find_all(NodeKind::Link)
        .filter_map(|n| n.href())
        .collect();
    assert_eq!(hrefs, vec!["1", "2", "3"]);
    assert_eq!(doc.root().walk().count(), doc.node_count());
}

#[test]
fn positions_point_at_node_starts() {
    let doc = Document::parse("# T\n\nsee [x](y)\n");
    let link = doc.root().find_all(NodeKind::Link).next().unwrap();
    let pos = link.position().unwrap();
    assert_eq!((pos.line, pos.column), (3, 5));
}

#[test]
fn minimal_diff_touches_only_the_link_target() {
    let md = "# Notes\n\nFirst [one](http://a.example) para.\n\n  Second\t[two](http://old.example)  para  \n\nThird ![three](c.png).\n";
    let mut doc = Document::parse(md);
    let link = doc
        .root()
        .find_all(NodeKind::Link)
        .find(|n| n.text() == "two")
        .unwrap()
        .id();

    doc.set_href(link, "http://new.example").unwrap();

    assert_eq!(
        doc.to_markdown(),
        md.replacen("http://old.example", "http://new.example", 1)
    );
}
