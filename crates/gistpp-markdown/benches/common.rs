// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_markdown_content(size: usize) -> String {
    let base = "# Title\n\n## Section\n\nParagraph with a [link](http://example.com) and ![img](a.png).\n\n```rust\nfn example() {\n    println!(\"Hello\");\n}\n```\n\n";
    base.repeat(size)
}

#[allow(dead_code)]
pub fn generate_spec_document(sections: usize, depth: usize) -> String {
    let mut content = String::from("# Calculator Library\n\nA small arithmetic library.\n\n");

    for section in 0..sections {
        content.push_str(&format!("## Section {section}\n\n"));
        content.push_str(&generate_nested_content(depth, 3));
    }

    content
}

#[allow(dead_code)]
fn generate_nested_content(remaining_depth: usize, current_level: usize) -> String {
    if remaining_depth == 0 {
        return String::new();
    }

    let mut content = String::new();
    let header_prefix = "#".repeat(current_level);

    content.push_str(&format!("{header_prefix} Subsection Level {current_level}\n\n"));
    content.push_str("Some paragraph content with a [reference](docs/ref.md). This helps create realistic document structure for benchmarking.\n\n");

    if current_level % 2 == 0 {
        content.push_str("````md\n```\nnested fence\n```\n````\n\n");
    }

    if remaining_depth > 1 && current_level < 6 {
        content.push_str(&generate_nested_content(
            remaining_depth - 1,
            current_level + 1,
        ));
    }

    content
}
