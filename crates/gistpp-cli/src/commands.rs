use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use gistpp_config::Config;
use gistpp_markdown::{Document, Encoding, parsing::snapshot};
use gistpp_spec::{SpecDocument, SpecRules, validate};

/// Markdown files directly inside `dir`, sorted.
pub fn spec_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dir).with_context(|| format!("Reading {}", dir.display()))? {
        let path = entry?.path();
        if path.is_file()
            && let Some(ext) = path.extension()
            && ext == "md"
        {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// Validates each file and reports problems as `path:line:col: message`.
/// Returns false if any file is invalid.
pub fn check(
    files: &[PathBuf],
    config: &Config,
    encoding: Encoding,
    out: &mut impl Write,
) -> Result<bool> {
    let rules = SpecRules::from(config);
    let mut all_ok = true;

    for path in files {
        let doc = Document::from_file(path, encoding)?;
        let validation = validate(&doc, &rules);
        if !validation.is_valid() {
            all_ok = false;
            log::warn!(
                "{} has {} problems",
                path.display(),
                validation.diagnostics.len()
            );
            for diag in &validation.diagnostics {
                writeln!(out, "{}:{diag}", path.display())?;
            }
            continue;
        }

        match SpecDocument::read(&doc, &rules) {
            Ok(spec) => writeln!(
                out,
                "{}: ok ({}, {} behavior nodes)",
                path.display(),
                spec.target_type,
                spec.behavior().len()
            )?,
            Err(err) => {
                all_ok = false;
                writeln!(out, "{}: {err}", path.display())?;
            }
        }
    }

    log::info!("checked {} files", files.len());
    Ok(all_ok)
}

pub fn outline(path: &Path, encoding: Encoding, out: &mut impl Write) -> Result<bool> {
    let doc = Document::from_file(path, encoding)?;
    write!(out, "{}", snapshot::outline(&doc))?;
    Ok(true)
}

/// Parses and reserializes `path`, reporting the first byte that differs.
pub fn roundtrip(path: &Path, encoding: Encoding, out: &mut impl Write) -> Result<bool> {
    let bytes = fs::read(path).with_context(|| format!("Reading {}", path.display()))?;
    let doc = Document::from_file(path, encoding)?;
    let written = doc.to_markdown();

    match first_difference(&bytes, written.as_bytes()) {
        None => {
            writeln!(out, "{}: identical ({} bytes)", path.display(), bytes.len())?;
            Ok(true)
        }
        Some(offset) => {
            writeln!(out, "{}: differs at byte {offset}", path.display())?;
            Ok(false)
        }
    }
}

fn first_difference(a: &[u8], b: &[u8]) -> Option<usize> {
    let common = a.iter().zip(b).take_while(|(x, y)| x == y).count();
    (common < a.len().max(b.len())).then_some(common)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    const VALID: &str = "# Greeter App\n\nSays hi.\n\n## Behavior\n\nPrints hello.\n";
    const INVALID: &str = "# Greeter App\n\n## Extras\n";

    fn write(dir: &TempDir, name: &str, content: &[u8]) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn check_reports_each_file() {
        let dir = TempDir::new().unwrap();
        let good = write(&dir, "good.md", VALID.as_bytes());
        let bad = write(&dir, "bad.md", INVALID.as_bytes());

        let mut out = Vec::new();
        let files = [good.clone(), bad.clone()];
        let ok = check(&files, &Config::default(), Encoding::Utf8, &mut out).unwrap();

        assert!(!ok);
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines[0], format!("{}: ok (App, 1 behavior nodes)", good.display()));
        assert!(lines[1].starts_with(&format!("{}:3:1: Invalid section", bad.display())));
        assert!(lines[2].ends_with("[required-section]"));
    }

    #[test]
    fn check_reports_unknown_target() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "list.md", b"# Shopping List\n\n## Behavior\n\nMilk.\n");

        let mut out = Vec::new();
        let ok = check(&[path], &Config::default(), Encoding::Utf8, &mut out).unwrap();

        assert!(!ok);
        assert!(String::from_utf8(out).unwrap().contains("Unknown target type"));
    }

    #[test]
    fn spec_files_only_lists_markdown() {
        let dir = TempDir::new().unwrap();
        write(&dir, "b.md", b"");
        write(&dir, "a.md", b"");
        write(&dir, "notes.txt", b"");
        fs::create_dir(dir.path().join("sub.md")).unwrap();

        let names: Vec<_> = spec_files(dir.path())
            .unwrap()
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["a.md", "b.md"]);
    }

    #[test]
    fn outline_prints_tree() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "spec.md", VALID.as_bytes());

        let mut out = Vec::new();
        outline(&path, Encoding::Utf8, &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("Root\n  Heading1 \"Greeter App\"\n"));
    }

    #[test]
    fn roundtrip_is_identical() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "spec.md", b"\r\n#  Odd  \r\n````\nx\n```\n");

        let mut out = Vec::new();
        assert!(roundtrip(&path, Encoding::Utf8, &mut out).unwrap());
        assert!(String::from_utf8(out).unwrap().ends_with("identical (23 bytes)\n"));
    }

    #[test]
    fn lossy_roundtrip_differs() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "spec.md", b"ok\n\xff\n");

        let mut out = Vec::new();
        assert!(!roundtrip(&path, Encoding::Utf8Lossy, &mut out).unwrap());
        assert!(String::from_utf8(out).unwrap().ends_with("differs at byte 3\n"));
    }

    #[test]
    fn differences() {
        assert_eq!(first_difference(b"abc", b"abc"), None);
        assert_eq!(first_difference(b"abc", b"abd"), Some(2));
        assert_eq!(first_difference(b"ab", b"abc"), Some(2));
    }
}
