use std::fmt;
use std::fs;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::document::Document;

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid UTF-8 in {0}")]
    InvalidUtf8(String),
    #[error("Unknown encoding: {0}")]
    UnknownEncoding(String),
}

/// How file bytes are decoded into text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Encoding {
    /// Reject input that is not valid UTF-8.
    #[default]
    Utf8,
    /// Replace invalid sequences with U+FFFD.
    Utf8Lossy,
}

impl Encoding {
    pub fn label(self) -> &'static str {
        match self {
            Encoding::Utf8 => "utf-8",
            Encoding::Utf8Lossy => "utf-8-lossy",
        }
    }

    /// Decodes `bytes`; `origin` names the source in error messages.
    pub fn decode(self, bytes: Vec<u8>, origin: &str) -> Result<String, IoError> {
        match self {
            Encoding::Utf8 => {
                String::from_utf8(bytes).map_err(|_| IoError::InvalidUtf8(origin.to_string()))
            }
            Encoding::Utf8Lossy => Ok(String::from_utf8_lossy(&bytes).into_owned()),
        }
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Encoding {
    type Err = IoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "utf-8" | "utf8" => Ok(Encoding::Utf8),
            "utf-8-lossy" | "utf8-lossy" => Ok(Encoding::Utf8Lossy),
            _ => Err(IoError::UnknownEncoding(s.to_string())),
        }
    }
}

impl Document {
    /// Reads and parses a Markdown file, remembering its path.
    pub fn from_file(path: impl AsRef<Path>, encoding: Encoding) -> Result<Self, IoError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(IoError::NotFound(path.to_path_buf()));
        }
        let text = encoding.decode(fs::read(path)?, &path.display().to_string())?;
        let mut doc = Document::parse(&text);
        doc.source_path = Some(path.to_path_buf());
        log::debug!("loaded {} ({encoding})", path.display());
        Ok(doc)
    }

    /// Reads all of `reader` as UTF-8 and parses it.
    pub fn from_reader(mut reader: impl Read) -> Result<Self, IoError> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;
        let text = Encoding::Utf8.decode(bytes, "stream")?;
        Ok(Document::parse(&text))
    }

    /// Same as [`Document::to_markdown`].
    pub fn save_to_string(&self) -> String {
        self.to_markdown()
    }

    pub fn save_to_writer(&self, mut writer: impl Write) -> Result<(), IoError> {
        writer.write_all(self.to_markdown().as_bytes())?;
        writer.flush()?;
        Ok(())
    }

    /// Writes the document as UTF-8, replacing any existing file.
    ///
    /// The parent directory must already exist.
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<(), IoError> {
        let path = path.as_ref();
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.is_dir()
        {
            return Err(IoError::NotFound(parent.to_path_buf()));
        }
        fs::write(path, self.to_markdown())?;
        log::debug!("saved {}", path.display());
        Ok(())
    }
}
