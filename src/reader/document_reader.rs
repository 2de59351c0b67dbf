use crate::error::{DdpError, Result};
use std::fs;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentSource {
    /// Content was read from the input file.
    File,
    /// The input file was absent and an empty document stands in for it.
    Missing,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    content: String,
    source: DocumentSource,
}

impl Document {
    pub fn new<S: Into<String>>(content: S) -> Self {
        Self {
            content: content.into(),
            source: DocumentSource::File,
        }
    }

    pub fn missing() -> Self {
        Self {
            content: String::new(),
            source: DocumentSource::Missing,
        }
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn source(&self) -> DocumentSource {
        self.source
    }

    pub fn is_missing(&self) -> bool {
        self.source == DocumentSource::Missing
    }

    pub fn len(&self) -> usize {
        self.content.len()
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}

/// Result of trying to read the input file. A missing file is not an error:
/// the pipeline continues with an empty document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadOutcome {
    Loaded(Document),
    Missing { path: PathBuf },
}

impl ReadOutcome {
    pub fn into_document(self) -> Document {
        match self {
            ReadOutcome::Loaded(document) => document,
            ReadOutcome::Missing { .. } => Document::missing(),
        }
    }
}

pub struct DocumentReader {
    buffer_size: usize,
}

impl DocumentReader {
    pub fn new() -> Self {
        Self {
            buffer_size: 64 * 1024,
        }
    }

    pub fn with_buffer_size(mut self, size: usize) -> Self {
        self.buffer_size = size.max(4096);
        self
    }

    pub fn read<P: AsRef<Path>>(&self, path: P) -> Result<ReadOutcome> {
        let path = path.as_ref();

        if path.as_os_str().is_empty() || !path.is_file() {
            log::debug!("Input file not found: {}", path.display());
            return Ok(ReadOutcome::Missing {
                path: path.to_path_buf(),
            });
        }

        let file = fs::File::open(path).map_err(|e| DdpError::io(path, e))?;
        let mut reader = BufReader::with_capacity(self.buffer_size, file);

        let mut bytes = Vec::new();
        reader
            .read_to_end(&mut bytes)
            .map_err(|e| DdpError::io(path, e))?;

        log::debug!("Read {} bytes from {}", bytes.len(), path.display());

        Ok(ReadOutcome::Loaded(Document::new(decode_text(&bytes))))
    }
}

impl Default for DocumentReader {
    fn default() -> Self {
        Self::new()
    }
}

/// Decode file bytes as UTF-8, dropping a leading byte order mark and
/// replacing invalid sequences with U+FFFD.
fn decode_text(bytes: &[u8]) -> String {
    let bytes = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);
    String::from_utf8_lossy(bytes).into_owned()
}
