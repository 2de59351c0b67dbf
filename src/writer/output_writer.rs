use crate::config::OutputLayout;
use crate::dedup::Deduplicated;
use crate::error::{DdpError, Result};
use std::fs;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteSummary {
    pub path: PathBuf,
    pub records: usize,
    pub duplicates_removed: usize,
    pub bytes_written: u64,
}

pub struct OutputWriter {
    path: PathBuf,
    layout: OutputLayout,
    buffer_size: usize,
}

impl OutputWriter {
    pub fn new<P: Into<PathBuf>>(path: P, layout: OutputLayout) -> Self {
        Self {
            path: path.into(),
            layout,
            buffer_size: 64 * 1024,
        }
    }

    /// Create or truncate the output file and write the records to it.
    pub fn write(&self, deduplicated: &Deduplicated) -> Result<WriteSummary> {
        let content = render(deduplicated, &self.layout);

        let file = fs::File::create(&self.path).map_err(|e| DdpError::io(&self.path, e))?;
        let mut writer = BufWriter::with_capacity(self.buffer_size, file);

        writer
            .write_all(content.as_bytes())
            .map_err(|e| DdpError::io(&self.path, e))?;
        writer.flush().map_err(|e| DdpError::io(&self.path, e))?;

        log::info!(
            "Wrote {} records to {}",
            deduplicated.len(),
            self.path.display()
        );

        Ok(WriteSummary {
            path: self.path.clone(),
            records: deduplicated.len(),
            duplicates_removed: deduplicated.duplicates_removed(),
            bytes_written: content.len() as u64,
        })
    }
}

pub fn summary_line(deduplicated: &Deduplicated) -> String {
    format!(
        "There are {} records with {} duplicates removed",
        deduplicated.len(),
        deduplicated.duplicates_removed()
    )
}

/// Full output file content for the given layout.
pub fn render(deduplicated: &Deduplicated, layout: &OutputLayout) -> String {
    let mut content = String::new();

    if layout.summary_header {
        content.push_str(&summary_line(deduplicated));
        content.push_str(layout.line_ending);
        content.push_str(layout.line_ending);
    }

    content.push_str(&deduplicated.records().join(layout.separator));
    content.push_str(layout.line_ending);

    content
}
