pub mod cli;
pub mod config;
pub mod dedup;
pub mod error;
pub mod extractor;
pub mod reader;
pub mod ui;
pub mod writer;

// Public API re-exports
pub use cli::{parse_options, Cli, Flag};
pub use config::{Options, OutputLayout, DEFAULT_OUTPUT_FILE};
pub use error::{DdpError, Result, UserFriendlyError};

// Core functionality re-exports
pub use dedup::{deduplicate, Deduplicated};
pub use extractor::{CandidateExtractor, Extraction, ExtractionMode, Strategy};
pub use reader::{Document, DocumentReader, DocumentSource, ReadOutcome};
pub use ui::{OutputFormatter, OutputMode};
pub use writer::{OutputWriter, WriteSummary};

use std::path::PathBuf;

/// Printed when the input path is empty or does not name a file.
pub const MISSING_INPUT_MESSAGE: &str = "No file supplied or no file exists";

/// Outcome of one pipeline run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub output: PathBuf,
    pub records: usize,
    pub duplicates_removed: usize,
    pub strategy: Strategy,
    pub input_missing: bool,
}

/// Main library interface: read, extract, deduplicate, write.
pub struct Ddp {
    options: Options,
    extractor: CandidateExtractor,
    output_formatter: OutputFormatter,
}

impl Ddp {
    pub fn new(options: Options, output_mode: OutputMode) -> Result<Self> {
        options.validate()?;

        Ok(Self {
            options,
            extractor: CandidateExtractor::new()?,
            output_formatter: OutputFormatter::new(output_mode),
        })
    }

    /// Build the pipeline from raw arguments (program name excluded).
    pub fn from_args<S: AsRef<str>>(args: &[S], output_mode: OutputMode) -> Result<Self> {
        Self::new(parse_options(args)?, output_mode)
    }

    pub fn from_cli(cli: &Cli, output_mode: OutputMode) -> Result<Self> {
        Self::new(cli.options()?, output_mode)
    }

    pub fn run(&self) -> Result<RunSummary> {
        let document = self.read_document()?;

        let mode = ExtractionMode::from_email_only(self.options.email_only);
        let extraction = self.extractor.extract(document.content(), mode);
        let strategy = extraction.strategy;

        let deduplicated = deduplicate(extraction.candidates);

        let writer = OutputWriter::new(self.options.output_path(), self.options.layout());
        let written = writer.write(&deduplicated)?;

        Ok(RunSummary {
            output: written.path,
            records: written.records,
            duplicates_removed: written.duplicates_removed,
            strategy,
            input_missing: document.is_missing(),
        })
    }

    fn read_document(&self) -> Result<Document> {
        match DocumentReader::new().read(self.options.input_path())? {
            ReadOutcome::Loaded(document) => Ok(document),
            outcome @ ReadOutcome::Missing { .. } => {
                self.output_formatter.warning(MISSING_INPUT_MESSAGE);
                Ok(outcome.into_document())
            }
        }
    }
}
