use crate::error::{DdpError, Result};
use std::path::{Path, PathBuf};

/// Output file used when no `/o` flag is given.
pub const DEFAULT_OUTPUT_FILE: &str = "filtered.txt";

/// Line ending used for every line of the output file.
pub const LINE_ENDING: &str = "\r\n";

pub const COMPACT_SEPARATOR: &str = ",";
pub const VERBOSE_SEPARATOR: &str = ",\r\n";

/// Parsed command-line options. Built once by the argument parser and passed
/// by reference to every pipeline stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    pub input: PathBuf,
    pub output: PathBuf,
    pub verbose: bool,
    pub email_only: bool,
}

impl Options {
    pub fn new<P: Into<PathBuf>>(input: P) -> Self {
        Self {
            input: input.into(),
            output: PathBuf::from(DEFAULT_OUTPUT_FILE),
            verbose: false,
            email_only: false,
        }
    }

    pub fn with_output<P: Into<PathBuf>>(mut self, output: P) -> Self {
        self.output = output.into();
        self
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn with_email_only(mut self, email_only: bool) -> Self {
        self.email_only = email_only;
        self
    }

    pub fn input_path(&self) -> &Path {
        &self.input
    }

    pub fn output_path(&self) -> &Path {
        &self.output
    }

    pub fn layout(&self) -> OutputLayout {
        OutputLayout::for_verbosity(self.verbose)
    }

    pub fn validate(&self) -> Result<()> {
        if self.output.as_os_str().is_empty() {
            return Err(DdpError::Options {
                message: "Output path cannot be empty".to_string(),
            });
        }

        Ok(())
    }
}

/// How records are laid out in the output file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputLayout {
    pub separator: &'static str,
    pub line_ending: &'static str,
    pub summary_header: bool,
}

impl OutputLayout {
    pub fn compact() -> Self {
        Self {
            separator: COMPACT_SEPARATOR,
            line_ending: LINE_ENDING,
            summary_header: false,
        }
    }

    pub fn verbose() -> Self {
        Self {
            separator: VERBOSE_SEPARATOR,
            line_ending: LINE_ENDING,
            summary_header: true,
        }
    }

    pub fn for_verbosity(verbose: bool) -> Self {
        if verbose {
            Self::verbose()
        } else {
            Self::compact()
        }
    }
}

impl Default for OutputLayout {
    fn default() -> Self {
        Self::compact()
    }
}
