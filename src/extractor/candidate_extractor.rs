use crate::error::{DdpError, Result};
use crate::extractor::patterns::{DELIMITED_PATTERN, EMAIL_PATTERN, FIELD_DELIMITERS};
use regex::{Regex, RegexBuilder};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtractionMode {
    /// Bracketed/quoted substrings, falling back to delimited fields.
    Entries,
    /// Email addresses only.
    EmailOnly,
}

impl ExtractionMode {
    pub fn from_email_only(email_only: bool) -> Self {
        if email_only {
            ExtractionMode::EmailOnly
        } else {
            ExtractionMode::Entries
        }
    }
}

/// Which rule produced a candidate list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    Email,
    Delimited,
    Fields,
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Strategy::Email => "email addresses",
            Strategy::Delimited => "bracketed/quoted substrings",
            Strategy::Fields => "delimited fields",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extraction {
    pub candidates: Vec<String>,
    pub strategy: Strategy,
}

impl Extraction {
    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }
}

pub struct CandidateExtractor {
    email: Regex,
    delimited: Regex,
}

impl CandidateExtractor {
    pub fn new() -> Result<Self> {
        let email = RegexBuilder::new(EMAIL_PATTERN)
            .case_insensitive(true)
            .build()
            .map_err(|source| DdpError::InvalidPattern {
                pattern: EMAIL_PATTERN.to_string(),
                source,
            })?;

        let delimited =
            Regex::new(DELIMITED_PATTERN).map_err(|source| DdpError::InvalidPattern {
                pattern: DELIMITED_PATTERN.to_string(),
                source,
            })?;

        Ok(Self { email, delimited })
    }

    pub fn extract(&self, document: &str, mode: ExtractionMode) -> Extraction {
        let extraction = match mode {
            ExtractionMode::EmailOnly => Extraction {
                candidates: self.emails(document),
                strategy: Strategy::Email,
            },
            ExtractionMode::Entries => {
                let delimited = self.delimited(document);
                if delimited.is_empty() {
                    Extraction {
                        candidates: split_fields(document),
                        strategy: Strategy::Fields,
                    }
                } else {
                    Extraction {
                        candidates: delimited,
                        strategy: Strategy::Delimited,
                    }
                }
            }
        };

        log::debug!(
            "Extracted {} candidates as {}",
            extraction.len(),
            extraction.strategy
        );

        extraction
    }

    fn emails(&self, document: &str) -> Vec<String> {
        self.email
            .find_iter(document)
            .map(|m| m.as_str().trim().to_string())
            .collect()
    }

    fn delimited(&self, document: &str) -> Vec<String> {
        self.delimited
            .find_iter(document)
            .map(|m| m.as_str().to_string())
            .collect()
    }
}

/// Split on commas, semicolons and line breaks, trimming each field. Empty
/// fields between adjacent delimiters are kept; an empty document has none.
fn split_fields(document: &str) -> Vec<String> {
    if document.is_empty() {
        return Vec::new();
    }

    document
        .split(FIELD_DELIMITERS)
        .map(|field| field.trim().to_string())
        .collect()
}
