pub mod document_reader;

pub use document_reader::{Document, DocumentReader, DocumentSource, ReadOutcome};
