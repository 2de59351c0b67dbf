pub mod candidate_extractor;
pub mod patterns;

pub use candidate_extractor::{CandidateExtractor, Extraction, ExtractionMode, Strategy};
