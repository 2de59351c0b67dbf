pub mod output_writer;

pub use output_writer::{render, summary_line, OutputWriter, WriteSummary};
