//! Report module - counts document model and JSON output

mod document;
mod writer;

pub use document::{Metadata, National, OutputDocument};
pub use writer::{ReportWriter, WriterError};
