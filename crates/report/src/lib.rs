//! Report assembly: runs the pipeline stages in order and writes the
//! final 11-column CSV.

pub mod orchestrator;
pub mod writer;

pub use orchestrator::{ReportOptions, build_report};
pub use writer::{ReportRow, write_report};
