pub mod checks;
pub mod commands;
pub mod orchestrator;
mod types;

pub use orchestrator::analyze;
pub use types::{Bucket, EMPTY_PROJECT_MESSAGE, PipelineEvent, Report, ReportEntry};
