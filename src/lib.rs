//! Run Python and JavaScript/TypeScript linters and formatters over a
//! project directory and collect their output into one report.
//!
//! - `discovery`: recursive walk, classification by extension.
//! - `exec`: run an external tool to completion, probe its version.
//! - `log_parser`: pylint/eslint JSON and flake8 text to findings.
//! - `pipeline`: command builders, the check phases, `analyze`.
//! - `report`: text/JSON rendering.

pub mod config;
pub mod discovery;
pub mod error;
pub mod exec;
pub mod log_parser;
pub mod pipeline;
pub mod report;

pub use error::{ProbeError, ScanError, ToolError};
pub use pipeline::{Bucket, PipelineEvent, Report, ReportEntry, analyze};
