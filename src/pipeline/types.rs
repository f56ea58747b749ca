use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

use crate::discovery::Language;
use crate::log_parser::Finding;

/// Report bucket: one per tool, plus `Error` for a run that found nothing
/// to check. Ordering is the order buckets are printed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Bucket {
    Pylint,
    Flake8,
    Formatting,
    Eslint,
    Prettier,
    Error,
}

impl Bucket {
    pub fn as_str(&self) -> &'static str {
        match self {
            Bucket::Pylint => "pylint",
            Bucket::Flake8 => "flake8",
            Bucket::Formatting => "formatting",
            Bucket::Eslint => "eslint",
            Bucket::Prettier => "prettier",
            Bucket::Error => "error",
        }
    }
}

/// One line of the report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ReportEntry {
    /// Diagnostics a tool reported against one file.
    Findings { file: String, findings: Vec<Finding> },
    /// Error-level statistics (`"<count> <code> <message>"`) for one file.
    Statistics { file: String, errors: Vec<String> },
    /// A file-scoped problem: bad formatting, unsorted imports, or a tool
    /// that failed on this file.
    File {
        file: String,
        tool: String,
        error: String,
    },
    /// Free-form error, e.g. a tool that could not be run at all.
    Error { message: String },
}

impl ReportEntry {
    pub fn error(message: impl Into<String>) -> Self {
        Self::Error {
            message: message.into(),
        }
    }
}

impl fmt::Display for ReportEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Findings { file, findings } => {
                let noun = if findings.len() == 1 { "issue" } else { "issues" };
                write!(f, "{file}: {} {noun}", findings.len())?;
                for (i, finding) in findings.iter().enumerate() {
                    f.write_str(if i == 0 { ": " } else { "; " })?;
                    write!(f, "{finding}")?;
                }
                Ok(())
            }
            Self::Statistics { file, errors } => write!(f, "{file}: {}", errors.join("; ")),
            Self::File { file, tool, error } => write!(f, "{file} [{tool}]: {error}"),
            Self::Error { message } => f.write_str(message),
        }
    }
}

/// Aggregated result of one run, keyed by bucket.
///
/// A bucket is present only if its phase ran, so an empty bucket means the
/// tool ran and found nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Report {
    buckets: BTreeMap<Bucket, Vec<ReportEntry>>,
}

pub const EMPTY_PROJECT_MESSAGE: &str =
    "No Python or JavaScript/TypeScript files found in the project";

impl Report {
    /// The single-bucket report returned when discovery finds no files.
    pub fn empty_project() -> Self {
        let mut report = Self::default();
        report.insert(Bucket::Error, vec![ReportEntry::error(EMPTY_PROJECT_MESSAGE)]);
        report
    }

    /// Append entries to a bucket, creating it if needed.
    pub fn insert(&mut self, bucket: Bucket, entries: Vec<ReportEntry>) {
        self.buckets.entry(bucket).or_default().extend(entries);
    }

    pub fn get(&self, bucket: Bucket) -> Option<&[ReportEntry]> {
        self.buckets.get(&bucket).map(Vec::as_slice)
    }

    pub fn contains(&self, bucket: Bucket) -> bool {
        self.buckets.contains_key(&bucket)
    }

    /// Buckets in print order.
    pub fn buckets(&self) -> impl Iterator<Item = (Bucket, &[ReportEntry])> {
        self.buckets.iter().map(|(b, e)| (*b, e.as_slice()))
    }
}

/// Events emitted by the orchestrator while it works.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PipelineEvent {
    Started,
    Discovered { language: Language, count: usize },
    PhaseStarted(Bucket),
    PhaseFinished { bucket: Bucket, entries: usize },
}
