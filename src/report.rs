//! Text and JSON rendering of a finished run.

use crate::pipeline::{Bucket, PipelineEvent, Report};

/// Progress line printed for an orchestrator event, if any.
pub fn progress_line(event: &PipelineEvent) -> Option<String> {
    match event {
        PipelineEvent::Started => Some("Starting project analysis...".to_string()),
        PipelineEvent::Discovered { language, count } => {
            Some(format!("Found {count} {} files", language.label()))
        }
        PipelineEvent::PhaseStarted(bucket) => Some(
            match bucket {
                Bucket::Pylint => "Running Pylint...",
                Bucket::Flake8 => "Running Flake8...",
                Bucket::Formatting => "Checking code formatting...",
                Bucket::Eslint => "Running ESLint...",
                Bucket::Prettier => "Running Prettier...",
                Bucket::Error => return None,
            }
            .to_string(),
        ),
        PipelineEvent::PhaseFinished { .. } => None,
    }
}

/// Render the report section: each bucket upper-cased, then its entries.
pub fn render_text(report: &Report) -> String {
    let mut out = String::new();
    out.push_str("\nAnalysis Results:\n");
    out.push_str("================\n");
    for (bucket, entries) in report.buckets() {
        out.push_str(&format!("\n{} Results:\n", bucket.as_str().to_uppercase()));
        if entries.is_empty() {
            out.push_str("No issues found\n");
        } else {
            for entry in entries {
                out.push_str(&format!("- {entry}\n"));
            }
        }
    }
    out
}

pub fn render_json(report: &Report) -> serde_json::Result<String> {
    serde_json::to_string_pretty(report)
}
