use std::path::Path;

use crate::config::Config;
use crate::discovery::{self, Language};
use crate::error::ScanError;

use super::checks::{
    check_primary_formatting, check_primary_lint, check_primary_style, check_secondary_formatting,
    check_secondary_lint,
};
use super::types::{Bucket, PipelineEvent, Report, ReportEntry};

/// Discover files under `root` and run every applicable check in sequence.
///
/// Progress is reported through `on_event`. The only error is a missing
/// `root`; everything that goes wrong after discovery ends up in the report.
pub fn analyze(
    root: &Path,
    cfg: &Config,
    mut on_event: impl FnMut(PipelineEvent),
) -> Result<Report, ScanError> {
    on_event(PipelineEvent::Started);

    let files = discovery::discover(root, &cfg.exclude_dirs)?;
    if files.is_empty() {
        return Ok(Report::empty_project());
    }

    let mut report = Report::default();
    let tools = &cfg.tools;

    // ── Python ───────────────────────────────────────────────────────
    let primary = files.primary();
    if !primary.is_empty() {
        on_event(PipelineEvent::Discovered {
            language: Language::Primary,
            count: primary.len(),
        });
        run_phase(&mut report, Bucket::Pylint, &mut on_event, || {
            check_primary_lint(tools, primary)
        });
        run_phase(&mut report, Bucket::Flake8, &mut on_event, || {
            check_primary_style(tools, primary)
        });
        run_phase(&mut report, Bucket::Formatting, &mut on_event, || {
            check_primary_formatting(tools, primary)
        });
    }

    // ── JavaScript / TypeScript ──────────────────────────────────────
    let secondary = files.secondary();
    if !secondary.is_empty() {
        on_event(PipelineEvent::Discovered {
            language: Language::Secondary,
            count: secondary.len(),
        });
        run_phase(&mut report, Bucket::Eslint, &mut on_event, || {
            check_secondary_lint(tools, secondary)
        });
        run_phase(&mut report, Bucket::Prettier, &mut on_event, || {
            check_secondary_formatting(tools, secondary)
        });
    }

    Ok(report)
}

fn run_phase(
    report: &mut Report,
    bucket: Bucket,
    on_event: &mut impl FnMut(PipelineEvent),
    check: impl FnOnce() -> Vec<ReportEntry>,
) {
    on_event(PipelineEvent::PhaseStarted(bucket));
    let entries = check();
    tracing::debug!(bucket = bucket.as_str(), entries = entries.len(), "phase finished");
    on_event(PipelineEvent::PhaseFinished {
        bucket,
        entries: entries.len(),
    });
    report.insert(bucket, entries);
}
