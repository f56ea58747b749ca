//! The five check phases. Each one is total: every tool failure becomes a
//! report entry and the phase always returns.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::config::ToolsConfig;
use crate::error::{ExitStatusText, ProbeError, ToolError};
use crate::exec::{self, ToolOutput};
use crate::log_parser::{self, Finding};

use super::commands::{
    black_command, eslint_command, eslint_probe, flake8_command, isort_command, prettier_command,
    prettier_probe, pylint_command,
};
use super::types::ReportEntry;

/// Bit pylint sets in its exit status on a command-line usage error.
const PYLINT_USAGE_ERROR: i32 = 32;

const NOT_REFORMATTED: &str = "File would be reformatted";
const IMPORTS_UNSORTED: &str = "Imports are not properly sorted";
const PRETTIER_UNFORMATTED: &str = "Code style issues found; run prettier --write to fix";

// ── Primary (Python) ────────────────────────────────────────────────────

/// Run pylint once over every file and group its messages per file.
pub fn check_primary_lint(tools: &ToolsConfig, files: &[PathBuf]) -> Vec<ReportEntry> {
    match run_pylint(tools, files) {
        Ok(findings) => group_by_file(findings),
        Err(e) => vec![ReportEntry::error(format!("Error running Pylint: {e}"))],
    }
}

fn run_pylint(tools: &ToolsConfig, files: &[PathBuf]) -> Result<Vec<Finding>, ToolError> {
    let cmd = pylint_command(tools, files);
    let out = exec::run(&cmd)?;
    // Any other non-zero status is a bit mask of message categories.
    if out.exit_code.is_none_or(|c| c & PYLINT_USAGE_ERROR != 0) {
        return Err(exit_error(&cmd.program, &out));
    }
    log_parser::parse_pylint_json(&out.stdout).map_err(|e| malformed(&cmd.program, e))
}

/// Run flake8 file by file, keeping only files with `E` statistics.
pub fn check_primary_style(tools: &ToolsConfig, files: &[PathBuf]) -> Vec<ReportEntry> {
    let mut entries = Vec::new();
    for file in files {
        match run_flake8(tools, file) {
            Ok(findings) => {
                let errors = log_parser::error_statistics(&findings, "E");
                if !errors.is_empty() {
                    entries.push(ReportEntry::Statistics {
                        file: display(file),
                        errors,
                    });
                }
            }
            Err(e) => entries.push(ReportEntry::error(format!(
                "Error checking {}: {e}",
                file.display()
            ))),
        }
    }
    entries
}

fn run_flake8(tools: &ToolsConfig, file: &Path) -> Result<Vec<Finding>, ToolError> {
    let cmd = flake8_command(tools, file);
    let out = exec::run(&cmd)?;
    let findings = log_parser::parse_flake8_log(&out.stdout);
    match out.exit_code {
        Some(0) => Ok(findings),
        // 1 means "violations found", but a crash also exits 1.
        Some(1) if !findings.is_empty() => Ok(findings),
        _ => Err(exit_error(&cmd.program, &out)),
    }
}

/// Check canonical formatting (black) and import order (isort) per file.
pub fn check_primary_formatting(tools: &ToolsConfig, files: &[PathBuf]) -> Vec<ReportEntry> {
    let mut entries = Vec::new();
    for file in files {
        let contents = match std::fs::read_to_string(file) {
            Ok(c) => c,
            Err(source) => {
                let err = ToolError::Read {
                    path: file.clone(),
                    source,
                };
                entries.push(ReportEntry::error(format!(
                    "Error checking {}: {err}",
                    file.display()
                )));
                continue;
            }
        };

        let checks = [
            ("black", run_black(tools, file, contents)),
            ("isort", run_isort(tools, file)),
        ];
        for (tool, outcome) in checks {
            let error = match outcome {
                Ok(None) => continue,
                Ok(Some(problem)) => problem.to_string(),
                Err(e) => e.to_string(),
            };
            entries.push(ReportEntry::File {
                file: display(file),
                tool: tool.to_string(),
                error,
            });
        }
    }
    entries
}

/// `Ok(None)` when the file is already formatted.
fn run_black(
    tools: &ToolsConfig,
    file: &Path,
    contents: String,
) -> Result<Option<&'static str>, ToolError> {
    let cmd = black_command(tools, file, contents);
    let out = exec::run(&cmd)?;
    match out.exit_code {
        Some(0) => Ok(None),
        Some(1) => Ok(Some(NOT_REFORMATTED)),
        _ => Err(exit_error(&cmd.program, &out)),
    }
}

/// `Ok(None)` when imports are already sorted.
fn run_isort(tools: &ToolsConfig, file: &Path) -> Result<Option<&'static str>, ToolError> {
    let cmd = isort_command(tools, file);
    let out = exec::run(&cmd)?;
    match out.exit_code {
        Some(0) => Ok(None),
        Some(1) => Ok(Some(IMPORTS_UNSORTED)),
        _ => Err(exit_error(&cmd.program, &out)),
    }
}

// ── Secondary (JavaScript/TypeScript) ───────────────────────────────────

/// Probe eslint, then lint file by file.
///
/// If the probe fails, a single entry explains why and no file is linted.
pub fn check_secondary_lint(tools: &ToolsConfig, files: &[PathBuf]) -> Vec<ReportEntry> {
    if files.is_empty() {
        return Vec::new();
    }
    if let Err(e) = exec::probe(&eslint_probe(tools)) {
        return vec![ReportEntry::error(format!(
            "ESLint is not available, skipped {} file(s): {e}",
            files.len()
        ))];
    }

    let mut entries = Vec::new();
    for file in files {
        match run_eslint(tools, file) {
            Ok(findings) if findings.is_empty() => {}
            Ok(mut findings) => {
                log_parser::sort_by_severity(&mut findings);
                entries.push(ReportEntry::Findings {
                    file: display(file),
                    findings,
                });
            }
            Err(e) => entries.push(ReportEntry::error(format!(
                "Error running ESLint on {}: {e}",
                file.display()
            ))),
        }
    }
    entries
}

fn run_eslint(tools: &ToolsConfig, file: &Path) -> Result<Vec<Finding>, ToolError> {
    let cmd = eslint_command(tools, file);
    let out = exec::run(&cmd)?;
    match out.exit_code {
        // 0: clean, 1: problems found. Both print the JSON report.
        Some(0 | 1) => {
            log_parser::parse_eslint_json(&out.stdout).map_err(|e| malformed(&cmd.program, e))
        }
        _ => Err(exit_error(&cmd.program, &out)),
    }
}

/// Probe prettier, then check file by file.
pub fn check_secondary_formatting(tools: &ToolsConfig, files: &[PathBuf]) -> Vec<ReportEntry> {
    if files.is_empty() {
        return Vec::new();
    }
    match exec::probe(&prettier_probe(tools)) {
        Ok(_) => {}
        Err(e @ ProbeError::Missing { .. }) => {
            return vec![ReportEntry::error(format!(
                "Prettier is not installed, skipped {} file(s): {e}",
                files.len()
            ))];
        }
        Err(e) => {
            return vec![ReportEntry::error(format!(
                "Prettier check failed, skipped {} file(s): {e}",
                files.len()
            ))];
        }
    }

    let mut entries = Vec::new();
    for file in files {
        let error = match run_prettier(tools, file) {
            Ok(None) => continue,
            Ok(Some(problem)) => problem.to_string(),
            Err(e) => e.to_string(),
        };
        entries.push(ReportEntry::File {
            file: display(file),
            tool: "prettier".to_string(),
            error,
        });
    }
    entries
}

fn run_prettier(tools: &ToolsConfig, file: &Path) -> Result<Option<&'static str>, ToolError> {
    let cmd = prettier_command(tools, file);
    let out = exec::run(&cmd)?;
    match out.exit_code {
        Some(0) => Ok(None),
        Some(1) => Ok(Some(PRETTIER_UNFORMATTED)),
        _ => Err(exit_error(&cmd.program, &out)),
    }
}

// ── Helpers ─────────────────────────────────────────────────────────────

fn display(path: &Path) -> String {
    path.display().to_string()
}

fn exit_error(program: &str, out: &ToolOutput) -> ToolError {
    ToolError::Exit {
        program: program.to_string(),
        status: ExitStatusText(out.exit_code),
        detail: out.detail(),
    }
}

fn malformed(program: &str, err: serde_json::Error) -> ToolError {
    ToolError::Malformed {
        program: program.to_string(),
        detail: err.to_string(),
    }
}

/// One `Findings` entry per file, in the order files first appear, each
/// listing its most severe findings first.
fn group_by_file(findings: Vec<Finding>) -> Vec<ReportEntry> {
    let mut order: Vec<(String, Vec<Finding>)> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();
    for finding in findings {
        let slot = *index.entry(finding.file.clone()).or_insert_with(|| {
            order.push((finding.file.clone(), Vec::new()));
            order.len() - 1
        });
        order[slot].1.push(finding);
    }
    order
        .into_iter()
        .map(|(file, mut findings)| {
            log_parser::sort_by_severity(&mut findings);
            ReportEntry::Findings { file, findings }
        })
        .collect()
}
