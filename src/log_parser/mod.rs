/// Tool output parsing — flake8 text, pylint and eslint JSON to structured findings.
mod json;
mod parse;

pub use json::{parse_eslint_json, parse_pylint_json};
pub use parse::{error_statistics, parse_flake8_log};

use std::fmt;

use serde::Serialize;

/// Severity level of a finding, least severe first so `Ord` ranks them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Hint,
    Info,
    Warning,
    Error,
}

impl Severity {
    /// Map a pylint message type (`error`, `convention`, ...) to a severity.
    fn from_pylint_type(s: &str) -> Self {
        match s.to_ascii_lowercase().as_str() {
            "error" | "fatal" => Self::Error,
            "warning" => Self::Warning,
            "convention" | "refactor" => Self::Info,
            "info" => Self::Hint,
            _ => Self::Warning,
        }
    }

    /// Map a pycodestyle/pyflakes code (`E225`, `F401`, `W291`) to a severity.
    fn from_flake8_code(code: &str) -> Self {
        match code.chars().next() {
            Some('E' | 'F') => Self::Error,
            Some('W') => Self::Warning,
            Some('C') => Self::Info,
            _ => Self::Warning,
        }
    }

    /// ESLint uses 2 for errors and 1 for warnings.
    fn from_eslint_level(level: u8) -> Self {
        match level {
            2 => Self::Error,
            1 => Self::Warning,
            _ => Self::Info,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Error => f.write_str("error"),
            Self::Warning => f.write_str("warning"),
            Self::Info => f.write_str("info"),
            Self::Hint => f.write_str("hint"),
        }
    }
}

/// A single diagnostic parsed from tool output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Finding {
    pub file: String,
    pub line: usize,
    pub col: usize,
    pub severity: Severity,
    pub rule: String,
    pub message: String,
}

/// Most severe first; stable, so equal severities keep tool order.
pub fn sort_by_severity(findings: &mut [Finding]) {
    findings.sort_by(|a, b| b.severity.cmp(&a.severity));
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{} {} {} {}",
            self.line, self.col, self.severity, self.rule, self.message
        )
    }
}
