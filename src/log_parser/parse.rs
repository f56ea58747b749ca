use std::collections::BTreeMap;

use super::{Finding, Severity};

/// Parse flake8's default output format into findings.
///
/// ```text
/// ./pkg/mod.py:1:1: F401 'os' imported but unused
/// ./pkg/mod.py:3:6: E231 missing whitespace after ','
/// ```
///
/// Lines that do not match the layout are ignored.
pub fn parse_flake8_log(raw: &str) -> Vec<Finding> {
    raw.lines().filter_map(parse_entry).collect()
}

/// Summarize findings whose code starts with `prefix` the way
/// `flake8 --statistics` does: `"<count> <code> <first message>"`, one line
/// per code, sorted by code.
pub fn error_statistics(findings: &[Finding], prefix: &str) -> Vec<String> {
    let mut by_code: BTreeMap<&str, (usize, &str)> = BTreeMap::new();
    for f in findings.iter().filter(|f| f.rule.starts_with(prefix)) {
        by_code
            .entry(f.rule.as_str())
            .and_modify(|(count, _)| *count += 1)
            .or_insert((1, f.message.as_str()));
    }
    by_code
        .into_iter()
        .map(|(code, (count, message))| format!("{count} {code} {message}"))
        .collect()
}

/// Parse a single `path:line:col: CODE message` line.
///
/// The path itself may contain `:` (or even `: `), so every `": "` is tried
/// until the text before it ends in two numeric fields.
fn parse_entry(line: &str) -> Option<Finding> {
    let line = line.trim_end();
    for (idx, _) in line.match_indices(": ") {
        let head = &line[..idx];
        let Some((file, row, col)) = split_location(head) else {
            continue;
        };
        let rest = line[idx + 2..].trim_start();
        let (code, message) = rest.split_once(' ').unwrap_or((rest, ""));
        if code.is_empty() {
            return None;
        }
        return Some(Finding {
            file: file.to_string(),
            line: row,
            col,
            severity: Severity::from_flake8_code(code),
            rule: code.to_string(),
            message: message.trim().to_string(),
        });
    }
    None
}

/// Split `"path:line:col"` into its parts.
fn split_location(head: &str) -> Option<(&str, usize, usize)> {
    let mut parts = head.rsplitn(3, ':');
    let col = parts.next()?.parse().ok()?;
    let row = parts.next()?.parse().ok()?;
    let file = parts.next()?;
    if file.is_empty() {
        return None;
    }
    Some((file, row, col))
}
