use serde::Deserialize;

use super::{Finding, Severity};

/// One message from `pylint --output-format=json`.
#[derive(Debug, Deserialize)]
struct PylintMessage {
    #[serde(rename = "type")]
    kind: String,
    path: String,
    #[serde(default)]
    line: Option<usize>,
    #[serde(default)]
    column: Option<usize>,
    #[serde(default)]
    symbol: String,
    #[serde(default, rename = "message-id")]
    message_id: String,
    message: String,
}

/// One file result from `eslint --format json`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct EslintFileResult {
    file_path: String,
    #[serde(default)]
    messages: Vec<EslintMessage>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct EslintMessage {
    #[serde(default)]
    rule_id: Option<String>,
    severity: u8,
    message: String,
    #[serde(default)]
    line: Option<usize>,
    #[serde(default)]
    column: Option<usize>,
}

/// Parse pylint's JSON report. Empty output means no messages.
pub fn parse_pylint_json(raw: &str) -> Result<Vec<Finding>, serde_json::Error> {
    if raw.trim().is_empty() {
        return Ok(Vec::new());
    }
    let messages: Vec<PylintMessage> = serde_json::from_str(raw)?;
    Ok(messages
        .into_iter()
        .map(|m| Finding {
            file: m.path,
            line: m.line.unwrap_or(0),
            col: m.column.unwrap_or(0),
            severity: Severity::from_pylint_type(&m.kind),
            rule: if m.symbol.is_empty() {
                m.message_id
            } else {
                m.symbol
            },
            message: m.message,
        })
        .collect())
}

/// Parse ESLint's JSON report, flattening all files' messages.
///
/// Unlike pylint, ESLint always prints a JSON array on success, so empty
/// output is treated as malformed.
pub fn parse_eslint_json(raw: &str) -> Result<Vec<Finding>, serde_json::Error> {
    let results: Vec<EslintFileResult> = serde_json::from_str(raw)?;
    Ok(results
        .into_iter()
        .flat_map(|r| {
            let file = r.file_path;
            r.messages.into_iter().map(move |m| Finding {
                file: file.clone(),
                line: m.line.unwrap_or(0),
                col: m.column.unwrap_or(0),
                severity: Severity::from_eslint_level(m.severity),
                // Parse errors and "file ignored" notices carry no rule.
                rule: m.rule_id.unwrap_or_else(|| "eslint".to_string()),
                message: m.message,
            })
        })
        .collect())
}
