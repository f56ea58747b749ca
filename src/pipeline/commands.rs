use std::path::{Path, PathBuf};

use crate::config::ToolsConfig;
use crate::exec::ToolCommand;

/// Split a configured command line (`"npx eslint"`) into a base command.
///
/// Falls back to `fallback` when the configured text is blank or not valid
/// shell syntax.
fn base(configured: &str, fallback: &str) -> ToolCommand {
    match shell_words::split(configured) {
        Ok(words) if !words.is_empty() => {
            let mut words = words.into_iter();
            let program = words.next().unwrap_or_default();
            ToolCommand::new(program).args(words)
        }
        Ok(_) => ToolCommand::new(fallback),
        Err(err) => {
            tracing::warn!(
                command = configured,
                error = %err,
                "invalid tool command, using {fallback}"
            );
            ToolCommand::new(fallback)
        }
    }
}

/// `pylint --output-format=json <files...>` — one batch call.
pub fn pylint_command(tools: &ToolsConfig, files: &[PathBuf]) -> ToolCommand {
    base(&tools.pylint, "pylint")
        .arg("--output-format=json")
        .args(files)
}

/// `flake8 <file>` in its default text format.
pub fn flake8_command(tools: &ToolsConfig, file: &Path) -> ToolCommand {
    base(&tools.flake8, "flake8").arg(file)
}

/// `black --check` over stdin so the caller controls reading the file.
pub fn black_command(tools: &ToolsConfig, file: &Path, contents: String) -> ToolCommand {
    base(&tools.black, "black")
        .args(["--check", "--quiet", "--fast", "--stdin-filename"])
        .arg(file)
        .arg("-")
        .stdin(contents)
}

pub fn isort_command(tools: &ToolsConfig, file: &Path) -> ToolCommand {
    base(&tools.isort, "isort")
        .args(["--check-only", "--quiet"])
        .arg(file)
}

pub fn eslint_probe(tools: &ToolsConfig) -> ToolCommand {
    base(&tools.eslint, "eslint").arg("--version")
}

pub fn eslint_command(tools: &ToolsConfig, file: &Path) -> ToolCommand {
    base(&tools.eslint, "eslint")
        .args(["--format", "json"])
        .arg(file)
}

pub fn prettier_probe(tools: &ToolsConfig) -> ToolCommand {
    base(&tools.prettier, "prettier").arg("--version")
}

pub fn prettier_command(tools: &ToolsConfig, file: &Path) -> ToolCommand {
    base(&tools.prettier, "prettier")
        .arg("--check")
        .arg(file)
}
