use super::run::run;
use super::types::ToolCommand;
use crate::error::{ExitStatusText, ProbeError, ToolError};

/// Check that a tool can be started at all, typically via `--version`.
///
/// Returns the first line the tool printed. A missing binary and a binary
/// that runs but exits non-zero are reported as different errors.
pub fn probe(cmd: &ToolCommand) -> Result<String, ProbeError> {
    let output = run(cmd).map_err(|err| match err {
        ToolError::Missing { program } => ProbeError::Missing { program },
        ToolError::Spawn { program, source } | ToolError::Io { program, source } => {
            ProbeError::Spawn { program, source }
        }
        other => ProbeError::Spawn {
            program: cmd.program.clone(),
            source: std::io::Error::other(other.to_string()),
        },
    })?;

    if !output.success() {
        return Err(ProbeError::Failed {
            program: cmd.program.clone(),
            status: ExitStatusText(output.exit_code),
            detail: output.detail(),
        });
    }

    let version = output
        .stdout
        .lines()
        .map(str::trim)
        .find(|l| !l.is_empty())
        .unwrap_or_default()
        .to_string();
    tracing::debug!(program = %cmd.program, %version, "probe succeeded");
    Ok(version)
}
