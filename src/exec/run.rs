use std::io::{ErrorKind, Write};
use std::process::{Command, Stdio};

use super::types::{ToolCommand, ToolOutput};
use crate::error::ToolError;

/// Run a tool to completion and capture its output.
///
/// Blocks until the process exits; there is no timeout. When the command
/// carries stdin text it is written from a helper thread so a tool that
/// produces output before draining its input cannot deadlock us.
pub fn run(cmd: &ToolCommand) -> Result<ToolOutput, ToolError> {
    tracing::debug!(command = %cmd, "running tool");

    let mut child = Command::new(&cmd.program)
        .args(&cmd.args)
        .stdin(if cmd.stdin.is_some() {
            Stdio::piped()
        } else {
            Stdio::null()
        })
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|source| spawn_error(&cmd.program, source))?;

    let writer = match (cmd.stdin.clone(), child.stdin.take()) {
        (Some(input), Some(mut pipe)) => Some(std::thread::spawn(move || {
            // Dropping `pipe` at the end of the closure closes stdin.
            pipe.write_all(input.as_bytes())
        })),
        _ => None,
    };

    let output = child.wait_with_output().map_err(|source| ToolError::Io {
        program: cmd.program.clone(),
        source,
    })?;

    if let Some(handle) = writer
        && let Ok(Err(source)) = handle.join()
        // A tool may exit without reading all of stdin.
        && source.kind() != ErrorKind::BrokenPipe
    {
        return Err(ToolError::Io {
            program: cmd.program.clone(),
            source,
        });
    }

    let out = ToolOutput {
        exit_code: output.status.code(),
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
    };
    tracing::debug!(command = %cmd, exit_code = ?out.exit_code, "tool finished");
    Ok(out)
}

fn spawn_error(program: &str, source: std::io::Error) -> ToolError {
    if source.kind() == ErrorKind::NotFound {
        ToolError::Missing {
            program: program.to_string(),
        }
    } else {
        ToolError::Spawn {
            program: program.to_string(),
            source,
        }
    }
}
