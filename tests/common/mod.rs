//! Shared helpers: throwaway projects and `sh` scripts standing in for the
//! real linters.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use lintsweep::ReportEntry;
use lintsweep::config::{Config, ToolsConfig};

/// Write a shell script and return a tool command line that runs it.
///
/// Scripts run through `sh <file>` rather than being exec'd directly, which
/// avoids ETXTBSY races with other test threads that fork.
pub fn fake_tool(dir: &Path, name: &str, body: &str) -> String {
    let path = dir.join(format!("{name}.sh"));
    fs::write(&path, format!("#!/bin/sh\n{body}\n")).expect("failed to write fake tool");
    format!("sh {}", shell_words::quote(&path.to_string_lossy()))
}

/// Install a script as a directly executable program and return its path.
///
/// The copy and chmod happen in a child process so this test process never
/// holds a writable descriptor to a file it is about to exec.
pub fn executable_tool(dir: &Path, name: &str, body: &str) -> PathBuf {
    let source = dir.join(format!("{name}.src"));
    fs::write(&source, format!("#!/bin/sh\n{body}\n")).expect("failed to write tool source");
    let target = dir.join(name);
    let status = Command::new("sh")
        .args(["-c", "cp \"$1\" \"$2\" && chmod 755 \"$2\"", "sh"])
        .arg(&source)
        .arg(&target)
        .status()
        .expect("failed to install tool");
    assert!(status.success(), "installing {name} failed");
    target
}

/// The file a report entry is about, if any.
pub fn entry_file(entry: &ReportEntry) -> Option<&str> {
    match entry {
        ReportEntry::Findings { file, .. }
        | ReportEntry::Statistics { file, .. }
        | ReportEntry::File { file, .. } => Some(file),
        ReportEntry::Error { .. } => None,
    }
}

/// A tool that records that it was called and then fails.
pub fn tripwire(dir: &Path, name: &str) -> (String, PathBuf) {
    let marker = dir.join(format!("{name}.called"));
    let cmd = fake_tool(
        dir,
        name,
        &format!(
            "touch {}\nexit 9",
            shell_words::quote(&marker.to_string_lossy())
        ),
    );
    (cmd, marker)
}

/// Config whose every tool is a tripwire. Returns the markers in
/// pylint, flake8, black, isort, eslint, prettier order.
pub fn tripwire_config(dir: &Path) -> (Config, Vec<PathBuf>) {
    let names = ["pylint", "flake8", "black", "isort", "eslint", "prettier"];
    let wires: Vec<(String, PathBuf)> = names.iter().map(|n| tripwire(dir, n)).collect();
    let cfg = Config {
        tools: ToolsConfig {
            pylint: wires[0].0.clone(),
            flake8: wires[1].0.clone(),
            black: wires[2].0.clone(),
            isort: wires[3].0.clone(),
            eslint: wires[4].0.clone(),
            prettier: wires[5].0.clone(),
        },
        ..Config::default()
    };
    (cfg, wires.into_iter().map(|(_, m)| m).collect())
}

/// A tool that exits 0 without output, swallowing stdin.
pub fn clean_tool(dir: &Path, name: &str) -> String {
    fake_tool(dir, name, "cat >/dev/null 2>&1\nexit 0")
}

/// Temp directory holding the fake tools, separate from the project.
pub struct Workspace {
    pub tools: tempfile::TempDir,
    pub project: tempfile::TempDir,
}

impl Workspace {
    pub fn new() -> Self {
        Self {
            tools: tempfile::tempdir().expect("failed to create tools dir"),
            project: tempfile::tempdir().expect("failed to create project dir"),
        }
    }

    pub fn tools_dir(&self) -> &Path {
        self.tools.path()
    }

    pub fn root(&self) -> &Path {
        self.project.path()
    }

    /// Write a project file, creating parent directories.
    pub fn write(&self, rel: &str, contents: &str) -> PathBuf {
        let path = self.root().join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("failed to create parent dir");
        }
        fs::write(&path, contents).expect("failed to write project file");
        path
    }
}
