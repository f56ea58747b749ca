//! Exit codes and output of the `lintsweep` binary.

#![cfg(unix)]

mod common;

use std::process::{Command, Output};

use common::{Workspace, clean_tool, fake_tool};

fn lintsweep(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_lintsweep"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run lintsweep")
}

fn stdout(out: &Output) -> String {
    String::from_utf8_lossy(&out.stdout).into_owned()
}

#[test]
fn no_arguments_prints_usage_and_exits_1() {
    let out = lintsweep(&[]);
    assert_eq!(out.status.code(), Some(1));
    assert!(stdout(&out).starts_with("Usage: lintsweep"));
}

#[test]
fn extra_positional_argument_prints_usage() {
    let out = lintsweep(&["a", "b"]);
    assert_eq!(out.status.code(), Some(1));
    assert!(stdout(&out).contains("<project_path>"));
}

#[test]
fn help_exits_0() {
    let out = lintsweep(&["--help"]);
    assert_eq!(out.status.code(), Some(0));
    assert!(stdout(&out).contains("--json"));
}

#[test]
fn missing_path_is_an_error() {
    let ws = Workspace::new();
    let missing = ws.root().join("nope");
    let out = lintsweep(&[missing.to_str().unwrap()]);
    assert_eq!(out.status.code(), Some(1));
    assert_eq!(
        stdout(&out).trim(),
        format!("Error: Path '{}' does not exist", missing.display())
    );
}

#[test]
fn empty_project_reports_error_bucket() {
    let ws = Workspace::new();
    ws.write("notes.txt", "nothing to lint");
    let out = lintsweep(&[ws.root().to_str().unwrap()]);

    assert_eq!(out.status.code(), Some(0));
    let text = stdout(&out);
    assert!(text.starts_with("Starting project analysis..."), "{text}");
    assert!(text.contains("Analysis Results:"));
    assert!(text.contains("ERROR Results:"));
    assert!(text.contains("- No Python or JavaScript/TypeScript files found in the project"));
}

#[test]
fn json_output_uses_project_config() {
    let ws = Workspace::new();
    ws.write("app.py", "x = 1\n");
    let dir = ws.tools_dir();
    let config = format!(
        "tools:\n  pylint: {}\n  flake8: {}\n  black: {}\n  isort: {}\n",
        yaml_str(&fake_tool(dir, "pylint", "echo '[]'")),
        yaml_str(&clean_tool(dir, "flake8")),
        yaml_str(&clean_tool(dir, "black")),
        yaml_str(&clean_tool(dir, "isort")),
    );
    ws.write(".lintsweep.yaml", &config);

    let out = lintsweep(&["--json", ws.root().to_str().unwrap()]);

    assert_eq!(out.status.code(), Some(0), "{}", stdout(&out));
    let json: serde_json::Value = serde_json::from_str(&stdout(&out)).expect("valid JSON");
    assert_eq!(
        json,
        serde_json::json!({"pylint": [], "flake8": [], "formatting": []})
    );
}

#[test]
fn explicit_config_flag_wins_and_bad_config_fails() {
    let ws = Workspace::new();
    ws.write("app.py", "");
    let bad = ws.tools_dir().join("bad.yaml");
    std::fs::write(&bad, "tools: [not, a, map]\n").unwrap();

    let out = lintsweep(&["--config", bad.to_str().unwrap(), ws.root().to_str().unwrap()]);

    assert_eq!(out.status.code(), Some(1));
    assert!(stdout(&out).starts_with("Error: invalid config"), "{}", stdout(&out));
}

fn yaml_str(s: &str) -> String {
    format!("'{}'", s.replace('\'', "''"))
}
