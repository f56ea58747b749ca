use serde::{Deserialize, Serialize};

/// Base command lines for the external tools.
///
/// Each value is a shell-style command (`"npx eslint"`, `"python -m black"`)
/// that the pipeline splits into a program and leading arguments before
/// appending its own fixed flags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolsConfig {
    pub pylint: String,
    pub flake8: String,
    pub black: String,
    pub isort: String,
    pub eslint: String,
    pub prettier: String,
}

impl Default for ToolsConfig {
    fn default() -> Self {
        Self {
            pylint: "pylint".to_string(),
            flake8: "flake8".to_string(),
            black: "black".to_string(),
            isort: "isort".to_string(),
            eslint: "eslint".to_string(),
            prettier: "prettier".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub tools: ToolsConfig,
    /// Directory names never descended into during discovery.
    pub exclude_dirs: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tools: ToolsConfig::default(),
            exclude_dirs: [
                ".git",
                "node_modules",
                "__pycache__",
                ".venv",
                "venv",
                ".tox",
                "target",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
        }
    }
}
