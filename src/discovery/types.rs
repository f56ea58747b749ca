use std::path::{Path, PathBuf};

/// Language family a source file belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    /// Python: pylint, flake8, black, isort.
    Primary,
    /// JavaScript/TypeScript: eslint, prettier.
    Secondary,
}

impl Language {
    /// Classify a path by its extension. Matching is case-sensitive.
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("py") => Some(Self::Primary),
            Some("js" | "jsx" | "ts" | "tsx") => Some(Self::Secondary),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Primary => "Python",
            Self::Secondary => "JavaScript/TypeScript",
        }
    }
}

/// Source files found under a project root, split by language family.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileSet {
    primary: Vec<PathBuf>,
    secondary: Vec<PathBuf>,
}

impl FileSet {
    pub fn new(primary: Vec<PathBuf>, secondary: Vec<PathBuf>) -> Self {
        Self { primary, secondary }
    }

    pub fn primary(&self) -> &[PathBuf] {
        &self.primary
    }

    pub fn secondary(&self) -> &[PathBuf] {
        &self.secondary
    }

    pub fn is_empty(&self) -> bool {
        self.primary.is_empty() && self.secondary.is_empty()
    }
}
