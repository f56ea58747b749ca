use std::path::Path;

use walkdir::WalkDir;

use super::{FileSet, Language};
use crate::error::ScanError;

/// Walk `root` recursively and sort source files into language families.
///
/// Directories whose name is in `exclude_dirs` are skipped (never the root
/// itself). Entries that cannot be read are skipped with a warning. Paths
/// keep the `root` prefix and are ordered by file name within each
/// directory.
pub fn discover(root: &Path, exclude_dirs: &[String]) -> Result<FileSet, ScanError> {
    if !root.exists() {
        return Err(ScanError::PathNotFound(root.to_path_buf()));
    }

    let mut primary = Vec::new();
    let mut secondary = Vec::new();

    let walker = WalkDir::new(root)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| !should_skip(e, exclude_dirs));

    for entry in walker {
        let entry = match entry {
            Ok(e) => e,
            Err(err) => {
                tracing::warn!(error = %err, "skipping unreadable entry");
                continue;
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }
        match Language::from_path(entry.path()) {
            Some(Language::Primary) => primary.push(entry.into_path()),
            Some(Language::Secondary) => secondary.push(entry.into_path()),
            None => {}
        }
    }

    tracing::debug!(
        primary = primary.len(),
        secondary = secondary.len(),
        root = %root.display(),
        "discovery finished"
    );
    Ok(FileSet::new(primary, secondary))
}

fn should_skip(entry: &walkdir::DirEntry, exclude_dirs: &[String]) -> bool {
    if entry.depth() == 0 || !entry.file_type().is_dir() {
        return false;
    }
    let name = entry.file_name().to_str().unwrap_or_default();
    exclude_dirs.iter().any(|d| d == name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;

    fn defaults() -> Vec<String> {
        crate::config::Config::default().exclude_dirs
    }

    #[test]
    fn missing_root_is_path_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope");
        let err = discover(&missing, &defaults()).unwrap_err();
        assert!(matches!(err, ScanError::PathNotFound(p) if p == missing));
    }

    #[test]
    fn empty_directory_is_not_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let set = discover(dir.path(), &defaults()).unwrap();
        assert!(set.is_empty());
    }

    #[test]
    fn classifies_nested_files_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let pkg = dir.path().join("pkg");
        let web = dir.path().join("web");
        fs::create_dir_all(&pkg).unwrap();
        fs::create_dir_all(&web).unwrap();
        fs::write(pkg.join("b.py"), "").unwrap();
        fs::write(pkg.join("a.py"), "").unwrap();
        fs::write(web.join("app.tsx"), "").unwrap();
        fs::write(web.join("util.js"), "").unwrap();
        fs::write(dir.path().join("README.md"), "").unwrap();
        fs::write(dir.path().join("setup.cfg"), "").unwrap();

        let set = discover(dir.path(), &defaults()).unwrap();
        assert_eq!(set.primary(), &[pkg.join("a.py"), pkg.join("b.py")]);
        assert_eq!(set.secondary(), &[web.join("app.tsx"), web.join("util.js")]);
    }

    #[test]
    fn skips_excluded_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let deps = dir.path().join("node_modules").join("left-pad");
        fs::create_dir_all(&deps).unwrap();
        fs::write(deps.join("index.js"), "").unwrap();
        let venv = dir.path().join(".venv").join("lib");
        fs::create_dir_all(&venv).unwrap();
        fs::write(venv.join("site.py"), "").unwrap();
        fs::write(dir.path().join("main.py"), "").unwrap();

        let set = discover(dir.path(), &defaults()).unwrap();
        assert_eq!(set.primary(), &[dir.path().join("main.py")]);
        assert!(set.secondary().is_empty());
    }

    #[test]
    fn excluded_name_as_root_is_still_walked() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("node_modules");
        fs::create_dir_all(&root).unwrap();
        fs::write(root.join("x.js"), "").unwrap();

        let set = discover(&root, &defaults()).unwrap();
        assert_eq!(set.secondary(), &[root.join("x.js")]);
    }

    #[test]
    fn single_file_root_is_classified() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("script.py");
        fs::write(&file, "print(1)\n").unwrap();

        let set = discover(&file, &defaults()).unwrap();
        assert_eq!(set.primary(), &[PathBuf::from(&file)]);
    }
}
