//! Input file discovery.

use std::path::{Path, PathBuf};

use walkdir::{DirEntry, WalkDir};

use crate::config::InputConfig;

/// A file to transform.
#[derive(Debug, Clone, PartialEq)]
pub struct SourceFile {
    /// Path as found on disk
    pub path: PathBuf,

    /// Path relative to the argument it was found under
    pub relative: PathBuf,
}

/// Expand the given paths into source files.
///
/// Files named directly are always included. Directories are walked, keeping
/// configured extensions and skipping excluded directory names.
pub fn collect_files(paths: &[PathBuf], input: &InputConfig) -> Vec<SourceFile> {
    let mut files = Vec::new();

    for root in paths {
        if root.is_file() {
            let relative = root
                .file_name()
                .map(PathBuf::from)
                .unwrap_or_else(|| root.clone());
            files.push(SourceFile {
                path: root.clone(),
                relative,
            });
            continue;
        }

        for entry in WalkDir::new(root)
            .follow_links(true)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|e| !is_excluded(e, input))
            .filter_map(|e| e.ok())
        {
            let path = entry.path();
            if !entry.file_type().is_file() || !has_extension(path, input) {
                continue;
            }

            let relative = path.strip_prefix(root).unwrap_or(path).to_path_buf();
            files.push(SourceFile {
                path: path.to_path_buf(),
                relative,
            });
        }
    }

    files
}

fn is_excluded(entry: &DirEntry, input: &InputConfig) -> bool {
    entry.depth() > 0
        && entry.file_type().is_dir()
        && entry
            .file_name()
            .to_str()
            .is_some_and(|name| input.exclude.iter().any(|ex| ex == name))
}

fn has_extension(path: &Path, input: &InputConfig) -> bool {
    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
    input.extensions.iter().any(|allowed| allowed == ext)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn walks_directories_by_extension() {
        let temp = tempdir().unwrap();
        let src = temp.path().join("src");
        fs::create_dir_all(src.join("components")).unwrap();
        fs::write(src.join("index.js"), "").unwrap();
        fs::write(src.join("components/button.jsx"), "").unwrap();
        fs::write(src.join("styles.css"), "").unwrap();

        let files = collect_files(&[src.clone()], &InputConfig::default());
        let relative: Vec<_> = files.iter().map(|f| f.relative.clone()).collect();

        assert_eq!(
            relative,
            vec![
                PathBuf::from("components/button.jsx"),
                PathBuf::from("index.js"),
            ]
        );
    }

    #[test]
    fn skips_excluded_directories() {
        let temp = tempdir().unwrap();
        let root = temp.path().to_path_buf();
        fs::create_dir_all(root.join("node_modules/react")).unwrap();
        fs::write(root.join("node_modules/react/index.js"), "").unwrap();
        fs::write(root.join("app.js"), "").unwrap();

        let files = collect_files(&[root], &InputConfig::default());

        assert_eq!(files.len(), 1);
        assert_eq!(files[0].relative, PathBuf::from("app.js"));
    }

    #[test]
    fn explicit_files_are_kept() {
        let temp = tempdir().unwrap();
        let file = temp.path().join("legacy.es6");
        fs::write(&file, "").unwrap();

        let files = collect_files(&[file.clone()], &InputConfig::default());

        assert_eq!(
            files,
            vec![SourceFile {
                path: file,
                relative: PathBuf::from("legacy.es6"),
            }]
        );
    }
}
