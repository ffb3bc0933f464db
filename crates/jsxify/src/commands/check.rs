//! Check command.

use std::path::PathBuf;

use anyhow::Result;
use rayon::prelude::*;
use serde::Serialize;

use super::transform::transform_file;
use crate::config::ConfigFile;
use crate::files::{collect_files, SourceFile};

/// Per-file outcome of a check.
#[derive(Debug, Serialize, PartialEq)]
pub struct FileReport {
    pub path: PathBuf,
    pub rewritten: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Outcome of checking a set of files.
#[derive(Debug, Serialize, PartialEq)]
pub struct Report {
    pub files: Vec<FileReport>,
    /// Files that would change
    pub changed: usize,
    /// Files that could not be parsed or read
    pub failed: usize,
}

/// Run the check command.
pub fn run(config: &ConfigFile, paths: &[PathBuf], json: bool, tsx: bool) -> Result<()> {
    let files = collect_files(paths, &config.input);
    let report = build_report(&files, tsx);

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        for file in &report.files {
            match &file.error {
                Some(error) => tracing::warn!("{}: {}", file.path.display(), error),
                None if file.rewritten > 0 => {
                    println!("{}: {} elements", file.path.display(), file.rewritten)
                }
                None => {}
            }
        }
    }

    if report.failed > 0 {
        anyhow::bail!("{} files could not be checked", report.failed);
    }
    if report.changed > 0 {
        anyhow::bail!("{} of {} files would be rewritten", report.changed, files.len());
    }

    tracing::info!("{} files already free of createElement calls", files.len());
    Ok(())
}

/// Transform every file in memory and summarize what would change.
pub fn build_report(files: &[SourceFile], tsx: bool) -> Report {
    let files: Vec<FileReport> = files
        .par_iter()
        .map(|file| match transform_file(&file.path, tsx) {
            Ok(output) => FileReport {
                path: file.path.clone(),
                rewritten: output.rewritten,
                error: None,
            },
            Err(e) => FileReport {
                path: file.path.clone(),
                rewritten: 0,
                error: Some(format!("{e:#}")),
            },
        })
        .collect();

    let changed = files.iter().filter(|f| f.rewritten > 0).count();
    let failed = files.iter().filter(|f| f.error.is_some()).count();

    Report {
        files,
        changed,
        failed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn reports_changed_and_failed_files() {
        let temp = tempdir().unwrap();
        let dir = temp.path();
        fs::write(dir.join("a.js"), r#"React.createElement("div", null, React.createElement("span"));"#)
            .unwrap();
        fs::write(dir.join("b.js"), "export const x = 1;").unwrap();
        fs::write(dir.join("c.js"), "React.createElement(").unwrap();

        let files = collect_files(&[dir.to_path_buf()], &Default::default());
        let report = build_report(&files, false);

        assert_eq!(report.changed, 1);
        assert_eq!(report.failed, 1);
        assert_eq!(report.files[0].rewritten, 2);
        assert_eq!(report.files[1].rewritten, 0);
        assert!(report.files[2].error.is_some());
    }

    #[test]
    fn json_report_skips_missing_errors() {
        let report = Report {
            files: vec![FileReport {
                path: PathBuf::from("a.js"),
                rewritten: 3,
                error: None,
            }],
            changed: 1,
            failed: 0,
        };

        let value = serde_json::to_value(&report).unwrap();

        assert_eq!(
            value,
            serde_json::json!({
                "files": [{ "path": "a.js", "rewritten": 3 }],
                "changed": 1,
                "failed": 0,
            })
        );
    }

    #[test]
    fn tsx_flag_reaches_every_file() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("legacy.js");
        fs::write(&path, r#"React.createElement("p", null, (value as string));"#).unwrap();
        let files = collect_files(&[path], &Default::default());

        let plain = build_report(&files, false);
        let forced = build_report(&files, true);

        assert_eq!(plain.failed, 1);
        assert_eq!(forced.failed, 0);
        assert_eq!(forced.files[0].rewritten, 1);
    }
}
