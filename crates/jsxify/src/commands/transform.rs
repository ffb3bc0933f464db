//! Transform command.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use rayon::prelude::*;

use jsxify_oxc::{transform_code, TransformOptions, TransformOutput};

use crate::config::ConfigFile;
use crate::files::{collect_files, SourceFile};

/// Where transformed code goes.
#[derive(Debug, Clone, PartialEq)]
pub enum Target {
    /// Print a single file to stdout
    Stdout,
    /// Overwrite each input file
    InPlace,
    /// Mirror inputs under a directory
    Directory(PathBuf),
}

/// Run the transform command.
pub fn run(config: &ConfigFile, paths: &[PathBuf], target: Target, tsx: bool) -> Result<()> {
    let start = Instant::now();
    let files = collect_files(paths, &config.input);

    if files.is_empty() {
        anyhow::bail!("No source files found");
    }
    if target == Target::Stdout && files.len() > 1 {
        anyhow::bail!(
            "{} files matched; use --write or --out-dir to transform more than one",
            files.len()
        );
    }

    tracing::info!("Transforming {} files...", files.len());

    let results: Vec<(PathBuf, Result<usize>)> = files
        .par_iter()
        .map(|file| (file.path.clone(), transform_one(file, &target, tsx)))
        .collect();

    let mut rewritten = 0;
    let mut failed = 0;
    for (path, result) in results {
        match result {
            Ok(count) => rewritten += count,
            Err(e) => {
                tracing::error!("{}: {:#}", path.display(), e);
                failed += 1;
            }
        }
    }

    tracing::info!(
        "Rewrote {} elements in {} files in {}ms",
        rewritten,
        files.len() - failed,
        start.elapsed().as_millis()
    );

    if failed > 0 {
        anyhow::bail!("{} files failed to transform", failed);
    }

    Ok(())
}

/// Transform one file and deliver the result to `target`.
pub fn transform_one(file: &SourceFile, target: &Target, tsx: bool) -> Result<usize> {
    let output = transform_file(&file.path, tsx)?;

    match target {
        Target::Stdout => print!("{}", output.code),
        Target::InPlace => {
            if output.rewritten > 0 {
                fs::write(&file.path, &output.code)
                    .with_context(|| format!("Failed to write {}", file.path.display()))?;
            }
        }
        Target::Directory(dir) => {
            let dest = dir.join(&file.relative);
            if let Some(parent) = dest.parent() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create {}", parent.display()))?;
            }
            fs::write(&dest, &output.code)
                .with_context(|| format!("Failed to write {}", dest.display()))?;
        }
    }

    tracing::debug!("{}: {} elements", file.path.display(), output.rewritten);
    Ok(output.rewritten)
}

/// Read and transform a file, forcing TSX parsing when asked.
pub fn transform_file(path: &Path, tsx: bool) -> Result<TransformOutput> {
    if !tsx {
        return Ok(jsxify_oxc::transform_path(path)?);
    }

    let source = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    Ok(transform_code(&source, &TransformOptions::tsx())?)
}
