//! Configuration file structure (jsxify.toml).

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    #[serde(default)]
    pub input: InputConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Deserialize)]
pub struct InputConfig {
    /// File extensions picked up when walking directories
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,
    /// Directory names skipped when walking directories
    #[serde(default = "default_exclude")]
    pub exclude: Vec<String>,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            extensions: default_extensions(),
            exclude: default_exclude(),
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct OutputConfig {
    /// Output directory used when neither --write nor --out-dir is given
    pub dir: Option<PathBuf>,
}

fn default_extensions() -> Vec<String> {
    ["js", "jsx", "mjs", "cjs", "tsx"]
        .into_iter()
        .map(String::from)
        .collect()
}

fn default_exclude() -> Vec<String> {
    vec!["node_modules".to_string(), "dist".to_string()]
}

/// Load configuration from `path` if it exists.
/// Returns an error if the config file exists but is malformed.
pub fn load_config(path: &Path) -> Result<ConfigFile> {
    if path.exists() {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let config: ConfigFile = toml::from_str(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        tracing::info!("Loaded config from {}", path.display());
        return Ok(config);
    }
    Ok(ConfigFile::default())
}

pub const DEFAULT_CONFIG: &str = r#"# jsxify configuration

[input]
# Extensions picked up when a directory is given
extensions = ["js", "jsx", "mjs", "cjs", "tsx"]

# Directory names that are never walked
exclude = ["node_modules", "dist"]

[output]
# Where transformed files go when --write is not given
# dir = "jsxify-out"
"#;
