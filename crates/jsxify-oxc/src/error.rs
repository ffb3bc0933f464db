//! Errors at the source transform boundary.

use std::path::PathBuf;

/// Errors that can occur while transforming source text.
///
/// A call that simply does not match is never an error; it is left as-is.
#[derive(Debug, thiserror::Error)]
pub enum TransformError {
    #[error("Parse error: {message}")]
    Parse { message: String },

    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Unsupported file extension: {}", .0.display())]
    UnsupportedExtension(PathBuf),
}
