//! Source-level `React.createElement` to JSX transform built on oxc.
//!
//! oxc parses the program, call expressions are lowered into the
//! [`jsxify_core::Node`] tree and rewritten, and the printed JSX is spliced
//! back over the original call spans. Code that is not rewritten keeps its
//! exact source text, comments and formatting included.

pub mod error;
pub mod lower;
pub mod transform;

pub use error::TransformError;
pub use lower::Lowering;
pub use transform::{transform_code, transform_path, TransformOptions, TransformOutput};
