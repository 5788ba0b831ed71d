//! Filename validation for the file tools.
//!
//! Tools only ever accept a single path segment. A name is rejected outright
//! if it contains a separator or a `..` sequence, so every path the server
//! opens is `root/<name>` and cannot leave the root directory.

use crate::error::ToolError;
use std::path::{Path, PathBuf};

/// Whether `filename` is safe to use as a single segment under a root.
///
/// Rejects empty or all-whitespace names and any name containing `/`, `\`
/// or `..`.
pub fn is_valid_filename(filename: &str) -> bool {
    if filename.trim().is_empty() {
        return false;
    }
    !(filename.contains('/') || filename.contains('\\') || filename.contains(".."))
}

/// Like [`is_valid_filename`], reporting the rejected name on failure.
pub fn check_filename(filename: &str) -> Result<&str, ToolError> {
    if is_valid_filename(filename) {
        Ok(filename)
    } else {
        Err(ToolError::InvalidFilename(filename.to_owned()))
    }
}

/// Validate `filename` and join it onto `root`.
pub fn resolve(root: &Path, filename: &str) -> Result<PathBuf, ToolError> {
    check_filename(filename).map(|name| root.join(name))
}
