//! Error kinds reported by the file tools.
//!
//! Every variant renders to the text delivered back to the caller, so the
//! `Display` output doubles as the tool's error payload.

use thiserror::Error;

/// Failure of a single tool call.
#[derive(Error, Debug)]
pub enum ToolError {
    /// The filename is empty, blank, or could escape the root directory.
    #[error(
        "Error: Invalid filename '{0}'. Filename must not contain path separators or '..'."
    )]
    InvalidFilename(String),

    /// The filename is valid but no such file exists under the root.
    #[error("Error: File '{filename}' not found in {root} directory.")]
    NotFound { filename: String, root: String },

    /// Any other filesystem or decoding failure.
    #[error("Error {action}: {source}")]
    Io {
        action: &'static str,
        #[source]
        source: std::io::Error,
    },

    /// No operation is registered under this tool name.
    #[error("Error: Unknown tool '{0}'")]
    UnknownTool(String),

    /// The operation exists but is not enabled on this server.
    #[error("Error: Tool '{0}' is not enabled on this server")]
    Disabled(String),
}

impl ToolError {
    pub(crate) fn io(action: &'static str) -> impl FnOnce(std::io::Error) -> Self {
        move |source| ToolError::Io { action, source }
    }
}
