//! Mapping from tool calls to filesystem operations under one root directory.
//!
//! A [`Dispatcher`] owns its root and the set of operations it serves. Calls
//! are handled one at a time, start to finish; the only state shared between
//! calls is what is on disk.

use crate::{error::ToolError, stats::TextStats, validate::resolve};
use serde_json::{Map, Value};
use std::{
    fmt,
    path::{Path, PathBuf},
    str::FromStr,
};

/// A file operation exposed as a tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    UploadFile,
    ReadFile,
    ListFiles,
    AnalyzeFile,
    ReadLogFile,
}

impl Operation {
    pub const ALL: [Operation; 5] = [
        Operation::UploadFile,
        Operation::ReadFile,
        Operation::ListFiles,
        Operation::AnalyzeFile,
        Operation::ReadLogFile,
    ];

    /// Name of the tool this operation is served under.
    pub fn tool_name(self) -> &'static str {
        match self {
            Operation::UploadFile => "upload_file",
            Operation::ReadFile => "read_file",
            Operation::ListFiles => "list_files",
            Operation::AnalyzeFile => "analyze_file",
            Operation::ReadLogFile => "read_log_file",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tool_name())
    }
}

impl FromStr for Operation {
    type Err = ToolError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Operation::ALL
            .into_iter()
            .find(|op| op.tool_name() == name)
            .ok_or_else(|| ToolError::UnknownTool(name.to_owned()))
    }
}

/// Preset root directory and operation set for a deployment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Profile {
    /// Upload, read, list and analyze files under `uploads`.
    Files,
    /// Read log files under `logs`.
    Logs,
}

impl Profile {
    pub fn default_root(self) -> &'static str {
        match self {
            Profile::Files => "uploads",
            Profile::Logs => "logs",
        }
    }

    pub fn operations(self) -> &'static [Operation] {
        match self {
            Profile::Files => &[
                Operation::UploadFile,
                Operation::ReadFile,
                Operation::ListFiles,
                Operation::AnalyzeFile,
            ],
            Profile::Logs => &[Operation::ReadLogFile],
        }
    }
}

/// A tool call: the tool name and its arguments.
#[derive(Debug, Clone, Default)]
pub struct ToolRequest {
    pub name: String,
    pub arguments: Map<String, Value>,
}

impl ToolRequest {
    pub fn new(name: impl Into<String>, arguments: Map<String, Value>) -> Self {
        Self {
            name: name.into(),
            arguments,
        }
    }

    /// String argument `key`, or `""` when it is missing or not a string.
    pub fn arg(&self, key: &str) -> &str {
        self.arguments
            .get(key)
            .and_then(Value::as_str)
            .unwrap_or_default()
    }
}

/// Runs file operations confined to a single root directory.
#[derive(Debug, Clone)]
pub struct Dispatcher {
    root: PathBuf,
    operations: Vec<Operation>,
}

impl Dispatcher {
    /// Create a dispatcher serving `operations` under `root`, creating the
    /// directory if it does not exist yet.
    pub async fn open(
        root: impl Into<PathBuf>,
        operations: &[Operation],
    ) -> std::io::Result<Self> {
        let root = root.into();
        tokio::fs::create_dir_all(&root).await?;
        Ok(Self {
            root,
            operations: operations.to_vec(),
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn is_enabled(&self, operation: Operation) -> bool {
        self.operations.contains(&operation)
    }

    /// Resolve the requested tool and run it.
    pub async fn dispatch(&self, request: &ToolRequest) -> Result<String, ToolError> {
        let operation: Operation = request.name.parse()?;
        if !self.is_enabled(operation) {
            return Err(ToolError::Disabled(request.name.clone()));
        }
        tracing::debug!(tool = %operation, "dispatching tool call");

        let result = match operation {
            Operation::UploadFile => {
                self.upload(request.arg("filename"), request.arg("content"))
                    .await
            }
            Operation::ReadFile => self.read(request.arg("filename")).await,
            Operation::ListFiles => self.list().await,
            Operation::AnalyzeFile => self.analyze(request.arg("filename")).await,
            Operation::ReadLogFile => self.read_log(request.arg("filename")).await,
        };
        if let Err(e) = &result {
            tracing::warn!(tool = %operation, error = %e, "tool call failed");
        }
        result
    }

    /// Write `content` as the full contents of `filename`, replacing any
    /// previous file.
    pub async fn upload(&self, filename: &str, content: &str) -> Result<String, ToolError> {
        let path = resolve(&self.root, filename)?;
        tokio::fs::write(&path, content)
            .await
            .map_err(ToolError::io("uploading file"))?;
        Ok(format!(
            "✓ Successfully uploaded '{filename}' ({} characters)",
            content.chars().count()
        ))
    }

    pub async fn read(&self, filename: &str) -> Result<String, ToolError> {
        let content = self.read_existing(filename, "reading file").await?;
        Ok(format!("Content of '{filename}':\n\n{content}"))
    }

    /// List the regular files directly under the root, sorted by name.
    pub async fn list(&self) -> Result<String, ToolError> {
        let mut names = Vec::new();
        let mut read_dir = tokio::fs::read_dir(&self.root)
            .await
            .map_err(ToolError::io("listing files"))?;
        while let Some(entry) = read_dir
            .next_entry()
            .await
            .map_err(ToolError::io("listing files"))?
        {
            // Follows symlinks. Entries that cannot be stat'ed, such as
            // dangling links, are left out of the listing.
            match tokio::fs::metadata(entry.path()).await {
                Ok(meta) if meta.is_file() => {
                    names.push(entry.file_name().to_string_lossy().into_owned());
                }
                Ok(_) => {}
                Err(e) => {
                    tracing::debug!(entry = %entry.path().display(), error = %e, "skipping entry");
                }
            }
        }

        if names.is_empty() {
            return Ok(format!("No files found in {} directory.", self.root_label()));
        }
        names.sort();

        let mut out = format!("Files in {} directory ({}):", self.root_label(), names.len());
        for name in &names {
            out.push_str("\n  • ");
            out.push_str(name);
        }
        Ok(out)
    }

    pub async fn analyze(&self, filename: &str) -> Result<String, ToolError> {
        let content = self.read_existing(filename, "analyzing file").await?;
        let rule = "━".repeat(32);
        Ok(format!(
            "File Analysis: '{filename}'\n{rule}\n{}\n{rule}",
            TextStats::of(&content)
        ))
    }

    /// Return the raw text of a log file.
    pub async fn read_log(&self, filename: &str) -> Result<String, ToolError> {
        self.read_existing(filename, "reading log file").await
    }

    async fn read_existing(
        &self,
        filename: &str,
        action: &'static str,
    ) -> Result<String, ToolError> {
        let path = resolve(&self.root, filename)?;
        let exists = tokio::fs::try_exists(&path)
            .await
            .map_err(ToolError::io(action))?;
        if !exists {
            return Err(ToolError::NotFound {
                filename: filename.to_owned(),
                root: self.root_label(),
            });
        }
        tokio::fs::read_to_string(&path)
            .await
            .map_err(ToolError::io(action))
    }

    /// Short name of the root used in messages, e.g. `uploads`.
    fn root_label(&self) -> String {
        self.root
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.root.display().to_string())
    }
}
