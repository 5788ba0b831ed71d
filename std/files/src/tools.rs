//! Tool catalog for the file MCP server.

use crate::{
    FileServer,
    dispatch::{Dispatcher, Operation, ToolRequest},
};
use rmcp::{
    handler::server::wrapper::Parameters,
    schemars::{self, JsonSchema},
    tool, tool_router,
};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Parameters for uploading a file.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct UploadFileParams {
    /// Name of the file to upload (e.g. 'example.txt').
    pub filename: String,
    /// Text content to write to the file.
    pub content: String,
}

/// Parameters for tools that take a single filename.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct FilenameParams {
    /// Name of the file (e.g. 'example.txt').
    pub filename: String,
}

#[tool_router]
impl FileServer {
    /// Create a server exposing the operations enabled on `dispatcher`.
    pub fn new(dispatcher: Dispatcher) -> Self {
        let mut tool_router = Self::tool_router();
        for op in Operation::ALL {
            if !dispatcher.is_enabled(op) {
                tool_router.remove_route(op.tool_name());
            }
        }
        Self {
            dispatcher,
            tool_router,
        }
    }

    #[tool(
        description = "Upload a text file to the server. The file is stored in the server's root directory, replacing any file of the same name."
    )]
    async fn upload_file(
        &self,
        Parameters(params): Parameters<UploadFileParams>,
    ) -> Result<String, String> {
        self.call(Operation::UploadFile, &params).await
    }

    #[tool(description = "Read the contents of an uploaded file from the server.")]
    async fn read_file(
        &self,
        Parameters(params): Parameters<FilenameParams>,
    ) -> Result<String, String> {
        self.call(Operation::ReadFile, &params).await
    }

    #[tool(description = "List all files in the server's root directory.")]
    async fn list_files(&self) -> Result<String, String> {
        self.call(Operation::ListFiles, &Map::new()).await
    }

    #[tool(
        description = "Analyze an uploaded file and return statistics (character count, word count, line count)."
    )]
    async fn analyze_file(
        &self,
        Parameters(params): Parameters<FilenameParams>,
    ) -> Result<String, String> {
        self.call(Operation::AnalyzeFile, &params).await
    }

    #[tool(description = "Read a log file and return its contents.")]
    async fn read_log_file(
        &self,
        Parameters(params): Parameters<FilenameParams>,
    ) -> Result<String, String> {
        self.call(Operation::ReadLogFile, &params).await
    }
}

impl FileServer {
    /// Hand a tool call to the dispatcher as a name plus argument map.
    async fn call<P: Serialize>(&self, operation: Operation, params: &P) -> Result<String, String> {
        let arguments = match serde_json::to_value(params) {
            Ok(Value::Object(map)) => map,
            _ => Map::new(),
        };
        let request = ToolRequest::new(operation.tool_name(), arguments);
        self.dispatcher
            .dispatch(&request)
            .await
            .map_err(|e| e.to_string())
    }
}
