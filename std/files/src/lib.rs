//! MCP server exposing text file tools over a single root directory.
//!
//! Every filename is checked by [`validate`] before it touches the disk, so
//! all operations stay inside the root. Two deployments share the same code:
//! a file store (`upload_file`, `read_file`, `list_files`, `analyze_file`)
//! and a log reader (`read_log_file`).

use rmcp::{
    ServerHandler,
    handler::server::router::tool::ToolRouter,
    model::{Implementation, ServerCapabilities, ServerInfo},
    tool_handler,
};
pub mod dispatch;
pub mod error;
pub mod stats;
pub mod tools;
pub mod validate;

pub use dispatch::{Dispatcher, Operation, Profile, ToolRequest};
pub use error::ToolError;

/// MCP server delegating tool calls to a [`Dispatcher`].
#[derive(Debug, Clone)]
pub struct FileServer {
    pub(crate) dispatcher: Dispatcher,
    pub(crate) tool_router: ToolRouter<Self>,
}

#[tool_handler]
impl ServerHandler for FileServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: Default::default(),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "fmcp-files".into(),
                title: Some("File Tools MCP Server".into()),
                version: env!("CARGO_PKG_VERSION").into(),
                ..Default::default()
            },
            instructions: Some(format!(
                "Text file tools confined to the '{}' directory. Filenames must be a single name without path separators or '..'.",
                self.dispatcher.root().display()
            )),
        }
    }
}
