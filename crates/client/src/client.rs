//! Stdio connection to a server launched as a child process.

use crate::error::Error;
use rmcp::{RoleClient, ServiceExt, service::RunningService, transport::TokioChildProcess};
use tokio::process::Command;

/// Command line of the server to launch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerCommand {
    pub program: String,
    pub args: Vec<String>,
}

impl ServerCommand {
    /// Take the program from the first word and pass the rest as arguments.
    pub fn from_argv(argv: Vec<String>) -> Result<Self, Error> {
        let mut words = argv.into_iter();
        let program = words.next().ok_or(Error::NoCommand)?;
        Ok(Self {
            program,
            args: words.collect(),
        })
    }
}

/// Spawn the server and complete the MCP handshake.
pub async fn connect(server: &ServerCommand) -> Result<RunningService<RoleClient, ()>, Error> {
    let mut cmd = Command::new(&server.program);
    cmd.args(&server.args);
    let transport = TokioChildProcess::new(cmd)?;
    let service = ().serve(transport).await.map_err(Box::new)?;
    tracing::debug!(program = %server.program, "connected to server");
    Ok(service)
}
