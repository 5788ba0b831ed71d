use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("MCP client initialization error: {0}")]
    ClientInit(#[from] Box<rmcp::service::ClientInitializeError>),

    #[error("MCP client error: {0}")]
    Service(#[from] rmcp::ServiceError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid argument '{0}', expected KEY=VALUE")]
    InvalidArg(String),

    #[error("no server command given")]
    NoCommand,
}
