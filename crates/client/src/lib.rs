//! Command line client for the file tool servers.
//!
//! Launches an MCP server as a child process over stdio, then either lists
//! its tools or calls one tool and prints the returned text.

pub mod client;
pub mod cmd;
pub mod error;

pub use cmd::App;
pub use error::Error;
