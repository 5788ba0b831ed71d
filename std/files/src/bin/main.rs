//! Binary entry point for the fmcp-files MCP server.

use clap::Parser;
use fmcp_files::{Dispatcher, FileServer, Profile};
use rmcp::ServiceExt;
use std::path::PathBuf;

/// File Tools MCP Server: upload, read, list and analyze text files.
#[derive(Parser)]
#[command(name = "fmcp-files", version, about)]
struct Cli {
    /// Which tool set to serve.
    #[arg(long, value_enum, default_value = "files")]
    profile: Profile,

    /// Root directory for all file operations. Defaults to `uploads` for the
    /// files profile and `logs` for the logs profile.
    #[arg(long)]
    root: Option<PathBuf>,
}

#[tokio::main]
async fn main() {
    // stdout carries JSON-RPC; logs go to stderr and only when asked for.
    if std::env::var_os("RUST_LOG").is_some() {
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .init();
    }
    let cli = Cli::parse();
    let root = cli
        .root
        .unwrap_or_else(|| PathBuf::from(cli.profile.default_root()));
    let dispatcher = Dispatcher::open(&root, cli.profile.operations())
        .await
        .expect("failed to create root directory");
    tracing::info!(root = %root.display(), profile = ?cli.profile, "starting server");

    let server = FileServer::new(dispatcher);
    let transport = rmcp::transport::stdio();
    server
        .serve(transport)
        .await
        .expect("failed to start server")
        .waiting()
        .await
        .expect("server error");
}
