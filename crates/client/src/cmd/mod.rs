//! Command-line interface for talking to a file tool server.

use crate::{
    client::{ServerCommand, connect},
    error::Error,
};
use clap::{Args, Parser, Subcommand};
pub mod call;

/// Call tools on an MCP file server launched over stdio.
///
/// The server command line comes last, after `--`:
///   fmcp-client call read_log_file filename=app.log -- fmcp-files --profile logs
#[derive(Parser, Debug)]
#[command(name = "fmcp-client", version, about)]
pub struct App {
    #[command(subcommand)]
    pub command: Command,
}

/// Server program and its arguments, passed through untouched.
#[derive(Args, Debug)]
pub struct ServerArgs {
    #[arg(last = true, required = true, num_args = 1.., value_name = "SERVER")]
    pub server: Vec<String>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List tools exposed by the server.
    Tools {
        #[command(flatten)]
        server: ServerArgs,
    },
    /// Call a tool with arguments.
    Call {
        /// Name of the tool to call.
        name: String,

        /// Tool arguments as key=value pairs (e.g. filename=notes.txt).
        #[arg(value_name = "KEY=VALUE")]
        args: Vec<String>,

        #[command(flatten)]
        server: ServerArgs,
    },
}

impl App {
    /// Parse CLI arguments and execute the corresponding command.
    pub async fn run() -> Result<(), Error> {
        let app = App::parse();
        match app.command {
            Command::Tools { server } => {
                let service = connect(&ServerCommand::from_argv(server.server)?).await?;
                let tools = service.peer().list_all_tools().await?;
                println!("{}", serde_json::to_string_pretty(&tools)?);
                service.cancel().await.ok();
            }
            Command::Call { name, args, server } => {
                let arguments = call::arguments(&args)?;
                let service = connect(&ServerCommand::from_argv(server.server)?).await?;
                let result = call::call(&service, name, arguments).await?;
                println!("{}", call::render(&result));
                service.cancel().await.ok();
            }
        }
        Ok(())
    }
}
