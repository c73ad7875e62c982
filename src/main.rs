use api::api::start_server;

use clap::{Parser, Subcommand};

use crate::config::API_URL;
use crate::utils::is_server_running;

mod api;
mod config;
mod errors;
mod models;
mod schema;
mod todo_commands;
mod ui;
mod utils;

#[derive(Debug, Subcommand)]
enum Commands {
    #[clap(alias = "ls")]
    List,
    #[clap(alias = "c")]
    Create,
    Show { id: String },
    Complete { id: String },
    Reopen { id: String },
    Delete { id: String },
}

#[derive(Debug, Parser)]
#[clap(author, version, about, long_about = "Manage todos from the command line")]
struct TodoArgs {
    #[clap(short = 's', long = "start-server")]
    start_server: bool,

    #[clap(subcommand)]
    command: Option<Commands>,
}

fn main() -> anyhow::Result<()> {
    let args = TodoArgs::parse();

    if args.start_server {
        let port = API_URL.rsplit(':').next().unwrap_or("8080");

        if !is_server_running(port)? {
            println!("Starting server on {}", API_URL.as_str());
            start_server()?;
        } else {
            eprintln!("Server already running on {}", API_URL.as_str());
        }

        return Ok(());
    }

    match &args.command {
        Some(Commands::List) => todo_commands::list_todos()?,
        Some(Commands::Create) => todo_commands::create_new_todo()?,
        Some(Commands::Show { id }) => todo_commands::show_todo(id)?,
        Some(Commands::Complete { id }) => todo_commands::complete_todo(id)?,
        Some(Commands::Reopen { id }) => todo_commands::reopen_todo(id)?,
        Some(Commands::Delete { id }) => todo_commands::delete_todo(id)?,
        None => {}
    }

    Ok(())
}
