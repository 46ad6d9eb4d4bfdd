//! Plume CLI - ordered SQL migrations for Postgres

use clap::Parser;

mod cli;
mod commands;

use cli::Cli;
use commands::{common, migrate, status};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let result = match &cli.command {
        cli::Commands::Migrate(args) => migrate::execute(args, &cli.global).await,
        cli::Commands::Status(args) => status::execute(args, &cli.global).await,
    };

    // Single exit point: every error is mapped to its console line and
    // process exit code here, never inside command logic.
    if let Err(err) = result {
        std::process::exit(common::report_error(&err));
    }
}
