//! usage-report - memory and instance usage per Cloud Foundry org and space

use clap::Parser;

mod cli;
mod client;
mod config;
mod error;
mod models;
mod output;
mod report;

use cli::{Cli, Commands, GlobalOptions};
use error::Result;

#[tokio::main]
async fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        // --help and --version are not failures
        Err(err) if !err.use_stderr() => err.exit(),
        Err(err) => {
            let _ = err.print();
            std::process::exit(1);
        }
    };
    init_logging(cli.debug);

    if let Err(err) = run(cli).await {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

/// Log to stderr; `RUST_LOG` takes precedence over `--debug`.
fn init_logging(debug: bool) {
    let default_filter = if debug { "usage_report=debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .init();
}

async fn run(cli: Cli) -> Result<()> {
    let opts = GlobalOptions::from_cli(&cli);

    match cli.command() {
        Commands::Report => cli::report::run(&opts).await,
        Commands::Status => cli::status::run(&opts),
    }
}
