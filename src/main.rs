//! puppybowl - terminal roster viewer for the Puppy Bowl players API

use std::process::ExitCode;

use clap::Parser;

mod cli;
mod client;
mod config;
mod display;
mod error;
mod output;
mod roster;

use cli::{Cli, Commands, GlobalOptions};
use error::Result;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    match run().await {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {}", err);
            ExitCode::FAILURE
        }
    }
}

/// The log is a developer channel: silent unless `--debug` or `RUST_LOG` asks for it.
fn init_logging(debug: bool) {
    let default_filter = if debug { "puppybowl=debug" } else { "off" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .init();
}

async fn run() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_logging(cli.debug);

    let opts = GlobalOptions::from_cli(&cli);

    match cli.command {
        Commands::Init { yes } => cli::init::run(&opts, yes).map(|_| ExitCode::SUCCESS),
        Commands::Status => cli::status::run(&opts).map(|_| ExitCode::SUCCESS),
        Commands::List => cli::roster::list(&opts).await,
        Commands::Random => cli::roster::random(&opts).await,
        Commands::Roster { status } => cli::roster::filtered(&opts, status).await,
        Commands::Add(args) => cli::roster::add(&opts, args).await,
        Commands::Remove { id } => cli::roster::remove(&opts, id).await,
        Commands::Play => cli::play::run(&opts).await.map(|_| ExitCode::SUCCESS),
    }
}
