//! CLI front end for the Lost Gallery engine.

mod audio;
mod commands;

use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "lg",
    about = "Lost Gallery — a turn-based interactive fiction",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play the game (the default)
    Play {
        /// Seed for the engine's random choices; random if omitted
        #[arg(short, long)]
        seed: Option<u64>,
    },

    /// Validate the authored world and print a summary
    Check,

    /// Print world metadata as JSON
    Info,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let result = match cli.command.unwrap_or(Commands::Play { seed: None }) {
        Commands::Play { seed } => commands::play::run(seed),
        Commands::Check => commands::check::run(),
        Commands::Info => commands::info::run(),
    };

    if let Err(message) = result {
        eprintln!("error: {message}");
        process::exit(1);
    }
}
