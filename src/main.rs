use clap::Parser;
use colored::*;
use needle::cli::{Cli, Commands};
use needle::NeedleError;
use std::process;
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();

    // NEEDLE_LOG wins over -v; RUST_LOG wins over both
    let default_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let log_level = std::env::var("NEEDLE_LOG").unwrap_or_else(|_| default_level.to_string());

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(cli) {
        eprintln!("{} {}", "Error:".red().bold(), e);

        let exit_code = match e.downcast_ref::<NeedleError>() {
            Some(NeedleError::Configuration(_)) => 2,
            Some(NeedleError::Io(_)) => 3,
            Some(NeedleError::Alignment(_)) | Some(NeedleError::Cancelled) => 4,
            _ => 1,
        };
        process::exit(exit_code);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Commands::Align(args) => needle::cli::commands::align::run(args),
        Commands::Config(args) => needle::cli::commands::config::run(args),
        Commands::Stats(args) => needle::cli::commands::stats::run(args),
    }
}
