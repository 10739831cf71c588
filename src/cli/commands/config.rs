use anyhow::Result;
use clap::{Args, Subcommand};
use colored::*;
use needle_core::{load_config, save_config, Config, NeedleError};
use std::path::PathBuf;

#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Write the default configuration to a file
    Init {
        /// Destination path
        #[arg(value_name = "FILE")]
        path: PathBuf,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Print the effective configuration as TOML
    Show {
        /// Configuration file to read (defaults when omitted)
        #[arg(short, long, value_name = "FILE")]
        config: Option<PathBuf>,
    },
}

pub fn run(args: ConfigArgs) -> Result<()> {
    match args.command {
        ConfigCommands::Init { path, force } => {
            if path.exists() && !force {
                return Err(NeedleError::InvalidInput(format!(
                    "{} already exists (use --force to overwrite)",
                    path.display()
                ))
                .into());
            }
            save_config(&path, &Config::default())?;
            println!("{} Wrote {}", "✓".green(), path.display());
        }
        ConfigCommands::Show { config } => {
            let config = match config {
                Some(path) => load_config(path)?,
                None => Config::default(),
            };
            print!("{}", config.to_toml()?);
        }
    }
    Ok(())
}
