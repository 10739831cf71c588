pub mod commands;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "needle",
    version = needle_core::VERSION,
    about = "Global pairwise alignment with every co-optimal solution",
    long_about = "needle aligns two sequences end to end with the Needleman-Wunsch algorithm, \
                  scoring either with match/mismatch/gap constants or with a symbol-pair cost \
                  matrix, and can list every alignment that reaches the optimal score."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbosity level (can be repeated)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Align two sequences
    Align(commands::align::AlignArgs),

    /// Create or inspect a configuration file
    Config(commands::config::ConfigArgs),

    /// Summary statistics of a list of numbers
    Stats(commands::stats::StatsArgs),
}
