use anyhow::Result;
use clap::Args;
use colored::*;
use needle_bio::alignment::{
    Alignment, CoordinatePath, NeedlemanWunsch, ScoringModel, TracebackLimits, VerboseAlignment,
};
use needle_core::{load_config, Config, NeedleError, ScoringSection};
use serde::Serialize;
use std::path::PathBuf;
use tracing::info;

#[derive(Args)]
pub struct AlignArgs {
    /// First sequence (matrix columns)
    pub seq1: String,

    /// Second sequence (matrix rows)
    pub seq2: String,

    /// Match, mismatch and gap scores
    #[arg(
        long,
        value_name = "MATCH,MISMATCH,GAP",
        value_delimiter = ',',
        allow_hyphen_values = true
    )]
    pub cost_table: Option<Vec<i32>>,

    /// Flattened symbol-pair scores in key order, followed by the gap score
    #[arg(
        long,
        value_name = "SCORES",
        value_delimiter = ',',
        allow_hyphen_values = true
    )]
    pub cost_matrix: Option<Vec<i32>>,

    /// Symbol order of --cost-matrix rows and columns (e.g. "ACGT")
    #[arg(long)]
    pub key: Option<String>,

    /// Configuration file (scoring given on the command line takes precedence)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// List every alignment reaching the optimal score
    #[arg(long)]
    pub all: bool,

    /// Refuse to list more than N alignments (0 = unlimited)
    #[arg(long, value_name = "N")]
    pub max_paths: Option<usize>,

    /// Print the score matrix and the traceback path
    #[arg(long)]
    pub show_matrix: bool,

    /// Output format (text, json)
    #[arg(long, value_name = "FORMAT")]
    pub format: Option<String>,
}

#[derive(Serialize)]
struct AlignReport<'a> {
    score: i32,
    count: usize,
    alignments: &'a [Alignment],
    #[serde(skip_serializing_if = "Option::is_none")]
    matrix: Option<Vec<Vec<i32>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    path: Option<&'a CoordinatePath>,
}

pub fn run(args: AlignArgs) -> Result<()> {
    let config = resolve_config(&args)?;
    let format = config.output.format.as_str();
    if format != "text" && format != "json" {
        return Err(NeedleError::InvalidInput(format!("unknown output format '{}'", format)).into());
    }

    let scoring = ScoringModel::from_section(&config.scoring).map_err(NeedleError::from)?;
    let aligner = NeedlemanWunsch::new(scoring)
        .with_limits(TracebackLimits::from_config(&config.traceback));

    let (seq1, seq2) = (args.seq1.as_bytes(), args.seq2.as_bytes());
    info!("Aligning {} x {} symbols", seq1.len(), seq2.len());

    let verbose = aligner
        .align_verbose(seq1, seq2)
        .map_err(NeedleError::from)?;
    let alignments = if args.all {
        aligner.align_all(seq1, seq2).map_err(NeedleError::from)?
    } else {
        vec![verbose.alignment.clone()]
    };

    let show_matrix = config.output.show_matrix;
    if format == "json" {
        let report = AlignReport {
            score: verbose.alignment.score,
            count: alignments.len(),
            alignments: &alignments,
            matrix: show_matrix.then(|| {
                verbose
                    .matrix
                    .row_slices()
                    .map(|row| row.to_vec())
                    .collect()
            }),
            path: show_matrix.then_some(&verbose.path),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_text(&verbose, &alignments, show_matrix);
    }

    Ok(())
}

/// Symbols are scored byte by byte, so multi-byte characters are refused up front.
fn ensure_ascii(what: &str, value: &str) -> Result<(), NeedleError> {
    match value.chars().find(|c| !c.is_ascii()) {
        Some(c) => Err(NeedleError::InvalidInput(format!(
            "{} contains non-ASCII symbol '{}'",
            what, c
        ))),
        None => Ok(()),
    }
}

/// Merge the config file (or defaults) with command-line overrides.
fn resolve_config(args: &AlignArgs) -> Result<Config, NeedleError> {
    ensure_ascii("seq1", &args.seq1)?;
    ensure_ascii("seq2", &args.seq2)?;

    let mut config = match &args.config {
        Some(path) => load_config(path)?,
        None => Config::default(),
    };

    if args.cost_table.is_some() || args.cost_matrix.is_some() || args.key.is_some() {
        config.scoring = ScoringSection {
            cost_table: args.cost_table.clone(),
            cost_matrix: args.cost_matrix.clone(),
            key: args.key.clone(),
        };
    }
    if let Some(max_paths) = args.max_paths {
        config.traceback.max_paths = max_paths;
    }
    if let Some(format) = &args.format {
        config.output.format = format.clone();
    }
    config.output.show_matrix |= args.show_matrix;

    if let Some(key) = &config.scoring.key {
        ensure_ascii("key", key)?;
    }

    Ok(config)
}

fn print_text(verbose: &VerboseAlignment, alignments: &[Alignment], show_matrix: bool) {
    println!("{} {}", "Score:".bold(), verbose.alignment.score);

    let total = alignments.len();
    for (i, alignment) in alignments.iter().enumerate() {
        println!();
        if total > 1 {
            println!("{}", format!("Alignment {}/{}", i + 1, total).cyan());
        }
        println!("  {}", alignment.seq1_str());
        println!("  {}", String::from_utf8_lossy(&alignment.alignment_string()).dimmed());
        println!("  {}", alignment.seq2_str());
        println!(
            "  {} {:.1}%  {} {}",
            "identity".dimmed(),
            alignment.identity() * 100.0,
            "gaps".dimmed(),
            alignment.gap_count()
        );
    }

    if show_matrix {
        println!();
        println!("{}", "Score matrix".bold());
        print!("{}", verbose.matrix);
        let path: Vec<String> = verbose
            .path
            .iter()
            .map(|(row, col)| format!("({},{})", row, col))
            .collect();
        println!("{} {}", "Path:".bold(), path.join(" -> "));
    }
}
