use anyhow::Result;
use clap::Args;
use colored::*;
use needle_bio::stats::Summary;
use needle_core::NeedleError;

#[derive(Args)]
pub struct StatsArgs {
    /// Values to summarise (e.g. alignment scores)
    #[arg(required = true, allow_hyphen_values = true)]
    pub values: Vec<f64>,

    /// Output format (text, json)
    #[arg(long, default_value = "text")]
    pub format: String,
}

pub fn run(args: StatsArgs) -> Result<()> {
    let summary = Summary::of(&args.values)
        .ok_or_else(|| NeedleError::InvalidInput("no values given".to_string()))?;

    match args.format.as_str() {
        "json" => println!("{}", serde_json::to_string_pretty(&summary)?),
        "text" => print_text(&summary),
        other => {
            return Err(
                NeedleError::InvalidInput(format!("unknown output format '{}'", other)).into(),
            )
        }
    }
    Ok(())
}

fn print_text(summary: &Summary) {
    let rows = [
        ("count", summary.count as f64),
        ("mean", summary.mean),
        ("median", summary.median),
        ("std dev", summary.std_dev),
        ("variance", summary.variance),
        ("Q1", summary.q1),
        ("Q3", summary.q3),
        ("IQR", summary.iqr),
    ];
    for (label, value) in rows {
        println!("{:>10}  {}", label.bold(), format_value(value));
    }
}

fn format_value(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{:.4}", value)
    }
}
