pub mod commands;
pub mod report;

use std::path::PathBuf;
use std::process::ExitCode;

use chrono::Utc;
use clap::{Parser, Subcommand};

pub use report::Report;

#[derive(Debug, Parser)]
#[command(
    name = "stockrisk",
    about = "SKU classification and risk scoring",
    long_about = "Classify SKUs (ABC/FSN/VED/XYZ), score them, and report alerts and recommendations as JSON.",
    after_help = "Examples:\n  stockrisk demo --count 250 --seed 7\n  stockrisk score --input items.json --config engine.json"
)]
pub struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    #[command(about = "Score a seeded synthetic inventory")]
    Demo {
        #[arg(long, default_value_t = 250, help = "Number of SKUs to generate")]
        count: usize,
        #[arg(long, default_value_t = 42, help = "Generator seed")]
        seed: u64,
    },
    #[command(about = "Score a JSON array of inventory records")]
    Score {
        #[arg(long, help = "Path to the inventory JSON file")]
        input: PathBuf,
        #[arg(long, help = "Engine configuration JSON; STOCKRISK_* variables are used when absent")]
        config: Option<PathBuf>,
    },
}

pub fn run() -> ExitCode {
    let cli = Cli::parse();
    let as_of = Utc::now();

    let result = match cli.command {
        Command::Demo { count, seed } => commands::demo::run(count, seed, as_of),
        Command::Score { input, config } => commands::score::run(&input, config.as_deref(), as_of),
    };

    match result.and_then(|report| report.to_json()) {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(error) => {
            tracing::error!(error = %error, "scoring failed");
            eprintln!("error: {error:#}");
            ExitCode::FAILURE
        }
    }
}
