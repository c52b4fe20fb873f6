//! Tremor Sequence Pipeline CLI
//!
//! Prepares windowed, leakage-safe datasets from recorded tremor sessions.

use chrono::Utc;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tremor_seq::{
    add_magnitude, load_csv, parse_id_list, prepare, ConsoleReport, LoadError, PipelineConfig,
    VERSION,
};

#[derive(Parser)]
#[command(name = "tremor-seq")]
#[command(version = VERSION)]
#[command(about = "Windowed sequence-labeling pipeline for tremor monitoring research", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Prepare windowed train/test datasets from a recorded CSV
    Prepare {
        /// Input CSV file
        #[arg(long, short)]
        input: PathBuf,

        /// Rows per window
        #[arg(long)]
        window_size: Option<usize>,

        /// Row advance between consecutive window starts
        #[arg(long)]
        step: Option<usize>,

        /// Comma-separated training collection ids
        #[arg(long)]
        train_ids: Option<String>,

        /// Comma-separated test collection ids
        #[arg(long)]
        test_ids: Option<String>,
    },

    /// Summarize the collections in a recorded CSV
    Inspect {
        /// Input CSV file
        #[arg(long, short)]
        input: PathBuf,
    },

    /// Show the effective pipeline configuration
    Config,
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Prepare {
            input,
            window_size,
            step,
            train_ids,
            test_ids,
        } => {
            cmd_prepare(&input, window_size, step, train_ids, test_ids);
        }
        Commands::Inspect { input } => {
            cmd_inspect(&input);
        }
        Commands::Config => {
            cmd_config();
        }
    }
}

fn cmd_prepare(
    input: &PathBuf,
    window_size: Option<usize>,
    step: Option<usize>,
    train_ids: Option<String>,
    test_ids: Option<String>,
) {
    let mut config = PipelineConfig::load().unwrap_or_default();
    if let Some(window_size) = window_size {
        config.window_size = window_size;
    }
    if let Some(step) = step {
        config.step = step;
    }
    if let Some(ref ids) = train_ids {
        config.train_ids = parse_ids_or_exit(ids);
    }
    if let Some(ref ids) = test_ids {
        config.test_ids = parse_ids_or_exit(ids);
    }

    println!("Tremor Sequence Pipeline v{VERSION}");
    println!();
    println!("Input: {}", input.display());
    println!(
        "Window: {} rows, step {} rows, features {:?}",
        config.window_size, config.step, config.feature_names
    );
    println!("Started: {}", Utc::now().format("%Y-%m-%d %H:%M:%S UTC"));
    println!();

    let table = match load_csv(input) {
        Ok(table) => table,
        Err(LoadError::NotFound(path)) => {
            eprintln!("Error: input file not found: {}", path.display());
            eprintln!("Nothing was prepared.");
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("Error loading {}: {e}", input.display());
            std::process::exit(1);
        }
    };

    let prepared = match prepare(&table, &config, &mut ConsoleReport) {
        Ok(prepared) => prepared,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    if prepared.train.is_empty() {
        eprintln!();
        eprintln!("No training data produced.");
        eprintln!("Check the collection ids and window_size against the input file.");
        std::process::exit(1);
    }

    println!();
    println!(
        "Prepared {} training and {} test windows.",
        prepared.train.len(),
        prepared.test.len()
    );
}

fn cmd_inspect(input: &PathBuf) {
    let table = match load_csv(input) {
        Ok(table) => add_magnitude(&table),
        Err(e) => {
            eprintln!("Error loading {}: {e}", input.display());
            std::process::exit(1);
        }
    };

    println!("Collections in {}", input.display());
    println!("=========================");
    println!();

    if table.is_empty() {
        println!("No rows found.");
        return;
    }

    for id in table.collection_ids() {
        let rows = table.collection(id);
        let first = rows.first().map_or(0.0, |r| r.time_s);
        let last = rows.last().map_or(0.0, |r| r.time_s);
        let tremor_rows = rows.iter().filter(|r| r.tremor == 1).count();
        let tremor_share = 100.0 * tremor_rows as f64 / rows.len() as f64;

        println!(
            "Collection {id}: {} rows, {:.1}s - {:.1}s, tremor {tremor_share:.1}%",
            rows.len(),
            first,
            last
        );
    }

    println!();
    println!("Total: {} rows", table.len());
}

fn cmd_config() {
    let config = PipelineConfig::load().unwrap_or_default();

    println!("Configuration");
    println!("=============");
    println!();
    println!("Config file: {:?}", PipelineConfig::config_path());
    println!();
    println!(
        "{}",
        serde_json::to_string_pretty(&config).unwrap_or_else(|_| "Error".to_string())
    );
}

fn parse_ids_or_exit(ids: &str) -> Vec<i64> {
    match parse_id_list(ids) {
        Ok(ids) => ids,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}
