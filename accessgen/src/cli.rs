// accessgen/src/cli.rs
//
// Single source of truth for all CLI definitions (Clap structs).

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "accessgen")]
#[command(about = "Synthetic access records, access lookup and CSV-to-database ETL", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 🎲 Generates the synthetic historical access table (CSV)
    Generate {
        /// Project directory (where accessgen.yaml lives, if any)
        #[arg(long, default_value = ".")]
        project_dir: PathBuf,

        /// Number of rows to generate (overrides config)
        #[arg(long, short)]
        rows: Option<usize>,

        /// Seed for reproducible output (overrides config)
        #[arg(long)]
        seed: Option<u64>,

        /// Output CSV path (overrides config)
        #[arg(long, short)]
        output: Option<PathBuf>,
    },

    /// 🔍 Checks who already has access to a website
    Lookup {
        /// Website (or part of it) to look up, case-insensitive
        query: String,

        /// Historical access table to search
        #[arg(long, short, default_value = "user_access_historical_data.csv")]
        input: PathBuf,

        /// Output format: table | json
        #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },

    /// 🚚 Loads a CSV file into a DuckDB table, applying one column transform
    Etl {
        /// CSV file to extract
        #[arg(long, env = "INPUT_FILE", default_value = "data.csv")]
        input_file: PathBuf,

        /// DuckDB database file
        #[arg(long, env = "DB_PATH", default_value = "output.duckdb")]
        db_path: String,

        /// Destination table (replaced if it exists)
        #[arg(long, env = "TABLE_NAME", default_value = "output_table")]
        table: String,

        /// Transform: 'upper:<column>' or 'add:<column>:<amount>'
        #[arg(long, default_value = "upper:name")]
        transform: String,
    },
}
