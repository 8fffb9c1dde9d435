// accessgen/src/main.rs

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;

use cli::{Cli, Commands};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Setup Logging (Tracing)
    // RUST_LOG=debug accessgen generate ... pour voir les détails
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        // --- USE CASE: GENERATE SYNTHETIC DATA ---
        Commands::Generate {
            project_dir,
            rows,
            seed,
            output,
        } => commands::generate::execute(project_dir, rows, seed, output),

        // --- USE CASE: ACCESS LOOKUP ---
        Commands::Lookup {
            query,
            input,
            format,
        } => commands::lookup::execute(query, input, format),

        // --- USE CASE: CSV -> DATABASE ---
        Commands::Etl {
            input_file,
            db_path,
            table,
            transform,
        } => commands::etl::execute(input_file, db_path, table, transform).await,
    }
}
