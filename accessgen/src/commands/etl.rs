// accessgen/src/commands/etl.rs
//
// USE CASE: Extract a CSV, transform one column, load it into DuckDB.

use std::path::PathBuf;
use std::str::FromStr;

use accessgen_core::application::EtlPipeline;
use accessgen_core::domain::etl::Transform;
use accessgen_core::infrastructure::adapters::DuckDBConnector;
use anyhow::Context;

pub async fn execute(
    input_file: PathBuf,
    db_path: String,
    table: String,
    transform: String,
) -> anyhow::Result<()> {
    let transform = Transform::from_str(&transform)?;
    let pipeline = EtlPipeline::new(input_file, &table, transform)?;

    println!(
        "🚚 Loading {} into {} ({})...",
        pipeline.input_file().display(),
        pipeline.table(),
        db_path
    );

    let connector = DuckDBConnector::new(&db_path)
        .with_context(|| format!("Failed to initialize DuckDB at {}", db_path))?;

    let report = pipeline.run(&connector).await?;

    println!(
        "✨ Data has been successfully loaded into the '{}' table ({} rows).",
        report.table, report.rows_loaded
    );
    Ok(())
}
