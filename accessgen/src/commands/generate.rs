// accessgen/src/commands/generate.rs
//
// USE CASE: Generate the synthetic historical access table.

use std::path::PathBuf;

use anyhow::Context;
use accessgen_core::application::generate_dataset;
use accessgen_core::infrastructure::config::load_project_config;

pub fn execute(
    project_dir: PathBuf,
    rows: Option<usize>,
    seed: Option<u64>,
    output: Option<PathBuf>,
) -> anyhow::Result<()> {
    println!("⚙️  Loading configuration...");
    let mut config = load_project_config(&project_dir).with_context(|| {
        format!(
            "Failed to load project configuration from {:?}",
            project_dir
        )
    })?;

    if let Some(rows) = rows {
        config.generator.rows = rows;
    }
    if let Some(seed) = seed {
        config.generator.seed = Some(seed);
    }
    let output = output.unwrap_or_else(|| project_dir.join(&config.output));

    println!(
        "🎲 Generating {} synthetic access records...",
        config.generator.rows
    );
    let report = generate_dataset(&config, &output)
        .with_context(|| format!("Failed to generate access table at {:?}", output))?;

    print!("{}", report.summary);
    if let Some(seed) = report.seed {
        println!("   Seed: {}", seed);
    }
    println!(
        "\n✨ Data Generation Complete. Check '{}'",
        report.output.display()
    );
    Ok(())
}
