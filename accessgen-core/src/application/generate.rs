// accessgen-core/src/application/generate.rs

use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{info, instrument};

use crate::domain::access::{AccessRecord, AccessSummary, generate};
use crate::domain::project::ProjectConfig;
use crate::error::AccessGenError;
use crate::infrastructure::access_table::write_access_table;
use crate::infrastructure::adapters::FakePersonSource;

#[derive(Debug, Clone)]
pub struct GenerationReport {
    pub records: Vec<AccessRecord>,
    pub summary: AccessSummary,
    pub output: PathBuf,
    pub seed: Option<u64>,
}

/// Generates the historical access table described by `config` and writes
/// it to `output`.
#[instrument(skip(config), fields(rows = config.generator.rows, seed = ?config.generator.seed))]
pub fn generate_dataset(config: &ProjectConfig, output: &Path) -> Result<GenerationReport, AccessGenError> {
    let start = Instant::now();

    config.generator.policy.check()?;
    let catalog = config.website_catalog()?;

    let mut rng = match config.generator.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let mut people = FakePersonSource;

    let generation = generate(
        config.generator.rows,
        &catalog,
        &config.generator.policy,
        &mut people,
        &mut rng,
    )?;

    let summary = AccessSummary::from_records(&catalog, &generation.records);
    for site in &summary.sites {
        info!(
            website = %site.website,
            approved = site.approved,
            rejected = site.rejected,
            "Website access summary"
        );
    }

    write_access_table(output, &generation.records)?;

    info!(
        rows = generation.records.len(),
        output = ?output,
        "Dataset generated in {:.2?}",
        start.elapsed()
    );

    Ok(GenerationReport {
        records: generation.records,
        summary,
        output: output.to_path_buf(),
        seed: config.generator.seed,
    })
}
