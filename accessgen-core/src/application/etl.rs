// accessgen-core/src/application/etl.rs

use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{error, info, instrument, warn};

use crate::domain::etl::{Transform, quote_ident, validate_identifier};
use crate::error::AccessGenError;
use crate::infrastructure::error::InfrastructureError;
use crate::ports::connector::{ColumnSchema, Connector};

const SOURCE_VIEW: &str = "etl_source";

/// Result of the extract stage: the registered relation and its schema.
#[derive(Debug, Clone)]
pub struct Extracted {
    pub source: String,
    pub columns: Vec<ColumnSchema>,
}

#[derive(Debug, Clone)]
pub struct EtlReport {
    pub table: String,
    pub rows_loaded: u64,
}

/// CSV -> transform -> table. Each stage logs its outcome; the first
/// failure aborts the run and is returned as-is.
pub struct EtlPipeline {
    input_file: PathBuf,
    table: String,
    transform: Transform,
}

impl EtlPipeline {
    pub fn new(
        input_file: impl Into<PathBuf>,
        table: &str,
        transform: Transform,
    ) -> Result<Self, AccessGenError> {
        let table = validate_identifier(table)?.to_string();
        Ok(Self {
            input_file: input_file.into(),
            table,
            transform,
        })
    }

    pub fn input_file(&self) -> &Path {
        &self.input_file
    }

    pub fn table(&self) -> &str {
        &self.table
    }

    #[instrument(skip(self, connector), fields(input = ?self.input_file))]
    pub async fn extract(&self, connector: &dyn Connector) -> Result<Extracted, AccessGenError> {
        let result: Result<Extracted, AccessGenError> = async {
            if !self.input_file.exists() {
                return Err(InfrastructureError::FileNotFound(
                    self.input_file.display().to_string(),
                )
                .into());
            }
            connector
                .register_source(SOURCE_VIEW, &self.input_file.to_string_lossy())
                .await?;
            let columns = connector.fetch_columns(SOURCE_VIEW).await?;
            Ok(Extracted {
                source: SOURCE_VIEW.to_string(),
                columns,
            })
        }
        .await;

        match &result {
            Ok(_) => info!("Data extracted from {}", self.input_file.display()),
            Err(e) => error!("Error extracting data: {}", e),
        }
        result
    }

    #[instrument(skip(self, extracted), fields(transform = %self.transform))]
    pub fn transform(&self, extracted: &Extracted) -> Result<String, AccessGenError> {
        match self.transform.projection(&extracted.source, &extracted.columns) {
            Ok(sql) => {
                info!("Data transformation completed");
                Ok(sql)
            }
            Err(e) => {
                error!("Error transforming data: {}", e);
                Err(e.into())
            }
        }
    }

    #[instrument(skip(self, connector, projection), fields(table = %self.table))]
    pub async fn load(
        &self,
        connector: &dyn Connector,
        projection: &str,
    ) -> Result<u64, AccessGenError> {
        let result: Result<u64, AccessGenError> = async {
            connector.materialize(&self.table, projection).await?;
            connector
                .query_scalar(&format!("SELECT count(*) FROM {}", quote_ident(&self.table)))
                .await
        }
        .await;

        match &result {
            Ok(rows) => info!(rows, "Data loaded to table {}", self.table),
            Err(e) => error!("Error loading data: {}", e),
        }
        result
    }

    pub async fn run(&self, connector: &dyn Connector) -> Result<EtlReport, AccessGenError> {
        let start = Instant::now();

        let staged: Result<u64, AccessGenError> = async {
            let extracted = self.extract(connector).await?;
            let projection = self.transform(&extracted)?;
            self.load(connector, &projection).await
        }
        .await;

        // La vue de staging pointe sur le CSV : on la retire quel que soit le résultat.
        let cleanup = connector
            .execute(&format!("DROP VIEW IF EXISTS {}", quote_ident(SOURCE_VIEW)))
            .await;
        if let (Err(_), Err(e)) = (&staged, &cleanup) {
            warn!("Could not drop staging view {}: {}", SOURCE_VIEW, e);
        }

        let result = staged.and_then(|rows_loaded| {
            cleanup?;
            Ok(EtlReport {
                table: self.table.clone(),
                rows_loaded,
            })
        });

        match &result {
            Ok(report) => info!(
                engine = connector.engine_name(),
                rows = report.rows_loaded,
                "ETL job completed successfully in {:.2?}",
                start.elapsed()
            ),
            Err(e) => error!("ETL job failed: {}", e),
        }
        result
    }
}
