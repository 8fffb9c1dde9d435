// accessgen-core/src/infrastructure/error.rs

use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum DatabaseError {
    #[error("DuckDB Engine Error: {0}")]
    #[diagnostic(
        code(accessgen::infra::database::duckdb),
        help("An error occurred inside the SQL engine.")
    )]
    DuckDB(#[from] duckdb::Error),

    #[error("Database connection mutex poisoned")]
    #[diagnostic(code(accessgen::infra::database::poisoned))]
    Poisoned,

    #[error("Query returned no rows: {0}")]
    #[diagnostic(code(accessgen::infra::database::empty_result))]
    EmptyResult(String),
}

#[derive(Error, Debug, Diagnostic)]
pub enum InfrastructureError {
    // --- DATABASE (Abstracted) ---
    #[error(transparent)]
    #[diagnostic(transparent)]
    Database(#[from] DatabaseError),

    // --- FILESYSTEM (IO) ---
    #[error("File System Error: {0}")]
    #[diagnostic(
        code(accessgen::infra::io),
        help("Check file permissions or path validity.")
    )]
    Io(#[from] std::io::Error),

    #[error("File not found: '{0}'")]
    #[diagnostic(code(accessgen::infra::file_not_found))]
    FileNotFound(String),

    // --- CONFIG / YAML ---
    #[error("YAML Parsing Error: {0}")]
    #[diagnostic(
        code(accessgen::infra::yaml),
        help("Check your YAML syntax (indentation, types).")
    )]
    YamlError(#[from] serde_yaml::Error),

    #[error("Configuration Error: {0}")]
    #[diagnostic(code(accessgen::infra::config))]
    ConfigError(String),

    // --- ACCESS TABLE ---
    #[error("Malformed access table '{path}': {message}")]
    #[diagnostic(
        code(accessgen::infra::access_table),
        help("Expected header: UserID,Name,Email,Department,ReportingManager,Website,RequestStatus,Reason")
    )]
    MalformedTable { path: String, message: String },
}

// Manual implementation for shortcuts (e.g. `?` operator on duckdb calls)
impl From<duckdb::Error> for InfrastructureError {
    fn from(err: duckdb::Error) -> Self {
        InfrastructureError::Database(DatabaseError::DuckDB(err))
    }
}
