// accessgen-core/src/error.rs

use crate::domain::error::DomainError;
use crate::infrastructure::error::{DatabaseError, InfrastructureError};
use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum AccessGenError {
    // --- ERREURS DU DOMAINE (Policy, Catalog, Lookup, Transform) ---
    #[error(transparent)]
    #[diagnostic(transparent)]
    Domain(#[from] DomainError),

    // --- ERREURS D'INFRASTRUCTURE (IO, DuckDB, YAML) ---
    #[error(transparent)]
    #[diagnostic(transparent)]
    Infrastructure(#[from] InfrastructureError),
}

// Manual implementations to avoid duplicate enum variants but keep ergonomics
impl From<std::io::Error> for AccessGenError {
    fn from(err: std::io::Error) -> Self {
        AccessGenError::Infrastructure(InfrastructureError::Io(err))
    }
}

impl From<duckdb::Error> for AccessGenError {
    fn from(err: duckdb::Error) -> Self {
        AccessGenError::Infrastructure(InfrastructureError::Database(DatabaseError::DuckDB(err)))
    }
}

impl From<DatabaseError> for AccessGenError {
    fn from(err: DatabaseError) -> Self {
        AccessGenError::Infrastructure(InfrastructureError::Database(err))
    }
}
