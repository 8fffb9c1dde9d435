// accessgen-core/src/domain/error.rs

use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum DomainError {
    #[error("Invalid generation policy: {0}")]
    #[diagnostic(
        code(accessgen::domain::policy),
        help("Probabilities must lie between 0.0 and 1.0.")
    )]
    InvalidPolicy(String),

    #[error("Invalid website catalog: {0}")]
    #[diagnostic(code(accessgen::domain::catalog))]
    InvalidCatalog(String),

    #[error("Unknown department '{0}'")]
    #[diagnostic(code(accessgen::domain::department))]
    UnknownDepartment(String),

    #[error("Unknown request status '{0}'")]
    #[diagnostic(
        code(accessgen::domain::status),
        help("Expected 'Approved' or 'Rejected'.")
    )]
    UnknownStatus(String),

    #[error("Please enter a website")]
    #[diagnostic(code(accessgen::domain::empty_query))]
    EmptyQuery,

    #[error("Invalid SQL identifier '{0}'")]
    #[diagnostic(
        code(accessgen::domain::identifier),
        help("Identifiers must match [A-Za-z_][A-Za-z0-9_]*.")
    )]
    InvalidIdentifier(String),

    #[error("Column '{0}' not found in extracted data")]
    #[diagnostic(code(accessgen::domain::column_not_found))]
    ColumnNotFound(String),

    #[error("Column '{column}' has type {data_type}, which does not support '{transform}'")]
    #[diagnostic(code(accessgen::domain::column_type))]
    IncompatibleColumn {
        column: String,
        data_type: String,
        transform: String,
    },

    #[error("Invalid transform '{0}'")]
    #[diagnostic(
        code(accessgen::domain::transform),
        help("Use 'upper:<column>' or 'add:<column>:<amount>'.")
    )]
    InvalidTransform(String),
}
