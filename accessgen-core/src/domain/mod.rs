pub mod access;
pub mod error;
pub mod etl;
pub mod ports;
pub mod project;

// Re-exports pratiques pour simplifier les imports ailleurs
pub use error::DomainError;
