// accessgen-core/src/ports/connector.rs

// What the ETL needs from a SQL engine, without knowing which engine it is.

use crate::error::AccessGenError;
use async_trait::async_trait;

// Struct simple pour décrire une colonne (indépendant de la DB)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnSchema {
    pub name: String,
    pub data_type: String,
    pub is_nullable: bool,
}

#[async_trait]
pub trait Connector: Send + Sync {
    async fn execute(&self, query: &str) -> Result<(), AccessGenError>;

    async fn fetch_columns(&self, table_name: &str) -> Result<Vec<ColumnSchema>, AccessGenError>;

    /// Exposes a CSV file as a queryable relation named `name`.
    async fn register_source(&self, name: &str, path: &str) -> Result<(), AccessGenError>;

    /// Replaces `table_name` with the result of `sql`.
    async fn materialize(&self, table_name: &str, sql: &str) -> Result<(), AccessGenError>;

    async fn query_scalar(&self, query: &str) -> Result<u64, AccessGenError>;

    fn engine_name(&self) -> &str;
}
