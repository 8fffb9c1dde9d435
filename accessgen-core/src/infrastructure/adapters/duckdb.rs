// accessgen-core/src/infrastructure/adapters/duckdb.rs

use async_trait::async_trait;
use duckdb::{Config, Connection};
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::debug;

// Imports Hexagonaux
use crate::domain::etl::{quote_ident, quote_literal, validate_identifier};
use crate::error::AccessGenError;
use crate::infrastructure::error::{DatabaseError, InfrastructureError};
use crate::ports::connector::{ColumnSchema, Connector};

pub struct DuckDBConnector {
    conn: Arc<Mutex<Connection>>,
}

impl DuckDBConnector {
    pub fn new(db_path: &str) -> Result<Self, InfrastructureError> {
        let config = Config::default();

        let conn = if db_path == ":memory:" {
            Connection::open_in_memory_with_flags(config)?
        } else {
            Connection::open_with_flags(db_path, config)?
        };

        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    fn lock(&self) -> Result<MutexGuard<'_, Connection>, DatabaseError> {
        self.conn.lock().map_err(|_| DatabaseError::Poisoned)
    }
}

#[async_trait]
impl Connector for DuckDBConnector {
    async fn execute(&self, query: &str) -> Result<(), AccessGenError> {
        debug!(query, "duckdb execute");
        let conn = self.lock()?;
        conn.execute_batch(query)?;
        Ok(())
    }

    async fn fetch_columns(&self, table_name: &str) -> Result<Vec<ColumnSchema>, AccessGenError> {
        let table_name = validate_identifier(table_name)?;
        let conn = self.lock()?;

        let mut stmt = conn.prepare(&format!(
            "PRAGMA table_info({})",
            quote_literal(table_name)
        ))?;

        let rows = stmt.query_map([], |row| {
            Ok(ColumnSchema {
                name: row.get("name")?,
                data_type: row.get("type")?,
                is_nullable: !row.get::<_, bool>("notnull")?,
            })
        })?;

        let mut columns = Vec::new();
        for row in rows {
            columns.push(row?);
        }

        Ok(columns)
    }

    async fn register_source(&self, name: &str, path: &str) -> Result<(), AccessGenError> {
        let name = validate_identifier(name)?;
        let query = format!(
            "CREATE OR REPLACE VIEW {} AS SELECT * FROM read_csv_auto({})",
            quote_ident(name),
            quote_literal(path)
        );
        self.execute(&query).await
    }

    async fn materialize(&self, table_name: &str, sql: &str) -> Result<(), AccessGenError> {
        let table_name = validate_identifier(table_name)?;
        let query = format!("CREATE OR REPLACE TABLE {} AS {}", quote_ident(table_name), sql);
        self.execute(&query).await
    }

    async fn query_scalar(&self, query: &str) -> Result<u64, AccessGenError> {
        let conn = self.lock()?;
        let mut stmt = conn.prepare(query)?;
        let mut rows = stmt.query([])?;

        let row = rows
            .next()?
            .ok_or_else(|| DatabaseError::EmptyResult(query.to_string()))?;

        let value: u64 = row.get(0)?;
        Ok(value)
    }

    fn engine_name(&self) -> &str {
        "duckdb"
    }
}
