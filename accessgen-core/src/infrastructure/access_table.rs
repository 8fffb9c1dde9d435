// accessgen-core/src/infrastructure/access_table.rs
//
// CSV persistence of the historical access table, routed through an
// in-memory DuckDB connection (appender in, COPY out, read_csv in).

use duckdb::{Connection, params};
use std::path::Path;
use std::str::FromStr;
use tracing::{info, instrument};

use crate::domain::access::{ACCESS_TABLE_COLUMNS, AccessRecord, Department, RequestStatus};
use crate::domain::etl::quote_literal;
use crate::error::AccessGenError;
use crate::infrastructure::error::InfrastructureError;
use crate::infrastructure::fs::atomic_write_with;

const STAGING_TABLE: &str = "access_records";

#[instrument(skip(records), fields(rows = records.len()))]
pub fn write_access_table(path: &Path, records: &[AccessRecord]) -> Result<(), InfrastructureError> {
    let conn = Connection::open_in_memory()?;

    let columns = ACCESS_TABLE_COLUMNS
        .iter()
        .map(|c| format!("\"{}\" VARCHAR", c))
        .collect::<Vec<_>>()
        .join(", ");
    conn.execute_batch(&format!("CREATE TABLE {} ({})", STAGING_TABLE, columns))?;

    {
        let mut appender = conn.appender(STAGING_TABLE)?;
        for r in records {
            appender.append_row(params![
                r.user_id,
                r.name,
                r.email,
                r.department.as_str(),
                r.reporting_manager,
                r.website,
                r.request_status.as_str(),
                r.reason,
            ])?;
        }
        appender.flush()?;
    }

    atomic_write_with(path, |tmp| {
        conn.execute_batch(&format!(
            "COPY {} TO {} (FORMAT CSV, HEADER, DELIMITER ',')",
            STAGING_TABLE,
            quote_literal(&tmp.to_string_lossy())
        ))?;
        Ok(())
    })?;

    info!(path = ?path, "Access table written");
    Ok(())
}

/// Reads a historical access table. Every column is read as text and then
/// parsed into the domain types.
#[instrument]
pub fn read_access_table(path: &Path) -> Result<Vec<AccessRecord>, AccessGenError> {
    if !path.exists() {
        return Err(InfrastructureError::FileNotFound(path.display().to_string()).into());
    }

    let conn = Connection::open_in_memory()?;
    let select = ACCESS_TABLE_COLUMNS
        .iter()
        .map(|c| format!("\"{}\"", c))
        .collect::<Vec<_>>()
        .join(", ");
    let query = format!(
        "SELECT {} FROM read_csv({}, header = true, all_varchar = true)",
        select,
        quote_literal(&path.to_string_lossy())
    );

    let mut stmt = conn.prepare(&query).map_err(|e| malformed(path, e.to_string()))?;
    let rows = stmt
        .query_map([], |row| {
            let mut fields: Vec<String> = Vec::with_capacity(ACCESS_TABLE_COLUMNS.len());
            for i in 0..ACCESS_TABLE_COLUMNS.len() {
                fields.push(row.get::<_, Option<String>>(i)?.unwrap_or_default());
            }
            Ok(fields)
        })
        .map_err(|e| malformed(path, e.to_string()))?;

    let mut records = Vec::new();
    for row in rows {
        let f = row?;
        records.push(AccessRecord {
            user_id: f[0].clone(),
            name: f[1].clone(),
            email: f[2].clone(),
            department: Department::from_str(&f[3])?,
            reporting_manager: f[4].clone(),
            website: f[5].clone(),
            request_status: RequestStatus::from_str(&f[6])?,
            reason: f[7].clone(),
        });
    }

    info!(rows = records.len(), "Access table loaded");
    Ok(records)
}

fn malformed(path: &Path, message: String) -> InfrastructureError {
    InfrastructureError::MalformedTable {
        path: path.display().to_string(),
        message,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use anyhow::Result;
    use std::fs;
    use tempfile::tempdir;

    fn sample() -> Vec<AccessRecord> {
        vec![
            AccessRecord {
                user_id: "USER_001".into(),
                name: "Mary Smith".into(),
                email: "mary.smith07@example.com".into(),
                department: Department::HumanResources,
                reporting_manager: "John Brown".into(),
                website: "github.com".into(),
                request_status: RequestStatus::Approved,
                reason: "First access granted".into(),
            },
            AccessRecord {
                user_id: "USER_002".into(),
                name: "O'Neil, Pat".into(),
                email: "pat@example.org".into(),
                department: Department::It,
                reporting_manager: "Lisa Lee".into(),
                website: "restricted-internal.com".into(),
                request_status: RequestStatus::Rejected,
                reason: "Access to restricted-internal.com is strictly prohibited".into(),
            },
        ]
    }

    #[test]
    fn test_written_file_has_expected_header() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("access.csv");
        write_access_table(&path, &sample())?;

        let content = fs::read_to_string(&path)?;
        let header = content.lines().next().unwrap_or_default();
        assert_eq!(
            header,
            "UserID,Name,Email,Department,ReportingManager,Website,RequestStatus,Reason"
        );
        assert_eq!(content.lines().count(), 3);
        Ok(())
    }

    #[test]
    fn test_quoted_fields_survive_reload() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("access.csv");
        let records = sample();
        write_access_table(&path, &records)?;

        let loaded = read_access_table(&path)?;
        assert_eq!(loaded, records);
        Ok(())
    }

    #[test]
    fn test_empty_table_still_writes_header() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("empty.csv");
        write_access_table(&path, &[])?;
        let content = fs::read_to_string(&path)?;
        assert!(content.starts_with("UserID,Name,Email"));
        Ok(())
    }

    #[test]
    fn test_missing_file_is_reported() {
        let result = read_access_table(Path::new("/definitely/not/here.csv"));
        assert!(matches!(
            result,
            Err(AccessGenError::Infrastructure(InfrastructureError::FileNotFound(_)))
        ));
    }

    #[test]
    fn test_unknown_status_is_a_domain_error() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("bad.csv");
        fs::write(
            &path,
            "UserID,Name,Email,Department,ReportingManager,Website,RequestStatus,Reason\n\
             USER_001,A,a@example.com,Sales,B,github.com,Maybe,x\n",
        )?;
        assert!(matches!(
            read_access_table(&path),
            Err(AccessGenError::Domain(_))
        ));
        Ok(())
    }
}
