// accessgen-core/src/application/lookup.rs

use std::path::Path;
use tracing::{info, instrument};

use crate::domain::access::{AccessRecord, LookupOutcome, check_website_access};
use crate::error::AccessGenError;
use crate::infrastructure::access_table::read_access_table;

/// Historical access table loaded once, queried many times.
pub struct AccessLookup {
    table: Vec<AccessRecord>,
}

impl AccessLookup {
    pub fn open(path: &Path) -> Result<Self, AccessGenError> {
        let table = read_access_table(path)?;
        Ok(Self { table })
    }

    pub fn from_records(table: Vec<AccessRecord>) -> Self {
        Self { table }
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    #[instrument(skip(self))]
    pub fn check(&self, query: &str) -> Result<LookupOutcome, AccessGenError> {
        let outcome = check_website_access(&self.table, query)?;
        info!(status = ?outcome.status, rows = outcome.rows.len(), "Lookup completed");
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::access::LookupStatus;
    use anyhow::Result;
    use std::fs;
    use tempfile::tempdir;

    const TABLE: &str = "UserID,Name,Email,Department,ReportingManager,Website,RequestStatus,Reason\n\
USER_001,Mary Smith,mary@example.com,Engineering,John Brown,github.com,Approved,First access granted\n\
USER_002,Kevin Lee,kevin@example.com,Sales,Lisa King,gitlab.com,Rejected,No prior access\n";

    #[test]
    fn test_lookup_from_csv() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("history.csv");
        fs::write(&path, TABLE)?;

        let lookup = AccessLookup::open(&path)?;
        assert_eq!(lookup.len(), 2);

        let outcome = lookup.check("github")?;
        assert_eq!(outcome.status, LookupStatus::Approved(1));
        assert_eq!(outcome.rows.len(), 1);
        assert_eq!(outcome.rows[0].website, "github.com");

        let outcome = lookup.check("salesforce")?;
        assert_eq!(outcome.message, "Cannot approve: No access records found");
        assert!(outcome.rows.is_empty());
        Ok(())
    }

    #[test]
    fn test_empty_table() -> Result<()> {
        let lookup = AccessLookup::from_records(Vec::new());
        assert!(lookup.is_empty());
        assert_eq!(lookup.check("github")?.status, LookupStatus::NoRecords);
        assert!(lookup.check("").is_err());
        Ok(())
    }
}
