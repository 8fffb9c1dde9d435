// accessgen-core/src/domain/access/lookup.rs

use serde::Serialize;

use crate::domain::access::record::AccessRecord;
use crate::domain::error::DomainError;

pub const NO_RECORDS_MESSAGE: &str = "Cannot approve: No access records found";
pub const NO_APPROVED_MESSAGE: &str = "Cannot approve: No approved access found";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "count", rename_all = "snake_case")]
pub enum LookupStatus {
    NoRecords,
    NoApproved,
    Approved(usize),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LookupOutcome {
    pub status: LookupStatus,
    pub message: String,
    pub rows: Vec<AccessRecord>,
}

impl LookupOutcome {
    pub fn can_approve(&self) -> bool {
        matches!(self.status, LookupStatus::Approved(_))
    }
}

/// Filters `table` by case-insensitive substring match on the website and
/// keeps the approved rows.
///
/// Empty results are outcomes, not errors. When nothing is approved the
/// unfiltered matches are returned so the caller can show who was refused.
pub fn check_website_access(
    table: &[AccessRecord],
    query: &str,
) -> Result<LookupOutcome, DomainError> {
    let query = query.trim();
    if query.is_empty() {
        return Err(DomainError::EmptyQuery);
    }

    let needle = query.to_lowercase();
    let matches: Vec<&AccessRecord> = table
        .iter()
        .filter(|r| r.website.to_lowercase().contains(&needle))
        .collect();

    if matches.is_empty() {
        return Ok(LookupOutcome {
            status: LookupStatus::NoRecords,
            message: NO_RECORDS_MESSAGE.to_string(),
            rows: Vec::new(),
        });
    }

    let approved: Vec<AccessRecord> = matches
        .iter()
        .filter(|r| r.is_approved())
        .map(|r| (*r).clone())
        .collect();

    if approved.is_empty() {
        return Ok(LookupOutcome {
            status: LookupStatus::NoApproved,
            message: NO_APPROVED_MESSAGE.to_string(),
            rows: matches.into_iter().cloned().collect(),
        });
    }

    Ok(LookupOutcome {
        status: LookupStatus::Approved(approved.len()),
        message: format!(
            "We can approve: {} user(s) have access to {}",
            approved.len(),
            query
        ),
        rows: approved,
    })
}
