// accessgen-core/src/domain/access/summary.rs

use serde::Serialize;
use std::fmt;

use crate::domain::access::catalog::WebsiteCatalog;
use crate::domain::access::record::{AccessRecord, RequestStatus};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SiteSummary {
    pub website: String,
    pub approved: usize,
    pub rejected: usize,
}

impl fmt::Display for SiteSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: Approved = {}, Rejected = {}",
            self.website, self.approved, self.rejected
        )
    }
}

/// Approved/rejected tallies per catalog site, counted from the table itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AccessSummary {
    pub sites: Vec<SiteSummary>,
}

impl AccessSummary {
    pub fn from_records(catalog: &WebsiteCatalog, records: &[AccessRecord]) -> Self {
        let sites = catalog
            .names()
            .map(|site| {
                let count = |status: RequestStatus| {
                    records
                        .iter()
                        .filter(|r| r.website == site && r.request_status == status)
                        .count()
                };
                SiteSummary {
                    website: site.to_string(),
                    approved: count(RequestStatus::Approved),
                    rejected: count(RequestStatus::Rejected),
                }
            })
            .collect();
        Self { sites }
    }

    pub fn total_approved(&self) -> usize {
        self.sites.iter().map(|s| s.approved).sum()
    }

    pub fn total_rejected(&self) -> usize {
        self.sites.iter().map(|s| s.rejected).sum()
    }
}

impl fmt::Display for AccessSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Website Access Summary:")?;
        for site in &self.sites {
            writeln!(f, "{}", site)?;
        }
        Ok(())
    }
}
