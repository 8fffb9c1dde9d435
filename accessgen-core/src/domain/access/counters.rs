// accessgen-core/src/domain/access/counters.rs

use serde::Serialize;

use crate::domain::access::catalog::WebsiteCatalog;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SiteCounter {
    pub website: String,
    pub approved: u64,
    pub rejected: u64,
}

/// Per-website approved/rejected tallies for one generation run.
/// Indexed like the catalog it was built from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AccessCounters {
    sites: Vec<SiteCounter>,
}

impl AccessCounters {
    pub fn new(catalog: &WebsiteCatalog) -> Self {
        Self {
            sites: catalog
                .names()
                .map(|name| SiteCounter {
                    website: name.to_string(),
                    approved: 0,
                    rejected: 0,
                })
                .collect(),
        }
    }

    /// Index of the site with the fewest approvals. First minimum wins.
    pub fn least_approved(&self) -> Option<usize> {
        let mut best: Option<(usize, u64)> = None;
        for (idx, site) in self.sites.iter().enumerate() {
            match best {
                Some((_, count)) if site.approved >= count => {}
                _ => best = Some((idx, site.approved)),
            }
        }
        best.map(|(idx, _)| idx)
    }

    pub fn approved_at(&self, index: usize) -> u64 {
        self.sites.get(index).map_or(0, |s| s.approved)
    }

    pub fn record_approval(&mut self, index: usize) {
        if let Some(site) = self.sites.get_mut(index) {
            site.approved += 1;
        }
    }

    pub fn record_rejection(&mut self, index: usize) {
        if let Some(site) = self.sites.get_mut(index) {
            site.rejected += 1;
        }
    }

    pub fn approved(&self, website: &str) -> u64 {
        self.find(website).map_or(0, |s| s.approved)
    }

    pub fn rejected(&self, website: &str) -> u64 {
        self.find(website).map_or(0, |s| s.rejected)
    }

    pub fn iter(&self) -> impl Iterator<Item = &SiteCounter> {
        self.sites.iter()
    }

    fn find(&self, website: &str) -> Option<&SiteCounter> {
        self.sites.iter().find(|s| s.website == website)
    }
}
