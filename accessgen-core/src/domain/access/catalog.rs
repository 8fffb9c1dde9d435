// accessgen-core/src/domain/access/catalog.rs

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::domain::error::DomainError;

const DEFAULT_WEBSITES: [&str; 15] = [
    "salesforce.com",
    "github.com",
    "atlassian.net",
    "office365.com",
    "google.com",
    "slack.com",
    "amazon.com",
    "azure.microsoft.com",
    "sap.com",
    "oracle.com",
    "workday.com",
    "zendesk.com",
    "restricted-internal.com",
    "confidential-system.net",
    "high-security-portal.org",
];

const DEFAULT_COMPLETELY_REJECTED: [&str; 3] = [
    "restricted-internal.com",
    "confidential-system.net",
    "high-security-portal.org",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Website {
    pub name: String,
    pub completely_rejected: bool,
}

/// Ordered website catalog. Order matters: it breaks ties when the generator
/// looks for the least-approved site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebsiteCatalog {
    sites: Vec<Website>,
}

impl WebsiteCatalog {
    pub fn new<S: AsRef<str>>(
        websites: &[S],
        completely_rejected: &[S],
    ) -> Result<Self, DomainError> {
        if websites.is_empty() {
            return Err(DomainError::InvalidCatalog(
                "catalog must contain at least one website".into(),
            ));
        }

        let mut seen = HashSet::new();
        for site in websites {
            let name = site.as_ref();
            if name.trim().is_empty() {
                return Err(DomainError::InvalidCatalog("empty website name".into()));
            }
            if !seen.insert(name) {
                return Err(DomainError::InvalidCatalog(format!(
                    "duplicate website '{}'",
                    name
                )));
            }
        }

        let rejected: HashSet<&str> = completely_rejected.iter().map(|s| s.as_ref()).collect();
        if let Some(unknown) = rejected.iter().find(|r| !seen.contains(*r)) {
            return Err(DomainError::InvalidCatalog(format!(
                "completely rejected site '{}' is not in the catalog",
                unknown
            )));
        }

        let sites = websites
            .iter()
            .map(|s| Website {
                name: s.as_ref().to_string(),
                completely_rejected: rejected.contains(s.as_ref()),
            })
            .collect();

        Ok(Self { sites })
    }

    pub fn sites(&self) -> &[Website] {
        &self.sites
    }

    pub fn len(&self) -> usize {
        self.sites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sites.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Website> {
        self.sites.get(index)
    }

    pub fn position(&self, name: &str) -> Option<usize> {
        self.sites.iter().position(|s| s.name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    pub fn is_completely_rejected(&self, name: &str) -> bool {
        self.sites
            .iter()
            .any(|s| s.name == name && s.completely_rejected)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.sites.iter().map(|s| s.name.as_str())
    }
}

impl Default for WebsiteCatalog {
    fn default() -> Self {
        let rejected: HashSet<&str> = DEFAULT_COMPLETELY_REJECTED.into_iter().collect();
        Self {
            sites: DEFAULT_WEBSITES
                .iter()
                .map(|name| Website {
                    name: (*name).to_string(),
                    completely_rejected: rejected.contains(name),
                })
                .collect(),
        }
    }
}
