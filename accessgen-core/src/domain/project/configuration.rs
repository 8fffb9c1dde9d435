// src/domain/project/configuration.rs

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::access::{GenerationPolicy, WebsiteCatalog};
use crate::domain::error::DomainError;

#[derive(Debug, Deserialize, Serialize, Clone, Validate)]
pub struct ProjectConfig {
    #[serde(default = "default_name")]
    pub name: String,

    /// Where the generated access table is written.
    #[serde(default = "default_output")]
    pub output: String,

    #[validate(nested)]
    #[serde(default)]
    pub generator: GeneratorConfig,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catalog: Option<CatalogConfig>,
}

#[derive(Debug, Deserialize, Serialize, Clone, Validate)]
pub struct GeneratorConfig {
    #[serde(default = "default_rows")]
    pub rows: usize,

    /// Unset means a fresh entropy seed on every run.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,

    #[validate(nested)]
    #[serde(flatten)]
    pub policy: GenerationPolicy,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct CatalogConfig {
    pub websites: Vec<String>,
    #[serde(default)]
    pub completely_rejected: Vec<String>,
}

impl CatalogConfig {
    pub fn build(&self) -> Result<WebsiteCatalog, DomainError> {
        WebsiteCatalog::new(&self.websites, &self.completely_rejected)
    }
}

impl ProjectConfig {
    pub fn website_catalog(&self) -> Result<WebsiteCatalog, DomainError> {
        match &self.catalog {
            Some(catalog) => catalog.build(),
            None => Ok(WebsiteCatalog::default()),
        }
    }
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            output: default_output(),
            generator: GeneratorConfig::default(),
            catalog: None,
        }
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            rows: default_rows(),
            seed: None,
            policy: GenerationPolicy::default(),
        }
    }
}

fn default_name() -> String {
    "accessgen".to_string()
}
fn default_output() -> String {
    "user_access_historical_data.csv".to_string()
}
fn default_rows() -> usize {
    100
}
