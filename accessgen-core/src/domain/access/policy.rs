// accessgen-core/src/domain/access/policy.rs

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::error::DomainError;

/// Tuning knobs of the generator. Defaults reproduce the historical
/// distribution (70% least-approved reuse, 70/30 first-access draw,
/// auto-approval once a site holds more than one approval).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Validate)]
pub struct GenerationPolicy {
    #[validate(range(min = 0.0, max = 1.0))]
    #[serde(default = "default_reuse_probability")]
    pub reuse_probability: f64,

    #[validate(range(min = 0.0, max = 1.0))]
    #[serde(default = "default_approval_weight")]
    pub approval_weight: f64,

    #[serde(default = "default_auto_approve_after")]
    pub auto_approve_after: u64,
}

fn default_reuse_probability() -> f64 {
    0.7
}

fn default_approval_weight() -> f64 {
    0.7
}

fn default_auto_approve_after() -> u64 {
    1
}

impl Default for GenerationPolicy {
    fn default() -> Self {
        Self {
            reuse_probability: default_reuse_probability(),
            approval_weight: default_approval_weight(),
            auto_approve_after: default_auto_approve_after(),
        }
    }
}

impl GenerationPolicy {
    pub fn check(&self) -> Result<(), DomainError> {
        self.validate()
            .map_err(|e| DomainError::InvalidPolicy(e.to_string()))
    }
}
