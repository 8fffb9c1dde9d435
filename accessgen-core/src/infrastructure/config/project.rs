// accessgen-core/src/infrastructure/config/project.rs

use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, instrument, warn};
use validator::Validate;

use crate::domain::project::configuration::ProjectConfig;
use crate::infrastructure::error::InfrastructureError;

const CANDIDATES: [&str; 3] = [
    "accessgen_project_conf.yaml",
    "accessgen.yaml",
    "accessgen.yml",
];

// --- LOADER ---

/// Loads the project configuration from `project_dir`.
///
/// The file is optional: without one the built-in defaults apply. Environment
/// overrides (`ACCESSGEN_OUTPUT`, `ACCESSGEN_SEED`) are layered on top.
#[instrument(skip(project_dir))]
pub fn load_project_config(project_dir: &Path) -> Result<ProjectConfig, InfrastructureError> {
    let mut config = match find_main_config(project_dir) {
        Some(config_path) => {
            info!(path = ?config_path, "Loading project configuration");
            let content = fs::read_to_string(&config_path)?;
            parse_project_config(&content)?
        }
        None => {
            info!(dir = ?project_dir, "No project configuration found, using defaults");
            ProjectConfig::default()
        }
    };

    apply_env_overrides(&mut config, |key| std::env::var(key).ok())?;

    config
        .validate()
        .map_err(|e| InfrastructureError::ConfigError(e.to_string()))?;

    Ok(config)
}

pub fn parse_project_config(content: &str) -> Result<ProjectConfig, InfrastructureError> {
    let config: ProjectConfig = serde_yaml::from_str(content)?;
    Ok(config)
}

fn find_main_config(root: &Path) -> Option<PathBuf> {
    CANDIDATES
        .iter()
        .map(|filename| root.join(filename))
        .find(|p| p.exists())
}

// Permet de faire: ACCESSGEN_SEED=42 accessgen generate
fn apply_env_overrides<F>(config: &mut ProjectConfig, lookup: F) -> Result<(), InfrastructureError>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(val) = lookup("ACCESSGEN_OUTPUT") {
        info!(old = ?config.output, new = ?val, "Overriding output path via ENV");
        config.output = val;
    }
    if let Some(val) = lookup("ACCESSGEN_SEED") {
        let seed = val.trim().parse::<u64>().map_err(|_| {
            warn!(value = ?val, "Ignoring unparsable ACCESSGEN_SEED");
            InfrastructureError::ConfigError(format!("ACCESSGEN_SEED must be an integer, got '{}'", val))
        })?;
        info!(seed, "Overriding generator seed via ENV");
        config.generator.seed = Some(seed);
    }
    Ok(())
}
