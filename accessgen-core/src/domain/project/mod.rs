// accessgen-core/src/domain/project/mod.rs

pub mod configuration;

pub use configuration::{CatalogConfig, GeneratorConfig, ProjectConfig};
