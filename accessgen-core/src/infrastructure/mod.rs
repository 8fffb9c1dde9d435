// accessgen-core/src/infrastructure/mod.rs

pub mod access_table;
pub mod adapters;
pub mod config;
pub mod error;
pub mod fs;
