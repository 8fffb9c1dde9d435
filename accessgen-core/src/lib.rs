// accessgen-core/src/lib.rs

#![allow(missing_docs)]
// Memory safety
#![deny(unsafe_code)]
// Robustness
#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]
// Performance
#![warn(clippy::perf)]

// --- MODULES HEXAGONAUX ---

// 1. Ports (Interfaces / Traits)
// Contrat du moteur SQL utilisé par l'ETL.
pub mod ports;

// 2. Domain (Cœur du métier)
// Génération, catalogue, compteurs, lookup, transformations ETL.
pub mod domain;

// 3. Infrastructure (Adapters)
// DuckDB, table CSV, faker, fichiers de config.
pub mod infrastructure;

// 4. Application (Use Cases)
// generate_dataset, AccessLookup, EtlPipeline.
pub mod application;

// --- GESTION DES ERREURS GLOBALE ---
pub mod error;

// --- RE-EXPORTS (FACADE) ---
pub use error::AccessGenError;
