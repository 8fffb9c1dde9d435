// accessgen-core/src/application/mod.rs

pub mod etl;
pub mod generate;
pub mod lookup;

// --- RE-EXPORTS (FACADE PATTERN) ---
// Le CLI peut faire `use accessgen_core::application::{generate_dataset, AccessLookup, EtlPipeline};`

pub use etl::{EtlPipeline, EtlReport, Extracted};
pub use generate::{GenerationReport, generate_dataset};
pub use lookup::AccessLookup;
