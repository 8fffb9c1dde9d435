// accessgen-core/src/domain/access/mod.rs

pub mod catalog;
pub mod counters;
pub mod generator;
pub mod lookup;
pub mod policy;
pub mod record;
pub mod summary;

pub use catalog::{Website, WebsiteCatalog};
pub use counters::{AccessCounters, SiteCounter};
pub use generator::{Generation, StatusDecision, generate, resolve_status, select_website};
pub use lookup::{LookupOutcome, LookupStatus, check_website_access};
pub use policy::GenerationPolicy;
pub use record::{ACCESS_TABLE_COLUMNS, AccessRecord, Department, RequestStatus};
pub use summary::{AccessSummary, SiteSummary};
