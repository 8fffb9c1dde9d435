// accessgen-core/src/domain/etl/mod.rs

pub mod identifier;
pub mod transform;

pub use identifier::{quote_ident, quote_literal, validate_identifier};
pub use transform::Transform;
