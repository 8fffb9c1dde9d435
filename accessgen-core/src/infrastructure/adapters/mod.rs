pub mod duckdb;
pub mod faker;

pub use self::duckdb::DuckDBConnector;
pub use faker::FakePersonSource;
