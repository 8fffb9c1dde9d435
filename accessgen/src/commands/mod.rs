// accessgen/src/commands/mod.rs

pub mod etl;
pub mod generate;
pub mod lookup;
