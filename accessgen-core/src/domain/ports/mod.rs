// src/domain/ports/mod.rs

pub mod person;

pub use person::PersonSource;
