//! Divfolio Core - Domain entities, services, and traits.
//!
//! This crate contains the core business logic for Divfolio: input
//! normalization, the dividend derivation engine, aggregation, and the
//! record-store ports. It is database-agnostic and defines traits that
//! are implemented by the `storage-sqlite` crate.

pub mod budget;
pub mod constants;
pub mod errors;
pub mod holdings;
pub mod reports;
pub mod snapshots;
pub mod utils;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
