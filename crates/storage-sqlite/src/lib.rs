//! SQLite storage implementation for Divfolio.
//!
//! This crate provides all database-related functionality using Diesel ORM
//! with SQLite. It implements the record-store traits defined in
//! `divfolio-core` over a single key-value document table and contains:
//! - Database connection pooling and management
//! - Diesel migrations
//! - The single-writer actor serializing all mutations
//! - Repository implementations for holdings, snapshots, and the budget
//!
//! # Architecture
//!
//! This crate is the only place in the workspace where Diesel dependencies
//! exist. The core crate is database-agnostic and works with traits.
//!
//! ```text
//!        core (domain)
//!              │
//!              ▼
//!     storage-sqlite (this crate)
//!              │
//!              ▼
//!          SQLite DB
//! ```

pub mod db;
pub mod errors;
pub mod kv;
pub mod schema;

// Repository implementations
pub mod budget;
pub mod holdings;
pub mod snapshots;

// Re-export database utilities
pub use db::{
    create_pool, get_connection, get_db_path, init, run_migrations, spawn_writer, DbConnection,
    DbPool, WriteHandle,
};

// Re-export storage errors and conversion helpers
pub use errors::{IntoCore, StorageError};

// Re-export from divfolio-core for convenience
pub use divfolio_core::errors::{DatabaseError, Error, Result};
