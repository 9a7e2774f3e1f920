//! Snapshots module - named frozen copies of the holdings list.

mod snapshots_model;
mod snapshots_service;
mod snapshots_traits;

pub use snapshots_model::{PortfolioSnapshot, SnapshotDetail};
pub use snapshots_service::SnapshotService;
pub use snapshots_traits::{SnapshotRepositoryTrait, SnapshotServiceTrait};
