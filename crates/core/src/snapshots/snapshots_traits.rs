use crate::errors::Result;
use crate::snapshots::snapshots_model::{PortfolioSnapshot, SnapshotDetail};
use async_trait::async_trait;

/// Trait for snapshot repository operations. Like holdings, the snapshot
/// collection is one ordered document replaced whole on every write.
#[async_trait]
pub trait SnapshotRepositoryTrait: Send + Sync {
    fn load_snapshots(&self) -> Result<Vec<PortfolioSnapshot>>;
    async fn save_snapshots(&self, snapshots: Vec<PortfolioSnapshot>) -> Result<()>;
}

/// Trait for snapshot service operations
#[async_trait]
pub trait SnapshotServiceTrait: Send + Sync {
    async fn save_snapshot(&self, name: &str) -> Result<PortfolioSnapshot>;
    fn get_snapshots(&self) -> Result<Vec<PortfolioSnapshot>>;
    fn get_snapshot(&self, snapshot_id: &str) -> Result<SnapshotDetail>;
    async fn rename_snapshot(&self, snapshot_id: &str, name: &str) -> Result<PortfolioSnapshot>;
    async fn delete_snapshot(&self, snapshot_id: &str) -> Result<()>;
}
