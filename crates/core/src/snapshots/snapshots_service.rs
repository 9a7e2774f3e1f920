//! Snapshot service: save, list, rename, and delete frozen portfolio copies.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{Local, Utc};
use log::debug;

use crate::errors::{Error, Result, ValidationError};
use crate::holdings::HoldingRepositoryTrait;
use crate::reports::summarize;
use crate::snapshots::snapshots_model::{PortfolioSnapshot, SnapshotDetail};
use crate::snapshots::snapshots_traits::{SnapshotRepositoryTrait, SnapshotServiceTrait};

pub struct SnapshotService {
    snapshot_repo: Arc<dyn SnapshotRepositoryTrait>,
    holding_repo: Arc<dyn HoldingRepositoryTrait>,
}

impl SnapshotService {
    pub fn new(
        snapshot_repo: Arc<dyn SnapshotRepositoryTrait>,
        holding_repo: Arc<dyn HoldingRepositoryTrait>,
    ) -> Self {
        SnapshotService {
            snapshot_repo,
            holding_repo,
        }
    }
}

fn validated_name(name: &str) -> Result<String> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::MissingField("name".to_string()).into());
    }
    Ok(trimmed.to_string())
}

#[async_trait]
impl SnapshotServiceTrait for SnapshotService {
    async fn save_snapshot(&self, name: &str) -> Result<PortfolioSnapshot> {
        let name = validated_name(name)?;

        let holdings = self.holding_repo.load_holdings()?;
        if holdings.is_empty() {
            return Err(ValidationError::InvalidInput(
                "There are no holdings to save".to_string(),
            )
            .into());
        }

        let mut snapshots = self.snapshot_repo.load_snapshots()?;

        // Creation-timestamp id, bumped past any same-millisecond neighbor.
        let mut id = Utc::now().timestamp_millis();
        let max_existing = snapshots
            .iter()
            .filter_map(|s| s.id.parse::<i64>().ok())
            .max();
        if let Some(max_id) = max_existing {
            if id <= max_id {
                id = max_id + 1;
            }
        }

        let snapshot = PortfolioSnapshot {
            id: id.to_string(),
            name,
            saved_at: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            data: holdings,
        };

        snapshots.push(snapshot.clone());
        self.snapshot_repo.save_snapshots(snapshots).await?;
        debug!("Saved snapshot {} ({})", snapshot.name, snapshot.id);
        Ok(snapshot)
    }

    fn get_snapshots(&self) -> Result<Vec<PortfolioSnapshot>> {
        self.snapshot_repo.load_snapshots()
    }

    fn get_snapshot(&self, snapshot_id: &str) -> Result<SnapshotDetail> {
        let snapshot = self
            .snapshot_repo
            .load_snapshots()?
            .into_iter()
            .find(|s| s.id == snapshot_id)
            .ok_or_else(|| Error::NotFound(format!("Snapshot {snapshot_id}")))?;
        let summary = summarize(&snapshot.data);
        Ok(SnapshotDetail { snapshot, summary })
    }

    async fn rename_snapshot(&self, snapshot_id: &str, name: &str) -> Result<PortfolioSnapshot> {
        let name = validated_name(name)?;

        let mut snapshots = self.snapshot_repo.load_snapshots()?;
        let snapshot = snapshots
            .iter_mut()
            .find(|s| s.id == snapshot_id)
            .ok_or_else(|| Error::NotFound(format!("Snapshot {snapshot_id}")))?;
        snapshot.name = name;
        let renamed = snapshot.clone();

        self.snapshot_repo.save_snapshots(snapshots).await?;
        Ok(renamed)
    }

    async fn delete_snapshot(&self, snapshot_id: &str) -> Result<()> {
        let mut snapshots = self.snapshot_repo.load_snapshots()?;
        let before = snapshots.len();
        snapshots.retain(|s| s.id != snapshot_id);
        if snapshots.len() == before {
            return Err(Error::NotFound(format!("Snapshot {snapshot_id}")));
        }
        self.snapshot_repo.save_snapshots(snapshots).await?;
        debug!("Deleted snapshot {}", snapshot_id);
        Ok(())
    }
}
