//! SQLite-backed snapshot repository over the `portfolio-files` document.

use std::sync::Arc;

use async_trait::async_trait;
use log::debug;

use divfolio_core::constants::SNAPSHOTS_STORE_KEY;
use divfolio_core::snapshots::{PortfolioSnapshot, SnapshotRepositoryTrait};
use divfolio_core::Result;

use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::IntoCore;
use crate::kv::{load_document, replace_document};

pub struct SnapshotRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl SnapshotRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        SnapshotRepository { pool, writer }
    }
}

#[async_trait]
impl SnapshotRepositoryTrait for SnapshotRepository {
    fn load_snapshots(&self) -> Result<Vec<PortfolioSnapshot>> {
        let mut conn = get_connection(&self.pool)?;
        let snapshots = load_document::<Vec<PortfolioSnapshot>>(&mut conn, SNAPSHOTS_STORE_KEY)
            .into_core()?
            .unwrap_or_default();
        Ok(snapshots)
    }

    async fn save_snapshots(&self, snapshots: Vec<PortfolioSnapshot>) -> Result<()> {
        debug!("Persisting {} snapshots", snapshots.len());
        self.writer
            .exec(move |conn| replace_document(conn, SNAPSHOTS_STORE_KEY, &snapshots).into_core())
            .await
    }
}
