//! SQLite-backed holding repository over the `portfolio-items` document.

use std::sync::Arc;

use async_trait::async_trait;
use log::debug;

use divfolio_core::constants::HOLDINGS_STORE_KEY;
use divfolio_core::holdings::{Holding, HoldingRepositoryTrait};
use divfolio_core::Result;

use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::IntoCore;
use crate::kv::{delete_document, load_document, replace_document};

pub struct HoldingRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl HoldingRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        HoldingRepository { pool, writer }
    }
}

#[async_trait]
impl HoldingRepositoryTrait for HoldingRepository {
    fn load_holdings(&self) -> Result<Vec<Holding>> {
        let mut conn = get_connection(&self.pool)?;
        let holdings = load_document::<Vec<Holding>>(&mut conn, HOLDINGS_STORE_KEY)
            .into_core()?
            .unwrap_or_default();
        Ok(holdings)
    }

    async fn save_holdings(&self, holdings: Vec<Holding>) -> Result<()> {
        debug!("Persisting {} holdings", holdings.len());
        self.writer
            .exec(move |conn| replace_document(conn, HOLDINGS_STORE_KEY, &holdings).into_core())
            .await
    }

    async fn clear_holdings(&self) -> Result<()> {
        self.writer
            .exec(move |conn| delete_document(conn, HOLDINGS_STORE_KEY).into_core())
            .await
    }
}
