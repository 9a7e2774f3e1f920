//! SQLite-backed budget repository over the `portfolio-budget` document.

use std::sync::Arc;

use async_trait::async_trait;

use divfolio_core::budget::{BudgetRepositoryTrait, PortfolioBudget};
use divfolio_core::constants::BUDGET_STORE_KEY;
use divfolio_core::Result;

use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::IntoCore;
use crate::kv::{delete_document, load_document, replace_document};

pub struct BudgetRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl BudgetRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        BudgetRepository { pool, writer }
    }
}

#[async_trait]
impl BudgetRepositoryTrait for BudgetRepository {
    fn load_budget(&self) -> Result<Option<PortfolioBudget>> {
        let mut conn = get_connection(&self.pool)?;
        load_document::<PortfolioBudget>(&mut conn, BUDGET_STORE_KEY).into_core()
    }

    async fn save_budget(&self, budget: PortfolioBudget) -> Result<PortfolioBudget> {
        self.writer
            .exec(move |conn| {
                replace_document(conn, BUDGET_STORE_KEY, &budget).into_core()?;
                Ok(budget)
            })
            .await
    }

    async fn reset_budget(&self) -> Result<()> {
        self.writer
            .exec(move |conn| delete_document(conn, BUDGET_STORE_KEY).into_core())
            .await
    }
}
