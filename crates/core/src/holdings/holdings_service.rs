//! Holding service: list, create, delete, and reset over the record store.
//!
//! Creation is the freeze point: the raw form fields are normalized, the
//! derived columns are computed against the budget in force right now, and
//! the finished record is appended and persisted. Nothing recomputes stored
//! records afterwards.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use log::{debug, info};

use crate::budget::BudgetRepositoryTrait;
use crate::errors::{Error, Result, ValidationError};
use crate::holdings::holdings_calculator::derive_columns;
use crate::holdings::holdings_input::{
    normalize_amount, normalize_decimal_entry, normalize_ticker,
};
use crate::holdings::holdings_model::{Holding, NewHolding};
use crate::holdings::holdings_traits::{HoldingRepositoryTrait, HoldingServiceTrait};

pub struct HoldingService {
    holding_repo: Arc<dyn HoldingRepositoryTrait>,
    budget_repo: Arc<dyn BudgetRepositoryTrait>,
}

impl HoldingService {
    pub fn new(
        holding_repo: Arc<dyn HoldingRepositoryTrait>,
        budget_repo: Arc<dyn BudgetRepositoryTrait>,
    ) -> Self {
        HoldingService {
            holding_repo,
            budget_repo,
        }
    }
}

#[async_trait]
impl HoldingServiceTrait for HoldingService {
    fn get_holdings(&self) -> Result<Vec<Holding>> {
        self.holding_repo.load_holdings()
    }

    async fn create_holding(&self, new_holding: NewHolding) -> Result<Holding> {
        let ticker = normalize_ticker(&new_holding.ticker)?;
        if ticker.is_empty() {
            return Err(ValidationError::MissingField("ticker".to_string()).into());
        }

        let price = normalize_amount(&new_holding.price);
        let quantity = normalize_amount(&new_holding.quantity);
        let dividend = normalize_decimal_entry(&new_holding.monthly_dividend_per_share);

        let budget = self.budget_repo.load_budget()?.unwrap_or_default();
        let columns = derive_columns(&price, &quantity, &dividend, &budget);

        let mut holdings = self.holding_repo.load_holdings()?;

        // Creation-timestamp id; a same-millisecond collision takes the next
        // free integer so delete-by-id stays exact.
        let mut id = Utc::now().timestamp_millis();
        if let Some(max_id) = holdings.iter().map(|h| h.id).max() {
            if id <= max_id {
                id = max_id + 1;
            }
        }

        let holding = Holding {
            id,
            ticker,
            price,
            quantity,
            monthly_dividend_per_share: dividend,
            invested_usd: columns.invested_usd,
            invested_krw: columns.invested_krw,
            investment_ratio_percent: columns.investment_ratio_percent,
            dividend_usd_pre: columns.dividend_usd_pre,
            dividend_krw_pre: columns.dividend_krw_pre,
            dividend_usd_post: columns.dividend_usd_post,
            dividend_krw_post: columns.dividend_krw_post,
        };

        holdings.push(holding.clone());
        self.holding_repo.save_holdings(holdings).await?;
        debug!("Saved holding {} ({})", holding.ticker, holding.id);
        Ok(holding)
    }

    async fn delete_holding(&self, holding_id: i64) -> Result<()> {
        let mut holdings = self.holding_repo.load_holdings()?;
        let before = holdings.len();
        holdings.retain(|h| h.id != holding_id);
        if holdings.len() == before {
            return Err(Error::NotFound(format!("Holding {holding_id}")));
        }
        self.holding_repo.save_holdings(holdings).await?;
        debug!("Deleted holding {}", holding_id);
        Ok(())
    }

    async fn reset_portfolio(&self) -> Result<()> {
        info!("Resetting portfolio records and budget");
        self.holding_repo.clear_holdings().await?;
        self.budget_repo.reset_budget().await
    }
}
