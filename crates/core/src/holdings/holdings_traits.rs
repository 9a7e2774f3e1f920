use crate::errors::Result;
use crate::holdings::holdings_model::{Holding, NewHolding};
use async_trait::async_trait;

/// Trait for holding repository operations.
///
/// The store keeps the whole collection as one ordered document: reads return
/// it in insertion order (absent key means empty), and writes replace it in
/// full, matching the record-store contract of the entry form.
#[async_trait]
pub trait HoldingRepositoryTrait: Send + Sync {
    fn load_holdings(&self) -> Result<Vec<Holding>>;
    async fn save_holdings(&self, holdings: Vec<Holding>) -> Result<()>;
    async fn clear_holdings(&self) -> Result<()>;
}

/// Trait for holding service operations
#[async_trait]
pub trait HoldingServiceTrait: Send + Sync {
    fn get_holdings(&self) -> Result<Vec<Holding>>;
    async fn create_holding(&self, new_holding: NewHolding) -> Result<Holding>;
    async fn delete_holding(&self, holding_id: i64) -> Result<()>;
    async fn reset_portfolio(&self) -> Result<()>;
}
