use crate::budget::budget_model::{BudgetUpdate, PortfolioBudget};
use crate::errors::Result;
use async_trait::async_trait;

/// Trait for budget repository operations
#[async_trait]
pub trait BudgetRepositoryTrait: Send + Sync {
    /// Returns the stored budget, or `None` when nothing has been saved yet.
    fn load_budget(&self) -> Result<Option<PortfolioBudget>>;
    async fn save_budget(&self, budget: PortfolioBudget) -> Result<PortfolioBudget>;
    /// Deletes the stored budget so reads fall back to the defaults.
    async fn reset_budget(&self) -> Result<()>;
}

/// Trait for budget service operations
#[async_trait]
pub trait BudgetServiceTrait: Send + Sync {
    fn get_budget(&self) -> Result<PortfolioBudget>;
    async fn update_budget(&self, update: BudgetUpdate) -> Result<PortfolioBudget>;
}
