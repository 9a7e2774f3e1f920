//! Budget service: reads the singleton with defaults and normalizes writes.

use std::sync::Arc;

use async_trait::async_trait;
use log::debug;
use rust_decimal::Decimal;

use crate::budget::budget_model::{BudgetUpdate, PortfolioBudget};
use crate::budget::budget_traits::{BudgetRepositoryTrait, BudgetServiceTrait};
use crate::errors::Result;
use crate::holdings::{normalize_amount, normalize_decimal_entry};
use crate::utils::{format_grouped, format_whole, parse_loose};

pub struct BudgetService<T: BudgetRepositoryTrait> {
    budget_repo: Arc<T>,
}

impl<T: BudgetRepositoryTrait> BudgetService<T> {
    pub fn new(budget_repo: Arc<T>) -> Self {
        BudgetService { budget_repo }
    }
}

/// Formats a normalized amount for display, or empty when it did not parse.
fn display_amount(normalized: &str) -> String {
    if normalized.is_empty() {
        String::new()
    } else {
        format_grouped(normalized)
    }
}

#[async_trait]
impl<T: BudgetRepositoryTrait + Send + Sync> BudgetServiceTrait for BudgetService<T> {
    fn get_budget(&self) -> Result<PortfolioBudget> {
        Ok(self.budget_repo.load_budget()?.unwrap_or_default())
    }

    async fn update_budget(&self, update: BudgetUpdate) -> Result<PortfolioBudget> {
        let total_usd = normalize_amount(&update.total_budget_usd);
        let fx = normalize_amount(&update.fx_rate);
        let tax = normalize_decimal_entry(&update.tax_rate);

        let mut budget = PortfolioBudget {
            total_budget_usd: display_amount(&total_usd),
            total_budget_krw: String::new(),
            fx_rate: display_amount(&fx),
            tax_rate: tax,
        };

        // The KRW total always tracks round(totalUsd * fx); a missing or zero
        // side leaves it empty rather than stale.
        let total = parse_loose(&total_usd).filter(|v| *v > Decimal::ZERO);
        let rate = parse_loose(&fx).filter(|v| *v > Decimal::ZERO);
        if let (Some(total), Some(rate)) = (total, rate) {
            budget.total_budget_krw = format_whole(total * rate);
        }

        debug!("Updating portfolio budget");
        self.budget_repo.save_budget(budget).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[derive(Default)]
    struct InMemoryBudgetRepository {
        stored: Mutex<Option<PortfolioBudget>>,
    }

    #[async_trait]
    impl BudgetRepositoryTrait for InMemoryBudgetRepository {
        fn load_budget(&self) -> Result<Option<PortfolioBudget>> {
            Ok(self.stored.lock().unwrap().clone())
        }

        async fn save_budget(&self, budget: PortfolioBudget) -> Result<PortfolioBudget> {
            *self.stored.lock().unwrap() = Some(budget.clone());
            Ok(budget)
        }

        async fn reset_budget(&self) -> Result<()> {
            *self.stored.lock().unwrap() = None;
            Ok(())
        }
    }

    fn service() -> BudgetService<InMemoryBudgetRepository> {
        BudgetService::new(Arc::new(InMemoryBudgetRepository::default()))
    }

    // ==================== Read Tests ====================

    #[test]
    fn test_get_budget_returns_defaults_when_unsaved() {
        let budget = service().get_budget().unwrap();
        assert_eq!(budget, PortfolioBudget::default());
    }

    // ==================== Update Tests ====================

    #[tokio::test]
    async fn test_update_budget_formats_and_derives_krw_total() {
        let service = service();
        let budget = service
            .update_budget(BudgetUpdate {
                total_budget_usd: "8200".to_string(),
                fx_rate: "1,400".to_string(),
                tax_rate: "0.154".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(budget.total_budget_usd, "8,200");
        assert_eq!(budget.total_budget_krw, "11,480,000");
        assert_eq!(budget.fx_rate, "1,400");
        assert_eq!(budget.tax_rate, "0.154");

        // The write is visible on the next read
        assert_eq!(service.get_budget().unwrap(), budget);
    }

    #[tokio::test]
    async fn test_update_budget_keeps_fx_decimals() {
        let budget = service()
            .update_budget(BudgetUpdate {
                total_budget_usd: "10000".to_string(),
                fx_rate: "1385.5".to_string(),
                tax_rate: String::new(),
            })
            .await
            .unwrap();

        assert_eq!(budget.fx_rate, "1,385.5");
        // 10,000 * 1,385.5 = 13,855,000
        assert_eq!(budget.total_budget_krw, "13,855,000");
    }

    #[tokio::test]
    async fn test_update_budget_blanks_krw_when_a_side_is_missing() {
        let service = service();
        for (total, fx) in [("", "1,400"), ("8200", ""), ("0", "1,400"), ("8200", "0")] {
            let budget = service
                .update_budget(BudgetUpdate {
                    total_budget_usd: total.to_string(),
                    fx_rate: fx.to_string(),
                    tax_rate: "0.154".to_string(),
                })
                .await
                .unwrap();
            assert_eq!(budget.total_budget_krw, "", "total={total} fx={fx}");
        }
    }

    #[tokio::test]
    async fn test_update_budget_sanitizes_tax_entry() {
        let budget = service()
            .update_budget(BudgetUpdate {
                total_budget_usd: String::new(),
                fx_rate: String::new(),
                tax_rate: "15.4%".to_string(),
            })
            .await
            .unwrap();
        assert_eq!(budget.tax_rate, "15.4");
    }
}
