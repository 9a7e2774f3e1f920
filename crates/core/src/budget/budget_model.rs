//! Portfolio budget domain model.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_FX_RATE, DEFAULT_TAX_RATE};
use crate::utils::parse_loose;

/// Portfolio-level configuration: total budget, FX rate, and withholding tax.
///
/// One budget exists per store. All fields are display strings; the KRW total
/// is derived from the USD total and the FX rate on every write and is never
/// set directly. A missing budget behaves as [`PortfolioBudget::default`],
/// which carries the entry form's initial FX and tax values.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioBudget {
    #[serde(default)]
    pub total_budget_usd: String,
    #[serde(default)]
    pub total_budget_krw: String,
    #[serde(default)]
    pub fx_rate: String,
    #[serde(default)]
    pub tax_rate: String,
}

impl Default for PortfolioBudget {
    fn default() -> Self {
        PortfolioBudget {
            total_budget_usd: String::new(),
            total_budget_krw: String::new(),
            fx_rate: DEFAULT_FX_RATE.to_string(),
            tax_rate: DEFAULT_TAX_RATE.to_string(),
        }
    }
}

impl PortfolioBudget {
    /// Parses the USD budget total, `None` when missing or non-numeric.
    pub fn total_budget_usd_decimal(&self) -> Option<Decimal> {
        parse_loose(&self.total_budget_usd)
    }

    /// Parses the KRW-per-USD rate, `None` when missing or non-numeric.
    pub fn fx_rate_decimal(&self) -> Option<Decimal> {
        parse_loose(&self.fx_rate)
    }

    /// Parses the configured tax value as typed (fraction or percentage).
    pub fn tax_rate_decimal(&self) -> Option<Decimal> {
        parse_loose(&self.tax_rate)
    }
}

/// Raw form values for a budget update. The KRW total is absent on purpose:
/// it is recomputed from the USD total and the FX rate at save time.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct BudgetUpdate {
    #[serde(default)]
    pub total_budget_usd: String,
    #[serde(default)]
    pub fx_rate: String,
    #[serde(default)]
    pub tax_rate: String,
}
