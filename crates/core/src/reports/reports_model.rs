//! Aggregation and chart models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One chart slice: a record's ticker with its parsed numeric value.
///
/// Duplicate tickers stay separate slices; each stored record is its own
/// entry in the projection.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ChartSlice {
    pub label: String,
    pub value: Decimal,
}

/// Formatted totals row of the status table: the quantity column plus the
/// seven derived columns.
///
/// Computable for the live holdings or for any snapshot's frozen data.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioSummary {
    pub quantity: String,
    pub invested_usd: String,
    pub invested_krw: String,
    pub investment_ratio_percent: String,
    pub dividend_usd_pre: String,
    pub dividend_krw_pre: String,
    pub dividend_usd_post: String,
    pub dividend_krw_post: String,
}

/// The live-portfolio report: column totals plus the budget remainder.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioReport {
    pub summary: PortfolioSummary,
    /// `totalBudgetUsd - Σ investedUsd`, empty when no budget total is set.
    pub remaining_budget_usd: String,
    /// `totalBudgetUsd × fx - Σ investedKrw`, empty without a total or rate.
    pub remaining_budget_krw: String,
}
