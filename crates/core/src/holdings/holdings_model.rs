//! Holdings domain models.

use serde::{Deserialize, Serialize};

/// Domain model representing one saved asset record.
///
/// Every numeric field is a display string exactly as the user sees it.
/// The derived columns are frozen at save time: changing the budget, FX
/// rate, or tax rate later never rewrites records that are already stored.
///
/// The `alias` attributes accept collections written by earlier schema
/// generations; serialization always emits the current field names.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Holding {
    /// Creation timestamp in epoch milliseconds, unique within the store.
    pub id: i64,
    pub ticker: String,
    #[serde(default)]
    pub price: String,
    #[serde(default)]
    pub quantity: String,
    #[serde(default, alias = "monthlyDividend", alias = "dividend")]
    pub monthly_dividend_per_share: String,
    #[serde(default, alias = "investUsd")]
    pub invested_usd: String,
    #[serde(default, alias = "investKrw")]
    pub invested_krw: String,
    #[serde(default, alias = "investRatio", alias = "ratio")]
    pub investment_ratio_percent: String,
    #[serde(default, alias = "monthlyDividendUsdPre", alias = "preDivUsd")]
    pub dividend_usd_pre: String,
    #[serde(default, alias = "monthlyDividendKrwPre", alias = "preDivKrw")]
    pub dividend_krw_pre: String,
    #[serde(default, alias = "monthlyDividendUsdPost", alias = "postDivUsd")]
    pub dividend_usd_post: String,
    #[serde(default, alias = "monthlyDividendKrwPost", alias = "postDivKrw")]
    pub dividend_krw_post: String,
}

/// Input model for creating a new holding from raw form values.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct NewHolding {
    pub ticker: String,
    #[serde(default)]
    pub price: String,
    #[serde(default)]
    pub quantity: String,
    #[serde(default, alias = "monthlyDividend")]
    pub monthly_dividend_per_share: String,
}
