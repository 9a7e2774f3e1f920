//! Pure derivation of display columns from raw holding inputs.
//!
//! Every function here is deterministic and side-effect free. The universal
//! policy is "no error, just blank": a missing, zero, or unparsable input
//! leaves the affected derived fields as empty strings. The chain mirrors
//! the entry form: invested KRW builds on the already-rounded invested USD,
//! and both post-tax dividends build on the already-rounded pre-tax USD
//! dividend.

use rust_decimal::Decimal;

use crate::budget::PortfolioBudget;
use crate::utils::{format_cents, format_whole, parse_loose, round_whole};

/// Derived display columns for one holding.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DerivedColumns {
    pub invested_usd: String,
    pub invested_krw: String,
    pub investment_ratio_percent: String,
    pub dividend_usd_pre: String,
    pub dividend_krw_pre: String,
    pub dividend_usd_post: String,
    pub dividend_krw_post: String,
}

/// Normalizes a configured tax value: anything above 1 was entered as a
/// percentage and becomes a fraction, so both `0.154` and `15.4` mean 15.4%.
pub fn tax_fraction(rate: Decimal) -> Decimal {
    if rate > Decimal::ONE {
        rate / Decimal::ONE_HUNDRED
    } else {
        rate
    }
}

/// Parses a stored display string into a positive amount.
/// Zero and negative values count as missing, per the blank-not-error policy.
fn positive_amount(raw: &str) -> Option<Decimal> {
    parse_loose(raw).filter(|v| *v > Decimal::ZERO)
}

/// Reads the budget's configured tax rate as a usable withholding fraction.
/// The division by 100 happens once; a result still outside [0, 1] is
/// unusable and yields `None`, which blanks the post-tax fields.
fn usable_tax_fraction(budget: &PortfolioBudget) -> Option<Decimal> {
    let fraction = tax_fraction(budget.tax_rate_decimal()?);
    (fraction >= Decimal::ZERO && fraction <= Decimal::ONE).then_some(fraction)
}

/// Computes all derived display columns for one record against the current
/// budget. Save-time callers freeze the result into the stored record.
pub fn derive_columns(
    price: &str,
    quantity: &str,
    monthly_dividend_per_share: &str,
    budget: &PortfolioBudget,
) -> DerivedColumns {
    let mut columns = DerivedColumns::default();

    let price = positive_amount(price);
    let quantity = positive_amount(quantity);
    let fx = positive_amount(&budget.fx_rate);
    let total_budget_usd = positive_amount(&budget.total_budget_usd);

    // Invested capital and portfolio weight
    if let (Some(price), Some(quantity)) = (price, quantity) {
        let invested_usd = round_whole(price * quantity);
        columns.invested_usd = format_whole(invested_usd);
        if let Some(fx) = fx {
            columns.invested_krw = format_whole(invested_usd * fx);
        }
        if let Some(total) = total_budget_usd {
            let ratio = round_whole(invested_usd / total * Decimal::ONE_HUNDRED);
            columns.investment_ratio_percent = format!("{}%", ratio);
        }
    }

    // Monthly dividend projections
    if let (Some(per_share), Some(quantity)) =
        (positive_amount(monthly_dividend_per_share), quantity)
    {
        let pre_usd = crate::utils::round_cents(per_share * quantity);
        columns.dividend_usd_pre = format_cents(pre_usd);
        if let Some(fx) = fx {
            columns.dividend_krw_pre = format_cents(pre_usd * fx);
        }
        if let Some(tax) = usable_tax_fraction(budget) {
            let retained = Decimal::ONE - tax;
            columns.dividend_usd_post = format_cents(pre_usd * retained);
            if let Some(fx) = fx {
                columns.dividend_krw_post = format_cents(pre_usd * fx * retained);
            }
        }
    }

    columns
}
