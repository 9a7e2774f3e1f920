//! Column aggregation and chart projections over stored holdings.
//!
//! Stored records carry formatted display strings, so every fold parses
//! loosely and treats an unparsable value as zero.

use std::sync::Arc;

use rust_decimal::Decimal;

use crate::budget::BudgetRepositoryTrait;
use crate::errors::Result;
use crate::holdings::{Holding, HoldingRepositoryTrait};
use crate::reports::reports_model::{ChartSlice, PortfolioReport, PortfolioSummary};
use crate::reports::reports_traits::ReportServiceTrait;
use crate::utils::{format_cents, format_grouped, format_percent, format_whole, parse_loose};

/// Folds one derived column across all records. Unparsable values count as
/// zero; an empty collection sums to zero.
pub fn sum_column<F>(holdings: &[Holding], field: F) -> Decimal
where
    F: Fn(&Holding) -> &str,
{
    holdings
        .iter()
        .map(|h| parse_loose(field(h)).unwrap_or(Decimal::ZERO))
        .fold(Decimal::ZERO, |acc, v| acc + v)
}

/// Total of the ratio column with a trailing `%`. A zero total renders as
/// empty, so a collection with no usable ratio values blanks the cell
/// instead of showing `0%`.
pub fn sum_ratio_percent(holdings: &[Holding]) -> String {
    let total = sum_column(holdings, |h: &Holding| h.investment_ratio_percent.as_str());
    if total.is_zero() {
        return String::new();
    }
    format_percent(total)
}

/// Projects records onto chart slices for one column. Records without a
/// ticker or without a parsable value for the column are dropped; duplicate
/// tickers are kept as separate slices.
pub fn chart_slices<F>(holdings: &[Holding], field: F) -> Vec<ChartSlice>
where
    F: Fn(&Holding) -> &str,
{
    holdings
        .iter()
        .filter(|h| !h.ticker.is_empty())
        .filter_map(|h| {
            parse_loose(field(h)).map(|value| ChartSlice {
                label: h.ticker.clone(),
                value,
            })
        })
        .collect()
}

/// Computes the formatted totals row for a set of records.
pub fn summarize(holdings: &[Holding]) -> PortfolioSummary {
    let quantity_total = sum_column(holdings, |h: &Holding| h.quantity.as_str());
    PortfolioSummary {
        // Quantities may be fractional, so group without rounding
        quantity: format_grouped(&quantity_total.normalize().to_string()),
        invested_usd: format_whole(sum_column(holdings, |h: &Holding| h.invested_usd.as_str())),
        invested_krw: format_whole(sum_column(holdings, |h: &Holding| h.invested_krw.as_str())),
        investment_ratio_percent: sum_ratio_percent(holdings),
        dividend_usd_pre: format_cents(sum_column(holdings, |h: &Holding| {
            h.dividend_usd_pre.as_str()
        })),
        dividend_krw_pre: format_cents(sum_column(holdings, |h: &Holding| {
            h.dividend_krw_pre.as_str()
        })),
        dividend_usd_post: format_cents(sum_column(holdings, |h: &Holding| {
            h.dividend_usd_post.as_str()
        })),
        dividend_krw_post: format_cents(sum_column(holdings, |h: &Holding| {
            h.dividend_krw_post.as_str()
        })),
    }
}

pub struct ReportService {
    holding_repo: Arc<dyn HoldingRepositoryTrait>,
    budget_repo: Arc<dyn BudgetRepositoryTrait>,
}

impl ReportService {
    pub fn new(
        holding_repo: Arc<dyn HoldingRepositoryTrait>,
        budget_repo: Arc<dyn BudgetRepositoryTrait>,
    ) -> Self {
        ReportService {
            holding_repo,
            budget_repo,
        }
    }
}

impl ReportServiceTrait for ReportService {
    fn get_summary(&self) -> Result<PortfolioReport> {
        let holdings = self.holding_repo.load_holdings()?;
        let budget = self.budget_repo.load_budget()?.unwrap_or_default();

        let mut remaining_budget_usd = String::new();
        let mut remaining_budget_krw = String::new();
        if let Some(total) = budget
            .total_budget_usd_decimal()
            .filter(|v| *v > Decimal::ZERO)
        {
            let invested = sum_column(&holdings, |h: &Holding| h.invested_usd.as_str());
            remaining_budget_usd = format_whole(total - invested);
            if let Some(fx) = budget.fx_rate_decimal().filter(|v| *v > Decimal::ZERO) {
                let invested_krw = sum_column(&holdings, |h: &Holding| h.invested_krw.as_str());
                remaining_budget_krw = format_whole(total * fx - invested_krw);
            }
        }

        Ok(PortfolioReport {
            summary: summarize(&holdings),
            remaining_budget_usd,
            remaining_budget_krw,
        })
    }

    fn get_allocation_chart(&self) -> Result<Vec<ChartSlice>> {
        let holdings = self.holding_repo.load_holdings()?;
        Ok(chart_slices(&holdings, |h: &Holding| {
            h.investment_ratio_percent.as_str()
        }))
    }

    fn get_dividend_chart(&self) -> Result<Vec<ChartSlice>> {
        let holdings = self.holding_repo.load_holdings()?;
        Ok(chart_slices(&holdings, |h: &Holding| {
            h.dividend_krw_post.as_str()
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn holding(ticker: &str, invested_usd: &str, ratio: &str, post_krw: &str) -> Holding {
        Holding {
            id: 1,
            ticker: ticker.to_string(),
            price: String::new(),
            quantity: String::new(),
            monthly_dividend_per_share: String::new(),
            invested_usd: invested_usd.to_string(),
            invested_krw: String::new(),
            investment_ratio_percent: ratio.to_string(),
            dividend_usd_pre: String::new(),
            dividend_krw_pre: String::new(),
            dividend_usd_post: String::new(),
            dividend_krw_post: post_krw.to_string(),
        }
    }

    // ==================== Sum Tests ====================

    #[test]
    fn test_sum_column_empty_collection_is_zero() {
        assert_eq!(
            sum_column(&[], |h: &Holding| h.invested_usd.as_str()),
            Decimal::ZERO
        );
    }

    #[test]
    fn test_sum_column_parses_decorated_values() {
        let holdings = vec![
            holding("A", "$1,000", "", ""),
            holding("B", "$2,000", "", ""),
        ];
        assert_eq!(
            sum_column(&holdings, |h: &Holding| h.invested_usd.as_str()),
            dec!(3000)
        );
    }

    #[test]
    fn test_sum_column_treats_unparsable_as_zero() {
        let holdings = vec![
            holding("A", "1,500", "", ""),
            holding("B", "", "", ""),
            holding("C", "n/a", "", ""),
        ];
        assert_eq!(
            sum_column(&holdings, |h: &Holding| h.invested_usd.as_str()),
            dec!(1500)
        );
    }

    #[test]
    fn test_sum_ratio_percent_formats_total() {
        let holdings = vec![holding("A", "", "18%", ""), holding("B", "", "13%", "")];
        assert_eq!(sum_ratio_percent(&holdings), "31%");
        assert_eq!(sum_ratio_percent(&[]), "");
    }

    #[test]
    fn test_sum_ratio_percent_blank_when_total_is_zero() {
        // Records exist but carry no usable ratio: the cell stays blank
        // rather than showing "0%".
        let holdings = vec![holding("A", "1,500", "", ""), holding("B", "", "0%", "")];
        assert_eq!(sum_ratio_percent(&holdings), "");
    }

    // ==================== Chart Tests ====================

    #[test]
    fn test_chart_slices_drop_incomplete_records() {
        let holdings = vec![
            holding("SCHD", "", "", "5,922.00"),
            holding("", "", "", "1,000.00"),
            holding("O", "", "", ""),
        ];
        let slices = chart_slices(&holdings, |h: &Holding| h.dividend_krw_post.as_str());
        assert_eq!(
            slices,
            vec![ChartSlice {
                label: "SCHD".to_string(),
                value: dec!(5922.00)
            }]
        );
    }

    #[test]
    fn test_chart_slices_keep_duplicate_tickers_separate() {
        let holdings = vec![holding("SCHD", "", "10%", ""), holding("SCHD", "", "8%", "")];
        let slices = chart_slices(&holdings, |h: &Holding| {
            h.investment_ratio_percent.as_str()
        });
        assert_eq!(slices.len(), 2);
        assert_eq!(slices[0].value, dec!(10));
        assert_eq!(slices[1].value, dec!(8));
    }

    // ==================== Summary Tests ====================

    #[test]
    fn test_summarize_empty_collection() {
        let summary = summarize(&[]);
        assert_eq!(summary.quantity, "0");
        assert_eq!(summary.invested_usd, "0");
        assert_eq!(summary.dividend_krw_post, "0.00");
        assert_eq!(summary.investment_ratio_percent, "");
    }

    // ==================== Report Service Tests ====================

    use crate::budget::PortfolioBudget;
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct FixedHoldingRepository(Vec<Holding>);

    #[async_trait]
    impl HoldingRepositoryTrait for FixedHoldingRepository {
        fn load_holdings(&self) -> Result<Vec<Holding>> {
            Ok(self.0.clone())
        }
        async fn save_holdings(&self, _holdings: Vec<Holding>) -> Result<()> {
            Ok(())
        }
        async fn clear_holdings(&self) -> Result<()> {
            Ok(())
        }
    }

    struct FixedBudgetRepository(Mutex<Option<PortfolioBudget>>);

    #[async_trait]
    impl BudgetRepositoryTrait for FixedBudgetRepository {
        fn load_budget(&self) -> Result<Option<PortfolioBudget>> {
            Ok(self.0.lock().unwrap().clone())
        }
        async fn save_budget(&self, budget: PortfolioBudget) -> Result<PortfolioBudget> {
            Ok(budget)
        }
        async fn reset_budget(&self) -> Result<()> {
            Ok(())
        }
    }

    fn report_service(holdings: Vec<Holding>, budget: Option<PortfolioBudget>) -> ReportService {
        ReportService::new(
            Arc::new(FixedHoldingRepository(holdings)),
            Arc::new(FixedBudgetRepository(Mutex::new(budget))),
        )
    }

    #[test]
    fn test_get_summary_reports_remaining_budget() {
        let mut record = holding("SCHD", "1,500", "18%", "");
        record.invested_krw = "2,100,000".to_string();
        let budget = PortfolioBudget {
            total_budget_usd: "8,200".to_string(),
            total_budget_krw: "11,480,000".to_string(),
            fx_rate: "1,400".to_string(),
            tax_rate: "0.154".to_string(),
        };

        let report = report_service(vec![record], Some(budget)).get_summary().unwrap();
        assert_eq!(report.remaining_budget_usd, "6,700");
        // 8,200 * 1,400 - 2,100,000 = 9,380,000
        assert_eq!(report.remaining_budget_krw, "9,380,000");
    }

    #[test]
    fn test_get_summary_blanks_remainder_without_budget() {
        let report = report_service(vec![holding("SCHD", "1,500", "", "")], None)
            .get_summary()
            .unwrap();
        assert_eq!(report.remaining_budget_usd, "");
        assert_eq!(report.remaining_budget_krw, "");
        assert_eq!(report.summary.invested_usd, "1,500");
    }

    #[test]
    fn test_summarize_totals_all_columns() {
        let mut first = holding("SCHD", "1,500", "18%", "5,922.00");
        first.quantity = "1,000".to_string();
        first.invested_krw = "2,100,000".to_string();
        first.dividend_usd_pre = "5.00".to_string();
        first.dividend_krw_pre = "7,000.00".to_string();
        first.dividend_usd_post = "4.23".to_string();
        let mut second = holding("O", "1,100", "13%", "6,158.88");
        second.quantity = "20.5".to_string();
        second.invested_krw = "1,540,000".to_string();
        second.dividend_usd_pre = "5.20".to_string();
        second.dividend_krw_pre = "7,280.00".to_string();
        second.dividend_usd_post = "4.40".to_string();

        let summary = summarize(&[first, second]);
        assert_eq!(summary.quantity, "1,020.5");
        assert_eq!(summary.invested_usd, "2,600");
        assert_eq!(summary.invested_krw, "3,640,000");
        assert_eq!(summary.investment_ratio_percent, "31%");
        assert_eq!(summary.dividend_usd_pre, "10.20");
        assert_eq!(summary.dividend_krw_pre, "14,280.00");
        assert_eq!(summary.dividend_usd_post, "8.63");
        assert_eq!(summary.dividend_krw_post, "12,080.88");
    }
}
