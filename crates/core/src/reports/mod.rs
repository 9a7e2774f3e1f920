//! Reports module - aggregation totals and chart projections.

mod reports_model;
mod reports_service;
mod reports_traits;

pub use reports_model::{ChartSlice, PortfolioReport, PortfolioSummary};
pub use reports_service::{chart_slices, sum_column, sum_ratio_percent, summarize, ReportService};
pub use reports_traits::ReportServiceTrait;
