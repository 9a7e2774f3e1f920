use crate::errors::Result;
use crate::reports::reports_model::{ChartSlice, PortfolioReport};

/// Trait for report service operations. Reports are read-only, so every
/// operation is a synchronous pooled read.
pub trait ReportServiceTrait: Send + Sync {
    fn get_summary(&self) -> Result<PortfolioReport>;
    fn get_allocation_chart(&self) -> Result<Vec<ChartSlice>>;
    fn get_dividend_chart(&self) -> Result<Vec<ChartSlice>>;
}
