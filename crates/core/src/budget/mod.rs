//! Budget module - the portfolio-level configuration singleton.

mod budget_model;
mod budget_service;
mod budget_traits;

pub use budget_model::{BudgetUpdate, PortfolioBudget};
pub use budget_service::BudgetService;
pub use budget_traits::{BudgetRepositoryTrait, BudgetServiceTrait};
