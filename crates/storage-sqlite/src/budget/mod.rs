mod repository;

pub use repository::BudgetRepository;
