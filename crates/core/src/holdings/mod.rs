//! Holdings module - asset records, input normalization, and derivation.

mod holdings_calculator;
mod holdings_input;
mod holdings_model;
mod holdings_service;
mod holdings_traits;

pub use holdings_calculator::{derive_columns, tax_fraction, DerivedColumns};
pub use holdings_input::{
    normalize_amount, normalize_decimal_entry, normalize_ticker, LATIN_TICKER_GUIDANCE,
};
pub use holdings_model::{Holding, NewHolding};
pub use holdings_service::HoldingService;
pub use holdings_traits::{HoldingRepositoryTrait, HoldingServiceTrait};
