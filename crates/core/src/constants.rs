/// Store key for the live asset record collection
pub const HOLDINGS_STORE_KEY: &str = "portfolio-items";

/// Store key for the named snapshot collection
pub const SNAPSHOTS_STORE_KEY: &str = "portfolio-files";

/// Store key for the portfolio budget singleton
pub const BUDGET_STORE_KEY: &str = "portfolio-budget";

/// Default KRW-per-USD exchange rate applied when no budget has been saved
pub const DEFAULT_FX_RATE: &str = "1,400";

/// Default dividend withholding tax rate (15.4%)
pub const DEFAULT_TAX_RATE: &str = "0.154";
