/// Decimal precision for display
pub const DISPLAY_DECIMAL_PRECISION: u32 = 2;

/// Average days per year, leap-adjusted
pub const DAYS_PER_YEAR: f64 = 365.25;

/// Sentinel symbol for cash movements with no underlying asset
pub const CASH_SYMBOL: &str = "CASH";

/// Sector assigned to assets without an explicit one
pub const DEFAULT_SECTOR: &str = "General";
