//! Shared primitive types used across the desk.

/// Loan term in whole days.
pub type Days = i64;

/// Row identifier assigned by the history store.
pub type RecordId = i64;

/// Decimal places used when displaying money amounts.
pub const AMOUNT_DECIMALS: usize = 2;

/// Decimal places used when displaying the total interest rate.
pub const TOTAL_RATE_DECIMALS: usize = 2;

/// Decimal places used when displaying the daily interest rate.
pub const DAILY_RATE_DECIMALS: usize = 4;
