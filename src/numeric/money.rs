// ============================================================================
// Monetary Rounding
// Decimal rounding helpers for API boundaries
// ============================================================================

use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::{Decimal, RoundingStrategy};

/// Round a monetary amount to whole cents.
///
/// Internal arithmetic stays in f64; this is intended for values leaving the
/// library toward a display or ledger. Midpoints round away from zero, the
/// convention of every calculator page this library backs.
///
/// Non-finite values are returned unchanged.
pub fn round_to_cents(value: f64) -> f64 {
    match Decimal::from_f64(value) {
        Some(d) => d
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
            .to_f64()
            .unwrap_or(value),
        None => value,
    }
}

/// Format a monetary amount with exactly two fractional digits.
pub fn cents_display(value: f64) -> String {
    format!("{:.2}", round_to_cents(value))
}
