//! Money calculation utilities using rust_decimal for precision
//!
//! All arithmetic happens on `Decimal`; values are converted back to `f64`
//! (rounded to 2 decimal places) only for storage and serialization.

use std::str::FromStr;

use rust_decimal::prelude::*;

/// Monetary values are kept at 2 decimal places, half away from zero
const DECIMAL_PLACES: u32 = 2;

/// Convert an f64 into a Decimal.
///
/// Goes through the shortest decimal representation of the float, so a
/// written price like `9.995` keeps its exact midpoint instead of the
/// binary approximation `9.99499999...`.
#[inline]
pub fn to_decimal(value: f64) -> Decimal {
    if !value.is_finite() {
        tracing::error!(value = ?value, "Non-finite f64 in monetary calculation, defaulting to zero");
        return Decimal::ZERO;
    }
    Decimal::from_str(&value.to_string())
        .ok()
        .or_else(|| Decimal::from_f64(value))
        .unwrap_or(Decimal::ZERO)
}

/// Convert Decimal back to f64, rounded to 2 decimal places
#[inline]
pub fn to_f64(value: Decimal) -> f64 {
    value
        .round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
        .to_f64()
        .unwrap_or_default()
}

/// Round a price to 2 decimal places, half away from zero
pub fn round_price(value: f64) -> f64 {
    to_f64(to_decimal(value))
}

/// Sum optional amounts; a missing amount counts as zero
pub fn sum_amounts<I>(amounts: I) -> f64
where
    I: IntoIterator<Item = Option<f64>>,
{
    let total: Decimal = amounts
        .into_iter()
        .map(|a| a.map(to_decimal).unwrap_or(Decimal::ZERO))
        .sum();
    to_f64(total)
}

#[cfg(test)]
mod tests;
