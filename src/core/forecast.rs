//! Linear single-period projection

use crate::error::{ForecastError, ForecastResult};
use crate::types::ForecastInput;

/// Decimal places kept in the projected value
pub const FORECAST_DIGITS: usize = 2;

/// Project next-period revenue: `current_revenue * (1 + growth_rate)`, rounded
/// to two decimal places.
///
/// Inputs are not bounds-checked. Negative revenue and negative or extreme
/// growth rates are computed as given.
///
/// ```
/// use royalbit_predict::core::compute_forecast;
///
/// assert_eq!(compute_forecast(1000.0, 0.05).unwrap(), 1050.0);
/// ```
pub fn compute_forecast(current_revenue: f64, growth_rate: f64) -> ForecastResult<f64> {
    let projected = current_revenue * (1.0 + growth_rate);
    if !projected.is_finite() {
        return Err(ForecastError::Unexpected(format!(
            "forecast is not a finite number (current_revenue={current_revenue}, growth_rate={growth_rate})"
        )));
    }
    round_to(projected, FORECAST_DIGITS)
}

/// Same as [`compute_forecast`] for an already parsed input pair.
pub fn forecast(input: &ForecastInput) -> ForecastResult<f64> {
    compute_forecast(input.current_revenue, input.growth_rate)
}

/// Round to `digits` decimal places.
///
/// Rounds the exact binary value with ties to even, so `2.675` (stored just
/// below the tie) becomes `2.67`. Going through the decimal rendering keeps
/// large magnitudes exact where scaling by `10^digits` would overflow.
pub fn round_to(value: f64, digits: usize) -> ForecastResult<f64> {
    format!("{value:.digits$}")
        .parse::<f64>()
        .map_err(|e| ForecastError::Unexpected(format!("Cannot round {value}: {e}")))
}
