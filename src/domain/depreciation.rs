//! Fixed-percentage price depreciation, applied when a vehicle is registered.

use crate::domain::condition::{Condition, InvalidCondition};

/// Discounted price for a vehicle offered in the given condition.
///
/// The factor is a single multiplicative discount, applied once:
/// `price - price * factor`. An unrecognized label leaves the price untouched
/// and reports the error to the caller.
pub fn adjusted_price(condition: &str, price: f64) -> Result<f64, InvalidCondition> {
    let condition: Condition = condition.parse()?;
    Ok(apply(condition, price))
}

/// Apply the depreciation factor for `condition` to `price`.
pub fn apply(condition: Condition, price: f64) -> f64 {
    price - price * condition.depreciation_factor()
}
