//! The conversion engine
//!
//! Pure, stateless f64 arithmetic. A conversion is `value * (from.factor /
//! to.factor)`; no rounding is applied, display rounding belongs to the
//! formatter. Units of different categories never convert.

use crate::{UnitDef, UnitError};

/// Scale factor from `from` to `to`, validating the request.
fn ratio(from: &UnitDef, to: &UnitDef) -> Result<f64, UnitError> {
    if !from.is_compatible(to) {
        return Err(UnitError::CategoryMismatch {
            from: from.symbol,
            to: to.symbol,
            from_category: from.category,
            to_category: to.category,
        });
    }
    if from.factor <= 0.0 {
        return Err(UnitError::InvalidFactor { symbol: from.symbol, factor: from.factor });
    }
    if to.factor <= 0.0 {
        return Err(UnitError::InvalidFactor { symbol: to.symbol, factor: to.factor });
    }
    Ok(from.factor / to.factor)
}

/// Convert a single value from one unit to another.
///
/// Identity conversions are exact: equal factors give a ratio of exactly 1.
pub fn convert(from: &UnitDef, to: &UnitDef, value: f64) -> Result<f64, UnitError> {
    Ok(value * ratio(from, to)?)
}

/// Convert an ordered sequence element-wise.
///
/// The ratio is computed once and broadcast so every element is scaled
/// bit-identically.
pub fn convert_all(from: &UnitDef, to: &UnitDef, values: &[f64]) -> Result<Vec<f64>, UnitError> {
    let r = ratio(from, to)?;
    Ok(values.iter().map(|v| v * r).collect())
}
