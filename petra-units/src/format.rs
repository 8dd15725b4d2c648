//! Rendering conversion results as display lines
//!
//! Pure string building; the caller owns the actual printing.

use crate::UnitDef;

/// Render one conversion as `"<value> <from> = <result> <to>"`.
pub fn format_result(from: &UnitDef, to: &UnitDef, value: f64, result: f64) -> String {
    format!("{} {} = {} {}", value, from.symbol, result, to.symbol)
}

/// Render a converted sequence, one line per element, pairing inputs with
/// outputs in order. Lengths must match; the engine guarantees this.
pub fn format_series(from: &UnitDef, to: &UnitDef, values: &[f64], results: &[f64]) -> Vec<String> {
    debug_assert_eq!(values.len(), results.len());
    values
        .iter()
        .zip(results)
        .map(|(v, r)| format_result(from, to, *v, *r))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Category, REGISTRY};

    fn pressure(symbol: &str) -> &'static UnitDef {
        REGISTRY.find(Category::Pressure, symbol).unwrap()
    }

    #[test]
    fn test_format_scalar() {
        let line = format_result(pressure("atm"), pressure("Pa"), 1.0, 101325.0);
        assert_eq!(line, "1 atm = 101325 Pa");
    }

    #[test]
    fn test_format_series() {
        let from = pressure("bar");
        let to = pressure("kPa");
        let lines = format_series(from, to, &[1.0, 2.0], &[100.0, 200.0]);
        assert_eq!(lines, vec!["1 bar = 100 kPa", "2 bar = 200 kPa"]);
    }

    #[test]
    fn test_format_empty_series() {
        let lines = format_series(pressure("Pa"), pressure("kPa"), &[], &[]);
        assert!(lines.is_empty());
    }
}
