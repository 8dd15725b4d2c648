//! Name- and index-driven facade over the registry and engine
//!
//! This is the surface an interactive shell drives: categories addressed by
//! name, units by the 1-based position they hold in their category's menu.

use serde::Serialize;
use crate::{convert, convert_all, Category, UnitDef, UnitError, REGISTRY};

/// One row of a unit menu.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UnitListing {
    /// 1-based position in the category's declared order
    pub index: usize,
    pub symbol: &'static str,
    pub name: &'static str,
}

/// Category names in declaration order.
pub fn list_categories() -> Vec<&'static str> {
    REGISTRY.categories().iter().map(Category::name).collect()
}

/// Ordered unit menu for a category.
pub fn list_units(category_name: &str) -> Result<Vec<UnitListing>, UnitError> {
    let category = REGISTRY.category(category_name)?;
    Ok(REGISTRY
        .units(category)
        .iter()
        .enumerate()
        .map(|(i, u)| UnitListing { index: i + 1, symbol: u.symbol, name: u.name })
        .collect())
}

fn select(category_name: &str, from_index: usize, to_index: usize)
    -> Result<(&'static UnitDef, &'static UnitDef), UnitError>
{
    let category = REGISTRY.category(category_name)?;
    let from = REGISTRY.unit_at(category, from_index)?;
    let to = REGISTRY.unit_at(category, to_index)?;
    Ok((from, to))
}

/// Convert a single value, addressing units by menu index.
pub fn convert_value(
    category_name: &str,
    from_index: usize,
    to_index: usize,
    value: f64,
) -> Result<f64, UnitError> {
    let (from, to) = select(category_name, from_index, to_index)?;
    convert(from, to, value)
}

/// Convert an ordered sequence, addressing units by menu index.
pub fn convert_series(
    category_name: &str,
    from_index: usize,
    to_index: usize,
    values: &[f64],
) -> Result<Vec<f64>, UnitError> {
    let (from, to) = select(category_name, from_index, to_index)?;
    convert_all(from, to, values)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_categories() {
        assert_eq!(list_categories(), vec!["Pressure", "VolumeFlowRate", "VolumeRatio"]);
    }

    #[test]
    fn test_list_units_pressure() {
        let listings = list_units("Pressure").unwrap();
        assert_eq!(listings.len(), 8);
        assert_eq!(listings[0], UnitListing { index: 1, symbol: "Pa", name: "pascal" });
        assert_eq!(listings[7].symbol, "psi");
    }

    #[test]
    fn test_list_units_unknown_category() {
        assert!(matches!(list_units("Mass"), Err(UnitError::UnknownCategory(_))));
    }

    #[test]
    fn test_convert_value_by_index() {
        // atm is entry 6, Pa is entry 1
        let result = convert_value("Pressure", 6, 1, 1.0).unwrap();
        assert_eq!(result, 101325.0);
    }

    #[test]
    fn test_convert_series_by_index() {
        // bbl/d is entry 1, mbbl/d is entry 2
        let results = convert_series("VolumeFlowRate", 1, 2, &[1.0, 2.0, 3.0]).unwrap();
        assert!((results[0] - 0.001).abs() < 1e-12);
        assert!((results[2] - 0.003).abs() < 1e-12);
    }

    #[test]
    fn test_convert_value_index_out_of_range() {
        assert_eq!(
            convert_value("Pressure", 1, 9, 1.0),
            Err(UnitError::SelectionOutOfRange { index: 9, count: 8 })
        );
    }
}
