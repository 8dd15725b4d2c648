//! Unit and category representations

use std::fmt;
use serde::Serialize;

/// A family of mutually convertible measurement units sharing one base unit.
///
/// The category tag on every [`UnitDef`] is what makes cross-category
/// conversion detectable: units only ever convert within their own category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Category {
    Pressure,
    VolumeFlowRate,
    VolumeRatio,
}

impl Category {
    /// Human-facing category name, used for menus and lookup.
    pub fn name(&self) -> &'static str {
        match self {
            Category::Pressure => "Pressure",
            Category::VolumeFlowRate => "VolumeFlowRate",
            Category::VolumeRatio => "VolumeRatio",
        }
    }

    /// Symbol of the category's base unit (the unit with factor 1).
    pub fn base_symbol(&self) -> &'static str {
        match self {
            Category::Pressure => "Pa",
            Category::VolumeFlowRate => "bbl/d",
            Category::VolumeRatio => "m\u{b3}/m\u{b3}",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A measurement unit with its conversion factor.
///
/// `factor` is the multiplicative ratio of this unit to the category base
/// unit: 1 of this unit equals `factor` base units. Exactly one unit per
/// category has factor 1 by convention. Factors are strictly positive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct UnitDef {
    /// Display symbol (e.g., "Pa", "bbl/d")
    pub symbol: &'static str,
    /// Full unit name (e.g., "pascal", "barrel per day")
    pub name: &'static str,
    /// Ratio of this unit to the category base unit
    pub factor: f64,
    /// The category this unit belongs to
    pub category: Category,
}

impl UnitDef {
    pub const fn new(symbol: &'static str, name: &'static str, factor: f64, category: Category) -> Self {
        UnitDef { symbol, name, factor, category }
    }

    /// Whether this is the category base unit (factor 1).
    pub fn is_base(&self) -> bool {
        self.factor == 1.0
    }

    /// Whether a conversion to `other` is defined.
    pub fn is_compatible(&self, other: &UnitDef) -> bool {
        self.category == other.category
    }
}

impl fmt::Display for UnitDef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pascal() -> UnitDef {
        UnitDef::new("Pa", "pascal", 1.0, Category::Pressure)
    }

    fn bar() -> UnitDef {
        UnitDef::new("bar", "bar", 100000.0, Category::Pressure)
    }

    fn barrel_per_day() -> UnitDef {
        UnitDef::new("bbl/d", "barrel per day", 1.0, Category::VolumeFlowRate)
    }

    #[test]
    fn test_base_unit() {
        assert!(pascal().is_base());
        assert!(!bar().is_base());
    }

    #[test]
    fn test_compatible_units() {
        assert!(pascal().is_compatible(&bar()));
        assert!(!pascal().is_compatible(&barrel_per_day()));
    }

    #[test]
    fn test_category_names() {
        assert_eq!(Category::Pressure.name(), "Pressure");
        assert_eq!(Category::VolumeFlowRate.base_symbol(), "bbl/d");
        assert_eq!(format!("{}", Category::VolumeRatio), "VolumeRatio");
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", bar()), "bar");
    }
}
