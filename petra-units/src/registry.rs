//! Unit definitions organized by category
//!
//! Tables are process-wide constants, built once and never mutated, so the
//! registry can be read concurrently without synchronization. Declaration
//! order is stable across runs; the CLI layer numbers its menus from it.

use std::sync::LazyLock;
use crate::{Category, UnitDef, UnitError};

/// Global unit registry
pub static REGISTRY: LazyLock<UnitRegistry> = LazyLock::new(UnitRegistry::new);

const PRESSURE_UNITS: [UnitDef; 8] = [
    UnitDef::new("Pa", "pascal", 1.0, Category::Pressure),
    UnitDef::new("hPa", "hectopascal", 100.0, Category::Pressure),
    UnitDef::new("kPa", "kilopascal", 1000.0, Category::Pressure),
    UnitDef::new("MPa", "megapascal", 1_000_000.0, Category::Pressure),
    UnitDef::new("at", "technical atmosphere", 98066.5, Category::Pressure),
    UnitDef::new("atm", "standard atmosphere", 101325.0, Category::Pressure),
    UnitDef::new("bar", "bar", 100000.0, Category::Pressure),
    UnitDef::new("psi", "pound-force per square inch", 6894.76, Category::Pressure),
];

const VOLUME_FLOW_RATE_UNITS: [UnitDef; 12] = [
    UnitDef::new("bbl/d", "barrel per day", 1.0, Category::VolumeFlowRate),
    UnitDef::new("mbbl/d", "thousand barrels per day", 1000.0, Category::VolumeFlowRate),
    UnitDef::new("mmbbl/d", "million barrels per day", 1_000_000.0, Category::VolumeFlowRate),
    UnitDef::new("bbl/y", "barrel per year", 0.00273791, Category::VolumeFlowRate),
    UnitDef::new("mbbl/y", "thousand barrels per year", 2.73791, Category::VolumeFlowRate),
    UnitDef::new("mmbbl/y", "million barrels per year", 2737.91, Category::VolumeFlowRate),
    UnitDef::new("m\u{b3}/d", "cubic meter per day", 6.28981, Category::VolumeFlowRate),
    UnitDef::new("E3m\u{b3}/d", "thousand cubic meters per day", 6289.81, Category::VolumeFlowRate),
    UnitDef::new("E6m\u{b3}/d", "million cubic meters per day", 6_289_810.77, Category::VolumeFlowRate),
    UnitDef::new("scf/d", "standard cubic feet per day", 0.1781, Category::VolumeFlowRate),
    UnitDef::new("mscf/d", "thousand standard cubic feet per day", 178.1, Category::VolumeFlowRate),
    UnitDef::new("mmscf/d", "million standard cubic feet per day", 178107.6, Category::VolumeFlowRate),
];

const VOLUME_RATIO_UNITS: [UnitDef; 6] = [
    UnitDef::new("m\u{b3}/m\u{b3}", "cubic meter per cubic meter", 1.0, Category::VolumeRatio),
    UnitDef::new("sm\u{b3}/sm\u{b3}", "standard cubic meter per standard cubic meter", 1.0, Category::VolumeRatio),
    UnitDef::new("scf/stb", "standard cubic foot per stock tank barrel", 0.17810760667903525, Category::VolumeRatio),
    UnitDef::new("mscf/stb", "thousand standard cubic feet per stock tank barrel", 178.10760667903526, Category::VolumeRatio),
    UnitDef::new("stb/scf", "stock tank barrel per standard cubic foot", 5.614583333333334, Category::VolumeRatio),
    UnitDef::new("stb/mscf", "stock tank barrel per thousand standard cubic feet", 0.005614583333333333, Category::VolumeRatio),
];

/// Read-only registry of all known units, grouped by category in
/// declaration order.
pub struct UnitRegistry {
    categories: Vec<(Category, &'static [UnitDef])>,
}

impl UnitRegistry {
    pub fn new() -> Self {
        UnitRegistry {
            categories: vec![
                (Category::Pressure, &PRESSURE_UNITS),
                (Category::VolumeFlowRate, &VOLUME_FLOW_RATE_UNITS),
                (Category::VolumeRatio, &VOLUME_RATIO_UNITS),
            ],
        }
    }

    /// All categories in declaration order.
    pub fn categories(&self) -> Vec<Category> {
        self.categories.iter().map(|(c, _)| *c).collect()
    }

    /// Ordered units of a category.
    pub fn units(&self, category: Category) -> &'static [UnitDef] {
        self.categories
            .iter()
            .find(|(c, _)| *c == category)
            .map(|(_, units)| *units)
            .unwrap_or(&[])
    }

    /// Look up a category by name (case-insensitive).
    pub fn category(&self, name: &str) -> Result<Category, UnitError> {
        self.categories
            .iter()
            .map(|(c, _)| *c)
            .find(|c| c.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| UnitError::UnknownCategory(name.to_string()))
    }

    /// Look up a unit by its 1-based menu index within a category.
    pub fn unit_at(&self, category: Category, index: usize) -> Result<&'static UnitDef, UnitError> {
        let units = self.units(category);
        if index < 1 || index > units.len() {
            return Err(UnitError::SelectionOutOfRange { index, count: units.len() });
        }
        Ok(&units[index - 1])
    }

    /// Look up a unit by symbol within a category (case-insensitive).
    pub fn find(&self, category: Category, symbol: &str) -> Option<&'static UnitDef> {
        self.units(category)
            .iter()
            .find(|u| u.symbol.eq_ignore_ascii_case(symbol))
    }
}

impl Default for UnitRegistry {
    fn default() -> Self {
        Self::new()
    }
}
