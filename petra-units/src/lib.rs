//! Petra Units - Oilfield Unit Registry and Conversion
//!
//! Provides a fixed registry of measurement categories with scalar
//! conversion between units of the same category.
//!
//! Categories:
//! - Pressure (Pa, hPa, kPa, MPa, at, atm, bar, psi)
//! - Volume flow rate (bbl/d, mbbl/d, m³/d, scf/d, etc.)
//! - Volume ratio (m³/m³, scf/stb, stb/scf, etc.)
//!
//! Each unit carries a factor relative to its category base unit
//! (Pa, bbl/d, m³/m³ respectively). Conversion is pure arithmetic:
//! `value * (from.factor / to.factor)`. Mixing categories is an error,
//! never a silent coercion.

mod unit;
mod error;
mod registry;
mod convert;
mod format;
mod api;

pub use unit::{Category, UnitDef};
pub use error::UnitError;
pub use registry::{UnitRegistry, REGISTRY};
pub use convert::{convert, convert_all};
pub use format::{format_result, format_series};
pub use api::{list_categories, list_units, convert_value, convert_series, UnitListing};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{Category, UnitDef, UnitError, REGISTRY};
    pub use crate::{convert, convert_all, format_result, format_series};
}
