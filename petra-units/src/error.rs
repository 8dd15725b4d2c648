//! Conversion and registry errors
//!
//! Every failure is a distinct variant so callers can decide whether to
//! re-prompt (interactive use) or abort (batch use). The core never
//! retries or recovers internally.

use thiserror::Error;
use crate::Category;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum UnitError {
    /// Category name not present in the registry
    #[error("unknown category: {0}")]
    UnknownCategory(String),

    /// 1-based menu index outside the category's unit list
    #[error("selection {index} out of range 1-{count}")]
    SelectionOutOfRange { index: usize, count: usize },

    /// Conversion requested between units of different categories
    #[error("cannot convert {from} ({from_category}) to {to} ({to_category}): categories differ")]
    CategoryMismatch {
        from: &'static str,
        to: &'static str,
        from_category: Category,
        to_category: Category,
    },

    /// Zero or negative factor in the registry tables. Internal invariant
    /// violation, never expected with shipped data.
    #[error("unit {symbol} has invalid factor {factor}")]
    InvalidFactor { symbol: &'static str, factor: f64 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_mismatch() {
        let err = UnitError::CategoryMismatch {
            from: "Pa",
            to: "bbl/d",
            from_category: Category::Pressure,
            to_category: Category::VolumeFlowRate,
        };
        let msg = format!("{}", err);
        assert!(msg.contains("Pa"));
        assert!(msg.contains("VolumeFlowRate"));
    }

    #[test]
    fn test_display_out_of_range() {
        let err = UnitError::SelectionOutOfRange { index: 9, count: 8 };
        assert_eq!(format!("{}", err), "selection 9 out of range 1-8");
    }
}
