//! # Reference Tables
//!
//! Read-only lookup data supplied to the sizing engine: bolt geometry,
//! material stress curves, gasket factors, ring widths, and PCC-1
//! reference stresses. The engine never mutates these; consumers either
//! build their own set or use the builtin data via
//! [`ReferenceTables::builtin`].
//!
//! Lookups are total: an unmatched key falls back to the first row of
//! the relevant table rather than failing.

pub mod bolts;
pub mod gaskets;
pub mod materials;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

pub use bolts::{builtin_bolt_table, BoltSize, BoltTable, SEARCH_FLOOR_LABEL};
pub use gaskets::{
    builtin_gasket_table, builtin_pcc1_table, builtin_ring_width_table, FacingSketch,
    GasketFactor, GasketTable, Pcc1Category, Pcc1RefStress, Pcc1Table, RingWidthRow,
    RingWidthTable,
};
pub use materials::{
    builtin_bolt_materials, builtin_plate_materials, builtin_shell_materials, MaterialSpec,
    MaterialTable, StressCurve, AMBIENT_STEP_INDEX, TEMP_STEPS_C,
};

/// The full set of reference tables the engine computes against.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReferenceTables {
    pub bolts: BoltTable,
    pub bolt_materials: MaterialTable,
    pub plate_materials: MaterialTable,
    pub shell_materials: MaterialTable,
    pub gaskets: GasketTable,
    pub ring_widths: RingWidthTable,
    pub pcc1: Pcc1Table,
}

static BUILTIN: Lazy<ReferenceTables> = Lazy::new(|| ReferenceTables {
    bolts: builtin_bolt_table(),
    bolt_materials: builtin_bolt_materials(),
    plate_materials: builtin_plate_materials(),
    shell_materials: builtin_shell_materials(),
    gaskets: builtin_gasket_table(),
    ring_widths: builtin_ring_width_table(),
    pcc1: builtin_pcc1_table(),
});

impl ReferenceTables {
    /// The builtin table set, constructed once and shared.
    pub fn builtin() -> &'static ReferenceTables {
        &BUILTIN
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_tables_populated() {
        let tables = ReferenceTables::builtin();
        assert!(!tables.bolts.is_empty());
        assert!(!tables.bolt_materials.materials().is_empty());
        assert!(!tables.gaskets.factors().is_empty());
        assert!(!tables.ring_widths.rows().is_empty());
        assert!(!tables.pcc1.rows().is_empty());
    }

    #[test]
    fn test_builtin_is_shared() {
        let a = ReferenceTables::builtin() as *const _;
        let b = ReferenceTables::builtin() as *const _;
        assert_eq!(a, b);
    }
}
