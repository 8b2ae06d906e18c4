//! # Gasket Sizing
//!
//! Derives the gasket seating and overall diameters, ring widths, and the
//! effective gasket width/diameter used by the bolt-load formulas.
//!
//! The seating OD must satisfy two independent fits: inside the bolt
//! circle (holes, clearance, boss, outer ring) and outside the shell bore
//! (shell gap, inner ring, contact width). The auto value is the larger
//! of the two derivations.

use serde::{Deserialize, Serialize};

use crate::calculations::DesignInput;
use crate::tables::ReferenceTables;
use crate::units::CUL_MM;

/// Radial boss allowance between gasket OD and bolt holes (mm).
pub const BOSS_MM: f64 = 1.5;

/// Basic-width threshold separating the two effective-width regimes (mm).
pub const B0_THRESHOLD_MM: f64 = 6.0;

/// Derived gasket geometry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GasketResult {
    /// Inner ring width after table/override/presence resolution (mm)
    pub inner_ring_mm: f64,

    /// Outer ring width after table/override/presence resolution (mm)
    pub outer_ring_mm: f64,

    /// Gasket seating (contact) outside diameter (mm)
    pub seating_od_mm: f64,

    /// Gasket seating (contact) inside diameter (mm)
    pub seating_id_mm: f64,

    /// Overall gasket OD including the outer ring (mm)
    pub overall_od_mm: f64,

    /// Overall gasket ID inside the inner ring (mm)
    pub overall_id_mm: f64,

    /// Basic gasket seating width b0 (mm)
    pub b0_mm: f64,

    /// Effective gasket seating width b (mm)
    pub b_mm: f64,

    /// Effective gasket mean diameter G (mm)
    pub g_mm: f64,
}

/// Resolve a ring width: absent ring forces zero, a nonzero manual width
/// wins, otherwise the table minimum for this bore applies.
fn ring_width(present: bool, manual_mm: f64, table_mm: f64) -> f64 {
    if !present {
        0.0
    } else if manual_mm != 0.0 {
        manual_mm
    } else {
        table_mm
    }
}

/// Size the gasket for a provisional bolt-circle diameter.
pub fn size(input: &DesignInput, tables: &ReferenceTables, provisional_bcd_mm: f64) -> GasketResult {
    let bolt = tables.bolts.lookup(&input.bolt.size_label);
    let ring_row = tables.ring_widths.lookup(input.inside_diameter_mm);

    let inner_ring = ring_width(
        input.inner_ring_present,
        input.inner_ring_width_mm,
        ring_row.inner_mm,
    );
    let outer_ring = ring_width(
        input.outer_ring_present,
        input.outer_ring_width_mm,
        ring_row.outer_mm,
    );

    let n = input.contact_width_mm;

    // Bolt-circle fit: everything between the hole circle and the gasket
    let od_from_bcd = provisional_bcd_mm
        - bolt.hole_diameter_mm
        - 2.0 * input.clearance_mm
        - 2.0 * BOSS_MM
        - 2.0 * outer_ring;

    // Shell fit: bore, gap, inner ring, then the contact band itself
    let od_from_shell =
        input.inside_diameter_mm + 2.0 * input.shell_gap_mm + 2.0 * inner_ring + 2.0 * n;

    let auto_od = od_from_bcd.max(od_from_shell);
    let seating_od = if input.overrides.seating_od_mm != 0.0 {
        input.overrides.seating_od_mm
    } else {
        auto_od
    };

    let seating_id = if input.overrides.seating_id_mm != 0.0 {
        input.overrides.seating_id_mm
    } else {
        seating_od - 2.0 * n
    };

    let overall_od = seating_od + 2.0 * outer_ring;
    let overall_id = seating_id - 2.0 * inner_ring;

    let b0 = input.gasket.facing.basic_width_mm(n);
    let b = if b0 <= B0_THRESHOLD_MM {
        b0
    } else {
        0.5 * CUL_MM * (b0 / CUL_MM).sqrt()
    };
    let g = if b0 > B0_THRESHOLD_MM {
        seating_od - 2.0 * b
    } else {
        (seating_id + seating_od) / 2.0
    };

    GasketResult {
        inner_ring_mm: inner_ring,
        outer_ring_mm: outer_ring,
        seating_od_mm: seating_od,
        seating_id_mm: seating_id,
        overall_od_mm: overall_od,
        overall_id_mm: overall_id,
        b0_mm: b0,
        b_mm: b,
        g_mm: g,
    }
}
