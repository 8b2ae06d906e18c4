//! # Geometry Resolver
//!
//! Computes the bolt-circle diameter from three independent sizing rules
//! and takes the governing (maximum) one:
//!
//! 1. Minimum pitch rule — enough circumference for the bolt spacing.
//! 2. Hub/radial rule — clearance from the hub transition to the holes.
//! 3. Gasket/clearance rule — room for the gasket inside the hole circle.
//!
//! Method 3 needs gasket geometry, which itself needs a provisional BCD,
//! so resolution is two-pass: a provisional BCD from methods 1–2 sizes
//! the gasket, then method 3 and the true governing BCD follow.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::calculations::gasket::{self, GasketResult, BOSS_MM};
use crate::calculations::DesignInput;
use crate::tables::ReferenceTables;
use crate::units::safe_div;

/// Which sizing rule produced the governing BCD.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GoverningMethod {
    /// Minimum pitch rule
    MinPitch,
    /// Hub/radial rule
    HubRadial,
    /// Gasket/clearance rule
    GasketClearance,
}

/// Resolved flange geometry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeometryResult {
    /// Method 1 candidate BCD (mm)
    pub bcd_method1_mm: f64,

    /// Method 2 candidate BCD (mm)
    pub bcd_method2_mm: f64,

    /// Method 3 candidate BCD (mm)
    pub bcd_method3_mm: f64,

    /// Which method governs (first equal wins, in method order)
    pub governing_method: GoverningMethod,

    /// Provisional BCD from methods 1-2 used to size the gasket (mm)
    pub provisional_bcd_mm: f64,

    /// Final bolt-circle diameter after any manual override (mm)
    pub bcd_mm: f64,

    /// Final flange outside diameter after any manual override (mm)
    pub od_mm: f64,

    /// Effective shell neck thickness g0 including corrosion (mm)
    pub g0_eff_mm: f64,

    /// Hub transition thickness g1, manual or derived (mm)
    pub g1_mm: f64,

    /// Required shell thickness at design conditions (mm)
    pub shell_t_req_mm: f64,

    /// Minimum allowable bolt spacing (mm)
    pub min_spacing_mm: f64,

    /// Maximum allowable bolt pitch (mm)
    pub max_spacing_mm: f64,

    /// Actual geometric pitch at the final BCD (mm)
    pub pitch_mm: f64,

    /// Whether the pitch lies within [min, max] spacing
    pub pitch_ok: bool,
}

/// Required cylindrical shell thickness at design conditions,
/// `t = P·D / (2·S·E − 1.2·P) + CA`, zero-guarded.
pub fn required_shell_thickness_mm(
    pressure_mpa: f64,
    inside_diameter_mm: f64,
    allowable_mpa: f64,
    joint_efficiency: f64,
    corrosion_mm: f64,
) -> f64 {
    let den = 2.0 * allowable_mpa * joint_efficiency - 1.2 * pressure_mpa;
    if den <= 0.0 {
        // Degenerate allowable: no thickness contribution, corrosion only
        return corrosion_mm;
    }
    safe_div(pressure_mpa * inside_diameter_mm, den) + corrosion_mm
}

/// Hub transition thickness: the manual value when nonzero, else derived
/// from the effective neck thickness as `ceil(g0·1.3/3 + g0)`.
pub fn derive_g1_mm(g0_eff_mm: f64, manual_g1_mm: f64) -> f64 {
    if manual_g1_mm != 0.0 {
        manual_g1_mm
    } else {
        (g0_eff_mm * 1.3 / 3.0 + g0_eff_mm).ceil()
    }
}

fn method1_bcd(min_spacing_mm: f64, bolt_count: u32) -> f64 {
    (min_spacing_mm * bolt_count as f64 / PI).ceil()
}

fn method2_bcd(inside_diameter_mm: f64, g1_mm: f64, radial_distance_mm: f64) -> f64 {
    (inside_diameter_mm + 2.0 * g1_mm + 2.0 * radial_distance_mm).ceil()
}

fn method3_bcd(gasket_overall_od_mm: f64, clearance_mm: f64, hole_diameter_mm: f64) -> f64 {
    gasket_overall_od_mm + 2.0 * BOSS_MM + 2.0 * clearance_mm + hole_diameter_mm.ceil()
}

/// Resolve flange geometry and the gasket sized against it.
///
/// `pressure_mpa` and the shell allowable feed the required-thickness
/// floor for `g0`; both come pre-normalized from the pipeline driver.
pub fn resolve(
    input: &DesignInput,
    tables: &ReferenceTables,
    pressure_mpa: f64,
    shell_allowable_mpa: f64,
) -> (GeometryResult, GasketResult) {
    let bolt = tables.bolts.lookup(&input.bolt.size_label);
    let min_spacing = bolt.effective_min_spacing_mm(input.hydraulic_tensioning);

    let t_req = required_shell_thickness_mm(
        pressure_mpa,
        input.inside_diameter_mm,
        shell_allowable_mpa,
        input.loading.joint_efficiency,
        input.corrosion_allowance_mm,
    );
    let g0_eff = (input.g0_mm + input.corrosion_allowance_mm).max(t_req);
    let g1 = derive_g1_mm(g0_eff, input.g1_mm);

    let m1 = method1_bcd(min_spacing, input.bolt.count);
    let m2 = method2_bcd(input.inside_diameter_mm, g1, bolt.radial_distance_mm);
    let provisional = m1.max(m2);

    let gasket = gasket::size(input, tables, provisional);

    let m3 = method3_bcd(gasket.overall_od_mm, input.clearance_mm, bolt.hole_diameter_mm);

    let governing_value = m1.max(m2).max(m3);
    let governing_method = if m1 == governing_value {
        GoverningMethod::MinPitch
    } else if m2 == governing_value {
        GoverningMethod::HubRadial
    } else {
        GoverningMethod::GasketClearance
    };

    let bcd = if input.overrides.bcd_mm != 0.0 {
        input.overrides.bcd_mm
    } else {
        governing_value
    };

    let od = if input.overrides.od_mm != 0.0 {
        input.overrides.od_mm
    } else {
        (bcd + 2.0 * bolt.edge_distance_mm).ceil()
    };

    let pitch = safe_div(PI * bcd, input.bolt.count as f64);
    let max_spacing = bolt.max_pitch_mm;
    let pitch_ok = pitch >= min_spacing && pitch <= max_spacing;

    let geometry = GeometryResult {
        bcd_method1_mm: m1,
        bcd_method2_mm: m2,
        bcd_method3_mm: m3,
        governing_method,
        provisional_bcd_mm: provisional,
        bcd_mm: bcd,
        od_mm: od,
        g0_eff_mm: g0_eff,
        g1_mm: g1,
        shell_t_req_mm: t_req,
        min_spacing_mm: min_spacing,
        max_spacing_mm: max_spacing,
        pitch_mm: pitch,
        pitch_ok,
    };

    (geometry, gasket)
}
