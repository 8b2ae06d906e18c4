//! # Alternative Stress-Selection Check (PCC-1 style)
//!
//! An eight-step bounded-selection procedure that picks a target bolt
//! assembly stress and verifies it against four inequalities: minimum
//! seating, minimum operating, maximum gasket, and maximum flange.
//!
//! A limit value of zero is the domain's explicit "no limit" sentinel:
//! the corresponding bound is dropped and its check passes. All checks
//! tolerate ±0.001 MPa of floating-point slack.

use std::f64::consts::FRAC_PI_4;

use serde::{Deserialize, Serialize};

use crate::calculations::gasket::GasketResult;
use crate::tables::{Pcc1Category, Pcc1Table};
use crate::units::safe_div;

/// Absolute slack on the inequality checks (MPa).
pub const CHECK_SLACK_MPA: f64 = 0.001;

/// Bound parameters for the check. All stresses in MPa; zero means
/// "no limit" for the maxima and "no floor" for the minima.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pcc1Params {
    /// Gasket category used to pre-fill bounds from the reference table
    pub category: Pcc1Category,

    /// Target assembly (seating) gasket stress
    pub target_seating_mpa: f64,

    /// Minimum allowable bolt stress Sb(min)
    pub sb_min_mpa: f64,

    /// Maximum allowable bolt stress Sb(max)
    pub sb_max_mpa: f64,

    /// Maximum allowable flange stress Sf(max)
    pub sf_max_mpa: f64,

    /// Minimum gasket stress at seating Sg(min-S)
    pub sg_min_seating_mpa: f64,

    /// Minimum gasket stress in operation Sg(min-O)
    pub sg_min_operating_mpa: f64,

    /// Maximum gasket stress Sg(max)
    pub sg_max_mpa: f64,

    /// Fraction-of-gasket factor Φg
    pub gasket_fraction: f64,

    /// Maximum flange stress ratio Φf(max)
    pub phi_f_max: f64,

    /// Pass-partition area reduction (fraction of the strip area counted)
    pub pass_area_reduction: f64,
}

impl Pcc1Params {
    /// Pre-fill bounds for a gasket category from the reference table.
    /// Bolt/flange limits default to "no limit" until the caller sets them.
    pub fn from_reference(category: Pcc1Category, table: &Pcc1Table) -> Self {
        let row = table.lookup(category);
        Pcc1Params {
            category,
            target_seating_mpa: row.target_seating_mpa,
            sb_min_mpa: 0.0,
            sb_max_mpa: 0.0,
            sf_max_mpa: 0.0,
            sg_min_seating_mpa: row.sg_min_seating_mpa,
            sg_min_operating_mpa: row.sg_min_operating_mpa,
            sg_max_mpa: row.sg_max_mpa,
            gasket_fraction: 1.0,
            phi_f_max: 0.0,
            pass_area_reduction: 0.5,
        }
    }
}

/// Step values and verdicts of the check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pcc1Result {
    /// Gasket area Ag including the reduced pass-partition strip (mm²)
    pub gasket_area_mm2: f64,

    /// Step 1: stress needed to hit the seating target
    pub sb_calc_mpa: f64,

    /// Step 2: capped at Sb(max)
    pub bound_a_mpa: f64,

    /// Step 3: floored at Sb(min)
    pub bound_b_mpa: f64,

    /// Step 4: capped at Sf(max)
    pub bound_c_mpa: f64,

    /// Step 5: final selected bolt stress
    pub sb_selected_mpa: f64,

    /// Step 6 limit and verdict: minimum seating stress
    pub min_seating_limit_mpa: f64,
    pub min_seating_ok: bool,

    /// Step 7 limit and verdict: minimum operating stress
    pub min_operating_limit_mpa: f64,
    pub min_operating_ok: bool,

    /// Step 8 limit and verdict: maximum gasket stress
    pub max_gasket_limit_mpa: f64,
    pub max_gasket_ok: bool,

    /// Step 9 limit and verdict: maximum flange stress
    pub max_flange_limit_mpa: f64,
    pub max_flange_ok: bool,

    /// Conjunction of all four checks plus the Sb(min)/Sb(max) clamp
    pub passes: bool,
}

fn cap(value: f64, limit: f64) -> f64 {
    if limit == 0.0 {
        value
    } else {
        value.min(limit)
    }
}

/// Run the check against a sized gasket and the selected bolting.
pub fn check(
    params: &Pcc1Params,
    gasket: &GasketResult,
    root_area_mm2: f64,
    bolt_count: u32,
    pressure_mpa: f64,
    pass_width_mm: f64,
    pass_length_mm: f64,
) -> Pcc1Result {
    let od = gasket.seating_od_mm;
    let id = gasket.seating_id_mm;
    let ring_area = FRAC_PI_4 * (od * od - id * id);
    let reduced_pass_area = params.pass_area_reduction * pass_width_mm * pass_length_mm;
    let ag = ring_area + reduced_pass_area;

    let total_root_area = root_area_mm2 * bolt_count as f64;

    let sb_calc = safe_div(params.target_seating_mpa * ag, total_root_area);
    let a = cap(sb_calc, params.sb_max_mpa);
    let b = a.max(params.sb_min_mpa);
    let c = cap(b, params.sf_max_mpa);
    // The final selection is C: capped at Sb(max) and Sf(max), floored at
    // Sb(min). A, B and C are all reported so the selection stays auditable.
    let sb_sel = c;

    let area_ratio = safe_div(ag, total_root_area);

    let min_seating_limit = params.sg_min_seating_mpa * area_ratio;
    let min_seating_ok = sb_sel >= min_seating_limit - CHECK_SLACK_MPA;

    let min_operating_limit = safe_div(
        params.sg_min_operating_mpa * ag + FRAC_PI_4 * pressure_mpa * id * id,
        params.gasket_fraction * total_root_area,
    );
    let min_operating_ok = sb_sel >= min_operating_limit - CHECK_SLACK_MPA;

    let max_gasket_limit = params.sg_max_mpa * area_ratio;
    let max_gasket_ok =
        params.sg_max_mpa == 0.0 || sb_sel <= max_gasket_limit + CHECK_SLACK_MPA;

    let max_flange_limit = if params.phi_f_max == 0.0 {
        0.0
    } else {
        params.sf_max_mpa * params.gasket_fraction / params.phi_f_max
    };
    let max_flange_ok =
        params.phi_f_max == 0.0 || sb_sel <= max_flange_limit + CHECK_SLACK_MPA;

    let clamp_ok = (params.sb_max_mpa == 0.0 || sb_sel <= params.sb_max_mpa + CHECK_SLACK_MPA)
        && sb_sel >= params.sb_min_mpa - CHECK_SLACK_MPA;

    let passes =
        min_seating_ok && min_operating_ok && max_gasket_ok && max_flange_ok && clamp_ok;

    Pcc1Result {
        gasket_area_mm2: ag,
        sb_calc_mpa: sb_calc,
        bound_a_mpa: a,
        bound_b_mpa: b,
        bound_c_mpa: c,
        sb_selected_mpa: sb_sel,
        min_seating_limit_mpa: min_seating_limit,
        min_seating_ok,
        min_operating_limit_mpa: min_operating_limit,
        min_operating_ok,
        max_gasket_limit_mpa: max_gasket_limit,
        max_gasket_ok,
        max_flange_limit_mpa: max_flange_limit,
        max_flange_ok,
        passes,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tables::builtin_pcc1_table;

    fn test_gasket() -> GasketResult {
        GasketResult {
            seating_od_mm: 420.0,
            seating_id_mm: 380.0,
            ..Default::default()
        }
    }

    fn params() -> Pcc1Params {
        let mut p = Pcc1Params::from_reference(Pcc1Category::SpiralWound, &builtin_pcc1_table());
        p.sb_min_mpa = 70.0;
        p.sb_max_mpa = 300.0;
        p.sf_max_mpa = 250.0;
        p
    }

    #[test]
    fn test_gasket_area_includes_reduced_pass_strip() {
        let mut p = params();
        p.pass_area_reduction = 0.5;
        let result = check(&p, &test_gasket(), 355.5, 16, 1.0, 10.0, 300.0);
        let ring = FRAC_PI_4 * (420.0f64.powi(2) - 380.0f64.powi(2));
        assert!((result.gasket_area_mm2 - (ring + 0.5 * 3000.0)).abs() < 1e-6);
    }

    #[test]
    fn test_selected_stress_clamped_between_bounds() {
        let mut p = params();
        // Sweep the target to drive Sb_calc through and past both bounds
        for target in [1.0, 50.0, 124.0, 500.0, 5000.0] {
            p.target_seating_mpa = target;
            let result = check(&p, &test_gasket(), 355.5, 16, 1.0, 0.0, 0.0);
            assert!(
                result.sb_selected_mpa >= p.sb_min_mpa - CHECK_SLACK_MPA
                    && result.sb_selected_mpa <= p.sb_max_mpa + CHECK_SLACK_MPA,
                "clamp violated at target {}",
                target
            );
        }
    }

    #[test]
    fn test_sg_max_zero_is_no_limit() {
        let mut p = params();
        p.sg_max_mpa = 0.0;
        p.target_seating_mpa = 5000.0; // drives Sb_sel to Sb_max
        let result = check(&p, &test_gasket(), 355.5, 4, 1.0, 0.0, 0.0);
        assert!(result.max_gasket_ok);
    }

    #[test]
    fn test_phi_f_max_zero_is_no_limit() {
        let mut p = params();
        p.phi_f_max = 0.0;
        let result = check(&p, &test_gasket(), 355.5, 16, 1.0, 0.0, 0.0);
        assert!(result.max_flange_ok);
        assert_eq!(result.max_flange_limit_mpa, 0.0);
    }

    #[test]
    fn test_min_operating_includes_pressure_thrust() {
        let p = params();
        let low = check(&p, &test_gasket(), 355.5, 16, 0.5, 0.0, 0.0);
        let high = check(&p, &test_gasket(), 355.5, 16, 5.0, 0.0, 0.0);
        assert!(high.min_operating_limit_mpa > low.min_operating_limit_mpa);
    }

    #[test]
    fn test_zero_bolt_area_guards_division() {
        let p = params();
        let result = check(&p, &test_gasket(), 0.0, 0, 1.0, 0.0, 0.0);
        assert_eq!(result.sb_calc_mpa, 0.0);
    }

    #[test]
    fn test_overall_status_is_conjunction() {
        let mut p = params();
        // Force a seating failure: enormous minimum seating stress
        p.sg_min_seating_mpa = 10000.0;
        let result = check(&p, &test_gasket(), 355.5, 16, 1.0, 0.0, 0.0);
        assert!(!result.min_seating_ok);
        assert!(!result.passes);
    }
}
