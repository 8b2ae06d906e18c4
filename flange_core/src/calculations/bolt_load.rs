//! # Bolt Load Calculator
//!
//! Computes the two governing bolt loads — operating (Wm1) and gasket
//! seating (Wm2) — and the required vs. available bolt root area.
//!
//! Forces come out in newtons directly: lengths are mm, stresses MPa,
//! and mm² × MPa = N.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::calculations::gasket::GasketResult;
use crate::calculations::DesignInput;
use crate::tables::ReferenceTables;
use crate::units::{safe_div, PressureUnit};

/// Bolt-load and area results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoltLoadResult {
    /// Hydrostatic end force H (N)
    pub h_n: f64,

    /// Gasket reaction under pressure Hp (N)
    pub hp_n: f64,

    /// Operating bolt load Wm1 = H + Hp (N)
    pub wm1_n: f64,

    /// Gasket seating bolt load Wm2 (N)
    pub wm2_n: f64,

    /// Gasket factor m in effect (after any override)
    pub gasket_m: f64,

    /// Gasket seating stress y in effect (MPa, after any override)
    pub gasket_y_mpa: f64,

    /// Bolt allowable stress at design temperature (MPa)
    pub design_bolt_stress_mpa: f64,

    /// Bolt allowable stress at ambient (MPa)
    pub ambient_bolt_stress_mpa: f64,

    /// Required bolt area for the operating condition (mm²)
    pub required_area_operating_mm2: f64,

    /// Required bolt area for the seating condition (mm²)
    pub required_area_seating_mm2: f64,

    /// Governing required bolt area (mm²)
    pub required_area_mm2: f64,

    /// Available bolt root area, all bolts (mm²)
    pub available_area_mm2: f64,

    /// Available load at ambient allowable (N)
    pub available_load_ambient_n: f64,

    /// Available load at design allowable (N)
    pub available_load_design_n: f64,

    /// Governing required load max(Wm1, Wm2) (N)
    pub required_load_n: f64,

    /// Load margin: available at design allowable minus required (N)
    pub margin_n: f64,
}

impl BoltLoadResult {
    /// Whether the selected bolting carries the governing load.
    pub fn passes(&self) -> bool {
        self.margin_n >= 0.0
    }
}

/// Gasket factor with override: a nonzero manual value wins.
fn effective_factor(manual: f64, table: f64) -> f64 {
    if manual != 0.0 {
        manual
    } else {
        table
    }
}

/// Compute bolt loads for the sized gasket.
pub fn calculate(
    input: &DesignInput,
    tables: &ReferenceTables,
    gasket: &GasketResult,
) -> BoltLoadResult {
    let p = input.loading.pressure_mpa();
    let t = input.loading.temperature_c();

    let main = tables.gaskets.lookup(&input.gasket.gasket_id);
    let pass = tables.gaskets.lookup(&input.gasket.pass_gasket_id);

    let m = effective_factor(input.overrides.gasket_m, main.m);
    let y_mpa = effective_factor(
        PressureUnit::Psi.to_mpa(input.overrides.gasket_y_psi),
        PressureUnit::Psi.to_mpa(main.y_psi),
    );
    let pass_m = effective_factor(input.overrides.pass_m, pass.m);
    let pass_y_mpa = effective_factor(
        PressureUnit::Psi.to_mpa(input.overrides.pass_y_psi),
        PressureUnit::Psi.to_mpa(pass.y_psi),
    );

    let g = gasket.g_mm;
    let b = gasket.b_mm;
    let pass_area = input.pass_width_mm * input.pass_length_mm;

    let h = 0.785 * g * g * p;
    let hp = 2.0 * p * (b * PI * g * m + pass_area * pass_m);
    let wm1 = h + hp;
    let wm2 = PI * b * g * y_mpa + pass_area * pass_y_mpa;

    let bolt_material = tables.bolt_materials.lookup(&input.bolt.material_id);
    let design_stress = bolt_material.curve.stress_at(t);
    let ambient_stress = bolt_material.curve.ambient_stress();

    let required_operating = safe_div(wm1, design_stress);
    let required_seating = safe_div(wm2, ambient_stress);
    let required_area = required_operating.max(required_seating);

    let bolt = tables.bolts.lookup(&input.bolt.size_label);
    let available_area = bolt.root_area_mm2 * input.bolt.count as f64;
    let available_ambient = available_area * ambient_stress;
    let available_design = available_area * design_stress;

    let required_load = wm1.max(wm2);
    let margin = available_design - required_load;

    BoltLoadResult {
        h_n: h,
        hp_n: hp,
        wm1_n: wm1,
        wm2_n: wm2,
        gasket_m: m,
        gasket_y_mpa: y_mpa,
        design_bolt_stress_mpa: design_stress,
        ambient_bolt_stress_mpa: ambient_stress,
        required_area_operating_mm2: required_operating,
        required_area_seating_mm2: required_seating,
        required_area_mm2: required_area,
        available_area_mm2: available_area,
        available_load_ambient_n: available_ambient,
        available_load_design_n: available_design,
        required_load_n: required_load,
        margin_n: margin,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculations::tests::base_input;
    use crate::calculations::{gasket, DesignInput};
    use crate::tables::ReferenceTables;

    fn run(input: &DesignInput) -> (GasketResult, BoltLoadResult) {
        let tables = ReferenceTables::builtin();
        let sized = gasket::size(input, tables, 420.0);
        let loads = calculate(input, tables, &sized);
        (sized, loads)
    }

    #[test]
    fn test_hydrostatic_force_formula() {
        let input = base_input();
        let (sized, loads) = run(&input);
        let p = input.loading.pressure_mpa();
        let expected = 0.785 * sized.g_mm * sized.g_mm * p;
        assert!((loads.h_n - expected).abs() < 1e-6);
    }

    #[test]
    fn test_operating_load_is_h_plus_hp() {
        let input = base_input();
        let (_, loads) = run(&input);
        assert!((loads.wm1_n - (loads.h_n + loads.hp_n)).abs() < 1e-9);
        assert!(loads.hp_n > 0.0);
    }

    #[test]
    fn test_seating_load_uses_y_in_mpa() {
        let mut input = base_input();
        input.pass_width_mm = 0.0;
        input.pass_length_mm = 0.0;
        let (sized, loads) = run(&input);

        let tables = ReferenceTables::builtin();
        let y_psi = tables.gaskets.lookup(&input.gasket.gasket_id).y_psi;
        let y_mpa = y_psi * 0.00689476;
        let expected = PI * sized.b_mm * sized.g_mm * y_mpa;
        assert!((loads.wm2_n - expected).abs() < 1e-6);
    }

    #[test]
    fn test_pass_partition_contributes_to_both_loads() {
        let mut input = base_input();
        input.pass_width_mm = 0.0;
        input.pass_length_mm = 0.0;
        let (_, without) = run(&input);

        input.pass_width_mm = 12.0;
        input.pass_length_mm = 280.0;
        let (_, with) = run(&input);

        assert!(with.hp_n > without.hp_n);
        assert!(with.wm2_n > without.wm2_n);
    }

    #[test]
    fn test_m_y_overrides_win_and_zero_restores() {
        let mut input = base_input();
        let (_, auto) = run(&input);

        input.overrides.gasket_m = 4.5;
        input.overrides.gasket_y_psi = 12000.0;
        let (_, overridden) = run(&input);
        assert_eq!(overridden.gasket_m, 4.5);
        assert!((overridden.gasket_y_mpa - 12000.0 * 0.00689476).abs() < 1e-9);

        input.overrides.gasket_m = 0.0;
        input.overrides.gasket_y_psi = 0.0;
        let (_, restored) = run(&input);
        assert_eq!(restored.gasket_m, auto.gasket_m);
        assert_eq!(restored.gasket_y_mpa, auto.gasket_y_mpa);
    }

    #[test]
    fn test_required_area_is_governing_condition() {
        let input = base_input();
        let (_, loads) = run(&input);
        assert_eq!(
            loads.required_area_mm2,
            loads
                .required_area_operating_mm2
                .max(loads.required_area_seating_mm2)
        );
        assert_eq!(loads.required_load_n, loads.wm1_n.max(loads.wm2_n));
    }

    #[test]
    fn test_zero_allowable_stress_yields_zero_area() {
        let mut input = base_input();
        // SA-307 B has no published stress above 316 degC; at 450 degC the
        // curve interpolates to zero and the area ratio must guard it
        input.bolt.material_id = "SA-307 B".to_string();
        input.loading.design_temperature = 450.0;
        let (_, loads) = run(&input);
        assert_eq!(loads.design_bolt_stress_mpa, 0.0);
        assert_eq!(loads.required_area_operating_mm2, 0.0);
    }

    #[test]
    fn test_available_area_scales_with_count() {
        let mut input = base_input();
        input.bolt.count = 12;
        let (_, twelve) = run(&input);
        input.bolt.count = 24;
        let (_, twenty_four) = run(&input);
        assert!((twenty_four.available_area_mm2 - 2.0 * twelve.available_area_mm2).abs() < 1e-9);
    }
}
