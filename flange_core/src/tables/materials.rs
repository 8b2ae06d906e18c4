//! Material Tables & Stress Interpolator
//!
//! Allowable-stress data for bolt, plate and shell materials, tabulated
//! over a fixed ascending temperature grid, plus the linear interpolator
//! that produces an allowable stress at an arbitrary design temperature.
//!
//! Stress values are in MPa. The grid follows the customary code-table
//! steps (100 °F increments converted to °C); the second step (38 °C) is
//! the ambient reference used for seating-condition allowables.
//!
//! ## Example
//!
//! ```rust
//! use flange_core::tables::materials::builtin_bolt_materials;
//!
//! let bolts = builtin_bolt_materials();
//! let b7 = bolts.lookup("SA-193 B7");
//! let s_design = b7.curve.stress_at(200.0);
//! assert!(s_design > 0.0);
//! ```

use serde::{Deserialize, Serialize};

/// Shared temperature grid for all material stress curves (°C, ascending).
pub const TEMP_STEPS_C: [f64; 10] = [
    -29.0, 38.0, 93.0, 149.0, 204.0, 260.0, 316.0, 371.0, 427.0, 482.0,
];

/// Index of the ambient reference step within [`TEMP_STEPS_C`].
pub const AMBIENT_STEP_INDEX: usize = 1;

/// Allowable stress curve over [`TEMP_STEPS_C`].
///
/// Entries are optional: a material without published data at a step
/// (e.g., carbon bolting above its service limit) carries `None`, which
/// the interpolator treats as zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StressCurve {
    /// Allowable stress per temperature step (MPa), aligned to [`TEMP_STEPS_C`]
    pub stress_mpa: [Option<f64>; 10],
}

impl StressCurve {
    fn value_at(&self, index: usize) -> f64 {
        self.stress_mpa[index].unwrap_or(0.0)
    }

    /// Allowable stress at an arbitrary temperature (°C).
    ///
    /// Below the first step returns the first value; above the last step
    /// returns the last value; otherwise linear interpolation between the
    /// bracketing steps.
    pub fn stress_at(&self, temp_c: f64) -> f64 {
        if temp_c <= TEMP_STEPS_C[0] {
            return self.value_at(0);
        }
        let last = TEMP_STEPS_C.len() - 1;
        if temp_c >= TEMP_STEPS_C[last] {
            return self.value_at(last);
        }
        // Find the bracketing pair. The bounds checks above guarantee one exists.
        for i in 0..last {
            let (t1, t2) = (TEMP_STEPS_C[i], TEMP_STEPS_C[i + 1]);
            if temp_c >= t1 && temp_c <= t2 {
                let (s1, s2) = (self.value_at(i), self.value_at(i + 1));
                return s1 + (s2 - s1) * (temp_c - t1) / (t2 - t1);
            }
        }
        self.value_at(last)
    }

    /// Allowable stress at the ambient reference step.
    pub fn ambient_stress(&self) -> f64 {
        self.value_at(AMBIENT_STEP_INDEX)
    }
}

/// One material row: identity, strength minima, and its stress curve.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialSpec {
    /// Specification id (e.g., "SA-193 B7")
    pub id: String,

    /// Minimum tensile strength (MPa)
    pub min_tensile_mpa: f64,

    /// Minimum yield strength (MPa)
    pub min_yield_mpa: f64,

    /// Allowable stress vs. temperature
    pub curve: StressCurve,
}

/// A family of materials (bolting, plate, or shell), ordered as published.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MaterialTable {
    materials: Vec<MaterialSpec>,
}

impl MaterialTable {
    pub fn new(materials: Vec<MaterialSpec>) -> Self {
        MaterialTable { materials }
    }

    pub fn materials(&self) -> &[MaterialSpec] {
        &self.materials
    }

    /// Look up a material by id, falling back to the first row for
    /// unknown ids so the engine stays total.
    pub fn lookup(&self, id: &str) -> &MaterialSpec {
        self.materials
            .iter()
            .find(|m| m.id == id)
            .unwrap_or(&self.materials[0])
    }
}

fn curve(values: [Option<f64>; 10]) -> StressCurve {
    StressCurve { stress_mpa: values }
}

fn spec(id: &str, tensile: f64, yield_: f64, values: [Option<f64>; 10]) -> MaterialSpec {
    MaterialSpec {
        id: id.to_string(),
        min_tensile_mpa: tensile,
        min_yield_mpa: yield_,
        curve: curve(values),
    }
}

/// Builtin bolting material table.
pub fn builtin_bolt_materials() -> MaterialTable {
    MaterialTable::new(vec![
        spec(
            "SA-193 B7",
            860.0,
            720.0,
            [
                Some(172.0),
                Some(172.0),
                Some(172.0),
                Some(172.0),
                Some(172.0),
                Some(169.0),
                Some(162.0),
                Some(147.0),
                Some(110.0),
                Some(62.0),
            ],
        ),
        spec(
            "SA-193 B16",
            860.0,
            725.0,
            [
                Some(172.0),
                Some(172.0),
                Some(172.0),
                Some(172.0),
                Some(172.0),
                Some(172.0),
                Some(167.0),
                Some(158.0),
                Some(141.0),
                Some(96.0),
            ],
        ),
        spec(
            "SA-193 B8 Cl.2",
            655.0,
            345.0,
            [
                Some(130.0),
                Some(130.0),
                Some(117.0),
                Some(108.0),
                Some(101.0),
                Some(96.0),
                Some(92.0),
                Some(89.0),
                Some(86.0),
                Some(84.0),
            ],
        ),
        spec(
            "SA-307 B",
            414.0,
            227.0,
            [
                Some(47.6),
                Some(47.6),
                Some(47.6),
                Some(47.6),
                Some(47.6),
                Some(44.0),
                Some(41.0),
                None,
                None,
                None,
            ],
        ),
    ])
}

/// Builtin flange plate / forging material table.
pub fn builtin_plate_materials() -> MaterialTable {
    MaterialTable::new(vec![
        spec(
            "SA-105",
            485.0,
            250.0,
            [
                Some(138.0),
                Some(138.0),
                Some(135.0),
                Some(130.0),
                Some(124.0),
                Some(117.0),
                Some(108.0),
                Some(93.0),
                Some(62.0),
                Some(35.0),
            ],
        ),
        spec(
            "SA-516-70",
            485.0,
            260.0,
            [
                Some(138.0),
                Some(138.0),
                Some(138.0),
                Some(138.0),
                Some(130.0),
                Some(120.0),
                Some(108.0),
                Some(96.0),
                Some(63.0),
                Some(35.0),
            ],
        ),
        spec(
            "SA-240 304",
            515.0,
            205.0,
            [
                Some(115.0),
                Some(115.0),
                Some(107.0),
                Some(98.0),
                Some(92.0),
                Some(87.0),
                Some(83.0),
                Some(80.0),
                Some(77.0),
                Some(74.0),
            ],
        ),
    ])
}

/// Builtin shell / pipe material table.
pub fn builtin_shell_materials() -> MaterialTable {
    MaterialTable::new(vec![
        spec(
            "SA-106 B",
            415.0,
            240.0,
            [
                Some(118.0),
                Some(118.0),
                Some(118.0),
                Some(118.0),
                Some(116.0),
                Some(110.0),
                Some(100.0),
                Some(85.0),
                Some(61.0),
                Some(35.0),
            ],
        ),
        spec(
            "SA-312 TP316",
            515.0,
            205.0,
            [
                Some(115.0),
                Some(115.0),
                Some(110.0),
                Some(101.0),
                Some(95.0),
                Some(90.0),
                Some(87.0),
                Some(84.0),
                Some(81.0),
                Some(79.0),
            ],
        ),
        spec(
            "SA-333-6",
            415.0,
            240.0,
            [
                Some(118.0),
                Some(118.0),
                Some(118.0),
                Some(118.0),
                Some(116.0),
                Some(110.0),
                Some(100.0),
                Some(85.0),
                None,
                None,
            ],
        ),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn b7() -> MaterialSpec {
        builtin_bolt_materials().lookup("SA-193 B7").clone()
    }

    #[test]
    fn test_flat_extrapolation_below_and_above() {
        let m = b7();
        assert_eq!(m.curve.stress_at(TEMP_STEPS_C[0] - 50.0), 172.0);
        assert_eq!(m.curve.stress_at(TEMP_STEPS_C[9] + 50.0), 62.0);
    }

    #[test]
    fn test_exact_step_returns_tabulated_value() {
        let m = b7();
        for (i, t) in TEMP_STEPS_C.iter().enumerate() {
            let expected = m.curve.stress_mpa[i].unwrap_or(0.0);
            assert_eq!(m.curve.stress_at(*t), expected, "step {}", i);
        }
    }

    #[test]
    fn test_linear_interpolation_between_steps() {
        let m = b7();
        // Between 371 °C (147) and 427 °C (110): midpoint 399 °C
        let mid = m.curve.stress_at(399.0);
        let expected = 147.0 + (110.0 - 147.0) * (399.0 - 371.0) / (427.0 - 371.0);
        assert!((mid - expected).abs() < 1e-9);
    }

    #[test]
    fn test_missing_entries_interpolate_as_zero() {
        let table = builtin_bolt_materials();
        let sa307 = table.lookup("SA-307 B");
        // 371 °C entry is None -> treated as 0; halfway from 316 °C (41.0)
        let s = sa307.curve.stress_at(343.5);
        assert!((s - 20.5).abs() < 0.1);
    }

    #[test]
    fn test_ambient_stress_is_second_step() {
        let m = b7();
        assert_eq!(m.curve.ambient_stress(), 172.0);
        assert_eq!(AMBIENT_STEP_INDEX, 1);
    }

    #[test]
    fn test_unknown_id_falls_back_to_first_row() {
        let table = builtin_plate_materials();
        assert_eq!(table.lookup("UNOBTAINIUM").id, "SA-105");
    }

    #[test]
    fn test_serialization() {
        let m = b7();
        let json = serde_json::to_string(&m).unwrap();
        let roundtrip: MaterialSpec = serde_json::from_str(&json).unwrap();
        assert_eq!(m, roundtrip);
    }
}
