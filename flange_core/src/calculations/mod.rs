//! # Flange Joint Sizing
//!
//! The calculation pipeline follows the pattern used throughout this
//! crate's API:
//!
//! - [`DesignInput`] - input parameters (JSON-serializable)
//! - [`CalculationResult`] - derived quantities (JSON-serializable)
//! - [`calculate`] - pure function mapping one to the other
//!
//! `calculate` is total and deterministic: it never fails on valid table
//! data, recomputes every field on every call, and yields bit-identical
//! output for identical input. Manual overrides use a zero sentinel - a
//! nonzero override always replaces the auto-derived value, and setting
//! it back to zero restores it.
//!
//! ## Pipeline
//!
//! ```text
//! units -> stress curves -> geometry -> gasket -> bolt loads -> PCC-1
//! ```
//!
//! The [`search`](crate::calculations::search) module re-runs this
//! pipeline over a (bolt size x bolt count) grid.

pub mod bolt_load;
pub mod gasket;
pub mod geometry;
pub mod pcc1;
pub mod search;

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::tables::{FacingSketch, ReferenceTables};
use crate::units::{PressureUnit, TemperatureUnit};

pub use bolt_load::BoltLoadResult;
pub use gasket::GasketResult;
pub use geometry::{GeometryResult, GoverningMethod};
pub use pcc1::{Pcc1Params, Pcc1Result};
pub use search::{search, SearchOutcome};

/// Bolt selection: nominal size from the bolt table, count, material.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoltSelection {
    /// Nominal size label from the bolt geometry table (e.g., "3/4")
    pub size_label: String,

    /// Number of bolts
    pub count: u32,

    /// Bolting material id (e.g., "SA-193 B7")
    pub material_id: String,
}

/// Gasket selection: flange and pass-partition gasket types plus facing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GasketSelection {
    /// Flange gasket type id from the gasket factor table
    pub gasket_id: String,

    /// Pass-partition gasket type id
    pub pass_gasket_id: String,

    /// Facing-sketch category
    pub facing: FacingSketch,
}

/// Loading conditions with their input units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoadingConditions {
    /// Design pressure in `pressure_unit`
    pub design_pressure: f64,

    /// Unit of `design_pressure`
    pub pressure_unit: PressureUnit,

    /// Design temperature in `temperature_unit`
    pub design_temperature: f64,

    /// Unit of `design_temperature`
    pub temperature_unit: TemperatureUnit,

    /// Shell joint efficiency E
    pub joint_efficiency: f64,
}

impl LoadingConditions {
    /// Design pressure normalized to MPa.
    pub fn pressure_mpa(&self) -> f64 {
        self.pressure_unit.to_mpa(self.design_pressure)
    }

    /// Design temperature normalized to °C.
    pub fn temperature_c(&self) -> f64 {
        self.temperature_unit.to_celsius(self.design_temperature)
    }
}

/// Manual overrides. Zero means "not overridden"; any nonzero value
/// replaces the corresponding derived quantity before downstream use.
///
/// A legitimately-zero override is therefore indistinguishable from
/// "unset" - existing domain behavior, kept as-is.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Overrides {
    /// Bolt-circle diameter (mm)
    pub bcd_mm: f64,

    /// Flange outside diameter (mm)
    pub od_mm: f64,

    /// Gasket seating inside diameter (mm)
    pub seating_id_mm: f64,

    /// Gasket seating outside diameter (mm)
    pub seating_od_mm: f64,

    /// Flange gasket factor m
    pub gasket_m: f64,

    /// Flange gasket seating stress y (psi)
    pub gasket_y_psi: f64,

    /// Pass-partition gasket factor m
    pub pass_m: f64,

    /// Pass-partition gasket seating stress y (psi)
    pub pass_y_psi: f64,
}

impl Overrides {
    /// Clear the geometric overrides (BCD, OD, seating diameters),
    /// leaving the gasket factor overrides in place.
    pub fn clear_geometry(&mut self) {
        self.bcd_mm = 0.0;
        self.od_mm = 0.0;
        self.seating_id_mm = 0.0;
        self.seating_od_mm = 0.0;
    }
}

/// One flange joint design: geometry, materials, gasket, loading.
///
/// Immutable per calculation call; the engine reads it and the reference
/// tables and produces a [`CalculationResult`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignInput {
    /// User label for this joint (e.g., "N2 inlet nozzle")
    pub label: String,

    /// Shell inside diameter (mm)
    pub inside_diameter_mm: f64,

    /// Corrosion allowance (mm)
    pub corrosion_allowance_mm: f64,

    /// Shell neck minimum thickness g0 (mm)
    pub g0_mm: f64,

    /// Hub transition thickness g1 (mm); 0 derives it from g0
    pub g1_mm: f64,

    /// Wrench/boss clearance C (mm)
    pub clearance_mm: f64,

    /// Shell-to-gasket gap A (mm)
    pub shell_gap_mm: f64,

    /// Gasket contact width N (mm)
    pub contact_width_mm: f64,

    /// Inner ring width (mm); 0 takes the table minimum
    pub inner_ring_width_mm: f64,

    /// Whether an inner ring is fitted
    pub inner_ring_present: bool,

    /// Outer ring width (mm); 0 takes the table minimum
    pub outer_ring_width_mm: f64,

    /// Whether an outer ring is fitted
    pub outer_ring_present: bool,

    /// Pass-partition strip width (mm); 0 when no partition
    pub pass_width_mm: f64,

    /// Pass-partition strip length (mm)
    pub pass_length_mm: f64,

    /// Bolt selection
    pub bolt: BoltSelection,

    /// Gasket selection
    pub gasket: GasketSelection,

    /// Flange plate material id
    pub plate_material_id: String,

    /// Shell material id
    pub shell_material_id: String,

    /// Loading conditions
    pub loading: LoadingConditions,

    /// Manual overrides (zero sentinel)
    pub overrides: Overrides,

    /// Whether hydraulic bolt tensioners are fitted
    pub hydraulic_tensioning: bool,

    /// PCC-1 alternative stress-selection check; `None` disables it
    pub pcc1: Option<Pcc1Params>,
}

impl DesignInput {
    /// Validate input parameters for consumer-facing entry points.
    ///
    /// The engine itself is total and does not require this; UI layers
    /// call it to reject nonsensical input up front.
    pub fn validate(&self) -> CalcResult<()> {
        if self.inside_diameter_mm <= 0.0 {
            return Err(CalcError::invalid_input(
                "inside_diameter_mm",
                self.inside_diameter_mm.to_string(),
                "Inside diameter must be positive",
            ));
        }
        if self.contact_width_mm <= 0.0 {
            return Err(CalcError::invalid_input(
                "contact_width_mm",
                self.contact_width_mm.to_string(),
                "Gasket contact width must be positive",
            ));
        }
        if self.bolt.count < 4 {
            return Err(CalcError::invalid_input(
                "bolt.count",
                self.bolt.count.to_string(),
                "At least 4 bolts are required",
            ));
        }
        if self.bolt.count % 4 != 0 {
            return Err(CalcError::invalid_input(
                "bolt.count",
                self.bolt.count.to_string(),
                "Bolt count must be a multiple of 4",
            ));
        }
        if self.loading.design_pressure < 0.0 {
            return Err(CalcError::invalid_input(
                "loading.design_pressure",
                self.loading.design_pressure.to_string(),
                "Design pressure cannot be negative",
            ));
        }
        if self.loading.joint_efficiency <= 0.0 || self.loading.joint_efficiency > 1.0 {
            return Err(CalcError::invalid_input(
                "loading.joint_efficiency",
                self.loading.joint_efficiency.to_string(),
                "Joint efficiency must be in (0, 1]",
            ));
        }
        Ok(())
    }
}

/// Everything the engine derives from one [`DesignInput`].
///
/// Recomputed fully on every call - never partially mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationResult {
    /// Design pressure normalized to MPa
    pub pressure_mpa: f64,

    /// Design temperature normalized to °C
    pub temperature_c: f64,

    /// Flange plate allowable stress at design temperature (MPa)
    pub flange_allowable_mpa: f64,

    /// Shell allowable stress at design temperature (MPa)
    pub shell_allowable_mpa: f64,

    /// Resolved flange geometry
    pub geometry: GeometryResult,

    /// Derived gasket dimensions
    pub gasket: GasketResult,

    /// Bolt loads and areas
    pub bolt_load: BoltLoadResult,

    /// PCC-1 check results, when enabled
    pub pcc1: Option<Pcc1Result>,
}

impl CalculationResult {
    /// Overall verdict: pitch in bounds, bolting carries the load, and
    /// the PCC-1 check (when enabled) passes.
    pub fn passes(&self) -> bool {
        self.geometry.pitch_ok
            && self.bolt_load.passes()
            && self.pcc1.as_ref().map_or(true, |p| p.passes)
    }
}

/// Run the full sizing pipeline.
///
/// Pure and total: reads `input` and `tables`, produces a fresh
/// [`CalculationResult`]. Zero denominators yield zero, unmatched table
/// keys fall back to the first row.
pub fn calculate(input: &DesignInput, tables: &ReferenceTables) -> CalculationResult {
    let p = input.loading.pressure_mpa();
    let t = input.loading.temperature_c();

    let shell = tables.shell_materials.lookup(&input.shell_material_id);
    let shell_allowable = shell.curve.stress_at(t);
    let plate = tables.plate_materials.lookup(&input.plate_material_id);
    let flange_allowable = plate.curve.stress_at(t);

    let (geometry, gasket) = geometry::resolve(input, tables, p, shell_allowable);
    let bolt_load = bolt_load::calculate(input, tables, &gasket);

    let pcc1 = input.pcc1.as_ref().map(|params| {
        let bolt = tables.bolts.lookup(&input.bolt.size_label);
        pcc1::check(
            params,
            &gasket,
            bolt.root_area_mm2,
            input.bolt.count,
            p,
            input.pass_width_mm,
            input.pass_length_mm,
        )
    });

    CalculationResult {
        pressure_mpa: p,
        temperature_c: t,
        flange_allowable_mpa: flange_allowable,
        shell_allowable_mpa: shell_allowable,
        geometry,
        gasket,
        bolt_load,
        pcc1,
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::tables::Pcc1Category;

    /// A mid-size spiral-wound joint used across the calculation tests.
    pub(crate) fn base_input() -> DesignInput {
        DesignInput {
            label: "FL-1".to_string(),
            inside_diameter_mm: 300.0,
            corrosion_allowance_mm: 0.0,
            g0_mm: 10.0,
            g1_mm: 0.0,
            clearance_mm: 3.0,
            shell_gap_mm: 5.0,
            contact_width_mm: 15.0,
            inner_ring_width_mm: 0.0,
            inner_ring_present: true,
            outer_ring_width_mm: 0.0,
            outer_ring_present: true,
            pass_width_mm: 10.0,
            pass_length_mm: 250.0,
            bolt: BoltSelection {
                size_label: "3/4".to_string(),
                count: 16,
                material_id: "SA-193 B7".to_string(),
            },
            gasket: GasketSelection {
                gasket_id: "Spiral-wound SS / graphite".to_string(),
                pass_gasket_id: "Compressed fiber, 3.2mm".to_string(),
                facing: FacingSketch::FlatFace,
            },
            plate_material_id: "SA-105".to_string(),
            shell_material_id: "SA-106 B".to_string(),
            loading: LoadingConditions {
                design_pressure: 1.0,
                pressure_unit: PressureUnit::MPa,
                design_temperature: 150.0,
                temperature_unit: TemperatureUnit::Celsius,
                joint_efficiency: 1.0,
            },
            overrides: Overrides::default(),
            hydraulic_tensioning: false,
            pcc1: None,
        }
    }

    #[test]
    fn test_calculate_is_deterministic() {
        let tables = ReferenceTables::builtin();
        let input = base_input();
        let first = calculate(&input, tables);
        let second = calculate(&input, tables);
        assert_eq!(first, second);
        // Bit-identical through serialization as well
        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }

    #[test]
    fn test_calculate_is_total_on_unknown_ids() {
        let tables = ReferenceTables::builtin();
        let mut input = base_input();
        input.bolt.size_label = "no such size".to_string();
        input.bolt.material_id = "no such material".to_string();
        input.gasket.gasket_id = "no such gasket".to_string();
        input.shell_material_id = "no such shell".to_string();
        let result = calculate(&input, tables);
        assert!(result.geometry.bcd_mm > 0.0);
        assert!(result.bolt_load.wm1_n.is_finite());
    }

    #[test]
    fn test_pcc1_runs_only_when_enabled() {
        let tables = ReferenceTables::builtin();
        let mut input = base_input();
        assert!(calculate(&input, tables).pcc1.is_none());

        input.pcc1 = Some(Pcc1Params::from_reference(
            Pcc1Category::SpiralWound,
            &tables.pcc1,
        ));
        let result = calculate(&input, tables);
        assert!(result.pcc1.is_some());
    }

    #[test]
    fn test_unit_normalization_flows_through() {
        let tables = ReferenceTables::builtin();
        let mut input = base_input();
        input.loading.design_pressure = 10.0;
        input.loading.pressure_unit = PressureUnit::Bar;
        input.loading.design_temperature = 302.0;
        input.loading.temperature_unit = TemperatureUnit::Fahrenheit;
        let result = calculate(&input, tables);
        assert!((result.pressure_mpa - 1.0).abs() < 1e-12);
        assert!((result.temperature_c - 150.0).abs() < 1e-9);
    }

    #[test]
    fn test_validate_rejects_bad_counts() {
        let mut input = base_input();
        input.bolt.count = 10;
        assert!(input.validate().is_err());
        input.bolt.count = 16;
        assert!(input.validate().is_ok());
    }

    #[test]
    fn test_input_serialization_round_trip() {
        let input = base_input();
        let json = serde_json::to_string_pretty(&input).unwrap();
        let roundtrip: DesignInput = serde_json::from_str(&json).unwrap();
        assert_eq!(input, roundtrip);
    }
}
