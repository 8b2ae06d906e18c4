//! # flange_core - Bolted Flange Joint Sizing Engine
//!
//! `flange_core` sizes bolted flange joints per pressure-vessel design
//! rules: the ASME-style bolt-load method plus an optional PCC-1-style
//! alternative bolt-stress selection check. All inputs and outputs are
//! JSON-serializable, making the engine easy to drive from any UI layer.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: `calculate(input, tables) -> result` is a pure,
//!   total, deterministic function - no hidden state, no failure paths
//!   for valid table data
//! - **JSON-First**: every public type implements Serialize/Deserialize
//! - **Tables are data**: bolt geometry, material stress curves and
//!   gasket factors are read-only lookup structures supplied to the
//!   engine, never computed by it
//!
//! ## Quick Start
//!
//! ```rust
//! use flange_core::{calculate, search, ReferenceTables};
//! # use flange_core::calculations::{BoltSelection, DesignInput, GasketSelection,
//! #     LoadingConditions, Overrides};
//! # use flange_core::tables::FacingSketch;
//! # use flange_core::units::{PressureUnit, TemperatureUnit};
//!
//! let tables = ReferenceTables::builtin();
//! # let mut input = DesignInput {
//! #     label: "demo".into(),
//! #     inside_diameter_mm: 300.0,
//! #     corrosion_allowance_mm: 0.0,
//! #     g0_mm: 10.0,
//! #     g1_mm: 0.0,
//! #     clearance_mm: 3.0,
//! #     shell_gap_mm: 5.0,
//! #     contact_width_mm: 15.0,
//! #     inner_ring_width_mm: 0.0,
//! #     inner_ring_present: true,
//! #     outer_ring_width_mm: 0.0,
//! #     outer_ring_present: true,
//! #     pass_width_mm: 0.0,
//! #     pass_length_mm: 0.0,
//! #     bolt: BoltSelection {
//! #         size_label: "3/4".into(),
//! #         count: 16,
//! #         material_id: "SA-193 B7".into(),
//! #     },
//! #     gasket: GasketSelection {
//! #         gasket_id: "Spiral-wound SS / graphite".into(),
//! #         pass_gasket_id: "Compressed fiber, 3.2mm".into(),
//! #         facing: FacingSketch::FlatFace,
//! #     },
//! #     plate_material_id: "SA-105".into(),
//! #     shell_material_id: "SA-106 B".into(),
//! #     loading: LoadingConditions {
//! #         design_pressure: 1.0,
//! #         pressure_unit: PressureUnit::MPa,
//! #         design_temperature: 150.0,
//! #         temperature_unit: TemperatureUnit::Celsius,
//! #         joint_efficiency: 1.0,
//! #     },
//! #     overrides: Overrides::default(),
//! #     hydraulic_tensioning: false,
//! #     pcc1: None,
//! # };
//! let result = calculate(&input, tables);
//! println!("BCD = {} mm", result.geometry.bcd_mm);
//!
//! let outcome = search(&mut input, false, tables);
//! if outcome.found {
//!     println!("{} x {} bolts", outcome.bolt_count, outcome.size_label);
//! }
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - the sizing pipeline: geometry, gasket, bolt
//!   loads, PCC-1 check, design-space search
//! - [`tables`] - read-only reference tables (bolts, materials, gaskets)
//! - [`units`] - pressure/temperature normalization to MPa and °C
//! - [`records`] - in-memory saved-record store
//! - [`errors`] - structured error types

pub mod calculations;
pub mod errors;
pub mod records;
pub mod tables;
pub mod units;

// Re-export the engine boundary at crate root for convenience
pub use calculations::{calculate, search, CalculationResult, DesignInput, SearchOutcome};
pub use errors::{CalcError, CalcResult};
pub use records::{RecordStore, SavedRecord};
pub use tables::ReferenceTables;
