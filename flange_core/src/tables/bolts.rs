//! Bolt Geometry Table
//!
//! Per-nominal-size bolting dimensions used by the geometry resolver and
//! the design-space search: minimum radial spacing, edge distance E,
//! radial distance R, hole diameter, root (tensile stress) area, and the
//! larger minimum spacing required when hydraulic tensioners are fitted.
//!
//! Values are stored in millimetres / mm², converted from the customary
//! imperial bolting tables (heavy hex series, 1/2" through 3").
//!
//! ## Example
//!
//! ```rust
//! use flange_core::tables::bolts::builtin_bolt_table;
//!
//! let table = builtin_bolt_table();
//! let size = table.lookup("3/4");
//! assert!((size.root_area_mm2 - 194.8).abs() < 0.1);
//! ```

use serde::{Deserialize, Serialize};

/// Bolting dimensions for one nominal size.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoltSize {
    /// Nominal size label (e.g., "3/4", "1-1/8")
    pub label: String,

    /// Nominal bolt diameter (mm)
    pub nominal_mm: f64,

    /// Minimum bolt spacing along the bolt circle (mm)
    pub min_spacing_mm: f64,

    /// Edge distance E, bolt-circle to flange OD (mm)
    pub edge_distance_mm: f64,

    /// Radial distance R, hub to bolt-circle (mm)
    pub radial_distance_mm: f64,

    /// Bolt hole diameter (mm)
    pub hole_diameter_mm: f64,

    /// Root / tensile stress area per bolt (mm²)
    pub root_area_mm2: f64,

    /// Minimum spacing when hydraulic tensioners are fitted (mm).
    /// `None` for sizes too small to tension hydraulically.
    pub tensioner_spacing_mm: Option<f64>,

    /// Maximum allowable bolt pitch (mm)
    pub max_pitch_mm: f64,
}

impl BoltSize {
    /// Effective minimum spacing: the table minimum, raised to the
    /// tensioner minimum when hydraulic tensioning is in use.
    pub fn effective_min_spacing_mm(&self, hydraulic_tensioning: bool) -> f64 {
        match (hydraulic_tensioning, self.tensioner_spacing_mm) {
            (true, Some(t)) if t > self.min_spacing_mm => t,
            _ => self.min_spacing_mm,
        }
    }
}

/// Bolt geometry table: a fixed, ordered list of nominal sizes.
///
/// Order matters — the design-space search walks sizes in table order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BoltTable {
    sizes: Vec<BoltSize>,
}

impl BoltTable {
    pub fn new(sizes: Vec<BoltSize>) -> Self {
        BoltTable { sizes }
    }

    /// All sizes, in table order.
    pub fn sizes(&self) -> &[BoltSize] {
        &self.sizes
    }

    /// Look up a size by its nominal label.
    ///
    /// An unmatched label falls back to the first row so the engine
    /// stays total on arbitrary input.
    pub fn lookup(&self, label: &str) -> &BoltSize {
        self.sizes
            .iter()
            .find(|s| s.label == label)
            .unwrap_or(&self.sizes[0])
    }

    /// Index of a size by label, falling back to 0.
    pub fn index_of(&self, label: &str) -> usize {
        self.sizes
            .iter()
            .position(|s| s.label == label)
            .unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.sizes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sizes.is_empty()
    }
}

/// Smallest nominal size considered by the full design-space search.
pub const SEARCH_FLOOR_LABEL: &str = "3/4";

/// Build the builtin bolt geometry table (heavy hex series, 1/2"–3").
pub fn builtin_bolt_table() -> BoltTable {
    // (label, nominal, min spacing, E, R, hole, root area, tensioner spacing, max pitch)
    let rows: [(&str, f64, f64, f64, f64, f64, f64, Option<f64>, f64); 17] = [
        ("1/2", 12.7, 31.8, 15.9, 20.6, 15.9, 81.3, None, 90.0),
        ("5/8", 15.9, 38.1, 19.1, 23.8, 19.1, 130.3, None, 95.0),
        ("3/4", 19.1, 44.5, 20.6, 28.6, 22.2, 194.8, Some(55.0), 100.0),
        ("7/8", 22.2, 52.4, 23.8, 31.8, 25.4, 270.3, Some(63.0), 105.0),
        ("1", 25.4, 57.2, 27.0, 34.9, 28.6, 355.5, Some(70.0), 110.0),
        ("1-1/8", 28.6, 63.5, 28.6, 38.1, 31.8, 469.7, Some(78.0), 120.0),
        ("1-1/4", 31.8, 71.4, 31.8, 44.5, 34.9, 599.4, Some(86.0), 125.0),
        ("1-3/8", 34.9, 77.8, 34.9, 47.6, 38.1, 745.2, Some(94.0), 135.0),
        ("1-1/2", 38.1, 82.6, 38.1, 50.8, 41.3, 906.5, Some(102.0), 140.0),
        ("1-5/8", 41.3, 88.9, 41.3, 54.0, 44.5, 1083.9, Some(108.0), 150.0),
        ("1-3/4", 44.5, 95.3, 44.5, 57.2, 47.6, 1277.4, Some(115.0), 155.0),
        ("1-7/8", 47.6, 101.6, 47.6, 60.3, 50.8, 1483.9, Some(122.0), 165.0),
        ("2", 50.8, 108.0, 50.8, 63.5, 54.0, 1711.0, Some(130.0), 170.0),
        ("2-1/4", 57.2, 120.7, 57.2, 69.9, 60.3, 2208.4, Some(145.0), 180.0),
        ("2-1/2", 63.5, 133.4, 63.5, 77.8, 66.7, 2769.0, Some(160.0), 195.0),
        ("2-3/4", 69.9, 146.1, 69.9, 85.7, 73.0, 3392.9, Some(175.0), 205.0),
        ("3", 76.2, 158.8, 76.2, 92.1, 79.4, 4080.0, Some(190.0), 215.0),
    ];

    let sizes = rows
        .into_iter()
        .map(
            |(label, nominal, spacing, e, r, hole, area, tensioner, max_pitch)| BoltSize {
                label: label.to_string(),
                nominal_mm: nominal,
                min_spacing_mm: spacing,
                edge_distance_mm: e,
                radial_distance_mm: r,
                hole_diameter_mm: hole,
                root_area_mm2: area,
                tensioner_spacing_mm: tensioner,
                max_pitch_mm: max_pitch,
            },
        )
        .collect();

    BoltTable::new(sizes)
}
