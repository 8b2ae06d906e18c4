//! Gasket Tables
//!
//! Gasket m/y factor rows, ring-width minima by shell bore, facing-sketch
//! categories, and the PCC-1 reference stress rows used to pre-fill the
//! alternative stress-selection check.
//!
//! Seating stress y is tabulated in psi, as published; the bolt-load
//! calculator converts it to MPa before use. All lengths are mm.

use serde::{Deserialize, Serialize};

/// Facing-sketch category controlling the basic gasket width formula.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FacingSketch {
    /// Flat or raised face (sketches 1a/1b)
    #[default]
    FlatFace,
    /// Grooved face (sketch 1c/1d)
    Groove,
    /// Tongue and groove (sketch 5)
    TongueAndGroove,
    /// Flat face with nubbin (sketch 2)
    FlatWithNubbin,
    /// Ring joint (sketch 6)
    RingJoint,
}

impl FacingSketch {
    /// Basic gasket seating width b0 for a contact width N (mm).
    pub fn basic_width_mm(self, contact_width_mm: f64) -> f64 {
        match self {
            FacingSketch::TongueAndGroove | FacingSketch::FlatWithNubbin => {
                contact_width_mm / 4.0
            }
            FacingSketch::RingJoint => contact_width_mm / 8.0,
            FacingSketch::FlatFace | FacingSketch::Groove => contact_width_mm / 2.0,
        }
    }
}

/// Gasket material factor row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GasketFactor {
    /// Gasket type id (e.g., "Spiral-wound SS / graphite")
    pub id: String,

    /// Gasket maintenance factor m (dimensionless)
    pub m: f64,

    /// Minimum seating stress y (psi, as published)
    pub y_psi: f64,

    /// Facing-sketch description for this gasket family
    pub facing: String,
}

/// Gasket factor table, ordered as published.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GasketTable {
    factors: Vec<GasketFactor>,
}

impl GasketTable {
    pub fn new(factors: Vec<GasketFactor>) -> Self {
        GasketTable { factors }
    }

    pub fn factors(&self) -> &[GasketFactor] {
        &self.factors
    }

    /// Look up a gasket by id, falling back to the first row.
    pub fn lookup(&self, id: &str) -> &GasketFactor {
        self.factors
            .iter()
            .find(|g| g.id == id)
            .unwrap_or(&self.factors[0])
    }
}

/// Minimum retaining-ring widths for a shell bore range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RingWidthRow {
    /// Upper bound of the shell inside-diameter range (mm); `None` = unbounded
    pub max_shell_id_mm: Option<f64>,

    /// Minimum inner ring width (mm)
    pub inner_mm: f64,

    /// Minimum outer ring width (mm)
    pub outer_mm: f64,
}

/// Ring-width table keyed by shell inside-diameter range.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RingWidthTable {
    rows: Vec<RingWidthRow>,
}

impl RingWidthTable {
    pub fn new(rows: Vec<RingWidthRow>) -> Self {
        RingWidthTable { rows }
    }

    pub fn rows(&self) -> &[RingWidthRow] {
        &self.rows
    }

    /// Row for a given shell inside diameter. The final unbounded row
    /// catches everything above the tabulated ranges.
    pub fn lookup(&self, shell_id_mm: f64) -> &RingWidthRow {
        self.rows
            .iter()
            .find(|r| match r.max_shell_id_mm {
                Some(max) => shell_id_mm <= max,
                None => true,
            })
            .unwrap_or(&self.rows[0])
    }
}

/// Gasket category for PCC-1 reference stresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Pcc1Category {
    #[default]
    SpiralWound,
    SheetFiber,
    Ptfe,
    FlexibleGraphite,
    RingJoint,
}

/// PCC-1 reference stresses for one gasket category (MPa).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pcc1RefStress {
    pub category: Pcc1Category,

    /// Default target assembly (seating) gasket stress
    pub target_seating_mpa: f64,

    /// Minimum gasket stress at seating, Sg(min-S)
    pub sg_min_seating_mpa: f64,

    /// Minimum gasket stress in operation, Sg(min-O)
    pub sg_min_operating_mpa: f64,

    /// Maximum gasket stress, Sg(max)
    pub sg_max_mpa: f64,
}

/// PCC-1 reference stress table keyed by gasket category.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Pcc1Table {
    rows: Vec<Pcc1RefStress>,
}

impl Pcc1Table {
    pub fn new(rows: Vec<Pcc1RefStress>) -> Self {
        Pcc1Table { rows }
    }

    pub fn rows(&self) -> &[Pcc1RefStress] {
        &self.rows
    }

    /// Row for a gasket category, falling back to the first row.
    pub fn lookup(&self, category: Pcc1Category) -> &Pcc1RefStress {
        self.rows
            .iter()
            .find(|r| r.category == category)
            .unwrap_or(&self.rows[0])
    }
}

/// Build the builtin gasket factor table.
pub fn builtin_gasket_table() -> GasketTable {
    let rows: [(&str, f64, f64, &str); 11] = [
        ("Rubber, below 75A", 0.50, 0.0, "Flat face"),
        ("Rubber, 75A and above", 1.00, 200.0, "Flat face"),
        ("Compressed fiber, 3.2mm", 2.00, 1600.0, "Flat face"),
        ("Compressed fiber, 1.6mm", 2.75, 3700.0, "Flat face"),
        ("PTFE sheet, 3.2mm", 2.50, 2500.0, "Flat face"),
        ("Spiral-wound SS / graphite", 3.00, 10000.0, "Raised face"),
        ("Corrugated metal, soft steel", 3.00, 4500.0, "Flat face"),
        ("Flat metal jacketed, soft steel", 3.75, 9000.0, "Flat face"),
        ("Grooved metal, soft steel", 3.25, 5500.0, "Grooved face"),
        ("Solid flat metal, soft steel", 5.50, 18000.0, "Flat face"),
        ("Ring joint, soft steel", 6.50, 26000.0, "Ring joint"),
    ];
    GasketTable::new(
        rows.into_iter()
            .map(|(id, m, y, facing)| GasketFactor {
                id: id.to_string(),
                m,
                y_psi: y,
                facing: facing.to_string(),
            })
            .collect(),
    )
}

/// Build the builtin ring-width table.
pub fn builtin_ring_width_table() -> RingWidthTable {
    RingWidthTable::new(vec![
        RingWidthRow {
            max_shell_id_mm: Some(300.0),
            inner_mm: 9.5,
            outer_mm: 9.5,
        },
        RingWidthRow {
            max_shell_id_mm: Some(600.0),
            inner_mm: 12.7,
            outer_mm: 12.7,
        },
        RingWidthRow {
            max_shell_id_mm: Some(900.0),
            inner_mm: 15.9,
            outer_mm: 15.9,
        },
        RingWidthRow {
            max_shell_id_mm: Some(1500.0),
            inner_mm: 19.1,
            outer_mm: 19.1,
        },
        RingWidthRow {
            max_shell_id_mm: None,
            inner_mm: 22.2,
            outer_mm: 22.2,
        },
    ])
}

/// Build the builtin PCC-1 reference stress table.
pub fn builtin_pcc1_table() -> Pcc1Table {
    let rows = [
        (Pcc1Category::SpiralWound, 124.0, 48.0, 34.0, 206.0),
        (Pcc1Category::SheetFiber, 55.0, 35.0, 21.0, 83.0),
        (Pcc1Category::Ptfe, 48.0, 28.0, 21.0, 69.0),
        (Pcc1Category::FlexibleGraphite, 69.0, 28.0, 21.0, 137.0),
        (Pcc1Category::RingJoint, 152.0, 55.0, 41.0, 345.0),
    ];
    Pcc1Table::new(
        rows.into_iter()
            .map(
                |(category, target, min_s, min_o, max)| Pcc1RefStress {
                    category,
                    target_seating_mpa: target,
                    sg_min_seating_mpa: min_s,
                    sg_min_operating_mpa: min_o,
                    sg_max_mpa: max,
                },
            )
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_width_by_facing() {
        assert_eq!(FacingSketch::FlatFace.basic_width_mm(20.0), 10.0);
        assert_eq!(FacingSketch::Groove.basic_width_mm(20.0), 10.0);
        assert_eq!(FacingSketch::TongueAndGroove.basic_width_mm(20.0), 5.0);
        assert_eq!(FacingSketch::FlatWithNubbin.basic_width_mm(20.0), 5.0);
        assert_eq!(FacingSketch::RingJoint.basic_width_mm(20.0), 2.5);
    }

    #[test]
    fn test_gasket_lookup_and_fallback() {
        let table = builtin_gasket_table();
        let spiral = table.lookup("Spiral-wound SS / graphite");
        assert_eq!(spiral.m, 3.0);
        assert_eq!(spiral.y_psi, 10000.0);

        let fallback = table.lookup("no such gasket");
        assert_eq!(fallback.id, "Rubber, below 75A");
    }

    #[test]
    fn test_ring_width_ranges() {
        let table = builtin_ring_width_table();
        assert_eq!(table.lookup(250.0).inner_mm, 9.5);
        assert_eq!(table.lookup(300.0).inner_mm, 9.5);
        assert_eq!(table.lookup(301.0).inner_mm, 12.7);
        assert_eq!(table.lookup(5000.0).inner_mm, 22.2);
    }

    #[test]
    fn test_pcc1_lookup() {
        let table = builtin_pcc1_table();
        let graphite = table.lookup(Pcc1Category::FlexibleGraphite);
        assert_eq!(graphite.sg_max_mpa, 137.0);
        assert_eq!(table.lookup(Pcc1Category::SpiralWound).target_seating_mpa, 124.0);
    }
}
