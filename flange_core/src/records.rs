//! # Saved Records
//!
//! An in-memory list of saved flange designs: each record snapshots a
//! [`DesignInput`] together with a frozen summary of its calculation
//! result. Records are created on explicit save, changed only by
//! explicit edit-and-resave, and destroyed on explicit delete.
//!
//! This is a plain data sink for list/table consumers - it never
//! recomputes engine results, it only stores what the engine produced.
//!
//! ## Example
//!
//! ```rust,ignore
//! use flange_core::records::RecordStore;
//! use flange_core::{calculate, ReferenceTables};
//!
//! let tables = ReferenceTables::builtin();
//! let result = calculate(&input, tables);
//!
//! let mut store = RecordStore::new();
//! let id = store.save(input, &result);
//! println!("{} records", store.len());
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::calculations::{CalculationResult, DesignInput};
use crate::errors::{CalcError, CalcResult};

/// Frozen subset of a [`CalculationResult`] kept with a saved record.
///
/// Enough for a records list/table to display without re-running the
/// engine; the full result is recomputed on demand from the input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordSummary {
    /// Final bolt-circle diameter (mm)
    pub bcd_mm: f64,

    /// Final flange outside diameter (mm)
    pub od_mm: f64,

    /// Gasket seating OD (mm)
    pub seating_od_mm: f64,

    /// Operating bolt load Wm1 (N)
    pub wm1_n: f64,

    /// Seating bolt load Wm2 (N)
    pub wm2_n: f64,

    /// Required bolt area (mm²)
    pub required_area_mm2: f64,

    /// Available bolt area (mm²)
    pub available_area_mm2: f64,

    /// Load margin (N)
    pub margin_n: f64,

    /// Overall verdict at save time
    pub passes: bool,
}

impl RecordSummary {
    /// Freeze the display subset of a calculation result.
    pub fn from_result(result: &CalculationResult) -> Self {
        RecordSummary {
            bcd_mm: result.geometry.bcd_mm,
            od_mm: result.geometry.od_mm,
            seating_od_mm: result.gasket.seating_od_mm,
            wm1_n: result.bolt_load.wm1_n,
            wm2_n: result.bolt_load.wm2_n,
            required_area_mm2: result.bolt_load.required_area_mm2,
            available_area_mm2: result.bolt_load.available_area_mm2,
            margin_n: result.bolt_load.margin_n,
            passes: result.passes(),
        }
    }
}

/// A saved design: input snapshot plus frozen result summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedRecord {
    /// Stable record id
    pub id: Uuid,

    /// Creation timestamp
    pub created: DateTime<Utc>,

    /// Last-modified timestamp
    pub modified: DateTime<Utc>,

    /// The design input as saved
    pub input: DesignInput,

    /// Frozen result summary as saved
    pub summary: RecordSummary,
}

/// Ordered in-memory store of saved records.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecordStore {
    records: Vec<SavedRecord>,
}

impl RecordStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Save a new record; returns its id.
    pub fn save(&mut self, input: DesignInput, result: &CalculationResult) -> Uuid {
        let now = Utc::now();
        let record = SavedRecord {
            id: Uuid::new_v4(),
            created: now,
            modified: now,
            input,
            summary: RecordSummary::from_result(result),
        };
        let id = record.id;
        self.records.push(record);
        id
    }

    /// Get a record by id.
    pub fn get(&self, id: Uuid) -> Option<&SavedRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    /// Replace a record's input and summary (edit-and-resave).
    pub fn update(
        &mut self,
        id: Uuid,
        input: DesignInput,
        result: &CalculationResult,
    ) -> CalcResult<()> {
        let record = self
            .records
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| CalcError::record_not_found(id.to_string()))?;
        record.input = input;
        record.summary = RecordSummary::from_result(result);
        record.modified = Utc::now();
        Ok(())
    }

    /// Delete a record by id, returning it.
    pub fn remove(&mut self, id: Uuid) -> CalcResult<SavedRecord> {
        let index = self
            .records
            .iter()
            .position(|r| r.id == id)
            .ok_or_else(|| CalcError::record_not_found(id.to_string()))?;
        Ok(self.records.remove(index))
    }

    /// All records, in save order.
    pub fn list(&self) -> &[SavedRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Serialize the whole store to pretty JSON.
    pub fn to_json(&self) -> CalcResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| CalcError::SerializationError {
            reason: e.to_string(),
        })
    }

    /// Rebuild a store from JSON produced by [`to_json`](Self::to_json).
    pub fn from_json(json: &str) -> CalcResult<Self> {
        serde_json::from_str(json).map_err(|e| CalcError::SerializationError {
            reason: e.to_string(),
        })
    }
}
