//! # Error Types
//!
//! Structured error types for flange_core. The sizing engine itself is a
//! total function and never returns these (see [`crate::calculations`]);
//! they cover input validation, record-store access, and serialization,
//! giving consumers enough context to fix issues programmatically.
//!
//! ## Example
//!
//! ```rust
//! use flange_core::errors::{CalcError, CalcResult};
//!
//! fn validate_bore(inside_diameter_mm: f64) -> CalcResult<()> {
//!     if inside_diameter_mm <= 0.0 {
//!         return Err(CalcError::invalid_input(
//!             "inside_diameter_mm",
//!             inside_diameter_mm.to_string(),
//!             "Inside diameter must be positive",
//!         ));
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for flange_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for engine-adjacent operations.
///
/// Each variant provides specific context about what went wrong, enabling
/// programmatic handling by UI layers and other consumers.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// An input value is invalid (out of range, wrong sign, etc.)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// A reference-table lookup failed for a consumer that requires an
    /// exact match (the engine itself falls back to the first row instead)
    #[error("Lookup failed in table '{table}' for key '{key}'")]
    TableLookupFailed { table: String, key: String },

    /// Saved record not found in the store
    #[error("Record not found: {id}")]
    RecordNotFound { id: String },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },
}

impl CalcError {
    /// Create an InvalidInput error
    pub fn invalid_input(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        CalcError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a TableLookupFailed error
    pub fn table_lookup_failed(table: impl Into<String>, key: impl Into<String>) -> Self {
        CalcError::TableLookupFailed {
            table: table.into(),
            key: key.into(),
        }
    }

    /// Create a RecordNotFound error
    pub fn record_not_found(id: impl Into<String>) -> Self {
        CalcError::RecordNotFound { id: id.into() }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::InvalidInput { .. } => "INVALID_INPUT",
            CalcError::TableLookupFailed { .. } => "TABLE_LOOKUP_FAILED",
            CalcError::RecordNotFound { .. } => "RECORD_NOT_FOUND",
            CalcError::SerializationError { .. } => "SERIALIZATION_ERROR",
        }
    }
}
