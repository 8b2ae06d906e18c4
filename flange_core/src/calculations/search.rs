//! # Design-Space Search
//!
//! Brute-force search over the discrete (bolt size × bolt count) grid.
//! Every cell re-runs the full sizing pipeline with auto-derived
//! geometry; feasible cells must keep the bolt pitch inside its spacing
//! bounds and carry the governing load with non-negative margin. Among
//! feasible cells the smallest required load wins, first-found on ties.
//!
//! The grid is bounded (≤ ~20 sizes × 20 counts) and evaluated in a
//! deterministic order: sizes in table order, counts ascending.

use serde::{Deserialize, Serialize};

use crate::calculations::{calculate, DesignInput};
use crate::tables::{ReferenceTables, SEARCH_FLOOR_LABEL};

/// Candidate bolt counts: multiples of four, 4 through 80.
pub const BOLT_COUNTS: [u32; 20] = [
    4, 8, 12, 16, 20, 24, 28, 32, 36, 40, 44, 48, 52, 56, 60, 64, 68, 72, 76, 80,
];

/// Outcome of a design-space search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchOutcome {
    /// Whether any feasible (size, count) pair was found
    pub found: bool,

    /// Winning bolt size label (empty when not found)
    pub size_label: String,

    /// Winning bolt count (0 when not found)
    pub bolt_count: u32,

    /// Governing required load max(Wm1, Wm2) of the winner (N)
    pub required_load_n: f64,

    /// Load margin of the winner (N)
    pub margin_n: f64,
}

impl SearchOutcome {
    fn not_found() -> Self {
        SearchOutcome {
            found: false,
            size_label: String::new(),
            bolt_count: 0,
            required_load_n: 0.0,
            margin_n: 0.0,
        }
    }
}

/// Search the (size, count) grid for the minimal-required-load feasible
/// configuration.
///
/// With `fixed_size` only the input's current size is considered;
/// otherwise every table size at or above the practical floor. The
/// search always evaluates auto-derived geometry (geometric overrides
/// cleared per cell). On success the input's bolt size and count are
/// replaced by the winner and its geometric overrides are cleared; on
/// failure the input is left untouched.
pub fn search(
    input: &mut DesignInput,
    fixed_size: bool,
    tables: &ReferenceTables,
) -> SearchOutcome {
    let size_indices: Vec<usize> = if fixed_size {
        vec![tables.bolts.index_of(&input.bolt.size_label)]
    } else {
        let floor = tables.bolts.index_of(SEARCH_FLOOR_LABEL);
        (floor..tables.bolts.len()).collect()
    };

    let mut candidate = input.clone();
    candidate.overrides.clear_geometry();

    let mut best: Option<SearchOutcome> = None;

    for &size_index in &size_indices {
        let size = &tables.bolts.sizes()[size_index];
        for &count in &BOLT_COUNTS {
            candidate.bolt.size_label = size.label.clone();
            candidate.bolt.count = count;

            let result = calculate(&candidate, tables);
            let feasible = result.geometry.pitch_ok && result.bolt_load.margin_n >= 0.0;
            if !feasible {
                continue;
            }

            let required = result.bolt_load.required_load_n;
            let improves = match &best {
                Some(b) => required < b.required_load_n,
                None => true,
            };
            if improves {
                best = Some(SearchOutcome {
                    found: true,
                    size_label: size.label.clone(),
                    bolt_count: count,
                    required_load_n: required,
                    margin_n: result.bolt_load.margin_n,
                });
            }
        }
    }

    match best {
        Some(outcome) => {
            input.bolt.size_label = outcome.size_label.clone();
            input.bolt.count = outcome.bolt_count;
            input.overrides.clear_geometry();
            outcome
        }
        None => SearchOutcome::not_found(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculations::tests::base_input;

    #[test]
    fn test_search_finds_feasible_configuration() {
        let tables = ReferenceTables::builtin();
        let mut input = base_input();
        let outcome = search(&mut input, false, tables);
        assert!(outcome.found);
        assert_eq!(input.bolt.size_label, outcome.size_label);
        assert_eq!(input.bolt.count, outcome.bolt_count);
        assert!(outcome.margin_n >= 0.0);
    }

    #[test]
    fn test_winner_re_evaluates_as_feasible() {
        let tables = ReferenceTables::builtin();
        let mut input = base_input();
        let outcome = search(&mut input, false, tables);
        assert!(outcome.found);

        // Independent re-evaluation of the mutated input must satisfy
        // both feasibility constraints
        let result = calculate(&input, tables);
        assert!(result.geometry.pitch_ok);
        assert!(result.bolt_load.margin_n >= 0.0);
        assert!((result.bolt_load.required_load_n - outcome.required_load_n).abs() < 1e-6);
    }

    #[test]
    fn test_fixed_size_never_changes_size() {
        let tables = ReferenceTables::builtin();
        let mut input = base_input();
        input.bolt.size_label = "1".to_string();
        let outcome = search(&mut input, true, tables);
        if outcome.found {
            assert_eq!(outcome.size_label, "1");
            assert_eq!(input.bolt.size_label, "1");
        } else {
            // Input untouched on failure
            assert_eq!(input.bolt.size_label, "1");
        }
    }

    #[test]
    fn test_search_clears_geometry_overrides_on_success() {
        let tables = ReferenceTables::builtin();
        let mut input = base_input();
        input.overrides.bcd_mm = 999.0;
        input.overrides.seating_od_mm = 555.0;
        input.overrides.gasket_m = 4.0;
        let outcome = search(&mut input, false, tables);
        assert!(outcome.found);
        assert_eq!(input.overrides.bcd_mm, 0.0);
        assert_eq!(input.overrides.seating_od_mm, 0.0);
        // Gasket factor overrides are not geometric and survive
        assert_eq!(input.overrides.gasket_m, 4.0);
    }

    #[test]
    fn test_infeasible_problem_leaves_input_unchanged() {
        let tables = ReferenceTables::builtin();
        let mut input = base_input();
        // An absurd pressure no bolting in the table can carry
        input.loading.design_pressure = 1.0e6;
        let before = input.clone();
        let outcome = search(&mut input, false, tables);
        assert!(!outcome.found);
        assert_eq!(input, before);
    }

    #[test]
    fn test_search_minimizes_required_load() {
        let tables = ReferenceTables::builtin();
        let mut input = base_input();
        let outcome = search(&mut input, false, tables);
        assert!(outcome.found);

        // No feasible grid cell has a strictly smaller required load
        let floor = tables.bolts.index_of(SEARCH_FLOOR_LABEL);
        let mut probe = base_input();
        probe.overrides.clear_geometry();
        for size in &tables.bolts.sizes()[floor..] {
            for &count in &BOLT_COUNTS {
                probe.bolt.size_label = size.label.clone();
                probe.bolt.count = count;
                let result = calculate(&probe, tables);
                if result.geometry.pitch_ok && result.bolt_load.margin_n >= 0.0 {
                    assert!(
                        result.bolt_load.required_load_n >= outcome.required_load_n - 1e-6
                    );
                }
            }
        }
    }
}
