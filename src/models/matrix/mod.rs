// Placement matrix module
// Collision-resolved grid assigning each event to a row/column slot

use serde::{Deserialize, Serialize};

use crate::models::event::EventViewModel;

/// A single column slot in a placement row: either an event or an empty
/// marker. Empty slots keep the column indices of the remaining events
/// stable, so they matter for layout even though nothing is rendered there.
pub type Slot = Option<EventViewModel>;

/// One row-grouping of simultaneous events, partitioned into non-overlapping
/// visual columns by an upstream collision-resolution step.
///
/// Rows may have different lengths; the widest row determines the column
/// width for the whole matrix.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlacementMatrix {
    pub rows: Vec<Vec<Slot>>,
}

impl PlacementMatrix {
    pub fn new(rows: Vec<Vec<Slot>>) -> Self {
        Self { rows }
    }

    /// Width in slots of the widest row. Zero for an empty matrix.
    pub fn max_row_length(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// Number of populated slots across all rows.
    pub fn event_count(&self) -> usize {
        self.rows
            .iter()
            .map(|row| row.iter().filter(|slot| slot.is_some()).count())
            .sum()
    }

    /// Iterate over populated slots as `(row, column, event)`.
    pub fn events(&self) -> impl Iterator<Item = (usize, usize, &EventViewModel)> {
        self.rows.iter().enumerate().flat_map(|(row_idx, row)| {
            row.iter()
                .enumerate()
                .filter_map(move |(col_idx, slot)| slot.as_ref().map(|ev| (row_idx, col_idx, ev)))
        })
    }
}
