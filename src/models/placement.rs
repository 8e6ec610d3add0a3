//! Placement grid produced for the rendering layer.

use crate::models::{CompiledKey, Thickness};
use serde::{Deserialize, Serialize};

/// Size of one grid track.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GridLength {
    /// Proportional share of the remaining space
    Star(f64),
    /// Fixed size in device-independent pixels
    Pixel(f64),
}

impl Default for GridLength {
    fn default() -> Self {
        Self::Star(1.0)
    }
}

/// Auxiliary output row shown above the key grid.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OutputRow {
    /// Whether the output panel is shown
    pub visible: bool,
    /// Height of the output row
    pub height: GridLength,
}

/// One key placed at its anchor cell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    /// Compiled key
    pub key: CompiledKey,
    /// Anchor row
    pub row: i32,
    /// Anchor column
    pub col: i32,
    /// Rows covered
    pub row_span: i32,
    /// Columns covered
    pub col_span: i32,
}

impl Placement {
    /// Anchor cell as `(row, col)`.
    #[must_use]
    pub const fn anchor(&self) -> (i32, i32) {
        (self.row, self.col)
    }
}

/// Grid tracks plus placed keys.
///
/// # Invariants
///
/// - At most one placement per anchor cell
/// - Placements are kept ordered by anchor, so insertion order never shows
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacementGrid {
    /// Row tracks of the key grid
    pub row_defs: Vec<GridLength>,
    /// Column tracks of the key grid
    pub col_defs: Vec<GridLength>,
    /// Output panel row
    pub output_row: OutputRow,
    /// Height of the key grid relative to the output row
    pub keys_height: GridLength,
    /// Border override for the whole keyboard
    pub border_thickness: Option<Thickness>,
    placements: Vec<Placement>,
}

impl PlacementGrid {
    /// Creates an empty grid with the given tracks.
    #[must_use]
    pub fn new(
        row_defs: Vec<GridLength>,
        col_defs: Vec<GridLength>,
        output_row: OutputRow,
        keys_height: GridLength,
    ) -> Self {
        Self {
            row_defs,
            col_defs,
            output_row,
            keys_height,
            border_thickness: None,
            placements: Vec::new(),
        }
    }

    /// Places a key, returning the placement it displaced at the same anchor.
    pub fn insert(&mut self, placement: Placement) -> Option<Placement> {
        match self
            .placements
            .binary_search_by_key(&placement.anchor(), Placement::anchor)
        {
            Ok(idx) => Some(std::mem::replace(&mut self.placements[idx], placement)),
            Err(idx) => {
                self.placements.insert(idx, placement);
                None
            }
        }
    }

    /// All placements, ordered by anchor.
    #[must_use]
    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }

    /// Placement anchored at `(row, col)`.
    #[must_use]
    pub fn placement_at(&self, row: i32, col: i32) -> Option<&Placement> {
        self.placements
            .binary_search_by_key(&(row, col), Placement::anchor)
            .ok()
            .map(|idx| &self.placements[idx])
    }

    /// Number of row tracks.
    #[must_use]
    pub fn rows(&self) -> usize {
        self.row_defs.len()
    }

    /// Number of column tracks.
    #[must_use]
    pub fn cols(&self) -> usize {
        self.col_defs.len()
    }
}
