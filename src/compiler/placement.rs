//! Placement engine: allocates grid tracks and anchors compiled keys.
//!
//! Both regular and error layouts are built through [`PlacementEngine`], so
//! there is a single code path producing [`PlacementGrid`]s.

use crate::models::{
    CompiledKey, GridLength, LayoutFlags, OutputRow, Placement, PlacementGrid, Thickness,
};

/// Builder for a [`PlacementGrid`].
#[derive(Debug)]
pub struct PlacementEngine {
    grid: PlacementGrid,
}

impl PlacementEngine {
    /// Allocates `rows` x `cols` equally sized tracks.
    ///
    /// With `show_output_panel` set, the output row stays visible and the key
    /// grid takes a star weight equal to `rows`. Otherwise the output row
    /// collapses to zero height.
    #[must_use]
    pub fn new(rows: i32, cols: i32, show_output_panel: bool) -> Self {
        let row_count = usize::try_from(rows).unwrap_or(0);
        let col_count = usize::try_from(cols).unwrap_or(0);

        let (output_row, keys_height) = if show_output_panel {
            (
                OutputRow {
                    visible: true,
                    height: GridLength::Star(1.0),
                },
                GridLength::Star(f64::from(rows)),
            )
        } else {
            (
                OutputRow {
                    visible: false,
                    height: GridLength::Pixel(0.0),
                },
                GridLength::Star(1.0),
            )
        };

        Self {
            grid: PlacementGrid::new(
                vec![GridLength::default(); row_count],
                vec![GridLength::default(); col_count],
                output_row,
                keys_height,
            ),
        }
    }

    /// Allocates tracks for a validated definition and applies its flags.
    #[must_use]
    pub fn for_definition(rows: i32, cols: i32, flags: &LayoutFlags) -> Self {
        Self::new(rows, cols, flags.show_output_panel).with_border(flags.border_thickness)
    }

    /// Overrides the keyboard border thickness.
    #[must_use]
    pub fn with_border(mut self, thickness: Option<Thickness>) -> Self {
        if let Some(thickness) = thickness {
            tracing::info!("Setting border thickness for custom keyboard: {}", thickness);
            self.grid.border_thickness = Some(thickness);
        }
        self
    }

    /// Anchors `key` at `(row, col)` using the key's own spans.
    ///
    /// Returns the key previously anchored at the same cell, if any.
    pub fn place(&mut self, key: CompiledKey, row: i32, col: i32) -> Option<CompiledKey> {
        let placement = Placement {
            row_span: key.row_span,
            col_span: key.col_span,
            key,
            row,
            col,
        };

        let displaced = self.grid.insert(placement);
        if displaced.is_some() {
            tracing::warn!("Replaced key already anchored at ({}, {})", row, col);
        }
        displaced.map(|placement| placement.key)
    }

    /// Finishes placement and returns the grid.
    #[must_use]
    pub fn finish(self) -> PlacementGrid {
        self.grid
    }
}
