//! Structural validation of parsed definitions.
//!
//! Checks run in a fixed order and the first failure wins:
//!
//! 1. A grid element is present
//! 2. At least one key is defined, across all categories
//! 3. The grid has at least one row and one column
//! 4. No two keys share an anchor cell
//!
//! Only anchor cells are compared. Keys whose spans overlap but whose anchors
//! differ pass validation.

use crate::constants::{HEADING_BAD_GRID, HEADING_DUPLICATES, HEADING_INVALID_FILE};
use crate::models::{Definition, Grid, KeySpec};
use std::collections::HashMap;
use std::fmt;

/// Keys sharing one anchor cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnchorConflict {
    /// Shared anchor row
    pub row: i32,
    /// Shared anchor column
    pub col: i32,
    /// Identifier of each key at the anchor, in definition order
    pub keys: Vec<String>,
}

impl fmt::Display for AnchorConflict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}, {})", self.keys.join(", "), self.row, self.col)
    }
}

/// Fatal structural problem in a definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The definition has no grid element
    MissingGrid,
    /// No category holds any key
    EmptyKeys,
    /// Rows or columns are below 1
    InvalidDimension {
        /// Declared rows
        rows: i32,
        /// Declared columns
        cols: i32,
    },
    /// Two or more keys share an anchor cell
    DuplicatePlacement {
        /// Each group of conflicting keys
        conflicts: Vec<AnchorConflict>,
    },
}

impl ValidationError {
    /// Short heading for the error layout.
    #[must_use]
    pub const fn heading(&self) -> &'static str {
        match self {
            Self::MissingGrid | Self::EmptyKeys => HEADING_INVALID_FILE,
            Self::InvalidDimension { .. } => HEADING_BAD_GRID,
            Self::DuplicatePlacement { .. } => HEADING_DUPLICATES,
        }
    }

    /// Detail message for the error layout.
    #[must_use]
    pub fn detail(&self) -> String {
        match self {
            Self::MissingGrid => "No grid definition found".to_string(),
            Self::EmptyKeys => "No key definitions found".to_string(),
            Self::InvalidDimension { rows, cols } => {
                format!("Grid size is {rows} rows and {cols} columns")
            }
            Self::DuplicatePlacement { conflicts } => conflicts
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(", "),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.heading(), self.detail())
    }
}

impl std::error::Error for ValidationError {}

/// Validates a definition, returning its grid when usable.
///
/// # Errors
///
/// Returns the first [`ValidationError`] encountered.
pub fn validate_definition(definition: &Definition) -> Result<Grid, ValidationError> {
    let grid = definition.grid.ok_or(ValidationError::MissingGrid)?;

    let keys = match &definition.keys {
        Some(keys) if !keys.is_empty() => keys,
        _ => return Err(ValidationError::EmptyKeys),
    };

    if grid.rows < 1 || grid.cols < 1 {
        return Err(ValidationError::InvalidDimension {
            rows: grid.rows,
            cols: grid.cols,
        });
    }

    let conflicts = find_anchor_conflicts(keys.iter());
    if !conflicts.is_empty() {
        return Err(ValidationError::DuplicatePlacement { conflicts });
    }

    Ok(grid)
}

/// Groups keys by anchor cell and returns every group with more than one key.
///
/// Groups are reported in order of first appearance.
pub fn find_anchor_conflicts<'a>(keys: impl Iterator<Item = KeySpec<'a>>) -> Vec<AnchorConflict> {
    let mut order: Vec<(i32, i32)> = Vec::new();
    let mut groups: HashMap<(i32, i32), Vec<KeySpec<'a>>> = HashMap::new();

    for key in keys {
        let anchor = key.anchor();
        groups
            .entry(anchor)
            .or_insert_with(|| {
                order.push(anchor);
                Vec::new()
            })
            .push(key);
    }

    order
        .into_iter()
        .filter_map(|anchor| {
            let group = groups.remove(&anchor)?;
            (group.len() > 1).then(|| AnchorConflict {
                row: anchor.0,
                col: anchor.1,
                keys: group
                    .iter()
                    .map(|key| key.identifier().unwrap_or_default().to_string())
                    .collect(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ActionKey, KeyBase, KeySet, LayoutFlags, PluginKey, TextKey};

    fn text_key(row: i32, col: i32, text: &str) -> TextKey {
        TextKey {
            base: KeyBase::at(row, col),
            text: Some(text.to_string()),
        }
    }

    fn action_key(base: KeyBase) -> ActionKey {
        ActionKey { base, action: None }
    }

    fn definition(grid: Option<Grid>, keys: Option<KeySet>) -> Definition {
        Definition {
            grid,
            flags: LayoutFlags::default(),
            keys,
        }
    }

    fn one_key() -> KeySet {
        KeySet {
            text_keys: vec![text_key(0, 0, "a")],
            ..KeySet::default()
        }
    }

    #[test]
    fn test_valid_definition_returns_grid() {
        let def = definition(Some(Grid::new(2, 2)), Some(one_key()));
        assert_eq!(validate_definition(&def), Ok(Grid::new(2, 2)));
    }

    #[test]
    fn test_missing_grid() {
        let def = definition(None, Some(one_key()));
        let err = validate_definition(&def).unwrap_err();
        assert_eq!(err, ValidationError::MissingGrid);
        assert_eq!(err.heading(), "Invalid keyboard file");
        assert_eq!(err.detail(), "No grid definition found");
    }

    #[test]
    fn test_missing_or_empty_keys() {
        let missing = definition(Some(Grid::new(1, 1)), None);
        assert_eq!(
            validate_definition(&missing),
            Err(ValidationError::EmptyKeys)
        );

        let empty = definition(Some(Grid::new(1, 1)), Some(KeySet::default()));
        let err = validate_definition(&empty).unwrap_err();
        assert_eq!(err, ValidationError::EmptyKeys);
        assert_eq!(err.detail(), "No key definitions found");
    }

    #[test]
    fn test_zero_dimensions_echoed() {
        let def = definition(Some(Grid::new(0, 3)), Some(one_key()));
        let err = validate_definition(&def).unwrap_err();
        assert_eq!(err, ValidationError::InvalidDimension { rows: 0, cols: 3 });
        assert_eq!(err.heading(), "Incorrect grid definition");
        assert_eq!(err.detail(), "Grid size is 0 rows and 3 columns");
    }

    #[test]
    fn test_grid_checked_before_dimensions() {
        // Empty keys wins over bad dimensions
        let def = definition(Some(Grid::new(0, 0)), Some(KeySet::default()));
        assert_eq!(validate_definition(&def), Err(ValidationError::EmptyKeys));
    }

    #[test]
    fn test_duplicates_across_categories() {
        let keys = KeySet {
            action_keys: vec![action_key(KeyBase::at(1, 1).with_label("Enter"))],
            plugin_keys: vec![PluginKey {
                base: KeyBase::at(1, 1).with_symbol("PluginIcon"),
                plugin_name: None,
                method_name: None,
                extra: serde_json::Map::new(),
            }],
            ..KeySet::default()
        };
        let def = definition(Some(Grid::new(2, 2)), Some(keys));

        let err = validate_definition(&def).unwrap_err();
        assert_eq!(err.heading(), "Duplicate row/column values for keys");
        assert_eq!(err.detail(), "Enter, PluginIcon (1, 1)");
    }

    #[test]
    fn test_duplicate_message_joins_groups() {
        let keys = KeySet {
            text_keys: vec![
                text_key(0, 0, "a"),
                text_key(1, 1, "b"),
                text_key(0, 0, "c"),
                text_key(1, 1, "d"),
                text_key(1, 0, "e"),
            ],
            ..KeySet::default()
        };
        let def = definition(Some(Grid::new(2, 2)), Some(keys));

        let err = validate_definition(&def).unwrap_err();
        assert_eq!(err.detail(), "a, c (0, 0), b, d (1, 1)");
    }

    #[test]
    fn test_overlapping_spans_with_distinct_anchors_pass() {
        let keys = KeySet {
            action_keys: vec![
                action_key(KeyBase::at(0, 0).with_span(2, 2)),
                action_key(KeyBase::at(1, 1)),
            ],
            ..KeySet::default()
        };
        let def = definition(Some(Grid::new(2, 2)), Some(keys));
        assert!(validate_definition(&def).is_ok());
    }

    #[test]
    fn test_unnamed_keys_use_empty_identifier() {
        let keys = KeySet {
            action_keys: vec![action_key(KeyBase::at(0, 0)), action_key(KeyBase::at(0, 0))],
            ..KeySet::default()
        };
        let conflicts = find_anchor_conflicts(keys.iter());
        assert_eq!(conflicts.len(), 1);
        assert_eq!(conflicts[0].to_string(), ",  (0, 0)");
    }
}
