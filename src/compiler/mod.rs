//! Keyboard compilation pipeline.
//!
//! Loading a keyboard runs Loader → Validator → Key Compiler → Placement
//! Engine. A fatal failure in loading or validation short-circuits to the
//! error layout, which is placed through the same engine. The caller always
//! gets a usable [`PlacementGrid`].

pub mod error_layout;
pub mod keys;
pub mod placement;
pub mod validator;

use crate::catalog::Catalogs;
use crate::constants::{DETAIL_NO_FILE, HEADING_LOAD_FAILED};
use crate::models::{Definition, PlacementGrid};
use crate::parser::{load_definition, LoadError};
use std::fmt;
use std::path::Path;

pub use error_layout::{build_error_layout, wrap_detail};
pub use keys::{KeyCompiler, KeyIssue, KeyOutcome};
pub use placement::PlacementEngine;
pub use validator::{validate_definition, AnchorConflict, ValidationError};

/// Fatal failure that replaced the keyboard with the error layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutFailure {
    /// The file could not be loaded
    Load(LoadError),
    /// The definition is structurally invalid
    Validation(ValidationError),
}

impl LayoutFailure {
    /// Heading shown on the error layout.
    #[must_use]
    pub const fn heading(&self) -> &'static str {
        match self {
            Self::Load(_) => HEADING_LOAD_FAILED,
            Self::Validation(err) => err.heading(),
        }
    }

    /// Detail text shown on the error layout.
    ///
    /// Parse diagnostics are cut to their first line and wrapped.
    #[must_use]
    pub fn detail(&self) -> String {
        match self {
            Self::Load(LoadError::MissingInput) => DETAIL_NO_FILE.to_string(),
            Self::Load(LoadError::Parse { diagnostic, .. }) => wrap_detail(diagnostic),
            Self::Validation(err) => err.detail(),
        }
    }
}

impl fmt::Display for LayoutFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Load(err) => write!(f, "{}: {}", self.heading(), err),
            Self::Validation(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for LayoutFailure {}

impl From<LoadError> for LayoutFailure {
    fn from(err: LoadError) -> Self {
        Self::Load(err)
    }
}

impl From<ValidationError> for LayoutFailure {
    fn from(err: ValidationError) -> Self {
        Self::Validation(err)
    }
}

/// Result of loading one keyboard.
#[derive(Debug, Clone, PartialEq)]
pub struct CompiledKeyboard {
    /// Grid handed to the rendering layer
    pub grid: PlacementGrid,
    /// Keys render shifted/unshifted labels
    pub shift_aware: bool,
    /// Fatal failure, when the grid is the error layout
    pub failure: Option<LayoutFailure>,
    /// Non-fatal per-key issues
    pub issues: Vec<KeyIssue>,
}

impl CompiledKeyboard {
    /// Returns true when the grid is the error layout.
    #[must_use]
    pub const fn is_error_layout(&self) -> bool {
        self.failure.is_some()
    }
}

/// Loads, validates and compiles the keyboard at `path`.
///
/// Never fails: an empty path, unreadable file or invalid definition yields
/// the error layout with [`CompiledKeyboard::failure`] set.
pub fn load_keyboard(path: &Path, catalogs: Catalogs<'_>) -> CompiledKeyboard {
    match load_definition(path) {
        Ok(definition) => compile_definition(&definition, path, catalogs),
        Err(err) => {
            tracing::error!("Failed to load keyboard definition: {}", err);
            error_keyboard(err.into(), false, false, catalogs)
        }
    }
}

/// Validates and compiles an already parsed definition.
///
/// `source_path` is the file the definition came from; relative
/// change-keyboard destinations resolve against its directory.
pub fn compile_definition(
    definition: &Definition,
    source_path: &Path,
    catalogs: Catalogs<'_>,
) -> CompiledKeyboard {
    let flags = definition.flags;

    let grid = match validate_definition(definition) {
        Ok(grid) => grid,
        Err(err) => {
            tracing::error!("Invalid keyboard definition {}: {}", source_path.display(), err);
            return error_keyboard(
                err.into(),
                flags.show_output_panel,
                flags.is_shift_aware,
                catalogs,
            );
        }
    };

    let compiler =
        KeyCompiler::new(catalogs.symbols, source_path).with_symbol_margin(flags.symbol_margin);
    let mut engine = PlacementEngine::for_definition(grid.rows, grid.cols, &flags);
    let mut issues = Vec::new();

    for spec in definition.keys.iter().flat_map(|keys| keys.iter()) {
        let outcome = compiler.compile(spec);
        for issue in &outcome.issues {
            tracing::warn!("{}", issue);
        }
        issues.extend(outcome.issues);

        let (row, col) = spec.anchor();
        engine.place(outcome.key, row, col);
    }

    tracing::debug!(
        "Compiled {} keys into a {}x{} grid ({} issues)",
        definition.key_count(),
        grid.rows,
        grid.cols,
        issues.len()
    );

    CompiledKeyboard {
        grid: engine.finish(),
        shift_aware: flags.is_shift_aware,
        failure: None,
        issues,
    }
}

/// Error layout keeps the parsed definition's flags; load failures pass `false`.
fn error_keyboard(
    failure: LayoutFailure,
    show_output_panel: bool,
    shift_aware: bool,
    catalogs: Catalogs<'_>,
) -> CompiledKeyboard {
    let grid = build_error_layout(
        failure.heading(),
        &failure.detail(),
        show_output_panel,
        catalogs,
    );

    CompiledKeyboard {
        grid,
        shift_aware,
        failure: Some(failure),
        issues: Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::BuiltinCatalogs;
    use crate::models::{
        ActionKey, CompiledValue, Grid, KeyBase, KeySet, LayoutFlags, TextKey,
    };

    fn definition(grid: Grid, keys: KeySet) -> Definition {
        Definition {
            grid: Some(grid),
            flags: LayoutFlags::default(),
            keys: Some(keys),
        }
    }

    #[test]
    fn test_compile_places_every_key() {
        let catalogs = BuiltinCatalogs::load().unwrap();
        let keys = KeySet {
            text_keys: vec![TextKey {
                base: KeyBase::at(0, 0).with_label("A"),
                text: Some("A".to_string()),
            }],
            action_keys: vec![ActionKey {
                base: KeyBase::at(0, 1),
                action: None,
            }],
            ..KeySet::default()
        };

        let result = compile_definition(
            &definition(Grid::new(1, 2), keys),
            Path::new("kb.json"),
            catalogs.as_catalogs(),
        );

        assert!(!result.is_error_layout());
        assert_eq!(result.grid.placements().len(), 2);
        assert_eq!(result.issues.len(), 1);
        assert_eq!(
            result.grid.placement_at(0, 0).unwrap().key.value,
            CompiledValue::LiteralText("A".to_string())
        );
    }

    #[test]
    fn test_validation_failure_keeps_definition_flags() {
        let catalogs = BuiltinCatalogs::load().unwrap();
        let mut def = definition(Grid::new(0, 0), KeySet::default());
        def.keys = None;
        def.flags.show_output_panel = true;
        def.flags.is_shift_aware = true;

        let result = compile_definition(&def, Path::new("kb.json"), catalogs.as_catalogs());

        assert_eq!(
            result.failure,
            Some(LayoutFailure::Validation(ValidationError::EmptyKeys))
        );
        assert!(result.grid.output_row.visible);
        assert!(result.shift_aware);
    }

    #[test]
    fn test_missing_input_detail() {
        let failure = LayoutFailure::Load(LoadError::MissingInput);
        assert_eq!(failure.heading(), "Error loading file");
        assert_eq!(failure.detail(), DETAIL_NO_FILE);
    }

    #[test]
    fn test_load_failure_is_not_shift_aware() {
        let catalogs = BuiltinCatalogs::load().unwrap();
        let result = load_keyboard(Path::new(""), catalogs.as_catalogs());

        assert!(result.is_error_layout());
        assert!(!result.shift_aware);
        assert!(!result.grid.output_row.visible);
    }

    #[test]
    fn test_duplicate_anchor_keeps_definition_flags() {
        let catalogs = BuiltinCatalogs::load().unwrap();
        let keys = KeySet {
            text_keys: vec![
                TextKey {
                    base: KeyBase::at(1, 1),
                    text: Some("x".to_string()),
                },
                TextKey {
                    base: KeyBase::at(1, 1),
                    text: Some("y".to_string()),
                },
            ],
            ..KeySet::default()
        };
        let mut def = definition(Grid::new(2, 2), keys);
        def.flags.is_shift_aware = true;
        def.flags.show_output_panel = true;

        let result = compile_definition(&def, Path::new("kb.json"), catalogs.as_catalogs());

        assert!(result.is_error_layout());
        assert!(result.grid.output_row.visible);
        assert!(result.shift_aware);
    }

    #[test]
    fn test_parse_detail_uses_first_line() {
        let failure = LayoutFailure::Load(LoadError::Parse {
            path: "kb.json".into(),
            diagnostic: "bad things happened here\nstack".to_string(),
        });
        let detail = failure.detail();
        assert!(!detail.contains("stack"));
        assert!(detail.contains("bad"));
    }
}
