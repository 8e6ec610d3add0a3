//! Key compiler: turns category-specific key specs into [`CompiledKey`]s.
//!
//! Every key compiles. Problems with a single key (an unknown symbol, a
//! missing payload) are returned as [`KeyIssue`]s next to a best-effort key
//! that still occupies its cell.

use crate::catalog::SymbolCatalog;
use crate::constants::LINE_ENDING;
use crate::models::{
    ActionKey, ChangeKeyboardKey, CompiledKey, CompiledValue, KeyBase, KeySpec, KeyText,
    NamedKeyboard, NavigationTarget, PluginKey, SizingClass, TextKey, Thickness,
};
use std::fmt;
use std::path::{Path, PathBuf};

/// Non-fatal problem found while compiling one key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyIssue {
    /// The symbol name is not in the symbol catalog; the key has no symbol
    UnresolvedSymbol {
        /// Symbol name as written
        name: String,
        /// Anchor `(row, col)` of the key
        anchor: (i32, i32),
    },
    /// The category payload is missing; the key has no behavior
    IncompleteKeyConfig {
        /// Category the key was declared in
        category: &'static str,
        /// Label or symbol of the key, when it has one
        identifier: Option<String>,
        /// Anchor `(row, col)` of the key
        anchor: (i32, i32),
        /// What is missing
        reason: &'static str,
    },
}

impl fmt::Display for KeyIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnresolvedSymbol { name, anchor } => write!(
                f,
                "Could not resolve symbol '{}' for key at ({}, {})",
                name, anchor.0, anchor.1
            ),
            Self::IncompleteKeyConfig {
                category,
                identifier,
                anchor,
                reason,
            } => {
                write!(f, "Incomplete {} key", category)?;
                if let Some(identifier) = identifier {
                    write!(f, " '{identifier}'")?;
                }
                write!(f, " at ({}, {}): {}", anchor.0, anchor.1, reason)
            }
        }
    }
}

/// Compiled key plus the issues found while compiling it.
#[derive(Debug, Clone, PartialEq)]
pub struct KeyOutcome {
    /// Best-effort compiled key
    pub key: CompiledKey,
    /// Non-fatal issues
    pub issues: Vec<KeyIssue>,
}

/// Replaces literal `\r\n` and `\n` escape sequences with the platform line separator.
///
/// # Examples
///
/// ```
/// use dynkey::compiler::keys::normalize_newlines;
/// use dynkey::constants::LINE_ENDING;
///
/// assert_eq!(normalize_newlines(r"Caps\nLock"), format!("Caps{LINE_ENDING}Lock"));
/// ```
#[must_use]
pub fn normalize_newlines(text: &str) -> String {
    text.replace("\\r\\n", LINE_ENDING).replace("\\n", LINE_ENDING)
}

/// Compiles key specs for one definition file.
pub struct KeyCompiler<'a> {
    symbols: &'a dyn SymbolCatalog,
    source_dir: PathBuf,
    symbol_margin: Option<Thickness>,
}

impl<'a> KeyCompiler<'a> {
    /// Creates a compiler for keys read from `source_path`.
    ///
    /// Relative change-keyboard destinations resolve against the directory
    /// containing `source_path`.
    #[must_use]
    pub fn new(symbols: &'a dyn SymbolCatalog, source_path: &Path) -> Self {
        let source_dir = source_path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();

        Self {
            symbols,
            source_dir,
            symbol_margin: None,
        }
    }

    /// Applies a symbol margin to every compiled key.
    #[must_use]
    pub fn with_symbol_margin(mut self, margin: Option<Thickness>) -> Self {
        self.symbol_margin = margin;
        self
    }

    /// Compiles one key of any category.
    #[must_use]
    pub fn compile(&self, spec: KeySpec<'_>) -> KeyOutcome {
        let mut issues = Vec::new();
        let mut key = self.compile_base(spec.base(), &mut issues);

        let value = match spec {
            KeySpec::Action(action) => Self::action_value(action),
            KeySpec::Text(text) => Self::text_value(text),
            KeySpec::ChangeKeyboard(change) => self.change_keyboard_value(change),
            KeySpec::Plugin(plugin) => Self::plugin_value(plugin),
        };

        match value {
            Ok(value) => key.value = value,
            Err(reason) => {
                let base = spec.base();
                issues.push(KeyIssue::IncompleteKeyConfig {
                    category: spec.category(),
                    identifier: base.label.clone().or_else(|| base.symbol.clone()),
                    anchor: spec.anchor(),
                    reason,
                });
            }
        }

        KeyOutcome { key, issues }
    }

    /// Text, symbol, sizing class and spans shared by all categories.
    fn compile_base(&self, base: &KeyBase, issues: &mut Vec<KeyIssue>) -> CompiledKey {
        let text = match (&base.shift_up_label, &base.shift_down_label, &base.label) {
            (Some(up), Some(down), _) => KeyText::Shifted {
                up: normalize_newlines(up),
                down: normalize_newlines(down),
            },
            (_, _, Some(label)) => KeyText::Plain(normalize_newlines(label)),
            _ => KeyText::Blank,
        };

        let symbol = base.symbol.as_deref().and_then(|name| {
            let resolved = self.symbols.resolve_symbol(name);
            if resolved.is_none() {
                issues.push(KeyIssue::UnresolvedSymbol {
                    name: name.to_string(),
                    anchor: (base.row, base.col),
                });
            }
            resolved
        });

        let has_text = base.label.is_some()
            || base.shift_up_label.is_some()
            || base.shift_down_label.is_some();
        let sizing_class =
            SizingClass::classify(symbol.is_some(), has_text, text.is_single_letter());

        CompiledKey {
            text,
            symbol,
            symbol_margin: self.symbol_margin,
            sizing_class,
            row_span: base.height,
            col_span: base.width,
            value: CompiledValue::Empty,
        }
    }

    fn action_value(key: &ActionKey) -> Result<CompiledValue, &'static str> {
        key.action
            .map(CompiledValue::FunctionAction)
            .ok_or("no action set")
    }

    fn text_value(key: &TextKey) -> Result<CompiledValue, &'static str> {
        key.text
            .clone()
            .map(CompiledValue::LiteralText)
            .ok_or("no text set")
    }

    fn change_keyboard_value(&self, key: &ChangeKeyboardKey) -> Result<CompiledValue, &'static str> {
        let destination = key
            .destination_keyboard
            .as_deref()
            .ok_or("no destination keyboard set")?;

        let target = match NamedKeyboard::parse(destination) {
            Some(named) => NavigationTarget::Named(named),
            None => NavigationTarget::File(self.source_dir.join(destination)),
        };

        Ok(CompiledValue::NavigateTo {
            target,
            replace_current: !key.return_to_this_keyboard,
        })
    }

    fn plugin_value(key: &PluginKey) -> Result<CompiledValue, &'static str> {
        if key.plugin_name.is_none() || key.method_name.is_none() {
            return Err("plugin name and method name are both required");
        }

        key.to_snippet()
            .map(CompiledValue::PluginInvocation)
            .map_err(|_| "plugin key could not be serialized")
    }
}
