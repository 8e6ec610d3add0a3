//! In-memory form of a parsed keyboard definition file.
//!
//! A definition is built once per load and never mutated afterwards. It holds
//! only structure; validation and compilation live in [`crate::compiler`].

use crate::models::{FunctionKey, Thickness};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Parsed keyboard definition.
///
/// # Validation
///
/// A definition may legally parse with a missing grid, zero dimensions or no
/// keys at all. Those conditions are reported by the validator, not here.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "DefinitionDocument")]
pub struct Definition {
    /// Grid dimensions (absent when the file omits the `Grid` element)
    pub grid: Option<Grid>,
    /// Layout-wide presentation flags
    pub flags: LayoutFlags,
    /// Key specifications (absent when the file omits the `Keys` element)
    pub keys: Option<KeySet>,
}

impl Definition {
    /// Total number of keys across all four categories.
    #[must_use]
    pub fn key_count(&self) -> usize {
        self.keys.as_ref().map_or(0, KeySet::len)
    }
}

/// Root object of a definition file, as written on disk.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct DefinitionDocument {
    #[serde(rename = "Grid")]
    grid: Option<Grid>,
    #[serde(default)]
    show_output_panel: bool,
    #[serde(default)]
    is_shift_aware: bool,
    symbol_margin: Option<Thickness>,
    border_thickness: Option<Thickness>,
    #[serde(rename = "Keys")]
    keys: Option<KeySet>,
}

impl From<DefinitionDocument> for Definition {
    fn from(doc: DefinitionDocument) -> Self {
        Self {
            grid: doc.grid,
            flags: LayoutFlags {
                show_output_panel: doc.show_output_panel,
                is_shift_aware: doc.is_shift_aware,
                symbol_margin: doc.symbol_margin,
                border_thickness: doc.border_thickness,
            },
            keys: doc.keys,
        }
    }
}

/// Grid dimensions in cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Grid {
    /// Number of rows (usable definitions need at least 1)
    #[serde(default)]
    pub rows: i32,
    /// Number of columns (usable definitions need at least 1)
    #[serde(default)]
    pub cols: i32,
}

impl Grid {
    /// Creates a grid with the given dimensions.
    #[must_use]
    pub const fn new(rows: i32, cols: i32) -> Self {
        Self { rows, cols }
    }
}

/// Layout-wide presentation flags.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LayoutFlags {
    /// Show the auxiliary output row above the key grid
    pub show_output_panel: bool,
    /// Keys render shifted/unshifted labels
    pub is_shift_aware: bool,
    /// Margin applied around every key symbol
    pub symbol_margin: Option<Thickness>,
    /// Border override for the whole keyboard
    pub border_thickness: Option<Thickness>,
}

/// Category-tagged key lists.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct KeySet {
    /// Keys that trigger a [`FunctionKey`]
    #[serde(rename = "ActionKeys", default)]
    pub action_keys: Vec<ActionKey>,
    /// Keys that emit literal text
    #[serde(rename = "TextKeys", default)]
    pub text_keys: Vec<TextKey>,
    /// Keys that navigate to another keyboard
    #[serde(rename = "ChangeKeyboardKeys", default)]
    pub change_keyboard_keys: Vec<ChangeKeyboardKey>,
    /// Keys that invoke an external plugin
    #[serde(rename = "PluginKeys", default)]
    pub plugin_keys: Vec<PluginKey>,
}

impl KeySet {
    /// Combined key count across all categories.
    #[must_use]
    pub fn len(&self) -> usize {
        self.action_keys.len()
            + self.text_keys.len()
            + self.change_keyboard_keys.len()
            + self.plugin_keys.len()
    }

    /// Returns true when no category holds a key.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterates every key, category by category, in file order.
    pub fn iter(&self) -> impl Iterator<Item = KeySpec<'_>> {
        self.action_keys
            .iter()
            .map(KeySpec::Action)
            .chain(self.text_keys.iter().map(KeySpec::Text))
            .chain(self.change_keyboard_keys.iter().map(KeySpec::ChangeKeyboard))
            .chain(self.plugin_keys.iter().map(KeySpec::Plugin))
    }
}

/// Borrowed view of one key together with its category.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum KeySpec<'a> {
    /// Action key
    Action(&'a ActionKey),
    /// Text key
    Text(&'a TextKey),
    /// Change-keyboard key
    ChangeKeyboard(&'a ChangeKeyboardKey),
    /// Plugin key
    Plugin(&'a PluginKey),
}

impl<'a> KeySpec<'a> {
    /// Fields shared by every category.
    #[must_use]
    pub const fn base(&self) -> &'a KeyBase {
        match *self {
            Self::Action(key) => &key.base,
            Self::Text(key) => &key.base,
            Self::ChangeKeyboard(key) => &key.base,
            Self::Plugin(key) => &key.base,
        }
    }

    /// Anchor cell as `(row, col)`.
    #[must_use]
    pub const fn anchor(&self) -> (i32, i32) {
        let base = self.base();
        (base.row, base.col)
    }

    /// Human-readable identifier used in diagnostics.
    ///
    /// Text keys are named by their literal text; every other key by its
    /// label, falling back to the symbol name.
    #[must_use]
    pub fn identifier(&self) -> Option<&'a str> {
        match *self {
            Self::Text(key) => key.text.as_deref(),
            _ => {
                let base = self.base();
                base.label.as_deref().or(base.symbol.as_deref())
            }
        }
    }

    /// Category name as written in definition files.
    #[must_use]
    pub const fn category(&self) -> &'static str {
        match self {
            Self::Action(_) => "ActionKeys",
            Self::Text(_) => "TextKeys",
            Self::ChangeKeyboard(_) => "ChangeKeyboardKeys",
            Self::Plugin(_) => "PluginKeys",
        }
    }
}

/// Default row/column span.
const fn default_span() -> i32 {
    1
}

/// Placement and presentation fields shared by every key category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyBase {
    /// Anchor row (0-based)
    #[serde(default)]
    pub row: i32,
    /// Anchor column (0-based)
    #[serde(default)]
    pub col: i32,
    /// Column span
    #[serde(default = "default_span")]
    pub width: i32,
    /// Row span
    #[serde(default = "default_span")]
    pub height: i32,
    /// Plain label
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Label shown while shift is released
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shift_up_label: Option<String>,
    /// Label shown while shift is held
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shift_down_label: Option<String>,
    /// Symbol name looked up in the symbol catalog
    #[serde(default, alias = "symbolName", skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,
}

impl KeyBase {
    /// Creates a 1x1 key anchored at `(row, col)` with no text or symbol.
    #[must_use]
    pub const fn at(row: i32, col: i32) -> Self {
        Self {
            row,
            col,
            width: 1,
            height: 1,
            label: None,
            shift_up_label: None,
            shift_down_label: None,
            symbol: None,
        }
    }

    /// Sets the plain label.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Sets both shifted labels.
    pub fn with_shift_labels(mut self, up: impl Into<String>, down: impl Into<String>) -> Self {
        self.shift_up_label = Some(up.into());
        self.shift_down_label = Some(down.into());
        self
    }

    /// Sets the symbol name.
    pub fn with_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.symbol = Some(symbol.into());
        self
    }

    /// Sets the row and column spans.
    #[must_use]
    pub const fn with_span(mut self, height: i32, width: i32) -> Self {
        self.height = height;
        self.width = width;
        self
    }
}

/// Key that triggers a built-in function.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionKey {
    /// Shared fields
    #[serde(flatten)]
    pub base: KeyBase,
    /// Function to trigger
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<FunctionKey>,
}

/// Key that emits literal text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextKey {
    /// Shared fields
    #[serde(flatten)]
    pub base: KeyBase,
    /// Text to emit
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

/// Key that navigates to another keyboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangeKeyboardKey {
    /// Shared fields
    #[serde(flatten)]
    pub base: KeyBase,
    /// Named keyboard or path relative to the current definition file
    #[serde(default, alias = "destination", skip_serializing_if = "Option::is_none")]
    pub destination_keyboard: Option<String>,
    /// Keep the current keyboard on the navigation stack
    #[serde(default)]
    pub return_to_this_keyboard: bool,
}

/// Key that invokes a method on an external plugin.
///
/// Fields the compiler does not interpret are kept in `extra` so the key can
/// be handed back to the plugin host exactly as it was written.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PluginKey {
    /// Shared fields
    #[serde(flatten)]
    pub base: KeyBase,
    /// Plugin identifier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plugin_name: Option<String>,
    /// Method to call on the plugin
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub method_name: Option<String>,
    /// Any other fields present in the definition
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl PluginKey {
    /// Re-encodes this key as a self-describing JSON snippet.
    ///
    /// # Errors
    ///
    /// Returns an error if an `extra` value cannot be encoded.
    pub fn to_snippet(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Decodes a snippet produced by [`PluginKey::to_snippet`].
    ///
    /// # Errors
    ///
    /// Returns an error if the snippet is not a valid plugin key.
    pub fn from_snippet(snippet: &str) -> serde_json::Result<Self> {
        serde_json::from_str(snippet)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "Grid": { "rows": 2, "cols": 3 },
        "showOutputPanel": true,
        "symbolMargin": 4,
        "Keys": {
            "ActionKeys": [ { "row": 0, "col": 0, "label": "Back", "action": "BackFromKeyboard" } ],
            "TextKeys": [ { "row": 0, "col": 1, "text": "a", "width": 2 } ],
            "ChangeKeyboardKeys": [ { "row": 1, "col": 0, "destination": "Menu", "returnToThisKeyboard": true } ],
            "PluginKeys": [ { "row": 1, "col": 1, "symbol": "Star", "pluginName": "Foo", "methodName": "Bar", "argument": 7 } ]
        }
    }"#;

    #[test]
    fn test_deserialize_full_document() {
        let definition: Definition = serde_json::from_str(SAMPLE).unwrap();

        assert_eq!(definition.grid, Some(Grid::new(2, 3)));
        assert!(definition.flags.show_output_panel);
        assert!(!definition.flags.is_shift_aware);
        assert_eq!(definition.flags.symbol_margin, Some(Thickness::uniform(4.0)));
        assert_eq!(definition.flags.border_thickness, None);
        assert_eq!(definition.key_count(), 4);

        let keys = definition.keys.unwrap();
        assert_eq!(keys.action_keys[0].action, Some(FunctionKey::BackFromKeyboard));
        assert_eq!(keys.text_keys[0].base.width, 2);
        assert_eq!(keys.text_keys[0].base.height, 1);
        assert_eq!(
            keys.change_keyboard_keys[0].destination_keyboard.as_deref(),
            Some("Menu")
        );
        assert!(keys.change_keyboard_keys[0].return_to_this_keyboard);
        assert_eq!(keys.plugin_keys[0].base.symbol.as_deref(), Some("Star"));
        assert_eq!(keys.plugin_keys[0].extra.get("argument"), Some(&Value::from(7)));
    }

    #[test]
    fn test_missing_sections_parse_as_none() {
        let definition: Definition = serde_json::from_str("{}").unwrap();
        assert_eq!(definition.grid, None);
        assert_eq!(definition.keys, None);
        assert_eq!(definition.key_count(), 0);
    }

    #[test]
    fn test_iter_visits_every_category() {
        let definition: Definition = serde_json::from_str(SAMPLE).unwrap();
        let keys = definition.keys.unwrap();
        let categories: Vec<_> = keys.iter().map(|key| key.category()).collect();
        assert_eq!(
            categories,
            vec!["ActionKeys", "TextKeys", "ChangeKeyboardKeys", "PluginKeys"]
        );
    }

    #[test]
    fn test_identifier_prefers_text_for_text_keys() {
        let text = TextKey {
            base: KeyBase::at(0, 0).with_label("Letter A"),
            text: Some("a".to_string()),
        };
        assert_eq!(KeySpec::Text(&text).identifier(), Some("a"));

        let action = ActionKey {
            base: KeyBase::at(0, 0).with_symbol("EnterIcon"),
            action: None,
        };
        assert_eq!(KeySpec::Action(&action).identifier(), Some("EnterIcon"));
    }

    #[test]
    fn test_plugin_snippet_keeps_unknown_fields() {
        let definition: Definition = serde_json::from_str(SAMPLE).unwrap();
        let plugin = &definition.keys.unwrap().plugin_keys[0];

        let snippet = plugin.to_snippet().unwrap();
        let decoded = PluginKey::from_snippet(&snippet).unwrap();

        assert_eq!(&decoded, plugin);
        assert!(snippet.contains("\"argument\": 7"));
    }
}
