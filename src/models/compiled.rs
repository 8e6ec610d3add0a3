//! Uniform compiled key representation handed to the rendering layer.

use crate::models::{FunctionKey, NamedKeyboard, Thickness};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Resolved vector shape for a key symbol.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Symbol {
    /// Catalog name (e.g., "BackIcon")
    pub name: String,
    /// Path geometry in SVG path-data syntax
    pub path_data: String,
}

impl Symbol {
    /// Creates a symbol from its name and path data.
    pub fn new(name: impl Into<String>, path_data: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path_data: path_data.into(),
        }
    }
}

/// Text shown on a key.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum KeyText {
    /// No text
    #[default]
    Blank,
    /// Single display text
    Plain(String),
    /// Separate texts for shift released/held
    Shifted {
        /// Text while shift is released
        up: String,
        /// Text while shift is held
        down: String,
    },
}

impl KeyText {
    /// Returns true when every populated text field is at most one character.
    #[must_use]
    pub fn is_single_letter(&self) -> bool {
        match self {
            Self::Blank => true,
            Self::Plain(text) => text.chars().count() <= 1,
            Self::Shifted { up, down } => up.chars().count() <= 1 && down.chars().count() <= 1,
        }
    }

    /// Display text, preferring the unshifted form.
    #[must_use]
    pub fn display(&self) -> Option<&str> {
        match self {
            Self::Blank => None,
            Self::Plain(text) => Some(text),
            Self::Shifted { up, .. } => Some(up),
        }
    }
}

/// Visual sizing bucket shared by keys of similar content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SizingClass {
    /// Text only, one character per field
    SingleLetter,
    /// Text only, longer than one character
    Text,
    /// Symbol only
    Symbol,
    /// Symbol and text
    SymbolAndText,
    /// Neither symbol nor text
    None,
}

impl SizingClass {
    /// Picks the sizing class for a key.
    ///
    /// `has_text` reflects whether the definition supplied any label, while
    /// `single_letter` is only consulted for text-only keys.
    ///
    /// # Examples
    ///
    /// ```
    /// use dynkey::models::SizingClass;
    ///
    /// assert_eq!(SizingClass::classify(true, true, false), SizingClass::SymbolAndText);
    /// assert_eq!(SizingClass::classify(false, true, true), SizingClass::SingleLetter);
    /// assert_eq!(SizingClass::classify(false, false, true), SizingClass::None);
    /// ```
    #[must_use]
    pub const fn classify(has_symbol: bool, has_text: bool, single_letter: bool) -> Self {
        match (has_symbol, has_text) {
            (true, true) => Self::SymbolAndText,
            (true, false) => Self::Symbol,
            (false, true) if single_letter => Self::SingleLetter,
            (false, true) => Self::Text,
            (false, false) => Self::None,
        }
    }
}

/// Where a change-keyboard key navigates to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum NavigationTarget {
    /// Built-in keyboard
    Named(NamedKeyboard),
    /// Another definition file
    File(PathBuf),
}

/// Behavior attached to a compiled key.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CompiledValue {
    /// Trigger a built-in function
    FunctionAction(FunctionKey),
    /// Emit literal text
    LiteralText(String),
    /// Switch keyboards
    NavigateTo {
        /// Destination keyboard
        target: NavigationTarget,
        /// Replace the current keyboard instead of stacking on top of it
        replace_current: bool,
    },
    /// Invoke a plugin with the key's serialized definition
    PluginInvocation(String),
    /// Return from the current keyboard
    BackNavigation,
    /// No behavior
    #[default]
    Empty,
}

/// Key ready for placement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompiledKey {
    /// Display text
    pub text: KeyText,
    /// Resolved symbol, if any
    pub symbol: Option<Symbol>,
    /// Margin around the symbol
    pub symbol_margin: Option<Thickness>,
    /// Sizing bucket
    pub sizing_class: SizingClass,
    /// Rows covered
    pub row_span: i32,
    /// Columns covered
    pub col_span: i32,
    /// Behavior
    pub value: CompiledValue,
}

impl CompiledKey {
    /// Creates an empty 1x1 key with no behavior.
    #[must_use]
    pub const fn blank() -> Self {
        Self {
            text: KeyText::Blank,
            symbol: None,
            symbol_margin: None,
            sizing_class: SizingClass::None,
            row_span: 1,
            col_span: 1,
            value: CompiledValue::Empty,
        }
    }

    /// Sets a plain display text.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = KeyText::Plain(text.into());
        self
    }

    /// Sets the row and column spans.
    #[must_use]
    pub const fn with_span(mut self, row_span: i32, col_span: i32) -> Self {
        self.row_span = row_span;
        self.col_span = col_span;
        self
    }
}

impl Default for CompiledKey {
    fn default() -> Self {
        Self::blank()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_table_is_total() {
        let cases = [
            (true, true, true, SizingClass::SymbolAndText),
            (true, true, false, SizingClass::SymbolAndText),
            (true, false, true, SizingClass::Symbol),
            (true, false, false, SizingClass::Symbol),
            (false, true, true, SizingClass::SingleLetter),
            (false, true, false, SizingClass::Text),
            (false, false, true, SizingClass::None),
            (false, false, false, SizingClass::None),
        ];
        for (symbol, text, single, expected) in cases {
            assert_eq!(
                SizingClass::classify(symbol, text, single),
                expected,
                "symbol={symbol} text={text} single={single}"
            );
        }
    }

    #[test]
    fn test_single_letter_counts_characters() {
        assert!(KeyText::Plain("é".to_string()).is_single_letter());
        assert!(!KeyText::Plain("ab".to_string()).is_single_letter());
        assert!(KeyText::Shifted {
            up: "a".to_string(),
            down: "A".to_string()
        }
        .is_single_letter());
        assert!(!KeyText::Shifted {
            up: "a".to_string(),
            down: "Ab".to_string()
        }
        .is_single_letter());
        assert!(KeyText::Blank.is_single_letter());
    }

    #[test]
    fn test_blank_key_defaults() {
        let key = CompiledKey::default();
        assert_eq!(key.value, CompiledValue::Empty);
        assert_eq!(key.sizing_class, SizingClass::None);
        assert_eq!((key.row_span, key.col_span), (1, 1));
    }
}
