//! Built-in keyboards a change-keyboard key can navigate to by name.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Closed set of keyboards shipped with the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NamedKeyboard {
    /// Main alphabetic keyboard
    Alpha,
    /// Full-screen alphabetic keyboard for conversation mode
    ConversationAlpha,
    /// Confirmation prompt in conversation mode
    ConversationConfirm,
    /// Numbers and symbols in conversation mode
    ConversationNumericAndSymbols,
    /// First diacritics page
    Diacritics1,
    /// Second diacritics page
    Diacritics2,
    /// Third diacritics page
    Diacritics3,
    /// Selector listing user keyboard files
    DynamicKeyboardSelector,
    /// Language selection
    Language,
    /// Main menu
    Menu,
    /// Minimised dock
    Minimised,
    /// Mouse control
    Mouse,
    /// First numbers and symbols page
    NumericAndSymbols1,
    /// Second numbers and symbols page
    NumericAndSymbols2,
    /// Third numbers and symbols page
    NumericAndSymbols3,
    /// Physical key emulation
    PhysicalKeys,
    /// Simplified alphabetic keyboard
    SimplifiedAlpha,
    /// Window size and position
    SizeAndPosition,
    /// Voice selection
    Voice,
    /// Web browsing helpers
    WebBrowsing,
}

impl NamedKeyboard {
    /// Every named keyboard, in declaration order.
    pub const ALL: [Self; 20] = [
        Self::Alpha,
        Self::ConversationAlpha,
        Self::ConversationConfirm,
        Self::ConversationNumericAndSymbols,
        Self::Diacritics1,
        Self::Diacritics2,
        Self::Diacritics3,
        Self::DynamicKeyboardSelector,
        Self::Language,
        Self::Menu,
        Self::Minimised,
        Self::Mouse,
        Self::NumericAndSymbols1,
        Self::NumericAndSymbols2,
        Self::NumericAndSymbols3,
        Self::PhysicalKeys,
        Self::SimplifiedAlpha,
        Self::SizeAndPosition,
        Self::Voice,
        Self::WebBrowsing,
    ];

    /// Identifier used in definition files.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Alpha => "Alpha",
            Self::ConversationAlpha => "ConversationAlpha",
            Self::ConversationConfirm => "ConversationConfirm",
            Self::ConversationNumericAndSymbols => "ConversationNumericAndSymbols",
            Self::Diacritics1 => "Diacritics1",
            Self::Diacritics2 => "Diacritics2",
            Self::Diacritics3 => "Diacritics3",
            Self::DynamicKeyboardSelector => "DynamicKeyboardSelector",
            Self::Language => "Language",
            Self::Menu => "Menu",
            Self::Minimised => "Minimised",
            Self::Mouse => "Mouse",
            Self::NumericAndSymbols1 => "NumericAndSymbols1",
            Self::NumericAndSymbols2 => "NumericAndSymbols2",
            Self::NumericAndSymbols3 => "NumericAndSymbols3",
            Self::PhysicalKeys => "PhysicalKeys",
            Self::SimplifiedAlpha => "SimplifiedAlpha",
            Self::SizeAndPosition => "SizeAndPosition",
            Self::Voice => "Voice",
            Self::WebBrowsing => "WebBrowsing",
        }
    }

    /// Resolves a destination string against the built-in keyboards.
    ///
    /// Matching is exact and case-sensitive; anything else is treated by the
    /// caller as a file path.
    ///
    /// # Examples
    ///
    /// ```
    /// use dynkey::models::NamedKeyboard;
    ///
    /// assert_eq!(NamedKeyboard::parse("Menu"), Some(NamedKeyboard::Menu));
    /// assert_eq!(NamedKeyboard::parse("menu"), None);
    /// assert_eq!(NamedKeyboard::parse("other.json"), None);
    /// ```
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|keyboard| keyboard.name() == name)
    }
}

impl fmt::Display for NamedKeyboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
