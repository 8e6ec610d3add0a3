//! Enumerated key functions an action key can trigger.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Function identifier carried by action keys.
///
/// Definition files name the function exactly as the variant is spelled
/// (`"action": "Enter"`). An unknown name fails the whole document parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FunctionKey {
    /// Add current phrase to the dictionary
    AddToDictionary,
    /// Alt modifier
    LeftAlt,
    /// Arrow down
    ArrowDown,
    /// Arrow left
    ArrowLeft,
    /// Arrow right
    ArrowRight,
    /// Arrow up
    ArrowUp,
    /// Leave the current keyboard and return to the previous one
    BackFromKeyboard,
    /// Delete the previous word
    BackMany,
    /// Delete the previous character
    BackOne,
    /// Start calibration
    Calibrate,
    /// Clear the scratchpad
    ClearScratchpad,
    /// Collapse dock
    CollapseDock,
    /// Copy selection
    Copy,
    /// Ctrl modifier
    LeftCtrl,
    /// Cut selection
    Cut,
    /// Decrease dwell time
    DecreaseDwellTime,
    /// Delete key
    Delete,
    /// End key
    End,
    /// Enter key
    Enter,
    /// Escape key
    Escape,
    /// Expand dock
    ExpandDock,
    /// Home key
    Home,
    /// Increase dwell time
    IncreaseDwellTime,
    /// Lock the keyboard
    Lock,
    /// Open the management console
    ManagementConsole,
    /// Minimise the keyboard
    Minimise,
    /// Show more suggestions
    MoreKey,
    /// Next suggestion page
    NextSuggestions,
    /// Page down
    PgDn,
    /// Page up
    PgUp,
    /// Paste clipboard
    Paste,
    /// Pause input
    Pause,
    /// Previous suggestion page
    PreviousSuggestions,
    /// Exit the application
    Quit,
    /// Restart the application
    Restart,
    /// Select a voice
    SelectVoice,
    /// Shift modifier
    LeftShift,
    /// Sleep mode
    Sleep,
    /// Speak the scratchpad
    Speak,
    /// Add a space
    Space,
    /// Tab key
    Tab,
    /// Toggle case
    ToggleCaseOfPreviousCharacter,
    /// Undo the last action
    Undo,
    /// Windows/Super key
    LeftWin,
}

impl fmt::Display for FunctionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self:?}")
    }
}
