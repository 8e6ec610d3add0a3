//! Data models for keyboard definitions, compiled keys and placement grids.
//!
//! This module contains all the core data structures used throughout the crate.
//! Models carry no behavior beyond construction helpers; loading, validation and
//! compilation live in [`crate::parser`] and [`crate::compiler`].

pub mod compiled;
pub mod definition;
pub mod function_key;
pub mod named_keyboard;
pub mod placement;
pub mod thickness;

// Re-export all model types
pub use compiled::{CompiledKey, CompiledValue, KeyText, NavigationTarget, SizingClass, Symbol};
pub use definition::{
    ActionKey, ChangeKeyboardKey, Definition, Grid, KeyBase, KeySet, KeySpec, LayoutFlags,
    PluginKey, TextKey,
};
pub use function_key::FunctionKey;
pub use named_keyboard::NamedKeyboard;
pub use placement::{GridLength, OutputRow, Placement, PlacementGrid};
pub use thickness::Thickness;
