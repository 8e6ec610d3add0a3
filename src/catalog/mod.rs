//! Read-only lookup capabilities consumed by the compiler.
//!
//! The compiler never reaches for global resources. Symbol shapes and
//! localized strings come in through the [`SymbolCatalog`] and
//! [`StringLookup`] traits, bundled in [`Catalogs`] for a single load.

pub mod strings;
pub mod symbols;

use crate::models::Symbol;
use anyhow::Result;

pub use strings::StringTable;
pub use symbols::SymbolTable;

/// Resolves symbol names to shapes.
pub trait SymbolCatalog {
    /// Returns the shape for `name`, or `None` if the catalog has no such symbol.
    fn resolve_symbol(&self, name: &str) -> Option<Symbol>;
}

/// Looks up localized strings by key.
pub trait StringLookup {
    /// Returns the localized text for `key`.
    fn lookup(&self, key: &str) -> String;
}

/// Capabilities available during one keyboard load.
#[derive(Clone, Copy)]
pub struct Catalogs<'a> {
    /// Symbol shapes
    pub symbols: &'a dyn SymbolCatalog,
    /// Localized strings
    pub strings: &'a dyn StringLookup,
}

impl<'a> Catalogs<'a> {
    /// Bundles the given capabilities.
    #[must_use]
    pub fn new(symbols: &'a dyn SymbolCatalog, strings: &'a dyn StringLookup) -> Self {
        Self { symbols, strings }
    }
}

/// Owned built-in catalogs, optionally extended from user files.
#[derive(Debug, Clone, Default)]
pub struct BuiltinCatalogs {
    /// Symbol table
    pub symbols: SymbolTable,
    /// String table
    pub strings: StringTable,
}

impl BuiltinCatalogs {
    /// Loads the embedded symbol and string tables.
    pub fn load() -> Result<Self> {
        Ok(Self {
            symbols: SymbolTable::load()?,
            strings: StringTable::load()?,
        })
    }

    /// Borrows both tables as capabilities.
    #[must_use]
    pub fn as_catalogs(&self) -> Catalogs<'_> {
        Catalogs::new(&self.symbols, &self.strings)
    }
}
