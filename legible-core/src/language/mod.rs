//! Language-specific rules for sentence boundary detection
//!
//! Rules are data-driven: a TOML file lists terminators, enclosures,
//! abbreviations and sentence starters, and [`ConfigurableLanguageRules`]
//! turns it into fast lookup tables.

pub mod config;
pub mod interface;
pub(crate) mod loader;
pub(crate) mod runtime;
pub(crate) mod tables;

pub use interface::*;
pub use loader::{get_rules, preload};
pub use runtime::ConfigurableLanguageRules;
