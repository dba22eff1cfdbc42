//! Lookup tables built once from a [`RuleSet`](crate::language::config::RuleSet)

pub mod abbreviation;
pub mod ellipsis;
pub mod enclosure;
pub mod sentence_starters;
pub mod terminator;

pub use abbreviation::AbbreviationTrie;
pub use ellipsis::EllipsisMatcher;
pub use enclosure::EnclosureTable;
pub use sentence_starters::StarterSet;
pub use terminator::TerminatorSet;
