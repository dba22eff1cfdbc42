//! Frequency-dictionary spelling correction
//!
//! A compact corrector in the style of Norvig's: known words are kept, unknown
//! words are replaced by the most frequent dictionary word within one (or two)
//! edits.

pub mod corrector;
pub mod dictionary;
pub mod edits;

pub use corrector::SpellingCorrector;
pub use dictionary::SpellingDictionary;
