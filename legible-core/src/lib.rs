//! Deterministic text metrics and readability formulas
//!
//! The crate implements a small pipeline:
//! tokenization -> word normalization -> syllable estimation -> formula
//! computation, plus the two collaborators the pipeline relies on: a
//! rule-based sentence segmenter and a pluggable text corrector.
//!
//! # Example
//!
//! ```rust
//! use legible_core::{words, SentenceSegmenter, SentenceTokenizer, TextMetrics};
//!
//! let text = "The cat sat on the mat. It was happy.";
//! let segmenter = SentenceSegmenter::english().unwrap();
//!
//! let metrics = TextMetrics::compute(words(text), segmenter.sentence_count(text)).unwrap();
//! assert_eq!(metrics.statistics.sentence_count, 2);
//! assert_eq!(metrics.statistics.word_count, 9);
//! ```

pub mod correction;
pub mod error;
pub mod language;
pub mod metrics;
pub mod segmenter;
pub mod spelling;
pub mod syllable;
pub mod tokenizer;

pub use correction::{CorrectionError, IdentityCorrector, TextCorrector};
pub use error::{CoreError, Result};
pub use language::{ConfigurableLanguageRules, LanguageRules};
pub use metrics::{
    flesch_kincaid_grade, flesch_reading_ease, round2, Readability, Statistics, TextMetrics,
};
pub use segmenter::SentenceSegmenter;
pub use spelling::{SpellingCorrector, SpellingDictionary};
pub use syllable::syllable_count;
pub use tokenizer::{preprocess_word, words, SentenceTokenizer, Words};
