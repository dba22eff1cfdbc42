//! End-to-end tests for the metrics pipeline

use legible_core::{
    words, CoreError, SentenceSegmenter, SentenceTokenizer, SpellingCorrector, TextCorrector,
    TextMetrics,
};

fn analyze(text: &str) -> Result<TextMetrics, CoreError> {
    let segmenter = SentenceSegmenter::english()?;
    TextMetrics::compute(words(text), segmenter.sentence_count(text))
}

#[test]
fn test_simple_paragraph() {
    let metrics = analyze("The cat sat on the mat. The dog ran away!").unwrap();
    let stats = &metrics.statistics;

    assert_eq!(stats.sentence_count, 2);
    assert_eq!(stats.word_count, 10);
    // the, cat, sat, on, mat, dog, ran, away
    assert_eq!(stats.unique_word_count, 8);
    assert_eq!(stats.average_word_length, 3.0);
    // "away" counts two syllables, every other word one
    assert_eq!(metrics.total_syllables, 11);
    assert_eq!(metrics.readability.flesch_reading_ease, 108.7);
    assert_eq!(metrics.readability.flesch_kincaid_grade, -0.66);
}

#[test]
fn test_abbreviations_do_not_inflate_sentence_count() {
    let metrics = analyze("Dr. Smith arrived. He sat.").unwrap();
    assert_eq!(metrics.statistics.sentence_count, 2);
    assert_eq!(metrics.statistics.word_count, 5);
}

#[test]
fn test_decimal_and_ellipsis() {
    let segmenter = SentenceSegmenter::english().unwrap();
    assert_eq!(segmenter.sentence_count("Pi is 3.14 today."), 1);
    assert_eq!(segmenter.sentence_count("Wait... what?"), 1);
}

#[test]
fn test_punctuation_only_has_no_words() {
    let err = analyze("!!! ... ???").unwrap_err();
    assert!(matches!(err, CoreError::EmptyInput));
}

#[test]
fn test_word_count_matches_tokenizer() {
    let text = "  \"Quoted,\" she said -- twice.  (Really!) ";
    let metrics = analyze(text).unwrap();
    assert_eq!(metrics.statistics.word_count, words(text).count());
}

#[test]
fn test_sentence_count_matches_segmenter() {
    let text = "One. Two? Three! Four... Five";
    let segmenter = SentenceSegmenter::english().unwrap();
    let metrics = analyze(text).unwrap();
    assert_eq!(
        metrics.statistics.sentence_count,
        segmenter.sentences(text).len()
    );
}

#[test]
fn test_correction_then_metrics() {
    let corrected = SpellingCorrector::english()
        .correct("Teh quick brown fox.")
        .unwrap();
    assert_eq!(corrected, "The quick brown fox.");

    let metrics = analyze(&corrected).unwrap();
    assert_eq!(metrics.statistics.word_count, 4);
}
