//! Edit-distance candidate generation

use std::collections::HashSet;

const ALPHABET: std::ops::RangeInclusive<char> = 'a'..='z';

/// All strings one edit away from `word`
///
/// Edits are deletions, adjacent transpositions, replacements and insertions
/// over `a-z`.
pub fn edits1(word: &str) -> HashSet<String> {
    let chars: Vec<char> = word.chars().collect();
    let len = chars.len();
    let mut edits = HashSet::with_capacity(54 * len + 25);

    // Deletions
    for i in 0..len {
        let mut new_word = chars.clone();
        new_word.remove(i);
        edits.insert(new_word.into_iter().collect());
    }

    // Transpositions
    for i in 0..len.saturating_sub(1) {
        let mut new_word = chars.clone();
        new_word.swap(i, i + 1);
        edits.insert(new_word.into_iter().collect());
    }

    // Replacements
    for i in 0..len {
        for ch in ALPHABET {
            if ch != chars[i] {
                let mut new_word = chars.clone();
                new_word[i] = ch;
                edits.insert(new_word.into_iter().collect());
            }
        }
    }

    // Insertions
    for i in 0..=len {
        for ch in ALPHABET {
            let mut new_word = chars.clone();
            new_word.insert(i, ch);
            edits.insert(new_word.into_iter().collect());
        }
    }

    edits
}
