//! Heuristic syllable estimation
//!
//! Counts vowel groups with two English-specific corrections (silent final
//! `e`, consonant + `le` endings). This is an approximation, not a
//! pronunciation dictionary lookup.

#[inline]
fn is_vowel(ch: char) -> bool {
    matches!(ch, 'a' | 'e' | 'i' | 'o' | 'u' | 'y')
}

/// Estimate the number of syllables in `word`
///
/// Returns 0 for the empty string and at least 1 otherwise.
pub fn syllable_count(word: &str) -> usize {
    let chars: Vec<char> = word.to_lowercase().chars().collect();
    let Some(&first) = chars.first() else {
        return 0;
    };

    let mut count: isize = if is_vowel(first) { 1 } else { 0 };
    for pair in chars.windows(2) {
        if is_vowel(pair[1]) && !is_vowel(pair[0]) {
            count += 1;
        }
    }

    let len = chars.len();
    if chars[len - 1] == 'e' {
        count -= 1;
    }
    if len > 2 && chars[len - 2] == 'l' && chars[len - 1] == 'e' && !is_vowel(chars[len - 3]) {
        count += 1;
    }

    count.max(1) as usize
}
