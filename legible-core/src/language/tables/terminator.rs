//! Terminator characters

/// Set of sentence terminator characters
///
/// ASCII terminators live in a 128-bit mask; anything else goes in a small
/// sorted vector.
#[derive(Debug, Clone, Default)]
pub struct TerminatorSet {
    ascii_mask: u128,
    others: Vec<char>,
}

impl TerminatorSet {
    /// Build from the configured characters
    pub fn new(chars: impl IntoIterator<Item = char>) -> Self {
        let mut set = Self::default();
        for ch in chars {
            if ch.is_ascii() {
                set.ascii_mask |= 1u128 << (ch as u32);
            } else if let Err(pos) = set.others.binary_search(&ch) {
                set.others.insert(pos, ch);
            }
        }
        set
    }

    #[inline]
    pub fn contains(&self, ch: char) -> bool {
        if ch.is_ascii() {
            self.ascii_mask & (1u128 << (ch as u32)) != 0
        } else {
            self.others.binary_search(&ch).is_ok()
        }
    }
}
