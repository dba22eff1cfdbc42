//! Abbreviations, matched by scanning back from a dot

use std::collections::HashMap;

#[derive(Debug, Clone, Default)]
struct Node {
    next: HashMap<char, u32>,
    terminal: bool,
}

/// Abbreviation trie
#[derive(Debug, Clone)]
pub struct AbbreviationTrie {
    nodes: Vec<Node>,
    case_sensitive: bool,
    len: usize,
}

#[inline]
fn is_word_delimiter(ch: char) -> bool {
    ch.is_whitespace()
        || matches!(
            ch,
            ',' | ';' | ':' | '(' | ')' | '[' | ']' | '{' | '}' | '"' | '\'' | '!' | '?'
        )
}

impl AbbreviationTrie {
    /// Empty trie
    pub fn new(case_sensitive: bool) -> Self {
        Self {
            nodes: vec![Node::default()],
            case_sensitive,
            len: 0,
        }
    }

    /// Build from a word list
    ///
    /// `U.S.A` also inserts `U` and `U.S`, so every inner dot is recognised.
    pub fn from_words<'a>(words: impl IntoIterator<Item = &'a str>, case_sensitive: bool) -> Self {
        let mut trie = Self::new(case_sensitive);

        for word in words {
            let word = word.trim_end_matches('.');
            trie.insert(word);
            for (idx, _) in word.match_indices('.') {
                trie.insert(&word[..idx]);
            }
        }

        trie
    }

    #[inline]
    fn normalize(&self, ch: char) -> char {
        if self.case_sensitive {
            ch
        } else {
            ch.to_lowercase().next().unwrap_or(ch)
        }
    }

    /// Add one abbreviation, without its trailing dot
    pub fn insert(&mut self, abbreviation: &str) {
        if abbreviation.is_empty() {
            return;
        }

        let mut current = 0usize;
        for ch in abbreviation.chars() {
            let ch = self.normalize(ch);
            current = match self.nodes[current].next.get(&ch) {
                Some(&child) => child as usize,
                None => {
                    let new_idx = self.nodes.len();
                    self.nodes.push(Node::default());
                    self.nodes[current].next.insert(ch, new_idx as u32);
                    new_idx
                }
            };
        }

        let node = &mut self.nodes[current];
        if !node.terminal {
            node.terminal = true;
            self.len += 1;
        }
    }

    /// Does an abbreviation end right before the dot at byte `dot_pos`?
    ///
    /// Scans backwards from the dot to the previous word delimiter and looks
    /// the word up. Returns false if `text[dot_pos]` is not a dot.
    pub fn find_abbrev(&self, text: &str, dot_pos: usize) -> bool {
        if dot_pos == 0 || !text.is_char_boundary(dot_pos) || !text[dot_pos..].starts_with('.') {
            return false;
        }

        let before = &text[..dot_pos];
        let word_start = before
            .char_indices()
            .rev()
            .find(|&(_, ch)| is_word_delimiter(ch))
            .map(|(idx, ch)| idx + ch.len_utf8())
            .unwrap_or(0);

        self.matches(&before[word_start..])
    }

    /// Exact lookup of a word (without trailing dot)
    pub fn matches(&self, word: &str) -> bool {
        if word.is_empty() {
            return false;
        }

        let mut current = 0usize;
        for ch in word.chars() {
            match self.nodes[current].next.get(&self.normalize(ch)) {
                Some(&next) => current = next as usize,
                None => return false,
            }
        }
        self.nodes[current].terminal
    }

    /// Number of stored abbreviations, prefixes included
    pub fn len(&self) -> usize {
        self.len
    }
}
