//! Quote and bracket roles

use crate::language::interface::EnclosureRole;
use std::collections::HashMap;

/// Maps enclosure characters to their role
#[derive(Debug, Clone, Default)]
pub struct EnclosureTable {
    roles: HashMap<char, EnclosureRole>,
}

impl EnclosureTable {
    /// Build from `(open, close, symmetric)` pairs
    ///
    /// A character that opens one pair and closes another gets
    /// [`EnclosureRole::Both`].
    pub fn new(pairs: impl IntoIterator<Item = (char, char, bool)>) -> Self {
        let mut table = Self::default();
        for (open, close, symmetric) in pairs {
            if symmetric {
                table.assign(open, EnclosureRole::Both);
                table.assign(close, EnclosureRole::Both);
            } else {
                table.assign(open, EnclosureRole::Open);
                table.assign(close, EnclosureRole::Close);
            }
        }
        table
    }

    fn assign(&mut self, ch: char, role: EnclosureRole) {
        self.roles
            .entry(ch)
            .and_modify(|existing| {
                if *existing != role {
                    *existing = EnclosureRole::Both;
                }
            })
            .or_insert(role);
    }

    #[inline]
    pub fn role(&self, ch: char) -> Option<EnclosureRole> {
        self.roles.get(&ch).copied()
    }
}
