use std::collections::HashSet;

use crate::foundation::core::UserId;

/// The fixed, closed set of recognized user identifiers.
///
/// Built once at startup and injected into every component that needs it;
/// nothing writes to it afterwards. Iteration order is the construction
/// order, which also fixes each member's seeded layout slot.
#[derive(Clone, Debug)]
pub struct Roster {
    ids: Vec<UserId>,
    index: HashSet<UserId>,
}

impl Roster {
    /// Build a roster from explicit identifiers, preserving first-seen order
    /// and dropping duplicates.
    pub fn new(ids: impl IntoIterator<Item = UserId>) -> Self {
        let mut ordered = Vec::new();
        let mut index = HashSet::new();
        for id in ids {
            if index.insert(id.clone()) {
                ordered.push(id);
            }
        }
        Self {
            ids: ordered,
            index,
        }
    }

    /// Build a roster of `count` spreadsheet-style identifiers:
    /// `A`, `B`, …, `Z`, `AA`, `AB`, … in order.
    pub fn spreadsheet(count: usize) -> Self {
        Self::new((1..=count).map(|n| UserId(column_name(n))))
    }

    /// Whether `user` belongs to the roster.
    pub fn contains(&self, user: &UserId) -> bool {
        self.index.contains(user)
    }

    /// Iterate identifiers in roster order.
    pub fn iter(&self) -> impl Iterator<Item = &UserId> {
        self.ids.iter()
    }

    /// Number of roster members.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Whether the roster has no members.
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

/// Excel-column naming for a 1-based index: `1 -> A`, `26 -> Z`, `27 -> AA`.
fn column_name(mut n: usize) -> String {
    let mut letters = Vec::new();
    while n > 0 {
        let rem = (n - 1) % 26;
        letters.push(b'A' + rem as u8);
        n = (n - 1) / 26;
    }
    letters.into_iter().rev().map(char::from).collect()
}

#[cfg(test)]
#[path = "../../tests/unit/roster/ids.rs"]
mod tests;
