use std::collections::HashMap;

use crate::{
    foundation::core::{CursorPosition, UserId},
    roster::ids::Roster,
};

/// Mapping from user identity to cursor position.
pub type PositionMap = HashMap<UserId, CursorPosition>;

/// Canonical owner of the user→position mapping.
///
/// The roster gate in [`PositionStore::set`] is the single point that keeps
/// the key set a subset of the roster; renderers only ever receive read
/// access through [`PositionStore::snapshot`].
#[derive(Debug)]
pub struct PositionStore {
    roster: Roster,
    positions: PositionMap,
}

impl PositionStore {
    /// Create an empty store bound to `roster`.
    pub fn new(roster: Roster) -> Self {
        Self {
            roster,
            positions: PositionMap::new(),
        }
    }

    /// Seed one entry per roster member in a vertical stack: member `i` is
    /// placed at `(0, i × spacing)`.
    ///
    /// Re-invocation overwrites every position with the seeded layout.
    pub fn initialize(&mut self, spacing: f64) {
        self.positions.clear();
        for (i, user) in self.roster.iter().enumerate() {
            self.positions
                .insert(user.clone(), CursorPosition::new(0.0, i as f64 * spacing));
        }
    }

    /// Overwrite `user`'s position.
    ///
    /// Updates for identifiers outside the roster are dropped after a
    /// warning and leave the mapping untouched. Returns whether the update
    /// was applied.
    pub fn set(&mut self, user: &UserId, pos: CursorPosition) -> bool {
        if !self.roster.contains(user) {
            tracing::warn!(user = %user, "position update for unrecognized user dropped");
            return false;
        }
        self.positions.insert(user.clone(), pos);
        true
    }

    /// Read-only view of the current mapping; reflects the latest
    /// [`PositionStore::set`] calls with no staleness window.
    pub fn snapshot(&self) -> &PositionMap {
        &self.positions
    }

    /// The roster this store is bound to.
    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// Drop all positions (teardown path).
    pub fn clear(&mut self) {
        self.positions.clear();
    }
}

#[cfg(test)]
#[path = "../../tests/unit/store/positions.rs"]
mod tests;
