//! Defensive slot assignment.
//!
//! One cell per [`FieldSlot`], indexed by the slot's discriminant, so every
//! slot always exists and lookups are exhaustive at compile time.

use std::ops::Index;

use roster::{FieldSlot, PlayerId};
use serde::{Deserialize, Serialize};

/// Slot to player mapping for the ten defensive slots.
///
/// A player id appears in at most one slot. Only the engine writes to it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldAssignment {
    slots: [Option<PlayerId>; FieldSlot::COUNT],
}

impl FieldAssignment {
    /// An all-empty field.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The player in a slot.
    #[must_use]
    pub fn get(&self, slot: FieldSlot) -> Option<PlayerId> {
        self.slots[slot.index()]
    }

    /// The slot a player holds, if any.
    #[must_use]
    pub fn slot_of(&self, player: PlayerId) -> Option<FieldSlot> {
        FieldSlot::ALL
            .into_iter()
            .find(|slot| self.slots[slot.index()] == Some(player))
    }

    /// Returns true if the player holds any slot.
    #[must_use]
    pub fn contains(&self, player: PlayerId) -> bool {
        self.slots.contains(&Some(player))
    }

    /// Iterates every slot with its occupant, in scorecard order.
    pub fn iter(&self) -> impl Iterator<Item = (FieldSlot, Option<PlayerId>)> + '_ {
        FieldSlot::ALL
            .into_iter()
            .map(|slot| (slot, self.slots[slot.index()]))
    }

    /// Iterates occupied slots only.
    pub fn occupied(&self) -> impl Iterator<Item = (FieldSlot, PlayerId)> + '_ {
        self.iter()
            .filter_map(|(slot, player)| player.map(|id| (slot, id)))
    }

    /// Number of occupied slots.
    #[must_use]
    pub fn filled(&self) -> usize {
        self.slots.iter().flatten().count()
    }

    /// Returns true if no slot is occupied.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }

    pub(crate) fn set(&mut self, slot: FieldSlot, player: Option<PlayerId>) {
        self.slots[slot.index()] = player;
    }

    pub(crate) fn take(&mut self, slot: FieldSlot) -> Option<PlayerId> {
        self.slots[slot.index()].take()
    }
}

impl Index<FieldSlot> for FieldAssignment {
    type Output = Option<PlayerId>;

    fn index(&self, slot: FieldSlot) -> &Self::Output {
        &self.slots[slot.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_field_is_empty() {
        let field = FieldAssignment::new();
        assert!(field.is_empty());
        assert_eq!(field.filled(), 0);
        assert_eq!(field.iter().count(), FieldSlot::COUNT);
    }

    #[test]
    fn set_and_locate() {
        let mut field = FieldAssignment::new();
        let id = PlayerId::new(8);
        field.set(FieldSlot::CenterField, Some(id));

        assert_eq!(field.get(FieldSlot::CenterField), Some(id));
        assert_eq!(field[FieldSlot::CenterField], Some(id));
        assert_eq!(field.slot_of(id), Some(FieldSlot::CenterField));
        assert!(field.contains(id));
        assert_eq!(field.occupied().collect::<Vec<_>>(), vec![(FieldSlot::CenterField, id)]);
    }

    #[test]
    fn take_empties_slot() {
        let mut field = FieldAssignment::new();
        field.set(FieldSlot::Catcher, Some(PlayerId::new(2)));
        assert_eq!(field.take(FieldSlot::Catcher), Some(PlayerId::new(2)));
        assert_eq!(field.take(FieldSlot::Catcher), None);
        assert!(field.is_empty());
    }
}
