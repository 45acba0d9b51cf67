//! Fixed-length ordered slot sequences.
//!
//! [`SlotOrder`] backs both the nine-slot batting order and the four-slot
//! starting rotation. Each sequence holds a given player at most once.

use roster::PlayerId;
use serde::de::{self, Deserializer};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

use crate::error::IndexOutOfRange;

/// Number of batting-order slots.
pub const LINEUP_LEN: usize = 9;

/// Number of rotation slots (one per scheduled game).
pub const ROTATION_LEN: usize = 4;

/// The batting order.
pub type Lineup = SlotOrder<LINEUP_LEN>;

/// The starting rotation.
pub type Rotation = SlotOrder<ROTATION_LEN>;

/// An ordered sequence of exactly `N` optional player slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotOrder<const N: usize> {
    slots: [Option<PlayerId>; N],
}

/// Result of writing a player into a sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SlotWrite {
    /// Index the player was moved out of to avoid a duplicate.
    pub cleared_index: Option<usize>,
    /// Player who previously held the written index.
    pub replaced: Option<PlayerId>,
}

impl<const N: usize> SlotOrder<N> {
    /// Number of slots.
    pub const LEN: usize = N;

    /// All slots empty.
    #[must_use]
    pub const fn new() -> Self {
        Self { slots: [None; N] }
    }

    /// Builds a sequence from raw slots.
    ///
    /// Returns `None` if a player appears more than once.
    #[must_use]
    pub fn from_slots(slots: [Option<PlayerId>; N]) -> Option<Self> {
        let order = Self { slots };
        order.has_unique_players().then_some(order)
    }

    /// The player at `index`; `None` when empty or out of range.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<PlayerId> {
        self.slots.get(index).copied().flatten()
    }

    /// Raw slots.
    #[must_use]
    pub const fn slots(&self) -> &[Option<PlayerId>; N] {
        &self.slots
    }

    /// The index holding `player`.
    #[must_use]
    pub fn position_of(&self, player: PlayerId) -> Option<usize> {
        self.slots.iter().position(|slot| *slot == Some(player))
    }

    /// Returns true if `player` holds any index.
    #[must_use]
    pub fn contains(&self, player: PlayerId) -> bool {
        self.position_of(player).is_some()
    }

    /// Iterates `(index, occupant)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (usize, Option<PlayerId>)> + '_ {
        self.slots.iter().copied().enumerate()
    }

    /// Number of filled slots.
    #[must_use]
    pub fn filled(&self) -> usize {
        self.slots.iter().flatten().count()
    }

    /// Returns true if every slot holds a player.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.slots.iter().all(Option::is_some)
    }

    /// Returns true if every slot is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }

    /// Returns true if `other` holds the same multiset of entries, empties
    /// included.
    #[must_use]
    pub fn is_permutation_of(&self, other: &[Option<PlayerId>]) -> bool {
        if other.len() != N {
            return false;
        }
        let mut mine = self.slots.to_vec();
        let mut theirs = other.to_vec();
        mine.sort_unstable();
        theirs.sort_unstable();
        mine == theirs
    }

    /// Checks that `index` addresses a slot.
    ///
    /// # Errors
    ///
    /// Returns [`IndexOutOfRange`] when `index >= N`.
    pub fn check_index(&self, index: usize) -> Result<(), IndexOutOfRange> {
        if index < N {
            Ok(())
        } else {
            Err(IndexOutOfRange { index, len: N })
        }
    }

    /// Writes `player` at `index`, first clearing any other index the player
    /// held.
    pub(crate) fn assign(&mut self, index: usize, player: PlayerId) -> Result<SlotWrite, IndexOutOfRange> {
        self.check_index(index)?;
        let cleared_index = self.position_of(player).filter(|&prior| prior != index);
        if let Some(prior) = cleared_index {
            self.slots[prior] = None;
        }
        let replaced = self.slots[index].replace(player).filter(|&id| id != player);
        Ok(SlotWrite {
            cleared_index,
            replaced,
        })
    }

    /// Empties `index`, returning its previous occupant.
    pub(crate) fn clear(&mut self, index: usize) -> Result<Option<PlayerId>, IndexOutOfRange> {
        self.check_index(index)?;
        Ok(self.slots[index].take())
    }

    /// Replaces the whole sequence. Callers check the permutation first.
    pub(crate) fn overwrite(&mut self, slots: [Option<PlayerId>; N]) {
        self.slots = slots;
    }

    fn has_unique_players(&self) -> bool {
        let mut seen: Vec<PlayerId> = self.slots.iter().flatten().copied().collect();
        let total = seen.len();
        seen.sort_unstable();
        seen.dedup();
        seen.len() == total
    }
}

impl<const N: usize> Default for SlotOrder<N> {
    fn default() -> Self {
        Self::new()
    }
}

// serde's array impls stop at fixed sizes, so the const-generic sequence is
// written as a plain list and checked on the way back in.
impl<const N: usize> Serialize for SlotOrder<N> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(self.slots.iter())
    }
}

impl<'de, const N: usize> Deserialize<'de> for SlotOrder<N> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Vec::<Option<PlayerId>>::deserialize(deserializer)?;
        let len = raw.len();
        let slots: [Option<PlayerId>; N] = raw
            .try_into()
            .map_err(|_| de::Error::invalid_length(len, &format!("{N} slots").as_str()))?;
        Self::from_slots(slots)
            .ok_or_else(|| de::Error::custom("a player appears in more than one slot"))
    }
}
