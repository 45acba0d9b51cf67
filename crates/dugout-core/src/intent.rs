//! Intents and serialized dispatch.
//!
//! Presentation code turns each completed gesture into one [`Intent`] and
//! hands it to the engine. [`AssignmentEngine::apply`] runs it to completion
//! and reports an [`Outcome`]; an error leaves the engine untouched.
//!
//! When several event sources feed one engine, wrap it in a
//! [`SharedEngine`]: every intent takes the same lock, so intents are applied
//! one at a time and never interleave.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use roster::{FieldSlot, PlayerId};
use serde::{Deserialize, Serialize};

use crate::engine::{AssignmentEngine, Placement};
use crate::error::AssignmentError;
use crate::order::SlotWrite;
use crate::snapshot::ManagerName;

// =============================================================================
// Intent
// =============================================================================

/// One user gesture, as a request to the engine.
///
/// Serialized with an `op` tag, e.g.
/// `{"op": "place_in_field", "player": 665489, "slot": "SS"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Intent {
    /// Move a player onto a field slot.
    PlaceInField {
        /// Player to move
        player: PlayerId,
        /// Destination
        slot: FieldSlot,
    },
    /// Place the selected player.
    PlaceSelected {
        /// Destination
        slot: FieldSlot,
    },
    /// Empty a field slot.
    RemoveFromField {
        /// Slot to empty
        slot: FieldSlot,
    },
    /// Write a batting-order slot.
    SetLineupSlot {
        /// 0-based index
        index: usize,
        /// Batter
        player: PlayerId,
    },
    /// Replace the batting order with a permutation of itself.
    ReorderLineup {
        /// New order, nine entries
        order: Vec<Option<PlayerId>>,
    },
    /// Drag one batting-order entry to a new index.
    MoveLineupEntry {
        /// Index dragged from
        from: usize,
        /// Index dropped at
        to: usize,
    },
    /// Clear a batting-order slot.
    RemoveFromLineup {
        /// 0-based index
        index: usize,
    },
    /// Write a rotation slot.
    SetRotationSlot {
        /// 0-based index
        index: usize,
        /// Starter
        player: PlayerId,
    },
    /// Clear a rotation slot.
    RemoveFromRotation {
        /// 0-based index
        index: usize,
    },
    /// Toggle the selection cursor.
    SelectPlayer {
        /// Player to toggle
        player: PlayerId,
    },
    /// Clear the selection cursor.
    ClearSelection,
    /// Empty the field and bench the given players.
    InitBench {
        /// Bench contents, in order
        players: Vec<PlayerId>,
    },
    /// Bench the whole catalog.
    InitFromCatalog,
    /// Confirm the manager name.
    SetManagerName {
        /// First name
        first: String,
        /// Last name
        last: String,
    },
    /// Return to the initial empty state.
    Reset,
}

/// What an applied intent did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// A field placement.
    Placed(Placement),
    /// A player left the field; `None` if the slot was already empty.
    Removed(Option<PlayerId>),
    /// A lineup or rotation write.
    Written(SlotWrite),
    /// A lineup or rotation index was cleared.
    Cleared(Option<PlayerId>),
    /// The selection cursor now points here.
    Selected(Option<PlayerId>),
    /// The intent completed with nothing to report.
    Done,
}

impl AssignmentEngine {
    /// Applies one intent.
    ///
    /// # Errors
    ///
    /// Whatever the underlying operation rejects with; the engine is unchanged.
    pub fn apply(&mut self, intent: Intent) -> Result<Outcome, AssignmentError> {
        let outcome = match intent {
            Intent::PlaceInField { player, slot } => {
                Outcome::Placed(self.place_in_field(player, slot)?)
            }
            Intent::PlaceSelected { slot } => Outcome::Placed(self.place_selected(slot)?),
            Intent::RemoveFromField { slot } => Outcome::Removed(self.remove_from_field(slot)),
            Intent::SetLineupSlot { index, player } => {
                Outcome::Written(self.set_lineup_slot(index, player)?)
            }
            Intent::ReorderLineup { order } => {
                self.reorder_lineup(&order)?;
                Outcome::Done
            }
            Intent::MoveLineupEntry { from, to } => {
                self.move_lineup_entry(from, to)?;
                Outcome::Done
            }
            Intent::RemoveFromLineup { index } => Outcome::Cleared(self.remove_from_lineup(index)?),
            Intent::SetRotationSlot { index, player } => {
                Outcome::Written(self.set_rotation_slot(index, player)?)
            }
            Intent::RemoveFromRotation { index } => {
                Outcome::Cleared(self.remove_from_rotation(index)?)
            }
            Intent::SelectPlayer { player } => Outcome::Selected(self.select_player(player)?),
            Intent::ClearSelection => {
                self.clear_selection();
                Outcome::Selected(None)
            }
            Intent::InitBench { players } => {
                self.init_bench(players);
                Outcome::Done
            }
            Intent::InitFromCatalog => {
                self.init_from_catalog();
                Outcome::Done
            }
            Intent::SetManagerName { first, last } => {
                self.set_manager_name(ManagerName::new(&first, &last)?);
                Outcome::Done
            }
            Intent::Reset => {
                self.reset();
                Outcome::Done
            }
        };
        Ok(outcome)
    }
}

// =============================================================================
// SharedEngine
// =============================================================================

/// A cloneable handle that serializes every intent through one lock.
#[derive(Debug, Clone)]
pub struct SharedEngine {
    inner: Arc<Mutex<AssignmentEngine>>,
}

impl SharedEngine {
    /// Takes ownership of an engine.
    #[must_use]
    pub fn new(engine: AssignmentEngine) -> Self {
        Self {
            inner: Arc::new(Mutex::new(engine)),
        }
    }

    /// Applies one intent under the lock.
    ///
    /// # Errors
    ///
    /// Same as [`AssignmentEngine::apply`].
    pub fn dispatch(&self, intent: Intent) -> Result<Outcome, AssignmentError> {
        self.lock().apply(intent)
    }

    /// Runs a read-only closure against the engine under the lock.
    pub fn read<R>(&self, f: impl FnOnce(&AssignmentEngine) -> R) -> R {
        f(&self.lock())
    }

    /// Engine operations never leave partial writes behind, so a lock
    /// poisoned by a panicking reader still guards consistent state.
    fn lock(&self) -> MutexGuard<'_, AssignmentEngine> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
