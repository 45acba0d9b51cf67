//! The roster assignment engine.
//!
//! [`AssignmentEngine`] owns the four containers a player can be referenced
//! from and is the only code that mutates them:
//!
//! - **Bench**: players not holding a field slot
//! - **Field**: the ten defensive slots
//! - **Lineup**: the nine-slot batting order
//! - **Rotation**: the four-slot starting rotation
//!
//! plus the transient selection cursor and the manager name used for export.
//!
//! # Invariants
//!
//! - A player is on the bench XOR in the field, never both.
//! - Within the field, lineup and rotation, each player appears at most once.
//! - Lineup and rotation are overlays: a player may hold a field slot and a
//!   lineup or rotation slot at the same time.
//!
//! Every operation validates its input before touching any container, so a
//! rejected call leaves the state exactly as it was.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use dugout_core::engine::{AssignmentEngine, Origin, Placement};
//! use roster::{Catalog, FieldSlot, Player, PlayerId, PositionClass};
//!
//! let catcher = PlayerId::new(1);
//! let outfielder = PlayerId::new(2);
//! let catalog = Catalog::from_players(vec![
//!     Player::new(catcher, "Backstop", PositionClass::Catcher),
//!     Player::new(outfielder, "Gap Runner", PositionClass::Outfielder),
//! ])
//! .unwrap();
//!
//! let mut engine = AssignmentEngine::new(Arc::new(catalog));
//! engine.init_from_catalog();
//!
//! let placed = engine.place_in_field(catcher, FieldSlot::Catcher).unwrap();
//! assert_eq!(placed, Placement::Placed { from: Origin::Bench });
//! assert!(engine.place_in_field(catcher, FieldSlot::CenterField).is_err());
//! assert_eq!(engine.bench().as_slice(), &[outfielder]);
//! ```

use std::collections::BTreeSet;
use std::sync::Arc;

use roster::{
    is_eligible, is_lineup_eligible, is_rotation_eligible, Catalog, FieldSlot, PlayerId,
    PositionClass,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use crate::bench::Bench;
use crate::error::{AssignmentError, OrderKind, Target};
use crate::field::FieldAssignment;
use crate::order::{Lineup, Rotation, SlotWrite, LINEUP_LEN};
use crate::query::RosterView;
use crate::snapshot::ManagerName;

// =============================================================================
// Placement results
// =============================================================================

/// Where a player was before a field placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Origin {
    /// On the bench.
    Bench,
    /// In another field slot.
    Field(FieldSlot),
}

/// Effect of a successful [`AssignmentEngine::place_in_field`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Placement {
    /// The target was empty; the player left `from`.
    Placed {
        /// Where the player came from
        from: Origin,
    },
    /// The target was occupied; the occupant went to `from`.
    Swapped {
        /// Where the player came from, and where the occupant went
        from: Origin,
        /// The previous occupant of the target slot
        displaced: PlayerId,
    },
    /// The player already held the target slot.
    Unchanged,
}

// =============================================================================
// AssignmentEngine
// =============================================================================

/// Owner of bench, field, lineup, rotation and selection state.
///
/// The catalog is shared read-only; the engine never mutates it.
#[derive(Debug, Clone)]
pub struct AssignmentEngine {
    catalog: Arc<Catalog>,
    bench: Bench,
    field: FieldAssignment,
    lineup: Lineup,
    rotation: Rotation,
    selected: Option<PlayerId>,
    manager: Option<ManagerName>,
}

impl AssignmentEngine {
    /// Creates an engine with every container empty.
    #[must_use]
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self {
            catalog,
            bench: Bench::new(),
            field: FieldAssignment::new(),
            lineup: Lineup::new(),
            rotation: Rotation::new(),
            selected: None,
            manager: None,
        }
    }

    // -------------------------------------------------------------------------
    // Read access
    // -------------------------------------------------------------------------

    /// The player catalog.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The bench.
    #[must_use]
    pub fn bench(&self) -> &Bench {
        &self.bench
    }

    /// The defensive assignment.
    #[must_use]
    pub fn field(&self) -> &FieldAssignment {
        &self.field
    }

    /// The batting order.
    #[must_use]
    pub fn lineup(&self) -> &Lineup {
        &self.lineup
    }

    /// The starting rotation.
    #[must_use]
    pub fn rotation(&self) -> &Rotation {
        &self.rotation
    }

    /// The selected player, if any.
    #[must_use]
    pub const fn selected(&self) -> Option<PlayerId> {
        self.selected
    }

    /// The confirmed manager name, if any.
    #[must_use]
    pub fn manager_name(&self) -> Option<&ManagerName> {
        self.manager.as_ref()
    }

    /// Derived read-only queries over the current state.
    #[must_use]
    pub fn view(&self) -> RosterView<'_> {
        RosterView::new(self)
    }

    // -------------------------------------------------------------------------
    // Initialization
    // -------------------------------------------------------------------------

    /// Empties the field and puts exactly `players` on the bench.
    ///
    /// Ids missing from the catalog and repeated ids are dropped with a
    /// warning, so the bench never references a player twice.
    pub fn init_bench(&mut self, players: impl IntoIterator<Item = PlayerId>) {
        let mut seen = BTreeSet::new();
        let mut bench = Vec::new();
        for id in players {
            if !self.catalog.contains(id) {
                warn!(player = %id, "dropping unknown player from bench");
            } else if !seen.insert(id) {
                warn!(player = %id, "dropping repeated player from bench");
            } else {
                bench.push(id);
            }
        }
        debug!(bench = bench.len(), "bench initialized");
        self.field = FieldAssignment::new();
        self.bench.reset_to(bench);
    }

    /// Puts the whole catalog on the bench, in catalog order.
    pub fn init_from_catalog(&mut self) {
        let ids: Vec<PlayerId> = self.catalog.ids().collect();
        self.init_bench(ids);
    }

    /// Restores every container, the selection and the manager name to their
    /// initial empty state.
    pub fn reset(&mut self) {
        self.bench.clear();
        self.field = FieldAssignment::new();
        self.lineup = Lineup::new();
        self.rotation = Rotation::new();
        self.selected = None;
        self.manager = None;
        debug!("engine reset");
    }

    // -------------------------------------------------------------------------
    // Field
    // -------------------------------------------------------------------------

    /// Moves a player from the bench or another field slot into `slot`.
    ///
    /// - Empty target: the player leaves their origin and takes the slot.
    /// - Occupied target: the occupant takes the player's origin, either the
    ///   vacated field slot or the player's exact bench position.
    /// - The player already in `slot`: nothing changes.
    ///
    /// A successful placement clears the selection cursor.
    ///
    /// # Errors
    ///
    /// - [`AssignmentError::UnknownPlayer`] for ids outside the catalog
    /// - [`AssignmentError::Ineligible`] when the rules deny the pairing
    /// - [`AssignmentError::NotAvailable`] when the player is on neither the
    ///   bench nor the field
    pub fn place_in_field(
        &mut self,
        player: PlayerId,
        slot: FieldSlot,
    ) -> Result<Placement, AssignmentError> {
        let class = self.class_of(player)?;
        if !is_eligible(class, slot) {
            return Err(self.reject(AssignmentError::Ineligible {
                player,
                class,
                target: Target::Field(slot),
            }));
        }

        let from = match self.field.slot_of(player) {
            Some(current) if current == slot => return Ok(Placement::Unchanged),
            Some(current) => Origin::Field(current),
            None if self.bench.contains(player) => Origin::Bench,
            None => return Err(self.reject(AssignmentError::NotAvailable(player))),
        };

        let placement = match self.field.get(slot) {
            None => {
                match from {
                    Origin::Field(current) => {
                        self.field.take(current);
                    }
                    Origin::Bench => {
                        self.bench.remove(player);
                    }
                }
                Placement::Placed { from }
            }
            Some(occupant) => {
                match from {
                    Origin::Field(current) => self.field.set(current, Some(occupant)),
                    Origin::Bench => {
                        self.bench.replace(player, occupant);
                    }
                }
                Placement::Swapped {
                    from,
                    displaced: occupant,
                }
            }
        };
        self.field.set(slot, Some(player));
        self.selected = None;

        trace!(player = %player, slot = %slot, ?placement, "placed in field");
        Ok(placement)
    }

    /// Places the selected player into `slot`.
    ///
    /// # Errors
    ///
    /// [`AssignmentError::NothingSelected`] without a selection, otherwise
    /// the errors of [`AssignmentError`] for [`Self::place_in_field`].
    pub fn place_selected(&mut self, slot: FieldSlot) -> Result<Placement, AssignmentError> {
        let player = self
            .selected
            .ok_or_else(|| self.reject(AssignmentError::NothingSelected))?;
        self.place_in_field(player, slot)
    }

    /// Empties `slot` and sends its occupant to the end of the bench.
    ///
    /// Returns the removed player; an empty slot is a no-op returning `None`.
    pub fn remove_from_field(&mut self, slot: FieldSlot) -> Option<PlayerId> {
        let player = self.field.take(slot)?;
        self.bench.push(player);
        trace!(player = %player, slot = %slot, "removed from field");
        Some(player)
    }

    // -------------------------------------------------------------------------
    // Lineup
    // -------------------------------------------------------------------------

    /// Writes `player` into batting-order `index`.
    ///
    /// If the player already bats elsewhere, that index is cleared first.
    /// Field and bench are untouched.
    ///
    /// # Errors
    ///
    /// - [`AssignmentError::OutOfRange`] for `index >= 9`
    /// - [`AssignmentError::UnknownPlayer`] for ids outside the catalog
    /// - [`AssignmentError::Ineligible`] for pitchers and unknown classes
    pub fn set_lineup_slot(
        &mut self,
        index: usize,
        player: PlayerId,
    ) -> Result<SlotWrite, AssignmentError> {
        self.lineup
            .check_index(index)
            .map_err(|e| self.reject(AssignmentError::out_of_range(OrderKind::Lineup, e)))?;
        let class = self.class_of(player)?;
        if !is_lineup_eligible(class) {
            return Err(self.reject(AssignmentError::Ineligible {
                player,
                class,
                target: Target::Lineup(index),
            }));
        }

        let write = self
            .lineup
            .assign(index, player)
            .map_err(|e| AssignmentError::out_of_range(OrderKind::Lineup, e))?;
        self.selected = None;
        trace!(player = %player, index, ?write, "lineup slot set");
        Ok(write)
    }

    /// Replaces the whole batting order.
    ///
    /// The new order must hold the same entries as the current one, empties
    /// included, in any arrangement.
    ///
    /// # Errors
    ///
    /// [`AssignmentError::NotAPermutation`] when entries were added, dropped
    /// or duplicated, or the length is not nine.
    pub fn reorder_lineup(&mut self, new_order: &[Option<PlayerId>]) -> Result<(), AssignmentError> {
        if !self.lineup.is_permutation_of(new_order) {
            return Err(self.reject(AssignmentError::NotAPermutation));
        }
        let slots: [Option<PlayerId>; LINEUP_LEN] = new_order
            .try_into()
            .map_err(|_| AssignmentError::NotAPermutation)?;
        self.lineup.overwrite(slots);
        trace!(?slots, "lineup reordered");
        Ok(())
    }

    /// Drags the entry at `from` to `to`, shifting the entries in between.
    ///
    /// # Errors
    ///
    /// [`AssignmentError::OutOfRange`] if either index is past the end.
    pub fn move_lineup_entry(&mut self, from: usize, to: usize) -> Result<(), AssignmentError> {
        for index in [from, to] {
            self.lineup
                .check_index(index)
                .map_err(|e| self.reject(AssignmentError::out_of_range(OrderKind::Lineup, e)))?;
        }
        let mut slots = self.lineup.slots().to_vec();
        let entry = slots.remove(from);
        slots.insert(to, entry);
        self.reorder_lineup(&slots)
    }

    /// Clears batting-order `index`, returning its previous occupant.
    ///
    /// # Errors
    ///
    /// [`AssignmentError::OutOfRange`] for `index >= 9`.
    pub fn remove_from_lineup(&mut self, index: usize) -> Result<Option<PlayerId>, AssignmentError> {
        self.lineup
            .clear(index)
            .map_err(|e| self.reject(AssignmentError::out_of_range(OrderKind::Lineup, e)))
    }

    // -------------------------------------------------------------------------
    // Rotation
    // -------------------------------------------------------------------------

    /// Writes a pitcher into rotation `index`, clearing any other index the
    /// pitcher held.
    ///
    /// # Errors
    ///
    /// - [`AssignmentError::OutOfRange`] for `index >= 4`
    /// - [`AssignmentError::UnknownPlayer`] for ids outside the catalog
    /// - [`AssignmentError::Ineligible`] for anyone but a pitcher
    pub fn set_rotation_slot(
        &mut self,
        index: usize,
        player: PlayerId,
    ) -> Result<SlotWrite, AssignmentError> {
        self.rotation
            .check_index(index)
            .map_err(|e| self.reject(AssignmentError::out_of_range(OrderKind::Rotation, e)))?;
        let class = self.class_of(player)?;
        if !is_rotation_eligible(class) {
            return Err(self.reject(AssignmentError::Ineligible {
                player,
                class,
                target: Target::Rotation(index),
            }));
        }

        let write = self
            .rotation
            .assign(index, player)
            .map_err(|e| AssignmentError::out_of_range(OrderKind::Rotation, e))?;
        self.selected = None;
        trace!(player = %player, index, ?write, "rotation slot set");
        Ok(write)
    }

    /// Clears rotation `index`, returning its previous occupant.
    ///
    /// # Errors
    ///
    /// [`AssignmentError::OutOfRange`] for `index >= 4`.
    pub fn remove_from_rotation(
        &mut self,
        index: usize,
    ) -> Result<Option<PlayerId>, AssignmentError> {
        self.rotation
            .clear(index)
            .map_err(|e| self.reject(AssignmentError::out_of_range(OrderKind::Rotation, e)))
    }

    // -------------------------------------------------------------------------
    // Selection and manager
    // -------------------------------------------------------------------------

    /// Toggles the selection cursor: selecting the selected player clears it.
    ///
    /// Returns the new selection.
    ///
    /// # Errors
    ///
    /// [`AssignmentError::UnknownPlayer`] for ids outside the catalog.
    pub fn select_player(&mut self, player: PlayerId) -> Result<Option<PlayerId>, AssignmentError> {
        self.class_of(player)?;
        self.selected = if self.selected == Some(player) {
            None
        } else {
            Some(player)
        };
        Ok(self.selected)
    }

    /// Clears the selection cursor.
    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// Stores the confirmed manager name for export.
    pub fn set_manager_name(&mut self, name: ManagerName) {
        debug!(manager = %name, "manager name confirmed");
        self.manager = Some(name);
    }

    // -------------------------------------------------------------------------
    // Helpers
    // -------------------------------------------------------------------------

    fn class_of(&self, player: PlayerId) -> Result<PositionClass, AssignmentError> {
        self.catalog
            .class_of(player)
            .ok_or_else(|| self.reject(AssignmentError::UnknownPlayer(player)))
    }

    /// Logs a rejected operation and hands the error back.
    #[allow(clippy::unused_self)]
    fn reject(&self, error: AssignmentError) -> AssignmentError {
        debug!(%error, "operation rejected");
        error
    }
}

// =============================================================================
// Tests
// =============================================================================
