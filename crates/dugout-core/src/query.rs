//! Read-only derived views over engine state.
//!
//! [`RosterView`] borrows an [`AssignmentEngine`] immutably and answers the
//! questions presentation code asks between intents: where a player stands,
//! who may fill a slot, how the bench splits by display group.
//!
//! Candidate lists are returned in catalog order.
//!
//! # Exclusion scopes
//!
//! The two candidate contexts exclude different players:
//!
//! - Field context (any [`FieldSlot`], and the rotation as the pitcher
//!   context): players already in the field **or** the rotation are excluded.
//! - Lineup context: only players already in the batting order are excluded.

use roster::{
    is_eligible, is_lineup_eligible, is_rotation_eligible, DisplayGroup, FieldSlot, Player,
    PlayerId,
};

use crate::engine::AssignmentEngine;

// =============================================================================
// RosterView
// =============================================================================

/// Immutable query surface over an [`AssignmentEngine`].
#[derive(Debug, Clone, Copy)]
pub struct RosterView<'a> {
    engine: &'a AssignmentEngine,
}

impl<'a> RosterView<'a> {
    /// Wraps an engine.
    #[must_use]
    pub fn new(engine: &'a AssignmentEngine) -> Self {
        Self { engine }
    }

    /// The field slot a player holds, if any.
    #[must_use]
    pub fn locate(&self, player: PlayerId) -> Option<FieldSlot> {
        self.engine.field().slot_of(player)
    }

    /// Returns true if the player holds a field slot or a rotation slot.
    fn placed_in_field_context(&self, player: PlayerId) -> bool {
        self.engine.field().contains(player) || self.engine.rotation().contains(player)
    }

    /// Players eligible for `slot` who hold neither a field slot nor a
    /// rotation slot.
    #[must_use]
    pub fn eligible_for_field(&self, slot: FieldSlot) -> Vec<&'a Player> {
        self.engine
            .catalog()
            .iter()
            .filter(|p| is_eligible(p.class, slot) && !self.placed_in_field_context(p.id))
            .collect()
    }

    /// Pitchers who hold neither a field slot nor a rotation slot.
    #[must_use]
    pub fn eligible_for_rotation(&self) -> Vec<&'a Player> {
        self.engine
            .catalog()
            .iter()
            .filter(|p| is_rotation_eligible(p.class) && !self.placed_in_field_context(p.id))
            .collect()
    }

    /// Non-pitchers not yet in the batting order.
    ///
    /// Field and rotation membership do not matter here.
    #[must_use]
    pub fn eligible_for_lineup(&self) -> Vec<&'a Player> {
        let lineup = self.engine.lineup();
        self.engine
            .catalog()
            .iter()
            .filter(|p| is_lineup_eligible(p.class) && !lineup.contains(p.id))
            .collect()
    }

    /// Field slots the player may move to: eligible, and either empty or
    /// already held by that player.
    ///
    /// Empty for unknown players.
    #[must_use]
    pub fn open_slots_for(&self, player: PlayerId) -> Vec<FieldSlot> {
        let Some(class) = self.engine.catalog().class_of(player) else {
            return Vec::new();
        };
        let field = self.engine.field();
        FieldSlot::ALL
            .into_iter()
            .filter(|&slot| is_eligible(class, slot))
            .filter(|&slot| field.get(slot).map_or(true, |id| id == player))
            .collect()
    }

    /// Position code shown on a lineup card: the field slot when the player
    /// is on the field, else the player's own class code.
    #[must_use]
    pub fn display_position(&self, player: PlayerId) -> Option<&'static str> {
        match self.locate(player) {
            Some(slot) => Some(slot.code()),
            None => self.engine.catalog().class_of(player).map(|c| c.code()),
        }
    }

    /// Bench players split by display group, groups in fixed order, players
    /// in bench order.
    ///
    /// Players with an unrecognised class belong to no group and are left
    /// out.
    #[must_use]
    pub fn bench_groups(&self) -> Vec<(DisplayGroup, Vec<&'a Player>)> {
        let catalog = self.engine.catalog();
        DisplayGroup::ALL
            .into_iter()
            .map(|group| {
                let players = self
                    .engine
                    .bench()
                    .iter()
                    .filter_map(|id| catalog.get(id))
                    .filter(|p| p.class.display_group() == Some(group))
                    .collect();
                (group, players)
            })
            .collect()
    }

    /// Number of players on the bench.
    #[must_use]
    pub fn bench_count(&self) -> usize {
        self.engine.bench().len()
    }
}

// =============================================================================
// Tests
// =============================================================================
