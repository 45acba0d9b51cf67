//! The bench: players not holding a field slot.

use roster::PlayerId;
use serde::{Deserialize, Serialize};

/// Players available to be placed on the field.
///
/// Order is kept so that a displaced player takes the exact bench position of
/// the player who replaced them, and removed players go to the end.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Bench {
    players: Vec<PlayerId>,
}

impl Bench {
    /// An empty bench.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if the player is on the bench.
    #[must_use]
    pub fn contains(&self, player: PlayerId) -> bool {
        self.players.contains(&player)
    }

    /// Bench players in order.
    #[must_use]
    pub fn as_slice(&self) -> &[PlayerId] {
        &self.players
    }

    /// Iterates bench players in order.
    pub fn iter(&self) -> impl Iterator<Item = PlayerId> + '_ {
        self.players.iter().copied()
    }

    /// Number of players on the bench.
    #[must_use]
    pub fn len(&self) -> usize {
        self.players.len()
    }

    /// Returns true if the bench is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    pub(crate) fn push(&mut self, player: PlayerId) {
        self.players.push(player);
    }

    /// Removes a player, returning whether they were present.
    pub(crate) fn remove(&mut self, player: PlayerId) -> bool {
        match self.players.iter().position(|&id| id == player) {
            Some(pos) => {
                self.players.remove(pos);
                true
            }
            None => false,
        }
    }

    /// Puts `incoming` where `outgoing` sat.
    pub(crate) fn replace(&mut self, outgoing: PlayerId, incoming: PlayerId) -> bool {
        match self.players.iter_mut().find(|id| **id == outgoing) {
            Some(slot) => {
                *slot = incoming;
                true
            }
            None => false,
        }
    }

    pub(crate) fn reset_to(&mut self, players: Vec<PlayerId>) {
        self.players = players;
    }

    pub(crate) fn clear(&mut self) {
        self.players.clear();
    }
}
