//! Error types for the assignment engine.
//!
//! Every engine operation validates before it mutates, so an `Err` always
//! means the engine state is exactly what it was before the call.

use std::fmt;

use roster::{FieldSlot, PlayerId, PositionClass};
use thiserror::Error;

use crate::snapshot::NameError;

/// Which ordered container an index refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderKind {
    /// The nine-slot batting order.
    Lineup,
    /// The four-slot starting rotation.
    Rotation,
}

impl fmt::Display for OrderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Lineup => write!(f, "lineup"),
            Self::Rotation => write!(f, "rotation"),
        }
    }
}

/// Destination of a placement, used in error reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    /// A defensive slot.
    Field(FieldSlot),
    /// A batting-order index.
    Lineup(usize),
    /// A rotation index.
    Rotation(usize),
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Field(slot) => write!(f, "field slot {slot}"),
            Self::Lineup(index) => write!(f, "lineup slot {}", index + 1),
            Self::Rotation(index) => write!(f, "rotation slot {}", index + 1),
        }
    }
}

/// An index past the end of a fixed-size order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("index {index} is out of range for {len} slots")]
pub struct IndexOutOfRange {
    /// Requested index
    pub index: usize,
    /// Number of slots
    pub len: usize,
}

/// Reasons an engine operation is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AssignmentError {
    /// The id is not in the catalog.
    #[error("player {0} is not in the catalog")]
    UnknownPlayer(PlayerId),

    /// The player is neither on the bench nor in a field slot.
    #[error("player {0} is neither on the bench nor on the field")]
    NotAvailable(PlayerId),

    /// The eligibility rules deny this pairing.
    #[error("player {player} ({class}) is not eligible for {target}")]
    Ineligible {
        /// Player being placed
        player: PlayerId,
        /// The player's position class
        class: PositionClass,
        /// Where the player was headed
        target: Target,
    },

    /// A lineup or rotation index past the end.
    #[error("{order} {source}")]
    OutOfRange {
        /// Which order was addressed
        order: OrderKind,
        /// The offending index
        #[source]
        source: IndexOutOfRange,
    },

    /// A reorder that is not a permutation of the current batting order.
    #[error("new batting order is not a permutation of the current one")]
    NotAPermutation,

    /// `place_selected` without a selected player.
    #[error("no player is selected")]
    NothingSelected,

    /// The manager name failed validation.
    #[error(transparent)]
    InvalidName(#[from] NameError),
}

impl AssignmentError {
    pub(crate) fn out_of_range(order: OrderKind, source: IndexOutOfRange) -> Self {
        Self::OutOfRange { order, source }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_are_readable() {
        let err = AssignmentError::Ineligible {
            player: PlayerId::new(3),
            class: PositionClass::Pitcher,
            target: Target::Field(FieldSlot::Catcher),
        };
        assert_eq!(err.to_string(), "player 3 (P) is not eligible for field slot C");

        let err = AssignmentError::out_of_range(
            OrderKind::Lineup,
            IndexOutOfRange { index: 9, len: 9 },
        );
        assert_eq!(err.to_string(), "lineup index 9 is out of range for 9 slots");
    }
}
