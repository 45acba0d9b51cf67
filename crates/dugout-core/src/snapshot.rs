//! Manager name and the shareable snapshot.
//!
//! A [`ShareSnapshot`] is a pure read of the engine: everything needed to
//! render the share card (diamond, batting order, rotation) flattened into
//! serializable records. Capturing it never changes engine state.

use std::fmt;

use glam::Vec2;
use roster::{FieldSlot, Player, PlayerId};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::engine::AssignmentEngine;
use crate::schedule::{Game, Schedule};

// =============================================================================
// ManagerName
// =============================================================================

/// A manager name that failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum NameError {
    /// The first name is blank.
    #[error("manager first name is empty")]
    MissingFirst,
    /// The last name is blank.
    #[error("manager last name is empty")]
    MissingLast,
}

/// The confirmed name printed on the share card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManagerName {
    first: String,
    last: String,
}

impl ManagerName {
    /// Trims both parts and rejects blank ones.
    ///
    /// # Errors
    ///
    /// [`NameError::MissingFirst`] or [`NameError::MissingLast`] when a part
    /// is empty after trimming. The first name is checked first.
    pub fn new(first: &str, last: &str) -> Result<Self, NameError> {
        let first = first.trim();
        let last = last.trim();
        if first.is_empty() {
            return Err(NameError::MissingFirst);
        }
        if last.is_empty() {
            return Err(NameError::MissingLast);
        }
        Ok(Self {
            first: first.to_string(),
            last: last.to_string(),
        })
    }

    /// First name.
    #[must_use]
    pub fn first(&self) -> &str {
        &self.first
    }

    /// Last name.
    #[must_use]
    pub fn last(&self) -> &str {
        &self.last
    }

    /// First and last name joined by one space.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first, self.last)
    }
}

impl fmt::Display for ManagerName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.first, self.last)
    }
}

// =============================================================================
// Snapshot records
// =============================================================================

/// Why a snapshot could not be taken.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SnapshotError {
    /// No manager name has been confirmed.
    #[error("a manager name must be confirmed before sharing")]
    MissingManager,
}

/// A player as printed on the card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerCard {
    /// Player id.
    pub id: PlayerId,
    /// Full name.
    pub name: String,
    /// Uppercase surname shown under the headshot.
    pub surname: String,
    /// Headshot image URL.
    pub headshot: String,
}

impl PlayerCard {
    fn from_player(player: &Player) -> Self {
        Self {
            id: player.id,
            name: player.name.clone(),
            surname: player.surname_display(),
            headshot: player.headshot_url(),
        }
    }
}

/// One slot on the diamond.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldCard {
    /// The defensive slot.
    pub slot: FieldSlot,
    /// Occupant, if any.
    pub player: Option<PlayerCard>,
    /// Diagram coordinates of the slot.
    pub position: Vec2,
}

/// One batting-order entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineupCard {
    /// 1-based batting position.
    pub order: usize,
    /// Batter, if any.
    pub player: Option<PlayerCard>,
    /// Field slot code, or class code when not on the field.
    pub position: Option<String>,
}

/// One rotation entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RotationCard {
    /// The game this start is for.
    pub game: Game,
    /// `Game N vs ...` label.
    pub label: String,
    /// Starter, if any.
    pub player: Option<PlayerCard>,
}

/// Everything the share card shows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShareSnapshot {
    /// Confirmed manager name.
    pub manager: ManagerName,
    /// All ten slots in scorecard order.
    pub field: Vec<FieldCard>,
    /// All nine batting positions.
    pub lineup: Vec<LineupCard>,
    /// All four starts, in game order.
    pub rotation: Vec<RotationCard>,
}

impl ShareSnapshot {
    /// Reads the engine into a snapshot.
    ///
    /// # Errors
    ///
    /// [`SnapshotError::MissingManager`] if no manager name is set.
    pub fn capture(engine: &AssignmentEngine, schedule: &Schedule) -> Result<Self, SnapshotError> {
        let manager = engine
            .manager_name()
            .cloned()
            .ok_or(SnapshotError::MissingManager)?;
        let catalog = engine.catalog();
        let view = engine.view();
        let card = |id: Option<PlayerId>| id.and_then(|id| catalog.get(id)).map(PlayerCard::from_player);

        let field = engine
            .field()
            .iter()
            .map(|(slot, id)| FieldCard {
                slot,
                player: card(id),
                position: slot.diagram_position(),
            })
            .collect();

        let lineup = engine
            .lineup()
            .iter()
            .map(|(index, id)| LineupCard {
                order: index + 1,
                player: card(id),
                position: id
                    .and_then(|id| view.display_position(id))
                    .map(str::to_string),
            })
            .collect();

        let rotation = schedule
            .games()
            .enumerate()
            .map(|(index, game)| RotationCard {
                game: game.clone(),
                label: schedule.label(index).unwrap_or_default(),
                player: card(engine.rotation().get(index)),
            })
            .collect();

        Ok(Self {
            manager,
            field,
            lineup,
            rotation,
        })
    }
}

impl fmt::Display for ShareSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn name(card: Option<&PlayerCard>) -> &str {
            card.map_or("-", |c| c.name.as_str())
        }

        writeln!(f, "Manager: {}", self.manager)?;
        writeln!(f)?;
        writeln!(f, "Defense")?;
        for entry in &self.field {
            writeln!(f, "  {:<3} {}", entry.slot.code(), name(entry.player.as_ref()))?;
        }
        writeln!(f)?;
        writeln!(f, "Batting order")?;
        for entry in &self.lineup {
            let position = entry.position.as_deref().unwrap_or("");
            writeln!(f, "  {}. {} {}", entry.order, name(entry.player.as_ref()), position)?;
        }
        writeln!(f)?;
        writeln!(f, "Rotation")?;
        for entry in &self.rotation {
            writeln!(f, "  {}: {}", entry.label, name(entry.player.as_ref()))?;
        }
        Ok(())
    }
}
