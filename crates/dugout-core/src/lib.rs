//! # Dugout Core
//!
//! Roster assignment engine for building a lineup, a defensive alignment and
//! a starting rotation from a fixed player catalog.
//!
//! ## Architecture
//!
//! - **Engine**: [`AssignmentEngine`] owns bench, field, batting order,
//!   rotation and the selection cursor, and is the only writer
//! - **Intents**: one [`Intent`] per user gesture, applied atomically;
//!   [`SharedEngine`] serializes intents from several sources
//! - **Queries**: [`RosterView`] derives read-only views for presentation
//! - **Export**: [`ShareSnapshot`] flattens the state for the share card,
//!   labelled by the [`Schedule`]
//!
//! ## Usage
//!
//! ```rust
//! use std::sync::Arc;
//! use dugout_core::{AssignmentEngine, Intent};
//! use roster::{Catalog, FieldSlot, Player, PlayerId, PositionClass};
//!
//! let catalog = Catalog::from_players(vec![
//!     Player::new(PlayerId::new(7), "Gap Runner", PositionClass::Outfielder),
//! ])
//! .unwrap();
//!
//! let mut engine = AssignmentEngine::new(Arc::new(catalog));
//! engine.apply(Intent::InitFromCatalog).unwrap();
//! engine
//!     .apply(Intent::PlaceInField { player: PlayerId::new(7), slot: FieldSlot::CenterField })
//!     .unwrap();
//!
//! assert_eq!(engine.view().locate(PlayerId::new(7)), Some(FieldSlot::CenterField));
//! assert!(engine.bench().is_empty());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod bench;
pub mod engine;
pub mod error;
pub mod field;
pub mod intent;
pub mod order;
pub mod query;
pub mod schedule;
pub mod snapshot;

#[cfg(test)]
mod tests;

// Re-exports for convenience
pub use bench::Bench;
pub use engine::{AssignmentEngine, Origin, Placement};
pub use error::{AssignmentError, IndexOutOfRange, OrderKind, Target};
pub use field::FieldAssignment;
pub use intent::{Intent, Outcome, SharedEngine};
pub use order::{Lineup, Rotation, SlotOrder, SlotWrite, LINEUP_LEN, ROTATION_LEN};
pub use query::RosterView;
pub use schedule::{Game, Schedule, ScheduleError};
pub use snapshot::{
    FieldCard, LineupCard, ManagerName, NameError, PlayerCard, RotationCard, ShareSnapshot,
    SnapshotError,
};
