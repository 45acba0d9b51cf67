//! # Roster
//!
//! Player catalog and position eligibility rules for building a national-team
//! lineup.
//!
//! This crate is the read-only leaf underneath the assignment engine:
//!
//! - **Positions**: the closed set of [`PositionClass`]es and the ten
//!   defensive [`FieldSlot`]s, with their scorecard codes
//! - **Eligibility**: pure, total predicates mapping (class, target) to
//!   allowed/denied, failing closed for unrecognised classes
//! - **Catalog**: the static registry of [`Player`] records keyed by
//!   [`PlayerId`]
//!
//! ## Usage
//!
//! ```rust
//! use roster::{is_eligible, Catalog, FieldSlot, Player, PlayerId, PositionClass};
//!
//! let catalog = Catalog::from_players(vec![
//!     Player::new(PlayerId::new(1), "Backstop", PositionClass::Catcher),
//! ])
//! .unwrap();
//!
//! let class = catalog.class_of(PlayerId::new(1)).unwrap();
//! assert!(is_eligible(class, FieldSlot::Catcher));
//! assert!(!is_eligible(class, FieldSlot::ShortStop));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod catalog;
pub mod eligibility;
pub mod player;
pub mod position;

// Re-exports for convenience
pub use catalog::{Catalog, CatalogError, CatalogFile};
pub use eligibility::{
    eligible_classes, eligible_slots, is_eligible, is_lineup_eligible, is_rotation_eligible,
    ClassSet,
};
pub use player::{Player, PlayerId};
pub use position::{DisplayGroup, FieldSlot, Hand, ParseClassError, ParseSlotError, PositionClass};
