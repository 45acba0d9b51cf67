//! Position eligibility rules.
//!
//! Pure predicates answering "may a player of class X take target Y".
//! Every rule is total over [`PositionClass`] and [`FieldSlot`], and
//! [`PositionClass::Unknown`] is denied everywhere.
//!
//! | Target | Eligible classes |
//! |---|---|
//! | `C` | Catcher, Catcher/FirstBase |
//! | `1B` | Infielder, Catcher/FirstBase |
//! | `2B`, `3B`, `SS` | Infielder, Utility |
//! | `LF`, `CF`, `RF` | Outfielder, Utility |
//! | `DH` | every known class except Pitcher |
//! | `P` (rotation) | Pitcher |
//!
//! The batting order accepts every known non-pitcher; the rotation accepts
//! pitchers only.
//!
//! # Example
//!
//! ```
//! use roster::eligibility::is_eligible;
//! use roster::position::{FieldSlot, PositionClass};
//!
//! assert!(is_eligible(PositionClass::Utility, FieldSlot::ShortStop));
//! assert!(!is_eligible(PositionClass::Utility, FieldSlot::FirstBase));
//! assert!(!is_eligible(PositionClass::Pitcher, FieldSlot::DesignatedHitter));
//! ```

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

use crate::position::{FieldSlot, PositionClass};

bitflags! {
    /// A set of position classes.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct ClassSet: u8 {
        /// Pitcher
        const PITCHER = 1 << 0;
        /// Catcher
        const CATCHER = 1 << 1;
        /// Catcher/first base
        const CATCHER_FIRST_BASE = 1 << 2;
        /// Infielder
        const INFIELDER = 1 << 3;
        /// Outfielder
        const OUTFIELDER = 1 << 4;
        /// Utility
        const UTILITY = 1 << 5;

        /// Every known class that is not a pitcher.
        const POSITION_PLAYERS = Self::CATCHER.bits()
            | Self::CATCHER_FIRST_BASE.bits()
            | Self::INFIELDER.bits()
            | Self::OUTFIELDER.bits()
            | Self::UTILITY.bits();
    }
}

impl ClassSet {
    /// The single-member set for a class. `Unknown` maps to the empty set.
    #[must_use]
    pub const fn of(class: PositionClass) -> Self {
        match class {
            PositionClass::Pitcher => Self::PITCHER,
            PositionClass::Catcher => Self::CATCHER,
            PositionClass::CatcherFirstBase => Self::CATCHER_FIRST_BASE,
            PositionClass::Infielder => Self::INFIELDER,
            PositionClass::Outfielder => Self::OUTFIELDER,
            PositionClass::Utility => Self::UTILITY,
            PositionClass::Unknown => Self::empty(),
        }
    }

    /// Returns true if the class is a member of this set.
    ///
    /// Always false for `Unknown`, since its set is empty.
    #[must_use]
    pub const fn admits(self, class: PositionClass) -> bool {
        let member = Self::of(class);
        !member.is_empty() && self.contains(member)
    }
}

/// Classes allowed in a defensive slot.
#[must_use]
pub const fn eligible_classes(slot: FieldSlot) -> ClassSet {
    match slot {
        FieldSlot::Pitcher => ClassSet::PITCHER,
        FieldSlot::Catcher => ClassSet::CATCHER.union(ClassSet::CATCHER_FIRST_BASE),
        FieldSlot::FirstBase => ClassSet::INFIELDER.union(ClassSet::CATCHER_FIRST_BASE),
        FieldSlot::SecondBase | FieldSlot::ThirdBase | FieldSlot::ShortStop => {
            ClassSet::INFIELDER.union(ClassSet::UTILITY)
        }
        FieldSlot::LeftField | FieldSlot::CenterField | FieldSlot::RightField => {
            ClassSet::OUTFIELDER.union(ClassSet::UTILITY)
        }
        FieldSlot::DesignatedHitter => ClassSet::POSITION_PLAYERS,
    }
}

/// Returns true if a player of `class` may occupy `slot`.
#[must_use]
pub const fn is_eligible(class: PositionClass, slot: FieldSlot) -> bool {
    eligible_classes(slot).admits(class)
}

/// Returns true if a player of `class` may hold a batting-order slot.
#[must_use]
pub const fn is_lineup_eligible(class: PositionClass) -> bool {
    ClassSet::POSITION_PLAYERS.admits(class)
}

/// Returns true if a player of `class` may hold a rotation slot.
#[must_use]
pub const fn is_rotation_eligible(class: PositionClass) -> bool {
    ClassSet::PITCHER.admits(class)
}

/// Every field slot a player of `class` may occupy, in scorecard order.
#[must_use]
pub fn eligible_slots(class: PositionClass) -> Vec<FieldSlot> {
    FieldSlot::ALL
        .into_iter()
        .filter(|slot| is_eligible(class, *slot))
        .collect()
}
