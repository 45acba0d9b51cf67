//! Position classes, defensive slots and throwing hands.
//!
//! Both enumerations are closed and serialize as the short codes used on a
//! scorecard (`"P"`, `"C/1B"`, `"SS"`, ...).
//!
//! # Example
//!
//! ```
//! use roster::position::{FieldSlot, PositionClass};
//!
//! let slot: FieldSlot = "1B".parse().unwrap();
//! assert_eq!(slot, FieldSlot::FirstBase);
//! assert_eq!(slot.index(), 2);
//!
//! let class: PositionClass = "C/1B".parse().unwrap();
//! assert_eq!(class, PositionClass::CatcherFirstBase);
//! ```

use std::fmt;
use std::str::FromStr;

use glam::Vec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

// =============================================================================
// Errors
// =============================================================================

/// A field slot code that names none of the ten defensive slots.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown field slot code {0:?}")]
pub struct ParseSlotError(pub String);

/// A position class code that names none of the known classes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown position class code {0:?}")]
pub struct ParseClassError(pub String);

// =============================================================================
// PositionClass
// =============================================================================

/// A player's eligibility category.
///
/// `Unknown` stands in for any code the catalog carries that this crate does
/// not recognise. Every eligibility rule denies it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PositionClass {
    /// Pitcher (`P`).
    Pitcher,
    /// Catcher (`C`).
    Catcher,
    /// Catcher who also plays first base (`C/1B`).
    CatcherFirstBase,
    /// Infielder (`IF`).
    Infielder,
    /// Outfielder (`OF`).
    Outfielder,
    /// Utility player (`UT`).
    Utility,
    /// Unrecognised class code.
    Unknown,
}

impl PositionClass {
    /// Every recognised class, in catalog display order.
    pub const KNOWN: [PositionClass; 6] = [
        PositionClass::Pitcher,
        PositionClass::Catcher,
        PositionClass::CatcherFirstBase,
        PositionClass::Infielder,
        PositionClass::Outfielder,
        PositionClass::Utility,
    ];

    /// Returns the scorecard code for this class.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Pitcher => "P",
            Self::Catcher => "C",
            Self::CatcherFirstBase => "C/1B",
            Self::Infielder => "IF",
            Self::Outfielder => "OF",
            Self::Utility => "UT",
            Self::Unknown => "?",
        }
    }

    /// Returns true for [`PositionClass::Pitcher`].
    #[must_use]
    pub const fn is_pitcher(self) -> bool {
        matches!(self, Self::Pitcher)
    }

    /// Returns the bench display group this class is listed under.
    ///
    /// `Unknown` players are not listed in any group.
    #[must_use]
    pub const fn display_group(self) -> Option<DisplayGroup> {
        match self {
            Self::Pitcher => Some(DisplayGroup::Pitchers),
            Self::Catcher | Self::CatcherFirstBase => Some(DisplayGroup::Catchers),
            Self::Infielder | Self::Utility => Some(DisplayGroup::Infielders),
            Self::Outfielder => Some(DisplayGroup::Outfielders),
            Self::Unknown => None,
        }
    }
}

impl fmt::Display for PositionClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for PositionClass {
    type Err = ParseClassError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim();
        Self::KNOWN
            .into_iter()
            .find(|class| class.code().eq_ignore_ascii_case(code))
            .ok_or_else(|| ParseClassError(s.to_string()))
    }
}

impl From<String> for PositionClass {
    /// Lenient conversion used by deserialization: unrecognised codes become
    /// [`PositionClass::Unknown`] instead of failing the whole catalog.
    fn from(code: String) -> Self {
        code.parse().unwrap_or(Self::Unknown)
    }
}

impl From<PositionClass> for String {
    fn from(class: PositionClass) -> Self {
        class.code().to_string()
    }
}

// =============================================================================
// DisplayGroup
// =============================================================================

/// Category used to group bench players for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayGroup {
    /// Pitchers.
    Pitchers,
    /// Catchers, including catcher/first basemen.
    Catchers,
    /// Infielders and utility players.
    Infielders,
    /// Outfielders.
    Outfielders,
}

impl DisplayGroup {
    /// All groups in display order.
    pub const ALL: [DisplayGroup; 4] = [
        DisplayGroup::Pitchers,
        DisplayGroup::Catchers,
        DisplayGroup::Infielders,
        DisplayGroup::Outfielders,
    ];

    /// Human-readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Pitchers => "Pitchers",
            Self::Catchers => "Catchers",
            Self::Infielders => "Infielders",
            Self::Outfielders => "Outfielders",
        }
    }
}

impl fmt::Display for DisplayGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// =============================================================================
// FieldSlot
// =============================================================================

/// One of the ten fixed defensive slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
#[repr(u8)]
pub enum FieldSlot {
    /// Pitcher (`P`)
    Pitcher = 0,
    /// Catcher (`C`)
    Catcher = 1,
    /// First base (`1B`)
    FirstBase = 2,
    /// Second base (`2B`)
    SecondBase = 3,
    /// Third base (`3B`)
    ThirdBase = 4,
    /// Shortstop (`SS`)
    ShortStop = 5,
    /// Left field (`LF`)
    LeftField = 6,
    /// Center field (`CF`)
    CenterField = 7,
    /// Right field (`RF`)
    RightField = 8,
    /// Designated hitter (`DH`)
    DesignatedHitter = 9,
}

impl FieldSlot {
    /// Total number of field slots.
    pub const COUNT: usize = 10;

    /// All slots in scorecard order.
    pub const ALL: [FieldSlot; FieldSlot::COUNT] = [
        FieldSlot::Pitcher,
        FieldSlot::Catcher,
        FieldSlot::FirstBase,
        FieldSlot::SecondBase,
        FieldSlot::ThirdBase,
        FieldSlot::ShortStop,
        FieldSlot::LeftField,
        FieldSlot::CenterField,
        FieldSlot::RightField,
        FieldSlot::DesignatedHitter,
    ];

    /// Get the index of this slot.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Scorecard code for this slot.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Pitcher => "P",
            Self::Catcher => "C",
            Self::FirstBase => "1B",
            Self::SecondBase => "2B",
            Self::ThirdBase => "3B",
            Self::ShortStop => "SS",
            Self::LeftField => "LF",
            Self::CenterField => "CF",
            Self::RightField => "RF",
            Self::DesignatedHitter => "DH",
        }
    }

    /// Where the slot is drawn on a 500x500 diamond canvas, home plate at the
    /// bottom center.
    #[must_use]
    pub fn diagram_position(self) -> Vec2 {
        match self {
            Self::Pitcher => Vec2::new(250.0, 285.0),
            Self::Catcher => Vec2::new(250.0, 420.0),
            Self::FirstBase => Vec2::new(380.0, 280.0),
            Self::SecondBase => Vec2::new(310.0, 170.0),
            Self::ThirdBase => Vec2::new(120.0, 280.0),
            Self::ShortStop => Vec2::new(190.0, 170.0),
            Self::LeftField => Vec2::new(80.0, 60.0),
            Self::CenterField => Vec2::new(250.0, 50.0),
            Self::RightField => Vec2::new(420.0, 60.0),
            // Off the diamond, near the dugout
            Self::DesignatedHitter => Vec2::new(90.0, 380.0),
        }
    }
}

impl fmt::Display for FieldSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for FieldSlot {
    type Err = ParseSlotError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim();
        Self::ALL
            .into_iter()
            .find(|slot| slot.code().eq_ignore_ascii_case(code))
            .ok_or_else(|| ParseSlotError(s.to_string()))
    }
}

impl TryFrom<String> for FieldSlot {
    type Error = ParseSlotError;

    fn try_from(code: String) -> Result<Self, Self::Error> {
        code.parse()
    }
}

impl From<FieldSlot> for String {
    fn from(slot: FieldSlot) -> Self {
        slot.code().to_string()
    }
}

// =============================================================================
// Hand
// =============================================================================

/// Throwing hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Hand {
    /// Right-handed
    #[serde(rename = "R")]
    Right,
    /// Left-handed
    #[serde(rename = "L")]
    Left,
}

impl Hand {
    /// Single-letter code (`R` or `L`).
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            Self::Right => 'R',
            Self::Left => 'L',
        }
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}HP", self.code())
    }
}
