//! Player identity and catalog records.
//!
//! Players are immutable once loaded. The engine only ever refers to them by
//! [`PlayerId`].

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::position::{Hand, PositionClass};

/// Generational suffixes kept together with the surname on share cards.
const NAME_SUFFIXES: [&str; 7] = ["JR.", "SR.", "II", "III", "IV", "JR", "SR"];

/// Opaque, stable player identifier.
///
/// Catalog ids are the public person ids used for headshots, so a plain
/// `u64` is enough.
///
/// # Example
///
/// ```
/// use roster::player::PlayerId;
///
/// let id = PlayerId::new(514888);
/// assert_eq!(id.as_u64(), 514888);
/// assert_eq!(id.to_string(), "514888");
/// ```
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(u64);

impl PlayerId {
    /// Creates a new `PlayerId` from a raw `u64` value.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the raw `u64` value of this identifier.
    #[must_use]
    pub const fn as_u64(self) -> u64 {
        self.0
    }
}

impl fmt::Debug for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PlayerId({})", self.0)
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for PlayerId {
    fn from(id: u64) -> Self {
        Self::new(id)
    }
}

impl From<PlayerId> for u64 {
    fn from(id: PlayerId) -> Self {
        id.0
    }
}

/// A catalog player record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// Stable identity.
    pub id: PlayerId,
    /// Display name, given name first.
    pub name: String,
    /// Primary position class.
    #[serde(rename = "position")]
    pub class: PositionClass,
    /// Throwing hand, when known.
    #[serde(default, rename = "throws", skip_serializing_if = "Option::is_none")]
    pub hand: Option<Hand>,
    /// Local photo reference, when the catalog provides one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo: Option<String>,
}

impl Player {
    /// Creates a player with no hand or photo information.
    #[must_use]
    pub fn new(id: PlayerId, name: impl Into<String>, class: PositionClass) -> Self {
        Self {
            id,
            name: name.into(),
            class,
            hand: None,
            photo: None,
        }
    }

    /// Sets the throwing hand.
    #[must_use]
    pub fn with_hand(mut self, hand: Hand) -> Self {
        self.hand = Some(hand);
        self
    }

    /// Sets the photo reference.
    #[must_use]
    pub fn with_photo(mut self, photo: impl Into<String>) -> Self {
        self.photo = Some(photo.into());
        self
    }

    /// Headshot location: the local photo when present, otherwise the public
    /// headshot service keyed by person id.
    #[must_use]
    pub fn headshot_url(&self) -> String {
        match &self.photo {
            Some(photo) => photo.clone(),
            None => format!(
                "https://img.mlbstatic.com/mlb-photos/image/upload/d_people:generic:headshot:67:current.png/w_213,q_auto:best/v1/people/{}/headshot/67/current",
                self.id
            ),
        }
    }

    /// Uppercase surname as printed on share cards.
    ///
    /// A trailing generational suffix stays attached to the surname when the
    /// name has more than two words.
    ///
    /// ```
    /// use roster::player::{Player, PlayerId};
    /// use roster::position::PositionClass;
    ///
    /// let p = Player::new(PlayerId::new(1), "Ronald Acuna Jr.", PositionClass::Outfielder);
    /// assert_eq!(p.surname_display(), "ACUNA JR.");
    /// let p = Player::new(PlayerId::new(2), "Salvador Perez", PositionClass::Catcher);
    /// assert_eq!(p.surname_display(), "PEREZ");
    /// ```
    #[must_use]
    pub fn surname_display(&self) -> String {
        let parts: Vec<&str> = self.name.split_whitespace().collect();
        match parts.as_slice() {
            [] => String::new(),
            [only] => only.to_uppercase(),
            [.., before, last] => {
                let last_upper = last.to_uppercase();
                if parts.len() > 2 && NAME_SUFFIXES.contains(&last_upper.as_str()) {
                    format!("{} {}", before.to_uppercase(), last_upper)
                } else {
                    last_upper
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn surname_rules() {
        let two_word_suffix = Player::new(PlayerId::new(1), "Pedro Jr", PositionClass::Infielder);
        assert_eq!(two_word_suffix.surname_display(), "JR");

        let roman = Player::new(PlayerId::new(2), "Luis Arraez II", PositionClass::Infielder);
        assert_eq!(roman.surname_display(), "ARRAEZ II");

        let single = Player::new(PlayerId::new(3), "Ozuna", PositionClass::Utility);
        assert_eq!(single.surname_display(), "OZUNA");

        let spaced = Player::new(PlayerId::new(4), "  Eugenio   Suarez ", PositionClass::Infielder);
        assert_eq!(spaced.surname_display(), "SUAREZ");
    }

    #[test]
    fn headshot_prefers_local_photo() {
        let p = Player::new(PlayerId::new(42), "Someone", PositionClass::Pitcher);
        assert!(p.headshot_url().contains("/people/42/headshot/"));
        let p = p.with_photo("/assets/players/42.png");
        assert_eq!(p.headshot_url(), "/assets/players/42.png");
    }

    #[test]
    fn deserializes_catalog_record() {
        let json = r#"{"id": 7, "name": "A Pitcher", "position": "P", "throws": "L"}"#;
        let player: Player = serde_json::from_str(json).unwrap();
        assert_eq!(player.id, PlayerId::new(7));
        assert_eq!(player.class, PositionClass::Pitcher);
        assert_eq!(player.hand, Some(Hand::Left));
        assert_eq!(player.photo, None);
    }
}
