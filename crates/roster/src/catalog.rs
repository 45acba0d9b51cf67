//! Static, read-only player catalog.
//!
//! The catalog is loaded once at startup and never mutated afterwards. It
//! keeps players in their file order (pitchers, catchers, infielders,
//! outfielders) and indexes them by [`PlayerId`] with a `BTreeMap` so
//! lookups and iteration are deterministic.
//!
//! # File format
//!
//! ```json
//! {
//!   "pitchers":    [{ "id": 1, "name": "...", "position": "P", "throws": "R" }],
//!   "catchers":    [{ "id": 2, "name": "...", "position": "C" }],
//!   "infielders":  [],
//!   "outfielders": []
//! }
//! ```
//!
//! # Example
//!
//! ```
//! use roster::catalog::Catalog;
//! use roster::player::PlayerId;
//! use roster::position::PositionClass;
//!
//! let json = r#"{ "pitchers": [{ "id": 10, "name": "Ace Starter", "position": "P" }] }"#;
//! let catalog = Catalog::from_json_str(json).unwrap();
//! assert_eq!(catalog.len(), 1);
//! assert_eq!(catalog.class_of(PlayerId::new(10)), Some(PositionClass::Pitcher));
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use crate::player::{Player, PlayerId};
use crate::position::PositionClass;

// =============================================================================
// Errors
// =============================================================================

/// Failure to build a catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Two records share an id.
    #[error("player id {0} appears more than once in the catalog")]
    DuplicateId(PlayerId),
    /// The catalog file is not valid JSON for the expected layout.
    #[error("malformed catalog: {0}")]
    Json(#[from] serde_json::Error),
    /// The catalog file could not be read.
    #[error("failed to read catalog {path}: {source}")]
    Io {
        /// Path that was being read
        path: String,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

// =============================================================================
// File layout
// =============================================================================

/// On-disk layout: players grouped by display category.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogFile {
    /// Pitching staff
    #[serde(default)]
    pub pitchers: Vec<Player>,
    /// Catchers
    #[serde(default)]
    pub catchers: Vec<Player>,
    /// Infielders and utility players
    #[serde(default)]
    pub infielders: Vec<Player>,
    /// Outfielders
    #[serde(default)]
    pub outfielders: Vec<Player>,
}

impl CatalogFile {
    /// Flattens the groups in file order.
    #[must_use]
    pub fn into_players(self) -> Vec<Player> {
        let mut players = self.pitchers;
        players.extend(self.catchers);
        players.extend(self.infielders);
        players.extend(self.outfielders);
        players
    }
}

// =============================================================================
// Catalog
// =============================================================================

/// Immutable registry of players keyed by identity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Catalog {
    /// Players in catalog order.
    players: Vec<Player>,
    /// Id to position in `players`.
    #[serde(skip)]
    index: BTreeMap<PlayerId, usize>,
}

impl Catalog {
    /// Builds a catalog from an ordered list of players.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::DuplicateId`] if two players share an id.
    pub fn from_players(players: Vec<Player>) -> Result<Self, CatalogError> {
        let mut index = BTreeMap::new();
        for (pos, player) in players.iter().enumerate() {
            if index.insert(player.id, pos).is_some() {
                return Err(CatalogError::DuplicateId(player.id));
            }
            if player.class == PositionClass::Unknown {
                warn!(player = %player.id, name = %player.name, "catalog player has an unrecognised position class");
            }
        }
        debug!(players = players.len(), "catalog built");
        Ok(Self { players, index })
    }

    /// Builds a catalog from the grouped file layout.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::DuplicateId`] if two players share an id.
    pub fn from_grouped(file: CatalogFile) -> Result<Self, CatalogError> {
        Self::from_players(file.into_players())
    }

    /// Parses a catalog from JSON in the grouped file layout.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Json`] for malformed input and
    /// [`CatalogError::DuplicateId`] for repeated ids.
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = serde_json::from_str(json)?;
        Self::from_grouped(file)
    }

    /// Reads and parses a catalog file.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Io`] if the file cannot be read, otherwise the
    /// same errors as [`Catalog::from_json_str`].
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    /// Returns a player by id.
    #[must_use]
    pub fn get(&self, id: PlayerId) -> Option<&Player> {
        self.index.get(&id).map(|&pos| &self.players[pos])
    }

    /// Returns true if the id belongs to a catalog player.
    #[must_use]
    pub fn contains(&self, id: PlayerId) -> bool {
        self.index.contains_key(&id)
    }

    /// Returns the position class of a player, if known.
    #[must_use]
    pub fn class_of(&self, id: PlayerId) -> Option<PositionClass> {
        self.get(id).map(|player| player.class)
    }

    /// Iterates players in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &Player> + '_ {
        self.players.iter()
    }

    /// Iterates ids in catalog order.
    pub fn ids(&self) -> impl Iterator<Item = PlayerId> + '_ {
        self.players.iter().map(|player| player.id)
    }

    /// Catalog position of a player, used to keep derived lists stable.
    #[must_use]
    pub fn position_of(&self, id: PlayerId) -> Option<usize> {
        self.index.get(&id).copied()
    }

    /// Number of players.
    #[must_use]
    pub fn len(&self) -> usize {
        self.players.len()
    }

    /// Returns true if the catalog has no players.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }
}

impl<'de> Deserialize<'de> for Catalog {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Raw {
            players: Vec<Player>,
        }

        let raw = Raw::deserialize(deserializer)?;
        Self::from_players(raw.players).map_err(serde::de::Error::custom)
    }
}
