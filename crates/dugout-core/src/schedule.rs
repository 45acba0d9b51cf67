//! Pool-play schedule used to label rotation slots.
//!
//! The schedule is static data, not engine state: rotation index `i` is the
//! starter for game `i`.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::order::ROTATION_LEN;

/// A schedule that does not have one game per rotation slot.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("schedule needs exactly {expected} games, got {got}")]
pub struct ScheduleError {
    /// Required number of games
    pub expected: usize,
    /// Number supplied
    pub got: usize,
}

/// One scheduled game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    /// Opponent name.
    pub opponent: String,
    /// Two-letter country code, used for the flag icon.
    pub flag: String,
    /// Game date.
    pub date: NaiveDate,
    /// Venue.
    pub venue: String,
}

impl Game {
    /// Creates a game record.
    #[must_use]
    pub fn new(
        opponent: impl Into<String>,
        flag: impl Into<String>,
        date: NaiveDate,
        venue: impl Into<String>,
    ) -> Self {
        Self {
            opponent: opponent.into(),
            flag: flag.into(),
            date,
            venue: venue.into(),
        }
    }

    /// Flag image URL.
    #[must_use]
    pub fn flag_url(&self) -> String {
        format!("https://flagcdn.com/32x24/{}.png", self.flag.to_lowercase())
    }
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "vs {} ({}, {})",
            self.opponent,
            self.date.format("%b %-d"),
            self.venue
        )
    }
}

/// Exactly one game per rotation slot, in rotation order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Game>", into = "Vec<Game>")]
pub struct Schedule {
    games: [Game; ROTATION_LEN],
}

impl Schedule {
    /// Builds a schedule from a list of games.
    ///
    /// # Errors
    ///
    /// Returns [`ScheduleError`] unless exactly [`ROTATION_LEN`] games are
    /// given.
    pub fn new(games: Vec<Game>) -> Result<Self, ScheduleError> {
        let got = games.len();
        let games: [Game; ROTATION_LEN] = games.try_into().map_err(|_| ScheduleError {
            expected: ROTATION_LEN,
            got,
        })?;
        Ok(Self { games })
    }

    /// The 2026 pool-play schedule in Miami.
    #[must_use]
    pub fn pool_play() -> Self {
        Self {
            games: [
                Game::new("Netherlands", "nl", march_2026(6), "Miami"),
                Game::new("Israel", "il", march_2026(7), "Miami"),
                Game::new("Nicaragua", "ni", march_2026(9), "Miami"),
                Game::new("Dominican Republic", "do", march_2026(11), "Miami"),
            ],
        }
    }

    /// The game a rotation slot is for.
    #[must_use]
    pub fn game(&self, rotation_index: usize) -> Option<&Game> {
        self.games.get(rotation_index)
    }

    /// Label for a rotation slot, e.g. `Game 2 vs Israel (Mar 7, Miami)`.
    #[must_use]
    pub fn label(&self, rotation_index: usize) -> Option<String> {
        self.game(rotation_index)
            .map(|game| format!("Game {} {game}", rotation_index + 1))
    }

    /// Iterates games in rotation order.
    pub fn games(&self) -> impl Iterator<Item = &Game> + '_ {
        self.games.iter()
    }
}

impl Default for Schedule {
    fn default() -> Self {
        Self::pool_play()
    }
}

impl TryFrom<Vec<Game>> for Schedule {
    type Error = ScheduleError;

    fn try_from(games: Vec<Game>) -> Result<Self, Self::Error> {
        Self::new(games)
    }
}

impl From<Schedule> for Vec<Game> {
    fn from(schedule: Schedule) -> Self {
        schedule.games.into()
    }
}

fn march_2026(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 3, day).unwrap_or_default()
}
