//! Level track: the fixed 2..A progression each team climbs.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::errors::domain::{DomainError, ValidationKind};

/// A team's level. Ordering follows the track, so `Level::Two < Level::Ace`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Level {
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
    Ace,
}

impl Level {
    /// The full track, bottom to top.
    pub const TRACK: [Level; 13] = [
        Level::Two,
        Level::Three,
        Level::Four,
        Level::Five,
        Level::Six,
        Level::Seven,
        Level::Eight,
        Level::Nine,
        Level::Ten,
        Level::Jack,
        Level::Queen,
        Level::King,
        Level::Ace,
    ];

    pub const BOTTOM: Level = Level::Two;
    pub const TOP: Level = Level::Ace;

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn label(self) -> &'static str {
        match self {
            Level::Two => "2",
            Level::Three => "3",
            Level::Four => "4",
            Level::Five => "5",
            Level::Six => "6",
            Level::Seven => "7",
            Level::Eight => "8",
            Level::Nine => "9",
            Level::Ten => "10",
            Level::Jack => "J",
            Level::Queen => "Q",
            Level::King => "K",
            Level::Ace => "A",
        }
    }

    /// Move `steps` positions up the track, stopping at "A".
    pub fn advance(self, steps: u8) -> Level {
        let idx = (self.index() + steps as usize).min(Self::TRACK.len() - 1);
        Self::TRACK[idx]
    }

    pub fn is_top(self) -> bool {
        self == Level::TOP
    }
}

impl Default for Level {
    fn default() -> Self {
        Level::BOTTOM
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Level {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Level::TRACK
            .iter()
            .copied()
            .find(|level| level.label().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| {
                DomainError::validation(
                    ValidationKind::InvalidLevel,
                    format!("Unknown level: {trimmed:?}"),
                )
            })
    }
}

impl Serialize for Level {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.label())
    }
}

impl<'de> Deserialize<'de> for Level {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse::<Level>().map_err(serde::de::Error::custom)
    }
}

/// Label-level operations on the track, for callers holding raw strings.
///
/// Unknown labels are rejected with `ValidationKind::InvalidLevel` rather
/// than silently treated as the bottom of the track.
pub struct LevelTrack;

impl LevelTrack {
    pub fn index_of(label: &str) -> Result<usize, DomainError> {
        Ok(label.parse::<Level>()?.index())
    }

    pub fn advance(label: &str, steps: u8) -> Result<Level, DomainError> {
        Ok(label.parse::<Level>()?.advance(steps))
    }

    pub fn compare(a: &str, b: &str) -> Result<Ordering, DomainError> {
        let a = a.parse::<Level>()?;
        let b = b.parse::<Level>()?;
        Ok(a.cmp(&b))
    }

    pub fn is_top(label: &str) -> bool {
        label.parse::<Level>().is_ok_and(Level::is_top)
    }
}
