//! Officer rank value object.

use crate::StarbaseError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Commissioned ranks, lowest first.
///
/// The stored representation is the upper-case label returned by
/// [`Rank::as_str`]; no other text is accepted by the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Rank {
    Ensign,
    Lieutenant,
    LieutenantCommander,
    Commander,
    Captain,
    Commodore,
    Admiral,
}

impl Rank {
    /// Returns all ranks in ascending order.
    #[must_use]
    pub const fn all() -> [Self; 7] {
        [
            Self::Ensign,
            Self::Lieutenant,
            Self::LieutenantCommander,
            Self::Commander,
            Self::Captain,
            Self::Commodore,
            Self::Admiral,
        ]
    }

    /// Returns the stored label.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Ensign => "ENSIGN",
            Self::Lieutenant => "LIEUTENANT",
            Self::LieutenantCommander => "LIEUTENANT_COMMANDER",
            Self::Commander => "COMMANDER",
            Self::Captain => "CAPTAIN",
            Self::Commodore => "COMMODORE",
            Self::Admiral => "ADMIRAL",
        }
    }
}

impl FromStr for Rank {
    type Err = StarbaseError;

    /// Parses a label case-insensitively; spaces and hyphens count as `_`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .map(|c| match c {
                ' ' | '-' => '_',
                other => other.to_ascii_uppercase(),
            })
            .collect();

        Self::all()
            .into_iter()
            .find(|rank| rank.as_str() == normalized)
            .ok_or_else(|| StarbaseError::ConstraintViolation(format!("Unknown rank: '{}'", s)))
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
