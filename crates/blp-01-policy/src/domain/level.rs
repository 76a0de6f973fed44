//! # Security Levels
//!
//! The four-point lattice every subject clearance and object label is drawn
//! from. The derived `Ord` is the dominance relation: a higher rank is more
//! sensitive and dominates every lower rank.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::errors::UnknownLevel;

/// A Bell-LaPadula security level.
///
/// Ranks are fixed and never renumbered; persisted files and menu input
/// depend on them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum SecurityLevel {
    /// Rank 0. Bottom of the lattice.
    #[default]
    Public = 0,
    /// Rank 1.
    Confidential = 1,
    /// Rank 2.
    Privileged = 2,
    /// Rank 3. Top of the lattice.
    Secret = 3,
}

/// Lower-case lookup table. Names are matched after trimming and lowering.
const LEVEL_NAMES: [(&str, SecurityLevel); 4] = [
    ("public", SecurityLevel::Public),
    ("confidential", SecurityLevel::Confidential),
    ("privileged", SecurityLevel::Privileged),
    ("secret", SecurityLevel::Secret),
];

impl SecurityLevel {
    /// Every level, bottom to top.
    pub const ALL: [SecurityLevel; 4] = [
        SecurityLevel::Public,
        SecurityLevel::Confidential,
        SecurityLevel::Privileged,
        SecurityLevel::Secret,
    ];

    /// Numeric rank (0 = Public, 3 = Secret).
    pub const fn rank(self) -> u8 {
        self as u8
    }

    /// Level for a numeric rank, if one exists.
    pub fn from_rank(rank: u8) -> Option<Self> {
        Self::ALL.get(rank as usize).copied()
    }

    /// Canonical capitalized name.
    pub const fn as_str(self) -> &'static str {
        match self {
            SecurityLevel::Public => "Public",
            SecurityLevel::Confidential => "Confidential",
            SecurityLevel::Privileged => "Privileged",
            SecurityLevel::Secret => "Secret",
        }
    }
}

/// Case-insensitive strict lookup. Returns `None` for anything that is not
/// one of the four level names.
pub fn try_parse_level(text: &str) -> Option<SecurityLevel> {
    let key = text.trim().to_ascii_lowercase();
    LEVEL_NAMES
        .iter()
        .find(|(name, _)| *name == key)
        .map(|(_, level)| *level)
}

/// Lenient lookup used for persisted records and free-text input.
///
/// Unrecognized or empty input falls back to `Public`; this never fails.
pub fn parse_level(text: &str) -> SecurityLevel {
    try_parse_level(text).unwrap_or(SecurityLevel::Public)
}

/// Canonical display name of a level.
pub fn level_to_string(level: SecurityLevel) -> &'static str {
    level.as_str()
}

impl fmt::Display for SecurityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SecurityLevel {
    type Err = UnknownLevel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        try_parse_level(s).ok_or_else(|| UnknownLevel(s.to_string()))
    }
}

impl TryFrom<String> for SecurityLevel {
    type Error = UnknownLevel;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<SecurityLevel> for String {
    fn from(level: SecurityLevel) -> Self {
        level.as_str().to_string()
    }
}
