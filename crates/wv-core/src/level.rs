//! User progression tiers.
//!
//! Levels serialize as bare integers (`1`..=`4`) because downstream
//! presentation code matches on the numeric `unlockLevel` values.

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use schemars::{JsonSchema, Schema, SchemaGenerator, json_schema};
use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

/// A user's progression tier. Each tier sees a strict superset of what the
/// tier below it sees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub enum Level {
    Contender = 1,
    Creator = 2,
    Strategist = 3,
    Elite = 4,
}

impl Level {
    /// Every level in ascending order.
    pub const ALL: [Self; 4] = [Self::Contender, Self::Creator, Self::Strategist, Self::Elite];

    /// Highest level; nothing is locked here.
    pub const MAX: Self = Self::Elite;

    #[must_use]
    pub const fn as_u8(self) -> u8 {
        self as u8
    }

    /// Display name of the tier.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Contender => "Contender",
            Self::Creator => "Creator",
            Self::Strategist => "Strategist",
            Self::Elite => "Elite",
        }
    }

    /// The tier directly above this one, if any.
    #[must_use]
    pub const fn next(self) -> Option<Self> {
        match self {
            Self::Contender => Some(Self::Creator),
            Self::Creator => Some(Self::Strategist),
            Self::Strategist => Some(Self::Elite),
            Self::Elite => None,
        }
    }

    /// Map an unchecked integer onto the tier whose gating policy applies.
    ///
    /// Anything at or above 4 is treated as Elite. Anything that is not 2, 3
    /// or >= 4 (zero, negatives) gets the Contender policy, so an unknown
    /// level never sees more than the lowest tier.
    #[must_use]
    pub const fn gate_tier(raw: i64) -> Self {
        match raw {
            i64::MIN..=1 => Self::Contender,
            2 => Self::Creator,
            3 => Self::Strategist,
            _ => Self::Elite,
        }
    }
}

impl TryFrom<i64> for Level {
    type Error = CoreError;

    fn try_from(raw: i64) -> Result<Self, Self::Error> {
        match raw {
            1 => Ok(Self::Contender),
            2 => Ok(Self::Creator),
            3 => Ok(Self::Strategist),
            4 => Ok(Self::Elite),
            other => Err(CoreError::InvalidLevel(other)),
        }
    }
}

impl From<Level> for u8 {
    fn from(level: Level) -> Self {
        level.as_u8()
    }
}

impl FromStr for Level {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw: i64 = s
            .trim()
            .parse()
            .map_err(|_| CoreError::Validation(format!("level must be an integer, got '{s}'")))?;
        Self::try_from(raw)
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_u8())
    }
}

impl JsonSchema for Level {
    fn schema_name() -> Cow<'static, str> {
        "Level".into()
    }

    fn json_schema(_generator: &mut SchemaGenerator) -> Schema {
        json_schema!({
            "type": "integer",
            "minimum": 1,
            "maximum": 4,
        })
    }
}
