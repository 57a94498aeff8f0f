use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::domain::{DomainError, ValidationKind};

/// Roster positions. Each owns a fixed group of slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Position {
    Captain,
    Handler,
    Cutter,
    Defender,
}

impl Position {
    pub const ALL: [Position; 4] = [
        Position::Captain,
        Position::Handler,
        Position::Cutter,
        Position::Defender,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Captain => "captain",
            Self::Handler => "handler",
            Self::Cutter => "cutter",
            Self::Defender => "defender",
        }
    }

    /// Slot group in fill order (slot 1 before slot 2).
    pub const fn slots(&self) -> &'static [Slot] {
        match self {
            Self::Captain => &[Slot::Captain],
            Self::Handler => &[Slot::Handler1, Slot::Handler2],
            Self::Cutter => &[Slot::Cutter1, Slot::Cutter2],
            Self::Defender => &[Slot::Defender1, Slot::Defender2],
        }
    }

    pub const fn capacity(&self) -> usize {
        self.slots().len()
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Position {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "captain" => Ok(Self::Captain),
            "handler" => Ok(Self::Handler),
            "cutter" => Ok(Self::Cutter),
            "defender" => Ok(Self::Defender),
            other => Err(DomainError::validation(
                ValidationKind::InvalidPosition,
                format!("Unknown position '{other}'; expected captain, handler, cutter or defender"),
            )),
        }
    }
}

/// One of the seven named roster slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Slot {
    #[serde(rename = "captain")]
    Captain,
    #[serde(rename = "handler_1")]
    Handler1,
    #[serde(rename = "handler_2")]
    Handler2,
    #[serde(rename = "cutter_1")]
    Cutter1,
    #[serde(rename = "cutter_2")]
    Cutter2,
    #[serde(rename = "defender_1")]
    Defender1,
    #[serde(rename = "defender_2")]
    Defender2,
}

impl Slot {
    pub const ALL: [Slot; 7] = [
        Slot::Captain,
        Slot::Handler1,
        Slot::Handler2,
        Slot::Cutter1,
        Slot::Cutter2,
        Slot::Defender1,
        Slot::Defender2,
    ];

    pub const fn position(&self) -> Position {
        match self {
            Self::Captain => Position::Captain,
            Self::Handler1 | Self::Handler2 => Position::Handler,
            Self::Cutter1 | Self::Cutter2 => Position::Cutter,
            Self::Defender1 | Self::Defender2 => Position::Defender,
        }
    }

    /// 1-based index within the position's group.
    pub const fn index(&self) -> u8 {
        match self {
            Self::Captain | Self::Handler1 | Self::Cutter1 | Self::Defender1 => 1,
            Self::Handler2 | Self::Cutter2 | Self::Defender2 => 2,
        }
    }

    /// Column-style name, e.g. `handler_1`.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Captain => "captain",
            Self::Handler1 => "handler_1",
            Self::Handler2 => "handler_2",
            Self::Cutter1 => "cutter_1",
            Self::Cutter2 => "cutter_2",
            Self::Defender1 => "defender_1",
            Self::Defender2 => "defender_2",
        }
    }

    /// Address a slot by position and optional 1-based index.
    ///
    /// Captain ignores the index. Multi-slot positions require 1 or 2.
    pub fn resolve(position: Position, index: Option<u8>) -> Result<Slot, DomainError> {
        if position == Position::Captain {
            return Ok(Slot::Captain);
        }
        match index {
            Some(i @ 1..=2) => Ok(position.slots()[usize::from(i - 1)]),
            Some(i) => Err(DomainError::validation(
                ValidationKind::InvalidSlot,
                format!("Slot {i} does not exist for {position}; expected 1 or 2"),
            )),
            None => Err(DomainError::validation(
                ValidationKind::InvalidSlot,
                format!("{position} has two slots; a slot index of 1 or 2 is required"),
            )),
        }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
