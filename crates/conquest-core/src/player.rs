use core::fmt;

use crate::TileIndex;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Seat index assigned by the game server. Non-negative terrain codes are owner ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct PlayerId(pub u32);

impl PlayerId {
    pub fn from_code(code: i32) -> Option<Self> {
        u32::try_from(code).ok().map(Self)
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "p{}", self.0)
    }
}

/// Scoreboard row as reported by the server each turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ScoreRecord {
    #[cfg_attr(feature = "serde", serde(rename = "i"))]
    pub player: PlayerId,
    pub total: u32,
    pub tiles: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub dead: bool,
}

impl ScoreRecord {
    pub fn new(player: PlayerId, total: u32, tiles: u32) -> Self {
        Self {
            player,
            total,
            tiles,
            dead: false,
        }
    }

    pub fn aggregate(&self) -> u64 {
        self.total as u64 + self.tiles as u64
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct OpponentRecord {
    pub player: PlayerId,
    pub total_armies: u32,
    pub total_tiles: u32,
    /// Last known general tile. Never reverts to `None` once observed.
    pub general: Option<TileIndex>,
    pub alive: bool,
}

impl OpponentRecord {
    pub fn from_score(score: &ScoreRecord) -> Self {
        Self {
            player: score.player,
            total_armies: score.total,
            total_tiles: score.tiles,
            general: None,
            alive: !score.dead,
        }
    }

    pub fn aggregate_score(&self) -> u64 {
        self.total_armies as u64 + self.total_tiles as u64
    }

    /// Known, living general: the only kind worth marching on.
    pub fn target_general(&self) -> Option<TileIndex> {
        if self.alive {
            self.general
        } else {
            None
        }
    }
}
