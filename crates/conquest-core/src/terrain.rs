//! Raw terrain codes and their derived tile classes.

use crate::PlayerId;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub const TERRAIN_EMPTY: i32 = -1;
pub const TERRAIN_MOUNTAIN: i32 = -2;
pub const TERRAIN_FOG: i32 = -3;
/// Fogged mountain or fogged city; the server does not tell them apart.
pub const TERRAIN_FOG_OBSTACLE: i32 = -4;

/// Decoded terrain sentinel for a single tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Terrain {
    Empty,
    Mountain,
    Fog,
    FogObstacle,
    Owned(PlayerId),
}

impl Terrain {
    /// Codes below the known sentinels are treated as confirmed mountains.
    pub fn from_code(code: i32) -> Self {
        match code {
            TERRAIN_EMPTY => Self::Empty,
            TERRAIN_MOUNTAIN => Self::Mountain,
            TERRAIN_FOG => Self::Fog,
            TERRAIN_FOG_OBSTACLE => Self::FogObstacle,
            c => PlayerId::from_code(c).map_or(Self::Mountain, Self::Owned),
        }
    }

    pub fn code(self) -> i32 {
        match self {
            Self::Empty => TERRAIN_EMPTY,
            Self::Mountain => TERRAIN_MOUNTAIN,
            Self::Fog => TERRAIN_FOG,
            Self::FogObstacle => TERRAIN_FOG_OBSTACLE,
            Self::Owned(player) => player.0 as i32,
        }
    }

    pub fn owner(self) -> Option<PlayerId> {
        match self {
            Self::Owned(player) => Some(player),
            _ => None,
        }
    }

    /// Fog or anything at or above the empty sentinel.
    pub fn is_traversable(self) -> bool {
        matches!(self, Self::Empty | Self::Fog | Self::Owned(_))
    }

    pub fn is_fogged(self) -> bool {
        matches!(self, Self::Fog | Self::FogObstacle)
    }
}

/// What the bot believes a tile to be this turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TileClass {
    Empty,
    Mountain,
    Fogged,
    FoggedMountain,
    City,
    General,
    OwnedByMe,
    OwnedByOpponent,
}

impl TileClass {
    pub fn classify(terrain: Terrain, me: PlayerId, is_general: bool, is_city: bool) -> Self {
        match terrain {
            Terrain::Mountain => Self::Mountain,
            Terrain::FogObstacle => Self::FoggedMountain,
            Terrain::Fog => Self::Fogged,
            _ if is_general => Self::General,
            _ if is_city => Self::City,
            Terrain::Owned(owner) if owner == me => Self::OwnedByMe,
            Terrain::Owned(_) => Self::OwnedByOpponent,
            Terrain::Empty => Self::Empty,
        }
    }
}
