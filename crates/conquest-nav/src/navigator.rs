use conquest_core::{Board, TileIndex};

use crate::DistanceMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Ordered tiles from source to destination, both included.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TilePath {
    pub tiles: Vec<TileIndex>,
}

impl TilePath {
    pub fn new(tiles: Vec<TileIndex>) -> Self {
        Self { tiles }
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    pub fn hop_count(&self) -> usize {
        self.tiles.len().saturating_sub(1)
    }

    pub fn source(&self) -> Option<TileIndex> {
        self.tiles.first().copied()
    }

    pub fn destination(&self) -> Option<TileIndex> {
        self.tiles.last().copied()
    }

    /// Consecutive `(from, to)` pairs.
    pub fn steps(&self) -> impl Iterator<Item = (TileIndex, TileIndex)> + '_ {
        self.tiles.windows(2).map(|w| (w[0], w[1]))
    }
}

pub trait Navigator {
    fn distances(&self, board: &Board, source: TileIndex) -> DistanceMap;

    /// Empty when `destination` cannot be reached from `source`.
    fn find_path(&self, board: &Board, source: TileIndex, destination: TileIndex) -> TilePath;
}
