//! Per-turn input as delivered by the game server, plus the diff codec it uses.

use crate::{PlayerId, ScoreRecord, SnapshotError, TileIndex};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Everything the engine consumes for one turn.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TurnSnapshot {
    pub turn: u32,
    pub player: PlayerId,
    pub width: usize,
    pub height: usize,
    pub armies: Vec<i32>,
    pub terrain: Vec<i32>,
    /// Visible city tiles.
    #[cfg_attr(feature = "serde", serde(default))]
    pub cities: Vec<TileIndex>,
    /// General tile per player id, `-1` when unknown.
    #[cfg_attr(feature = "serde", serde(default))]
    pub generals: Vec<i32>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub scores: Vec<ScoreRecord>,
}

impl TurnSnapshot {
    pub fn new(
        turn: u32,
        player: PlayerId,
        width: usize,
        height: usize,
        armies: Vec<i32>,
        terrain: Vec<i32>,
    ) -> Self {
        Self {
            turn,
            player,
            width,
            height,
            armies,
            terrain,
            cities: Vec::new(),
            generals: Vec::new(),
            scores: Vec::new(),
        }
    }

    pub fn with_cities(mut self, cities: Vec<TileIndex>) -> Self {
        self.cities = cities;
        self
    }

    pub fn with_generals(mut self, generals: Vec<i32>) -> Self {
        self.generals = generals;
        self
    }

    pub fn with_scores(mut self, scores: Vec<ScoreRecord>) -> Self {
        self.scores = scores;
        self
    }

    /// Decode the server's flat `[width, height, armies.., terrain..]` layout.
    pub fn from_flat_map(turn: u32, player: PlayerId, map: &[i32]) -> Result<Self, SnapshotError> {
        if map.len() < 2 {
            return Err(SnapshotError::TruncatedMap {
                expected: 2,
                actual: map.len(),
            });
        }
        let width = map[0].max(0) as usize;
        let height = map[1].max(0) as usize;
        if width == 0 || height == 0 {
            return Err(SnapshotError::EmptyBoard { width, height });
        }
        let size = width * height;
        let expected = 2 + 2 * size;
        if map.len() < expected {
            return Err(SnapshotError::TruncatedMap {
                expected,
                actual: map.len(),
            });
        }
        Ok(Self::new(
            turn,
            player,
            width,
            height,
            map[2..2 + size].to_vec(),
            map[2 + size..expected].to_vec(),
        ))
    }

    pub fn size(&self) -> usize {
        self.width.saturating_mul(self.height)
    }

    pub fn general_of(&self, player: PlayerId) -> Option<TileIndex> {
        let code = *self.generals.get(player.index())?;
        TileIndex::try_from(code).ok().filter(|&idx| idx < self.size())
    }

    pub fn score_of(&self, player: PlayerId) -> Option<&ScoreRecord> {
        self.scores.iter().find(|s| s.player == player)
    }
}

/// Apply a server diff to the previous array.
///
/// The diff alternates `<matching count>, <mismatching count>, <mismatching values..>`
/// until exhausted: patching `[1, 1, 3]` onto `[0, 0]` yields `[0, 3]`.
pub fn patch(old: &[i32], diff: &[i32]) -> Result<Vec<i32>, SnapshotError> {
    let mut out = Vec::with_capacity(old.len());
    let mut i = 0;
    while i < diff.len() {
        let matching = run_length(diff[i], i)?;
        if matching > 0 {
            let start = out.len();
            let end = start + matching;
            if end > old.len() {
                return Err(SnapshotError::MalformedDiff {
                    offset: i,
                    reason: "matching run exceeds previous array",
                });
            }
            out.extend_from_slice(&old[start..end]);
        }
        i += 1;

        if i < diff.len() {
            let mismatching = run_length(diff[i], i)?;
            let start = i + 1;
            let end = start + mismatching;
            if end > diff.len() {
                return Err(SnapshotError::MalformedDiff {
                    offset: i,
                    reason: "mismatching run exceeds diff",
                });
            }
            out.extend_from_slice(&diff[start..end]);
            i += mismatching;
        }
        i += 1;
    }
    Ok(out)
}

fn run_length(value: i32, offset: usize) -> Result<usize, SnapshotError> {
    usize::try_from(value).map_err(|_| SnapshotError::MalformedDiff {
        offset,
        reason: "negative run length",
    })
}

/// One `game_update` message.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GameUpdate {
    pub turn: u32,
    pub map_diff: Vec<i32>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub cities_diff: Vec<i32>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub generals: Vec<i32>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub scores: Vec<ScoreRecord>,
}

/// Accumulates diffs into full snapshots.
#[derive(Debug, Clone)]
pub struct SnapshotDecoder {
    player: PlayerId,
    map: Vec<i32>,
    cities: Vec<i32>,
}

impl SnapshotDecoder {
    pub fn new(player: PlayerId) -> Self {
        Self {
            player,
            map: Vec::new(),
            cities: Vec::new(),
        }
    }

    /// Patch the update in and decode it. State is left untouched on error.
    pub fn apply(&mut self, update: &GameUpdate) -> Result<TurnSnapshot, SnapshotError> {
        let map = patch(&self.map, &update.map_diff)?;
        let cities = patch(&self.cities, &update.cities_diff)?;
        let snapshot = TurnSnapshot::from_flat_map(update.turn, self.player, &map)?
            .with_cities(
                cities
                    .iter()
                    .filter_map(|&c| TileIndex::try_from(c).ok())
                    .collect(),
            )
            .with_generals(update.generals.clone())
            .with_scores(update.scores.clone());

        self.map = map;
        self.cities = cities;
        Ok(snapshot)
    }
}
