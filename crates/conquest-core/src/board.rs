use crate::{PlayerId, SnapshotError, Terrain, TileClass, TurnSnapshot};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Row-major tile index, `row * width + col`.
pub type TileIndex = usize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    /// Fixed order for determinism: N, E, S, W.
    pub const ALL: [Direction; 4] = [Self::North, Self::East, Self::South, Self::West];

    pub fn opposite(self) -> Self {
        match self {
            Self::North => Self::South,
            Self::East => Self::West,
            Self::South => Self::North,
            Self::West => Self::East,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Tile {
    pub index: TileIndex,
    pub row: usize,
    pub col: usize,
    pub owner: Option<PlayerId>,
    pub army: u32,
    pub terrain: Terrain,
    pub class: TileClass,
}

impl Tile {
    pub fn is_owned_by(&self, player: PlayerId) -> bool {
        self.owner == Some(player)
    }

    /// Empty or held by someone else.
    pub fn is_attackable_by(&self, player: PlayerId) -> bool {
        match self.terrain {
            Terrain::Empty => true,
            Terrain::Owned(owner) => owner != player,
            _ => false,
        }
    }
}

/// Immutable view of one turn's board.
#[derive(Debug, Clone)]
pub struct Board {
    width: usize,
    height: usize,
    me: PlayerId,
    tiles: Vec<Tile>,
}

impl Board {
    /// Board without any known cities or generals.
    pub fn new(
        width: usize,
        height: usize,
        armies: &[i32],
        terrain: &[i32],
        me: PlayerId,
    ) -> Result<Self, SnapshotError> {
        Self::build(width, height, armies, terrain, me, &[], &[])
    }

    pub fn from_snapshot(snapshot: &TurnSnapshot) -> Result<Self, SnapshotError> {
        let size = snapshot.width.saturating_mul(snapshot.height);
        let generals: Vec<TileIndex> = snapshot
            .generals
            .iter()
            .filter_map(|&code| TileIndex::try_from(code).ok())
            .filter(|&idx| idx < size)
            .collect();
        Self::build(
            snapshot.width,
            snapshot.height,
            &snapshot.armies,
            &snapshot.terrain,
            snapshot.player,
            &snapshot.cities,
            &generals,
        )
    }

    fn build(
        width: usize,
        height: usize,
        armies: &[i32],
        terrain: &[i32],
        me: PlayerId,
        cities: &[TileIndex],
        generals: &[TileIndex],
    ) -> Result<Self, SnapshotError> {
        if width == 0 || height == 0 {
            return Err(SnapshotError::EmptyBoard { width, height });
        }
        let size = width
            .checked_mul(height)
            .ok_or(SnapshotError::BoardTooLarge { width, height })?;
        if armies.len() != size {
            return Err(SnapshotError::LengthMismatch {
                field: "armies",
                expected: size,
                actual: armies.len(),
            });
        }
        if terrain.len() != size {
            return Err(SnapshotError::LengthMismatch {
                field: "terrain",
                expected: size,
                actual: terrain.len(),
            });
        }

        let mut is_city = vec![false; size];
        for &idx in cities.iter().filter(|&&idx| idx < size) {
            is_city[idx] = true;
        }
        let mut is_general = vec![false; size];
        for &idx in generals.iter().filter(|&&idx| idx < size) {
            is_general[idx] = true;
        }

        let tiles = (0..size)
            .map(|index| {
                let kind = Terrain::from_code(terrain[index]);
                Tile {
                    index,
                    row: index / width,
                    col: index % width,
                    owner: kind.owner(),
                    army: armies[index].max(0) as u32,
                    terrain: kind,
                    class: TileClass::classify(kind, me, is_general[index], is_city[index]),
                }
            })
            .collect();

        Ok(Self {
            width,
            height,
            me,
            tiles,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn size(&self) -> usize {
        self.tiles.len()
    }

    pub fn me(&self) -> PlayerId {
        self.me
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    pub fn tile(&self, index: TileIndex) -> Option<&Tile> {
        self.tiles.get(index)
    }

    pub fn army(&self, index: TileIndex) -> u32 {
        self.tile(index).map_or(0, |t| t.army)
    }

    pub fn is_mine(&self, index: TileIndex) -> bool {
        self.tile(index).is_some_and(|t| t.is_owned_by(self.me))
    }

    pub fn index_of(&self, row: usize, col: usize) -> Option<TileIndex> {
        if row < self.height && col < self.width {
            Some(row * self.width + col)
        } else {
            None
        }
    }

    pub fn neighbor(&self, index: TileIndex, direction: Direction) -> Option<TileIndex> {
        let tile = self.tile(index)?;
        let (row, col) = (tile.row, tile.col);
        match direction {
            Direction::North => row.checked_sub(1).and_then(|r| self.index_of(r, col)),
            Direction::East => self.index_of(row, col + 1),
            Direction::South => self.index_of(row + 1, col),
            Direction::West => col.checked_sub(1).and_then(|c| self.index_of(row, c)),
        }
    }

    /// In-bounds neighbors in N, E, S, W order.
    pub fn neighbors(&self, index: TileIndex) -> impl Iterator<Item = (Direction, TileIndex)> + '_ {
        Direction::ALL
            .into_iter()
            .filter_map(move |d| self.neighbor(index, d).map(|n| (d, n)))
    }

    pub fn are_adjacent(&self, a: TileIndex, b: TileIndex) -> bool {
        self.neighbors(a).any(|(_, n)| n == b)
    }

    pub fn manhattan(&self, a: TileIndex, b: TileIndex) -> Option<usize> {
        let (ta, tb) = (self.tile(a)?, self.tile(b)?);
        Some(ta.row.abs_diff(tb.row) + ta.col.abs_diff(tb.col))
    }
}
