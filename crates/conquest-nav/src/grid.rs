use std::collections::VecDeque;

use conquest_core::{Board, TileIndex};

use crate::{Navigator, TilePath};

/// Distance of a visited tile from the map's source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reach {
    Steps(u32),
    /// Seen from a reachable neighbor but impassable; never expanded.
    Blocked,
}

/// Sparse breadth-first distances from one source tile.
#[derive(Debug, Clone)]
pub struct DistanceMap {
    source: TileIndex,
    cells: Vec<Option<Reach>>,
}

impl DistanceMap {
    /// Breadth-first expansion over traversable tiles. Each tile is enqueued at most once.
    pub fn build(board: &Board, source: TileIndex) -> Self {
        let mut cells = vec![None; board.size()];
        if source >= cells.len() {
            return Self { source, cells };
        }

        let mut open = VecDeque::with_capacity(cells.len());
        cells[source] = Some(Reach::Steps(0));
        open.push_back((source, 0u32));

        while let Some((current, distance)) = open.pop_front() {
            for (_, n) in board.neighbors(current) {
                if cells[n].is_some() {
                    continue;
                }
                let passable = board.tile(n).is_some_and(|t| t.terrain.is_traversable());
                if passable {
                    cells[n] = Some(Reach::Steps(distance + 1));
                    open.push_back((n, distance + 1));
                } else {
                    cells[n] = Some(Reach::Blocked);
                }
            }
        }

        Self { source, cells }
    }

    pub fn source(&self) -> TileIndex {
        self.source
    }

    pub fn get(&self, index: TileIndex) -> Option<Reach> {
        self.cells.get(index).copied().flatten()
    }

    pub fn steps(&self, index: TileIndex) -> Option<u32> {
        match self.get(index)? {
            Reach::Steps(d) => Some(d),
            Reach::Blocked => None,
        }
    }

    pub fn is_reachable(&self, index: TileIndex) -> bool {
        self.steps(index).is_some()
    }

    /// Walk back from `destination` by steepest descent, ties broken N, E, S, W.
    ///
    /// Returns the route in source → destination order, or an empty path when the
    /// destination was never reached.
    pub fn reconstruct_path(&self, board: &Board, destination: TileIndex) -> TilePath {
        let Some(mut best) = self.steps(destination) else {
            return TilePath::default();
        };

        let mut out = vec![destination];
        let mut current = destination;
        while out.len() <= self.cells.len() {
            let mut chosen = None;
            for (_, n) in board.neighbors(current) {
                if let Some(d) = self.steps(n) {
                    if d < best {
                        best = d;
                        chosen = Some(n);
                    }
                }
            }
            let Some(next) = chosen else { break };
            out.push(next);
            current = next;
        }

        if current != self.source {
            return TilePath::default();
        }
        out.reverse();
        TilePath::new(out)
    }
}

/// Hop-count navigator over the board's four-neighborhood.
#[derive(Debug, Clone, Copy, Default)]
pub struct BfsNavigator;

impl Navigator for BfsNavigator {
    fn distances(&self, board: &Board, source: TileIndex) -> DistanceMap {
        DistanceMap::build(board, source)
    }

    fn find_path(&self, board: &Board, source: TileIndex, destination: TileIndex) -> TilePath {
        self.distances(board, source)
            .reconstruct_path(board, destination)
    }
}
