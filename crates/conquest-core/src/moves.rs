use core::fmt;
use std::collections::VecDeque;

use crate::TileIndex;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Which planning tier produced a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum MoveMode {
    Murder,
    Capture,
    Creep,
    Explore,
    Attack,
    Defend,
}

impl MoveMode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Murder => "MURDER",
            Self::Capture => "CAPTURE",
            Self::Creep => "CREEP",
            Self::Explore => "EXPLORE",
            Self::Attack => "ATTACK",
            Self::Defend => "DEFEND",
        }
    }
}

impl fmt::Display for MoveMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A planned attacker → target step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Move {
    pub mode: MoveMode,
    pub source: TileIndex,
    pub target: TileIndex,
    pub send_half: bool,
    /// Higher preempts lower.
    pub priority: i32,
}

impl Move {
    pub fn new(mode: MoveMode, source: TileIndex, target: TileIndex, priority: i32) -> Self {
        Self {
            mode,
            source,
            target,
            send_half: false,
            priority,
        }
    }

    pub fn with_send_half(mut self, send_half: bool) -> Self {
        self.send_half = send_half;
        self
    }

    pub fn is_inverse_of(&self, other: &Move) -> bool {
        self.source == other.target && self.target == other.source
    }

    pub fn command(&self) -> Command {
        Command {
            source: self.source,
            target: self.target,
            send_half: self.send_half,
        }
    }
}

/// What actually goes over the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Command {
    pub source: TileIndex,
    pub target: TileIndex,
    pub send_half: bool,
}

/// FIFO of planned moves, one consumed per turn.
#[derive(Debug, Clone, Default)]
pub struct MoveQueue {
    moves: VecDeque<Move>,
}

impl MoveQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    pub fn front(&self) -> Option<&Move> {
        self.moves.front()
    }

    pub fn head_priority(&self) -> Option<i32> {
        self.front().map(|m| m.priority)
    }

    pub fn push(&mut self, mv: Move) {
        self.moves.push_back(mv);
    }

    pub fn pop(&mut self) -> Option<Move> {
        self.moves.pop_front()
    }

    pub fn clear(&mut self) {
        self.moves.clear();
    }

    /// Flush and enqueue a fresh plan.
    pub fn replace(&mut self, moves: impl IntoIterator<Item = Move>) {
        self.moves.clear();
        self.moves.extend(moves);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Move> {
        self.moves.iter()
    }
}

/// Bounded log of dispatched moves, newest first.
#[derive(Debug, Clone)]
pub struct MoveHistory {
    capacity: usize,
    moves: VecDeque<Move>,
}

impl MoveHistory {
    pub const DEFAULT_CAPACITY: usize = 5;

    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            capacity,
            moves: VecDeque::with_capacity(capacity),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    pub fn record(&mut self, mv: Move) {
        self.moves.push_front(mv);
        self.moves.truncate(self.capacity);
    }

    pub fn latest(&self) -> Option<&Move> {
        self.moves.front()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Move> {
        self.moves.iter()
    }

    /// True when `index` attacked from within the remembered window.
    pub fn was_attacker(&self, index: TileIndex) -> bool {
        self.moves.iter().any(|m| m.source == index)
    }
}

impl Default for MoveHistory {
    fn default() -> Self {
        Self::new(Self::DEFAULT_CAPACITY)
    }
}
