//! Deterministic board, move and snapshot primitives for the conquest bot.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod board;
pub mod error;
pub mod moves;
pub mod player;
pub mod rng;
pub mod snapshot;
pub mod terrain;
pub mod tick;

pub use board::{Board, Direction, Tile, TileIndex};
pub use error::SnapshotError;
pub use moves::{Command, Move, MoveHistory, MoveMode, MoveQueue};
pub use player::{OpponentRecord, PlayerId, ScoreRecord};
pub use rng::{DeterministicRng, SplitMix64};
pub use snapshot::{patch, GameUpdate, SnapshotDecoder, TurnSnapshot};
pub use terrain::{Terrain, TileClass};
pub use tick::TickContext;
