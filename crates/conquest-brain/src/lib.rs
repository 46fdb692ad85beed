//! Turn-by-turn decision making for the conquest bot.
//!
//! Each tick the [`Engine`] rebuilds [`Intel`] from the snapshot, lets its
//! [`Strategy`] pick a [`Posture`] and refresh the move queue, then dispatches
//! at most one command.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod config;
pub mod dispatch;
pub mod engine;
pub mod intel;
pub mod planner;
pub mod posture;
pub mod strategy;
pub mod wander;

pub use config::EngineConfig;
pub use dispatch::{Dispatch, NullDispatch, RecordingDispatch};
pub use engine::{Engine, TurnReport};
pub use intel::{ArmyTile, Intel, IntelMemory, KnownCity, MyScore};
pub use planner::{Tier, TieredStrategy};
pub use posture::{resolve_posture, Posture};
pub use strategy::{Strategy, TurnView};
pub use wander::WanderStrategy;
