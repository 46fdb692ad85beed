//! Breadth-first distance maps and route reconstruction over the conquest board.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod grid;
pub mod navigator;

pub use grid::{BfsNavigator, DistanceMap, Reach};
pub use navigator::{Navigator, TilePath};
