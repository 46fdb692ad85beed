use core::fmt;

use serde::{Deserialize, Serialize};

use crate::{EngineConfig, Intel};

/// Strategic mode for the current turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Posture {
    Explore,
    Expand,
    Attack,
    Murder,
    Defend,
}

impl Posture {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Explore => "EXPLORE",
            Self::Expand => "EXPAND",
            Self::Attack => "ATTACK",
            Self::Murder => "MURDER",
            Self::Defend => "DEFEND",
        }
    }

    /// Postures that are still mapping the board rather than hunting.
    pub fn is_exploratory(self) -> bool {
        matches!(self, Self::Explore | Self::Expand)
    }
}

impl fmt::Display for Posture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// First matching rule wins:
/// early game, then undiscovered, then the first known living rival general
/// (MURDER if we out-score its owner, DEFEND otherwise), then ATTACK.
pub fn resolve_posture(turn: u32, intel: &Intel, config: &EngineConfig) -> Posture {
    if turn < config.early_game_turn_threshold {
        return Posture::Explore;
    }
    if intel.undiscovered {
        return Posture::Expand;
    }
    if let Some((rival, _)) = intel.rival_general() {
        return if intel.my_score.aggregate() >= rival.aggregate_score() {
            Posture::Murder
        } else {
            Posture::Defend
        };
    }
    Posture::Attack
}
