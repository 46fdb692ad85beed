//! Engine tuning knobs, loaded from YAML.

use std::path::Path;

use anyhow::{Context, Result};
use conquest_core::MoveHistory;
use serde::{Deserialize, Serialize};

/// Thresholds and budgets consulted by intel, posture and planning.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Turns spent in EXPLORE before any other posture is considered.
    #[serde(default = "default_early_game_turn_threshold")]
    pub early_game_turn_threshold: u32,

    /// After this turn the general stops counting as a top army.
    #[serde(default = "default_opening_turn_threshold")]
    pub opening_turn_threshold: u32,

    /// Minimum army for a top army at turn zero.
    #[serde(default = "default_useful_army_base")]
    pub useful_army_base: u32,

    /// The useful-army threshold grows by one every this many turns.
    #[serde(default = "default_useful_army_growth_turns")]
    pub useful_army_growth_turns: u32,

    /// Dispatched moves remembered for anti-backtracking.
    #[serde(default = "default_history_len")]
    pub history_len: usize,

    /// Extra armies required beyond `defender + 1` before a city is attempted.
    #[serde(default)]
    pub capture_margin: u32,

    /// Upper bound on CREEP matches queued by one plan.
    #[serde(default = "default_creep_moves_per_plan")]
    pub creep_moves_per_plan: usize,

    /// Random target draws before the roaming tier relaxes its backtrack filter.
    #[serde(default = "default_explore_target_attempts")]
    pub explore_target_attempts: usize,

    /// Global seed mixed with the turn number for every random draw.
    #[serde(default)]
    pub seed: u64,
}

fn default_early_game_turn_threshold() -> u32 {
    24
}
fn default_opening_turn_threshold() -> u32 {
    10
}
fn default_useful_army_base() -> u32 {
    2
}
fn default_useful_army_growth_turns() -> u32 {
    50
}
fn default_history_len() -> usize {
    MoveHistory::DEFAULT_CAPACITY
}
fn default_creep_moves_per_plan() -> usize {
    1
}
fn default_explore_target_attempts() -> usize {
    4
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            early_game_turn_threshold: default_early_game_turn_threshold(),
            opening_turn_threshold: default_opening_turn_threshold(),
            useful_army_base: default_useful_army_base(),
            useful_army_growth_turns: default_useful_army_growth_turns(),
            history_len: default_history_len(),
            capture_margin: 0,
            creep_moves_per_plan: default_creep_moves_per_plan(),
            explore_target_attempts: default_explore_target_attempts(),
            seed: 0,
        }
    }
}

impl EngineConfig {
    /// Load configuration from a YAML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;
        let config: Self = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config from {}", path.display()))?;
        Ok(config)
    }

    /// Defaults when `path` does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Minimum army for a tile to count as a top army on `turn`.
    pub fn useful_army_threshold(&self, turn: u32) -> u32 {
        self.useful_army_base + turn / self.useful_army_growth_turns.max(1)
    }
}
