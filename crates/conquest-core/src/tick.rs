use crate::{rng, SplitMix64};

/// Per-turn clock handed to every planning stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickContext {
    pub turn: u32,
    pub seed: u64,
}

impl TickContext {
    pub fn new(turn: u32, seed: u64) -> Self {
        Self { turn, seed }
    }

    pub fn rng_for_stream(&self, stream: u64) -> SplitMix64 {
        SplitMix64::new(rng::derive_seed(self.seed, self.turn as u64, stream))
    }
}
