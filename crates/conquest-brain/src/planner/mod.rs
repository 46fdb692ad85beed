//! Priority-tiered planning.
//!
//! Tiers are tried in order; the first one that produces moves wins and its
//! moves replace the queue. While the queue is non-empty only tiers whose
//! priority strictly exceeds the queue head's are consulted.

mod capture;
mod creep;
mod defend;
mod murder;
mod roam;

use conquest_core::{DeterministicRng, Move, MoveMode, TickContext};
use conquest_nav::TilePath;
use tracing::debug;

use crate::{resolve_posture, EngineConfig, Intel, Posture, Strategy, TurnView};

pub(crate) use creep::easy_wins;
pub(crate) use roam::step_away;

pub const PRIORITY_FINISHING_BLOW: i32 = 100;
pub const PRIORITY_MURDER: i32 = 10;
pub const PRIORITY_CAPTURE: i32 = 1;
pub const PRIORITY_CREEP: i32 = 0;
pub const PRIORITY_ROAM: i32 = 0;
pub const PRIORITY_LAST_STAND: i32 = -1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tier {
    /// Strike an adjacent, beatable rival general.
    FinishingBlow,
    /// March the strongest army on a known rival general.
    Murder,
    Capture,
    Creep,
    /// Directed exploration or attack toward a random frontier tile.
    Roam,
    /// Consolidation when nothing else applies.
    LastStand,
}

impl Tier {
    pub fn priority(self) -> i32 {
        match self {
            Self::FinishingBlow => PRIORITY_FINISHING_BLOW,
            Self::Murder => PRIORITY_MURDER,
            Self::Capture => PRIORITY_CAPTURE,
            Self::Creep => PRIORITY_CREEP,
            Self::Roam => PRIORITY_ROAM,
            Self::LastStand => PRIORITY_LAST_STAND,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::FinishingBlow => "finishing_blow",
            Self::Murder => "murder",
            Self::Capture => "capture",
            Self::Creep => "creep",
            Self::Roam => "roam",
            Self::LastStand => "last_stand",
        }
    }

    /// Tier order, highest stakes first. Posture only tags the roam tier.
    pub const LADDER: [Tier; 6] = [
        Self::FinishingBlow,
        Self::Murder,
        Self::Capture,
        Self::Creep,
        Self::Roam,
        Self::LastStand,
    ];
}

/// The full decision ladder: assassination, city capture, opportunistic
/// captures, roaming, consolidation.
#[derive(Debug, Default, Clone, Copy)]
pub struct TieredStrategy;

impl TieredStrategy {
    pub fn new() -> Self {
        Self
    }

    fn plan_tier(tier: Tier, view: &TurnView<'_>, rng: &mut dyn DeterministicRng) -> Vec<Move> {
        match tier {
            Tier::FinishingBlow => murder::finishing_blow(view),
            Tier::Murder => murder::march_on_general(view),
            Tier::Capture => capture::capture_city(view),
            Tier::Creep => creep::easy_wins(view, view.config.creep_moves_per_plan),
            Tier::Roam => roam::roam(view, rng),
            Tier::LastStand => defend::consolidate(view),
        }
    }
}

impl Strategy for TieredStrategy {
    fn name(&self) -> &'static str {
        "tiered"
    }

    fn compute_posture(&self, tick: &TickContext, intel: &Intel, config: &EngineConfig) -> Posture {
        resolve_posture(tick.turn, intel, config)
    }

    fn plan_moves(
        &mut self,
        view: &TurnView<'_>,
        rng: &mut dyn DeterministicRng,
    ) -> Option<Vec<Move>> {
        for tier in Tier::LADDER {
            if !view.outranks_queue(tier.priority()) {
                continue;
            }
            let moves = Self::plan_tier(tier, view, rng);
            let Some(first) = moves.first() else {
                continue;
            };
            if tier != Tier::FinishingBlow && view.backtracks(first) {
                debug!(turn = view.tick.turn, tier = tier.as_str(), "plan would backtrack, skipping tier");
                continue;
            }
            debug!(
                turn = view.tick.turn,
                tier = tier.as_str(),
                moves = moves.len(),
                source = first.source,
                target = first.target,
                "tier planned"
            );
            return Some(moves);
        }
        None
    }
}

/// One move per consecutive pair of the route; empty for an empty or one-tile route.
pub(crate) fn route_moves(path: &TilePath, mode: MoveMode, priority: i32) -> Vec<Move> {
    path.steps()
        .map(|(from, to)| Move::new(mode, from, to, priority))
        .collect()
}
