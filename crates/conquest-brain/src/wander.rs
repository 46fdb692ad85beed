use conquest_core::{DeterministicRng, Move, MoveMode, TickContext};
use tracing::debug;

use crate::planner::{easy_wins, route_moves, step_away, PRIORITY_ROAM};
use crate::{EngineConfig, Intel, Posture, Strategy, TurnView};

/// Minimal explorer: take an adjacent easy win when one exists, otherwise walk
/// the largest army toward a random fogged tile. Never replans over a queue.
#[derive(Debug, Default, Clone, Copy)]
pub struct WanderStrategy;

impl WanderStrategy {
    pub fn new() -> Self {
        Self
    }
}

impl Strategy for WanderStrategy {
    fn name(&self) -> &'static str {
        "wander"
    }

    fn compute_posture(&self, _tick: &TickContext, _intel: &Intel, _config: &EngineConfig) -> Posture {
        Posture::Explore
    }

    fn plan_moves(
        &mut self,
        view: &TurnView<'_>,
        rng: &mut dyn DeterministicRng,
    ) -> Option<Vec<Move>> {
        if !view.queue.is_empty() {
            return None;
        }

        let wins = easy_wins(view, 1);
        if wins.first().is_some_and(|mv| !view.backtracks(mv)) {
            return Some(wins);
        }

        let army = view.intel.strongest_army()?;
        let fog = &view.intel.fogged_territories;
        if !fog.is_empty() {
            let target = fog[rng.next_below(fog.len())];
            let path = view.navigator.find_path(view.board, army.index, target);
            let moves = route_moves(&path, MoveMode::Explore, PRIORITY_ROAM);
            if moves.first().is_some_and(|mv| !view.backtracks(mv)) {
                return Some(moves);
            }
        }

        debug!(turn = view.tick.turn, source = army.index, "no route into fog, stepping");
        let target = step_away(view, army, rng)?;
        Some(vec![Move::new(MoveMode::Explore, army.index, target, PRIORITY_ROAM)])
    }
}
