use conquest_core::{Board, DeterministicRng, Move, MoveHistory, MoveQueue, TickContext};
use conquest_nav::Navigator;

use crate::{EngineConfig, Intel, Posture};

/// Everything a strategy may look at while planning one turn.
///
/// Built fresh by the engine every tick; strategies never hold on to it.
pub struct TurnView<'a> {
    pub tick: TickContext,
    pub board: &'a Board,
    pub intel: &'a Intel,
    pub posture: Posture,
    pub queue: &'a MoveQueue,
    pub history: &'a MoveHistory,
    pub config: &'a EngineConfig,
    pub navigator: &'a dyn Navigator,
}

impl TurnView<'_> {
    /// A new plan must strictly beat whatever is queued to replace it.
    pub fn outranks_queue(&self, priority: i32) -> bool {
        self.queue.head_priority().map_or(true, |head| priority > head)
    }

    /// Would `mv` undo the most recently dispatched move?
    pub fn backtracks(&self, mv: &Move) -> bool {
        self.history.latest().is_some_and(|last| mv.is_inverse_of(last))
    }
}

/// Pluggable decision policy: posture selection plus move planning.
pub trait Strategy {
    fn name(&self) -> &'static str;

    fn compute_posture(&self, tick: &TickContext, intel: &Intel, config: &EngineConfig) -> Posture;

    /// `Some(moves)` flushes the queue and replaces it; `None` keeps the queue as is.
    fn plan_moves(
        &mut self,
        view: &TurnView<'_>,
        rng: &mut dyn DeterministicRng,
    ) -> Option<Vec<Move>>;
}
