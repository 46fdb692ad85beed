use conquest_core::{
    Board, Command, MoveHistory, MoveQueue, SnapshotError, TickContext, TurnSnapshot,
};
use conquest_nav::BfsNavigator;
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::planner::PRIORITY_MURDER;
use crate::{Dispatch, EngineConfig, IntelMemory, Posture, Strategy, TieredStrategy, TurnView};

/// Stream id for planning draws; keeps them independent of any future consumer.
const PLANNING_STREAM: u64 = 1;

/// What the engine decided while observing a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TurnReport {
    pub turn: u32,
    pub posture: Posture,
    /// Whether a fresh plan replaced the queue this turn.
    pub replanned: bool,
    pub queued: usize,
}

/// Owns everything that persists across turns: queue, history, intel memory
/// and the active strategy.
pub struct Engine {
    config: EngineConfig,
    strategy: Box<dyn Strategy>,
    navigator: BfsNavigator,
    memory: IntelMemory,
    queue: MoveQueue,
    history: MoveHistory,
    posture: Option<Posture>,
}

impl Engine {
    pub fn new(config: EngineConfig) -> Self {
        Self::with_strategy(config, Box::new(TieredStrategy::new()))
    }

    pub fn with_strategy(config: EngineConfig, strategy: Box<dyn Strategy>) -> Self {
        let history = MoveHistory::new(config.history_len);
        Self {
            config,
            strategy,
            navigator: BfsNavigator,
            memory: IntelMemory::new(),
            queue: MoveQueue::new(),
            history,
            posture: None,
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn strategy_name(&self) -> &'static str {
        self.strategy.name()
    }

    pub fn posture(&self) -> Option<Posture> {
        self.posture
    }

    pub fn queue(&self) -> &MoveQueue {
        &self.queue
    }

    pub fn history(&self) -> &MoveHistory {
        &self.history
    }

    pub fn memory(&self) -> &IntelMemory {
        &self.memory
    }

    /// Observe, plan, and dispatch at most one command.
    ///
    /// A malformed snapshot is returned as an error and leaves queue, history
    /// and memory untouched.
    pub fn tick(
        &mut self,
        snapshot: &TurnSnapshot,
        dispatch: &mut dyn Dispatch,
    ) -> Result<Option<Command>, SnapshotError> {
        self.observe(snapshot)?;
        Ok(self.execute(snapshot.turn, dispatch))
    }

    /// Rebuild intelligence, settle posture and refresh the queue. Dispatches nothing.
    pub fn observe(&mut self, snapshot: &TurnSnapshot) -> Result<TurnReport, SnapshotError> {
        let board = Board::from_snapshot(snapshot).map_err(|err| {
            warn!(turn = snapshot.turn, error = %err, "rejected snapshot");
            err
        })?;
        let tick = TickContext::new(snapshot.turn, self.config.seed);
        let intel = self.memory.observe(snapshot, &board, &self.config);

        self.validate_queue(&board, tick.turn);

        let posture = self.strategy.compute_posture(&tick, &intel, &self.config);
        if self.posture != Some(posture) {
            info!(
                turn = tick.turn,
                from = ?self.posture,
                to = %posture,
                "posture changed"
            );
            self.posture = Some(posture);
        }

        let mut rng = tick.rng_for_stream(PLANNING_STREAM);
        let view = TurnView {
            tick,
            board: &board,
            intel: &intel,
            posture,
            queue: &self.queue,
            history: &self.history,
            config: &self.config,
            navigator: &self.navigator,
        };
        let plan = self.strategy.plan_moves(&view, &mut rng);

        let replanned = plan.is_some();
        if let Some(moves) = plan {
            if !self.queue.is_empty() {
                debug!(turn = tick.turn, dropped = self.queue.len(), "queue preempted");
            }
            self.queue.replace(moves);
        }
        if self.queue.is_empty() {
            debug!(turn = tick.turn, posture = %posture, "no action possible");
        }

        Ok(TurnReport {
            turn: tick.turn,
            posture,
            replanned,
            queued: self.queue.len(),
        })
    }

    /// Pop the queue head, remember it, and hand it to `dispatch`.
    pub fn execute(&mut self, turn: u32, dispatch: &mut dyn Dispatch) -> Option<Command> {
        let mv = self.queue.pop()?;
        let command = mv.command();
        info!(
            turn,
            mode = %mv.mode,
            source = mv.source,
            target = mv.target,
            half = mv.send_half,
            "dispatching move"
        );
        self.history.record(mv);
        dispatch.dispatch(turn, command);
        Some(command)
    }

    /// Flush the queue when its head can no longer be carried out as planned.
    fn validate_queue(&mut self, board: &Board, turn: u32) {
        let Some(head) = self.queue.front() else {
            return;
        };
        let me = board.me();
        let reason = match board.tile(head.source) {
            None => Some("attacker off the board"),
            Some(attacker) if !attacker.is_owned_by(me) => Some("attacker lost"),
            Some(attacker) if attacker.army < 2 => Some("attacker exhausted"),
            Some(attacker) if head.priority < PRIORITY_MURDER => board
                .tile(head.target)
                .filter(|target| target.is_attackable_by(me) && attacker.army - 1 <= target.army)
                .map(|_| "attacker outmatched"),
            Some(_) => None,
        };
        if let Some(reason) = reason {
            debug!(
                turn,
                source = head.source,
                target = head.target,
                dropped = self.queue.len(),
                reason,
                "queue flushed"
            );
            self.queue.clear();
        }
    }
}
