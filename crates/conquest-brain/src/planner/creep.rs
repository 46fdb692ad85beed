use conquest_core::{Move, MoveMode, TileIndex};

use super::PRIORITY_CREEP;
use crate::TurnView;

/// Greedy one-step captures with no pathfinding, at most `limit` of them.
///
/// Targets that recently attacked are skipped; when that leaves nothing the
/// match is retried without the restriction.
pub(crate) fn easy_wins(view: &TurnView<'_>, limit: usize) -> Vec<Move> {
    let mut matches = match_targets(view, true);
    if matches.is_empty() {
        matches = match_targets(view, false);
    }
    matches.truncate(limit);
    matches
}

/// Walk targets in index order; each takes the strongest free neighboring
/// army that beats it. A match consumes both the target and the army.
fn match_targets(view: &TurnView<'_>, skip_recent_attackers: bool) -> Vec<Move> {
    let board = view.board;
    let armies = &view.intel.my_armies;

    let mut rank: Vec<Option<usize>> = vec![None; board.size()];
    for (r, army) in armies.iter().enumerate() {
        rank[army.index] = Some(r);
    }
    let mut used = vec![false; armies.len()];

    let mut targets: Vec<TileIndex> = view
        .intel
        .empty_territories
        .iter()
        .chain(&view.intel.visible_opponent_territories)
        .copied()
        .collect();
    targets.sort_unstable();

    let mut out = Vec::new();
    for target in targets {
        if skip_recent_attackers && view.history.was_attacker(target) {
            continue;
        }
        let defenders = board.army(target);
        let best = board
            .neighbors(target)
            .filter_map(|(_, n)| rank[n])
            .filter(|&r| !used[r] && armies[r].power - 1 > defenders)
            .min();
        if let Some(r) = best {
            used[r] = true;
            out.push(Move::new(MoveMode::Creep, armies[r].index, target, PRIORITY_CREEP));
        }
    }
    out
}
