use conquest_core::{DeterministicRng, Move, MoveMode, Terrain, Tile, TileIndex};
use conquest_nav::TilePath;

use super::{route_moves, PRIORITY_ROAM};
use crate::{ArmyTile, TurnView};

/// Send the continuity army (or the strongest top army) toward a random
/// frontier tile: visible enemy, fog, or empty.
pub(super) fn roam(view: &TurnView<'_>, rng: &mut dyn DeterministicRng) -> Vec<Move> {
    let mode = if view.posture.is_exploratory() {
        MoveMode::Explore
    } else {
        MoveMode::Attack
    };
    let Some(source) = continuity_army(view).or_else(|| view.intel.strongest_top_army()) else {
        return Vec::new();
    };

    if let Some(path) = pick_route(view, source, rng) {
        return route_moves(&path, mode, PRIORITY_ROAM);
    }
    step_away(view, source, rng)
        .map(|target| vec![Move::new(mode, source.index, target, PRIORITY_ROAM)])
        .unwrap_or_default()
}

/// The tile the last dispatched move landed on, if it still carries a useful
/// army and is not the general.
fn continuity_army(view: &TurnView<'_>) -> Option<ArmyTile> {
    let last = view.history.latest()?;
    let tile = view.board.tile(last.target)?;
    let keeps_going = tile.is_owned_by(view.board.me())
        && tile.army > 1
        && tile.army >= view.intel.useful_army_threshold
        && view.intel.my_general != Some(tile.index);
    keeps_going.then_some(ArmyTile {
        index: tile.index,
        power: tile.army,
    })
}

/// Up to `explore_target_attempts` random draws, preferring a route whose
/// first step does not re-enter a recent attacker, then any route that does
/// not step straight back.
fn pick_route(
    view: &TurnView<'_>,
    source: ArmyTile,
    rng: &mut dyn DeterministicRng,
) -> Option<TilePath> {
    let intel = view.intel;
    let candidates: Vec<TileIndex> = intel
        .visible_opponent_territories
        .iter()
        .chain(&intel.fogged_territories)
        .chain(&intel.empty_territories)
        .copied()
        .filter(|&t| t != source.index)
        .collect();
    if candidates.is_empty() {
        return None;
    }

    let map = view.navigator.distances(view.board, source.index);
    let mut relaxed = None;
    for _ in 0..view.config.explore_target_attempts.max(1) {
        let target = candidates[rng.next_below(candidates.len())];
        let path = map.reconstruct_path(view.board, target);
        let Some((from, first_step)) = path.steps().next() else {
            continue;
        };
        if !view.history.was_attacker(first_step) {
            return Some(path);
        }
        let first = Move::new(MoveMode::Explore, from, first_step, PRIORITY_ROAM);
        if relaxed.is_none() && !view.backtracks(&first) {
            relaxed = Some(path);
        }
    }
    relaxed
}

/// Single step out of `source`, loosening the backtrack filter level by level:
/// a beatable neighbor that did not just attack, then any passable such
/// neighbor, then any passable neighbor except straight back, then a random
/// direction that is not a known mountain.
pub(crate) fn step_away(
    view: &TurnView<'_>,
    source: ArmyTile,
    rng: &mut dyn DeterministicRng,
) -> Option<TileIndex> {
    let board = view.board;
    let me = board.me();
    let neighbors: Vec<&Tile> = board
        .neighbors(source.index)
        .filter_map(|(_, n)| board.tile(n))
        .collect();
    let fresh = |t: &&&Tile| !view.history.was_attacker(t.index);
    let straight_back = |target: TileIndex| {
        view.backtracks(&Move::new(MoveMode::Explore, source.index, target, PRIORITY_ROAM))
    };

    if let Some(t) = neighbors
        .iter()
        .filter(fresh)
        .find(|t| t.is_attackable_by(me) && source.power.saturating_sub(1) > t.army)
    {
        return Some(t.index);
    }
    if let Some(t) = neighbors
        .iter()
        .filter(fresh)
        .find(|t| t.terrain.is_traversable())
    {
        return Some(t.index);
    }
    if let Some(t) = neighbors
        .iter()
        .find(|t| t.terrain.is_traversable() && !straight_back(t.index))
    {
        return Some(t.index);
    }

    let open: Vec<TileIndex> = neighbors
        .iter()
        .filter(|t| t.terrain != Terrain::Mountain && !straight_back(t.index))
        .map(|t| t.index)
        .collect();
    if open.is_empty() {
        return None;
    }
    Some(open[rng.next_below(open.len())])
}
