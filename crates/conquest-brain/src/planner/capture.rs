use conquest_core::{Move, MoveMode};

use super::{route_moves, PRIORITY_CAPTURE};
use crate::{ArmyTile, TurnView};

/// Adjacent city for the queue head's attacker first, then the nearest
/// feasible city for the strongest top army or the general reserve.
pub(super) fn capture_city(view: &TurnView<'_>) -> Vec<Move> {
    if view.intel.cities.is_empty() {
        return Vec::new();
    }
    let moves = adjacent_city(view);
    if !moves.is_empty() {
        return moves;
    }
    nearest_city(view)
}

fn adjacent_city(view: &TurnView<'_>) -> Vec<Move> {
    let Some(head) = view.queue.front() else {
        return Vec::new();
    };
    if head.priority >= PRIORITY_CAPTURE || !view.board.is_mine(head.source) {
        return Vec::new();
    }
    let power = view.board.army(head.source);
    let margin = view.config.capture_margin;

    for (_, n) in view.board.neighbors(head.source) {
        let Some(city) = view.intel.city(n) else { continue };
        if city.visible && power > city.army + 1 + margin {
            return vec![Move::new(MoveMode::Capture, head.source, n, PRIORITY_CAPTURE)
                .with_send_half(power / 2 > city.army + 1)];
        }
    }
    Vec::new()
}

fn nearest_city(view: &TurnView<'_>) -> Vec<Move> {
    let intel = view.intel;
    let reserve = intel
        .my_general
        .and_then(|g| intel.my_armies.iter().find(|a| a.index == g).copied());
    let margin = view.config.capture_margin;

    for source in [intel.strongest_top_army(), reserve].into_iter().flatten() {
        let map = view.navigator.distances(view.board, source.index);
        let nearest = intel
            .cities
            .iter()
            .filter_map(|city| {
                let hops = map.steps(city.index)?;
                can_take(source, hops, city.army, margin).then_some((hops, city))
            })
            .min_by_key(|(hops, city)| (*hops, city.index));

        let Some((hops, city)) = nearest else { continue };
        let path = map.reconstruct_path(view.board, city.index);
        let mut moves = route_moves(&path, MoveMode::Capture, PRIORITY_CAPTURE);
        if let Some(first) = moves.first_mut() {
            first.send_half = half_is_enough(source, hops, city.army);
            return moves;
        }
    }
    Vec::new()
}

/// Each hop leaves one army behind.
fn can_take(source: ArmyTile, hops: u32, defenders: u32, margin: u32) -> bool {
    source.power.saturating_sub(hops) > defenders + 1 + margin
}

/// Half the stack, less what the march drops along the way, still wins.
fn half_is_enough(source: ArmyTile, hops: u32, defenders: u32) -> bool {
    (source.power / 2).saturating_sub(hops.saturating_sub(1)) > defenders + 1
}
