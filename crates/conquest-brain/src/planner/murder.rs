use conquest_core::{Move, MoveMode};

use super::{route_moves, PRIORITY_FINISHING_BLOW, PRIORITY_MURDER};
use crate::TurnView;

/// Any of our armies next to a living rival general it can take.
pub(super) fn finishing_blow(view: &TurnView<'_>) -> Vec<Move> {
    let board = view.board;
    for general in view.intel.opponents.iter().filter_map(|o| o.target_general()) {
        let defenders = board.army(general);
        let striker = view
            .intel
            .my_armies
            .iter()
            .find(|a| board.are_adjacent(a.index, general) && a.power > defenders + 1);
        if let Some(army) = striker {
            return vec![Move::new(
                MoveMode::Murder,
                army.index,
                general,
                PRIORITY_FINISHING_BLOW,
            )];
        }
    }
    Vec::new()
}

/// Route the strongest top army (or, lacking one, the strongest army at all)
/// to the first known living rival general.
pub(super) fn march_on_general(view: &TurnView<'_>) -> Vec<Move> {
    let Some((_, general)) = view.intel.rival_general() else {
        return Vec::new();
    };
    let Some(source) = view
        .intel
        .strongest_top_army()
        .or_else(|| view.intel.strongest_army())
    else {
        return Vec::new();
    };
    let path = view.navigator.find_path(view.board, source.index, general);
    route_moves(&path, MoveMode::Murder, PRIORITY_MURDER)
}
