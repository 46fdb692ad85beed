use conquest_core::{Move, MoveMode};

use super::{route_moves, PRIORITY_LAST_STAND};
use crate::TurnView;

/// Route the largest army away from home back to our general. Runs only
/// when no other tier found anything to do.
pub(super) fn consolidate(view: &TurnView<'_>) -> Vec<Move> {
    let Some(general) = view.intel.my_general else {
        return Vec::new();
    };
    let Some(source) = view.intel.my_armies.iter().find(|a| a.index != general) else {
        return Vec::new();
    };
    let path = view.navigator.find_path(view.board, source.index, general);
    route_moves(&path, MoveMode::Defend, PRIORITY_LAST_STAND)
}
