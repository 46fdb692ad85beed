use conquest_core::{Board, PlayerId};
use conquest_nav::{BfsNavigator, DistanceMap, Navigator, Reach};
use proptest::prelude::*;

const ME: PlayerId = PlayerId(1);

fn board_with_terrain(width: usize, height: usize, terrain: &[i32]) -> Board {
    Board::new(width, height, &vec![0; width * height], terrain, ME).expect("valid board")
}

fn open_board(width: usize, height: usize) -> Board {
    board_with_terrain(width, height, &vec![-1; width * height])
}

#[test]
fn distance_map_marks_mountains_without_expanding_them() {
    #[rustfmt::skip]
    let terrain = [
        -1, -2, -1,
        -1, -2, -1,
        -1, -1, -1,
    ];
    let board = board_with_terrain(3, 3, &terrain);
    let map = DistanceMap::build(&board, 0);

    assert_eq!(map.get(0), Some(Reach::Steps(0)));
    assert_eq!(map.get(1), Some(Reach::Blocked));
    assert_eq!(map.get(4), Some(Reach::Blocked));
    assert_eq!(map.steps(2), Some(6));
    assert_eq!(map.steps(8), Some(4));
}

#[test]
fn fog_is_walkable_but_fogged_obstacles_are_not() {
    let board = board_with_terrain(4, 1, &[1, -3, -4, -1]);
    let map = DistanceMap::build(&board, 0);

    assert_eq!(map.steps(1), Some(1));
    assert_eq!(map.get(2), Some(Reach::Blocked));
    assert_eq!(map.get(3), None);
}

#[test]
fn path_routes_around_a_wall_gap() {
    let mut terrain = vec![-1; 25];
    for row in 0..5 {
        if row != 2 {
            terrain[row * 5 + 2] = -2;
        }
    }
    let board = board_with_terrain(5, 5, &terrain);

    let path = BfsNavigator.find_path(&board, 0, 24);
    assert_eq!(path.source(), Some(0));
    assert_eq!(path.destination(), Some(24));
    assert!(path.tiles.contains(&12));
    assert_eq!(path.hop_count(), 8);
    for (from, to) in path.steps() {
        assert!(board.are_adjacent(from, to));
    }
}

#[test]
fn disconnected_destination_yields_empty_path() {
    #[rustfmt::skip]
    let terrain = [
        -1, -2, -1,
        -2, -2, -1,
        -1, -1, -1,
    ];
    let board = board_with_terrain(3, 3, &terrain);

    let path = BfsNavigator.find_path(&board, 0, 8);
    assert!(path.is_empty());
    assert_eq!(path.hop_count(), 0);

    // A mountain itself is never a destination.
    assert!(BfsNavigator.find_path(&board, 2, 4).is_empty());
}

#[test]
fn path_to_self_is_a_single_tile() {
    let board = open_board(3, 3);
    let path = BfsNavigator.find_path(&board, 4, 4);
    assert_eq!(path.tiles, vec![4]);
    assert_eq!(path.steps().count(), 0);
}

#[test]
fn out_of_range_source_reaches_nothing() {
    let board = open_board(3, 3);
    let map = DistanceMap::build(&board, 50);
    assert!(!map.is_reachable(0));
    assert!(map.reconstruct_path(&board, 0).is_empty());
}

#[test]
fn ties_prefer_north_then_east_then_south_then_west() {
    let board = open_board(3, 3);
    // Tiles 1 and 3 are both one step from 4; descent from 0 checks east (1) before south (3).
    let path = BfsNavigator.find_path(&board, 4, 0);
    assert_eq!(path.tiles, vec![4, 1, 0]);

    let path = BfsNavigator.find_path(&board, 0, 8);
    assert_eq!(path.tiles, vec![0, 1, 2, 5, 8]);
}

#[test]
fn path_is_deterministic_for_same_input() {
    let mut terrain = vec![-1; 100];
    for row in 0..10 {
        terrain[row * 10 + 5] = -2;
    }
    terrain[55] = -3;
    let board = board_with_terrain(10, 10, &terrain);

    let a = BfsNavigator.find_path(&board, 11, 88);
    let b = BfsNavigator.find_path(&board, 11, 88);
    assert!(!a.is_empty());
    assert_eq!(a, b);
}

proptest! {
    #[test]
    fn open_board_hop_count_is_manhattan(
        width in 1usize..16,
        height in 1usize..16,
        a in 0usize..256,
        b in 0usize..256,
    ) {
        let board = open_board(width, height);
        let (from, to) = (a % board.size(), b % board.size());

        let path = BfsNavigator.find_path(&board, from, to);
        prop_assert_eq!(Some(path.hop_count()), board.manhattan(from, to));
        prop_assert!(path.tiles.len() <= board.size());
    }

    #[test]
    fn distances_never_decrease_along_a_route(
        cells in proptest::collection::vec(prop_oneof![4 => Just(-1i32), 1 => Just(-2i32), 1 => Just(-3i32)], 64),
        from in 0usize..64,
        to in 0usize..64,
    ) {
        let mut terrain = cells;
        terrain[from] = 1;
        let board = board_with_terrain(8, 8, &terrain);
        let map = DistanceMap::build(&board, from);
        let path = map.reconstruct_path(&board, to);

        prop_assert_eq!(path.is_empty(), !map.is_reachable(to));
        prop_assert!(path.tiles.len() <= board.size());
        let distances: Vec<_> = path.tiles.iter().filter_map(|&t| map.steps(t)).collect();
        prop_assert_eq!(distances.len(), path.tiles.len());
        for pair in distances.windows(2) {
            prop_assert_eq!(pair[1], pair[0] + 1);
        }
    }
}
