mod common;

use common::*;
use conquest_brain::{Engine, EngineConfig, Posture, RecordingDispatch};
use conquest_core::{MoveMode, PlayerId, ScoreRecord};

fn engine() -> Engine {
    Engine::new(EngineConfig::default())
}

#[test]
fn lone_army_on_an_unseen_board_expands_by_creeping() {
    let mut terrain = [-1; 25];
    terrain[MY_GENERAL] = ME.0 as i32;
    let mut armies = [0; 25];
    armies[MY_GENERAL] = 25;
    let game = ToyGame::new(&terrain, &armies);
    let mut engine = engine();

    let report = engine.observe(&game.snapshot()).unwrap();
    assert_eq!(report.posture, Posture::Expand);
    assert!(report.replanned);

    let first = engine.queue().front().copied().expect("a move is planned");
    assert_eq!(first.mode, MoveMode::Creep);
    assert!(!first.send_half);
    assert_eq!(first.source, MY_GENERAL);
    assert!([1, 5, 7, 11].contains(&first.target));
}

#[test]
fn visible_rival_territory_keeps_creeping_under_attack() {
    let game = ToyGame::new(&EMPTY, &ALL_ARMIES_ON_GENERAL);
    let mut engine = engine();

    let report = engine.observe(&game.snapshot()).unwrap();
    assert_eq!(report.posture, Posture::Attack);
    assert!(report.replanned);

    let first = engine.queue().front().copied().expect("a move is planned");
    assert_eq!(first.mode, MoveMode::Creep);
    assert!(!first.send_half);
    assert_eq!(first.source, MY_GENERAL);
    assert_eq!(game.terrain[first.target], -1);
    assert!([1, 5, 7, 11].contains(&first.target));
}

#[test]
fn known_rival_general_draws_a_contiguous_murder_chain() {
    let game = ToyGame::new(&EMPTY, &ALL_ARMIES_ON_GENERAL).with_rival_general(24, 10);
    let mut engine = engine();

    let report = engine.observe(&game.snapshot()).unwrap();
    assert_eq!(report.posture, Posture::Murder);

    let moves: Vec<_> = engine.queue().iter().copied().collect();
    assert_eq!(moves.len(), 6);
    assert_eq!(moves[0].source, MY_GENERAL);
    assert_eq!(moves.last().map(|m| m.target), Some(24));
    for pair in moves.windows(2) {
        assert_eq!(pair[1].source, pair[0].target);
    }
    assert!(moves.iter().all(|m| m.mode == MoveMode::Murder && m.priority >= 10));
}

#[test]
fn rival_general_found_in_the_opening_is_hunted_at_once() {
    let game = ToyGame::new(&EMPTY, &ALL_ARMIES_ON_GENERAL)
        .with_rival_general(24, 10)
        .at_turn(20);
    let mut engine = engine();

    let report = engine.observe(&game.snapshot()).unwrap();
    assert_eq!(report.posture, Posture::Explore);

    let moves: Vec<_> = engine.queue().iter().copied().collect();
    assert_eq!(moves.len(), 6);
    assert_eq!(moves[0].source, MY_GENERAL);
    assert_eq!(moves.last().map(|m| m.target), Some(24));
    assert!(moves.iter().all(|m| m.mode == MoveMode::Murder));
}

#[test]
fn murder_chain_is_dispatched_one_step_per_turn() {
    let mut game = ToyGame::new(&EMPTY, &ALL_ARMIES_ON_GENERAL).with_rival_general(24, 10);
    let mut engine = engine();
    let mut dispatch = RecordingDispatch::new();

    for _ in 0..6 {
        let command = engine
            .tick(&game.snapshot(), &mut dispatch)
            .unwrap()
            .expect("one command per turn");
        game.apply(command);
        game.advance();
    }

    assert_eq!(dispatch.commands.len(), 6);
    assert_eq!(dispatch.last().map(|c| c.target), Some(24));
    assert_eq!(game.terrain[24], ME.0 as i32);
}

#[test]
fn two_armies_queue_exactly_one_creep() {
    let game = ToyGame::new(&EMPTY, &TWO_LARGE_ARMIES);
    let mut engine = engine();

    engine.observe(&game.snapshot()).unwrap();
    assert_eq!(engine.queue().len(), 1);
    let mv = engine.queue().front().copied().unwrap();
    assert_eq!(mv.mode, MoveMode::Creep);
    assert!(game.armies[mv.source] > 1);
}

#[test]
fn block_of_equal_armies_still_creeps() {
    let game = ToyGame::new(&OCCUPIED_CORNER, &CORNER_ARMIES);
    let mut engine = engine();

    engine.observe(&game.snapshot()).unwrap();
    let mv = engine.queue().front().copied().unwrap();
    assert_eq!(mv.mode, MoveMode::Creep);
    assert_eq!(game.terrain[mv.target], -1);
}

#[test]
fn creep_budget_is_configurable() {
    let game = ToyGame::new(&EMPTY, &TWO_LARGE_ARMIES);
    let mut engine = Engine::new(EngineConfig {
        creep_moves_per_plan: 4,
        ..EngineConfig::default()
    });

    engine.observe(&game.snapshot()).unwrap();
    let moves: Vec<_> = engine.queue().iter().copied().collect();
    assert_eq!(moves.len(), 2);
    assert_ne!(moves[0].source, moves[1].source);
    assert_ne!(moves[0].target, moves[1].target);
}

#[test]
fn adjacent_beatable_general_is_struck_immediately() {
    let mut armies = ALL_ARMIES_ON_GENERAL;
    armies[19] = 30;
    let mut terrain = EMPTY;
    terrain[19] = ME.0 as i32;
    let game = ToyGame::new(&terrain, &armies).with_rival_general(24, 10);
    let mut engine = engine();

    engine.observe(&game.snapshot()).unwrap();
    let moves: Vec<_> = engine.queue().iter().copied().collect();
    assert_eq!(moves.len(), 1);
    assert_eq!((moves[0].source, moves[0].target), (19, 24));
    assert_eq!(moves[0].mode, MoveMode::Murder);
    assert_eq!(moves[0].priority, 100);
}

#[test]
fn reachable_city_is_captured_with_half_when_half_suffices() {
    let mut armies = ALL_ARMIES_ON_GENERAL;
    armies[MY_GENERAL] = 60;
    let game = ToyGame::new(&EMPTY, &armies).with_city(8, 10);
    let mut engine = engine();

    engine.observe(&game.snapshot()).unwrap();
    let moves: Vec<_> = engine.queue().iter().copied().collect();
    assert_eq!(moves.len(), 2);
    assert!(moves.iter().all(|m| m.mode == MoveMode::Capture));
    assert_eq!(moves[0].source, MY_GENERAL);
    assert_eq!(moves[1].target, 8);
    assert!(moves[0].send_half);
    assert!(!moves[1].send_half);
}

#[test]
fn city_needing_the_whole_stack_sends_everything() {
    let game = ToyGame::new(&EMPTY, &ALL_ARMIES_ON_GENERAL).with_city(8, 10);
    let mut engine = engine();

    engine.observe(&game.snapshot()).unwrap();
    let first = engine.queue().front().copied().unwrap();
    assert_eq!(first.mode, MoveMode::Capture);
    assert!(!first.send_half);
}

#[test]
fn unbeatable_city_is_left_alone() {
    let game = ToyGame::new(&EMPTY, &ALL_ARMIES_ON_GENERAL).with_city(8, 40);
    let mut engine = engine();

    engine.observe(&game.snapshot()).unwrap();
    let first = engine.queue().front().copied().unwrap();
    assert_eq!(first.mode, MoveMode::Creep);
}

#[test]
fn outscored_bot_still_marches_on_a_known_general() {
    let mut armies = ALL_ARMIES_ON_GENERAL;
    armies[12] = 8;
    let mut terrain = EMPTY;
    terrain[12] = ME.0 as i32;
    let mut game = ToyGame::new(&terrain, &armies).with_rival_general(24, 10);
    game.rival_score = (500, 40);
    let mut engine = engine();

    let report = engine.observe(&game.snapshot()).unwrap();
    assert_eq!(report.posture, Posture::Defend);

    let moves: Vec<_> = engine.queue().iter().copied().collect();
    assert_eq!(moves.len(), 4);
    assert_eq!(moves[0].source, 12);
    assert_eq!(moves.last().map(|m| m.target), Some(24));
    assert!(moves.iter().all(|m| m.mode == MoveMode::Murder));
    assert!(moves.iter().all(|m| m.priority >= 10));
}

#[test]
fn consolidates_home_only_when_nothing_else_applies() {
    // Late game: the lone mid-sized army sits below the useful threshold
    // and is walled in by our own single-army tiles.
    let mut armies = ALL_ARMIES_ON_GENERAL;
    armies[MY_GENERAL] = 1;
    armies[12] = 3;
    let mut terrain = EMPTY;
    terrain[12] = ME.0 as i32;
    for index in [7, 11, 13, 17] {
        terrain[index] = ME.0 as i32;
        armies[index] = 1;
    }
    let game = ToyGame::new(&terrain, &armies).at_turn(120);
    let mut engine = engine();

    let report = engine.observe(&game.snapshot()).unwrap();
    assert_eq!(report.posture, Posture::Attack);

    let moves: Vec<_> = engine.queue().iter().copied().collect();
    assert_eq!(moves.len(), 2);
    assert_eq!(moves[0].source, 12);
    assert_eq!(moves[1].target, MY_GENERAL);
    assert!(moves.iter().all(|m| m.mode == MoveMode::Defend && m.priority == -1));
}

#[test]
fn dead_rival_is_not_hunted() {
    let game = ToyGame::new(&EMPTY, &ALL_ARMIES_ON_GENERAL).with_rival_general(24, 10);
    let mut snapshot = game.snapshot();
    snapshot.scores[0] = ScoreRecord {
        dead: true,
        ..ScoreRecord::new(PlayerId(0), 0, 0)
    };
    let mut engine = engine();

    let report = engine.observe(&snapshot).unwrap();
    assert_eq!(report.posture, Posture::Attack);
    assert!(engine.queue().iter().all(|m| m.mode != MoveMode::Murder));
}
