#![allow(dead_code)]

use conquest_core::{Command, PlayerId, ScoreRecord, TileIndex, TurnSnapshot};

pub const ME: PlayerId = PlayerId(1);
pub const RIVAL: PlayerId = PlayerId(0);
pub const WIDTH: usize = 5;
pub const HEIGHT: usize = 5;
pub const MY_GENERAL: TileIndex = 6;

#[rustfmt::skip]
pub const EMPTY: [i32; 25] = [
    -1, -1, -1, -1, -1,
    -1,  1, -1, -1, -1,
     1, -1, -1, -1, -1,
    -1, -1, -1, -1, -1,
    -1, -1, -1, -1,  0,
];

#[rustfmt::skip]
pub const FOGGY: [i32; 25] = [
    -1, -1, -1, -1, -1,
    -1,  1, -1, -1, -1,
     1, -1, -1, -1, -1,
    -1, -1, -1, -3, -3,
    -1, -1, -1, -3, -3,
];

#[rustfmt::skip]
pub const OCCUPIED_CORNER: [i32; 25] = [
     1,  1, -1, -1, -1,
     1,  1,  1, -1, -1,
    -1,  1, -1, -1, -1,
    -1, -1, -1, -1, -1,
    -1, -1, -1, -1, -1,
];

#[rustfmt::skip]
pub const ALL_ARMIES_ON_GENERAL: [i32; 25] = [
    -1, -1, -1, -1, -1,
    -1, 25, -1, -1, -1,
     1, -1, -1, -1, -1,
    -1, -1, -1, -1, -1,
    -1, -1, -1, -1, -1,
];

#[rustfmt::skip]
pub const TWO_LARGE_ARMIES: [i32; 25] = [
    -1, -1, -1, -1, -1,
    -1, 15, -1, -1, -1,
    10, -1, -1, -1, -1,
    -1, -1, -1, -1, -1,
    -1, -1, -1, -1, -1,
];

#[rustfmt::skip]
pub const CORNER_ARMIES: [i32; 25] = [
     5,  5, -1, -1, -1,
     5,  5,  5, -1, -1,
    -1,  5, -1, -1, -1,
    -1, -1, -1, -1, -1,
    -1, -1, -1, -1, -1,
];

/// Fully visible 5x5 game that applies commands the way the server would.
#[derive(Debug, Clone)]
pub struct ToyGame {
    pub turn: u32,
    pub armies: Vec<i32>,
    pub terrain: Vec<i32>,
    /// General tile per player id, `-1` when unknown to us.
    pub generals: Vec<i32>,
    pub cities: Vec<TileIndex>,
    pub rival_score: (u32, u32),
}

impl ToyGame {
    pub fn new(terrain: &[i32], armies: &[i32]) -> Self {
        Self {
            turn: 25,
            armies: armies.to_vec(),
            terrain: terrain.to_vec(),
            generals: vec![-1, MY_GENERAL as i32],
            cities: Vec::new(),
            rival_score: (10, 1),
        }
    }

    pub fn at_turn(mut self, turn: u32) -> Self {
        self.turn = turn;
        self
    }

    pub fn with_rival_general(mut self, index: TileIndex, army: i32) -> Self {
        self.generals[RIVAL.index()] = index as i32;
        self.terrain[index] = RIVAL.0 as i32;
        self.armies[index] = army;
        self
    }

    pub fn with_city(mut self, index: TileIndex, army: i32) -> Self {
        self.cities.push(index);
        self.armies[index] = army;
        self
    }

    pub fn snapshot(&self) -> TurnSnapshot {
        let mine = |i: &usize| self.terrain[*i] == ME.0 as i32;
        let tiles = (0..self.terrain.len()).filter(mine).count() as u32;
        let total = (0..self.terrain.len())
            .filter(mine)
            .map(|i| self.armies[i].max(0) as u32)
            .sum();
        TurnSnapshot::new(
            self.turn,
            ME,
            WIDTH,
            HEIGHT,
            self.armies.clone(),
            self.terrain.clone(),
        )
        .with_generals(self.generals.clone())
        .with_cities(self.cities.clone())
        .with_scores(vec![
            ScoreRecord::new(RIVAL, self.rival_score.0, self.rival_score.1),
            ScoreRecord::new(ME, total, tiles),
        ])
    }

    /// Resolve one of our commands; illegal ones are ignored like the server does.
    pub fn apply(&mut self, command: Command) {
        let (src, dst) = (command.source, command.target);
        let me = ME.0 as i32;
        let adjacent = src.abs_diff(dst) == WIDTH
            || (src / WIDTH == dst / WIDTH && src.abs_diff(dst) == 1);
        if !adjacent || self.terrain[src] != me || self.armies[src] < 2 || self.terrain[dst] == -2 {
            return;
        }
        let moving = if command.send_half {
            self.armies[src] / 2
        } else {
            self.armies[src] - 1
        };
        self.armies[src] -= moving;
        if self.terrain[dst] == me {
            self.armies[dst] += moving;
            return;
        }
        let defenders = self.armies[dst].max(0);
        if moving > defenders {
            self.armies[dst] = moving - defenders;
            self.terrain[dst] = me;
        } else {
            self.armies[dst] = defenders - moving;
        }
    }

    /// Next turn: the general grows by one.
    pub fn advance(&mut self) {
        self.turn += 1;
        self.armies[MY_GENERAL] += 1;
    }
}
