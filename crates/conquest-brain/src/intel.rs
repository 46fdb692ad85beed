//! Per-turn board intelligence plus the little that survives between turns.

use std::collections::BTreeMap;

use conquest_core::{
    Board, OpponentRecord, PlayerId, ScoreRecord, Terrain, TileClass, TileIndex, TurnSnapshot,
};
use serde::Serialize;

use crate::EngineConfig;

/// An owned tile with more than one army on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ArmyTile {
    pub index: TileIndex,
    pub power: u32,
}

/// A city seen at some point, with the defender count last observed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct KnownCity {
    pub index: TileIndex,
    pub army: u32,
    pub visible: bool,
}

/// Our own scoreboard row, compared with the previous turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MyScore {
    pub total: u32,
    pub tiles: u32,
    pub lost_armies: bool,
    pub lost_territory: bool,
}

impl MyScore {
    pub fn aggregate(&self) -> u64 {
        self.total as u64 + self.tiles as u64
    }
}

/// Derived sets for one turn. Rebuilt from scratch every tick.
#[derive(Debug, Clone, Serialize)]
pub struct Intel {
    pub turn: u32,
    pub me: PlayerId,
    pub empty_territories: Vec<TileIndex>,
    pub visible_opponent_territories: Vec<TileIndex>,
    pub fogged_territories: Vec<TileIndex>,
    /// Descending by power; ties keep ascending index order.
    pub my_armies: Vec<ArmyTile>,
    pub my_top_armies: Vec<ArmyTile>,
    pub useful_army_threshold: u32,
    pub total_available_power: u64,
    pub my_general: Option<TileIndex>,
    pub my_score: MyScore,
    /// Sorted by player id.
    pub opponents: Vec<OpponentRecord>,
    /// Known cities we do not own, by index.
    pub cities: Vec<KnownCity>,
    pub undiscovered: bool,
    pub unexplored_remaining: usize,
}

impl Intel {
    pub fn strongest_top_army(&self) -> Option<ArmyTile> {
        self.my_top_armies.first().copied()
    }

    pub fn strongest_army(&self) -> Option<ArmyTile> {
        self.my_armies.first().copied()
    }

    /// First living rival whose general position is known.
    pub fn rival_general(&self) -> Option<(&OpponentRecord, TileIndex)> {
        self.opponents
            .iter()
            .find_map(|o| o.target_general().map(|g| (o, g)))
    }

    pub fn city(&self, index: TileIndex) -> Option<&KnownCity> {
        self.cities.iter().find(|c| c.index == index)
    }
}

/// State carried from turn to turn. Every field only ever grows or latches.
#[derive(Debug, Clone, Default)]
pub struct IntelMemory {
    unexplored: Vec<bool>,
    unexplored_count: usize,
    discovered: bool,
    cities: BTreeMap<TileIndex, u32>,
    generals: BTreeMap<PlayerId, TileIndex>,
    my_general: Option<TileIndex>,
    last_score: Option<(u32, u32)>,
}

impl IntelMemory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_discovered(&self) -> bool {
        self.discovered
    }

    pub fn known_general(&self, player: PlayerId) -> Option<TileIndex> {
        self.generals.get(&player).copied()
    }

    pub fn discovered_cities(&self) -> impl Iterator<Item = TileIndex> + '_ {
        self.cities.keys().copied()
    }

    pub fn is_unexplored(&self, index: TileIndex) -> bool {
        self.unexplored.get(index).copied().unwrap_or(false)
    }

    /// Fold one snapshot into memory and derive this turn's intelligence.
    pub fn observe(&mut self, snapshot: &TurnSnapshot, board: &Board, config: &EngineConfig) -> Intel {
        let me = board.me();
        let size = board.size();
        if self.unexplored.len() != size {
            self.unexplored = vec![true; size];
            self.unexplored_count = size;
        }

        for (player, code) in snapshot.generals.iter().enumerate() {
            let Ok(index) = TileIndex::try_from(*code) else { continue };
            if index >= size {
                continue;
            }
            let player = PlayerId(player as u32);
            if player == me {
                self.my_general = Some(index);
            } else {
                self.generals.entry(player).or_insert(index);
            }
        }

        for &index in snapshot.cities.iter().filter(|&&i| i < size) {
            self.cities.insert(index, board.army(index));
        }

        let turn = snapshot.turn;
        let threshold = config.useful_army_threshold(turn);
        let past_opening = turn > config.opening_turn_threshold;

        let mut empty_territories = Vec::new();
        let mut visible_opponent_territories = Vec::new();
        let mut fogged_territories = Vec::new();
        let mut my_armies = Vec::new();
        let mut total_available_power = 0u64;
        let mut my_tiles = 0u32;
        let mut my_total = 0u32;

        for tile in board.tiles() {
            match tile.terrain {
                Terrain::Owned(owner) if owner == me => {
                    my_tiles += 1;
                    my_total = my_total.saturating_add(tile.army);
                    if self.unexplored[tile.index] {
                        self.unexplored[tile.index] = false;
                        self.unexplored_count -= 1;
                    }
                    if tile.army > 1 {
                        total_available_power += (tile.army - 1) as u64;
                        my_armies.push(ArmyTile {
                            index: tile.index,
                            power: tile.army,
                        });
                    }
                }
                Terrain::Owned(_) => {
                    self.discovered = true;
                    visible_opponent_territories.push(tile.index);
                }
                Terrain::Fog => fogged_territories.push(tile.index),
                Terrain::Empty if tile.class == TileClass::Empty => {
                    empty_territories.push(tile.index)
                }
                _ => {}
            }
        }

        my_armies.sort_by(|a, b| b.power.cmp(&a.power));
        let my_top_armies = my_armies
            .iter()
            .copied()
            .filter(|a| a.power >= threshold)
            .filter(|a| !(past_opening && Some(a.index) == self.my_general))
            .collect();

        let my_score = self.score_for(snapshot.score_of(me), my_total, my_tiles);
        let opponents = self.opponents(me, &snapshot.scores);

        let cities = self
            .cities
            .iter()
            .filter(|(&index, _)| !board.is_mine(index))
            .map(|(&index, &last_seen)| {
                let visible = board
                    .tile(index)
                    .is_some_and(|t| !t.terrain.is_fogged());
                KnownCity {
                    index,
                    army: if visible { board.army(index) } else { last_seen },
                    visible,
                }
            })
            .collect();

        Intel {
            turn,
            me,
            empty_territories,
            visible_opponent_territories,
            fogged_territories,
            my_armies,
            my_top_armies,
            useful_army_threshold: threshold,
            total_available_power,
            my_general: self.my_general,
            my_score,
            opponents,
            cities,
            undiscovered: !self.discovered,
            unexplored_remaining: self.unexplored_count,
        }
    }

    fn score_for(&mut self, reported: Option<&ScoreRecord>, total: u32, tiles: u32) -> MyScore {
        let (total, tiles) = reported.map_or((total, tiles), |s| (s.total, s.tiles));
        let (lost_armies, lost_territory) = match self.last_score {
            Some((prev_total, prev_tiles)) => (total < prev_total, tiles < prev_tiles),
            None => (false, false),
        };
        self.last_score = Some((total, tiles));
        MyScore {
            total,
            tiles,
            lost_armies,
            lost_territory,
        }
    }

    fn opponents(&self, me: PlayerId, scores: &[ScoreRecord]) -> Vec<OpponentRecord> {
        let mut by_player: BTreeMap<PlayerId, OpponentRecord> = scores
            .iter()
            .filter(|s| s.player != me)
            .map(|s| (s.player, OpponentRecord::from_score(s)))
            .collect();

        for (&player, &general) in &self.generals {
            by_player
                .entry(player)
                .or_insert(OpponentRecord {
                    player,
                    total_armies: 0,
                    total_tiles: 0,
                    general: None,
                    alive: true,
                })
                .general = Some(general);
        }

        by_player.into_values().collect()
    }
}
