//! Strongest opponent: spaced fleet placement and run-weighted hunting
//! with directional follow-up on hits.

use std::sync::Arc;

use rand::rngs::SmallRng;

use crate::board::Board;
use crate::common::{BoardError, Coord, ShotResult};
use crate::config::Rules;
use crate::placement;
use crate::player::Player;
use crate::targeting::{FireControl, HuntPolicy};

pub struct AdmiralPlayer {
    name: String,
    gunnery: FireControl,
}

impl AdmiralPlayer {
    pub fn new(name: &str, rules: Arc<Rules>) -> Self {
        AdmiralPlayer {
            name: name.to_string(),
            gunnery: FireControl::new(rules, HuntPolicy::Weighted),
        }
    }
}

impl Player for AdmiralPlayer {
    fn name(&self) -> &str {
        &self.name
    }

    fn place_ships(&mut self, rng: &mut SmallRng, board: &mut Board) -> Result<(), BoardError> {
        placement::place_fleet_spaced(rng, board)
    }

    fn recommend_attack(&mut self, rng: &mut SmallRng) -> Coord {
        self.gunnery.recommend(rng)
    }

    fn record_attack_result(&mut self, at: Coord, result: Option<ShotResult>) {
        self.gunnery.record(at, result);
    }
}
