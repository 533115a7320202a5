//! Baseline opponent: stacked placement and reverse scan-order attacks.
//! Ignores every result it is told about.

use std::sync::Arc;

use rand::rngs::SmallRng;

use crate::board::Board;
use crate::common::{BoardError, Coord, Orientation};
use crate::config::Rules;
use crate::player::Player;

pub struct SweepPlayer {
    name: String,
    rules: Arc<Rules>,
    cursor: Coord,
}

impl SweepPlayer {
    pub fn new(name: &str, rules: Arc<Rules>) -> Self {
        SweepPlayer {
            name: name.to_string(),
            rules,
            cursor: Coord::new(0, 0),
        }
    }
}

impl Player for SweepPlayer {
    fn name(&self) -> &str {
        &self.name
    }

    fn place_ships(&mut self, _rng: &mut SmallRng, board: &mut Board) -> Result<(), BoardError> {
        // one ship per row, flush left
        for id in 0..self.rules.ship_count() {
            board.place_ship(Coord::new(id, 0), id, Orientation::Horizontal)?;
        }
        Ok(())
    }

    fn recommend_attack(&mut self, _rng: &mut SmallRng) -> Coord {
        // walk the grid backwards, wrapping to the far corner
        if self.cursor.col > 0 {
            self.cursor.col -= 1;
        } else {
            self.cursor.col = self.rules.cols() - 1;
            if self.cursor.row > 0 {
                self.cursor.row -= 1;
            } else {
                self.cursor.row = self.rules.rows() - 1;
            }
        }
        self.cursor
    }
}
