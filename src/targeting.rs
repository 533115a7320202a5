//! Attack selection: a hunt/target state machine over one player's private
//! view of the opponent grid.
//!
//! While hunting, the machine either samples the unexplored pool uniformly
//! or scores every unexplored coordinate by how many fleet runs pass
//! through it. A non-fatal hit arms targeting: compass directions are
//! probed outward from the anchor hit until the ship is destroyed or every
//! direction is exhausted.

use std::sync::Arc;

use log::debug;
use rand::rngs::SmallRng;
use rand::Rng;

use crate::common::{Coord, ShotResult};
use crate::config::Rules;

/// Quality tier used while no hit is being chased.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HuntPolicy {
    /// Uniform random over unexplored coordinates.
    Uniform,
    /// Prefer the coordinate the most fleet runs pass through.
    Weighted,
}

/// Compass directions probed around an anchor hit, in probe order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Left,
    Right,
    Up,
    Down,
}

const PROBE_ORDER: [Direction; 4] = [
    Direction::Left,
    Direction::Right,
    Direction::Up,
    Direction::Down,
];

impl Direction {
    fn step(self, from: Coord, rules: &Rules) -> Option<Coord> {
        let (row, col) = match self {
            Direction::Left => (Some(from.row), from.col.checked_sub(1)),
            Direction::Right => (Some(from.row), Some(from.col + 1)),
            Direction::Up => (from.row.checked_sub(1), Some(from.col)),
            Direction::Down => (Some(from.row + 1), Some(from.col)),
        };
        match (row, col) {
            (Some(row), Some(col)) => {
                let to = Coord::new(row, col);
                rules.contains(to).then_some(to)
            }
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Mode {
    Hunt,
    Target {
        anchor: Coord,
        directions: Vec<Direction>,
    },
}

/// Hunt/target attack selector tracking one player's shot history.
#[derive(Debug, Clone)]
pub struct FireControl {
    rules: Arc<Rules>,
    policy: HuntPolicy,
    unexplored: Vec<Coord>,
    hits: Vec<bool>,
    misses: Vec<bool>,
    mode: Mode,
}

impl FireControl {
    pub fn new(rules: Arc<Rules>, policy: HuntPolicy) -> Self {
        let mut unexplored = Vec::with_capacity(rules.area());
        for row in 0..rules.rows() {
            for col in 0..rules.cols() {
                unexplored.push(Coord::new(row, col));
            }
        }
        FireControl {
            policy,
            unexplored,
            hits: vec![false; rules.area()],
            misses: vec![false; rules.area()],
            mode: Mode::Hunt,
            rules,
        }
    }

    /// Whether the machine is hunting (no unresolved hit being chased).
    pub fn is_hunting(&self) -> bool {
        matches!(self.mode, Mode::Hunt)
    }

    fn idx(&self, at: Coord) -> usize {
        at.row * self.rules.cols() + at.col
    }

    fn recorded_hit(&self, at: Coord) -> bool {
        self.hits[self.idx(at)]
    }

    fn recorded_miss(&self, at: Coord) -> bool {
        self.misses[self.idx(at)]
    }

    /// Next coordinate to attack.
    pub fn recommend(&mut self, rng: &mut SmallRng) -> Coord {
        if let Some(at) = self.probe_target() {
            return at;
        }
        self.hunt(rng)
    }

    /// Fold the outcome of our own most recent attack into the machine.
    /// Rejected shots (`None`) teach nothing.
    pub fn record(&mut self, at: Coord, result: Option<ShotResult>) {
        let Some(result) = result else { return };
        self.retire(at);
        let i = self.idx(at);
        match result {
            ShotResult::Miss => {
                self.misses[i] = true;
                // the current probe direction is dead
                self.drop_direction();
                let exhausted =
                    matches!(&self.mode, Mode::Target { directions, .. } if directions.is_empty());
                if exhausted {
                    self.mode = Mode::Hunt;
                }
            }
            ShotResult::Hit => {
                self.hits[i] = true;
                if self.mode == Mode::Hunt {
                    debug!("hit at {}, switching to targeting", at);
                    self.mode = Mode::Target {
                        anchor: at,
                        directions: PROBE_ORDER.to_vec(),
                    };
                }
            }
            ShotResult::Sunk(_) => {
                self.hits[i] = true;
                self.mode = Mode::Hunt;
            }
        }
    }

    /// Walk the remaining probe directions from the anchor. Dead directions
    /// are discarded as they are found; exhausting them drops back to hunt.
    fn probe_target(&mut self) -> Option<Coord> {
        loop {
            let (anchor, dir) = match &self.mode {
                Mode::Hunt => return None,
                Mode::Target { anchor, directions } => (*anchor, directions.first().copied()),
            };
            let Some(dir) = dir else {
                self.mode = Mode::Hunt;
                return None;
            };
            let mut probe = anchor;
            let found = loop {
                match dir.step(probe, &self.rules) {
                    // recorded hits extend the walk along the ship
                    Some(next) if self.recorded_hit(next) => probe = next,
                    Some(next) if !self.recorded_miss(next) => break Some(next),
                    // board edge or recorded miss
                    _ => break None,
                }
            };
            match found {
                Some(at) => return Some(at),
                None => self.drop_direction(),
            }
        }
    }

    fn drop_direction(&mut self) {
        if let Mode::Target { directions, .. } = &mut self.mode {
            if !directions.is_empty() {
                directions.remove(0);
            }
        }
    }

    fn hunt(&mut self, rng: &mut SmallRng) -> Coord {
        if self.unexplored.is_empty() {
            // board exhausted; the game is over before this matters
            return Coord::new(0, 0);
        }
        if self.policy == HuntPolicy::Weighted {
            if let Some(at) = self.best_scoring(rng) {
                return at;
            }
        }
        self.unexplored[rng.random_range(0..self.unexplored.len())]
    }

    /// Highest-scoring unexplored coordinate, ties broken uniformly.
    /// `None` when every score is zero.
    fn best_scoring(&self, rng: &mut SmallRng) -> Option<Coord> {
        let mut best = 0;
        let mut leaders: Vec<Coord> = Vec::new();
        for &at in &self.unexplored {
            let score = self.score(at);
            if score == 0 || score < best {
                continue;
            }
            if score > best {
                best = score;
                leaders.clear();
            }
            leaders.push(at);
        }
        if leaders.is_empty() {
            None
        } else {
            Some(leaders[rng.random_range(0..leaders.len())])
        }
    }

    /// Number of ways any fleet ship could lie across `at` in either
    /// orientation without crossing a recorded shot.
    pub fn score(&self, at: Coord) -> usize {
        let mut count = 0;
        for ship in self.rules.ships() {
            let len = ship.length();
            for start in at.row.saturating_sub(len - 1)..=at.row {
                if start + len > self.rules.rows() {
                    continue;
                }
                let clear = (start..start + len).all(|row| {
                    let cell = Coord::new(row, at.col);
                    !self.recorded_hit(cell) && !self.recorded_miss(cell)
                });
                if clear {
                    count += 1;
                }
            }
            for start in at.col.saturating_sub(len - 1)..=at.col {
                if start + len > self.rules.cols() {
                    continue;
                }
                let clear = (start..start + len).all(|col| {
                    let cell = Coord::new(at.row, col);
                    !self.recorded_hit(cell) && !self.recorded_miss(cell)
                });
                if clear {
                    count += 1;
                }
            }
        }
        count
    }

    fn retire(&mut self, at: Coord) {
        if let Some(pos) = self.unexplored.iter().position(|&c| c == at) {
            self.unexplored.swap_remove(pos);
        }
    }
}
