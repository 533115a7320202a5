//! Opponent capability interface and variant dispatch.

use std::sync::Arc;

use rand::rngs::SmallRng;

use crate::board::Board;
use crate::common::{BoardError, Coord, ShotResult};
use crate::config::Rules;
use crate::player_admiral::AdmiralPlayer;
use crate::player_cli::CliPlayer;
use crate::player_hunter::HunterPlayer;
use crate::player_sweep::SweepPlayer;

/// Interface implemented by every opponent variant.
pub trait Player {
    /// Display name of the player.
    fn name(&self) -> &str;

    /// Whether this player is driven by a person at the terminal.
    fn is_human(&self) -> bool {
        false
    }

    /// Place the whole fleet onto the board, or fail cleanly. Callers must
    /// treat any failure as "placement impossible".
    fn place_ships(&mut self, rng: &mut SmallRng, board: &mut Board) -> Result<(), BoardError>;

    /// Choose the next coordinate to attack.
    fn recommend_attack(&mut self, rng: &mut SmallRng) -> Coord;

    /// Learn the outcome of our own last attack (`None` when it was
    /// rejected).
    fn record_attack_result(&mut self, _at: Coord, _result: Option<ShotResult>) {}

    /// Learn that the opponent attacked our board at a position.
    fn record_attack_by_opponent(&mut self, _at: Coord) {}
}

/// Build a player variant by kind: "human", "sweep", "hunter" or
/// "admiral". Unknown kinds yield `None`.
pub fn create_player(kind: &str, name: &str, rules: Arc<Rules>) -> Option<Box<dyn Player>> {
    match kind {
        "human" => Some(Box::new(CliPlayer::new(name, rules))),
        "sweep" => Some(Box::new(SweepPlayer::new(name, rules))),
        "hunter" => Some(Box::new(HunterPlayer::new(name, rules))),
        "admiral" => Some(Box::new(AdmiralPlayer::new(name, rules))),
        _ => None,
    }
}
