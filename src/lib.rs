//! Two-player grid-based naval combat: a board state machine plus the
//! search-based opponents that place fleets and pick attacks against it.

mod board;
mod common;
mod config;
mod game;
mod logging;
mod placement;
mod player;
mod player_admiral;
mod player_cli;
mod player_hunter;
mod player_sweep;
mod targeting;

pub use board::{Board, Cell};
pub use common::{BoardError, Coord, Orientation, ShipId, ShotResult};
pub use config::{ConfigError, Rules, ShipSpec, MAX_COLS, MAX_ROWS};
pub use game::{play, Winner};
pub use logging::init_logging;
pub use placement::{place_fleet_backtracking, place_fleet_spaced};
pub use player::{create_player, Player};
pub use player_admiral::AdmiralPlayer;
pub use player_cli::CliPlayer;
pub use player_hunter::HunterPlayer;
pub use player_sweep::SweepPlayer;
pub use targeting::{FireControl, HuntPolicy};
