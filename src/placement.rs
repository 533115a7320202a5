//! Randomized fleet placement searches.
//!
//! Two tiers: a backtracking search that scatters the fleet over a
//! half-blocked board, and a spaced search that keeps a one-cell buffer
//! around every ship and falls back to the backtracking search when the
//! buffer cannot be satisfied. Both are explicit loops with bounded retry
//! counts and an undo list; neither recurses.

use log::debug;
use rand::rngs::SmallRng;
use rand::Rng;

use crate::board::Board;
use crate::common::{BoardError, Coord, Orientation, ShipId};
use crate::config::Rules;

/// Whole-fleet restart bound for the backtracking search.
const MAX_RESTARTS: usize = 50;

/// Reject fleets that cannot fit before touching the board.
fn check_fleet_fits(rules: &Rules, usable_area: usize) -> Result<(), BoardError> {
    let mut total = 0;
    for ship in rules.ships() {
        if ship.length() >= rules.rows() && ship.length() >= rules.cols() {
            return Err(BoardError::FleetWontFit);
        }
        total += ship.length();
    }
    if total > usable_area {
        return Err(BoardError::FleetWontFit);
    }
    Ok(())
}

fn all_coords(rules: &Rules) -> Vec<Coord> {
    let mut coords = Vec::with_capacity(rules.area());
    for row in 0..rules.rows() {
        for col in 0..rules.cols() {
            coords.push(Coord::new(row, col));
        }
    }
    coords
}

fn retire(pool: &mut Vec<Coord>, at: Coord) {
    if let Some(pos) = pool.iter().position(|&c| c == at) {
        pool.swap_remove(pos);
    }
}

fn footprint(rules: &Rules, origin: Coord, len: usize, orientation: Orientation) -> Option<Vec<Coord>> {
    let (dr, dc) = match orientation {
        Orientation::Vertical => (1, 0),
        Orientation::Horizontal => (0, 1),
    };
    let mut cells = Vec::with_capacity(len);
    for k in 0..len {
        let at = Coord::new(origin.row + dr * k, origin.col + dc * k);
        if !rules.contains(at) {
            return None;
        }
        cells.push(at);
    }
    Some(cells)
}

/// Place the whole fleet with the blocking overlay applied, scattering
/// ships over the unblocked half of the board.
pub fn place_fleet_backtracking(rng: &mut SmallRng, board: &mut Board) -> Result<(), BoardError> {
    let rules = board.rules().clone();
    check_fleet_fits(&rules, rules.area() / 2)?;
    board.block(rng);
    let outcome = fill_backtracking(rng, board, &rules);
    board.unblock();
    outcome
}

/// Randomized backtracking core shared by both tiers: attempt ships in id
/// order at random cells, undoing the whole attempt and restarting when a
/// ship runs out of candidate cells.
fn fill_backtracking(
    rng: &mut SmallRng,
    board: &mut Board,
    rules: &Rules,
) -> Result<(), BoardError> {
    for restart in 0..MAX_RESTARTS {
        let mut history: Vec<(Coord, ShipId, Orientation)> =
            Vec::with_capacity(rules.ship_count());
        let mut complete = true;
        for id in 0..rules.ship_count() {
            // cells not yet tried for this ship
            let mut pool = all_coords(rules);
            let placed = loop {
                if pool.is_empty() {
                    break None;
                }
                let at = pool.swap_remove(rng.random_range(0..pool.len()));
                if board.place_ship(at, id, Orientation::Vertical).is_ok() {
                    break Some((at, Orientation::Vertical));
                }
                if board.place_ship(at, id, Orientation::Horizontal).is_ok() {
                    break Some((at, Orientation::Horizontal));
                }
            };
            match placed {
                Some((at, orientation)) => history.push((at, id, orientation)),
                None => {
                    complete = false;
                    break;
                }
            }
        }
        if complete {
            return Ok(());
        }
        // walk the attempt backward and start over
        for &(at, id, orientation) in history.iter().rev() {
            let _ = board.unplace_ship(at, id, orientation);
        }
        debug!("fleet placement attempt {} failed, restarting", restart + 1);
    }
    Err(BoardError::SearchExhausted)
}

/// Place the whole fleet with a one-cell buffer between ships. When the
/// buffer cannot be satisfied within the draw bound, the board is cleared
/// and the backtracking search takes over with the buffer dropped.
pub fn place_fleet_spaced(rng: &mut SmallRng, board: &mut Board) -> Result<(), BoardError> {
    let rules = board.rules().clone();
    check_fleet_fits(&rules, rules.area())?;
    let mut free = all_coords(&rules);
    let draw_bound = rules.area() * 2;
    let mut draws = 0;
    for id in 0..rules.ship_count() {
        let len = rules.ship(id).map_or(0, |s| s.length());
        loop {
            if free.is_empty() || draws >= draw_bound {
                debug!("spaced placement stuck on ship {}, dropping the buffer", id);
                board.clear();
                return fill_backtracking(rng, board, &rules);
            }
            draws += 1;
            let at = free[rng.random_range(0..free.len())];
            if let Some(cells) = spaced_fit(&rules, &free, board, at, id, len, Orientation::Vertical)
            {
                retire_with_buffer(&rules, &mut free, &cells);
                break;
            }
            if let Some(cells) =
                spaced_fit(&rules, &free, board, at, id, len, Orientation::Horizontal)
            {
                retire_with_buffer(&rules, &mut free, &cells);
                break;
            }
        }
    }
    Ok(())
}

/// Try one spaced placement: the footprint must sit entirely inside the
/// free pool (which excludes every placed ship and its buffer) and the
/// board must accept it. Returns the footprint on success.
fn spaced_fit(
    rules: &Rules,
    free: &[Coord],
    board: &mut Board,
    origin: Coord,
    id: ShipId,
    len: usize,
    orientation: Orientation,
) -> Option<Vec<Coord>> {
    let cells = footprint(rules, origin, len, orientation)?;
    if !cells.iter().all(|c| free.contains(c)) {
        return None;
    }
    board.place_ship(origin, id, orientation).ok()?;
    Some(cells)
}

/// Drop a placed footprint and its orthogonal neighbours from the pool.
fn retire_with_buffer(rules: &Rules, free: &mut Vec<Coord>, cells: &[Coord]) {
    for &at in cells {
        retire(free, at);
        if at.row > 0 {
            retire(free, Coord::new(at.row - 1, at.col));
        }
        if at.col > 0 {
            retire(free, Coord::new(at.row, at.col - 1));
        }
        if at.row + 1 < rules.rows() {
            retire(free, Coord::new(at.row + 1, at.col));
        }
        if at.col + 1 < rules.cols() {
            retire(free, Coord::new(at.row, at.col + 1));
        }
    }
}
