//! Board state machine: placement, the blocking overlay, attack resolution
//! and rendering.

use core::fmt;
use std::sync::Arc;

use rand::Rng;

use crate::common::{BoardError, Coord, Orientation, ShipId, ShotResult};
use crate::config::Rules;

/// Per-coordinate state.
///
/// `destroyed` is only meaningful while a ship occupies the cell; vacant
/// cells keep it set so the all-destroyed scan can skip them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    ship: Option<ShipId>,
    attacked: bool,
    hit: bool,
    destroyed: bool,
    blocked: bool,
}

impl Cell {
    const VACANT: Cell = Cell {
        ship: None,
        attacked: false,
        hit: false,
        destroyed: true,
        blocked: false,
    };

    pub fn ship(&self) -> Option<ShipId> {
        self.ship
    }

    pub fn attacked(&self) -> bool {
        self.attacked
    }

    pub fn hit(&self) -> bool {
        self.hit
    }

    pub fn destroyed(&self) -> bool {
        self.destroyed
    }

    pub fn blocked(&self) -> bool {
        self.blocked
    }

    fn open(&self) -> bool {
        self.ship.is_none() && !self.blocked
    }
}

/// One side's grid. Owns its cells; the rules are shared and read-only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rules: Arc<Rules>,
    cells: Vec<Cell>,
    placed: Vec<bool>,
}

impl Board {
    /// Create an empty board sized to the rules.
    pub fn new(rules: Arc<Rules>) -> Self {
        let cells = vec![Cell::VACANT; rules.area()];
        let placed = vec![false; rules.ship_count()];
        Board {
            rules,
            cells,
            placed,
        }
    }

    pub fn rules(&self) -> &Arc<Rules> {
        &self.rules
    }

    /// Read a cell, or `None` off the board.
    pub fn cell(&self, at: Coord) -> Option<&Cell> {
        if !self.rules.contains(at) {
            return None;
        }
        Some(&self.cells[self.idx(at)])
    }

    /// Whether the ship with this id is currently on the board.
    pub fn is_placed(&self, id: ShipId) -> bool {
        self.placed.get(id).copied().unwrap_or(false)
    }

    fn idx(&self, at: Coord) -> usize {
        at.row * self.rules.cols() + at.col
    }

    /// Reset every cell and every placed flag.
    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            *cell = Cell::VACANT;
        }
        for flag in &mut self.placed {
            *flag = false;
        }
    }

    /// Mark half the board blocked, sampling distinct cells uniformly.
    /// Blocked cells refuse ship placement until `unblock` runs.
    pub fn block<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let quota = self.rules.area() / 2;
        let mut marked = 0;
        while marked < quota {
            let at = self.rules.random_coord(rng);
            let i = self.idx(at);
            if !self.cells[i].blocked {
                self.cells[i].blocked = true;
                marked += 1;
            }
        }
    }

    /// Remove the blocked marker everywhere. Idempotent.
    pub fn unblock(&mut self) {
        for cell in &mut self.cells {
            cell.blocked = false;
        }
    }

    /// Footprint cells for a ship at `origin`, or `None` when it leaves the
    /// grid or the id is unknown.
    fn footprint(&self, origin: Coord, id: ShipId, orientation: Orientation) -> Option<Vec<Coord>> {
        let len = self.rules.ship(id)?.length();
        if !self.rules.contains(origin) {
            return None;
        }
        let (dr, dc) = match orientation {
            Orientation::Vertical => (1, 0),
            Orientation::Horizontal => (0, 1),
        };
        let mut cells = Vec::with_capacity(len);
        for k in 0..len {
            let at = Coord::new(origin.row + dr * k, origin.col + dc * k);
            if !self.rules.contains(at) {
                return None;
            }
            cells.push(at);
        }
        Some(cells)
    }

    /// Place a ship. Validation completes before any cell is written, so a
    /// failed placement leaves the board untouched.
    pub fn place_ship(
        &mut self,
        origin: Coord,
        id: ShipId,
        orientation: Orientation,
    ) -> Result<(), BoardError> {
        if id >= self.rules.ship_count() {
            return Err(BoardError::InvalidShip);
        }
        if self.placed[id] {
            return Err(BoardError::ShipAlreadyPlaced);
        }
        let footprint = self
            .footprint(origin, id, orientation)
            .ok_or(BoardError::OutOfBounds)?;
        if footprint.iter().any(|&at| !self.cells[self.idx(at)].open()) {
            return Err(BoardError::CellUnavailable);
        }
        for at in footprint {
            let i = self.idx(at);
            self.cells[i].ship = Some(id);
            self.cells[i].destroyed = false;
        }
        self.placed[id] = true;
        Ok(())
    }

    /// Remove a ship: the exact inverse of `place_ship` for the same
    /// arguments. Fails unless every footprint cell carries this ship.
    pub fn unplace_ship(
        &mut self,
        origin: Coord,
        id: ShipId,
        orientation: Orientation,
    ) -> Result<(), BoardError> {
        if id >= self.rules.ship_count() {
            return Err(BoardError::InvalidShip);
        }
        let footprint = self
            .footprint(origin, id, orientation)
            .ok_or(BoardError::OutOfBounds)?;
        if footprint
            .iter()
            .any(|&at| self.cells[self.idx(at)].ship != Some(id))
        {
            return Err(BoardError::MismatchedShip);
        }
        for at in footprint {
            let i = self.idx(at);
            self.cells[i].ship = None;
            self.cells[i].destroyed = true;
        }
        self.placed[id] = false;
        Ok(())
    }

    /// Resolve an attack. Rejected attacks (off-board or repeated) mutate
    /// nothing. The destruction scan completes before the result is
    /// returned.
    pub fn attack(&mut self, at: Coord) -> Result<ShotResult, BoardError> {
        if !self.rules.contains(at) {
            return Err(BoardError::OutOfBounds);
        }
        let i = self.idx(at);
        if self.cells[i].attacked {
            return Err(BoardError::AlreadyAttacked);
        }
        self.cells[i].attacked = true;
        let Some(id) = self.cells[i].ship else {
            return Ok(ShotResult::Miss);
        };
        self.cells[i].hit = true;
        let destroyed = self
            .cells
            .iter()
            .filter(|c| c.ship == Some(id))
            .all(|c| c.hit);
        if destroyed {
            for cell in self.cells.iter_mut().filter(|c| c.ship == Some(id)) {
                cell.destroyed = true;
            }
            Ok(ShotResult::Sunk(id))
        } else {
            Ok(ShotResult::Hit)
        }
    }

    /// True once no cell holds an undestroyed ship. Vacuously true for a
    /// board with no ships.
    pub fn all_ships_destroyed(&self) -> bool {
        self.cells.iter().all(|c| c.ship.is_none() || c.destroyed)
    }

    /// Textual grid with row and column labels. Full mode shows ship
    /// symbols and the blocking overlay; shots-only mode hides everything
    /// except hit and miss markers.
    pub fn render(&self, shots_only: bool) -> String {
        let mut out = String::new();
        out.push_str("  ");
        for col in 0..self.rules.cols() {
            out.push((b'0' + col as u8) as char);
        }
        out.push('\n');
        for row in 0..self.rules.rows() {
            out.push((b'0' + row as u8) as char);
            out.push(' ');
            for col in 0..self.rules.cols() {
                let cell = &self.cells[row * self.rules.cols() + col];
                let ch = if cell.attacked {
                    if cell.hit {
                        'X'
                    } else {
                        'o'
                    }
                } else if shots_only {
                    '.'
                } else if cell.blocked {
                    '#'
                } else {
                    match cell.ship {
                        Some(id) => self.rules.ship(id).map_or('.', |s| s.symbol()),
                        None => '.',
                    }
                };
                out.push(ch);
            }
            out.push('\n');
        }
        out
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(false))
    }
}
