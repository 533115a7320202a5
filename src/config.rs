//! Game rules: board dimensions and the fleet manifest.
//!
//! A `Rules` value is built once, validated ship by ship, and then shared
//! read-only (behind an `Arc`) by every board and strategy in the game.

use core::fmt;

use rand::Rng;

use crate::common::{Coord, ShipId};

/// Largest supported board height.
pub const MAX_ROWS: usize = 10;
/// Largest supported board width.
pub const MAX_COLS: usize = 10;

/// Display characters the renderer reserves for cell states.
const RESERVED_SYMBOLS: [char; 4] = ['.', 'X', 'o', '#'];

/// One entry of the fleet manifest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShipSpec {
    length: usize,
    symbol: char,
    name: String,
}

impl ShipSpec {
    pub fn length(&self) -> usize {
        self.length
    }

    pub fn symbol(&self) -> char {
        self.symbol
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Errors reported while building the rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// Dimensions outside `1..=MAX_ROWS` / `1..=MAX_COLS`.
    BadDimensions { rows: usize, cols: usize },
    /// Ship length below one.
    BadLength(usize),
    /// Ship longer than both board dimensions.
    LengthWontFit(usize),
    /// Symbol is not printable ASCII.
    UnprintableSymbol(char),
    /// Symbol is reserved for the renderer.
    ReservedSymbol(char),
    /// Symbol already used by another ship.
    DuplicateSymbol(char),
    /// Cumulative fleet length exceeds the board area.
    BoardTooSmall,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::BadDimensions { rows, cols } => write!(
                f,
                "board must be between 1x1 and {}x{}, got {}x{}",
                MAX_ROWS, MAX_COLS, rows, cols
            ),
            ConfigError::BadLength(len) => {
                write!(f, "bad ship length {}; it must be >= 1", len)
            }
            ConfigError::LengthWontFit(len) => {
                write!(f, "bad ship length {}; it won't fit on the board", len)
            }
            ConfigError::UnprintableSymbol(sym) => write!(
                f,
                "unprintable character {:?} must not be used as a ship symbol",
                sym
            ),
            ConfigError::ReservedSymbol(sym) => {
                write!(f, "character {} must not be used as a ship symbol", sym)
            }
            ConfigError::DuplicateSymbol(sym) => write!(
                f,
                "ship symbol {} must not be used for more than one ship",
                sym
            ),
            ConfigError::BoardTooSmall => {
                write!(f, "board is too small to fit all ships")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Immutable game rules shared by boards and strategies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rules {
    rows: usize,
    cols: usize,
    ships: Vec<ShipSpec>,
}

impl Rules {
    /// Create rules for an empty fleet on a `rows` x `cols` board.
    pub fn new(rows: usize, cols: usize) -> Result<Self, ConfigError> {
        if rows < 1 || rows > MAX_ROWS || cols < 1 || cols > MAX_COLS {
            return Err(ConfigError::BadDimensions { rows, cols });
        }
        Ok(Rules {
            rows,
            cols,
            ships: Vec::new(),
        })
    }

    /// Classic rules: the five-ship fleet on the given dimensions.
    pub fn classic(rows: usize, cols: usize) -> Result<Self, ConfigError> {
        let mut rules = Rules::new(rows, cols)?;
        rules.add_ship(5, 'C', "Carrier")?;
        rules.add_ship(4, 'B', "Battleship")?;
        rules.add_ship(3, 'R', "Cruiser")?;
        rules.add_ship(3, 'S', "Submarine")?;
        rules.add_ship(2, 'D', "Destroyer")?;
        Ok(rules)
    }

    /// Append a ship to the fleet manifest. An invalid ship is rejected and
    /// the manifest left unchanged.
    pub fn add_ship(&mut self, length: usize, symbol: char, name: &str) -> Result<(), ConfigError> {
        if length < 1 {
            return Err(ConfigError::BadLength(length));
        }
        if length > self.rows && length > self.cols {
            return Err(ConfigError::LengthWontFit(length));
        }
        if !symbol.is_ascii_graphic() {
            return Err(ConfigError::UnprintableSymbol(symbol));
        }
        if RESERVED_SYMBOLS.contains(&symbol) {
            return Err(ConfigError::ReservedSymbol(symbol));
        }
        if self.ships.iter().any(|s| s.symbol == symbol) {
            return Err(ConfigError::DuplicateSymbol(symbol));
        }
        let total: usize = self.ships.iter().map(|s| s.length).sum();
        if total + length > self.area() {
            return Err(ConfigError::BoardTooSmall);
        }
        self.ships.push(ShipSpec {
            length,
            symbol,
            name: name.to_string(),
        });
        Ok(())
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn area(&self) -> usize {
        self.rows * self.cols
    }

    /// Number of ships in the fleet manifest.
    pub fn ship_count(&self) -> usize {
        self.ships.len()
    }

    /// The full fleet manifest in id order.
    pub fn ships(&self) -> &[ShipSpec] {
        &self.ships
    }

    /// Look up a ship by id.
    pub fn ship(&self, id: ShipId) -> Option<&ShipSpec> {
        self.ships.get(id)
    }

    /// Whether a coordinate lies on the board.
    pub fn contains(&self, at: Coord) -> bool {
        at.row < self.rows && at.col < self.cols
    }

    /// A uniformly random coordinate on the board.
    pub fn random_coord<R: Rng + ?Sized>(&self, rng: &mut R) -> Coord {
        Coord::new(
            rng.random_range(0..self.rows),
            rng.random_range(0..self.cols),
        )
    }
}
