//! Terminal-driven human opponent: stdin prompts for ship placement and
//! attack coordinates.

use std::io::{self, Write};
use std::sync::Arc;

use rand::rngs::SmallRng;

use crate::board::Board;
use crate::common::{BoardError, Coord, Orientation};
use crate::config::Rules;
use crate::player::Player;

pub struct CliPlayer {
    name: String,
    rules: Arc<Rules>,
}

impl CliPlayer {
    pub fn new(name: &str, rules: Arc<Rules>) -> Self {
        CliPlayer {
            name: name.to_string(),
            rules,
        }
    }
}

fn prompt(text: &str) -> String {
    print!("{}", text);
    let _ = io::stdout().flush();
    let mut line = String::new();
    if io::stdin().read_line(&mut line).is_err() {
        return String::new();
    }
    line.trim().to_string()
}

fn parse_two_ints(line: &str) -> Option<(usize, usize)> {
    let mut parts = line.split_whitespace();
    let row = parts.next()?.parse().ok()?;
    let col = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some((row, col))
}

impl Player for CliPlayer {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_human(&self) -> bool {
        true
    }

    fn place_ships(&mut self, _rng: &mut SmallRng, board: &mut Board) -> Result<(), BoardError> {
        // refuse impossible fleets before prompting
        let mut total = 0;
        for ship in self.rules.ships() {
            total += ship.length();
            if ship.length() >= self.rules.rows() && ship.length() >= self.rules.cols() {
                println!("It is not possible for the current ships to be placed on this board.");
                return Err(BoardError::FleetWontFit);
            }
        }
        if total > self.rules.area() {
            println!("It is not possible for the current ships to be placed on this board.");
            return Err(BoardError::FleetWontFit);
        }

        for id in 0..self.rules.ship_count() {
            let (name, length) = {
                let ship = self.rules.ship(id).ok_or(BoardError::InvalidShip)?;
                (ship.name().to_string(), ship.length())
            };
            println!("{}", board.render(false));
            let orientation = loop {
                let line = prompt(&format!(
                    "Enter h or v for direction of {} (length {}): ",
                    name, length
                ));
                match line.as_str() {
                    "h" => break Orientation::Horizontal,
                    "v" => break Orientation::Vertical,
                    _ => println!("Direction must be h or v."),
                }
            };
            loop {
                let edge = match orientation {
                    Orientation::Horizontal => "leftmost",
                    Orientation::Vertical => "topmost",
                };
                let line = prompt(&format!(
                    "Enter row and column of {} cell (e.g., 3 5): ",
                    edge
                ));
                match parse_two_ints(&line) {
                    None => println!("You must enter two integers."),
                    Some((row, col)) => {
                        if board
                            .place_ship(Coord::new(row, col), id, orientation)
                            .is_ok()
                        {
                            break;
                        }
                        println!("The ship can not be placed there.");
                    }
                }
            }
        }
        Ok(())
    }

    fn recommend_attack(&mut self, _rng: &mut SmallRng) -> Coord {
        loop {
            let line = prompt("Enter the row and column to attack (e.g., 3 5): ");
            match parse_two_ints(&line) {
                Some((row, col)) => return Coord::new(row, col),
                None => println!("You must enter two integers."),
            }
        }
    }
}
