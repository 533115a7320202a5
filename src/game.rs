//! Alternating turn driver: placement, attack resolution, narration.

use std::io::{self, BufRead};
use std::sync::Arc;

use log::info;
use rand::rngs::SmallRng;

use crate::board::Board;
use crate::common::ShotResult;
use crate::config::Rules;
use crate::player::Player;

/// Which side won a finished match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Winner {
    First,
    Second,
}

/// Play a full match between two players on fresh boards. Returns `None`
/// when either side fails to place its fleet.
pub fn play(
    rules: &Arc<Rules>,
    first: &mut dyn Player,
    second: &mut dyn Player,
    rng: &mut SmallRng,
    pause: bool,
) -> Option<Winner> {
    let mut first_board = Board::new(rules.clone());
    let mut second_board = Board::new(rules.clone());

    if first.is_human() {
        println!("{} must place {} ships.", first.name(), rules.ship_count());
    }
    if first.place_ships(rng, &mut first_board).is_err() {
        info!("{} failed to place its fleet", first.name());
        return None;
    }
    if second.is_human() {
        println!("{} must place {} ships.", second.name(), rules.ship_count());
    }
    if second.place_ships(rng, &mut second_board).is_err() {
        info!("{} failed to place its fleet", second.name());
        return None;
    }

    loop {
        if half_turn(rules, first, second, &mut second_board, rng, pause) {
            return Some(Winner::First);
        }
        if half_turn(rules, second, first, &mut first_board, rng, pause) {
            return Some(Winner::Second);
        }
    }
}

/// One attacker move against the defender's board. True when the
/// defender's fleet is wiped out.
fn half_turn(
    rules: &Rules,
    attacker: &mut dyn Player,
    defender: &mut dyn Player,
    defense: &mut Board,
    rng: &mut SmallRng,
    pause: bool,
) -> bool {
    println!("{}'s turn.  Board for {}:", attacker.name(), defender.name());
    println!("{}", defense.render(attacker.is_human()));

    let at = attacker.recommend_attack(rng);
    match defense.attack(at) {
        Err(_) => {
            attacker.record_attack_result(at, None);
            println!("{} wasted a shot at {}.", attacker.name(), at);
        }
        Ok(result) => {
            // the attack is fully resolved before anyone hears about it
            attacker.record_attack_result(at, Some(result));
            defender.record_attack_by_opponent(at);
            match result {
                ShotResult::Miss => println!(
                    "{} attacked {} and missed, resulting in:",
                    attacker.name(),
                    at
                ),
                ShotResult::Hit => println!(
                    "{} attacked {} and hit something, resulting in:",
                    attacker.name(),
                    at
                ),
                ShotResult::Sunk(id) => println!(
                    "{} attacked {} and destroyed the {}, resulting in:",
                    attacker.name(),
                    at,
                    rules.ship(id).map_or("ship", |s| s.name())
                ),
            }
            if defense.all_ships_destroyed() {
                println!("{}", defense.render(false));
                println!("{} wins!", attacker.name());
                return true;
            }
            println!("{}", defense.render(attacker.is_human()));
        }
    }
    if pause {
        wait_for_enter();
    }
    false
}

fn wait_for_enter() {
    println!("Press enter to continue: ");
    let mut line = String::new();
    let _ = io::stdin().lock().read_line(&mut line);
}
