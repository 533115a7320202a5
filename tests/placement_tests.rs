use std::sync::Arc;

use broadside::{
    place_fleet_backtracking, place_fleet_spaced, Board, BoardError, Coord, Rules,
};
use rand::rngs::SmallRng;
use rand::SeedableRng;

fn classic_rules() -> Arc<Rules> {
    Arc::new(Rules::classic(10, 10).unwrap())
}

fn ship_cells(board: &Board) -> Vec<(Coord, usize)> {
    let rules = board.rules().clone();
    let mut cells = Vec::new();
    for row in 0..rules.rows() {
        for col in 0..rules.cols() {
            let at = Coord::new(row, col);
            if let Some(id) = board.cell(at).unwrap().ship() {
                cells.push((at, id));
            }
        }
    }
    cells
}

#[test]
fn backtracking_places_the_whole_fleet_and_removes_the_overlay() {
    let rules = classic_rules();
    for seed in 0..10 {
        let mut board = Board::new(rules.clone());
        let mut rng = SmallRng::seed_from_u64(seed);
        place_fleet_backtracking(&mut rng, &mut board).unwrap();

        for id in 0..rules.ship_count() {
            assert!(board.is_placed(id), "seed {}: ship {} missing", seed, id);
        }
        assert_eq!(ship_cells(&board).len(), 17);
        for row in 0..10 {
            for col in 0..10 {
                assert!(!board.cell(Coord::new(row, col)).unwrap().blocked());
            }
        }
    }
}

#[test]
fn spaced_placement_keeps_ships_apart() {
    let rules = classic_rules();
    for seed in 0..10 {
        let mut board = Board::new(rules.clone());
        let mut rng = SmallRng::seed_from_u64(seed);
        place_fleet_spaced(&mut rng, &mut board).unwrap();

        let cells = ship_cells(&board);
        assert_eq!(cells.len(), 17);
        for &(at, id) in &cells {
            let mut neighbours = Vec::new();
            if at.row > 0 {
                neighbours.push(Coord::new(at.row - 1, at.col));
            }
            if at.col > 0 {
                neighbours.push(Coord::new(at.row, at.col - 1));
            }
            neighbours.push(Coord::new(at.row + 1, at.col));
            neighbours.push(Coord::new(at.row, at.col + 1));
            for n in neighbours {
                if let Some(cell) = board.cell(n) {
                    if let Some(other) = cell.ship() {
                        assert_eq!(
                            other, id,
                            "seed {}: ships {} and {} touch at {}",
                            seed, id, other, n
                        );
                    }
                }
            }
        }
    }
}

#[test]
fn a_ship_spanning_both_dimensions_is_rejected_up_front() {
    let rules = Arc::new({
        let mut rules = Rules::new(5, 5).unwrap();
        rules.add_ship(5, 'L', "Liner").unwrap();
        rules
    });
    let mut rng = SmallRng::seed_from_u64(1);

    let mut board = Board::new(rules.clone());
    assert_eq!(
        place_fleet_backtracking(&mut rng, &mut board).unwrap_err(),
        BoardError::FleetWontFit
    );
    assert_eq!(
        place_fleet_spaced(&mut rng, &mut board).unwrap_err(),
        BoardError::FleetWontFit
    );
    // nothing was touched
    assert_eq!(board, Board::new(rules));
}

#[test]
fn backtracking_rejects_fleets_beyond_the_unblocked_half() {
    // nine ship cells on a sixteen-cell board: fine without the overlay,
    // too many with half the board blocked
    let rules = Arc::new({
        let mut rules = Rules::new(4, 4).unwrap();
        rules.add_ship(3, 'A', "One").unwrap();
        rules.add_ship(3, 'B', "Two").unwrap();
        rules.add_ship(3, 'C', "Three").unwrap();
        rules
    });
    let mut board = Board::new(rules.clone());
    let mut rng = SmallRng::seed_from_u64(2);
    assert_eq!(
        place_fleet_backtracking(&mut rng, &mut board).unwrap_err(),
        BoardError::FleetWontFit
    );
    assert_eq!(board, Board::new(rules));
}
