use std::sync::Arc;

use broadside::{
    place_fleet_backtracking, place_fleet_spaced, Board, BoardError, Coord, Orientation, Rules,
};
use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::SeedableRng;

fn classic_rules() -> Arc<Rules> {
    Arc::new(Rules::classic(10, 10).unwrap())
}

fn orientation(vertical: bool) -> Orientation {
    if vertical {
        Orientation::Vertical
    } else {
        Orientation::Horizontal
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn place_then_unplace_restores_the_board(
        id in 0usize..5,
        row in 0usize..10,
        col in 0usize..10,
        vertical in any::<bool>(),
    ) {
        let mut board = Board::new(classic_rules());
        let snapshot = board.clone();
        let orientation = orientation(vertical);
        if board.place_ship(Coord::new(row, col), id, orientation).is_ok() {
            board.unplace_ship(Coord::new(row, col), id, orientation).unwrap();
            prop_assert_eq!(board, snapshot);
        }
    }

    #[test]
    fn second_attack_is_rejected_and_changes_nothing(
        seed in any::<u64>(),
        row in 0usize..10,
        col in 0usize..10,
    ) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut board = Board::new(classic_rules());
        place_fleet_backtracking(&mut rng, &mut board).unwrap();

        board.attack(Coord::new(row, col)).unwrap();
        let snapshot = board.clone();
        let err = board.attack(Coord::new(row, col)).unwrap_err();
        prop_assert_eq!(err, BoardError::AlreadyAttacked);
        prop_assert_eq!(board, snapshot);
    }

    #[test]
    fn spaced_fleets_never_touch(seed in any::<u64>()) {
        let rules = classic_rules();
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut board = Board::new(rules.clone());
        place_fleet_spaced(&mut rng, &mut board).unwrap();

        for row in 0..rules.rows() {
            for col in 0..rules.cols() {
                let at = Coord::new(row, col);
                let Some(id) = board.cell(at).unwrap().ship() else { continue };
                let right = Coord::new(row, col + 1);
                let down = Coord::new(row + 1, col);
                for n in [right, down] {
                    if let Some(cell) = board.cell(n) {
                        if let Some(other) = cell.ship() {
                            prop_assert_eq!(other, id);
                        }
                    }
                }
            }
        }
    }
}
