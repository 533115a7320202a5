use broadside::{ConfigError, Coord, Rules};

#[test]
fn dimensions_are_bounded() {
    assert_eq!(
        Rules::new(0, 5).unwrap_err(),
        ConfigError::BadDimensions { rows: 0, cols: 5 }
    );
    assert_eq!(
        Rules::new(5, 11).unwrap_err(),
        ConfigError::BadDimensions { rows: 5, cols: 11 }
    );
    assert!(Rules::new(1, 1).is_ok());
    assert!(Rules::new(10, 10).is_ok());
}

#[test]
fn add_ship_rejects_bad_lengths() {
    let mut rules = Rules::new(3, 3).unwrap();
    assert_eq!(rules.add_ship(0, 'A', "Raft").unwrap_err(), ConfigError::BadLength(0));
    assert_eq!(
        rules.add_ship(4, 'A', "Liner").unwrap_err(),
        ConfigError::LengthWontFit(4)
    );
    // a ship as long as one dimension is fine
    rules.add_ship(3, 'A', "Cruiser").unwrap();
}

#[test]
fn add_ship_rejects_bad_symbols() {
    let mut rules = Rules::new(10, 10).unwrap();
    for reserved in ['.', 'X', 'o', '#'] {
        assert_eq!(
            rules.add_ship(2, reserved, "Boat").unwrap_err(),
            ConfigError::ReservedSymbol(reserved)
        );
    }
    assert_eq!(
        rules.add_ship(2, ' ', "Boat").unwrap_err(),
        ConfigError::UnprintableSymbol(' ')
    );
    assert_eq!(
        rules.add_ship(2, '\n', "Boat").unwrap_err(),
        ConfigError::UnprintableSymbol('\n')
    );
    rules.add_ship(2, 'B', "Boat").unwrap();
    assert_eq!(
        rules.add_ship(3, 'B', "Barge").unwrap_err(),
        ConfigError::DuplicateSymbol('B')
    );
}

#[test]
fn add_ship_rejects_fleets_larger_than_the_board() {
    let mut rules = Rules::new(2, 2).unwrap();
    rules.add_ship(2, 'A', "One").unwrap();
    rules.add_ship(2, 'B', "Two").unwrap();
    assert_eq!(
        rules.add_ship(2, 'C', "Three").unwrap_err(),
        ConfigError::BoardTooSmall
    );
    // the rejected ship was not applied
    assert_eq!(rules.ship_count(), 2);
}

#[test]
fn classic_fleet_on_the_full_board() {
    let rules = Rules::classic(10, 10).unwrap();
    assert_eq!(rules.ship_count(), 5);
    let total: usize = rules.ships().iter().map(|s| s.length()).sum();
    assert_eq!(total, 17);
    assert_eq!(rules.ship(0).unwrap().name(), "Carrier");
    assert_eq!(rules.ship(4).unwrap().symbol(), 'D');
    assert!(rules.ship(5).is_none());

    // the classic fleet cannot be declared on a tiny board
    assert!(Rules::classic(2, 2).is_err());
}

#[test]
fn coordinate_bounds() {
    let rules = Rules::new(10, 10).unwrap();
    assert!(rules.contains(Coord::new(0, 0)));
    assert!(rules.contains(Coord::new(9, 9)));
    assert!(!rules.contains(Coord::new(10, 0)));
    assert!(!rules.contains(Coord::new(0, 10)));
}
