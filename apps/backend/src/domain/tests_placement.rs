//! Deployment validator unit tests.

use crate::domain::placement::validate_placement;
use crate::domain::ship::{Orientation, ShipType};
use crate::domain::test_fixtures::{loc, row_fleet, ship};
use crate::errors::domain::{DomainError, ValidationKind};

#[test]
fn accepts_a_clean_placement() {
    let existing = vec![ship(1, 1, ShipType::Carrier, 0, 0, Orientation::Row)];
    let candidate = ship(1, 1, ShipType::Destroyer, 0, 5, Orientation::Column);
    assert!(validate_placement(&existing, &candidate).is_ok());
}

#[test]
fn accepts_touching_but_not_overlapping_ships() {
    // carrier fills (0..=4, 0); destroyer directly below at (0..=1, 1)
    let existing = vec![ship(1, 1, ShipType::Carrier, 0, 0, Orientation::Row)];
    let candidate = ship(1, 1, ShipType::Destroyer, 0, 1, Orientation::Row);
    assert!(validate_placement(&existing, &candidate).is_ok());
}

#[test]
fn rejects_duplicate_ship_type() {
    let existing = vec![ship(1, 1, ShipType::Destroyer, 0, 0, Orientation::Row)];
    let candidate = ship(1, 1, ShipType::Destroyer, 0, 5, Orientation::Row);
    let err = validate_placement(&existing, &candidate).unwrap_err();
    assert!(matches!(
        err,
        DomainError::Validation(ValidationKind::ShipAlreadyDeployed, _)
    ));
}

#[test]
fn rejects_footprint_past_the_grid_edge() {
    // carrier at (7,0) along the row would need cells (7,0)..(11,0)
    let candidate = ship(1, 1, ShipType::Carrier, 7, 0, Orientation::Row);
    let err = validate_placement(&[], &candidate).unwrap_err();
    assert!(matches!(
        err,
        DomainError::Validation(ValidationKind::ShipOutOfGrid, _)
    ));

    // column variant
    let candidate = ship(1, 1, ShipType::Battleship, 0, 7, Orientation::Column);
    let err = validate_placement(&[], &candidate).unwrap_err();
    assert!(matches!(
        err,
        DomainError::Validation(ValidationKind::ShipOutOfGrid, _)
    ));
}

#[test]
fn accepts_placements_that_end_exactly_on_the_edge() {
    let candidate = ship(1, 1, ShipType::Carrier, 5, 0, Orientation::Row);
    assert!(validate_placement(&[], &candidate).is_ok());
    let candidate = ship(1, 1, ShipType::Carrier, 0, 5, Orientation::Column);
    assert!(validate_placement(&[], &candidate).is_ok());
}

#[test]
fn rejects_overlap_and_reports_the_cell() {
    // cruiser occupies (2,2),(3,2),(4,2); battleship crosses it at (3,2)
    let existing = vec![ship(1, 1, ShipType::Cruiser, 2, 2, Orientation::Row)];
    let candidate = ship(1, 1, ShipType::Battleship, 3, 0, Orientation::Column);
    let err = validate_placement(&existing, &candidate).unwrap_err();
    match err {
        DomainError::Validation(ValidationKind::ShipOverlap { at }, _) => {
            assert_eq!(at, loc(3, 2));
        }
        other => panic!("expected ShipOverlap, got {other:?}"),
    }
}

#[test]
fn overlap_is_checked_against_every_deployed_ship() {
    let existing = row_fleet(1, 1);
    // crosses all five row ships along column 0
    let candidate = ship(1, 2, ShipType::Carrier, 0, 0, Orientation::Column);
    let err = validate_placement(&existing, &candidate).unwrap_err();
    assert!(matches!(
        err,
        DomainError::Validation(ValidationKind::ShipOverlap { .. }, _)
    ));
}

#[test]
fn type_check_runs_before_grid_check() {
    // same type AND out of grid: the duplicate wins
    let existing = vec![ship(1, 1, ShipType::Carrier, 0, 0, Orientation::Row)];
    let candidate = ship(1, 1, ShipType::Carrier, 7, 0, Orientation::Row);
    let err = validate_placement(&existing, &candidate).unwrap_err();
    assert!(matches!(
        err,
        DomainError::Validation(ValidationKind::ShipAlreadyDeployed, _)
    ));
}
