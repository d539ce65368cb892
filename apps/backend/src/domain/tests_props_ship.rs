//! Property tests for ship structure and placement.
//!
//! Properties tested:
//! - Ship status is a pure function of hit count vs footprint size
//! - A validated placement keeps its whole footprint on the grid
//! - The validator accepts a placement iff it is in-grid, type-fresh and
//!   non-overlapping

use proptest::prelude::*;

use crate::domain::location::GridLocation;
use crate::domain::placement::validate_placement;
use crate::domain::rules::{in_grid, BOARD_SIZE};
use crate::domain::ship::{Orientation, Ship, ShipStatus, ShipType};
use crate::domain::test_prelude;

fn ship_type() -> impl Strategy<Value = ShipType> {
    prop::sample::select(ShipType::ALL.to_vec())
}

fn orientation() -> impl Strategy<Value = Orientation> {
    prop_oneof![Just(Orientation::Row), Just(Orientation::Column)]
}

fn any_ship() -> impl Strategy<Value = Ship> {
    (ship_type(), orientation(), 0..BOARD_SIZE, 0..BOARD_SIZE).prop_map(
        |(t, o, x, y)| Ship::new(1, 1, t, GridLocation::new(x, y).unwrap(), o),
    )
}

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    /// Property: status is exactly determined by hits vs size, per type
    #[test]
    fn prop_status_is_pure_function_of_hits(ship in any_ship()) {
        let size = ship.ship_type.size();
        let in_grid_cells = ship.footprint();
        prop_assume!(in_grid_cells.len() == size);

        let mut current = ship;
        for (i, cell) in in_grid_cells.iter().enumerate() {
            current = current.with_hit(*cell);
            let hits = i + 1;
            let expected = if hits == size {
                ShipStatus::Destroyed
            } else {
                ShipStatus::Damaged
            };
            prop_assert_eq!(current.status(), expected);
            prop_assert_eq!(current.hit_count(), hits);
        }
    }

    /// Property: the validator accepts exactly the in-grid placements on an
    /// empty fleet
    #[test]
    fn prop_empty_fleet_accepts_iff_in_grid(ship in any_ship()) {
        let fits = ship.cells().iter().all(|&(x, y)| in_grid(x, y));
        prop_assert_eq!(validate_placement(&[], &ship).is_ok(), fits);
    }

    /// Property: a second ship of a deployed type is always rejected
    #[test]
    fn prop_duplicate_type_rejected(
        a in any_ship(),
        o in orientation(),
        x in 0..BOARD_SIZE,
        y in 0..BOARD_SIZE,
    ) {
        prop_assume!(validate_placement(&[], &a).is_ok());
        let b = Ship::new(1, 1, a.ship_type, GridLocation::new(x, y).unwrap(), o);
        prop_assert!(validate_placement(&[a], &b).is_err());
    }

    /// Property: acceptance against one deployed ship means no shared cell
    #[test]
    fn prop_accepted_placements_never_share_cells(a in any_ship(), b in any_ship()) {
        prop_assume!(validate_placement(&[], &a).is_ok());
        prop_assume!(a.ship_type != b.ship_type);
        if validate_placement(&[a.clone()], &b).is_ok() {
            let a_cells = a.cells();
            prop_assert!(b.cells().iter().all(|c| !a_cells.contains(c)));
        }
    }
}
