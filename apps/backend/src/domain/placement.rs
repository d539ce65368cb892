//! Deployment validation: grid bounds, one ship per type, no overlap.

use crate::domain::rules::in_grid;
use crate::domain::ship::Ship;
use crate::errors::domain::{DomainError, ValidationKind};

/// Validate a candidate placement against the fleet's already-deployed ships.
///
/// Pure check, no side effects. Rejections, in order:
/// - a ship of the candidate's type is already deployed;
/// - any footprint cell falls outside the grid;
/// - the footprint intersects an existing ship (the error carries the first
///   intersecting cell found; any intersection rejects, so order is
///   immaterial).
pub fn validate_placement(existing: &[Ship], candidate: &Ship) -> Result<(), DomainError> {
    if existing.iter().any(|s| s.ship_type == candidate.ship_type) {
        return Err(DomainError::validation(
            ValidationKind::ShipAlreadyDeployed,
            format!(
                "fleet of player {} already has a {:?}",
                candidate.player_id, candidate.ship_type
            ),
        ));
    }

    let cells = candidate.cells();
    if let Some(&(x, y)) = cells.iter().find(|&&(x, y)| !in_grid(x, y)) {
        return Err(DomainError::validation(
            ValidationKind::ShipOutOfGrid,
            format!(
                "{:?} at {} extends to ({x}, {y}), outside the grid",
                candidate.ship_type, candidate.origin
            ),
        ));
    }

    // In-grid from here on, so footprints compare as grid locations.
    let footprint = candidate.footprint();
    for ship in existing {
        let other = ship.footprint();
        if let Some(&at) = footprint.iter().find(|c| other.contains(c)) {
            return Err(DomainError::validation(
                ValidationKind::ShipOverlap { at },
                format!(
                    "{:?} would overlap {:?} at {at}",
                    candidate.ship_type, ship.ship_type
                ),
            ));
        }
    }

    Ok(())
}
