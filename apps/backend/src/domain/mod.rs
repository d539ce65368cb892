//! Domain layer: pure battle rules, no I/O and no store access.

pub mod battle;
pub mod combat;
pub mod fleet;
pub mod location;
pub mod placement;
pub mod player;
pub mod player_view;
pub mod rules;
pub mod ship;

#[cfg(test)]
mod test_fixtures;
#[cfg(test)]
mod test_prelude;
#[cfg(test)]
mod tests_placement;
#[cfg(test)]
mod tests_props_ship;

// Re-exports for ergonomics
pub use battle::{Battle, BattleId, Phase, PlayerId};
pub use combat::{assess_shot, ShotReport, ShotResult};
pub use fleet::{aggregate_status, Fleet, FleetStatus};
pub use location::GridLocation;
pub use placement::validate_placement;
pub use player::Player;
pub use ship::{Orientation, Ship, ShipStatus, ShipType};
