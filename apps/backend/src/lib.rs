#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod adapters;
pub mod config;
pub mod domain;
pub mod error;
pub mod errors;
pub mod infra;
pub mod repos;
pub mod services;
pub mod state;
pub mod telemetry;

// Re-exports for public API
pub use domain::{
    Battle, BattleId, Fleet, FleetStatus, GridLocation, Orientation, Phase, Player, PlayerId,
    Ship, ShipStatus, ShipType, ShotReport, ShotResult,
};
pub use error::AppError;
pub use errors::ErrorCode;
pub use services::{
    BattleService, CombatService, DeploymentService, PlayerService, Shot, ShipDeployment,
};
pub use state::AppState;

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    armada_test_support::logging::init();
}
