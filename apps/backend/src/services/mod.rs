//! Use-case orchestrators: coordinate domain rules against the storage
//! ports and expose the public operations.

pub mod battles;
pub mod combat;
pub mod deployment;
pub mod players;

pub use battles::BattleService;
pub use combat::{CombatService, Shot};
pub use deployment::{DeploymentService, ShipDeployment};
pub use players::PlayerService;
