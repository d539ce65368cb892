//! Storage ports consumed by the engine.
//!
//! Services talk to these traits only; the adapters module provides the
//! in-memory implementations. Every method surfaces failures as
//! `DomainError` synchronously; nothing is retried here.

pub mod battles;
pub mod fleets;
pub mod players;
pub mod ships;

pub use battles::{BattleStore, NewBattle};
pub use fleets::FleetStore;
pub use players::{NewPlayer, PlayerStore};
pub use ships::ShipStore;
