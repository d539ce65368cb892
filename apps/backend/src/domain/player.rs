//! Registered players. Battles pair two existing players.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::domain::battle::PlayerId;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub created_at: OffsetDateTime,
}
