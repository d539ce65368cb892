//! Player storage port.

use async_trait::async_trait;

use crate::domain::battle::PlayerId;
use crate::domain::player::Player;
use crate::errors::domain::DomainError;

/// Creation payload; the store allocates the id.
#[derive(Debug, Clone)]
pub struct NewPlayer {
    pub name: String,
}

#[async_trait]
pub trait PlayerStore: Send + Sync {
    /// Fails with `ConflictKind::UniqueName` when the name is taken.
    async fn create(&self, new: NewPlayer) -> Result<Player, DomainError>;

    /// Fails with `NotFoundKind::Player` when the id is unknown.
    async fn get_by_id(&self, player_id: PlayerId) -> Result<Player, DomainError>;

    async fn find_by_name(&self, name: &str) -> Result<Option<Player>, DomainError>;

    async fn get_all(&self) -> Result<Vec<Player>, DomainError>;
}
