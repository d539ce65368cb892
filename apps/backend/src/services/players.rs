//! Player registry service.

use std::sync::Arc;

use tracing::info;

use crate::domain::battle::PlayerId;
use crate::domain::player::Player;
use crate::error::AppError;
use crate::errors::domain::DomainError;
use crate::repos::players::NewPlayer;
use crate::state::AppState;

pub struct PlayerService {
    state: Arc<AppState>,
}

impl PlayerService {
    pub fn new(state: Arc<AppState>) -> Self {
        Self { state }
    }

    /// Register a player under a unique, non-empty name.
    pub async fn register(&self, name: &str) -> Result<Player, AppError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(DomainError::validation_other("Player name must not be empty").into());
        }
        let player = self
            .state
            .players
            .create(NewPlayer { name: name.into() })
            .await?;
        info!(player_id = player.id, name = %player.name, "Player registered");
        Ok(player)
    }

    pub async fn get(&self, player_id: PlayerId) -> Result<Player, AppError> {
        Ok(self.state.players.get_by_id(player_id).await?)
    }

    pub async fn list(&self) -> Result<Vec<Player>, AppError> {
        Ok(self.state.players.get_all().await?)
    }
}
