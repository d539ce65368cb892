//! Battle lifecycle service: pairing, lookup, reporting views, deletion.

use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::battle::{Battle, BattleId, PlayerId};
use crate::domain::fleet::Fleet;
use crate::domain::player_view::{BattleView, FleetView, PlayerBattleView};
use crate::error::AppError;
use crate::errors::domain::{DomainError, ValidationKind};
use crate::repos::battles::NewBattle;
use crate::state::AppState;

pub struct BattleService {
    state: Arc<AppState>,
}

impl BattleService {
    pub fn new(state: Arc<AppState>) -> Self {
        Self { state }
    }

    /// Pair two existing, distinct players into a new battle.
    ///
    /// The battle starts in `Deployment` phase with an undeployed fleet per
    /// player and the turn on the first player.
    pub async fn create(
        &self,
        player_a: PlayerId,
        player_b: PlayerId,
    ) -> Result<Battle, AppError> {
        debug!(player_a, player_b, "Creating battle");

        if player_a == player_b {
            return Err(DomainError::validation(
                ValidationKind::SamePlayer,
                "A battle needs two distinct players",
            )
            .into());
        }
        self.state.players.get_by_id(player_a).await?;
        self.state.players.get_by_id(player_b).await?;

        let battle = self
            .state
            .battles
            .create(NewBattle { player_a, player_b })
            .await?;
        self.state
            .fleets
            .save(Fleet::new(battle.id, player_a))
            .await?;
        self.state
            .fleets
            .save(Fleet::new(battle.id, player_b))
            .await?;

        info!(battle_id = battle.id, player_a, player_b, "Battle created");
        Ok(battle)
    }

    pub async fn get(&self, battle_id: BattleId) -> Result<Battle, AppError> {
        Ok(self.state.battles.get_by_id(battle_id).await?)
    }

    pub async fn list(&self) -> Result<Vec<Battle>, AppError> {
        Ok(self.state.battles.get_all().await?)
    }

    /// Delete a battle and cascade its fleets and ships.
    pub async fn delete(&self, battle_id: BattleId) -> Result<(), AppError> {
        let _guard = self.state.battle_locks.acquire(battle_id).await;

        // Existence check first so deleting an unknown battle reports 404
        // semantics rather than silently succeeding.
        self.state.battles.get_by_id(battle_id).await?;

        self.state.ships.delete_by_battle(battle_id).await?;
        self.state.fleets.delete_by_battle(battle_id).await?;
        self.state.battles.delete_by_id(battle_id).await?;
        self.state.battle_locks.discard(battle_id);

        info!(battle_id, "Battle deleted with fleets and ships");
        Ok(())
    }

    /// Complete reporting view: both fleets with full ship detail.
    pub async fn view(&self, battle_id: BattleId) -> Result<BattleView, AppError> {
        let battle = self.state.battles.get_by_id(battle_id).await?;
        let mut fleets = Vec::new();
        for fleet in self.state.fleets.get_all_of_battle(battle_id).await? {
            let ships = self
                .state
                .ships
                .get_all_in_fleet(battle_id, fleet.player_id)
                .await?;
            fleets.push(FleetView::full(&fleet, &ships));
        }
        Ok(BattleView::new(&battle, fleets))
    }

    /// One player's perspective: own fleet in full, opponent masked to
    /// type and status.
    pub async fn player_view(
        &self,
        battle_id: BattleId,
        player_id: PlayerId,
    ) -> Result<PlayerBattleView, AppError> {
        let battle = self.state.battles.get_by_id(battle_id).await?;
        let own_fleet = self
            .state
            .fleets
            .get_by_battle_and_player(battle_id, player_id)
            .await?;
        let own_ships = self
            .state
            .ships
            .get_all_in_fleet(battle_id, player_id)
            .await?;
        let opponent_fleet = self.state.fleets.get_opponent(battle_id, player_id).await?;
        let opponent_ships = self
            .state
            .ships
            .get_all_in_fleet(battle_id, opponent_fleet.player_id)
            .await?;

        Ok(PlayerBattleView::new(
            &battle,
            player_id,
            FleetView::full(&own_fleet, &own_ships),
            FleetView::masked(&opponent_fleet, &opponent_ships),
        ))
    }
}
