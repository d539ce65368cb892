//! Ship deployment service: placement validation plus the fleet-completion
//! cascade.

use std::sync::Arc;

use time::OffsetDateTime;
use tracing::{debug, info};

use crate::domain::battle::{BattleId, Phase, PlayerId};
use crate::domain::fleet::{self, FleetStatus};
use crate::domain::location::GridLocation;
use crate::domain::placement::validate_placement;
use crate::domain::ship::{Orientation, Ship, ShipType};
use crate::error::AppError;
use crate::errors::domain::{ConflictKind, DomainError};
use crate::state::AppState;

/// A deployment request as handed over by a transport layer.
#[derive(Debug, Clone, Copy)]
pub struct ShipDeployment {
    pub battle_id: BattleId,
    pub player_id: PlayerId,
    pub ship_type: ShipType,
    pub origin: GridLocation,
    pub orientation: Orientation,
}

pub struct DeploymentService {
    state: Arc<AppState>,
}

impl DeploymentService {
    pub fn new(state: Arc<AppState>) -> Self {
        Self { state }
    }

    /// Deploy one ship into the requesting player's fleet.
    ///
    /// On the placement that completes the fleet, the fleet becomes
    /// operational; once both fleets are complete the battle moves to
    /// `Fighting` with the turn on the first player.
    pub async fn deploy_ship(&self, deployment: ShipDeployment) -> Result<Ship, AppError> {
        let ShipDeployment {
            battle_id,
            player_id,
            ship_type,
            origin,
            orientation,
        } = deployment;

        let _guard = self.state.battle_locks.acquire(battle_id).await;
        debug!(battle_id, player_id, ship_type = ?ship_type, origin = %origin, "Deploying ship");

        let mut battle = self.state.battles.get_by_id(battle_id).await?;
        if battle.phase != Phase::Deployment {
            return Err(DomainError::conflict(
                ConflictKind::UnexpectedBattlePhase,
                format!(
                    "Battle {battle_id} is in {:?} phase, deployment is closed",
                    battle.phase
                ),
            )
            .into());
        }

        let mut own_fleet = self
            .state
            .fleets
            .get_by_battle_and_player(battle_id, player_id)
            .await?;

        let existing = self
            .state
            .ships
            .get_all_in_fleet(battle_id, player_id)
            .await?;
        let candidate = Ship::new(battle_id, player_id, ship_type, origin, orientation);
        validate_placement(&existing, &candidate)?;

        let ship = self.state.ships.save(candidate).await?;
        info!(battle_id, player_id, ship_type = ?ship_type, "Ship deployed");

        // Fleet-completion cascade
        let ships_now = self
            .state
            .ships
            .get_all_in_fleet(battle_id, player_id)
            .await?;
        if fleet::has_full_complement(&ships_now) {
            own_fleet.status = FleetStatus::Operational;
            self.state.fleets.save(own_fleet).await?;
            info!(battle_id, player_id, "Fleet fully deployed");

            let all_fleets = self.state.fleets.get_all_of_battle(battle_id).await?;
            if all_fleets
                .iter()
                .all(|f| f.status != FleetStatus::NotDeployed)
            {
                battle.begin_fighting(OffsetDateTime::now_utc())?;
                battle.turn = battle.player_a;
                self.state.battles.save(battle).await?;
                info!(battle_id, "Both fleets deployed, battle moved to fighting");
            }
        }

        Ok(ship)
    }
}
