//! Shot resolution: the turn-enforcement and hit-resolution state machine.

use std::sync::Arc;

use time::OffsetDateTime;
use tracing::{debug, info};

use crate::domain::battle::{BattleId, Phase, PlayerId};
use crate::domain::combat::{assess_shot, ShotAssessment, ShotReport, ShotResult};
use crate::domain::fleet::{self, FleetStatus};
use crate::domain::location::GridLocation;
use crate::error::AppError;
use crate::errors::domain::{ConflictKind, DomainError};
use crate::state::AppState;

/// A shot request as handed over by a transport layer.
#[derive(Debug, Clone, Copy)]
pub struct Shot {
    pub battle_id: BattleId,
    pub player_id: PlayerId,
    pub target: GridLocation,
}

pub struct CombatService {
    state: Arc<AppState>,
}

impl CombatService {
    pub fn new(state: Arc<AppState>) -> Self {
        Self { state }
    }

    /// Resolve one shot.
    ///
    /// Nothing is persisted until the shot is known to be legal, so a
    /// rejected shot (wrong phase, wrong turn) leaves every record exactly
    /// as it was. The per-battle lock makes the whole read-modify-write
    /// atomic towards concurrent callers.
    pub async fn fire(&self, shot: Shot) -> Result<ShotReport, AppError> {
        let Shot {
            battle_id,
            player_id,
            target,
        } = shot;

        let _guard = self.state.battle_locks.acquire(battle_id).await;
        debug!(battle_id, player_id, target = %target, "Resolving shot");

        let mut battle = self.state.battles.get_by_id(battle_id).await?;
        let mut firing_fleet = self
            .state
            .fleets
            .get_by_battle_and_player(battle_id, player_id)
            .await?;
        let opponent_fleet = self.state.fleets.get_opponent(battle_id, player_id).await?;

        match battle.phase {
            Phase::Finished => {
                return Err(DomainError::conflict(
                    ConflictKind::BattleEnded,
                    format!("Battle {battle_id} is already finished"),
                )
                .into());
            }
            Phase::Deployment => {
                // Tolerant auto-transition: the first shot opens the fight.
                battle.begin_fighting(OffsetDateTime::now_utc())?;
                info!(battle_id, "First shot received, battle moved to fighting");
            }
            Phase::Fighting => {}
        }

        if battle.turn != player_id {
            return Err(DomainError::conflict(
                ConflictKind::NotPlayerTurn,
                format!("It is not player {player_id}'s turn in battle {battle_id}"),
            )
            .into());
        }

        let opponent_id = opponent_fleet.player_id;
        let opponent_ships = self
            .state
            .ships
            .get_all_in_fleet(battle_id, opponent_id)
            .await?;

        let mut victorious = false;
        let result = match assess_shot(&opponent_ships, target) {
            ShotAssessment::Missed => ShotResult::Missed,
            ShotAssessment::AlreadyShot => ShotResult::AlreadyShot,
            ShotAssessment::Struck { ship, sunk } => {
                self.state.ships.save(ship).await?;

                // Structural change: recompute the opponent fleet status
                // from its authoritative ships.
                let ships_after = self
                    .state
                    .ships
                    .get_all_in_fleet(battle_id, opponent_id)
                    .await?;
                let status_after = fleet::aggregate_status(&ships_after);
                if status_after != opponent_fleet.status {
                    let mut updated = opponent_fleet;
                    updated.status = status_after;
                    self.state.fleets.save(updated).await?;
                }

                if sunk {
                    info!(battle_id, player_id, target = %target, "Ship sunk");
                    victorious = status_after == FleetStatus::Sunk;
                    ShotResult::Sunk
                } else {
                    ShotResult::Hit
                }
            }
        };

        firing_fleet.record_shot(target);
        self.state.fleets.save(firing_fleet).await?;

        if victorious {
            // The turn stays on the firer, who thereby becomes the derived
            // winner; the finishing shot is not counted.
            battle.finish(OffsetDateTime::now_utc())?;
            info!(battle_id, winner = player_id, "Battle finished");
        } else {
            battle.pass_turn();
        }
        self.state.battles.save(battle).await?;

        info!(
            battle_id,
            player_id,
            target = %target,
            result = ?result,
            victorious,
            "Shot resolved"
        );
        Ok(ShotReport { result, victorious })
    }
}
