//! Battles: the pairing of two players, phase, turn and counters.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::errors::domain::{ConflictKind, DomainError};

pub type BattleId = i64;
pub type PlayerId = i64;

/// Battle progression phases. Only ever moves forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Players place their fleets.
    Deployment,
    /// Alternating shots.
    Fighting,
    /// One fleet is sunk; no further operations accepted.
    Finished,
}

impl Phase {
    fn rank(&self) -> u8 {
        match self {
            Phase::Deployment => 0,
            Phase::Fighting => 1,
            Phase::Finished => 2,
        }
    }
}

/// A battle between two players.
///
/// `winner()` is derived, never stored: whoever's turn it is when the phase
/// becomes `Finished`. The finishing shot performs no turn switch, so the
/// turn field still names the sinking player.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Battle {
    pub id: BattleId,
    pub player_a: PlayerId,
    pub player_b: PlayerId,
    pub phase: Phase,
    /// The player who may currently act.
    pub turn: PlayerId,
    /// Incremented once per resolved shot; never decreases.
    pub turn_count: u32,
    pub created_at: OffsetDateTime,
    pub started_at: Option<OffsetDateTime>,
    pub finished_at: Option<OffsetDateTime>,
    /// Optimistic concurrency version, bumped by the store on save.
    pub lock_version: i32,
}

impl Battle {
    pub fn is_participant(&self, player_id: PlayerId) -> bool {
        player_id == self.player_a || player_id == self.player_b
    }

    pub fn opponent_of(&self, player_id: PlayerId) -> Option<PlayerId> {
        if player_id == self.player_a {
            Some(self.player_b)
        } else if player_id == self.player_b {
            Some(self.player_a)
        } else {
            None
        }
    }

    /// Advance the phase. Fails when the transition would move backwards or
    /// repeat the current phase.
    pub fn advance_phase(&mut self, next: Phase) -> Result<(), DomainError> {
        if next.rank() <= self.phase.rank() {
            return Err(DomainError::conflict(
                ConflictKind::UnexpectedBattlePhase,
                format!("cannot move battle {} from {:?} to {next:?}", self.id, self.phase),
            ));
        }
        self.phase = next;
        Ok(())
    }

    /// Open the fighting phase and stamp the start time.
    pub fn begin_fighting(&mut self, now: OffsetDateTime) -> Result<(), DomainError> {
        self.advance_phase(Phase::Fighting)?;
        self.started_at = Some(now);
        Ok(())
    }

    /// Close the battle. The current turn holder becomes the derived winner.
    pub fn finish(&mut self, now: OffsetDateTime) -> Result<(), DomainError> {
        self.advance_phase(Phase::Finished)?;
        self.finished_at = Some(now);
        Ok(())
    }

    /// Hand the turn to the other player and count the resolved shot.
    pub fn pass_turn(&mut self) {
        self.turn = if self.turn == self.player_a {
            self.player_b
        } else {
            self.player_a
        };
        self.turn_count += 1;
    }

    /// The winning player, defined only for a finished battle.
    pub fn winner(&self) -> Option<PlayerId> {
        (self.phase == Phase::Finished).then_some(self.turn)
    }
}
