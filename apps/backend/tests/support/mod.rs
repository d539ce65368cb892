//! Shared fixtures for service-level integration tests.

// Not every test binary uses every helper.
#![allow(dead_code)]

use std::sync::Arc;

use armada_backend::domain::{
    Battle, BattleId, GridLocation, Orientation, Player, PlayerId, ShipType,
};
use armada_backend::services::{
    BattleService, CombatService, DeploymentService, PlayerService, ShipDeployment, Shot,
};
use armada_backend::state::AppState;
use armada_test_support::unique_helpers::unique_player_name;

pub struct TestApp {
    pub state: Arc<AppState>,
    pub players: PlayerService,
    pub battles: BattleService,
    pub deployment: DeploymentService,
    pub combat: CombatService,
}

pub fn test_app() -> TestApp {
    armada_test_support::logging::init();
    let state = AppState::in_memory();
    TestApp {
        players: PlayerService::new(Arc::clone(&state)),
        battles: BattleService::new(Arc::clone(&state)),
        deployment: DeploymentService::new(Arc::clone(&state)),
        combat: CombatService::new(Arc::clone(&state)),
        state,
    }
}

pub fn loc(x: u8, y: u8) -> GridLocation {
    GridLocation::new(x, y).expect("test coordinates are on the grid")
}

pub fn shot(battle_id: BattleId, player_id: PlayerId, x: u8, y: u8) -> Shot {
    Shot {
        battle_id,
        player_id,
        target: loc(x, y),
    }
}

pub async fn register_pair(app: &TestApp) -> (Player, Player) {
    let a = app
        .players
        .register(&unique_player_name("alice"))
        .await
        .expect("register first player");
    let b = app
        .players
        .register(&unique_player_name("bob"))
        .await
        .expect("register second player");
    (a, b)
}

/// Deploy a full fleet, one ship per row: carrier on row 0 down to the
/// destroyer on row 4, each starting at column 0.
pub async fn deploy_row_fleet(app: &TestApp, battle_id: BattleId, player_id: PlayerId) {
    for (row, ship_type) in ShipType::ALL.into_iter().enumerate() {
        app.deployment
            .deploy_ship(ShipDeployment {
                battle_id,
                player_id,
                ship_type,
                origin: loc(0, row as u8),
                orientation: Orientation::Row,
            })
            .await
            .expect("row fleet deployment is valid");
    }
}

/// Two registered players, a battle with both row fleets deployed, phase
/// already `Fighting` with the turn on the first player.
pub async fn ready_battle(app: &TestApp) -> (Battle, Player, Player) {
    let (a, b) = register_pair(app).await;
    let battle = app.battles.create(a.id, b.id).await.expect("create battle");
    deploy_row_fleet(app, battle.id, a.id).await;
    deploy_row_fleet(app, battle.id, b.id).await;
    let battle = app.battles.get(battle.id).await.expect("reload battle");
    (battle, a, b)
}

/// All 17 cells of a row fleet, carrier first, destroyer's cells last.
pub fn row_fleet_cells() -> Vec<GridLocation> {
    ShipType::ALL
        .into_iter()
        .enumerate()
        .flat_map(|(row, t)| (0..t.size() as u8).map(move |x| loc(x, row as u8)))
        .collect()
}
