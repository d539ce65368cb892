//! Ships: immutable type+origin+orientation+hit-set values.

use std::collections::BTreeSet;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use crate::domain::battle::{BattleId, PlayerId};
use crate::domain::location::GridLocation;

/// How a ship's footprint extends from its origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Orientation {
    /// Along a row: cells at increasing x.
    Row,
    /// Along a column: cells at increasing y.
    Column,
}

/// The five ship classes and their fixed footprint lengths.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum ShipType {
    Carrier,
    Battleship,
    Cruiser,
    Submarine,
    Destroyer,
}

impl ShipType {
    /// One of each, the full fleet complement.
    pub const ALL: [ShipType; 5] = [
        ShipType::Carrier,
        ShipType::Battleship,
        ShipType::Cruiser,
        ShipType::Submarine,
        ShipType::Destroyer,
    ];

    pub const fn size(&self) -> usize {
        match self {
            ShipType::Carrier => 5,
            ShipType::Battleship => 4,
            ShipType::Cruiser => 3,
            ShipType::Submarine => 3,
            ShipType::Destroyer => 2,
        }
    }
}

/// Structural status derived from the hit count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShipStatus {
    Unharmed,
    Damaged,
    Destroyed,
}

/// Identity of a ship: exactly one ship of each type per fleet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ShipId {
    pub battle_id: BattleId,
    pub player_id: PlayerId,
    pub ship_type: ShipType,
}

/// A deployed (or candidate) ship.
///
/// Equality and hashing go by identity `(battle_id, player_id, ship_type)`
/// only; two values with the same identity are the same ship regardless of
/// position. Fleet membership relies on this.
///
/// The hit set is kept private so `hits ⊆ footprint` cannot be broken from
/// outside; hits are added through `with_hit`, which returns a new value.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ship {
    pub battle_id: BattleId,
    pub player_id: PlayerId,
    pub ship_type: ShipType,
    pub origin: GridLocation,
    pub orientation: Orientation,
    hits: BTreeSet<GridLocation>,
}

impl Ship {
    pub fn new(
        battle_id: BattleId,
        player_id: PlayerId,
        ship_type: ShipType,
        origin: GridLocation,
        orientation: Orientation,
    ) -> Self {
        Self {
            battle_id,
            player_id,
            ship_type,
            origin,
            orientation,
            hits: BTreeSet::new(),
        }
    }

    pub fn id(&self) -> ShipId {
        ShipId {
            battle_id: self.battle_id,
            player_id: self.player_id,
            ship_type: self.ship_type,
        }
    }

    /// Raw footprint cells, computed from origin, orientation and type size.
    ///
    /// Cells can lie outside the grid for a misplaced candidate; the
    /// deployment validator rejects those, so a persisted ship's cells are
    /// always in-grid.
    pub fn cells(&self) -> Vec<(u8, u8)> {
        let (ox, oy) = self.origin.coords();
        (0..self.ship_type.size() as u8)
            .map(|i| match self.orientation {
                Orientation::Row => (ox + i, oy),
                Orientation::Column => (ox, oy + i),
            })
            .collect()
    }

    /// The footprint as grid locations, out-of-grid cells omitted. Only
    /// meaningful for a ship whose placement has been validated.
    pub fn footprint(&self) -> Vec<GridLocation> {
        self.cells()
            .into_iter()
            .filter_map(|(x, y)| GridLocation::new(x, y).ok())
            .collect()
    }

    pub fn contains(&self, location: GridLocation) -> bool {
        self.cells().contains(&location.coords())
    }

    pub fn is_hit_at(&self, location: GridLocation) -> bool {
        self.hits.contains(&location)
    }

    pub fn hits(&self) -> impl Iterator<Item = GridLocation> + '_ {
        self.hits.iter().copied()
    }

    pub fn hit_count(&self) -> usize {
        self.hits.len()
    }

    /// A copy of this ship with the hit recorded.
    ///
    /// No-op (returns an identical value) when the location is outside the
    /// footprint or already hit.
    pub fn with_hit(&self, location: GridLocation) -> Ship {
        let mut next = self.clone();
        if next.contains(location) {
            next.hits.insert(location);
        }
        next
    }

    pub fn status(&self) -> ShipStatus {
        match self.hits.len() {
            0 => ShipStatus::Unharmed,
            n if n == self.ship_type.size() => ShipStatus::Destroyed,
            _ => ShipStatus::Damaged,
        }
    }
}

impl PartialEq for Ship {
    fn eq(&self, other: &Self) -> bool {
        self.id() == other.id()
    }
}

impl Eq for Ship {}

impl Hash for Ship {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id().hash(state);
    }
}
