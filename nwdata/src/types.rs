//! Public type definitions for ruleset data.

use serde::{Deserialize, Serialize};

pub type TerrainId = String;
pub type UnitTypeId = String;
pub type NationId = String;
pub type EquipmentId = String;

/// A kind of terrain a map tile can carry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TerrainType {
    pub id: TerrainId,
    pub name: String,
    /// Water tiles cannot host settlements.
    pub water: bool,
    /// Movement points a land unit spends entering a tile of this terrain.
    pub movement_cost: u32,
}

/// A kind of unit, including the expert professions settlements can teach.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitType {
    pub id: UnitTypeId,
    pub name: String,
    /// Equipment a freshly created unit of this type carries.
    #[serde(default)]
    pub default_equipment: Vec<EquipmentId>,
    /// Movement points per turn.
    pub movement: u32,
}

/// A playable nation. European nations found colonies; native nations
/// keep camps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Nation {
    pub id: NationId,
    pub name: String,
    /// Ruler name, used as the display name of the nation's player.
    pub ruler: String,
    pub european: bool,
}
