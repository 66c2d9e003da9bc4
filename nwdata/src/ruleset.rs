//! The ruleset catalog: every terrain type, unit type, and nation a game
//! can reference, keyed by id.

use crate::defines;
use crate::types::{Nation, NationId, TerrainId, TerrainType, UnitType, UnitTypeId};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RulesetError {
    #[error("terrain type '{0}' not found in ruleset")]
    UnknownTerrain(TerrainId),
    #[error("unit type '{0}' not found in ruleset")]
    UnknownUnitType(UnitTypeId),
    #[error("nation '{0}' not found in ruleset")]
    UnknownNation(NationId),
}

/// Immutable catalogs consulted by the game model. Built once and cloned
/// into every game that uses it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ruleset {
    terrain_types: HashMap<TerrainId, TerrainType>,
    unit_types: HashMap<UnitTypeId, UnitType>,
    nations: HashMap<NationId, Nation>,
}

impl Ruleset {
    /// An empty ruleset, for callers that register their own catalogs.
    pub fn empty() -> Self {
        Self {
            terrain_types: HashMap::new(),
            unit_types: HashMap::new(),
            nations: HashMap::new(),
        }
    }

    /// The standard ruleset: five terrain types, five unit types, four
    /// European and four native nations.
    pub fn standard() -> Self {
        let mut ruleset = Self::empty();

        for terrain in standard_terrain_types() {
            ruleset.register_terrain(terrain);
        }
        for unit_type in standard_unit_types() {
            ruleset.register_unit_type(unit_type);
        }
        for nation in standard_nations() {
            ruleset.register_nation(nation);
        }

        ruleset
    }

    pub fn register_terrain(&mut self, terrain: TerrainType) {
        self.terrain_types.insert(terrain.id.clone(), terrain);
    }

    pub fn register_unit_type(&mut self, unit_type: UnitType) {
        self.unit_types.insert(unit_type.id.clone(), unit_type);
    }

    pub fn register_nation(&mut self, nation: Nation) {
        self.nations.insert(nation.id.clone(), nation);
    }

    pub fn terrain_type(&self, id: &str) -> Result<&TerrainType, RulesetError> {
        self.terrain_types
            .get(id)
            .ok_or_else(|| RulesetError::UnknownTerrain(id.to_string()))
    }

    pub fn unit_type(&self, id: &str) -> Result<&UnitType, RulesetError> {
        self.unit_types
            .get(id)
            .ok_or_else(|| RulesetError::UnknownUnitType(id.to_string()))
    }

    pub fn nation(&self, id: &str) -> Result<&Nation, RulesetError> {
        self.nations
            .get(id)
            .ok_or_else(|| RulesetError::UnknownNation(id.to_string()))
    }

    pub fn terrain_types(&self) -> impl Iterator<Item = &TerrainType> {
        self.terrain_types.values()
    }

    pub fn unit_types(&self) -> impl Iterator<Item = &UnitType> {
        self.unit_types.values()
    }

    pub fn nations(&self) -> impl Iterator<Item = &Nation> {
        self.nations.values()
    }
}

fn standard_terrain_types() -> Vec<TerrainType> {
    vec![
        TerrainType {
            id: defines::terrain::PLAINS.to_string(),
            name: "Plains".to_string(),
            water: false,
            movement_cost: 1,
        },
        TerrainType {
            id: defines::terrain::OCEAN.to_string(),
            name: "Ocean".to_string(),
            water: true,
            movement_cost: 1,
        },
        TerrainType {
            id: defines::terrain::GRASSLAND.to_string(),
            name: "Grassland".to_string(),
            water: false,
            movement_cost: 1,
        },
        TerrainType {
            id: defines::terrain::FOREST.to_string(),
            name: "Forest".to_string(),
            water: false,
            movement_cost: 2,
        },
        TerrainType {
            id: defines::terrain::MOUNTAINS.to_string(),
            name: "Mountains".to_string(),
            water: false,
            movement_cost: 3,
        },
    ]
}

fn standard_unit_types() -> Vec<UnitType> {
    vec![
        UnitType {
            id: defines::units::COLONIST.to_string(),
            name: "Free Colonist".to_string(),
            default_equipment: vec![],
            movement: 3,
        },
        UnitType {
            id: defines::units::BRAVE.to_string(),
            name: "Brave".to_string(),
            default_equipment: vec![],
            movement: 3,
        },
        UnitType {
            id: defines::units::MASTER_FARMER.to_string(),
            name: "Master Farmer".to_string(),
            default_equipment: vec![],
            movement: 3,
        },
        UnitType {
            id: defines::units::VETERAN_SOLDIER.to_string(),
            name: "Veteran Soldier".to_string(),
            default_equipment: vec![defines::equipment::MUSKETS.to_string()],
            movement: 3,
        },
        UnitType {
            id: defines::units::MISSIONARY.to_string(),
            name: "Missionary".to_string(),
            default_equipment: vec![],
            movement: 6,
        },
    ]
}

fn standard_nations() -> Vec<Nation> {
    vec![
        Nation {
            id: defines::nations::DUTCH.to_string(),
            name: "Dutch".to_string(),
            ruler: "Michiel".to_string(),
            european: true,
        },
        Nation {
            id: defines::nations::ENGLISH.to_string(),
            name: "English".to_string(),
            ruler: "Walter".to_string(),
            european: true,
        },
        Nation {
            id: defines::nations::FRENCH.to_string(),
            name: "French".to_string(),
            ruler: "Samuel".to_string(),
            european: true,
        },
        Nation {
            id: defines::nations::SPANISH.to_string(),
            name: "Spanish".to_string(),
            ruler: "Hernando".to_string(),
            european: true,
        },
        Nation {
            id: defines::nations::TUPI.to_string(),
            name: "Tupi".to_string(),
            ruler: "Cunhambebe".to_string(),
            european: false,
        },
        Nation {
            id: defines::nations::CHEROKEE.to_string(),
            name: "Cherokee".to_string(),
            ruler: "Moytoy".to_string(),
            european: false,
        },
        Nation {
            id: defines::nations::IROQUOIS.to_string(),
            name: "Iroquois".to_string(),
            ruler: "Hiawatha".to_string(),
            european: false,
        },
        Nation {
            id: defines::nations::AZTEC.to_string(),
            name: "Aztec".to_string(),
            ruler: "Cuauhtemoc".to_string(),
            european: false,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_catalog_sizes() {
        let ruleset = Ruleset::standard();
        assert_eq!(ruleset.terrain_types().count(), 5);
        assert_eq!(ruleset.unit_types().count(), 5);
        assert_eq!(ruleset.nations().count(), 8);
    }

    #[test]
    fn test_standard_lookups() {
        let ruleset = Ruleset::standard();

        let plains = ruleset.terrain_type(defines::terrain::PLAINS).unwrap();
        assert!(!plains.water);

        let ocean = ruleset.terrain_type(defines::terrain::OCEAN).unwrap();
        assert!(ocean.water);

        let soldier = ruleset.unit_type(defines::units::VETERAN_SOLDIER).unwrap();
        assert_eq!(
            soldier.default_equipment,
            vec![defines::equipment::MUSKETS.to_string()]
        );

        let tupi = ruleset.nation(defines::nations::TUPI).unwrap();
        assert!(!tupi.european);
        let dutch = ruleset.nation(defines::nations::DUTCH).unwrap();
        assert!(dutch.european);
    }

    #[test]
    fn test_unknown_ids_error() {
        let ruleset = Ruleset::standard();

        assert_eq!(
            ruleset.terrain_type("terrain.lava").unwrap_err(),
            RulesetError::UnknownTerrain("terrain.lava".to_string())
        );
        assert_eq!(
            ruleset.unit_type("unit.dragoon").unwrap_err(),
            RulesetError::UnknownUnitType("unit.dragoon".to_string())
        );
        assert_eq!(
            ruleset.nation("nation.swedish").unwrap_err(),
            RulesetError::UnknownNation("nation.swedish".to_string())
        );
    }

    #[test]
    fn test_ruleset_round_trips_through_json() {
        let ruleset = Ruleset::standard();
        let json = serde_json::to_string(&ruleset).unwrap();
        let restored: Ruleset = serde_json::from_str(&json).unwrap();
        assert_eq!(
            restored.terrain_types().count(),
            ruleset.terrain_types().count()
        );
        assert!(restored.nation(defines::nations::DUTCH).is_ok());
    }
}
