use nwdata::{EquipmentId, NationId, Ruleset, TerrainId, UnitTypeId};
use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub type UnitId = u32;
pub type SettlementId = u32;

/// A map coordinate. `(0, 0)` is the north-west corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: u32,
    pub y: u32,
}

impl Position {
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("nation '{0}' already has a player in this game")]
    DuplicatePlayer(NationId),
    #[error("game is full ({0} players max)")]
    GameFull(usize),
}

/// A participant in the game. One player per nation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub nation: NationId,
    pub name: String,
    pub native: bool,
}

/// A single map location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tile {
    pub terrain: TerrainId,
    /// Nations that have explored this tile.
    #[serde(default)]
    pub explored_by: FxHashSet<NationId>,
    /// Settlement occupying this tile, if any.
    pub settlement: Option<SettlementId>,
}

impl Tile {
    pub fn new(terrain: TerrainId) -> Self {
        Self {
            terrain,
            explored_by: FxHashSet::default(),
            settlement: None,
        }
    }

    pub fn is_explored_by(&self, nation: &str) -> bool {
        self.explored_by.contains(nation)
    }

    pub fn set_explored_by(&mut self, nation: &str, explored: bool) {
        if explored {
            self.explored_by.insert(nation.to_string());
        } else {
            self.explored_by.remove(nation);
        }
    }
}

/// The rectangular tile grid. Tiles are stored row-major.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameMap {
    pub width: u32,
    pub height: u32,
    tiles: Vec<Tile>,
}

impl GameMap {
    /// Assembles a map from row-major tiles. `tiles.len()` must equal
    /// `width * height`.
    pub fn from_tiles(width: u32, height: u32, tiles: Vec<Tile>) -> Self {
        debug_assert_eq!(tiles.len(), width as usize * height as usize);
        Self {
            width,
            height,
            tiles,
        }
    }

    pub fn tile_count(&self) -> usize {
        self.tiles.len()
    }

    fn index(&self, pos: Position) -> Option<usize> {
        if pos.x < self.width && pos.y < self.height {
            Some((pos.y * self.width + pos.x) as usize)
        } else {
            None
        }
    }

    pub fn tile(&self, pos: Position) -> Option<&Tile> {
        self.index(pos).map(|i| &self.tiles[i])
    }

    pub fn tile_mut(&mut self, pos: Position) -> Option<&mut Tile> {
        self.index(pos).map(move |i| &mut self.tiles[i])
    }

    /// Iterates every coordinate of the map, row by row.
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        (0..self.height).flat_map(move |y| (0..self.width).map(move |x| Position::new(x, y)))
    }

    pub fn tiles(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.iter()
    }

    pub fn tiles_mut(&mut self) -> impl Iterator<Item = &mut Tile> {
        self.tiles.iter_mut()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum UnitState {
    #[default]
    Active,
    Fortified,
    Sentry,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UnitLocation {
    OnMap(Position),
    InSettlement(SettlementId),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Unit {
    pub id: UnitId,
    pub unit_type: UnitTypeId,
    pub owner: NationId,
    pub location: UnitLocation,
    pub state: UnitState,
    pub equipment: Vec<EquipmentId>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SettlementKind {
    Colony,
    Camp,
}

/// A fixed location owned by a player, hosting member units.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settlement {
    pub id: SettlementId,
    pub name: String,
    pub kind: SettlementKind,
    pub owner: NationId,
    pub position: Position,
    pub capital: bool,
    /// Skill this settlement teaches visiting units. Camps only.
    pub learnable_skill: Option<UnitTypeId>,
    /// Nations whose units have visited this settlement.
    #[serde(default)]
    pub visited_by: FxHashSet<NationId>,
    /// Resident missionary unit. Camps only.
    pub missionary: Option<UnitId>,
    /// Units belonging to this settlement.
    pub members: Vec<UnitId>,
}

impl Settlement {
    pub fn member_count(&self) -> usize {
        self.members.len()
    }
}

/// The complete game context: ruleset catalogs, player roster, map, and all
/// settlements and units, id-keyed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Game {
    pub ruleset: Ruleset,
    pub max_players: usize,
    pub players: Vec<Player>,
    pub map: Option<GameMap>,
    pub settlements: FxHashMap<SettlementId, Settlement>,
    pub units: FxHashMap<UnitId, Unit>,
    next_settlement_id: SettlementId,
    next_unit_id: UnitId,
}

impl Game {
    pub fn new(ruleset: Ruleset) -> Self {
        Self {
            ruleset,
            max_players: 8,
            players: Vec::new(),
            map: None,
            settlements: FxHashMap::default(),
            units: FxHashMap::default(),
            next_settlement_id: 1,
            next_unit_id: 1,
        }
    }

    pub fn add_player(&mut self, player: Player) -> Result<(), GameError> {
        if self.players.len() >= self.max_players {
            return Err(GameError::GameFull(self.max_players));
        }
        if self.players.iter().any(|p| p.nation == player.nation) {
            return Err(GameError::DuplicatePlayer(player.nation));
        }
        self.players.push(player);
        Ok(())
    }

    pub fn player(&self, nation: &str) -> Option<&Player> {
        self.players.iter().find(|p| p.nation == nation)
    }

    pub fn set_map(&mut self, map: GameMap) {
        self.map = Some(map);
    }

    pub fn map(&self) -> Option<&GameMap> {
        self.map.as_ref()
    }

    pub fn map_mut(&mut self) -> Option<&mut GameMap> {
        self.map.as_mut()
    }

    pub fn settlement(&self, id: SettlementId) -> Option<&Settlement> {
        self.settlements.get(&id)
    }

    pub fn unit(&self, id: UnitId) -> Option<&Unit> {
        self.units.get(&id)
    }

    /// Creates a unit of an already-resolved type, carrying the type's
    /// default equipment.
    pub fn spawn_unit(
        &mut self,
        unit_type: &nwdata::UnitType,
        owner: &str,
        location: UnitLocation,
        state: UnitState,
    ) -> UnitId {
        let id = self.next_unit_id;
        self.next_unit_id += 1;
        let unit = Unit {
            id,
            unit_type: unit_type.id.clone(),
            owner: owner.to_string(),
            location,
            state,
            equipment: unit_type.default_equipment.clone(),
        };
        self.units.insert(id, unit);
        id
    }

    /// Registers a settlement, assigns its id, and links its map tile.
    pub fn add_settlement(&mut self, mut settlement: Settlement) -> SettlementId {
        let id = self.next_settlement_id;
        self.next_settlement_id += 1;
        settlement.id = id;
        if let Some(tile) = self
            .map
            .as_mut()
            .and_then(|map| map.tile_mut(settlement.position))
        {
            tile.settlement = Some(id);
        }
        self.settlements.insert(id, settlement);
        id
    }

    /// Default display name for a new settlement of the given owner, e.g.
    /// "Tupi Capital" or "Tupi Camp 2".
    pub fn default_settlement_name(&self, owner: &str, capital: bool) -> String {
        let nation_name = self
            .ruleset
            .nation(owner)
            .map(|n| n.name.clone())
            .unwrap_or_else(|_| owner.to_string());
        if capital {
            format!("{} Capital", nation_name)
        } else {
            let existing = self
                .settlements
                .values()
                .filter(|s| s.owner == owner)
                .count();
            format!("{} Camp {}", nation_name, existing + 1)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nwdata::defines;

    fn game_with_map() -> Game {
        let mut game = Game::new(Ruleset::standard());
        let tiles = (0..6)
            .map(|_| Tile::new(defines::terrain::PLAINS.to_string()))
            .collect();
        game.set_map(GameMap::from_tiles(3, 2, tiles));
        game
    }

    #[test]
    fn test_map_indexing_is_row_major() {
        let mut game = game_with_map();
        let map = game.map_mut().unwrap();
        map.tile_mut(Position::new(2, 1)).unwrap().terrain = defines::terrain::OCEAN.to_string();

        let map = game.map().unwrap();
        assert_eq!(
            map.tile(Position::new(2, 1)).unwrap().terrain,
            defines::terrain::OCEAN
        );
        assert_eq!(
            map.tile(Position::new(1, 2)),
            None,
            "y out of range must not alias another tile"
        );
        assert_eq!(map.tile(Position::new(3, 0)), None);
        assert_eq!(map.positions().count(), map.tile_count());
    }

    #[test]
    fn test_add_player_rejects_duplicates_and_overflow() {
        let mut game = Game::new(Ruleset::standard());
        game.max_players = 1;
        game.add_player(Player {
            nation: defines::nations::DUTCH.to_string(),
            name: "Michiel".to_string(),
            native: false,
        })
        .unwrap();

        let dup = game.add_player(Player {
            nation: defines::nations::DUTCH.to_string(),
            name: "Michiel".to_string(),
            native: false,
        });
        // Roster is already full, so the capacity check fires first.
        assert_eq!(dup.unwrap_err(), GameError::GameFull(1));

        game.max_players = 2;
        let dup = game.add_player(Player {
            nation: defines::nations::DUTCH.to_string(),
            name: "Someone Else".to_string(),
            native: false,
        });
        assert_eq!(
            dup.unwrap_err(),
            GameError::DuplicatePlayer(defines::nations::DUTCH.to_string())
        );
    }

    #[test]
    fn test_spawn_unit_copies_default_equipment() {
        let mut game = game_with_map();
        let soldier = game
            .ruleset
            .unit_type(defines::units::VETERAN_SOLDIER)
            .unwrap()
            .clone();
        let id = game.spawn_unit(
            &soldier,
            defines::nations::DUTCH,
            UnitLocation::OnMap(Position::new(0, 0)),
            UnitState::Active,
        );

        let unit = game.unit(id).unwrap();
        assert_eq!(unit.equipment, vec![defines::equipment::MUSKETS.to_string()]);
        assert_eq!(unit.state, UnitState::Active);
    }

    #[test]
    fn test_add_settlement_links_tile() {
        let mut game = game_with_map();
        let position = Position::new(1, 1);
        let id = game.add_settlement(Settlement {
            id: 0,
            name: "Testville".to_string(),
            kind: SettlementKind::Colony,
            owner: defines::nations::DUTCH.to_string(),
            position,
            capital: false,
            learnable_skill: None,
            visited_by: FxHashSet::default(),
            missionary: None,
            members: Vec::new(),
        });

        assert_eq!(game.map().unwrap().tile(position).unwrap().settlement, Some(id));
        assert_eq!(game.settlement(id).unwrap().name, "Testville");
    }

    #[test]
    fn test_default_settlement_names_count_per_owner() {
        let mut game = game_with_map();
        assert_eq!(
            game.default_settlement_name(defines::nations::TUPI, true),
            "Tupi Capital"
        );
        assert_eq!(
            game.default_settlement_name(defines::nations::TUPI, false),
            "Tupi Camp 1"
        );

        game.add_settlement(Settlement {
            id: 0,
            name: "Tupi Camp 1".to_string(),
            kind: SettlementKind::Camp,
            owner: defines::nations::TUPI.to_string(),
            position: Position::new(0, 0),
            capital: false,
            learnable_skill: None,
            visited_by: FxHashSet::default(),
            missionary: None,
            members: Vec::new(),
        });
        assert_eq!(
            game.default_settlement_name(defines::nations::TUPI, false),
            "Tupi Camp 2"
        );
    }
}
