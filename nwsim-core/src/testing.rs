//! Deterministic fixture construction for tests.
//!
//! Ships in the library (not behind `cfg(test)`) so downstream crates can
//! build games, maps, and settlements in their own tests. Everything here
//! is deterministic: the same configuration always produces the same
//! fixture.

use crate::state::{
    Game, GameMap, Player, Position, Settlement, SettlementId, SettlementKind, Tile, UnitId,
    UnitLocation, UnitState,
};
use nwdata::{defines, NationId, Ruleset, RulesetError, TerrainId, UnitTypeId};
use rustc_hash::{FxHashMap, FxHashSet};
use thiserror::Error;
use tracing::instrument;

/// Default fixture map width.
pub const DEFAULT_MAP_WIDTH: u32 = 20;
/// Default fixture map height.
pub const DEFAULT_MAP_HEIGHT: u32 = 15;

const DEFAULT_BASE_TERRAIN: &str = defines::terrain::PLAINS;
const DEFAULT_CAMP_OWNER: &str = defines::nations::TUPI;
const DEFAULT_CAMP_POSITION: Position = Position::new(5, 8);
const DEFAULT_TAUGHT_SKILL: &str = defines::units::MASTER_FARMER;
const DEFAULT_COLONY_OWNER: &str = defines::nations::DUTCH;
const DEFAULT_COLONY_NAME: &str = "New Amsterdam";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FixtureError {
    #[error("map dimensions must be positive, got {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },
    #[error("cannot resize the map after a tile has been placed")]
    MapAlreadyShaped,
    #[error("tile ({x}, {y}) is outside the {width}x{height} working grid")]
    TileOutOfBounds {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },
    #[error("a settlement needs at least one member unit")]
    EmptySettlement,
    #[error("nation '{0}' has no player in this game")]
    UnknownPlayer(NationId),
    #[error("tile ({x}, {y}) is not on the game map")]
    TileNotOnMap { x: u32, y: u32 },
    #[error("the game has no map")]
    MapMissing,
    #[error(transparent)]
    Ruleset(#[from] RulesetError),
}

/// A game with the standard ruleset and one player per standard nation,
/// named after the nation's ruler. No map is attached.
pub fn standard_game() -> Game {
    let ruleset = Ruleset::standard();
    let mut nations: Vec<_> = ruleset.nations().cloned().collect();
    // Stable roster order regardless of catalog hashing.
    nations.sort_by(|a, b| a.id.cmp(&b.id));

    let mut game = Game::new(ruleset);
    for nation in nations {
        game.add_player(Player {
            nation: nation.id.clone(),
            name: nation.ruler.clone(),
            native: !nation.european,
        })
        .expect("standard nations fit in a standard game");
    }
    game
}

/// A 20x15 all-plains, unexplored map.
pub fn test_map(game: &Game) -> GameMap {
    MapBuilder::new(game)
        .build()
        .expect("default terrain exists in the game's ruleset")
}

/// A 20x15 map of uniform `terrain`, optionally explored by every player.
pub fn test_map_with(
    game: &Game,
    terrain: &str,
    explored: bool,
) -> Result<GameMap, FixtureError> {
    let mut builder = MapBuilder::new(game);
    builder.base_terrain(terrain)?.explored_by_all(explored);
    builder.build()
}

/// A 20x15 coast map: the left half is `land_terrain`, the right half
/// ocean.
pub fn coast_map(game: &Game, land_terrain: &str) -> Result<GameMap, FixtureError> {
    let mut builder = MapBuilder::new(game);
    builder
        .dimensions(DEFAULT_MAP_WIDTH, DEFAULT_MAP_HEIGHT)?
        .base_terrain(defines::terrain::OCEAN)?;

    // Fill the left half with land, the builder fills the rest with ocean.
    let land_width = DEFAULT_MAP_WIDTH / 2;
    for x in 0..land_width {
        for y in 0..DEFAULT_MAP_HEIGHT {
            builder.tile(x, y, land_terrain)?;
        }
    }

    builder.build()
}

/// Founds a Dutch colony named "New Amsterdam" at `(x, y)` with `settlers`
/// colonist members. The game must already have a map.
pub fn standard_colony(
    game: &mut Game,
    settlers: u32,
    x: u32,
    y: u32,
) -> Result<SettlementId, FixtureError> {
    if settlers == 0 {
        return Err(FixtureError::EmptySettlement);
    }

    let owner = game
        .player(DEFAULT_COLONY_OWNER)
        .ok_or_else(|| FixtureError::UnknownPlayer(DEFAULT_COLONY_OWNER.to_string()))?
        .nation
        .clone();

    let position = Position::new(x, y);
    let map = game.map().ok_or(FixtureError::MapMissing)?;
    if map.tile(position).is_none() {
        return Err(FixtureError::TileNotOnMap { x, y });
    }

    let colonist = game.ruleset.unit_type(defines::units::COLONIST)?.clone();

    let id = game.add_settlement(Settlement {
        id: 0,
        name: DEFAULT_COLONY_NAME.to_string(),
        kind: SettlementKind::Colony,
        owner: owner.clone(),
        position,
        capital: false,
        learnable_skill: None,
        visited_by: FxHashSet::default(),
        missionary: None,
        members: Vec::new(),
    });

    for _ in 0..settlers {
        let unit = game.spawn_unit(
            &colonist,
            &owner,
            UnitLocation::InSettlement(id),
            UnitState::Active,
        );
        if let Some(colony) = game.settlements.get_mut(&id) {
            colony.members.push(unit);
        }
    }

    debug_assert_eq!(
        game.settlement(id).map(Settlement::member_count),
        Some(settlers as usize)
    );
    Ok(id)
}

/// [`standard_colony`] with one settler at the default tile (5, 8).
pub fn standard_colony_default(game: &mut Game) -> Result<SettlementId, FixtureError> {
    standard_colony(game, 1, DEFAULT_CAMP_POSITION.x, DEFAULT_CAMP_POSITION.y)
}

/// Accumulates a sparse set of terrain overrides over a base terrain, then
/// materializes a fully populated [`GameMap`].
///
/// Dimensions lock once the first tile override is placed; `reset` returns
/// the builder to its construction-time defaults for reuse.
#[derive(Debug)]
pub struct MapBuilder<'a> {
    game: &'a Game,
    width: u32,
    height: u32,
    base_terrain: TerrainId,
    overrides: FxHashMap<Position, TerrainId>,
    explored_by_all: bool,
    shaped: bool,
}

impl<'a> MapBuilder<'a> {
    pub fn new(game: &'a Game) -> Self {
        Self {
            game,
            width: DEFAULT_MAP_WIDTH,
            height: DEFAULT_MAP_HEIGHT,
            base_terrain: DEFAULT_BASE_TERRAIN.to_string(),
            overrides: FxHashMap::default(),
            explored_by_all: false,
            shaped: false,
        }
    }

    /// Sets the terrain used for every tile without an explicit override.
    /// The id must resolve in the bound game's ruleset.
    pub fn base_terrain(&mut self, terrain: &str) -> Result<&mut Self, FixtureError> {
        let _ = self.game.ruleset.terrain_type(terrain)?;
        self.base_terrain = terrain.to_string();
        Ok(self)
    }

    /// Resizes the working grid and clears any overrides. Fails once a
    /// tile has been placed.
    pub fn dimensions(&mut self, width: u32, height: u32) -> Result<&mut Self, FixtureError> {
        if width == 0 || height == 0 {
            return Err(FixtureError::InvalidDimensions { width, height });
        }
        if self.shaped {
            return Err(FixtureError::MapAlreadyShaped);
        }
        self.width = width;
        self.height = height;
        self.overrides.clear();
        Ok(self)
    }

    pub fn explored_by_all(&mut self, explored: bool) -> &mut Self {
        self.explored_by_all = explored;
        self
    }

    /// Overrides the terrain at `(x, y)` and locks the dimensions.
    pub fn tile(&mut self, x: u32, y: u32, terrain: &str) -> Result<&mut Self, FixtureError> {
        if x >= self.width || y >= self.height {
            return Err(FixtureError::TileOutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        let _ = self.game.ruleset.terrain_type(terrain)?;
        self.overrides.insert(Position::new(x, y), terrain.to_string());
        self.shaped = true;
        Ok(self)
    }

    /// Materializes the map: every position gets its override terrain or
    /// the base terrain, and exploration is applied for every player in the
    /// bound game when requested. The builder itself is untouched and can
    /// be built again or `reset`.
    #[instrument(skip_all, name = "map_fixture")]
    pub fn build(&self) -> Result<GameMap, FixtureError> {
        // The default base terrain is only resolved at build time.
        let _ = self.game.ruleset.terrain_type(&self.base_terrain)?;

        let mut tiles = Vec::with_capacity(self.width as usize * self.height as usize);
        for y in 0..self.height {
            for x in 0..self.width {
                let terrain = self
                    .overrides
                    .get(&Position::new(x, y))
                    .cloned()
                    .unwrap_or_else(|| self.base_terrain.clone());
                tiles.push(Tile::new(terrain));
            }
        }

        let mut map = GameMap::from_tiles(self.width, self.height, tiles);
        if self.explored_by_all {
            for player in &self.game.players {
                for tile in map.tiles_mut() {
                    tile.set_explored_by(&player.nation, true);
                }
            }
        }

        log::debug!(
            "built {}x{} fixture map with {} terrain overrides",
            self.width,
            self.height,
            self.overrides.len()
        );
        Ok(map)
    }

    /// Restores construction-time defaults: 20x15, plains, unexplored, no
    /// overrides, dimensions unlocked.
    pub fn reset(&mut self) -> &mut Self {
        self.width = DEFAULT_MAP_WIDTH;
        self.height = DEFAULT_MAP_HEIGHT;
        self.base_terrain = DEFAULT_BASE_TERRAIN.to_string();
        self.overrides.clear();
        self.explored_by_all = false;
        self.shaped = false;
        self
    }
}

/// Accumulates native-camp attributes, validates them against the bound
/// game, then materializes the settlement and its member units into the
/// game.
///
/// Owner and position are resolved to defaults (the Tupi player, tile
/// (5, 8)) at build time when not explicitly configured.
#[derive(Debug)]
pub struct SettlementBuilder<'a> {
    game: &'a mut Game,
    owner: Option<NationId>,
    member_count: u32,
    position: Option<Position>,
    capital: bool,
    visited_by: FxHashSet<NationId>,
    missionary: Option<UnitId>,
    skill: Option<UnitTypeId>,
}

impl<'a> SettlementBuilder<'a> {
    pub fn new(game: &'a mut Game) -> Self {
        Self {
            game,
            owner: None,
            member_count: 1,
            position: None,
            capital: false,
            visited_by: FxHashSet::default(),
            missionary: None,
            skill: Some(DEFAULT_TAUGHT_SKILL.to_string()),
        }
    }

    /// Sets the owning nation, which must already have a player in the
    /// bound game.
    pub fn owner(&mut self, nation: &str) -> Result<&mut Self, FixtureError> {
        if self.game.player(nation).is_none() {
            return Err(FixtureError::UnknownPlayer(nation.to_string()));
        }
        self.owner = Some(nation.to_string());
        Ok(self)
    }

    /// Sets how many member units `build` creates. Must be at least 1.
    pub fn member_count(&mut self, count: u32) -> Result<&mut Self, FixtureError> {
        if count == 0 {
            return Err(FixtureError::EmptySettlement);
        }
        self.member_count = count;
        Ok(self)
    }

    /// Sets the settlement tile, which must resolve on the bound game's
    /// map.
    pub fn position(&mut self, position: Position) -> Result<&mut Self, FixtureError> {
        let map = self.game.map().ok_or(FixtureError::MapMissing)?;
        if map.tile(position).is_none() {
            return Err(FixtureError::TileNotOnMap {
                x: position.x,
                y: position.y,
            });
        }
        self.position = Some(position);
        Ok(self)
    }

    pub fn capital(&mut self, capital: bool) -> &mut Self {
        self.capital = capital;
        self
    }

    /// Adds or removes a nation from the set that has visited the
    /// settlement. The nation is not checked against the roster.
    pub fn visited_by(&mut self, nation: &str, visited: bool) -> &mut Self {
        if visited {
            self.visited_by.insert(nation.to_string());
        } else {
            self.visited_by.remove(nation);
        }
        self
    }

    pub fn missionary(&mut self, missionary: Option<UnitId>) -> &mut Self {
        self.missionary = missionary;
        self
    }

    /// Sets the skill the settlement teaches; `None` clears it. The id is
    /// resolved against the unit-type catalog only at `build` time.
    pub fn skill(&mut self, skill: Option<&str>) -> &mut Self {
        self.skill = skill.map(str::to_string);
        self
    }

    /// Resolves defaults, inserts the settlement into the bound game, and
    /// populates it with the configured number of member units.
    #[instrument(skip_all, name = "settlement_fixture")]
    pub fn build(&mut self) -> Result<SettlementId, FixtureError> {
        let learnable_skill = match &self.skill {
            Some(id) => Some(self.game.ruleset.unit_type(id)?.id.clone()),
            None => None,
        };
        let member_type = self.game.ruleset.unit_type(defines::units::BRAVE)?.clone();

        let owner = match &self.owner {
            Some(nation) => nation.clone(),
            None => self
                .game
                .player(DEFAULT_CAMP_OWNER)
                .ok_or_else(|| FixtureError::UnknownPlayer(DEFAULT_CAMP_OWNER.to_string()))?
                .nation
                .clone(),
        };

        let position = match self.position {
            Some(position) => position,
            None => {
                let map = self.game.map().ok_or(FixtureError::MapMissing)?;
                if map.tile(DEFAULT_CAMP_POSITION).is_none() {
                    return Err(FixtureError::TileNotOnMap {
                        x: DEFAULT_CAMP_POSITION.x,
                        y: DEFAULT_CAMP_POSITION.y,
                    });
                }
                DEFAULT_CAMP_POSITION
            }
        };

        let name = self.game.default_settlement_name(&owner, self.capital);
        let id = self.game.add_settlement(Settlement {
            id: 0,
            name,
            kind: SettlementKind::Camp,
            owner: owner.clone(),
            position,
            capital: self.capital,
            learnable_skill,
            visited_by: self.visited_by.clone(),
            missionary: self.missionary,
            members: Vec::new(),
        });

        for _ in 0..self.member_count {
            let unit = self.game.spawn_unit(
                &member_type,
                &owner,
                UnitLocation::InSettlement(id),
                UnitState::Active,
            );
            if let Some(camp) = self.game.settlements.get_mut(&id) {
                camp.members.push(unit);
            }
        }

        log::debug!(
            "built settlement {} for {} with {} members at {}",
            id,
            owner,
            self.member_count,
            position
        );
        Ok(id)
    }

    /// Restores construction-time defaults: owner and position unset,
    /// one member, default taught skill, not a capital, no visitors, no
    /// missionary.
    pub fn reset(&mut self) -> &mut Self {
        self.owner = None;
        self.member_count = 1;
        self.position = None;
        self.capital = false;
        self.visited_by.clear();
        self.missionary = None;
        self.skill = Some(DEFAULT_TAUGHT_SKILL.to_string());
        self
    }
}
