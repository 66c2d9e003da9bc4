//! # New World Simulation Core
//!
//! In-memory model of a colonial-era, turn-based strategy game: players,
//! a rectangular tile map, settlements, and units. There is no engine loop
//! here; the crate exists so game logic can be built and tested against
//! fully materialized state.
//!
//! ## Key Types
//!
//! | Type | Purpose |
//! |------|---------|
//! | [`Game`] | Complete game context (ruleset, players, map, settlements, units) |
//! | [`GameMap`] | Rectangular grid of [`Tile`]s with per-player exploration |
//! | [`Settlement`] | A colony or native camp fixed to a map tile |
//! | [`Unit`] | A mobile unit, on the map or inside a settlement |
//! | [`testing::MapBuilder`] | Deterministic map fixture construction |
//! | [`testing::SettlementBuilder`] | Deterministic settlement fixture construction |
//!
//! The [`testing`] module ships in the library (not behind `cfg(test)`) so
//! downstream crates can build fixtures in their own tests.

pub mod state;
pub mod testing;

pub use state::{
    Game, GameError, GameMap, Player, Position, Settlement, SettlementId, SettlementKind, Tile,
    Unit, UnitId, UnitLocation, UnitState,
};
pub use testing::{FixtureError, MapBuilder, SettlementBuilder};
