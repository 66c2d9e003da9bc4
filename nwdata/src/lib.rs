//! Static ruleset data for the New World simulation.
//!
//! Everything the model needs to know before a game starts lives here:
//! terrain types, unit types, and the nation roster. The catalogs are
//! constructed in code by [`Ruleset::standard`] and looked up by string
//! identifier at runtime.
//!
//! Well-known identifiers (the plains terrain, the brave unit, the default
//! nations) are exposed as constants in [`defines`] so callers never spell
//! them out by hand.

pub mod defines;
pub mod ruleset;
pub mod types;

pub use ruleset::{Ruleset, RulesetError};
pub use types::{EquipmentId, Nation, NationId, TerrainId, TerrainType, UnitType, UnitTypeId};
