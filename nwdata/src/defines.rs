//! Well-known ruleset identifiers.
//!
//! These are the ids [`crate::Ruleset::standard`] registers. Model code and
//! fixtures refer to them through these constants instead of repeating the
//! string literals.

/// Terrain type ids
pub mod terrain {
    /// Default land terrain for generated maps
    pub const PLAINS: &str = "terrain.plains";

    /// Default water terrain for coast maps
    pub const OCEAN: &str = "terrain.ocean";

    pub const GRASSLAND: &str = "terrain.grassland";
    pub const FOREST: &str = "terrain.forest";
    pub const MOUNTAINS: &str = "terrain.mountains";
}

/// Unit type ids
pub mod units {
    /// Default member unit for colonies
    pub const COLONIST: &str = "unit.colonist";

    /// Default member unit for native camps
    pub const BRAVE: &str = "unit.brave";

    /// Default skill a native camp teaches
    pub const MASTER_FARMER: &str = "unit.master-farmer";

    pub const VETERAN_SOLDIER: &str = "unit.veteran-soldier";
    pub const MISSIONARY: &str = "unit.missionary";
}

/// Equipment ids
pub mod equipment {
    pub const MUSKETS: &str = "equipment.muskets";
    pub const HORSES: &str = "equipment.horses";
}

/// Nation ids
pub mod nations {
    /// Default owner of fixture colonies
    pub const DUTCH: &str = "nation.dutch";

    pub const ENGLISH: &str = "nation.english";
    pub const FRENCH: &str = "nation.french";
    pub const SPANISH: &str = "nation.spanish";

    /// Default owner of fixture camps
    pub const TUPI: &str = "nation.tupi";

    pub const CHEROKEE: &str = "nation.cherokee";
    pub const IROQUOIS: &str = "nation.iroquois";
    pub const AZTEC: &str = "nation.aztec";
}
