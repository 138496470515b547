// In: src/lib.rs

//! Wild Arena Battle Engine
//!
//! A turn-based creature battle simulator: rosters of creatures with
//! persistent base stats and battle-scoped current stats fight in randomly
//! drawn arenas that gate participation by movement capability.

// --- MODULE DECLARATIONS ---
// This declares the module hierarchy for the crate.
pub mod arena;
pub mod creature;
pub mod errors;
pub mod prefab_rosters;
pub mod roster;
pub mod trainer;

// --- PUBLIC API RE-EXPORTS ---
// This section defines the public-facing API of the `wild-arena` crate,
// making it easy for users to import the most important types directly.

// --- From the `schema` crate ---
// Re-export the core static definitions.
pub use schema::{Arena, BaseStats, Capability, Kind};

// --- From this crate's modules (`src/`) ---

// Core battle engine types.
pub use arena::engine::{resolve_outcome, ArenaRng, BattleArena, BattleReport, MAX_ROUNDS};
pub use arena::events::{BattleEvent, EventBus};
pub use arena::history::{BattleHistory, BattleOutcome, DrawCondition, VictoryCondition};

// Core runtime types for a battle.
pub use creature::{CreatureHandle, CreatureInst, CreatureStatus};
pub use roster::{Roster, RosterHandle, RosterStatus};
pub use trainer::Trainer;

// Demo roster access.
pub use prefab_rosters::{
    available_roster_ids, create_roster_from_template, demo_alpha_roster, demo_bravo_roster,
    get_roster_info, CreatureTemplate, RosterTemplate,
};

// Crate-specific error and result types.
pub use errors::{
    ArenaError, ArenaResult, RosterDataError, RosterDataResult, RosterSide, SimulationError,
    SimulationResult,
};
