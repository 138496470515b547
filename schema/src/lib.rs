// Wild Arena Schema - Shared type definitions
// This crate contains the static enums and data types that are shared between
// the main wild-arena crate and its data files: movement capabilities, arena
// tags, creature kinds, and base stat blocks.

// Re-export the main types
pub use arena::*;
pub use capability::*;
pub use creature_data::*;

pub mod arena;
pub mod capability;
pub mod creature_data;
