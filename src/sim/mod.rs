//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order (actor list order)
//! - No rendering or platform dependencies

pub mod actor;
pub mod level;
pub mod parser;
pub mod tick;

pub use actor::{Actor, ActorId, ActorTag, Behavior};
pub use level::{Grid, Level, Status, Tile, Touched};
pub use parser::{LevelParser, RngState, SpawnFn};
pub use tick::tick;
