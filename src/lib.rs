//! Lavaleap - a deterministic 2D platformer simulation core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (actor geometry, level state, plan
//!   parsing, fixed-step tick)
//!
//! Rendering, input, and I/O are deliberately absent. A front end owns the
//! frame loop: it drives [`sim::tick`], moves the player from its own input
//! handling, and draws whatever the [`Level`] contains.

pub mod sim;

pub use sim::{
    Actor, ActorId, ActorTag, Behavior, Grid, Level, LevelParser, RngState, SpawnFn, Status, Tile,
    Touched, tick,
};

/// Game configuration constants
pub mod consts {
    use glam::Vec2;

    /// Suggested fixed timestep for front ends driving [`crate::sim::tick`]
    pub const SIM_DT: f32 = 1.0 / 60.0;

    /// Post-end display delay before a finished level reports done
    pub const FINISH_DELAY: f32 = 1.0;

    /// Fireball defaults
    pub const FIREBALL_SIZE: Vec2 = Vec2::new(1.0, 1.0);
    pub const HORIZONTAL_FIREBALL_SPEED: Vec2 = Vec2::new(2.0, 0.0);
    pub const VERTICAL_FIREBALL_SPEED: Vec2 = Vec2::new(0.0, 2.0);
    pub const FIRE_RAIN_SPEED: Vec2 = Vec2::new(0.0, 3.0);

    /// Coin defaults - coins sit slightly inset in their spawn cell and
    /// bob vertically around that anchor
    pub const COIN_SPAWN_OFFSET: Vec2 = Vec2::new(0.2, 0.1);
    pub const COIN_SIZE: Vec2 = Vec2::new(0.6, 0.6);
    pub const COIN_WOBBLE_SPEED: f32 = 8.0;
    pub const COIN_WOBBLE_DIST: f32 = 0.07;

    /// Player defaults - the avatar is 1.5 cells tall, so it spawns half a
    /// cell above its plan cell to stand on the row below
    pub const PLAYER_SPAWN_OFFSET: Vec2 = Vec2::new(0.0, -0.5);
    pub const PLAYER_SIZE: Vec2 = Vec2::new(0.8, 1.5);
}
