//! Textual level plans
//!
//! A plan is a slice of text rows. Each character is either a static tile
//! (`x` wall, `!` lava), a symbol the caller mapped to an actor
//! constructor, or empty space. Unknown symbols are silently skipped for
//! actor creation and read as empty cells in the grid, so a plan can carry
//! annotations without breaking the parse.

use std::collections::HashMap;

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::actor::{Actor, ActorId};
use super::level::{Grid, Level, Tile};

/// RNG state wrapper for reproducible runs: every random draw in a level
/// (coin phases) flows from one explicit seed.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RngState {
    pub seed: u64,
}

impl RngState {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    pub fn to_rng(&self) -> Pcg32 {
        Pcg32::seed_from_u64(self.seed)
    }
}

/// Constructor invoked for a plan symbol: receives the fresh actor id, the
/// plan cell the symbol sits in, and the parser's RNG.
pub type SpawnFn = fn(ActorId, Vec2, &mut Pcg32) -> Actor;

/// Translates plan text into a playable [`Level`].
#[derive(Default)]
pub struct LevelParser {
    actors: HashMap<char, SpawnFn>,
}

impl LevelParser {
    pub fn new(actors: HashMap<char, SpawnFn>) -> Self {
        Self { actors }
    }

    /// Parser for the standard symbol set: `@` player, `o` coin, `=`
    /// horizontal fireball, `|` vertical fireball, `v` fire rain.
    pub fn standard() -> Self {
        let mut actors: HashMap<char, SpawnFn> = HashMap::new();
        actors.insert('@', |id, pos, _| Actor::player(id, pos));
        actors.insert('o', |id, pos, rng| Actor::coin(id, pos, rng));
        actors.insert('=', |id, pos, _| Actor::horizontal_fireball(id, pos));
        actors.insert('|', |id, pos, _| Actor::vertical_fireball(id, pos));
        actors.insert('v', |id, pos, _| Actor::fire_rain(id, pos));
        Self { actors }
    }

    /// Static tiles only. Rows keep their own length; the grid takes the
    /// widest.
    pub fn create_grid(&self, plan: &[&str]) -> Grid {
        let rows = plan
            .iter()
            .map(|row| {
                row.chars()
                    .map(|symbol| match symbol {
                        'x' => Some(Tile::Wall),
                        '!' => Some(Tile::Lava),
                        _ => None,
                    })
                    .collect()
            })
            .collect();
        Grid::new(rows)
    }

    /// Actors only. Every plan cell whose symbol has a table entry spawns
    /// an actor at that cell, ids running in row-major scan order.
    pub fn create_actors(&self, plan: &[&str], rng: &mut Pcg32) -> Vec<Actor> {
        let mut actors = Vec::new();
        for (row_idx, row) in plan.iter().enumerate() {
            for (col_idx, symbol) in row.chars().enumerate() {
                if let Some(spawn) = self.actors.get(&symbol) {
                    let id = actors.len() as ActorId;
                    let cell = Vec2::new(col_idx as f32, row_idx as f32);
                    let actor = spawn(id, cell, rng);
                    log::debug!("spawned {} at ({col_idx}, {row_idx})", actor.tag.as_str());
                    actors.push(actor);
                }
            }
        }
        actors
    }

    /// Parse a full plan into a level.
    pub fn parse(&self, plan: &[&str], rng: &mut Pcg32) -> Level {
        let grid = self.create_grid(plan);
        let actors = self.create_actors(plan, rng);
        log::debug!(
            "parsed level: {}x{} grid, {} actors",
            grid.width(),
            grid.height(),
            actors.len()
        );
        Level::new(grid, actors)
    }
}
