//! Level state: tile grid, actor roster, and win/loss bookkeeping
//!
//! The grid is its own type so actors can query it while the actor list is
//! being mutably iterated (disjoint field borrows in the tick loop).

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::actor::{Actor, ActorId, ActorTag};
use crate::consts::FINISH_DELAY;

/// A static hazard baked into the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tile {
    Wall,
    Lava,
}

/// Terminal outcome of a level. Set once, never reverted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    Won,
    Lost,
}

/// What the player ran into, as reported to [`Level::player_touched`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Touched {
    Obstacle(Tile),
    Actor(ActorTag),
}

/// The static tile layout of a level.
///
/// Rows may be jagged; `width` is the widest row, and cells past the end
/// of a short row read as empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Grid {
    rows: Vec<Vec<Option<Tile>>>,
    width: usize,
    height: usize,
}

impl Grid {
    pub fn new(rows: Vec<Vec<Option<Tile>>>) -> Self {
        let height = rows.len();
        let width = rows.iter().map(Vec::len).max().unwrap_or(0);
        Self {
            rows,
            width,
            height,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Tile at integer cell coordinates; `None` for empty, off-row, and
    /// out-of-range cells.
    pub fn tile(&self, x: usize, y: usize) -> Option<Tile> {
        self.rows.get(y).and_then(|row| row.get(x)).copied().flatten()
    }

    /// What a box at `pos` with extent `size` runs into.
    ///
    /// Below the grid always reads as lava, even when the probe is also
    /// out of horizontal bounds; the other three sides of the world are
    /// walls. Inside the grid the first tagged cell covered by the box
    /// wins, scanning row-major. A box that only touches a cell boundary
    /// does not cover the cell behind it, so a unit box at (0, 1) in a
    /// two-row grid sits on the bottom row without reading as lava.
    pub fn obstacle_at(&self, pos: Vec2, size: Vec2) -> Option<Tile> {
        let x_start = pos.x.floor();
        let y_start = pos.y.floor();
        let x_end = (pos.x + size.x).ceil();
        let y_end = (pos.y + size.y).ceil();

        if y_end > self.height as f32 {
            return Some(Tile::Lava);
        }
        if x_start < 0.0 || x_end > self.width as f32 || y_start < 0.0 {
            return Some(Tile::Wall);
        }

        for y in y_start as usize..y_end as usize {
            for x in x_start as usize..x_end as usize {
                if let Some(tile) = self.tile(x, y) {
                    return Some(tile);
                }
            }
        }
        None
    }
}

/// A level in play: the static grid plus the mutable actor roster and the
/// win/loss state machine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Level {
    pub grid: Grid,
    pub actors: Vec<Actor>,
    /// Captured once at construction; never re-derived, even after the
    /// player actor is removed or another player-tagged actor appears.
    player: Option<ActorId>,
    pub status: Option<Status>,
    pub finish_delay: f32,
}

impl Default for Level {
    /// Empty grid, no actors.
    fn default() -> Self {
        Self::new(Grid::default(), Vec::new())
    }
}

impl Level {
    pub fn new(grid: Grid, actors: Vec<Actor>) -> Self {
        let player = actors
            .iter()
            .find(|a| a.tag == ActorTag::Player)
            .map(|a| a.id);
        Self {
            grid,
            actors,
            player,
            status: None,
            finish_delay: FINISH_DELAY,
        }
    }

    pub fn width(&self) -> usize {
        self.grid.width()
    }

    pub fn height(&self) -> usize {
        self.grid.height()
    }

    /// The player actor, if one was present at construction and is still
    /// in the roster.
    pub fn player(&self) -> Option<&Actor> {
        self.player
            .and_then(|id| self.actors.iter().find(|a| a.id == id))
    }

    /// The level is over once an outcome is set and the post-end display
    /// delay has run out.
    pub fn is_finished(&self) -> bool {
        self.status.is_some() && self.finish_delay < 0.0
    }

    /// First actor in list order overlapping `actor`. Never returns the
    /// probe actor itself (identity, not geometry).
    pub fn actor_at(&self, actor: &Actor) -> Option<&Actor> {
        self.actors.iter().find(|a| a.intersects(actor))
    }

    /// See [`Grid::obstacle_at`].
    pub fn obstacle_at(&self, pos: Vec2, size: Vec2) -> Option<Tile> {
        self.grid.obstacle_at(pos, size)
    }

    /// Drop the actor with the given id from the roster. No-op if absent.
    pub fn remove_actor(&mut self, id: ActorId) {
        if let Some(idx) = self.actors.iter().position(|a| a.id == id) {
            self.actors.remove(idx);
        }
    }

    /// True iff no remaining actor carries `tag`.
    pub fn no_more_actors(&self, tag: ActorTag) -> bool {
        !self.actors.iter().any(|a| a.tag == tag)
    }

    /// React to the player making contact with a hazard or pickup.
    ///
    /// Lava and fireballs lose the level; collecting the last coin wins
    /// it. Walls and other actors are harmless. Once an outcome is set
    /// this is a no-op - the first touch decides the level.
    pub fn player_touched(&mut self, touched: Touched, actor: Option<ActorId>) {
        if self.status.is_some() {
            return;
        }
        match touched {
            Touched::Obstacle(Tile::Lava) | Touched::Actor(ActorTag::Fireball) => {
                log::info!("player burned, level lost");
                self.status = Some(Status::Lost);
            }
            Touched::Actor(ActorTag::Coin) => {
                if let Some(id) = actor {
                    self.remove_actor(id);
                }
                if self.no_more_actors(ActorTag::Coin) {
                    log::info!("last coin collected, level won");
                    self.status = Some(Status::Won);
                }
            }
            _ => {}
        }
    }
}
