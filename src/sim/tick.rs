//! Fixed timestep simulation tick
//!
//! Advances a level deterministically: actors act in list order, then the
//! player's contacts are resolved through [`Level::player_touched`].
//! Scheduling the tick - and moving the player from input - belongs to the
//! front end.

use super::level::{Level, Touched};

/// Advance the level by `time` (seconds).
///
/// The world keeps animating after the outcome is decided; the finish
/// delay counts down so a front end can show the final moment before
/// [`Level::is_finished`] turns true.
pub fn tick(level: &mut Level, time: f32) {
    if level.status.is_some() {
        level.finish_delay -= time;
    }

    for actor in &mut level.actors {
        actor.act(time, &level.grid);
    }

    let Some(player) = level.player().copied() else {
        return;
    };

    if let Some(other) = level.actor_at(&player) {
        let (tag, id) = (other.tag, other.id);
        level.player_touched(Touched::Actor(tag), Some(id));
    }
    if let Some(tile) = level.grid.obstacle_at(player.pos, player.size) {
        level.player_touched(Touched::Obstacle(tile), None);
    }
}
