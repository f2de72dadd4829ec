//! Actor entities and axis-aligned box geometry
//!
//! Every moving or collectible thing in a level is an [`Actor`]: a shared
//! geometry record (position, size, velocity) plus a dispatch tag and a
//! behavior variant driving autonomous movement. Identity is the `id`
//! field, never geometry - two actors standing in the same spot are still
//! two actors.

use std::f32::consts::TAU;

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::level::Grid;
use crate::consts::*;

/// Stable entity identifier, unique within one level.
pub type ActorId = u32;

/// Coarse actor classification the level reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActorTag {
    /// Plain actor with no gameplay meaning
    Generic,
    Fireball,
    Coin,
    Player,
}

impl ActorTag {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActorTag::Generic => "actor",
            ActorTag::Fireball => "fireball",
            ActorTag::Coin => "coin",
            ActorTag::Player => "player",
        }
    }
}

/// Autonomous movement variant - what [`Actor::act`] does each tick.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Behavior {
    /// No autonomous movement (plain actors; the player, which the front
    /// end moves directly)
    Inert,
    /// Straight flight, velocity reverses on obstacle contact
    Bounce,
    /// Straight flight, teleports back to its spawn point on contact
    Respawn { spawn: Vec2 },
    /// Vertical oscillation around a fixed anchor; obstacles are ignored
    Wobble { anchor: Vec2, phase: f32 },
}

/// An axis-aligned rectangular entity in the level.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Actor {
    pub id: ActorId,
    pub pos: Vec2,
    pub size: Vec2,
    pub speed: Vec2,
    pub tag: ActorTag,
    pub behavior: Behavior,
}

impl Actor {
    /// Plain inert actor.
    pub fn new(id: ActorId, pos: Vec2, size: Vec2, speed: Vec2) -> Self {
        Self {
            id,
            pos,
            size,
            speed,
            tag: ActorTag::Generic,
            behavior: Behavior::Inert,
        }
    }

    /// Free-flying hazard with a caller-chosen velocity.
    pub fn fireball(id: ActorId, pos: Vec2, speed: Vec2) -> Self {
        Self {
            id,
            pos,
            size: FIREBALL_SIZE,
            speed,
            tag: ActorTag::Fireball,
            behavior: Behavior::Bounce,
        }
    }

    /// Fireball patrolling left-right.
    pub fn horizontal_fireball(id: ActorId, pos: Vec2) -> Self {
        Self::fireball(id, pos, HORIZONTAL_FIREBALL_SPEED)
    }

    /// Fireball patrolling up-down.
    pub fn vertical_fireball(id: ActorId, pos: Vec2) -> Self {
        Self::fireball(id, pos, VERTICAL_FIREBALL_SPEED)
    }

    /// Fireball that falls from its spawn point and starts over on impact
    /// instead of bouncing.
    pub fn fire_rain(id: ActorId, pos: Vec2) -> Self {
        Self {
            behavior: Behavior::Respawn { spawn: pos },
            ..Self::fireball(id, pos, FIRE_RAIN_SPEED)
        }
    }

    /// Collectible coin bobbing around its spawn cell. The initial wobble
    /// phase comes from the caller's RNG so runs stay reproducible from a
    /// seed.
    pub fn coin(id: ActorId, pos: Vec2, rng: &mut Pcg32) -> Self {
        let pos = pos + COIN_SPAWN_OFFSET;
        Self {
            id,
            pos,
            size: COIN_SIZE,
            speed: Vec2::ZERO,
            tag: ActorTag::Coin,
            behavior: Behavior::Wobble {
                anchor: pos,
                phase: rng.random_range(0.0..TAU),
            },
        }
    }

    /// The player avatar. Movement is driven by the front end, not by
    /// [`Actor::act`].
    pub fn player(id: ActorId, pos: Vec2) -> Self {
        Self {
            id,
            pos: pos + PLAYER_SPAWN_OFFSET,
            size: PLAYER_SIZE,
            speed: Vec2::ZERO,
            tag: ActorTag::Player,
            behavior: Behavior::Inert,
        }
    }

    /// Left edge. The min/max form keeps `left <= right` valid even for
    /// negative size components.
    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x.min(self.pos.x + self.size.x)
    }

    /// Right edge.
    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x.max(self.pos.x + self.size.x)
    }

    /// Top edge (y grows downward).
    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y.min(self.pos.y + self.size.y)
    }

    /// Bottom edge.
    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y.max(self.pos.y + self.size.y)
    }

    /// Strict axis-aligned overlap test.
    ///
    /// An actor never intersects itself, and boxes that only share an edge
    /// or corner (zero overlap area) do not count.
    pub fn intersects(&self, other: &Actor) -> bool {
        if self.id == other.id {
            return false;
        }
        self.left() < other.right()
            && self.right() > other.left()
            && self.top() < other.bottom()
            && self.bottom() > other.top()
    }

    /// Where the actor wants to be after `time` elapses. Advances the
    /// wobble phase for oscillating actors.
    pub fn next_position(&mut self, time: f32) -> Vec2 {
        match &mut self.behavior {
            Behavior::Wobble { anchor, phase } => {
                *phase += COIN_WOBBLE_SPEED * time;
                *anchor + Vec2::new(0.0, phase.sin() * COIN_WOBBLE_DIST)
            }
            _ => self.pos + self.speed * time,
        }
    }

    /// Obstacle reaction: bouncers reverse velocity, rain restarts from
    /// its spawn point.
    fn handle_obstacle(&mut self) {
        match self.behavior {
            Behavior::Bounce => self.speed = -self.speed,
            Behavior::Respawn { spawn } => self.pos = spawn,
            Behavior::Inert | Behavior::Wobble { .. } => {}
        }
    }

    /// Advance autonomous movement by `time` against the level grid.
    pub fn act(&mut self, time: f32, grid: &Grid) {
        match self.behavior {
            Behavior::Bounce | Behavior::Respawn { .. } => {
                let next = self.next_position(time);
                if grid.obstacle_at(next, self.size).is_none() {
                    self.pos = next;
                } else {
                    self.handle_obstacle();
                }
            }
            Behavior::Wobble { .. } => {
                self.pos = self.next_position(time);
            }
            Behavior::Inert => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::level::Tile;
    use proptest::prelude::*;
    use rand::SeedableRng;

    fn rng() -> Pcg32 {
        Pcg32::seed_from_u64(7)
    }

    fn empty_grid(w: usize, h: usize) -> Grid {
        Grid::new(vec![vec![None; w]; h])
    }

    #[test]
    fn test_tag_strings() {
        assert_eq!(ActorTag::Generic.as_str(), "actor");
        assert_eq!(ActorTag::Fireball.as_str(), "fireball");
        assert_eq!(ActorTag::Coin.as_str(), "coin");
        assert_eq!(ActorTag::Player.as_str(), "player");
    }

    #[test]
    fn test_edges_positive_size() {
        let a = Actor::new(0, Vec2::new(2.0, 3.0), Vec2::new(4.0, 5.0), Vec2::ZERO);
        assert_eq!(a.left(), 2.0);
        assert_eq!(a.right(), 6.0);
        assert_eq!(a.top(), 3.0);
        assert_eq!(a.bottom(), 8.0);
    }

    #[test]
    fn test_edges_negative_size() {
        let a = Actor::new(0, Vec2::new(2.0, 3.0), Vec2::new(-4.0, -5.0), Vec2::ZERO);
        assert_eq!(a.left(), -2.0);
        assert_eq!(a.right(), 2.0);
        assert_eq!(a.top(), -2.0);
        assert_eq!(a.bottom(), 3.0);
    }

    #[test]
    fn test_never_intersects_itself() {
        let a = Actor::new(3, Vec2::ZERO, Vec2::ONE, Vec2::ZERO);
        assert!(!a.intersects(&a));
    }

    #[test]
    fn test_edge_touch_is_not_intersection() {
        let a = Actor::new(0, Vec2::new(0.0, 0.0), Vec2::ONE, Vec2::ZERO);
        let side = Actor::new(1, Vec2::new(1.0, 0.0), Vec2::ONE, Vec2::ZERO);
        let corner = Actor::new(2, Vec2::new(1.0, 1.0), Vec2::ONE, Vec2::ZERO);
        assert!(!a.intersects(&side));
        assert!(!a.intersects(&corner));
    }

    #[test]
    fn test_positive_area_overlap_intersects() {
        let a = Actor::new(0, Vec2::new(0.0, 0.0), Vec2::new(2.0, 2.0), Vec2::ZERO);
        let b = Actor::new(1, Vec2::new(1.5, 1.5), Vec2::ONE, Vec2::ZERO);
        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
    }

    #[test]
    fn test_contained_box_intersects() {
        let outer = Actor::new(0, Vec2::ZERO, Vec2::new(2.0, 2.0), Vec2::ZERO);
        let inner = Actor::new(1, Vec2::new(0.5, 0.5), Vec2::new(0.5, 0.5), Vec2::ZERO);
        assert!(outer.intersects(&inner));
        assert!(inner.intersects(&outer));
    }

    #[test]
    fn test_coin_geometry() {
        let c = Actor::coin(0, Vec2::new(5.0, 5.0), &mut rng());
        assert_eq!(c.pos, Vec2::new(5.2, 5.1));
        assert_eq!(c.size, COIN_SIZE);
        assert_eq!(c.tag, ActorTag::Coin);
        match c.behavior {
            Behavior::Wobble { anchor, phase } => {
                assert_eq!(anchor, c.pos);
                assert!((0.0..TAU).contains(&phase));
            }
            other => panic!("unexpected behavior {other:?}"),
        }
    }

    #[test]
    fn test_coin_bobs_around_anchor() {
        let mut c = Actor::coin(0, Vec2::new(5.0, 5.0), &mut rng());
        let anchor = c.pos;
        let grid = empty_grid(12, 12);
        for _ in 0..100 {
            c.act(0.02, &grid);
            assert_eq!(c.pos.x, anchor.x);
            assert!((c.pos.y - anchor.y).abs() <= COIN_WOBBLE_DIST + 1e-5);
        }
    }

    #[test]
    fn test_coin_ignores_obstacles() {
        // Coin buried in solid wall still oscillates
        let grid = Grid::new(vec![vec![Some(Tile::Wall); 4]; 4]);
        let mut c = Actor::coin(0, Vec2::new(1.0, 1.0), &mut rng());
        let anchor = c.pos;
        c.act(0.1, &grid);
        assert!((c.pos.y - anchor.y).abs() <= COIN_WOBBLE_DIST + 1e-5);
    }

    #[test]
    fn test_player_geometry() {
        let p = Actor::player(0, Vec2::new(3.0, 4.0));
        assert_eq!(p.pos, Vec2::new(3.0, 3.5));
        assert_eq!(p.size, PLAYER_SIZE);
        assert_eq!(p.speed, Vec2::ZERO);
        assert_eq!(p.tag, ActorTag::Player);
        assert_eq!(p.behavior, Behavior::Inert);
    }

    #[test]
    fn test_player_act_is_inert() {
        let mut p = Actor::player(0, Vec2::new(3.0, 3.0));
        let before = p.pos;
        p.act(1.0, &empty_grid(10, 10));
        assert_eq!(p.pos, before);
    }

    #[test]
    fn test_fireball_next_position() {
        let mut f = Actor::fireball(0, Vec2::new(5.0, 5.0), Vec2::new(1.0, 0.0));
        assert_eq!(f.next_position(5.0), Vec2::new(10.0, 5.0));
        // next_position alone must not move the actor
        assert_eq!(f.pos, Vec2::new(5.0, 5.0));
    }

    #[test]
    fn test_fireball_flies_through_open_space() {
        let mut f = Actor::horizontal_fireball(0, Vec2::new(1.0, 1.0));
        f.act(1.0, &empty_grid(10, 10));
        assert_eq!(f.pos, Vec2::new(3.0, 1.0));
    }

    #[test]
    fn test_fireball_bounces_off_wall() {
        // Wall column at x=3 blocks the path; the fireball stays put and
        // reverses, then flies back the way it came.
        let mut rows = vec![vec![None; 6]; 6];
        for row in rows.iter_mut() {
            row[3] = Some(Tile::Wall);
        }
        let grid = Grid::new(rows);

        let mut f = Actor::horizontal_fireball(0, Vec2::new(1.0, 1.0));
        f.act(0.5, &grid); // next (2,1) covers cell x=2..3: clear
        assert_eq!(f.pos, Vec2::new(2.0, 1.0));
        f.act(0.5, &grid); // next (3,1) covers wall column: bounce
        assert_eq!(f.pos, Vec2::new(2.0, 1.0));
        assert_eq!(f.speed, -HORIZONTAL_FIREBALL_SPEED);
        f.act(0.5, &grid);
        assert_eq!(f.pos, Vec2::new(1.0, 1.0));
    }

    #[test]
    fn test_fire_rain_restarts_from_spawn() {
        // Open shaft 1 cell wide; the bottom of the world reads as lava,
        // so the drop respawns once it would leave the grid.
        let grid = empty_grid(3, 6);
        let spawn = Vec2::new(1.0, 0.0);
        let mut f = Actor::fire_rain(0, spawn);
        assert_eq!(f.speed, FIRE_RAIN_SPEED);

        f.act(1.0, &grid); // next (1,3): clear
        assert_eq!(f.pos, Vec2::new(1.0, 3.0));
        f.act(1.0, &grid); // next (1,6): past the bottom, respawn
        assert_eq!(f.pos, spawn);
        // Speed is unchanged, it keeps falling
        assert_eq!(f.speed, FIRE_RAIN_SPEED);
    }

    proptest! {
        #[test]
        fn prop_vec_plus_is_componentwise(
            ax in -1e3f32..1e3, ay in -1e3f32..1e3,
            bx in -1e3f32..1e3, by in -1e3f32..1e3,
        ) {
            let sum = Vec2::new(ax, ay) + Vec2::new(bx, by);
            prop_assert_eq!(sum, Vec2::new(ax + bx, ay + by));
        }

        #[test]
        fn prop_vec_times_is_componentwise(
            x in -1e3f32..1e3, y in -1e3f32..1e3, k in -100f32..100.0,
        ) {
            let scaled = Vec2::new(x, y) * k;
            prop_assert_eq!(scaled, Vec2::new(x * k, y * k));
        }

        #[test]
        fn prop_edges_stay_ordered(
            px in -100f32..100.0, py in -100f32..100.0,
            sx in -10f32..10.0, sy in -10f32..10.0,
        ) {
            let a = Actor::new(0, Vec2::new(px, py), Vec2::new(sx, sy), Vec2::ZERO);
            prop_assert!(a.left() <= a.right());
            prop_assert!(a.top() <= a.bottom());
        }

        #[test]
        fn prop_intersection_is_symmetric(
            ax in -50f32..50.0, ay in -50f32..50.0,
            bx in -50f32..50.0, by in -50f32..50.0,
            w in 0.1f32..5.0, h in 0.1f32..5.0,
        ) {
            let a = Actor::new(0, Vec2::new(ax, ay), Vec2::new(w, h), Vec2::ZERO);
            let b = Actor::new(1, Vec2::new(bx, by), Vec2::new(w, h), Vec2::ZERO);
            prop_assert_eq!(a.intersects(&b), b.intersects(&a));
        }
    }
}
