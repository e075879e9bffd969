//! Axis-aligned bounding box collision detection
//!
//! The player occupies a fixed x-band and a height band above its current
//! y; obstacles span their half-width around x and [0, height] vertically.
//! First touch ends the run - no restitution, no overlap tolerance.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::state::{Obstacle, Player};
use crate::consts::*;

/// An axis-aligned bounding box in world space
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    /// Strict overlap on both axes simultaneously. Boxes that merely
    /// touch edges do not collide.
    #[inline]
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.max.x > other.min.x
            && self.min.x < other.max.x
            && self.max.y > other.min.y
            && self.min.y < other.max.y
    }
}

/// The player's box at its current height
pub fn player_aabb(player: &Player) -> Aabb {
    Aabb::new(
        Vec2::new(PLAYER_MIN_X, player.y),
        Vec2::new(PLAYER_MAX_X, player.y + PLAYER_HEIGHT),
    )
}

/// An obstacle's box, rooted on the ground plane
pub fn obstacle_aabb(obstacle: &Obstacle) -> Aabb {
    Aabb::new(
        Vec2::new(obstacle.x - OBSTACLE_HALF_WIDTH, 0.0),
        Vec2::new(obstacle.x + OBSTACLE_HALF_WIDTH, obstacle.height),
    )
}

/// Test the player against every active obstacle, short-circuiting on the
/// first hit.
pub fn player_hits_any(player: &Player, obstacles: &[Obstacle]) -> bool {
    let player_box = player_aabb(player);
    obstacles
        .iter()
        .any(|obstacle| player_box.overlaps(&obstacle_aabb(obstacle)))
}
