//! Data-driven game balance
//!
//! Every "feel" constant the simulation consumes lives here so hosts and
//! tests can override them without touching code. Defaults mirror the
//! named constants in [`crate::consts`].

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Gameplay balance values, loadable from JSON
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Downward acceleration while airborne (world units/s²)
    pub gravity: f32,
    /// Vertical velocity applied by a grounded jump
    pub jump_impulse: f32,
    /// Points accumulated per second of play
    pub score_rate: f32,
    /// Scroll speed at score 0
    pub base_speed: f32,
    /// Speed gained per score step
    pub speed_increment: f32,
    /// Score interval between speed steps
    pub speed_step: f32,
    /// Minimum spacing between consecutive obstacles
    pub obstacle_gap: f32,
    /// Extra random spacing on top of the gap
    pub obstacle_gap_jitter: f32,
    /// Spawned obstacle height range
    pub obstacle_min_height: f32,
    pub obstacle_max_height: f32,
    /// A new obstacle is appended once the rightmost falls below this x
    pub spawn_trigger_x: f32,
    /// Clouds scroll at this fraction of the main speed
    pub cloud_parallax: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            jump_impulse: JUMP_IMPULSE,
            score_rate: SCORE_RATE,
            base_speed: BASE_SPEED,
            speed_increment: SPEED_INCREMENT,
            speed_step: SPEED_STEP_SCORE,
            obstacle_gap: OBSTACLE_GAP,
            obstacle_gap_jitter: OBSTACLE_GAP_JITTER,
            obstacle_min_height: OBSTACLE_MIN_HEIGHT,
            obstacle_max_height: OBSTACLE_MAX_HEIGHT,
            spawn_trigger_x: SPAWN_TRIGGER_X,
            cloud_parallax: CLOUD_PARALLAX,
        }
    }
}

impl Tuning {
    /// Parse a tuning override file. Missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let tuning: Self = serde_json::from_str(json)?;
        if tuning.obstacle_max_height >= tuning.max_clearable_height() {
            log::warn!(
                "obstacle_max_height {} is at or above the jump apex {}; runs will be unwinnable",
                tuning.obstacle_max_height,
                tuning.max_clearable_height()
            );
        }
        Ok(tuning)
    }

    /// Height of the jump apex, v²/2g. Spawned obstacles must stay under
    /// this or the run cannot be survived.
    pub fn max_clearable_height(&self) -> f32 {
        self.jump_impulse * self.jump_impulse / (2.0 * self.gravity)
    }
}
