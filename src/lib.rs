//! Dino Runner - an endless-runner mini-game simulation core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (state machine, physics, spawning, collisions)
//! - `tuning`: Data-driven game balance
//!
//! The crate performs no rendering and owns no event loop: a host render
//! surface calls [`sim::tick`] once per frame with the elapsed seconds and
//! reads back player/obstacle/cloud positions to draw.

pub mod sim;
pub mod tuning;

pub use sim::{GameEvent, GamePhase, GameState, InputSignal, TickInput, tick};
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Hard cap on the per-frame delta (seconds). A stalled host would
    /// otherwise hand the integrator a step large enough to carry the
    /// player clean through an obstacle.
    pub const MAX_FRAME_DT: f32 = 0.05;

    /// Downward acceleration while airborne (world units/s²)
    pub const GRAVITY: f32 = 30.0;
    /// Vertical velocity applied by a grounded jump (world units/s)
    pub const JUMP_IMPULSE: f32 = 12.0;

    /// Points accumulated per second of play
    pub const SCORE_RATE: f32 = 10.0;
    /// Scroll speed at score 0 (world units/s)
    pub const BASE_SPEED: f32 = 5.0;
    /// Scroll speed gained at each score step
    pub const SPEED_INCREMENT: f32 = 0.5;
    /// Score interval between speed steps
    pub const SPEED_STEP_SCORE: f32 = 100.0;

    /// Player bounding box: fixed x-band, height above current y
    pub const PLAYER_MIN_X: f32 = -3.4;
    pub const PLAYER_MAX_X: f32 = -2.2;
    pub const PLAYER_HEIGHT: f32 = 1.2;

    /// Obstacle bounding box half-width
    pub const OBSTACLE_HALF_WIDTH: f32 = 0.2;
    /// Obstacles behind this x are off-screen and removed
    pub const OBSTACLE_CULL_X: f32 = -5.0;
    /// A new obstacle is appended once the rightmost falls below this x
    pub const SPAWN_TRIGGER_X: f32 = 8.0;
    /// Minimum spacing between consecutive obstacles
    pub const OBSTACLE_GAP: f32 = 5.0;
    /// Extra random spacing on top of the gap
    pub const OBSTACLE_GAP_JITTER: f32 = 4.0;
    /// Obstacle height range. The max must stay under the jump apex
    /// (JUMP_IMPULSE² / 2·GRAVITY = 2.4) so every obstacle is clearable.
    pub const OBSTACLE_MIN_HEIGHT: f32 = 0.6;
    pub const OBSTACLE_MAX_HEIGHT: f32 = 1.2;
    /// The track ahead is never emptier than this
    pub const MIN_OBSTACLES: usize = 2;
    /// Spawn anchor when the active set is somehow empty
    pub const FALLBACK_SPAWN_X: f32 = 5.0;
    /// Obstacle layout at the start of every run: (x, height)
    pub const INITIAL_OBSTACLES: [(f32, f32); 2] = [(8.0, 1.0), (14.0, 0.7)];

    /// Clouds scroll at this fraction of the main speed (parallax)
    pub const CLOUD_PARALLAX: f32 = 0.3;
    /// Clouds behind this x are recycled to the right edge
    pub const CLOUD_CULL_X: f32 = -5.0;
    /// Recycled clouds reappear at this x plus jitter
    pub const CLOUD_RESPAWN_X: f32 = 25.0;
    pub const CLOUD_RESPAWN_JITTER: f32 = 5.0;
    /// Vertical band clouds are recycled into
    pub const CLOUD_MIN_Y: f32 = 3.0;
    pub const CLOUD_MAX_Y: f32 = 5.5;
    /// Cloud pool at startup: (x, y). Fixed cardinality, never grows.
    pub const INITIAL_CLOUDS: [(f32, f32); 3] = [(5.0, 4.0), (12.0, 5.0), (20.0, 3.5)];

    /// Autopilot jumps when the next obstacle is this many seconds away
    pub const AUTOPILOT_LEAD_TIME: f32 = 0.35;
}
