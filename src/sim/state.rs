//! Game state and core simulation types
//!
//! Everything the host reads back for rendering lives here. All state is
//! serializable so a host can snapshot a run.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::tuning::Tuning;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Title state, nothing moves until a start input
    Waiting,
    /// Active gameplay
    Playing,
    /// Run ended by a collision; score is frozen
    GameOver,
}

/// Input signals delivered by the host (keyboard space/up-arrow or click)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputSignal {
    /// Begin a run from `Waiting`, or restart one from `GameOver`
    Start,
    /// Jump request while `Playing`
    Jump,
}

/// Host-facing notifications, drained once per frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// The floored integer score changed (HUD update cadence)
    ScoreChanged(u32),
    /// A collision ended the run; carries the frozen score
    GameOver { score: u32 },
}

/// The runner character
///
/// Only vertical motion is simulated; the world scrolls past a fixed
/// horizontal station (see `PLAYER_MIN_X`/`PLAYER_MAX_X`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Player {
    /// Height above the ground plane, never negative
    pub y: f32,
    /// Vertical velocity (positive = rising)
    pub velocity: f32,
    /// True while off the ground
    pub airborne: bool,
}

impl Default for Player {
    fn default() -> Self {
        Self {
            y: 0.0,
            velocity: 0.0,
            airborne: false,
        }
    }
}

impl Player {
    /// Apply the jump impulse. Dropped silently unless grounded, so held
    /// or repeated inputs cannot double-jump.
    pub fn request_jump(&mut self, tuning: &Tuning) {
        if !self.airborne {
            self.airborne = true;
            self.velocity = tuning.jump_impulse;
        }
    }

    /// Advance vertical motion by one semi-implicit Euler step.
    ///
    /// One step per frame, no sub-stepping: a very large delta can carry
    /// the player through an obstacle in a single step. The tick clamps
    /// deltas to `MAX_FRAME_DT` to bound that.
    pub fn integrate(&mut self, dt: f32, tuning: &Tuning) {
        if !self.airborne {
            return;
        }
        self.velocity -= tuning.gravity * dt;
        let unclamped = self.y + self.velocity * dt;
        self.y = unclamped.max(0.0);
        if unclamped <= 0.0 {
            // Landing: the ground is a hard floor
            self.airborne = false;
            self.velocity = 0.0;
        }
    }

    pub fn grounded(&self) -> bool {
        !self.airborne
    }
}

/// An obstacle scrolling toward the player
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    /// World-space x, decreasing over time
    pub x: f32,
    /// Fixed at spawn; bounding box spans [0, height] vertically
    pub height: f32,
}

/// A background cloud. Purely cosmetic, recycled rather than destroyed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Cloud {
    pub pos: Vec2,
}

/// Complete simulation state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Current phase
    pub phase: GamePhase,
    /// The runner
    pub player: Player,
    /// Active obstacles, ordered by spawn time (rightmost last)
    pub obstacles: Vec<Obstacle>,
    /// Fixed cloud pool
    pub clouds: Vec<Cloud>,
    /// Score accumulator; the HUD shows the floored integer
    pub score: f32,
    /// Current scroll speed, a step function of score
    pub speed: f32,
    /// Gameplay balance values
    pub tuning: Tuning,
    /// Spawner RNG; all randomness flows through here
    pub(crate) rng: Pcg32,
    /// Last integer score reported to the host
    pub(crate) last_reported: u32,
    /// Pending host notifications
    #[serde(skip)]
    pub(crate) events: Vec<GameEvent>,
}

impl GameState {
    /// Create a fresh state in `Waiting` with the given seed
    pub fn new(seed: u64) -> Self {
        Self::with_tuning(seed, Tuning::default())
    }

    /// Create a fresh state with explicit tuning (tests, data-driven hosts)
    pub fn with_tuning(seed: u64, tuning: Tuning) -> Self {
        let speed = tuning.base_speed;
        Self {
            seed,
            phase: GamePhase::Waiting,
            player: Player::default(),
            obstacles: INITIAL_OBSTACLES
                .iter()
                .map(|&(x, height)| Obstacle { x, height })
                .collect(),
            clouds: INITIAL_CLOUDS
                .iter()
                .map(|&(x, y)| Cloud {
                    pos: Vec2::new(x, y),
                })
                .collect(),
            score: 0.0,
            speed,
            tuning,
            rng: Pcg32::seed_from_u64(seed),
            last_reported: 0,
            events: Vec::new(),
        }
    }

    /// Dispatch a host input against the current phase.
    ///
    /// Invalid combinations (jump while waiting, start while playing,
    /// anything but restart in game over) are no-ops, never errors.
    pub fn handle_input(&mut self, signal: InputSignal) {
        match (self.phase, signal) {
            (GamePhase::Waiting | GamePhase::GameOver, InputSignal::Start) => {
                self.reset_run();
                self.phase = GamePhase::Playing;
                log::debug!("run started (seed {})", self.seed);
            }
            (GamePhase::Playing, InputSignal::Jump) => {
                self.player.request_jump(&self.tuning);
            }
            _ => {}
        }
    }

    /// Reinitialize everything a run owns. The cloud pool survives:
    /// decorations have no gameplay identity and the RNG keeps rolling.
    fn reset_run(&mut self) {
        self.player = Player::default();
        self.obstacles = INITIAL_OBSTACLES
            .iter()
            .map(|&(x, height)| Obstacle { x, height })
            .collect();
        self.score = 0.0;
        self.speed = self.tuning.base_speed;
        self.last_reported = 0;
        self.events.push(GameEvent::ScoreChanged(0));
    }

    /// Drain pending host notifications
    pub fn take_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}
