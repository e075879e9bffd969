//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Advanced only through [`tick`] and [`GameState::handle_input`]
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod collision;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::{Aabb, obstacle_aabb, player_aabb, player_hits_any};
pub use spawn::{advance_clouds, advance_obstacles};
pub use state::{Cloud, GameEvent, GamePhase, GameState, InputSignal, Obstacle, Player};
pub use tick::{TickInput, speed_for_score, tick};
