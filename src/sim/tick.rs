//! Per-frame simulation update
//!
//! The host render surface calls [`tick`] once per rendered frame with the
//! elapsed seconds. All mutation happens here (and in input dispatch), in a
//! fixed order: integrate motion, advance score and speed, update
//! obstacles, update decorations, test collisions.

use super::state::{GameEvent, GamePhase, GameState, InputSignal};
use super::{collision, spawn};
use crate::consts::*;

/// Input flags for a single frame
///
/// `start` and `jump` are one-shot presses: the host sets them when the key
/// or pointer event fires and clears them after the frame is ticked.
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Start a run from `Waiting`, or restart from `GameOver`
    pub start: bool,
    /// Jump request while `Playing`
    pub jump: bool,
    /// Attract/demo mode: the tick synthesizes its own start and jump
    /// presses, playing the game unattended
    pub autopilot: bool,
}

/// Advance the simulation by one frame.
///
/// The delta is clamped to `MAX_FRAME_DT` so a stalled host (backgrounded
/// tab, debugger pause) cannot produce an integration step large enough to
/// skip collisions.
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    let dt = dt.min(MAX_FRAME_DT);

    let mut input = input.clone();
    if input.autopilot {
        drive_autopilot(state, &mut input);
    }

    if input.start {
        state.handle_input(InputSignal::Start);
    }
    if input.jump {
        state.handle_input(InputSignal::Jump);
    }

    if state.phase != GamePhase::Playing {
        return;
    }

    state.player.integrate(dt, &state.tuning);

    // Score runs unthrottled; the host only hears about integer changes
    state.score += dt * state.tuning.score_rate;
    state.speed = speed_for_score(state.score, &state.tuning);
    let hud_score = state.score as u32;
    if hud_score != state.last_reported {
        state.last_reported = hud_score;
        state.events.push(GameEvent::ScoreChanged(hud_score));
    }

    spawn::advance_obstacles(
        &mut state.obstacles,
        &mut state.rng,
        state.speed,
        dt,
        &state.tuning,
    );
    spawn::advance_clouds(
        &mut state.clouds,
        &mut state.rng,
        state.speed,
        dt,
        &state.tuning,
    );

    if collision::player_hits_any(&state.player, &state.obstacles) {
        state.phase = GamePhase::GameOver;
        state.events.push(GameEvent::GameOver { score: hud_score });
        log::info!("game over at score {hud_score}");
    }
}

/// Scroll speed as a step function of score: it ticks up at every
/// `speed_step` milestone rather than climbing continuously.
pub fn speed_for_score(score: f32, tuning: &crate::tuning::Tuning) -> f32 {
    tuning.base_speed + (score / tuning.speed_step).floor() * tuning.speed_increment
}

/// Synthesize inputs for attract mode: press start whenever a run can
/// begin, jump once the next obstacle is a fixed flight-time away.
fn drive_autopilot(state: &GameState, input: &mut TickInput) {
    match state.phase {
        GamePhase::Waiting | GamePhase::GameOver => input.start = true,
        GamePhase::Playing => {
            if state.player.grounded() {
                let front = PLAYER_MAX_X;
                let lead = state.speed * AUTOPILOT_LEAD_TIME;
                let threat = state.obstacles.iter().any(|o| {
                    let leading_edge = o.x - OBSTACLE_HALF_WIDTH;
                    leading_edge > front && leading_edge <= front + lead
                });
                if threat {
                    input.jump = true;
                }
            }
        }
    }
}
