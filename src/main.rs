//! Dino Runner headless demo
//!
//! Drives the simulation core with the attract-mode autopilot at a fixed
//! 60 Hz until the run ends, logging score milestones along the way. Usage:
//!
//! ```text
//! dino-runner [seed] [--tuning balance.json]
//! ```

use dino_runner::sim::{GameEvent, GamePhase, GameState, TickInput, tick};
use dino_runner::tuning::Tuning;

const DEMO_DT: f32 = 1.0 / 60.0;
/// Safety cap so a lucky autopilot cannot run forever
const MAX_DEMO_SECONDS: f32 = 300.0;

fn main() {
    env_logger::init();

    let mut seed = 42u64;
    let mut tuning = Tuning::default();

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        if arg == "--tuning" {
            match args.next() {
                Some(path) => tuning = load_tuning(&path),
                None => log::warn!("--tuning given without a file; using defaults"),
            }
        } else if let Ok(value) = arg.parse() {
            seed = value;
        } else {
            log::warn!("ignoring unrecognized argument {arg:?}");
        }
    }

    log::info!("starting demo run (seed {seed})");
    let mut state = GameState::with_tuning(seed, tuning);
    let input = TickInput {
        autopilot: true,
        ..Default::default()
    };

    let mut frames = 0u32;
    let frame_cap = (MAX_DEMO_SECONDS / DEMO_DT) as u32;
    loop {
        tick(&mut state, &input, DEMO_DT);
        frames += 1;

        for event in state.take_events() {
            match event {
                GameEvent::ScoreChanged(score) if score.is_multiple_of(50) && score > 0 => {
                    log::info!("score {score}, speed {:.1}", state.speed);
                }
                GameEvent::ScoreChanged(_) => {}
                GameEvent::GameOver { score } => {
                    log::info!("run over after {:.1} s, final score {score}", frames as f32 * DEMO_DT);
                }
            }
        }

        if state.phase == GamePhase::GameOver || frames >= frame_cap {
            break;
        }
    }

    if state.phase == GamePhase::Playing {
        log::info!(
            "demo cap reached at score {} after {MAX_DEMO_SECONDS} s",
            state.score as u32
        );
    }

    match serde_json::to_string(&state) {
        Ok(snapshot) => println!("{snapshot}"),
        Err(err) => log::error!("failed to serialize final state: {err}"),
    }
}

/// Read a tuning override file, falling back to defaults on any failure
fn load_tuning(path: &str) -> Tuning {
    match std::fs::read_to_string(path) {
        Ok(json) => match Tuning::from_json(&json) {
            Ok(tuning) => {
                log::info!("loaded tuning overrides from {path}");
                tuning
            }
            Err(err) => {
                log::warn!("bad tuning file {path}: {err}; using defaults");
                Tuning::default()
            }
        },
        Err(err) => {
            log::warn!("cannot read tuning file {path}: {err}; using defaults");
            Tuning::default()
        }
    }
}
