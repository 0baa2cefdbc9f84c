//! Stack Tower demo entry point
//!
//! Runs the game core against the headless engine with a scripted player:
//! it taps on a fixed cadence, so each round stacks a few blocks and then
//! misses once the kept footprint shrinks below the tap error.

use std::time::{SystemTime, UNIX_EPOCH};

use log::info;

use stack_tower::display::LogScoreboard;
use stack_tower::engine::HeadlessEngine;
use stack_tower::sim::{GamePhase, PlayerAction, apply_action, tick};
use stack_tower::{GameState, HighScores, Tuning};

/// Safety cap so a pathological cadence can't spin forever
const MAX_TICKS_PER_ROUND: u32 = 100_000;

fn unix_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut engine = HeadlessEngine::new();
    let mut board = LogScoreboard;
    let tuning = Tuning::default();

    let mut state = match GameState::new(tuning, &mut engine) {
        Ok(state) => state,
        Err(err) => {
            eprintln!("cannot initialize game: {err}");
            std::process::exit(1);
        }
    };

    let mut scores = HighScores::new();

    for round in 0u32..3 {
        // Vary the cadence a little so the rounds end at different heights
        let cadence = 131 + 23 * round;
        info!("demo round {} (tap cadence {} ticks)", round + 1, cadence);

        apply_action(&mut state, &mut engine, &mut board, PlayerAction::Start);

        let mut ticks = 0;
        let mut since_tap = 0;
        while state.phase == GamePhase::Running && ticks < MAX_TICKS_PER_ROUND {
            tick(&mut state, &mut engine);
            ticks += 1;
            since_tap += 1;
            if since_tap >= cadence {
                apply_action(&mut state, &mut engine, &mut board, PlayerAction::Cut);
                since_tap = 0;
            }
        }

        let height = state.blocks.len() as u32;
        info!(
            "round {} finished after {} ticks: score {}, stack height {}",
            round + 1,
            ticks,
            state.last_score,
            height
        );
        scores.add_score(state.last_score, height, unix_millis());
    }

    for (i, entry) in scores.entries.iter().enumerate() {
        info!(
            "#{}: {} points ({} blocks)",
            i + 1,
            entry.score,
            entry.stack_height
        );
    }
}
