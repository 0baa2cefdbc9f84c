//! Fixed-step frame advance and player actions
//!
//! Actions (start/cut) mutate state the moment they arrive; the tick only
//! sweeps the active block, eases the camera, and advances physics. Both run
//! on the host's single render thread, so a tap always completes before the
//! next frame fires.

use log::{debug, info};

use super::cut::{CutOutcome, plan_cut};
use super::state::{GamePhase, GameState};
use crate::consts::SIM_DT;
use crate::display::Scoreboard;
use crate::engine::Engine;

/// Typed player intent, decided by the host before it reaches the core.
/// The core never inspects UI element identities.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerAction {
    /// Start button pressed
    Start,
    /// In-round tap/click
    Cut,
}

/// Handle a player action synchronously
pub fn apply_action(
    state: &mut GameState,
    engine: &mut dyn Engine,
    board: &mut dyn Scoreboard,
    action: PlayerAction,
) {
    match (action, state.phase) {
        (PlayerAction::Start, GamePhase::Idle) => start_round(state, engine, board),
        (PlayerAction::Cut, GamePhase::Running) => cut(state, engine, board),
        // Start while running and taps on the menu are no-ops
        (PlayerAction::Start, GamePhase::Running) | (PlayerAction::Cut, GamePhase::Idle) => {}
    }
}

fn start_round(state: &mut GameState, engine: &mut dyn Engine, board: &mut dyn Scoreboard) {
    state.reset_round(engine);
    state.phase = GamePhase::Running;
    board.show_score(state.score);
    board.hide_menu();
    info!("round started");
}

fn cut(state: &mut GameState, engine: &mut dyn Engine, board: &mut dyn Scoreboard) {
    let n = state.blocks.len();
    if n < 2 {
        return;
    }
    let anchor = state.blocks[n - 2].clone();
    let active = state.blocks[n - 1].clone();
    let Some(axis) = active.axis else { return };

    let outcome = plan_cut(
        axis,
        active.position,
        active.size,
        anchor.position,
        state.tuning.spawn_offset,
    );

    match outcome {
        CutOutcome::Miss => {
            // The round ends; blocks stay on screen until the next start
            state.last_score = state.score;
            state.score = 0;
            state.phase = GamePhase::Idle;
            board.show_last_score(state.last_score);
            board.hide_score();
            board.show_menu();
            info!("round over, last score {}", state.last_score);
        }
        CutOutcome::Hit(plan) => {
            state.moving_forward = false;
            state.score += state.tuning.score_per_cut;
            board.show_score(state.score);

            // Trim the kept block and recenter it over the anchor
            if let Some(top) = state.blocks.last_mut() {
                top.size = plan.kept_size;
                top.position = plan.kept_center;
                engine.set_visual_position(top.visual, top.position);
                engine.set_body_position(top.body, top.position);
                engine.rescale_visual(top.visual, plan.kept_size);
                engine.reshape_body(top.body, plan.kept_size);
            }

            // Discarded slice becomes a dynamic fragment at the top layer
            state.add_fall_block(
                engine,
                plan.fragment_x,
                plan.fragment_z,
                None,
                plan.fragment_size,
            );

            // Next active block sweeps in from the far edge on the other axis
            state.add_block(
                engine,
                plan.next_x,
                plan.next_z,
                None,
                plan.next_size,
                plan.next_axis,
            );

            debug!(
                "cut on {:?}: overlap {:.3}, stack {}",
                plan.axis,
                plan.overlap,
                state.blocks.len()
            );
        }
    }
}

/// Advance one frame while a round is running. Idle frames are no-ops.
pub fn tick(state: &mut GameState, engine: &mut dyn Engine) {
    if state.phase != GamePhase::Running {
        return;
    }
    let n = state.blocks.len();
    if n < 2 {
        return;
    }

    // Sweep flag captured before the move: exactly one branch runs per tick
    // even on the tick that flips the direction
    let forward = state.moving_forward;
    let speed = state.tuning.sweep_speed;
    let bound = state.tuning.sweep_bound;
    let anchor_position = state.blocks[n - 2].position;

    let top = &mut state.blocks[n - 1];
    if let Some(axis) = top.axis {
        let delta =
            (axis.component(top.position) - axis.component(anchor_position)).round() as i32;

        let step = if forward { -speed } else { speed };
        let moved = axis.component(top.position) + step;
        axis.set_component(&mut top.position, moved);
        engine.set_visual_position(top.visual, top.position);
        engine.set_body_position(top.body, top.position);

        if forward {
            if delta == -bound {
                state.moving_forward = false;
            }
        } else if delta == bound {
            state.moving_forward = true;
        }
    }

    // Camera eases up toward the reveal height at sweep speed
    if state.camera_height < state.camera_target() {
        state.camera_height += speed;
        engine.set_view_height(state.camera_height);
    }

    // Fixed-step physics regardless of wall-clock frame delta; fragments
    // inherit their body transforms, settled blocks stay kinematic
    engine.step_world(SIM_DT);
    for fragment in &state.fall_blocks {
        engine.sync_visual_from_body(fragment.visual, fragment.body);
    }
    engine.render();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::HeadlessEngine;
    use crate::sim::state::Axis;
    use crate::tuning::Tuning;
    use glam::Vec3;

    /// Scoreboard double that records every bridge call in order
    #[derive(Debug, Default)]
    struct RecordingBoard {
        calls: Vec<String>,
    }

    impl Scoreboard for RecordingBoard {
        fn show_score(&mut self, value: u32) {
            self.calls.push(format!("score:{value}"));
        }
        fn hide_score(&mut self) {
            self.calls.push("hide_score".into());
        }
        fn show_menu(&mut self) {
            self.calls.push("show_menu".into());
        }
        fn hide_menu(&mut self) {
            self.calls.push("hide_menu".into());
        }
        fn show_last_score(&mut self, value: u32) {
            self.calls.push(format!("last:{value}"));
        }
    }

    fn running() -> (GameState, HeadlessEngine, RecordingBoard) {
        let mut engine = HeadlessEngine::new();
        let mut state = GameState::new(Tuning::default(), &mut engine).expect("engine ready");
        let mut board = RecordingBoard::default();
        apply_action(&mut state, &mut engine, &mut board, PlayerAction::Start);
        (state, engine, board)
    }

    /// Park the active block at `along` on its sweep axis (both state and
    /// engine copies), as if the sweep had carried it there
    fn park_active(state: &mut GameState, engine: &mut HeadlessEngine, along: f32) {
        let top = state.blocks.last_mut().expect("active block");
        let axis = top.axis.expect("settled blocks have an axis");
        axis.set_component(&mut top.position, along);
        engine.set_visual_position(top.visual, top.position);
        engine.set_body_position(top.body, top.position);
    }

    #[test]
    fn test_start_enters_running_with_baseline() {
        let (state, _, board) = running();
        assert_eq!(state.phase, GamePhase::Running);
        assert_eq!(state.blocks.len(), 2);
        assert!(state.fall_blocks.is_empty());
        assert!(!state.moving_forward);
        assert_eq!(board.calls, vec!["score:0", "hide_menu"]);
    }

    #[test]
    fn test_start_while_running_is_noop() {
        let (mut state, mut engine, mut board) = running();
        park_active(&mut state, &mut engine, 1.0);
        apply_action(&mut state, &mut engine, &mut board, PlayerAction::Start);

        // No reset happened: the parked position survived
        let top = state.blocks.last().expect("active block");
        assert_eq!(top.position.x, 1.0);
    }

    #[test]
    fn test_tap_while_idle_is_ignored() {
        let mut engine = HeadlessEngine::new();
        let mut state = GameState::new(Tuning::default(), &mut engine).expect("engine ready");
        let mut board = RecordingBoard::default();

        apply_action(&mut state, &mut engine, &mut board, PlayerAction::Cut);
        assert_eq!(state.phase, GamePhase::Idle);
        assert_eq!(state.blocks.len(), 2);
        assert!(board.calls.is_empty());
    }

    #[test]
    fn test_idle_frame_is_noop() {
        let mut engine = HeadlessEngine::new();
        let mut state = GameState::new(Tuning::default(), &mut engine).expect("engine ready");
        tick(&mut state, &mut engine);
        assert_eq!(engine.steps(), 0);
    }

    #[test]
    fn test_tick_sweeps_active_block() {
        let (mut state, mut engine, _) = running();
        tick(&mut state, &mut engine);

        let top = state.active().expect("active block");
        // Sweep flag starts false, so the block moves toward positive x
        assert!((top.position.x - (-10.0 + 0.08)).abs() < 1e-6);
        assert_eq!(engine.visual_position(top.visual), top.position);
        assert_eq!(engine.body_position(top.body), top.position);
    }

    #[test]
    fn test_tick_steps_physics_with_fixed_dt() {
        let (mut state, mut engine, _) = running();
        tick(&mut state, &mut engine);
        assert_eq!(engine.last_step_dt(), Some(1.0 / 60.0));
        assert_eq!(engine.frames(), 1);
    }

    #[test]
    fn test_sweep_reverses_at_bounds_without_overshoot() {
        let (mut state, mut engine, _) = running();

        // From -10 the block climbs toward the +5 threshold
        let mut flipped_at = None;
        for i in 0..400 {
            tick(&mut state, &mut engine);
            if state.moving_forward {
                flipped_at = Some(i);
                break;
            }
        }
        let flipped_at = flipped_at.expect("sweep must reverse");

        let top = state.active().expect("active block");
        // The flip happens right as the rounded delta reaches +5
        assert!(top.position.x > 4.0 && top.position.x < 5.7, "{}", top.position.x);

        // Keep ticking: the sweep stays bounded and reverses again at -5
        let mut reversed_again = false;
        for _ in flipped_at..700 {
            tick(&mut state, &mut engine);
            let x = state.active().expect("active block").position.x;
            assert!(x.abs() < 5.7, "sweep escaped bounds: {x}");
            if !state.moving_forward {
                reversed_again = true;
                break;
            }
        }
        assert!(reversed_again);
    }

    #[test]
    fn test_successful_cut_grows_stack_and_score() {
        let (mut state, mut engine, mut board) = running();
        park_active(&mut state, &mut engine, 1.0);

        apply_action(&mut state, &mut engine, &mut board, PlayerAction::Cut);

        assert_eq!(state.phase, GamePhase::Running);
        assert_eq!(state.blocks.len(), 3);
        assert_eq!(state.fall_blocks.len(), 1);
        assert_eq!(state.score, 9);
        assert!(!state.moving_forward);

        // Kept block trimmed to the overlap and recentered
        let kept = &state.blocks[1];
        assert_eq!(kept.size.width, 2.0);
        assert_eq!(kept.position, Vec3::new(0.5, 1.0, 0.0));
        assert_eq!(engine.body_size(kept.body).width, 2.0);
        assert_eq!(engine.visual_size(kept.visual).width, 2.0);

        // Fragment carries the discarded slice at the same layer
        let fragment = &state.fall_blocks[0];
        assert_eq!(fragment.size.width, 1.0);
        assert_eq!(fragment.position, Vec3::new(2.0, 1.0, 0.0));
        assert_eq!(fragment.axis, None);

        // New active block: flipped axis, kept footprint, far-edge start
        let next = &state.blocks[2];
        assert_eq!(next.axis, Some(Axis::Z));
        assert_eq!(next.size.width, 2.0);
        assert_eq!(next.position, Vec3::new(0.5, 2.0, -10.0));

        assert!(board.calls.contains(&"score:9".to_string()));
    }

    #[test]
    fn test_axis_alternates_across_cuts() {
        let (mut state, mut engine, mut board) = running();

        for expected in [Axis::Z, Axis::X, Axis::Z] {
            park_active(&mut state, &mut engine, 0.2);
            apply_action(&mut state, &mut engine, &mut board, PlayerAction::Cut);
            let top = state.active().expect("active block");
            assert_eq!(top.axis, Some(expected));
        }
        assert_eq!(state.blocks.len(), 5);
        assert_eq!(state.fall_blocks.len(), 3);
        assert_eq!(state.score, 27);
    }

    #[test]
    fn test_miss_ends_round_and_publishes_last_score() {
        let (mut state, mut engine, mut board) = running();

        park_active(&mut state, &mut engine, 1.0);
        apply_action(&mut state, &mut engine, &mut board, PlayerAction::Cut);

        // The new active block sweeps on z against a depth-3 anchor;
        // parking past the full extent makes the overlap negative
        park_active(&mut state, &mut engine, -3.5);
        apply_action(&mut state, &mut engine, &mut board, PlayerAction::Cut);

        assert_eq!(state.phase, GamePhase::Idle);
        assert_eq!(state.last_score, 9);
        assert_eq!(state.score, 0);
        assert_eq!(
            &board.calls[board.calls.len() - 3..],
            &["last:9", "hide_score", "show_menu"]
        );

        // Restarting rebuilds the two-block baseline
        apply_action(&mut state, &mut engine, &mut board, PlayerAction::Start);
        assert_eq!(state.blocks.len(), 2);
        assert!(state.fall_blocks.is_empty());
        assert_eq!(state.last_score, 9);
    }

    #[test]
    fn test_fragment_falls_and_visual_follows() {
        let (mut state, mut engine, mut board) = running();
        park_active(&mut state, &mut engine, 1.0);
        apply_action(&mut state, &mut engine, &mut board, PlayerAction::Cut);

        let fragment = state.fall_blocks[0].clone();
        let start_y = engine.body_position(fragment.body).y;

        for _ in 0..30 {
            tick(&mut state, &mut engine);
        }

        let body_position = engine.body_position(fragment.body);
        assert!(body_position.y < start_y);
        assert_eq!(engine.visual_position(fragment.visual), body_position);
    }

    #[test]
    fn test_camera_eases_toward_reveal_height() {
        let (mut state, mut engine, mut board) = running();
        assert_eq!(state.camera_height, 4.0);

        // Two cuts raise the target by two block heights
        for _ in 0..2 {
            park_active(&mut state, &mut engine, 0.1);
            apply_action(&mut state, &mut engine, &mut board, PlayerAction::Cut);
        }
        assert_eq!(state.camera_target(), 6.0);

        for _ in 0..40 {
            tick(&mut state, &mut engine);
        }
        assert!(state.camera_height > 4.0);
        assert!(state.camera_height <= 6.0 + state.tuning.sweep_speed);
        assert_eq!(engine.view_height(), state.camera_height);
    }
}
