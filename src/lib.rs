//! Stack Tower - a block-stacking arcade game core
//!
//! Core modules:
//! - `sim`: Deterministic game logic (state machine, cut geometry, fixed-step tick)
//! - `engine`: Scene/physics adapter contract plus a headless reference backend
//! - `display`: Scoreboard/menu bridge contract
//! - `tuning`: Data-driven game balance
//! - `highscores`: Round leaderboard
//! - `wallet`: Cosmetic wallet session (fully decoupled from the game core)

pub mod display;
pub mod engine;
pub mod highscores;
pub mod sim;
pub mod tuning;
pub mod wallet;

pub use engine::{Engine, EngineError, HeadlessEngine};
pub use highscores::HighScores;
pub use sim::{GamePhase, GameState, PlayerAction, apply_action, tick};
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Fixed physics timestep, stepped once per frame regardless of wall clock
    pub const SIM_DT: f32 = 1.0 / 60.0;

    /// Height of every stack layer
    pub const BLOCK_HEIGHT: f32 = 1.0;
    /// Footprint of the base block (width and depth)
    pub const BLOCK_EXTENT: f32 = 3.0;

    /// Distance the active block sweeps per tick
    pub const SWEEP_SPEED: f32 = 0.08;
    /// Rounded signed distance from the anchor at which the sweep reverses
    pub const SWEEP_BOUND: i32 = 5;
    /// Where a freshly spawned active block starts along its sweep axis
    pub const SPAWN_OFFSET: f32 = -10.0;

    /// Mass of a falling fragment (dynamic body)
    pub const FRAGMENT_MASS: f32 = 5.0;
    /// World gravity (y-down)
    pub const GRAVITY_Y: f32 = -10.0;
    /// Constraint solver iterations configured on the physics world
    pub const SOLVER_ITERATIONS: u32 = 40;

    /// Points awarded per successful cut (flat, not precision-scaled)
    pub const SCORE_PER_CUT: u32 = 9;

    /// Camera height at round start
    pub const CAMERA_BASE_HEIGHT: f32 = 4.0;
}
