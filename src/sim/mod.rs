//! Deterministic game core
//!
//! All gameplay logic lives here. The module stays pure with respect to the
//! host: fixed timestep only, no rendering or platform dependencies beyond
//! the [`Engine`](crate::engine::Engine) and
//! [`Scoreboard`](crate::display::Scoreboard) traits it is handed.

pub mod cut;
pub mod state;
pub mod tick;

pub use cut::{CutOutcome, CutPlan, plan_cut};
pub use state::{Axis, Block, BlockSize, GamePhase, GameState};
pub use tick::{PlayerAction, apply_action, tick};
