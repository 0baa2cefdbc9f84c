//! Game state and stack entities
//!
//! Owns the settled-block list, falling fragments, and round bookkeeping.
//! All engine access goes through the [`Engine`] trait so the state machine
//! is testable against a headless backend.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::engine::{BodyHandle, Engine, EngineError, VisualHandle};
use crate::tuning::Tuning;

/// Horizontal axis a block was laid along and can still be trimmed on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Axis {
    X,
    Z,
}

impl Axis {
    /// The axis the next active block will sweep on
    pub fn flipped(self) -> Self {
        match self {
            Axis::X => Axis::Z,
            Axis::Z => Axis::X,
        }
    }

    pub fn component(self, v: Vec3) -> f32 {
        match self {
            Axis::X => v.x,
            Axis::Z => v.z,
        }
    }

    pub fn set_component(self, v: &mut Vec3, value: f32) {
        match self {
            Axis::X => v.x = value,
            Axis::Z => v.z = value,
        }
    }

    /// Extent of `size` along this axis (width for X, depth for Z)
    pub fn extent(self, size: BlockSize) -> f32 {
        match self {
            Axis::X => size.width,
            Axis::Z => size.depth,
        }
    }
}

/// Full box dimensions of one block; the physics shape uses the half-extents
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BlockSize {
    pub width: f32,
    pub height: f32,
    pub depth: f32,
}

impl BlockSize {
    pub fn new(width: f32, height: f32, depth: f32) -> Self {
        Self {
            width,
            height,
            depth,
        }
    }

    pub fn half_extents(self) -> Vec3 {
        Vec3::new(self.width / 2.0, self.height / 2.0, self.depth / 2.0)
    }
}

/// One stack segment or falling fragment
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Block {
    /// World-space center
    pub position: Vec3,
    pub size: BlockSize,
    /// Lay/trim axis; `None` for fragments, which only move under physics
    pub axis: Option<Axis>,
    pub visual: VisualHandle,
    pub body: BodyHandle,
}

/// Current phase of play
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Menu shown, no active round
    Idle,
    /// Round in progress
    Running,
}

/// Complete game state
///
/// The settled-block list is ordered by spawn order: the last entry is the
/// active (still-sweeping) block, the one before it the anchor it is
/// measured against. After `reset_round` the list holds exactly the base
/// block and the first active block.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub phase: GamePhase,
    /// Sweep direction: `true` while the active block moves toward negative
    /// coordinates
    pub moving_forward: bool,
    pub blocks: Vec<Block>,
    /// Discarded slices, one per successful cut since the last reset
    pub fall_blocks: Vec<Block>,
    pub score: u32,
    /// Score of the previous round, published on miss
    pub last_score: u32,
    /// Camera/view vertical offset, eased upward as the stack grows
    pub camera_height: f32,
    pub tuning: Tuning,
}

impl GameState {
    /// Build the initial two-block scene. Fails when the adapter has no
    /// render surface, since the core cannot function without it.
    pub fn new(tuning: Tuning, engine: &mut dyn Engine) -> Result<Self, EngineError> {
        if !engine.is_ready() {
            return Err(EngineError::Unavailable);
        }

        let mut state = Self {
            phase: GamePhase::Idle,
            moving_forward: false,
            blocks: Vec::new(),
            fall_blocks: Vec::new(),
            score: 0,
            last_score: 0,
            camera_height: tuning.camera_base_height,
            tuning,
        };
        state.reset_round(engine);
        Ok(state)
    }

    /// The still-sweeping (or awaiting-cut) top block
    pub fn active(&self) -> Option<&Block> {
        self.blocks.last()
    }

    /// The settled block the active one is measured against
    pub fn anchor(&self) -> Option<&Block> {
        self.blocks
            .len()
            .checked_sub(2)
            .and_then(|i| self.blocks.get(i))
    }

    /// Camera height the view eases toward as layers accumulate
    pub fn camera_target(&self) -> f32 {
        self.tuning.block_height * self.blocks.len().saturating_sub(2) as f32
            + self.tuning.camera_base_height
    }

    /// Append a settled (static) block. A missing vertical coordinate places
    /// it at `block_height * settled_count`.
    pub fn add_block(
        &mut self,
        engine: &mut dyn Engine,
        x: f32,
        z: f32,
        y: Option<f32>,
        size: BlockSize,
        axis: Axis,
    ) {
        let y = y.unwrap_or(self.tuning.block_height * self.blocks.len() as f32);
        let mut block = self.create_block(engine, Vec3::new(x, y, z), size, false);
        block.axis = Some(axis);
        self.blocks.push(block);
    }

    /// Append a falling (dynamic) fragment. A missing vertical coordinate
    /// places it level with the current top block.
    pub fn add_fall_block(
        &mut self,
        engine: &mut dyn Engine,
        x: f32,
        z: f32,
        y: Option<f32>,
        size: BlockSize,
    ) {
        let y = y.unwrap_or(self.tuning.block_height * (self.blocks.len() as f32 - 1.0));
        let block = self.create_block(engine, Vec3::new(x, y, z), size, true);
        self.fall_blocks.push(block);
    }

    /// Release every block, rebuild the two-block baseline, reset the view,
    /// and reconfigure the physics world. Idempotent.
    pub fn reset_round(&mut self, engine: &mut dyn Engine) {
        for block in self.blocks.drain(..).chain(self.fall_blocks.drain(..)) {
            engine.remove_visual(block.visual);
            engine.remove_body(block.body);
        }

        self.moving_forward = false;
        self.phase = GamePhase::Idle;
        self.score = 0;

        let base = self.tuning.base_size();
        // Base layer, trimmable on z by the block above it
        self.add_block(engine, 0.0, 0.0, None, base, Axis::Z);
        // First active block sweeps in from the far edge on x
        self.add_block(engine, self.tuning.spawn_offset, 0.0, None, base, Axis::X);

        self.camera_height = self.tuning.camera_base_height;
        engine.set_view_height(self.camera_height);
        engine.configure_world(
            Vec3::new(0.0, self.tuning.gravity_y, 0.0),
            self.tuning.solver_iterations,
        );
    }

    fn create_block(
        &self,
        engine: &mut dyn Engine,
        position: Vec3,
        size: BlockSize,
        falling: bool,
    ) -> Block {
        let (visual, body) = if falling {
            engine.create_dynamic_body(size, position, self.tuning.fragment_mass)
        } else {
            engine.create_static_body(size, position)
        };
        Block {
            position,
            size,
            axis: None,
            visual,
            body,
        }
    }
}
