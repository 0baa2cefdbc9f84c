//! Scene/physics adapter contract
//!
//! The game core drives rendering and rigid-body simulation through this
//! trait and never interprets handles beyond pass-through. Mass-zero bodies
//! are immovable by the simulation; mass-positive bodies integrate under
//! gravity.

mod headless;

pub use headless::HeadlessEngine;

use glam::Vec3;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::sim::state::BlockSize;

/// Arena index into the adapter's render scene
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VisualHandle(pub u32);

/// Arena index into the adapter's rigid-body world
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BodyHandle(pub u32);

/// Fatal adapter conditions; everything per-tick is assumed infallible
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    /// No render surface or physics world; a round cannot be initialized
    #[error("scene/physics engine is unavailable")]
    Unavailable,
}

/// Capability contract the core expects from the host's scene graph and
/// rigid-body world.
pub trait Engine {
    /// False when the host has no render surface to draw into
    fn is_ready(&self) -> bool;

    /// Set the world gravity vector and constraint solver iteration count
    fn configure_world(&mut self, gravity: Vec3, solver_iterations: u32);

    /// Allocate a visual and a mass-zero (immovable) body at `position`
    fn create_static_body(&mut self, size: BlockSize, position: Vec3) -> (VisualHandle, BodyHandle);

    /// Allocate a visual and a gravity-affected body of the given mass
    fn create_dynamic_body(
        &mut self,
        size: BlockSize,
        position: Vec3,
        mass: f32,
    ) -> (VisualHandle, BodyHandle);

    fn remove_visual(&mut self, handle: VisualHandle);
    fn remove_body(&mut self, handle: BodyHandle);

    fn visual_position(&self, handle: VisualHandle) -> Vec3;
    fn set_visual_position(&mut self, handle: VisualHandle, position: Vec3);
    fn body_position(&self, handle: BodyHandle) -> Vec3;
    fn set_body_position(&mut self, handle: BodyHandle, position: Vec3);

    /// Rebuild a body's collision volume to the half-extents of `size`
    fn reshape_body(&mut self, handle: BodyHandle, size: BlockSize);

    /// Resize a visual to match a trimmed block
    fn rescale_visual(&mut self, handle: VisualHandle, size: BlockSize);

    /// Advance the rigid-body world by a fixed timestep
    fn step_world(&mut self, dt: f32);

    /// Copy a body's resulting position and orientation onto its visual
    fn sync_visual_from_body(&mut self, visual: VisualHandle, body: BodyHandle);

    /// Move the camera/view vertical offset
    fn set_view_height(&mut self, y: f32);

    /// Present the frame
    fn render(&mut self);
}
