//! Headless reference engine
//!
//! Software stand-in for a real scene/physics backend: visuals are plain
//! transforms, bodies integrate under gravity with no collision response.
//! Drives the demo binary and every sim test.

use glam::{Quat, Vec3};

use super::{BodyHandle, Engine, VisualHandle};
use crate::sim::state::BlockSize;

#[derive(Debug, Clone)]
struct VisualSlot {
    position: Vec3,
    rotation: Quat,
    size: BlockSize,
}

#[derive(Debug, Clone)]
struct BodySlot {
    position: Vec3,
    rotation: Quat,
    velocity: Vec3,
    size: BlockSize,
    mass: f32,
}

/// In-memory engine backed by slot arenas. Released slots stay `None` so
/// handles are never reused within a session.
#[derive(Debug)]
pub struct HeadlessEngine {
    ready: bool,
    gravity: Vec3,
    solver_iterations: u32,
    visuals: Vec<Option<VisualSlot>>,
    bodies: Vec<Option<BodySlot>>,
    last_step_dt: Option<f32>,
    steps: u64,
    frames: u64,
    view_height: f32,
}

impl HeadlessEngine {
    pub fn new() -> Self {
        Self {
            ready: true,
            gravity: Vec3::ZERO,
            solver_iterations: 0,
            visuals: Vec::new(),
            bodies: Vec::new(),
            last_step_dt: None,
            steps: 0,
            frames: 0,
            view_height: 0.0,
        }
    }

    /// An engine with no surface to draw into; rounds must refuse to start
    pub fn offline() -> Self {
        Self {
            ready: false,
            ..Self::new()
        }
    }

    pub fn last_step_dt(&self) -> Option<f32> {
        self.last_step_dt
    }

    pub fn steps(&self) -> u64 {
        self.steps
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn view_height(&self) -> f32 {
        self.view_height
    }

    pub fn gravity(&self) -> Vec3 {
        self.gravity
    }

    pub fn solver_iterations(&self) -> u32 {
        self.solver_iterations
    }

    /// Count of visuals not yet released
    pub fn live_visuals(&self) -> usize {
        self.visuals.iter().flatten().count()
    }

    /// Count of bodies not yet released
    pub fn live_bodies(&self) -> usize {
        self.bodies.iter().flatten().count()
    }

    pub fn body_velocity(&self, handle: BodyHandle) -> Vec3 {
        self.body(handle).velocity
    }

    pub fn body_mass(&self, handle: BodyHandle) -> f32 {
        self.body(handle).mass
    }

    pub fn body_size(&self, handle: BodyHandle) -> BlockSize {
        self.body(handle).size
    }

    pub fn visual_size(&self, handle: VisualHandle) -> BlockSize {
        self.visual(handle).size
    }

    fn visual(&self, handle: VisualHandle) -> &VisualSlot {
        self.visuals[handle.0 as usize]
            .as_ref()
            .expect("visual handle released")
    }

    fn visual_mut(&mut self, handle: VisualHandle) -> &mut VisualSlot {
        self.visuals[handle.0 as usize]
            .as_mut()
            .expect("visual handle released")
    }

    fn body(&self, handle: BodyHandle) -> &BodySlot {
        self.bodies[handle.0 as usize]
            .as_ref()
            .expect("body handle released")
    }

    fn body_mut(&mut self, handle: BodyHandle) -> &mut BodySlot {
        self.bodies[handle.0 as usize]
            .as_mut()
            .expect("body handle released")
    }

    fn create(&mut self, size: BlockSize, position: Vec3, mass: f32) -> (VisualHandle, BodyHandle) {
        let visual = VisualHandle(self.visuals.len() as u32);
        self.visuals.push(Some(VisualSlot {
            position,
            rotation: Quat::IDENTITY,
            size,
        }));

        let body = BodyHandle(self.bodies.len() as u32);
        self.bodies.push(Some(BodySlot {
            position,
            rotation: Quat::IDENTITY,
            velocity: Vec3::ZERO,
            size,
            mass,
        }));

        (visual, body)
    }
}

impl Default for HeadlessEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for HeadlessEngine {
    fn is_ready(&self) -> bool {
        self.ready
    }

    fn configure_world(&mut self, gravity: Vec3, solver_iterations: u32) {
        self.gravity = gravity;
        self.solver_iterations = solver_iterations;
    }

    fn create_static_body(&mut self, size: BlockSize, position: Vec3) -> (VisualHandle, BodyHandle) {
        self.create(size, position, 0.0)
    }

    fn create_dynamic_body(
        &mut self,
        size: BlockSize,
        position: Vec3,
        mass: f32,
    ) -> (VisualHandle, BodyHandle) {
        self.create(size, position, mass)
    }

    fn remove_visual(&mut self, handle: VisualHandle) {
        self.visuals[handle.0 as usize] = None;
    }

    fn remove_body(&mut self, handle: BodyHandle) {
        self.bodies[handle.0 as usize] = None;
    }

    fn visual_position(&self, handle: VisualHandle) -> Vec3 {
        self.visual(handle).position
    }

    fn set_visual_position(&mut self, handle: VisualHandle, position: Vec3) {
        self.visual_mut(handle).position = position;
    }

    fn body_position(&self, handle: BodyHandle) -> Vec3 {
        self.body(handle).position
    }

    fn set_body_position(&mut self, handle: BodyHandle, position: Vec3) {
        self.body_mut(handle).position = position;
    }

    fn reshape_body(&mut self, handle: BodyHandle, size: BlockSize) {
        self.body_mut(handle).size = size;
    }

    fn rescale_visual(&mut self, handle: VisualHandle, size: BlockSize) {
        self.visual_mut(handle).size = size;
    }

    fn step_world(&mut self, dt: f32) {
        self.last_step_dt = Some(dt);
        self.steps += 1;

        let gravity = self.gravity;
        for slot in self.bodies.iter_mut().flatten() {
            // Mass-zero bodies are kinematically driven; only dynamic
            // bodies integrate.
            if slot.mass > 0.0 {
                slot.velocity += gravity * dt;
                slot.position += slot.velocity * dt;
            }
        }
    }

    fn sync_visual_from_body(&mut self, visual: VisualHandle, body: BodyHandle) {
        let (position, rotation) = {
            let slot = self.body(body);
            (slot.position, slot.rotation)
        };
        let target = self.visual_mut(visual);
        target.position = position;
        target.rotation = rotation;
    }

    fn set_view_height(&mut self, y: f32) {
        self.view_height = y;
    }

    fn render(&mut self) {
        self.frames += 1;
    }
}
