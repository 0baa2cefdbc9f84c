//! Cut geometry
//!
//! Pure functions: given the active block and its anchor, decide whether a
//! tap hits and, if so, what the kept block, the discarded fragment, and the
//! next active block look like. [`tick::apply_action`](super::tick) applies
//! the plan through the engine; nothing here touches handles.

use glam::Vec3;

use super::state::{Axis, BlockSize};

/// Outcome of a tap while the round is running
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CutOutcome {
    Hit(CutPlan),
    /// Negative overlap: the active block cleared the anchor entirely
    Miss,
}

/// Everything a successful cut changes, computed up front
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CutPlan {
    /// Axis the cut happened on
    pub axis: Axis,
    /// Raw signed offset of the active block from the anchor along `axis`
    pub delta: f32,
    /// Shared extent; becomes the kept block's size along `axis`
    pub overlap: f32,
    pub kept_size: BlockSize,
    /// Active block's center after recentering over the anchor
    pub kept_center: Vec3,
    pub fragment_size: BlockSize,
    pub fragment_x: f32,
    pub fragment_z: f32,
    /// The next active block inherits the kept footprint and sweeps on the
    /// flipped axis
    pub next_axis: Axis,
    pub next_size: BlockSize,
    pub next_x: f32,
    pub next_z: f32,
}

/// Compute the cut for the current tap. `spawn_offset` is where the next
/// active block starts along its (flipped) sweep axis.
pub fn plan_cut(
    axis: Axis,
    active_center: Vec3,
    active_size: BlockSize,
    anchor_center: Vec3,
    spawn_offset: f32,
) -> CutOutcome {
    let delta = axis.component(active_center) - axis.component(anchor_center);
    let abs_delta = delta.abs();
    let extent = axis.extent(active_size);
    let overlap = extent - abs_delta;

    if overlap < 0.0 {
        return CutOutcome::Miss;
    }

    let kept_size = match axis {
        Axis::X => BlockSize::new(overlap, active_size.height, active_size.depth),
        Axis::Z => BlockSize::new(active_size.width, active_size.height, overlap),
    };

    let recentered = axis.component(active_center) - delta / 2.0;
    let mut kept_center = active_center;
    axis.set_component(&mut kept_center, recentered);

    // A perfectly centered tap sheds a zero-width slice in place
    let side = if delta == 0.0 { 0.0 } else { delta.signum() };
    let fragment_offset = (overlap / 2.0 + abs_delta / 2.0) * side;
    let fragment_along = recentered + fragment_offset;

    let fragment_size = match axis {
        Axis::X => BlockSize::new(abs_delta, active_size.height, kept_size.depth),
        Axis::Z => BlockSize::new(kept_size.width, active_size.height, abs_delta),
    };
    let (fragment_x, fragment_z) = match axis {
        Axis::X => (fragment_along, kept_center.z),
        Axis::Z => (kept_center.x, fragment_along),
    };

    // Same horizontal offset as the kept block on the cut axis, parked at
    // the far edge on the new one so every sweep starts from the same side
    let (next_x, next_z) = match axis {
        Axis::X => (recentered, spawn_offset),
        Axis::Z => (spawn_offset, recentered),
    };

    CutOutcome::Hit(CutPlan {
        axis,
        delta,
        overlap,
        kept_size,
        kept_center,
        fragment_size,
        fragment_x,
        fragment_z,
        next_axis: axis.flipped(),
        next_size: kept_size,
        next_x,
        next_z,
    })
}
