//! Data-driven game balance
//!
//! Defaults reproduce the classic feel; a JSON file can override any of
//! them without touching the sim.

use std::fs;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::sim::state::BlockSize;

/// Gameplay balance values
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Height of every stack layer
    pub block_height: f32,
    /// Footprint (width and depth) of the base block
    pub block_extent: f32,
    /// Distance the active block sweeps per tick
    pub sweep_speed: f32,
    /// Rounded signed anchor distance at which the sweep reverses
    pub sweep_bound: i32,
    /// Where a fresh active block starts along its sweep axis
    pub spawn_offset: f32,
    /// Mass given to falling fragments
    pub fragment_mass: f32,
    /// World gravity along y
    pub gravity_y: f32,
    /// Physics solver iterations
    pub solver_iterations: u32,
    /// Flat points per successful cut
    pub score_per_cut: u32,
    /// Camera height at round start
    pub camera_base_height: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            block_height: BLOCK_HEIGHT,
            block_extent: BLOCK_EXTENT,
            sweep_speed: SWEEP_SPEED,
            sweep_bound: SWEEP_BOUND,
            spawn_offset: SPAWN_OFFSET,
            fragment_mass: FRAGMENT_MASS,
            gravity_y: GRAVITY_Y,
            solver_iterations: SOLVER_ITERATIONS,
            score_per_cut: SCORE_PER_CUT,
            camera_base_height: CAMERA_BASE_HEIGHT,
        }
    }
}

impl Tuning {
    /// Dimensions of the base block and every fresh active block
    pub fn base_size(&self) -> BlockSize {
        BlockSize::new(self.block_extent, self.block_height, self.block_extent)
    }

    /// Load tuning from a JSON file, falling back to defaults on any error
    pub fn load_from(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(tuning) => {
                    log::info!("loaded tuning from {}", path.display());
                    tuning
                }
                Err(err) => {
                    log::warn!("invalid tuning file {}: {err}", path.display());
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("using default tuning");
                Self::default()
            }
        }
    }

    pub fn save_to(&self, path: &Path) -> io::Result<()> {
        let json = serde_json::to_string_pretty(self).map_err(io::Error::other)?;
        fs::write(path, json)
    }
}
