//! Scoreboard/menu display bridge
//!
//! The core publishes score and menu visibility through this trait; the host
//! owns the actual widgets (DOM nodes, terminal lines, whatever).

/// Display contract the core writes to
pub trait Scoreboard {
    fn show_score(&mut self, value: u32);
    fn hide_score(&mut self);
    fn show_menu(&mut self);
    fn hide_menu(&mut self);
    /// Publish the finished round's score next to the menu
    fn show_last_score(&mut self, value: u32);
}

/// Discards every update; for headless runs and benchmarks
#[derive(Debug, Clone, Copy, Default)]
pub struct NullScoreboard;

impl Scoreboard for NullScoreboard {
    fn show_score(&mut self, _value: u32) {}
    fn hide_score(&mut self) {}
    fn show_menu(&mut self) {}
    fn hide_menu(&mut self) {}
    fn show_last_score(&mut self, _value: u32) {}
}

/// Routes updates through the `log` facade; used by the demo binary
#[derive(Debug, Clone, Copy, Default)]
pub struct LogScoreboard;

impl Scoreboard for LogScoreboard {
    fn show_score(&mut self, value: u32) {
        log::info!("score: {value}");
    }

    fn hide_score(&mut self) {
        log::debug!("score hidden");
    }

    fn show_menu(&mut self) {
        log::debug!("menu shown");
    }

    fn hide_menu(&mut self) {
        log::debug!("menu hidden");
    }

    fn show_last_score(&mut self, value: u32) {
        log::info!("last score: {value}");
    }
}
