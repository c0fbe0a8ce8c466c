//! Fundamental geometric and simulation types.

use serde::{Deserialize, Serialize};

/// 2D position in screen space (pixels). x grows rightward, y downward,
/// matching the display's addressing.
pub use glam::Vec2;

/// 16-bit RGB565 color, the format the display collaborator consumes.
pub type Color = u16;

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SimTime {
    /// Current tick number (increments by 1 each tick).
    pub tick: u64,
    /// Elapsed simulation time in seconds.
    pub elapsed_secs: f64,
}

impl SimTime {
    /// Advance by one tick of the given duration.
    pub fn advance(&mut self, dt_secs: f64) {
        self.tick += 1;
        self.elapsed_secs += dt_secs;
    }
}

/// Round a screen-space coordinate to a drawable pixel.
pub fn px(v: f32) -> i32 {
    v.round() as i32
}
