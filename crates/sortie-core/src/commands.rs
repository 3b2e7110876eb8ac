//! Per-tick player intent supplied by the external input layer.
//!
//! Devices are already polled, debounced and merged before the frame
//! reaches the simulation; the core treats it as the single authoritative
//! intent for the tick.

use serde::{Deserialize, Serialize};

/// Unified input vector for one tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputFrame {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
    pub main_fire: bool,
    pub sub_fire: bool,
    /// While held, the simulation does not advance.
    pub pause: bool,
}

impl InputFrame {
    /// No buttons held.
    pub fn idle() -> Self {
        Self::default()
    }

    /// Both weapons firing, no movement.
    pub fn firing() -> Self {
        Self {
            main_fire: true,
            sub_fire: true,
            ..Self::default()
        }
    }

    /// Horizontal intent: -1, 0 or 1.
    pub fn axis_x(&self) -> f64 {
        (self.right as i8 - self.left as i8) as f64
    }

    /// Vertical intent: -1 (up), 0 or 1 (down).
    pub fn axis_y(&self) -> f64 {
        (self.down as i8 - self.up as i8) as f64
    }
}
