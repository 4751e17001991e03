//! Per-render settings.

use serde::{Deserialize, Serialize};

/// Options supplied with every render call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Use the code's second colour for corners (and possibly the center).
    /// When false every tile uses the primary colour.
    pub two_color: bool,

    /// Opacity applied to every fill colour.
    pub alpha: u8,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            two_color: true,
            alpha: 255,
        }
    }
}

impl Settings {
    pub fn one_color(mut self) -> Self {
        self.two_color = false;
        self
    }

    pub fn with_alpha(mut self, alpha: u8) -> Self {
        self.alpha = alpha;
        self
    }
}
