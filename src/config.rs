//! Render settings for a single invocation.

use std::path::PathBuf;

/// Side length (pixels) of the square canvas when none is given.
pub const DEFAULT_CANVAS_SIZE: i32 = 2000;

/// What to draw and where to write it.
///
/// `n`, `d` and `canvas_size` are taken as-is: zero, negative or huge values
/// give degenerate drawings, not errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoseConfig {
    /// Destination `.svg` file.
    pub output: PathBuf,
    /// Rose frequency; petal count follows from it.
    pub n: i32,
    /// Maurer sampling step in degrees.
    pub d: i32,
    pub canvas_size: i32,
    /// Overlay the continuous rose curve on the chords.
    pub show_curve: bool,
}

impl RoseConfig {
    pub fn new(output: impl Into<PathBuf>, n: i32, d: i32) -> Self {
        Self {
            output: output.into(),
            n,
            d,
            canvas_size: DEFAULT_CANVAS_SIZE,
            show_curve: false,
        }
    }

    pub fn with_canvas_size(mut self, canvas_size: i32) -> Self {
        self.canvas_size = canvas_size;
        self
    }

    pub fn with_curve(mut self, show_curve: bool) -> Self {
        self.show_curve = show_curve;
        self
    }
}

/// A required setting was not supplied by any source.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("Option '{0}' has no value")]
    MissingValue(&'static str),
}
