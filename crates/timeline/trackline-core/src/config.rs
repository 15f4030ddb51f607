//! Authoring configuration shared by presets.

use serde::{Deserialize, Serialize};

/// Output surface extents in pixels; presets center elements against it.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Canvas {
    pub width: f64,
    pub height: f64,
}

impl Default for Canvas {
    fn default() -> Self {
        Self {
            width: 1920.0,
            height: 1080.0,
        }
    }
}

/// Defaults for [`crate::presets::image_track`].
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageDefaults {
    /// Seconds an image stays on screen when no duration is given.
    pub duration: f64,
    /// Seconds spent fading in, and again fading out.
    pub ramp: f64,
    pub peak_opacity: f64,
    pub max_width: f64,
    pub max_height: f64,
}

impl Default for ImageDefaults {
    fn default() -> Self {
        Self {
            duration: 50.0,
            ramp: 20.0,
            peak_opacity: 0.8,
            max_width: 1920.0,
            max_height: 1080.0,
        }
    }
}

/// Configuration for timeline authoring helpers.
/// Keep this minimal; expand as needed without breaking API.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub canvas: Canvas,
    #[serde(default)]
    pub image: ImageDefaults,
}

impl Config {
    /// Size `image` extents to the canvas so nothing overflows it.
    pub fn with_canvas(mut self, width: f64, height: f64) -> Self {
        self.canvas = Canvas { width, height };
        self.image.max_width = width;
        self.image.max_height = height;
        self
    }
}
