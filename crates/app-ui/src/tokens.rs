//! Design tokens for the range slider
//!
//! Static geometry, colour and elevation values for the showcase slider.
//! There is no theme switching; these are the only styles the control uses.

use serde::{Deserialize, Serialize};

/// Color value (hex string)
pub type Color = String;

// =============================================================================
// Geometry Tokens
// =============================================================================

/// Slider geometry in pixels
pub mod slider {
    /// Track length (250px)
    pub const TRACK_LENGTH: f64 = 250.0;
    /// Track thickness (4px)
    pub const TRACK_HEIGHT: f64 = 4.0;
    /// Track corner radius (2px)
    pub const TRACK_RADIUS: f64 = 2.0;
    /// Knob diameter (20px)
    pub const KNOB_SIZE: f64 = 20.0;
    /// Knob offset above the track, centring it on the rail (-8px)
    pub const KNOB_TOP: f64 = -8.0;
    /// Space between the value label and the track (20px)
    pub const LABEL_GAP: f64 = 20.0;
}

// =============================================================================
// Range Tokens
// =============================================================================

/// Default numeric domain of the showcase slider
pub mod range {
    /// Lower bound
    pub const MINIMUM: f64 = 0.0;
    /// Upper bound
    pub const MAXIMUM: f64 = 100.0;
    /// Initial value
    pub const INITIAL_VALUE: f64 = 50.0;
}

// =============================================================================
// Color Tokens
// =============================================================================

/// Slider colors
pub mod colors {
    /// Unfilled part of the track
    pub const TRACK: &str = "#D3D3D3";
    /// Filled part of the track
    pub const FILL: &str = "#6200EE";
    /// Knob
    pub const KNOB: &str = "#6200EE";
    /// Value label text
    pub const LABEL: &str = "#333333";
}

// =============================================================================
// Elevation Tokens
// =============================================================================

/// Shadow definition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shadow {
    /// Horizontal offset
    pub offset_x: f64,
    /// Vertical offset
    pub offset_y: f64,
    /// Blur radius
    pub radius: f64,
    /// Shadow opacity (0.0 - 1.0)
    pub opacity: f64,
    /// Android-style elevation
    pub elevation: f64,
    /// Shadow color
    pub color: Color,
}

impl Shadow {
    /// Create a new shadow
    pub fn new(offset_x: f64, offset_y: f64, radius: f64, opacity: f64, color: &str) -> Self {
        Self {
            offset_x,
            offset_y,
            radius,
            opacity,
            elevation: 0.0,
            color: color.to_string(),
        }
    }

    /// Set elevation
    pub fn with_elevation(mut self, elevation: f64) -> Self {
        self.elevation = elevation;
        self
    }
}

/// Shadow presets
pub mod shadows {
    use super::Shadow;

    /// Raised knob shadow
    pub fn knob() -> Shadow {
        Shadow::new(0.0, 2.0, 3.84, 0.25, "#000000").with_elevation(5.0)
    }
}
