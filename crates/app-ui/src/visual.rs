//! Slider visuals
//!
//! Pure rendering description of the slider: where the knob sits and how
//! much of the track is filled. The rendering layer draws whatever these
//! functions return; no animation primitive holds slider state.

use gestures::TrackGeometry;
use serde::{Deserialize, Serialize};

use crate::tokens::{colors, shadows, slider, Color, Shadow};

/// Knob position and fill width for one frame
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SliderVisual {
    /// Knob translation from the start of the track
    pub knob_x: f64,
    /// Width of the filled part of the track
    pub fill_width: f64,
}

/// Describe the visuals for a knob offset
///
/// The fill spans the whole track when the knob is at the far end.
pub fn offset_to_visual(offset: f64, geometry: &TrackGeometry) -> SliderVisual {
    let knob_x = geometry.clamp_offset(offset);
    let fill_width = if geometry.is_degenerate() {
        0.0
    } else {
        knob_x / geometry.travel() * geometry.track_length()
    };
    SliderVisual { knob_x, fill_width }
}

/// Computed slider styles
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SliderStyles {
    /// Track length
    pub track_width: f64,
    /// Track thickness
    pub track_height: f64,
    /// Track corner radius
    pub track_radius: f64,
    /// Track color
    pub track_color: Color,
    /// Fill color
    pub fill_color: Color,
    /// Knob diameter
    pub knob_size: f64,
    /// Knob corner radius
    pub knob_radius: f64,
    /// Knob offset above the track
    pub knob_top: f64,
    /// Knob color
    pub knob_color: Color,
    /// Knob shadow
    pub knob_shadow: Shadow,
    /// Value label text color
    pub label_color: Color,
    /// Space between the value label and the track
    pub label_gap: f64,
}

impl SliderStyles {
    /// Compute styles for a geometry
    pub fn for_geometry(geometry: &TrackGeometry) -> Self {
        let knob_size = geometry.knob_size();
        Self {
            track_width: geometry.track_length(),
            track_height: slider::TRACK_HEIGHT,
            track_radius: slider::TRACK_RADIUS,
            track_color: colors::TRACK.to_string(),
            fill_color: colors::FILL.to_string(),
            knob_size,
            knob_radius: knob_size / 2.0,
            knob_top: -(knob_size - slider::TRACK_HEIGHT) / 2.0,
            knob_color: colors::KNOB.to_string(),
            knob_shadow: shadows::knob(),
            label_color: colors::LABEL.to_string(),
            label_gap: slider::LABEL_GAP,
        }
    }
}
