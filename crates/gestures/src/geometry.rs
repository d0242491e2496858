//! Track geometry
//!
//! Fixed pixel geometry of a slider: the rail length and the knob size.
//! The knob can travel `track_length - knob_size` pixels.

use serde::Serialize;
use thiserror::Error;

/// Geometry errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeometryError {
    /// A length was NaN or infinite
    #[error("Track geometry must be finite (track {track_length}, knob {knob_size})")]
    NonFinite {
        /// Track length that was supplied
        track_length: f64,
        /// Knob size that was supplied
        knob_size: f64,
    },

    /// A length was negative
    #[error("Track geometry must not be negative (track {track_length}, knob {knob_size})")]
    Negative {
        /// Track length that was supplied
        track_length: f64,
        /// Knob size that was supplied
        knob_size: f64,
    },

    /// The knob does not fit on the track
    #[error("Knob size {knob_size} exceeds track length {track_length}")]
    KnobLargerThanTrack {
        /// Track length that was supplied
        track_length: f64,
        /// Knob size that was supplied
        knob_size: f64,
    },
}

/// Fixed pixel geometry of the control
///
/// Immutable for the lifetime of the control. A track exactly as long as the
/// knob is accepted as degenerate: the knob has no room to travel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackGeometry {
    track_length: f64,
    knob_size: f64,
}

impl TrackGeometry {
    /// Create a validated geometry
    pub fn new(track_length: f64, knob_size: f64) -> Result<Self, GeometryError> {
        if !track_length.is_finite() || !knob_size.is_finite() {
            return Err(GeometryError::NonFinite {
                track_length,
                knob_size,
            });
        }
        if track_length < 0.0 || knob_size < 0.0 {
            return Err(GeometryError::Negative {
                track_length,
                knob_size,
            });
        }
        if knob_size > track_length {
            return Err(GeometryError::KnobLargerThanTrack {
                track_length,
                knob_size,
            });
        }

        let geometry = Self {
            track_length,
            knob_size,
        };
        if geometry.is_degenerate() {
            tracing::warn!(
                "Degenerate track geometry (track {}, knob {}); knob cannot move",
                track_length,
                knob_size
            );
        }
        Ok(geometry)
    }

    /// Track length in pixels
    pub fn track_length(&self) -> f64 {
        self.track_length
    }

    /// Knob size in pixels
    pub fn knob_size(&self) -> f64 {
        self.knob_size
    }

    /// Distance the knob can travel
    pub fn travel(&self) -> f64 {
        self.track_length - self.knob_size
    }

    /// Whether the knob has no room to move
    pub fn is_degenerate(&self) -> bool {
        self.travel() <= 0.0
    }

    /// Clamp an offset onto the track
    pub fn clamp_offset(&self, candidate: f64) -> f64 {
        candidate.min(self.travel()).max(0.0)
    }

    /// Whether an offset lies on the track
    pub fn contains_offset(&self, offset: f64) -> bool {
        (0.0..=self.travel()).contains(&offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==========================================================================
    // Construction
    // ==========================================================================

    #[test]
    fn test_geometry_new() {
        let geometry = TrackGeometry::new(250.0, 20.0).unwrap();
        assert_eq!(geometry.track_length(), 250.0);
        assert_eq!(geometry.knob_size(), 20.0);
        assert_eq!(geometry.travel(), 230.0);
        assert!(!geometry.is_degenerate());
    }

    #[test]
    fn test_geometry_degenerate_is_accepted() {
        let geometry = TrackGeometry::new(20.0, 20.0).unwrap();
        assert!(geometry.is_degenerate());
        assert_eq!(geometry.travel(), 0.0);
    }

    #[test]
    fn test_geometry_rejects_oversized_knob() {
        assert!(matches!(
            TrackGeometry::new(10.0, 20.0),
            Err(GeometryError::KnobLargerThanTrack { .. })
        ));
    }

    #[test]
    fn test_geometry_rejects_negative_and_non_finite() {
        assert!(matches!(
            TrackGeometry::new(250.0, -1.0),
            Err(GeometryError::Negative { .. })
        ));
        assert!(matches!(
            TrackGeometry::new(f64::NAN, 20.0),
            Err(GeometryError::NonFinite { .. })
        ));
        assert!(matches!(
            TrackGeometry::new(f64::INFINITY, 20.0),
            Err(GeometryError::NonFinite { .. })
        ));
    }

    // ==========================================================================
    // Clamping
    // ==========================================================================

    #[test]
    fn test_clamp_offset() {
        let geometry = TrackGeometry::new(250.0, 20.0).unwrap();
        assert_eq!(geometry.clamp_offset(-50.0), 0.0);
        assert_eq!(geometry.clamp_offset(115.0), 115.0);
        assert_eq!(geometry.clamp_offset(500.0), 230.0);
    }

    #[test]
    fn test_contains_offset() {
        let geometry = TrackGeometry::new(250.0, 20.0).unwrap();
        assert!(geometry.contains_offset(0.0));
        assert!(geometry.contains_offset(230.0));
        assert!(!geometry.contains_offset(230.5));
        assert!(!geometry.contains_offset(-0.1));
    }
}
