//! Range mapping
//!
//! Pure conversions between a knob offset on the track and a value in the
//! caller's numeric range. The mapping is linear:
//!
//! ```text
//! value = minimum + (offset / (track_length - knob_size)) * (maximum - minimum)
//! ```
//!
//! When the track leaves the knob no room to travel the mapping collapses to
//! `minimum` instead of dividing by zero.

use gestures::TrackGeometry;
use serde::Serialize;
use thiserror::Error;

/// Range errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RangeError {
    /// `maximum` is not strictly greater than `minimum`
    #[error("Maximum {maximum} must be greater than minimum {minimum}")]
    InvalidRange {
        /// Supplied minimum
        minimum: f64,
        /// Supplied maximum
        maximum: f64,
    },

    /// A bound was NaN or infinite
    #[error("Range bounds must be finite (minimum {minimum}, maximum {maximum})")]
    NonFiniteBound {
        /// Supplied minimum
        minimum: f64,
        /// Supplied maximum
        maximum: f64,
    },
}

/// Caller-supplied numeric domain
///
/// Bounds are never swapped: a reversed range is a caller mistake and is
/// reported as one.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RangeSpec {
    minimum: f64,
    maximum: f64,
}

impl RangeSpec {
    /// Create a validated range
    pub fn new(minimum: f64, maximum: f64) -> Result<Self, RangeError> {
        if !minimum.is_finite() || !maximum.is_finite() {
            return Err(RangeError::NonFiniteBound { minimum, maximum });
        }
        if maximum <= minimum {
            return Err(RangeError::InvalidRange { minimum, maximum });
        }
        Ok(Self { minimum, maximum })
    }

    /// Lower bound
    pub fn minimum(&self) -> f64 {
        self.minimum
    }

    /// Upper bound
    pub fn maximum(&self) -> f64 {
        self.maximum
    }

    /// Width of the range
    pub fn span(&self) -> f64 {
        self.maximum - self.minimum
    }

    /// Clamp a value into the range
    pub fn clamp(&self, value: f64) -> f64 {
        value.clamp(self.minimum, self.maximum)
    }

    /// Check if a value lies in the range
    pub fn contains(&self, value: f64) -> bool {
        (self.minimum..=self.maximum).contains(&value)
    }
}

/// Position of a value within the range, from 0.0 to 1.0
pub fn normalized(value: f64, range: &RangeSpec) -> f64 {
    (range.clamp(value) - range.minimum()) / range.span()
}

/// Convert a knob offset to a range value
pub fn offset_to_value(offset: f64, geometry: &TrackGeometry, range: &RangeSpec) -> f64 {
    if geometry.is_degenerate() {
        return range.minimum();
    }
    let fraction = geometry.clamp_offset(offset) / geometry.travel();
    range.clamp(range.minimum() + fraction * range.span())
}

/// Convert a range value to a knob offset
///
/// Values outside the range are clamped first.
pub fn value_to_offset(value: f64, geometry: &TrackGeometry, range: &RangeSpec) -> f64 {
    if geometry.is_degenerate() {
        return 0.0;
    }
    geometry.clamp_offset(normalized(value, range) * geometry.travel())
}
