//! Slider errors

use gestures::{GeometryError, TrackerError};
use thiserror::Error;

use crate::range::RangeError;

/// Errors raised while configuring or driving a slider
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SliderError {
    /// The numeric range was rejected
    #[error("Invalid slider range: {0}")]
    Range(#[from] RangeError),

    /// The track geometry was rejected
    #[error("Invalid slider geometry: {0}")]
    Geometry(#[from] GeometryError),

    /// The knob could not be positioned
    #[error("Knob positioning failed: {0}")]
    Tracker(#[from] TrackerError),

    /// An externally supplied value was NaN or infinite
    #[error("Slider value must be finite, got {0}")]
    NonFiniteValue(f64),

    /// The throttle step was not a positive finite number
    #[error("Throttle step must be positive and finite, got {0}")]
    InvalidThrottle(f64),
}

/// Result type for slider operations
pub type Result<T> = std::result::Result<T, SliderError>;
