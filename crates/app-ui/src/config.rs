//! Slider configuration
//!
//! Host-supplied settings for a slider instance. Every field has a default
//! taken from the design tokens, so a partial JSON document is enough.

use gestures::TrackGeometry;
use serde::{Deserialize, Serialize};

use crate::error::{Result, SliderError};
use crate::range::RangeSpec;
use crate::tokens::{range, slider};

/// Callback rate limiting
///
/// With no step configured the value-changed callback fires once per move
/// sample.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThrottleConfig {
    /// Minimum change from the last reported value before reporting again
    #[serde(default)]
    pub min_value_delta: Option<f64>,
}

impl ThrottleConfig {
    /// Report every sample
    pub fn every_sample() -> Self {
        Self::default()
    }

    /// Report only when the value moved by at least `delta`
    pub fn min_value_delta(delta: f64) -> Self {
        Self {
            min_value_delta: Some(delta),
        }
    }

    /// Validate the throttle step
    pub fn validate(&self) -> Result<()> {
        match self.min_value_delta {
            Some(delta) if !delta.is_finite() || delta <= 0.0 => {
                Err(SliderError::InvalidThrottle(delta))
            }
            _ => Ok(()),
        }
    }
}

/// Slider configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SliderConfig {
    /// Track length in pixels
    #[serde(default = "default_track_length")]
    pub track_length: f64,

    /// Knob size in pixels
    #[serde(default = "default_knob_size")]
    pub knob_size: f64,

    /// Lower bound of the value
    #[serde(default = "default_minimum")]
    pub minimum: f64,

    /// Upper bound of the value
    #[serde(default = "default_maximum")]
    pub maximum: f64,

    /// Initial value; clamped into the range
    #[serde(default = "default_value")]
    pub value: f64,

    /// Callback rate limiting
    #[serde(default)]
    pub throttle: ThrottleConfig,
}

fn default_track_length() -> f64 {
    slider::TRACK_LENGTH
}

fn default_knob_size() -> f64 {
    slider::KNOB_SIZE
}

fn default_minimum() -> f64 {
    range::MINIMUM
}

fn default_maximum() -> f64 {
    range::MAXIMUM
}

fn default_value() -> f64 {
    range::INITIAL_VALUE
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            track_length: default_track_length(),
            knob_size: default_knob_size(),
            minimum: default_minimum(),
            maximum: default_maximum(),
            value: default_value(),
            throttle: ThrottleConfig::default(),
        }
    }
}

impl SliderConfig {
    /// Set the numeric range
    pub fn with_range(mut self, minimum: f64, maximum: f64) -> Self {
        self.minimum = minimum;
        self.maximum = maximum;
        self
    }

    /// Set the track geometry
    pub fn with_geometry(mut self, track_length: f64, knob_size: f64) -> Self {
        self.track_length = track_length;
        self.knob_size = knob_size;
        self
    }

    /// Set the initial value
    pub fn with_value(mut self, value: f64) -> Self {
        self.value = value;
        self
    }

    /// Set the callback throttle
    pub fn with_throttle(mut self, throttle: ThrottleConfig) -> Self {
        self.throttle = throttle;
        self
    }

    /// Validated track geometry
    pub fn geometry(&self) -> Result<TrackGeometry> {
        Ok(TrackGeometry::new(self.track_length, self.knob_size)?)
    }

    /// Validated numeric range
    pub fn range(&self) -> Result<RangeSpec> {
        Ok(RangeSpec::new(self.minimum, self.maximum)?)
    }

    /// Validate the whole configuration
    pub fn validate(&self) -> Result<()> {
        self.geometry()?;
        self.range()?;
        self.throttle.validate()?;
        if !self.value.is_finite() {
            return Err(SliderError::NonFiniteValue(self.value));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::range::RangeError;

    #[test]
    fn test_config_default() {
        let config = SliderConfig::default();
        assert_eq!(config.track_length, 250.0);
        assert_eq!(config.knob_size, 20.0);
        assert_eq!(config.minimum, 0.0);
        assert_eq!(config.maximum, 100.0);
        assert_eq!(config.value, 50.0);
        assert_eq!(config.throttle, ThrottleConfig::every_sample());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_partial_json() {
        let config: SliderConfig =
            serde_json::from_str(r#"{"minimum": -1.0, "maximum": 1.0}"#).unwrap();
        assert_eq!(config.minimum, -1.0);
        assert_eq!(config.maximum, 1.0);
        assert_eq!(config.track_length, 250.0);
        assert_eq!(config.value, 50.0);
    }

    #[test]
    fn test_config_camel_case_json() {
        let config: SliderConfig = serde_json::from_str(
            r#"{"trackLength": 300.0, "knobSize": 24.0, "throttle": {"minValueDelta": 0.5}}"#,
        )
        .unwrap();
        assert_eq!(config.track_length, 300.0);
        assert_eq!(config.knob_size, 24.0);
        assert_eq!(config.throttle.min_value_delta, Some(0.5));
    }

    #[test]
    fn test_config_rejects_reversed_range() {
        let config = SliderConfig::default().with_range(10.0, 0.0);
        assert_eq!(
            config.validate(),
            Err(SliderError::Range(RangeError::InvalidRange {
                minimum: 10.0,
                maximum: 0.0,
            }))
        );
    }

    #[test]
    fn test_config_rejects_bad_geometry() {
        let config = SliderConfig::default().with_geometry(10.0, 20.0);
        assert!(matches!(config.validate(), Err(SliderError::Geometry(_))));
    }

    #[test]
    fn test_throttle_validation() {
        assert!(ThrottleConfig::min_value_delta(0.5).validate().is_ok());
        assert_eq!(
            ThrottleConfig::min_value_delta(0.0).validate(),
            Err(SliderError::InvalidThrottle(0.0))
        );
        assert!(ThrottleConfig::min_value_delta(f64::NAN).validate().is_err());
    }

    #[test]
    fn test_config_rejects_non_finite_value() {
        let config = SliderConfig::default().with_value(f64::NAN);
        assert!(matches!(
            config.validate(),
            Err(SliderError::NonFiniteValue(_))
        ));
    }
}
