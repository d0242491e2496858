//! User interface widgets for Component Showcase
//!
//! This crate provides the gesture-driven range slider and the static design
//! data it renders with.
//!
//! # Modules
//!
//! - [`range`] - Range validation and offset/value mapping
//! - [`visual`] - Knob/fill rendering description and styles
//! - [`tokens`] - Design tokens (geometry, colors, shadows)
//! - [`config`] - Slider configuration and callback throttling
//! - [`slider`] - The [`RangeSlider`] widget
//! - [`shared`] - Mutex-guarded slider handle for multi-threaded hosts
//! - [`error`] - Error types
//!
//! # Example
//!
//! ```rust
//! use app_ui::{RangeSlider, SliderConfig, SliderMode};
//! use gestures::ScriptedGestureSource;
//!
//! let mut slider = RangeSlider::new(SliderConfig::default(), |value| {
//!     println!("volume: {:.0}%", value);
//! })
//! .unwrap();
//!
//! // Drag the knob 23px to the right of where it rests
//! let mut source = ScriptedGestureSource::drag([23.0]);
//! slider.poll(&mut source);
//!
//! assert_eq!(slider.mode(), SliderMode::Idle);
//! assert_eq!(slider.value(), 60.0);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod error;
pub mod range;
pub mod shared;
pub mod slider;
pub mod tokens;
pub mod visual;

// Re-export commonly used types
pub use config::{SliderConfig, ThrottleConfig};
pub use error::{Result, SliderError};
pub use range::{normalized, offset_to_value, value_to_offset, RangeError, RangeSpec};
pub use shared::SharedRangeSlider;
pub use slider::{RangeSlider, SliderMode, ValueChangeHandler};
pub use tokens::{Color, Shadow};
pub use visual::{offset_to_visual, SliderStyles, SliderVisual};
