//! Single-axis drag gesture tracking for Component Showcase
//!
//! This crate turns a stream of low-level pointer samples delivered by the
//! host UI layer into a clamped knob offset along a fixed-length track.
//!
//! # Modules
//!
//! - [`event`] - Gesture events and phases delivered by the host
//! - [`source`] - The [`GestureSource`] capability injected into widgets
//! - [`geometry`] - Fixed track/knob pixel geometry
//! - [`tracker`] - The [`GestureTracker`] state machine
//!
//! # Example
//!
//! ```rust
//! use gestures::{GestureTracker, TrackGeometry};
//!
//! let geometry = TrackGeometry::new(250.0, 20.0).unwrap();
//! let mut tracker = GestureTracker::new(geometry, 0.0).unwrap();
//!
//! tracker.on_gesture_start();
//! assert_eq!(tracker.on_gesture_move(115.0), Some(115.0));
//! assert_eq!(tracker.on_gesture_move(500.0), Some(230.0));
//! tracker.on_gesture_end();
//!
//! // Moves after release are ignored until the next start
//! assert_eq!(tracker.on_gesture_move(10.0), None);
//! assert_eq!(tracker.offset(), 230.0);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod event;
pub mod geometry;
pub mod source;
pub mod tracker;

pub use event::{GestureEvent, GesturePhase};
pub use geometry::{GeometryError, TrackGeometry};
pub use source::{GestureSource, ScriptedGestureSource};
pub use tracker::{ExternalUpdate, GestureState, GestureTracker, TrackerError};
