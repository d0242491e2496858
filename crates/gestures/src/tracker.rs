//! Gesture tracker
//!
//! Converts a stream of one-dimensional drag samples into a knob offset that
//! always stays on the track. The tracker owns the transient [`GestureState`]
//! of its control.
//!
//! Offsets are clamped with a hard boundary; there is no elastic overscroll,
//! no snap-back on release and no inertia. The knob stays exactly where the
//! pointer let go of it.

use serde::Serialize;
use thiserror::Error;

use crate::event::GestureEvent;
use crate::geometry::TrackGeometry;

/// Tracker errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TrackerError {
    /// An externally supplied offset does not lie on the track
    #[error("Offset {offset} is outside the track range [0, {travel}]")]
    OffsetOutOfBounds {
        /// Offending offset
        offset: f64,
        /// Maximum allowed offset
        travel: f64,
    },
}

/// Result type for tracker operations
pub type Result<T> = std::result::Result<T, TrackerError>;

/// Outcome of an external offset update
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExternalUpdate {
    /// The offset was applied
    Applied,
    /// A drag is in progress; the update was dropped
    Ignored,
}

/// Transient drag session state
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GestureState {
    /// Whether a gesture session is in progress
    pub active: bool,
    /// Offset at the moment the current session started
    pub start_offset: f64,
    /// Current clamped offset
    pub current_offset: f64,
}

impl GestureState {
    /// Create an inert state resting at `offset`
    pub fn inert(offset: f64) -> Self {
        Self {
            active: false,
            start_offset: offset,
            current_offset: offset,
        }
    }
}

/// Single-axis drag tracker
#[derive(Debug, Clone)]
pub struct GestureTracker {
    geometry: TrackGeometry,
    state: GestureState,
}

impl GestureTracker {
    /// Create an inert tracker resting at `initial_offset`
    pub fn new(geometry: TrackGeometry, initial_offset: f64) -> Result<Self> {
        let mut tracker = Self {
            geometry,
            state: GestureState::inert(0.0),
        };
        tracker.set_offset_externally(initial_offset)?;
        Ok(tracker)
    }

    /// Track geometry this tracker clamps against
    pub fn geometry(&self) -> &TrackGeometry {
        &self.geometry
    }

    /// Snapshot of the current gesture state
    pub fn state(&self) -> GestureState {
        self.state
    }

    /// Current clamped offset
    pub fn offset(&self) -> f64 {
        self.state.current_offset
    }

    /// Whether a drag is in progress
    pub fn is_active(&self) -> bool {
        self.state.active
    }

    /// Begin a gesture session
    ///
    /// Calling this while already active restarts the reference point at the
    /// current offset, so a second touch picks the knob up where it is.
    pub fn on_gesture_start(&mut self) {
        if self.state.active {
            tracing::debug!(
                "Gesture restarted at offset {}",
                self.state.current_offset
            );
        } else {
            tracing::debug!("Gesture started at offset {}", self.state.current_offset);
        }
        self.state.active = true;
        self.state.start_offset = self.state.current_offset;
    }

    /// Apply a move sample
    ///
    /// `delta_since_start` is the displacement since the session began.
    /// Returns the new offset, or `None` if no session is active or the
    /// sample was not a finite number.
    pub fn on_gesture_move(&mut self, delta_since_start: f64) -> Option<f64> {
        if !self.state.active {
            tracing::trace!("Ignoring move {} outside a gesture", delta_since_start);
            return None;
        }
        if !delta_since_start.is_finite() {
            tracing::warn!("Ignoring non-finite gesture displacement {}", delta_since_start);
            return None;
        }

        let candidate = self.state.start_offset + delta_since_start;
        let offset = self.geometry.clamp_offset(candidate);
        self.state.current_offset = offset;
        tracing::trace!("Gesture moved: dx {} -> offset {}", delta_since_start, offset);
        Some(offset)
    }

    /// End the gesture session; the offset sticks where it is
    pub fn on_gesture_end(&mut self) {
        if self.state.active {
            tracing::debug!("Gesture ended at offset {}", self.state.current_offset);
        }
        self.state.active = false;
    }

    /// Cancel the gesture session; same as ending it
    pub fn on_gesture_cancel(&mut self) {
        if self.state.active {
            tracing::debug!("Gesture cancelled at offset {}", self.state.current_offset);
        }
        self.state.active = false;
    }

    /// Position the knob from outside a drag
    ///
    /// Dropped while a drag is active so the update cannot fight the pointer.
    pub fn set_offset_externally(&mut self, offset: f64) -> Result<ExternalUpdate> {
        if !self.geometry.contains_offset(offset) {
            return Err(TrackerError::OffsetOutOfBounds {
                offset,
                travel: self.geometry.travel(),
            });
        }
        if self.state.active {
            tracing::debug!("Ignoring external offset {} during drag", offset);
            return Ok(ExternalUpdate::Ignored);
        }

        self.state = GestureState::inert(offset);
        Ok(ExternalUpdate::Applied)
    }

    /// Drop any session in progress, keeping the offset
    pub fn reset(&mut self) {
        self.state = GestureState::inert(self.state.current_offset);
    }

    /// Route a host event to the matching handler
    ///
    /// Returns the new offset for move events that were applied.
    pub fn dispatch(&mut self, event: GestureEvent) -> Option<f64> {
        match event {
            GestureEvent::Start => {
                self.on_gesture_start();
                None
            }
            GestureEvent::Move { dx } => self.on_gesture_move(dx),
            GestureEvent::End => {
                self.on_gesture_end();
                None
            }
            GestureEvent::Cancel => {
                self.on_gesture_cancel();
                None
            }
        }
    }
}
