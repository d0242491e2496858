//! Gesture events delivered by the host
//!
//! A gesture session is always `Start`, zero or more `Move`s, then exactly one
//! of `End` or `Cancel`. Move displacement is measured from where the session
//! started, not from the previous sample.

use serde::{Deserialize, Serialize};

/// Phase of a gesture session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GesturePhase {
    /// Pointer went down and the control claimed the gesture
    Start,
    /// Pointer moved while claimed
    Move,
    /// Pointer was released
    End,
    /// Gesture was taken away (second touch, unmount, system interrupt)
    Cancel,
}

impl GesturePhase {
    /// Whether this phase closes the session
    pub fn is_terminal(&self) -> bool {
        matches!(self, GesturePhase::End | GesturePhase::Cancel)
    }
}

/// A single gesture sample
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum GestureEvent {
    /// Session started
    Start,
    /// Pointer moved
    Move {
        /// Displacement along the track axis since the session started
        dx: f64,
    },
    /// Session ended normally
    End,
    /// Session was cancelled
    Cancel,
}

impl GestureEvent {
    /// Create a move event
    pub fn moved(dx: f64) -> Self {
        GestureEvent::Move { dx }
    }

    /// Get the phase of this event
    pub fn phase(&self) -> GesturePhase {
        match self {
            GestureEvent::Start => GesturePhase::Start,
            GestureEvent::Move { .. } => GesturePhase::Move,
            GestureEvent::End => GesturePhase::End,
            GestureEvent::Cancel => GesturePhase::Cancel,
        }
    }
}
