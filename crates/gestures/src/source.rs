//! Gesture sources
//!
//! The host's gesture recognizer is injected into widgets as a
//! [`GestureSource`] rather than reached through a global dispatcher, so a
//! widget can be driven by synthetic event sequences.

use std::collections::VecDeque;

use crate::event::GestureEvent;

/// Capability that yields gesture events claimed by one control
///
/// Implementations must deliver events for a control in order
/// (start, moves, end or cancel) and never interleave two sessions.
#[cfg_attr(test, mockall::automock)]
pub trait GestureSource {
    /// Take the next pending event, if any
    fn next_event(&mut self) -> Option<GestureEvent>;
}

/// A gesture source that replays a prepared event sequence
#[derive(Debug, Clone, Default)]
pub struct ScriptedGestureSource {
    events: VecDeque<GestureEvent>,
}

impl ScriptedGestureSource {
    /// Create an empty source
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a source from a list of events
    pub fn from_events(events: impl IntoIterator<Item = GestureEvent>) -> Self {
        Self {
            events: events.into_iter().collect(),
        }
    }

    /// Create a source replaying one complete drag session
    pub fn drag(displacements: impl IntoIterator<Item = f64>) -> Self {
        let mut source = Self::new();
        source.push_drag(displacements);
        source
    }

    /// Queue a single event
    pub fn push(&mut self, event: GestureEvent) {
        self.events.push_back(event);
    }

    /// Queue a complete drag session: start, one move per displacement, end
    pub fn push_drag(&mut self, displacements: impl IntoIterator<Item = f64>) {
        self.events.push_back(GestureEvent::Start);
        self.events
            .extend(displacements.into_iter().map(GestureEvent::moved));
        self.events.push_back(GestureEvent::End);
    }

    /// Number of events still queued
    pub fn remaining(&self) -> usize {
        self.events.len()
    }

    /// Check if all events were consumed
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl GestureSource for ScriptedGestureSource {
    fn next_event(&mut self) -> Option<GestureEvent> {
        self.events.pop_front()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scripted_drag_sequence() {
        let mut source = ScriptedGestureSource::drag([10.0, 20.0]);
        assert_eq!(source.remaining(), 4);
        assert_eq!(source.next_event(), Some(GestureEvent::Start));
        assert_eq!(source.next_event(), Some(GestureEvent::moved(10.0)));
        assert_eq!(source.next_event(), Some(GestureEvent::moved(20.0)));
        assert_eq!(source.next_event(), Some(GestureEvent::End));
        assert_eq!(source.next_event(), None);
        assert!(source.is_empty());
    }

    #[test]
    fn test_scripted_push() {
        let mut source = ScriptedGestureSource::new();
        source.push(GestureEvent::Start);
        source.push(GestureEvent::Cancel);
        assert_eq!(source.next_event(), Some(GestureEvent::Start));
        assert_eq!(source.next_event(), Some(GestureEvent::Cancel));
        assert_eq!(source.next_event(), None);
    }

    #[test]
    fn test_mock_source() {
        let mut mock = MockGestureSource::new();
        let mut sequence = mockall::Sequence::new();
        mock.expect_next_event()
            .times(1)
            .in_sequence(&mut sequence)
            .return_const(Some(GestureEvent::Start));
        mock.expect_next_event()
            .times(1)
            .in_sequence(&mut sequence)
            .return_const(None);

        assert_eq!(mock.next_event(), Some(GestureEvent::Start));
        assert_eq!(mock.next_event(), None);
    }
}
