//! Gesture-driven range slider
//!
//! A drag-to-set-value control built on [`GestureTracker`]. The slider is
//! either [`SliderMode::Idle`], where the displayed value follows whatever
//! the host sets, or [`SliderMode::Dragging`], where it follows the pointer.
//!
//! Each move sample while dragging updates the knob offset, maps it into the
//! range, reports the value through the host's callback and refreshes the
//! visuals, all inside the same call. No snapping or inertia is applied on
//! release.
//!
//! # Example
//!
//! ```rust
//! use app_ui::{RangeSlider, SliderConfig};
//! use gestures::GestureEvent;
//!
//! let mut slider = RangeSlider::new(SliderConfig::default().with_value(0.0), |_| {}).unwrap();
//!
//! slider.handle(GestureEvent::Start);
//! assert_eq!(slider.handle(GestureEvent::moved(115.0)), Some(50.0));
//! slider.handle(GestureEvent::End);
//!
//! assert_eq!(slider.value(), 50.0);
//! assert_eq!(slider.visual().knob_x, 115.0);
//! ```

use gestures::{ExternalUpdate, GestureEvent, GestureSource, GestureTracker, TrackGeometry};
use serde::Serialize;

use crate::config::{SliderConfig, ThrottleConfig};
use crate::error::{Result, SliderError};
use crate::range::{offset_to_value, value_to_offset, RangeSpec};
use crate::visual::{offset_to_visual, SliderStyles, SliderVisual};

/// Value-changed callback supplied by the host
pub type ValueChangeHandler = Box<dyn FnMut(f64) + Send>;

/// Interaction mode of a slider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SliderMode {
    /// No gesture; value driven by the host
    Idle,
    /// Gesture in progress; value driven by the pointer
    Dragging,
}

/// Gesture-driven range slider
pub struct RangeSlider {
    tracker: GestureTracker,
    range: RangeSpec,
    throttle: ThrottleConfig,
    value: f64,
    /// Last value handed to the callback in the current session
    last_reported: Option<f64>,
    /// Value held back by the throttle, flushed on release
    pending: Option<f64>,
    on_value_change: ValueChangeHandler,
}

impl std::fmt::Debug for RangeSlider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RangeSlider")
            .field("tracker", &self.tracker)
            .field("range", &self.range)
            .field("throttle", &self.throttle)
            .field("value", &self.value)
            .field("pending", &self.pending)
            .finish_non_exhaustive()
    }
}

impl RangeSlider {
    /// Mount a slider
    ///
    /// The knob is positioned from `config.value`, clamped into the range.
    pub fn new<F>(config: SliderConfig, on_value_change: F) -> Result<Self>
    where
        F: FnMut(f64) + Send + 'static,
    {
        let geometry = config.geometry()?;
        let range = config.range()?;
        config.throttle.validate()?;
        if !config.value.is_finite() {
            return Err(SliderError::NonFiniteValue(config.value));
        }

        let offset = value_to_offset(config.value, &geometry, &range);
        let value = offset_to_value(offset, &geometry, &range);
        let tracker = GestureTracker::new(geometry, offset)?;

        tracing::debug!(
            "Slider mounted: range [{}, {}], value {}, offset {}",
            range.minimum(),
            range.maximum(),
            value,
            offset
        );

        Ok(Self {
            tracker,
            range,
            throttle: config.throttle,
            value,
            last_reported: None,
            pending: None,
            on_value_change: Box::new(on_value_change),
        })
    }

    /// Current value
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Current knob offset
    pub fn offset(&self) -> f64 {
        self.tracker.offset()
    }

    /// Numeric range
    pub fn range(&self) -> &RangeSpec {
        &self.range
    }

    /// Track geometry
    pub fn geometry(&self) -> &TrackGeometry {
        self.tracker.geometry()
    }

    /// Current interaction mode
    pub fn mode(&self) -> SliderMode {
        if self.tracker.is_active() {
            SliderMode::Dragging
        } else {
            SliderMode::Idle
        }
    }

    /// Whether a drag is in progress
    pub fn is_dragging(&self) -> bool {
        self.tracker.is_active()
    }

    /// Knob position and fill width for rendering
    pub fn visual(&self) -> SliderVisual {
        offset_to_visual(self.tracker.offset(), self.tracker.geometry())
    }

    /// Static styles for rendering
    pub fn styles(&self) -> SliderStyles {
        SliderStyles::for_geometry(self.tracker.geometry())
    }

    /// Handle one gesture event
    ///
    /// Returns the new value when a move sample changed the knob position.
    pub fn handle(&mut self, event: GestureEvent) -> Option<f64> {
        match event {
            GestureEvent::Start => {
                // A restart mid-drag still reports where the first touch left the knob
                if let Some(value) = self.pending.take() {
                    self.emit(value);
                }
                self.tracker.on_gesture_start();
                self.last_reported = Some(self.value);
                None
            }
            GestureEvent::Move { dx } => {
                let offset = self.tracker.on_gesture_move(dx)?;
                let value = offset_to_value(offset, self.tracker.geometry(), &self.range);
                self.value = value;
                self.report(value);
                Some(value)
            }
            GestureEvent::End | GestureEvent::Cancel => {
                let was_dragging = self.tracker.is_active();
                self.tracker.dispatch(event);
                if was_dragging {
                    self.flush();
                }
                None
            }
        }
    }

    /// Drain every pending event from a gesture source
    ///
    /// Returns the number of events handled.
    pub fn poll<S: GestureSource + ?Sized>(&mut self, source: &mut S) -> usize {
        let mut handled = 0;
        while let Some(event) = source.next_event() {
            self.handle(event);
            handled += 1;
        }
        handled
    }

    /// Set the value from the host
    ///
    /// The value is clamped into the range and then read back from the knob
    /// position, so a knob that cannot travel reports `minimum`. While a drag
    /// is in progress the update is dropped so it cannot fight the pointer.
    /// The callback is not invoked for host updates.
    pub fn set_value(&mut self, value: f64) -> Result<ExternalUpdate> {
        if !value.is_finite() {
            return Err(SliderError::NonFiniteValue(value));
        }
        if self.tracker.is_active() {
            tracing::debug!("Ignoring host value {} during drag", value);
            return Ok(ExternalUpdate::Ignored);
        }

        let geometry = *self.tracker.geometry();
        let offset = value_to_offset(value, &geometry, &self.range);
        let update = self.tracker.set_offset_externally(offset)?;
        if update == ExternalUpdate::Applied {
            self.value = offset_to_value(offset, &geometry, &self.range);
        }
        Ok(update)
    }

    /// Tear the slider down mid-interaction
    ///
    /// Any drag in progress is dropped without a final callback; the value
    /// stays where the last sample left it.
    pub fn unmount(&mut self) {
        if self.tracker.is_active() {
            tracing::debug!("Slider unmounted during drag at value {}", self.value);
        }
        self.tracker.reset();
        self.last_reported = None;
        self.pending = None;
    }

    fn report(&mut self, value: f64) {
        if let (Some(step), Some(last)) = (self.throttle.min_value_delta, self.last_reported) {
            if (value - last).abs() < step {
                self.pending = Some(value);
                return;
            }
        }
        self.emit(value);
    }

    fn flush(&mut self) {
        if let Some(value) = self.pending.take() {
            self.emit(value);
        }
        self.last_reported = None;
    }

    fn emit(&mut self, value: f64) {
        tracing::trace!("Slider value changed to {}", value);
        (self.on_value_change)(value);
        self.last_reported = Some(value);
        self.pending = None;
    }
}
