//! Thread-safe slider handle
//!
//! For hosts that deliver gesture callbacks from more than one thread. A
//! single mutex guards every start/move/end/cancel step so samples are
//! applied one at a time in arrival order.
//!
//! The value-changed callback runs while the lock is held and must not call
//! back into the same handle.

use std::sync::Arc;

use gestures::{ExternalUpdate, GestureEvent, GestureSource};
use parking_lot::Mutex;

use crate::config::SliderConfig;
use crate::error::Result;
use crate::slider::{RangeSlider, SliderMode};
use crate::visual::SliderVisual;

/// Cloneable handle to a slider behind a mutex
#[derive(Debug, Clone)]
pub struct SharedRangeSlider {
    inner: Arc<Mutex<RangeSlider>>,
}

impl SharedRangeSlider {
    /// Mount a shared slider
    pub fn new<F>(config: SliderConfig, on_value_change: F) -> Result<Self>
    where
        F: FnMut(f64) + Send + 'static,
    {
        Ok(Self::from_slider(RangeSlider::new(config, on_value_change)?))
    }

    /// Wrap an existing slider
    pub fn from_slider(slider: RangeSlider) -> Self {
        Self {
            inner: Arc::new(Mutex::new(slider)),
        }
    }

    /// Handle one gesture event
    pub fn handle(&self, event: GestureEvent) -> Option<f64> {
        self.inner.lock().handle(event)
    }

    /// Drain a gesture source under a single lock
    pub fn poll<S: GestureSource + ?Sized>(&self, source: &mut S) -> usize {
        self.inner.lock().poll(source)
    }

    /// Set the value from the host
    pub fn set_value(&self, value: f64) -> Result<ExternalUpdate> {
        self.inner.lock().set_value(value)
    }

    /// Drop any drag in progress
    pub fn unmount(&self) {
        self.inner.lock().unmount();
    }

    /// Current value
    pub fn value(&self) -> f64 {
        self.inner.lock().value()
    }

    /// Current interaction mode
    pub fn mode(&self) -> SliderMode {
        self.inner.lock().mode()
    }

    /// Knob position and fill width
    pub fn visual(&self) -> SliderVisual {
        self.inner.lock().visual()
    }
}
