//! Component Showcase
//!
//! The showcase screen hosts a gesture-driven "volume" slider. The screen
//! owns the volume value, hands it to the slider, and takes updates back
//! through the slider's value-changed callback, the same way a controlled
//! component works in a declarative UI.
//!
//! # Example
//!
//! ```rust
//! use component_showcase::{ShowcaseConfig, ShowcaseScreen};
//! use gestures::ScriptedGestureSource;
//!
//! let mut screen = ShowcaseScreen::new(ShowcaseConfig::default()).unwrap();
//! assert_eq!(screen.label(), "Volume: 50%");
//!
//! screen.drive(&mut ScriptedGestureSource::drag([-115.0]));
//! assert_eq!(screen.label(), "Volume: 0%");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

use std::path::Path;
use std::sync::mpsc::{self, Receiver};

use app_ui::{RangeSlider, SliderConfig, SliderError, SliderStyles, SliderVisual};
use gestures::{GestureEvent, GestureSource};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Showcase errors
#[derive(Debug, Error)]
pub enum ShowcaseError {
    /// Config file could not be read
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Config file was not valid JSON
    #[error("Config parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Slider could not be mounted
    #[error("Slider error: {0}")]
    Slider(#[from] SliderError),
}

/// Result type for showcase operations
pub type Result<T> = std::result::Result<T, ShowcaseError>;

/// Showcase screen configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShowcaseConfig {
    /// Text shown before the value in the slider label
    #[serde(default = "default_label")]
    pub label: String,

    /// Slider settings
    #[serde(default)]
    pub slider: SliderConfig,
}

fn default_label() -> String {
    "Volume".to_string()
}

impl Default for ShowcaseConfig {
    fn default() -> Self {
        Self {
            label: default_label(),
            slider: SliderConfig::default(),
        }
    }
}

impl ShowcaseConfig {
    /// Parse a JSON config document
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.slider.validate()?;
        Ok(config)
    }

    /// Load a JSON config file
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        tracing::debug!("Loading showcase config from {}", path.display());
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }
}

/// Everything the renderer needs for one frame of the slider section
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShowcaseFrame {
    /// Value label
    pub label: String,
    /// Knob position and fill width
    pub visual: SliderVisual,
    /// Static slider styles
    pub styles: SliderStyles,
    /// Whether the knob is being dragged
    pub dragging: bool,
}

/// The showcase screen's slider section
#[derive(Debug)]
pub struct ShowcaseScreen {
    label: String,
    volume: f64,
    slider: RangeSlider,
    updates: Receiver<f64>,
}

impl ShowcaseScreen {
    /// Mount the screen
    pub fn new(config: ShowcaseConfig) -> Result<Self> {
        let (tx, updates) = mpsc::channel();
        let slider = RangeSlider::new(config.slider, move |value| {
            // The screen owns the receiver for as long as the slider lives
            let _ = tx.send(value);
        })?;

        tracing::info!("Showcase mounted with {} at {}", config.label, slider.value());

        Ok(Self {
            label: config.label,
            volume: slider.value(),
            slider,
            updates,
        })
    }

    /// Current volume as the screen sees it
    pub fn volume(&self) -> f64 {
        self.volume
    }

    /// Slider widget
    pub fn slider(&self) -> &RangeSlider {
        &self.slider
    }

    /// Label text, e.g. `Volume: 50%`
    pub fn label(&self) -> String {
        format!("{}: {}%", self.label, self.volume.round())
    }

    /// Feed one gesture event to the slider
    pub fn handle_gesture(&mut self, event: GestureEvent) {
        self.slider.handle(event);
        self.apply_updates();
    }

    /// Feed every pending event from a gesture source
    pub fn drive<S: GestureSource + ?Sized>(&mut self, source: &mut S) -> usize {
        let mut handled = 0;
        while let Some(event) = source.next_event() {
            self.handle_gesture(event);
            handled += 1;
        }
        handled
    }

    /// Set the volume from elsewhere on the screen
    ///
    /// Ignored while the knob is being dragged.
    pub fn set_volume(&mut self, value: f64) -> Result<()> {
        if self.slider.set_value(value)? == gestures::ExternalUpdate::Applied {
            self.volume = self.slider.value();
        }
        Ok(())
    }

    /// Describe the current frame
    pub fn render(&self) -> ShowcaseFrame {
        ShowcaseFrame {
            label: self.label(),
            visual: self.slider.visual(),
            styles: self.slider.styles(),
            dragging: self.slider.is_dragging(),
        }
    }

    /// Tear the screen down, abandoning any drag
    pub fn unmount(&mut self) {
        self.slider.unmount();
        self.apply_updates();
        tracing::info!("Showcase unmounted at {}", self.volume);
    }

    fn apply_updates(&mut self) {
        for value in self.updates.try_iter() {
            self.volume = value;
        }
    }
}
