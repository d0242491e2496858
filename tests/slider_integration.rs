//! Slider Integration Tests
//!
//! End-to-end gesture sessions driven through the showcase screen.

use app_ui::{RangeSlider, SliderConfig, SliderMode, ThrottleConfig};
use component_showcase::{ShowcaseConfig, ShowcaseScreen};
use gestures::{GestureEvent, ScriptedGestureSource};
use std::sync::mpsc;

fn screen_from_zero() -> ShowcaseScreen {
    let config = ShowcaseConfig {
        slider: SliderConfig::default().with_value(0.0),
        ..Default::default()
    };
    ShowcaseScreen::new(config).unwrap()
}

/// Drags within, past and before the default 250px track with a 20px knob
#[test]
fn test_track_scenarios() {
    let mut screen = screen_from_zero();

    screen.handle_gesture(GestureEvent::Start);
    screen.handle_gesture(GestureEvent::moved(115.0));
    assert_eq!(screen.slider().offset(), 115.0);
    assert_eq!(screen.volume(), 50.0);

    screen.handle_gesture(GestureEvent::moved(500.0));
    assert_eq!(screen.slider().offset(), 230.0);
    assert_eq!(screen.volume(), 100.0);

    screen.handle_gesture(GestureEvent::moved(-50.0));
    assert_eq!(screen.slider().offset(), 0.0);
    assert_eq!(screen.volume(), 0.0);

    screen.handle_gesture(GestureEvent::End);
    assert_eq!(screen.slider().mode(), SliderMode::Idle);
}

/// Host updates never move the knob under the finger
#[test]
fn test_host_update_during_drag() {
    let mut screen = screen_from_zero();

    screen.handle_gesture(GestureEvent::Start);
    screen.handle_gesture(GestureEvent::moved(115.0));
    screen.set_volume(90.0).unwrap();
    assert_eq!(screen.slider().offset(), 115.0);
    assert_eq!(screen.volume(), 50.0);

    screen.handle_gesture(GestureEvent::moved(138.0));
    assert_eq!(screen.volume(), 60.0);

    screen.handle_gesture(GestureEvent::End);
    screen.set_volume(90.0).unwrap();
    assert_eq!(screen.slider().offset(), 207.0);
}

/// A second touch mid-drag picks the knob up where it is
#[test]
fn test_interrupted_gesture() {
    let mut screen = screen_from_zero();
    let mut source = ScriptedGestureSource::from_events([
        GestureEvent::Start,
        GestureEvent::moved(92.0),
        GestureEvent::Start,
        GestureEvent::moved(23.0),
        GestureEvent::Cancel,
        GestureEvent::moved(100.0),
    ]);

    assert_eq!(screen.drive(&mut source), 6);
    assert_eq!(screen.slider().offset(), 115.0);
    assert_eq!(screen.volume(), 50.0);
    assert_eq!(screen.label(), "Volume: 50%");
}

/// Unmounting mid-drag leaves the screen consistent
#[test]
fn test_unmount_mid_drag() {
    let mut screen = screen_from_zero();
    screen.handle_gesture(GestureEvent::Start);
    screen.handle_gesture(GestureEvent::moved(46.0));
    screen.unmount();

    assert!(!screen.render().dragging);
    assert_eq!(screen.volume(), 20.0);

    // Stray samples from the old session are ignored
    screen.handle_gesture(GestureEvent::moved(200.0));
    assert_eq!(screen.volume(), 20.0);
}

/// Clamping holds for arbitrary displacement streams
#[test]
fn test_offset_stays_on_track() {
    let mut screen = screen_from_zero();
    screen.handle_gesture(GestureEvent::Start);
    for i in -300..300 {
        screen.handle_gesture(GestureEvent::moved(i as f64 * 1.7));
        let offset = screen.slider().offset();
        assert!((0.0..=230.0).contains(&offset));
        assert!((0.0..=100.0).contains(&screen.volume()));
    }
}

/// Throttled sliders still report the value the knob stopped at
#[test]
fn test_throttled_final_value() {
    let (tx, rx) = mpsc::channel();
    let config = SliderConfig::default()
        .with_value(0.0)
        .with_throttle(ThrottleConfig::min_value_delta(25.0));
    let mut slider = RangeSlider::new(config, move |value| {
        let _ = tx.send(value);
    })
    .unwrap();

    let mut source = ScriptedGestureSource::drag((1..=20).map(|i| i as f64 * 4.6));
    slider.poll(&mut source);

    let reported: Vec<f64> = rx.try_iter().collect();
    assert_eq!(reported.last().copied(), Some(slider.value()));
    assert!(reported.len() < 20);
    assert!((slider.value() - 40.0).abs() < 1e-9);
}
