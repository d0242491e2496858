//! Showcase runner
//!
//! Mounts the showcase screen, replays a scripted drag on the volume slider
//! and prints the final frame as JSON. Pass a config file path as the first
//! argument to override the defaults; set `RUST_LOG=debug` (or `trace`) to
//! watch the gesture state machine.

use anyhow::Context;
use component_showcase::{ShowcaseConfig, ShowcaseScreen};
use gestures::{GestureEvent, GestureSource, ScriptedGestureSource};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => ShowcaseConfig::from_path(&path)
            .with_context(|| format!("failed to load config from {}", path))?,
        None => ShowcaseConfig::default(),
    };

    let mut screen = ShowcaseScreen::new(config)?;
    tracing::info!("{}", screen.label());

    // Drag right past the end, back left past the start, then settle at 3/4
    let mut source = ScriptedGestureSource::drag([40.0, 120.0, 400.0]);
    source.push_drag([-60.0, -500.0]);
    source.push(GestureEvent::Start);
    source.push(GestureEvent::moved(172.5));
    source.push(GestureEvent::Cancel);

    while let Some(event) = source.next_event() {
        screen.handle_gesture(event);
        let frame = screen.render();
        tracing::info!(
            "{:?}: {} (knob {:.1}px, fill {:.1}px)",
            event.phase(),
            frame.label,
            frame.visual.knob_x,
            frame.visual.fill_width
        );
    }

    screen.unmount();
    println!("{}", serde_json::to_string_pretty(&screen.render())?);
    Ok(())
}

