//! Generate synthetic swipe traces.

use std::path::PathBuf;

use clap::ValueEnum;
use swipekit_model::{
    PointerEvent, PointerPhase, ScrollMetrics, SurfaceId, SwipeDirection, Trace, TraceHeader,
    TraceRecord,
};
use swipekit_pointer_tracker::write_trace;

const ORIGIN: (f64, f64) = (400.0, 400.0);
const FRAME_NS: u64 = 16_000_000;
const CONTENT_HEIGHT: f64 = 2000.0;
const VIEWPORT_HEIGHT: f64 = 800.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PointerArg {
    Mouse,
    Touch,
}

/// Scroll position recorded in the trace header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ScrollPosition {
    /// No scroll metrics; the surface counts as unscrollable.
    None,
    Top,
    Middle,
    Bottom,
}

impl ScrollPosition {
    pub fn metrics(self) -> Option<ScrollMetrics> {
        let max = CONTENT_HEIGHT - VIEWPORT_HEIGHT;
        let top = match self {
            ScrollPosition::None => return None,
            ScrollPosition::Top => 0.0,
            ScrollPosition::Middle => max / 2.0,
            ScrollPosition::Bottom => max,
        };
        Some(ScrollMetrics::new(top, CONTENT_HEIGHT, VIEWPORT_HEIGHT))
    }
}

/// Shape of a synthetic gesture.
#[derive(Debug, Clone, Copy)]
pub struct SynthGesture {
    pub direction: SwipeDirection,
    pub distance: f64,
    pub drift: f64,
    pub steps: usize,
    pub pointer: PointerArg,
}

/// Build a straight-line gesture: start, `steps` evenly spaced moves, end.
pub fn synthesize(gesture: &SynthGesture) -> Vec<PointerEvent> {
    let config = gesture.direction.config();
    let sign = f64::from(config.sign);
    let (dx, dy) = if config.axis.is_vertical() {
        (gesture.drift, gesture.distance * sign)
    } else {
        (gesture.distance * sign, gesture.drift)
    };

    let point = |fraction: f64| (ORIGIN.0 + dx * fraction, ORIGIN.1 + dy * fraction);
    let event = |phase: PointerPhase, (x, y): (f64, f64)| match gesture.pointer {
        PointerArg::Mouse => PointerEvent::mouse(phase, x, y),
        PointerArg::Touch => PointerEvent::touch(phase, x, y),
    };

    let mut events = Vec::with_capacity(gesture.steps + 2);
    events.push(event(PointerPhase::Start, point(0.0)));
    for step in 1..=gesture.steps {
        let fraction = step as f64 / (gesture.steps + 1) as f64;
        events.push(event(PointerPhase::Move, point(fraction)));
    }
    events.push(event(PointerPhase::End, point(1.0)));

    events
        .into_iter()
        .enumerate()
        .map(|(i, e)| e.at(i as u64 * FRAME_NS))
        .collect()
}

pub fn run(
    direction: SwipeDirection,
    output: PathBuf,
    distance: f64,
    drift: f64,
    steps: usize,
    pointer: PointerArg,
    scroll: ScrollPosition,
) -> anyhow::Result<()> {
    let gesture = SynthGesture {
        direction,
        distance,
        drift,
        steps,
        pointer,
    };
    let trace = Trace {
        header: Some(TraceHeader::new(scroll.metrics(), pointer == PointerArg::Mouse)),
        records: synthesize(&gesture)
            .into_iter()
            .map(|event| TraceRecord::new(SurfaceId(0), event))
            .collect(),
    };

    let counts = write_trace(&output, &trace)
        .map_err(|e| anyhow::anyhow!("Failed to write {}: {e}", output.display()))?;
    let written: u64 = counts.values().sum();

    println!("Wrote {written} events to {}", output.display());
    println!("  Direction: {direction}");
    println!("  Distance: {distance}px, drift: {drift}px");
    Ok(())
}
