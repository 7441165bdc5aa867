//! Replay a recorded trace through the recognizer.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::path::PathBuf;
use std::rc::Rc;

use swipekit_classifier::{BindingOptions, StaticScroll, SwipeRegistry, SwipeSignal};
use swipekit_common::config::SwipeConfig;
use swipekit_model::{ScrollMetrics, SurfaceId, Trace, TraceRecord};
use swipekit_pointer_tracker::ReplaySource;

/// Command-line overrides applied on top of the trace header.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReplayOptions {
    pub scroll_top: Option<f64>,
    pub content_height: Option<f64>,
    pub viewport_height: Option<f64>,
    pub desktop: bool,
    pub touch_only: bool,
    pub no_horizontal: bool,
}

impl ReplayOptions {
    fn scroll_metrics(&self, header: Option<ScrollMetrics>) -> ScrollMetrics {
        let base = header.unwrap_or_default();
        ScrollMetrics::new(
            self.scroll_top.unwrap_or(base.scroll_top),
            self.content_height.unwrap_or(base.content_height),
            self.viewport_height.unwrap_or(base.viewport_height),
        )
    }
}

/// Result of replaying one trace.
#[derive(Debug, Default)]
pub struct ReplayReport {
    pub signals: Vec<SwipeSignal>,
    pub dispatched: usize,
    /// Events delivered to no listener.
    pub skipped: u64,
    pub surfaces: usize,
}

/// Bind one registry surface per distinct surface id in `trace`, feed it
/// the recorded events, and collect the swipes that fire.
///
/// Signals report the surface id as written in the trace.
pub fn replay_trace(
    mut config: SwipeConfig,
    trace: Trace,
    options: ReplayOptions,
) -> anyhow::Result<ReplayReport> {
    if options.no_horizontal {
        config.horizontal_swipes = false;
    }

    let header = trace.header.as_ref();
    let metrics = options.scroll_metrics(header.and_then(|h| h.scroll));
    let desktop = options.desktop || header.is_some_and(|h| h.desktop);
    let binding = BindingOptions {
        disable_mouse: options.touch_only,
    };

    let mut registry = SwipeRegistry::new(config);
    let mut source = ReplaySource::empty();
    let fired = Rc::new(RefCell::new(Vec::new()));

    // Trace id -> registry id, and back for reporting.
    let mut bound: BTreeMap<SurfaceId, SurfaceId> = BTreeMap::new();
    let mut recorded_as: BTreeMap<SurfaceId, SurfaceId> = BTreeMap::new();
    let mut records = Vec::with_capacity(trace.records.len());

    for record in trace.records {
        let surface = match bound.get(&record.surface).copied() {
            Some(surface) => surface,
            None => {
                let surface = registry.attach(StaticScroll::new(metrics, desktop));
                let log = Rc::clone(&fired);
                registry
                    .register_all(&mut source, surface, binding, move |signal: &SwipeSignal| {
                        log.borrow_mut().push(signal.clone())
                    })
                    .map_err(|e| anyhow::anyhow!("Failed to bind {}: {e}", record.surface))?;
                bound.insert(record.surface, surface);
                recorded_as.insert(surface, record.surface);
                surface
            }
        };
        records.push(TraceRecord::new(surface, record.event));
    }
    for record in records {
        source.push(record.surface, record.event);
    }

    let dispatched = registry
        .pump(&mut source)
        .map_err(|e| anyhow::anyhow!("Replay failed: {e}"))?;
    tracing::debug!(dispatched, skipped = source.skipped(), "Replay finished");

    let signals = fired
        .borrow_mut()
        .drain(..)
        .map(|mut signal: SwipeSignal| {
            if let Some(original) = recorded_as.get(&signal.surface) {
                signal.surface = *original;
            }
            signal
        })
        .collect();
    Ok(ReplayReport {
        signals,
        dispatched,
        skipped: source.skipped(),
        surfaces: bound.len(),
    })
}

pub fn run(
    config: SwipeConfig,
    path: PathBuf,
    options: ReplayOptions,
    json: bool,
) -> anyhow::Result<()> {
    let trace = super::load_trace(&path)?;
    if !json {
        println!("Replaying trace: {}", path.display());
        println!("  Records: {}", trace.records.len());
    }

    let report = replay_trace(config, trace, options)?;

    if json {
        for signal in &report.signals {
            println!("{}", serde_json::to_string(signal)?);
        }
        return Ok(());
    }

    println!("  Surfaces: {}", report.surfaces);
    println!("  Dispatched: {}", report.dispatched);
    println!("  Skipped (no listener): {}", report.skipped);

    if report.signals.is_empty() {
        println!("\nNo swipes recognized.");
    } else {
        println!("\nRecognized swipes:");
        for signal in &report.signals {
            println!(
                "  {} {} at {} (t={}ns)",
                signal.surface, signal.event_name, signal.coordinate, signal.event.timestamp_ns
            );
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use swipekit_model::parse_trace;

    fn fixture() -> Trace {
        let path = concat!(env!("CARGO_MANIFEST_DIR"), "/../../fixtures/swipe-session.jsonl");
        let content = std::fs::read_to_string(path).unwrap();
        parse_trace(&content).unwrap()
    }

    fn fired(report: &ReplayReport) -> Vec<&'static str> {
        report.signals.iter().map(|s| s.event_name).collect()
    }

    #[test]
    fn test_fixture_replay() {
        let report =
            replay_trace(SwipeConfig::default(), fixture(), ReplayOptions::default()).unwrap();
        assert_eq!(fired(&report), vec!["swipeup", "swiperight", "swipeleft"]);
        assert_eq!(report.surfaces, 2);
        assert_eq!(report.signals[2].surface, SurfaceId(1));
    }

    #[test]
    fn test_scroll_override_changes_gating() {
        // Scrolled to the top: the mouse swipe down fires, the swipe up does not.
        let options = ReplayOptions {
            scroll_top: Some(0.0),
            ..ReplayOptions::default()
        };
        let report = replay_trace(SwipeConfig::default(), fixture(), options).unwrap();
        assert_eq!(fired(&report), vec!["swiperight", "swipedown", "swipeleft"]);
    }

    fn single_swipe(surface: usize) -> Trace {
        let content = format!(
            concat!(
                "{{\"surface\":{id},\"phase\":\"start\",\"pointer\":\"mouse\",",
                "\"x\":0.0,\"y\":0.0}}\n",
                "{{\"surface\":{id},\"phase\":\"end\",\"pointer\":\"mouse\",",
                "\"x\":120.0,\"y\":0.0}}\n",
            ),
            id = surface
        );
        parse_trace(&content).unwrap()
    }

    #[test]
    fn test_max_surface_id_is_bound_once() {
        let report =
            replay_trace(SwipeConfig::default(), single_swipe(usize::MAX), ReplayOptions::default())
                .unwrap();
        assert_eq!(report.surfaces, 1);
        assert_eq!(fired(&report), vec!["swiperight"]);
        assert_eq!(report.signals[0].surface, SurfaceId(usize::MAX));
    }

    #[test]
    fn test_sparse_surface_ids_bind_only_what_is_used() {
        let report = replay_trace(
            SwipeConfig::default(),
            single_swipe(1_000_000_000),
            ReplayOptions::default(),
        )
        .unwrap();
        assert_eq!(report.surfaces, 1);
        assert_eq!(report.signals[0].surface, SurfaceId(1_000_000_000));
    }

    #[test]
    fn test_no_horizontal_and_touch_only() {
        let options = ReplayOptions {
            no_horizontal: true,
            touch_only: true,
            scroll_top: Some(0.0),
            ..ReplayOptions::default()
        };
        let report = replay_trace(SwipeConfig::default(), fixture(), options).unwrap();
        assert!(report.signals.is_empty());
        assert_eq!(report.skipped, 3);
    }
}
