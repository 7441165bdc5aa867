//! Pointer event sources.
//!
//! A source is the host side of a binding: it accepts listener
//! subscriptions per surface and delivers the events those listeners
//! would receive.

use std::collections::{BTreeSet, VecDeque};

use swipekit_common::error::{SwipeError, SwipeResult};
use swipekit_model::{EventName, PointerEvent, SurfaceId, Trace, TraceRecord};

/// Trait for hosts that deliver pointer input.
pub trait PointerSource {
    /// Register a listener for `name` on `surface`.
    fn subscribe(&mut self, surface: SurfaceId, name: EventName) -> SwipeResult<()>;

    /// Remove a listener. Removing an unknown listener is a no-op.
    fn unsubscribe(&mut self, surface: SurfaceId, name: EventName);

    /// Poll for the next delivered event. Returns `None` if no event is available.
    fn poll(&mut self) -> SwipeResult<Option<(SurfaceId, PointerEvent)>>;

    /// Source name for logging.
    fn name(&self) -> &str;
}

/// Replays recorded events in order.
///
/// Only events whose listener is subscribed on their surface are delivered,
/// the way a host only calls registered listeners.
#[derive(Debug, Default)]
pub struct ReplaySource {
    pending: VecDeque<TraceRecord>,
    subscriptions: BTreeSet<(SurfaceId, EventName)>,
    skipped: u64,
}

impl ReplaySource {
    /// Create a replay source with pre-loaded records.
    pub fn new(records: Vec<TraceRecord>) -> Self {
        Self {
            pending: records.into(),
            subscriptions: BTreeSet::new(),
            skipped: 0,
        }
    }

    pub fn from_trace(trace: Trace) -> Self {
        Self::new(trace.records)
    }

    /// Create an empty source that never produces events.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Queue another event for delivery.
    pub fn push(&mut self, surface: SurfaceId, event: PointerEvent) {
        self.pending.push_back(TraceRecord::new(surface, event));
    }

    pub fn is_subscribed(&self, surface: SurfaceId, name: EventName) -> bool {
        self.subscriptions.contains(&(surface, name))
    }

    /// Listener names currently subscribed on `surface`.
    pub fn subscriptions(&self, surface: SurfaceId) -> Vec<EventName> {
        self.subscriptions
            .iter()
            .filter(|(s, _)| *s == surface)
            .map(|(_, name)| *name)
            .collect()
    }

    /// Events dropped because nothing was listening for them.
    pub fn skipped(&self) -> u64 {
        self.skipped
    }

    pub fn remaining(&self) -> usize {
        self.pending.len()
    }
}

impl PointerSource for ReplaySource {
    fn subscribe(&mut self, surface: SurfaceId, name: EventName) -> SwipeResult<()> {
        if !self.subscriptions.insert((surface, name)) {
            return Err(SwipeError::binding(format!(
                "{name} listener already registered on {surface}"
            )));
        }
        Ok(())
    }

    fn unsubscribe(&mut self, surface: SurfaceId, name: EventName) {
        self.subscriptions.remove(&(surface, name));
    }

    fn poll(&mut self) -> SwipeResult<Option<(SurfaceId, PointerEvent)>> {
        while let Some(record) = self.pending.pop_front() {
            let listening = record
                .event
                .listener_name()
                .is_some_and(|name| self.is_subscribed(record.surface, name));
            if listening {
                return Ok(Some((record.surface, record.event)));
            }
            self.skipped += 1;
        }
        Ok(None)
    }

    fn name(&self) -> &str {
        "replay"
    }
}
