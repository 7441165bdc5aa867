//! swipekit pointer tracker
//!
//! Converts heterogeneous mouse and touch input into one movement stream
//! per surface and decides the movement's dominant axis:
//!
//! - **Session:** cumulative movement, noise buffer, and the one-time axis lock
//! - **Tracker:** listener binding and start/move/end/cancel forwarding
//! - **Sources:** the host capability that subscribes listeners and delivers events
//! - **Writer:** trace recording for later replay, with per-surface counts
//!
//! Everything runs synchronously on the caller's thread; each event is
//! fully processed before the next one is dispatched.

pub mod session;
pub mod source;
pub mod tracker;
pub mod writer;

pub use session::{AxisLock, GestureSession, MoveOutcome};
pub use source::{PointerSource, ReplaySource};
pub use tracker::PointerTracker;
pub use writer::{write_trace, SurfaceCounts, TraceWriter};

use swipekit_model::{Coordinate, PointerEvent};

/// What the tracker did with a dispatched event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Disposition {
    /// Not delivered to handlers: unbound pointer type, or no active session.
    Ignored,
    /// A move still inside the noise buffer.
    Buffered,
    /// Delivered to the matching handler.
    Forwarded,
}

/// A pointer event annotated by the tracker and its handlers.
#[derive(Debug, Clone, PartialEq)]
pub struct GestureEvent {
    pub event: PointerEvent,

    /// Axis flag attached to forwarded move and end events.
    pub is_vertical: Option<bool>,

    pub disposition: Disposition,

    default_prevented: bool,
}

impl GestureEvent {
    pub fn new(event: PointerEvent) -> Self {
        Self {
            event,
            is_vertical: None,
            disposition: Disposition::Ignored,
            default_prevented: false,
        }
    }

    /// Ask the host to suppress the input device's default action
    /// (e.g. page scroll) for this event.
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}

/// Callbacks invoked by a [`PointerTracker`]. All methods default to no-ops.
pub trait PointerHandlers {
    fn on_start(&mut self, _coords: Coordinate, _event: &mut GestureEvent) {}

    fn on_move(&mut self, _coords: Coordinate, _event: &mut GestureEvent) {}

    fn on_end(&mut self, _coords: Coordinate, _event: &mut GestureEvent) {}

    fn on_cancel(&mut self, _event: &mut GestureEvent) {}
}

/// Handlers that ignore every callback.
impl PointerHandlers for () {}
