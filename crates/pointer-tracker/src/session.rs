//! Per-gesture tracking state.

use swipekit_common::config::TrackerThresholds;
use swipekit_model::{Axis, Coordinate};

/// Whether the dominant axis of a gesture has been decided yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AxisLock {
    #[default]
    Undecided,
    Locked(Axis),
}

impl AxisLock {
    pub fn is_decided(self) -> bool {
        matches!(self, AxisLock::Locked(_))
    }

    /// Vertical unless the gesture locked horizontal.
    pub fn is_vertical(self) -> bool {
        self != AxisLock::Locked(Axis::Horizontal)
    }
}

/// Result of feeding one move into a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Cumulative movement is still inside the noise buffer.
    Buffered,
    /// Movement is past the buffer; carries the (latched) axis flag.
    Tracked { is_vertical: bool },
}

/// Transient state of one gesture on a surface.
#[derive(Debug, Clone, PartialEq)]
pub struct GestureSession {
    start: Coordinate,
    last: Coordinate,
    total_dx: f64,
    total_dy: f64,
    active: bool,
    axis: AxisLock,
}

impl GestureSession {
    /// Begin a session at `start` with all accumulators reset.
    pub fn begin(start: Coordinate) -> Self {
        Self {
            start,
            last: start,
            total_dx: 0.0,
            total_dy: 0.0,
            active: true,
            axis: AxisLock::Undecided,
        }
    }

    /// Accumulate movement to `current`, locking the axis the first time
    /// either total reaches the buffer radius.
    pub fn track(&mut self, current: Coordinate, thresholds: &TrackerThresholds) -> MoveOutcome {
        self.total_dx += (current.x - self.last.x).abs();
        self.total_dy += (current.y - self.last.y).abs();
        self.last = current;

        if self.total_dx < thresholds.move_buffer_radius
            && self.total_dy < thresholds.move_buffer_radius
        {
            return MoveOutcome::Buffered;
        }

        if !self.axis.is_decided() {
            let delta_x = (current.x - self.start.x).abs();
            let delta_y = (current.y - self.start.y).abs();
            // Zero horizontal travel yields inf (or NaN), both of which
            // fail the comparison and lock vertical.
            let ratio = delta_y / delta_x;
            let axis = if ratio < thresholds.axis_ratio {
                Axis::Horizontal
            } else {
                Axis::Vertical
            };
            self.axis = AxisLock::Locked(axis);
            tracing::debug!(?axis, ratio, "Gesture axis locked");
        }

        MoveOutcome::Tracked {
            is_vertical: self.axis.is_vertical(),
        }
    }

    /// Mark the session finished (end or cancel).
    pub fn deactivate(&mut self) {
        self.active = false;
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn start(&self) -> Coordinate {
        self.start
    }

    pub fn last(&self) -> Coordinate {
        self.last
    }

    /// Cumulative absolute movement `(x, y)` since the session began.
    pub fn totals(&self) -> (f64, f64) {
        (self.total_dx, self.total_dy)
    }

    pub fn axis(&self) -> AxisLock {
        self.axis
    }

    pub fn is_vertical(&self) -> bool {
        self.axis.is_vertical()
    }
}
