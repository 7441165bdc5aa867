//! Per-direction swipe classification.
//!
//! # Validity
//!
//! With `primary = (end - start) * sign` along the direction's axis and
//! `other = end - start` along the perpendicular axis, a gesture is a swipe
//! when all of these hold:
//!
//! 1. `|other| < max_other_axis_distance`
//! 2. `primary > 0` and `primary > min_distance`
//! 3. `|other| / primary < max_ratio`
//!
//! # Edge gating
//!
//! Vertical swipes only fire when the surface has nothing left to scroll in
//! the direction of travel, judged at gesture start: up requires the bottom
//! edge, down requires the top edge. Horizontal swipes are never gated.

use swipekit_common::config::SwipeThresholds;
use swipekit_model::{
    Axis, Coordinate, DirectionConfig, EdgeState, PointerTypes, SwipeDirection,
};
use swipekit_pointer_tracker::GestureEvent;

use crate::scroll::ScrollQuery;

/// Signed travel along the direction's axis and raw drift across it.
pub fn swipe_deltas(config: &DirectionConfig, start: Coordinate, end: Coordinate) -> (f64, f64) {
    let dx = end.x - start.x;
    let dy = end.y - start.y;
    let sign = f64::from(config.sign);
    match config.axis {
        Axis::Horizontal => (dx * sign, dy),
        Axis::Vertical => (dy * sign, dx),
    }
}

/// Whether travel from `start` to `end` satisfies the swipe thresholds.
pub fn is_valid_swipe(
    config: &DirectionConfig,
    thresholds: &SwipeThresholds,
    start: Coordinate,
    end: Coordinate,
) -> bool {
    let (primary, other) = swipe_deltas(config, start, end);
    other.abs() < thresholds.max_other_axis_distance
        && primary > 0.0
        && primary > thresholds.min_distance
        && other.abs() / primary < thresholds.max_ratio
}

/// Recognizer for one registered direction.
#[derive(Debug, Clone)]
pub struct SwipeClassifier {
    direction: SwipeDirection,
    config: DirectionConfig,
    thresholds: SwipeThresholds,
    pointer_types: PointerTypes,
    start: Option<Coordinate>,
    valid: bool,
    edges: EdgeState,
}

impl SwipeClassifier {
    pub fn new(
        direction: SwipeDirection,
        thresholds: SwipeThresholds,
        pointer_types: PointerTypes,
    ) -> Self {
        Self {
            direction,
            config: direction.config(),
            thresholds,
            pointer_types,
            start: None,
            valid: false,
            edges: EdgeState::default(),
        }
    }

    /// Record the gesture start, snapshot scroll edges, and suppress the
    /// host default where a vertical swipe would otherwise scroll the page.
    pub fn on_start(
        &mut self,
        coords: Coordinate,
        event: &mut GestureEvent,
        scroll: &dyn ScrollQuery,
    ) {
        if !self.pointer_types.accepts(event.event.pointer) {
            self.start = None;
            self.valid = false;
            return;
        }

        let (can_scroll_up, can_scroll_down) = (scroll.can_scroll_up(), scroll.can_scroll_down());
        self.edges = EdgeState {
            at_top_edge: !can_scroll_up,
            at_bottom_edge: !can_scroll_down,
        };

        let exempt = event
            .event
            .target
            .is_default_exempt(&self.thresholds.no_prevent_default_marker);
        let unscrollable = !can_scroll_up && !can_scroll_down;
        if self.config.axis.is_vertical() && !exempt && scroll.is_desktop() && unscrollable {
            event.prevent_default();
            tracing::debug!(direction = %self.direction, "Suppressed default action");
        }

        self.start = Some(coords);
        self.valid = true;
    }

    pub fn on_cancel(&mut self) {
        self.valid = false;
    }

    /// Decide whether the gesture ending at `coords` fires this direction.
    pub fn on_end(&mut self, coords: Coordinate) -> bool {
        if !self.is_valid_swipe(coords) {
            return false;
        }

        let gated = match self.direction {
            SwipeDirection::Up => !self.edges.at_bottom_edge,
            SwipeDirection::Down => !self.edges.at_top_edge,
            SwipeDirection::Left | SwipeDirection::Right => false,
        };
        if gated {
            tracing::debug!(
                direction = %self.direction,
                at_top = self.edges.at_top_edge,
                at_bottom = self.edges.at_bottom_edge,
                "Swipe suppressed: surface can still scroll"
            );
            return false;
        }

        true
    }

    /// Validity of a gesture ending at `end`; false without a live start.
    pub fn is_valid_swipe(&self, end: Coordinate) -> bool {
        match self.start {
            Some(start) if self.valid => is_valid_swipe(&self.config, &self.thresholds, start, end),
            _ => false,
        }
    }

    pub fn direction(&self) -> SwipeDirection {
        self.direction
    }

    pub fn pointer_types(&self) -> PointerTypes {
        self.pointer_types
    }

    /// Edge snapshot taken at the last accepted start.
    pub fn edges(&self) -> EdgeState {
        self.edges
    }
}
