//! Swipe recognition for one bound surface.

use std::fmt;

use serde::Serialize;

use swipekit_common::config::SwipeThresholds;
use swipekit_model::{Coordinate, PointerEvent, PointerTypes, SurfaceId, SwipeDirection};
use swipekit_pointer_tracker::{GestureEvent, PointerHandlers};

use crate::classifier::SwipeClassifier;
use crate::scroll::ScrollQuery;

/// A recognized swipe, as emitted on its surface.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SwipeSignal {
    pub surface: SurfaceId,
    pub direction: SwipeDirection,
    /// `swipeleft`, `swiperight`, `swipeup`, or `swipedown`.
    pub event_name: &'static str,
    /// Where the gesture ended.
    pub coordinate: Coordinate,
    /// The input event that completed the gesture.
    pub event: PointerEvent,
}

/// Application callback invoked for each recognized swipe.
pub type SwipeHandler = Box<dyn FnMut(&SwipeSignal)>;

struct DirectionBinding {
    classifier: SwipeClassifier,
    handler: SwipeHandler,
}

/// All directions registered on a surface, sharing its gesture session.
pub struct SwipeSurface {
    id: SurfaceId,
    scroll: Box<dyn ScrollQuery>,
    bindings: Vec<DirectionBinding>,
    signals: Vec<SwipeSignal>,
}

impl fmt::Debug for SwipeSurface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SwipeSurface")
            .field("id", &self.id)
            .field("directions", &self.directions())
            .field("pending_signals", &self.signals.len())
            .finish()
    }
}

impl SwipeSurface {
    pub fn new(id: SurfaceId, scroll: Box<dyn ScrollQuery>) -> Self {
        Self {
            id,
            scroll,
            bindings: Vec::new(),
            signals: Vec::new(),
        }
    }

    /// Add a direction. Registering a direction twice installs two
    /// independent handlers.
    pub fn add_direction(
        &mut self,
        direction: SwipeDirection,
        thresholds: SwipeThresholds,
        pointer_types: PointerTypes,
        handler: SwipeHandler,
    ) {
        self.bindings.push(DirectionBinding {
            classifier: SwipeClassifier::new(direction, thresholds, pointer_types),
            handler,
        });
    }

    pub fn directions(&self) -> Vec<SwipeDirection> {
        self.bindings
            .iter()
            .map(|b| b.classifier.direction())
            .collect()
    }

    /// Signals emitted since the last call, in firing order.
    pub fn take_signals(&mut self) -> Vec<SwipeSignal> {
        std::mem::take(&mut self.signals)
    }

    pub fn id(&self) -> SurfaceId {
        self.id
    }

    pub fn scroll(&self) -> &dyn ScrollQuery {
        self.scroll.as_ref()
    }
}

impl PointerHandlers for SwipeSurface {
    fn on_start(&mut self, coords: Coordinate, event: &mut GestureEvent) {
        for binding in &mut self.bindings {
            binding
                .classifier
                .on_start(coords, event, self.scroll.as_ref());
        }
    }

    fn on_end(&mut self, coords: Coordinate, event: &mut GestureEvent) {
        for binding in &mut self.bindings {
            if !binding.classifier.on_end(coords) {
                continue;
            }

            let direction = binding.classifier.direction();
            let signal = SwipeSignal {
                surface: self.id,
                direction,
                event_name: direction.event_name(),
                coordinate: coords,
                event: event.event.clone(),
            };
            tracing::info!(
                surface = %self.id,
                %direction,
                x = coords.x,
                y = coords.y,
                "Swipe recognized"
            );
            (binding.handler)(&signal);
            self.signals.push(signal);
        }
    }

    fn on_cancel(&mut self, _event: &mut GestureEvent) {
        for binding in &mut self.bindings {
            binding.classifier.on_cancel();
        }
    }
}
