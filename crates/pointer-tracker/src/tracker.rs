//! Binding of a gesture session to one surface.

use swipekit_common::config::TrackerThresholds;
use swipekit_common::error::SwipeResult;
use swipekit_model::{
    Coordinate, EventName, PointerEvent, PointerPhase, PointerTypes, SurfaceId,
};

use crate::session::{GestureSession, MoveOutcome};
use crate::source::PointerSource;
use crate::{Disposition, GestureEvent, PointerHandlers};

/// Tracks pointer input on one surface and forwards normalized
/// start/move/end/cancel callbacks to its handlers.
#[derive(Debug)]
pub struct PointerTracker<H> {
    surface: SurfaceId,
    pointer_types: PointerTypes,
    thresholds: TrackerThresholds,
    session: Option<GestureSession>,
    handlers: H,
}

impl<H: PointerHandlers> PointerTracker<H> {
    /// Subscribe listeners for `pointer_types` on `surface` and create the
    /// tracker that will receive them.
    pub fn bind(
        source: &mut dyn PointerSource,
        surface: SurfaceId,
        handlers: H,
        pointer_types: PointerTypes,
        thresholds: TrackerThresholds,
    ) -> SwipeResult<Self> {
        let mut tracker = Self::unbound(surface, handlers, thresholds);
        tracker.widen(source, pointer_types)?;
        tracing::debug!(
            %surface,
            source = source.name(),
            mouse = pointer_types.mouse,
            touch = pointer_types.touch,
            "Pointer tracker bound"
        );
        Ok(tracker)
    }

    /// Create a tracker with no listeners; [`PointerTracker::widen`] adds them.
    pub fn unbound(surface: SurfaceId, handlers: H, thresholds: TrackerThresholds) -> Self {
        Self {
            surface,
            pointer_types: PointerTypes::NONE,
            thresholds,
            session: None,
            handlers,
        }
    }

    /// Extend the binding to more pointer types, subscribing only the
    /// listeners that are not registered yet.
    pub fn widen(
        &mut self,
        source: &mut dyn PointerSource,
        extra: PointerTypes,
    ) -> SwipeResult<()> {
        let wanted = self.pointer_types.union(extra);
        let current = self.pointer_types.all_listener_names();
        let missing = wanted
            .all_listener_names()
            .into_iter()
            .filter(|name| !current.contains(name))
            .collect();
        subscribe_all(source, self.surface, missing)?;
        self.pointer_types = wanted;
        Ok(())
    }

    /// Remove every listener this tracker registered and hand back its
    /// handlers.
    pub fn unbind(self, source: &mut dyn PointerSource) -> H {
        for name in self.pointer_types.all_listener_names() {
            source.unsubscribe(self.surface, name);
        }
        tracing::debug!(surface = %self.surface, "Pointer tracker unbound");
        self.handlers
    }

    /// Process one event delivered to this surface.
    pub fn dispatch(&mut self, event: PointerEvent) -> GestureEvent {
        let mut gesture = GestureEvent::new(event);
        let listening = self.pointer_types.accepts(gesture.event.pointer)
            && gesture.event.listener_name().is_some();
        if !listening {
            return gesture;
        }

        let coords = gesture.event.coordinates();
        match gesture.event.phase {
            PointerPhase::Start => self.on_start(coords, &mut gesture),
            PointerPhase::Move => self.on_move(coords, &mut gesture),
            PointerPhase::End => self.on_end(coords, &mut gesture),
            PointerPhase::Cancel => self.on_cancel(&mut gesture),
        }
        gesture
    }

    fn on_start(&mut self, coords: Coordinate, gesture: &mut GestureEvent) {
        self.session = Some(GestureSession::begin(coords));
        gesture.disposition = Disposition::Forwarded;
        self.handlers.on_start(coords, gesture);
    }

    fn on_cancel(&mut self, gesture: &mut GestureEvent) {
        if let Some(session) = self.session.as_mut() {
            session.deactivate();
        }
        gesture.disposition = Disposition::Forwarded;
        self.handlers.on_cancel(gesture);
    }

    fn on_move(&mut self, coords: Coordinate, gesture: &mut GestureEvent) {
        let Some(session) = self.session.as_mut().filter(|s| s.is_active()) else {
            return;
        };

        match session.track(coords, &self.thresholds) {
            MoveOutcome::Buffered => {
                gesture.disposition = Disposition::Buffered;
            }
            MoveOutcome::Tracked { is_vertical } => {
                gesture.is_vertical = Some(is_vertical);
                gesture.disposition = Disposition::Forwarded;
                self.handlers.on_move(coords, gesture);
            }
        }
    }

    fn on_end(&mut self, coords: Coordinate, gesture: &mut GestureEvent) {
        let Some(session) = self.session.as_mut().filter(|s| s.is_active()) else {
            return;
        };

        gesture.is_vertical = Some(session.is_vertical());
        session.deactivate();
        gesture.disposition = Disposition::Forwarded;
        self.handlers.on_end(coords, gesture);
    }

    pub fn surface(&self) -> SurfaceId {
        self.surface
    }

    pub fn pointer_types(&self) -> PointerTypes {
        self.pointer_types
    }

    /// The current or most recent gesture session.
    pub fn session(&self) -> Option<&GestureSession> {
        self.session.as_ref()
    }

    pub fn handlers(&self) -> &H {
        &self.handlers
    }

    pub fn handlers_mut(&mut self) -> &mut H {
        &mut self.handlers
    }
}

fn subscribe_all(
    source: &mut dyn PointerSource,
    surface: SurfaceId,
    names: Vec<EventName>,
) -> SwipeResult<()> {
    for (idx, name) in names.iter().enumerate() {
        if let Err(e) = source.subscribe(surface, *name) {
            // Leave the source as we found it.
            for registered in &names[..idx] {
                source.unsubscribe(surface, *registered);
            }
            return Err(e);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::ReplaySource;

    /// Records every callback it receives.
    #[derive(Debug, Default)]
    struct Recorder {
        calls: Vec<String>,
    }

    impl PointerHandlers for Recorder {
        fn on_start(&mut self, coords: Coordinate, _event: &mut GestureEvent) {
            self.calls.push(format!("start {coords}"));
        }

        fn on_move(&mut self, coords: Coordinate, event: &mut GestureEvent) {
            self.calls
                .push(format!("move {coords} vertical={:?}", event.is_vertical));
        }

        fn on_end(&mut self, coords: Coordinate, event: &mut GestureEvent) {
            self.calls
                .push(format!("end {coords} vertical={:?}", event.is_vertical));
        }

        fn on_cancel(&mut self, _event: &mut GestureEvent) {
            self.calls.push("cancel".to_string());
        }
    }

    fn bound(types: PointerTypes) -> (ReplaySource, PointerTracker<Recorder>) {
        let mut source = ReplaySource::empty();
        let tracker = PointerTracker::bind(
            &mut source,
            SurfaceId(0),
            Recorder::default(),
            types,
            TrackerThresholds::default(),
        )
        .unwrap();
        (source, tracker)
    }

    #[test]
    fn test_bind_subscribes_requested_listeners() {
        let (source, _tracker) = bound(PointerTypes::TOUCH_ONLY);
        assert_eq!(
            source.subscriptions(SurfaceId(0)),
            vec![
                EventName::TouchStart,
                EventName::TouchMove,
                EventName::TouchEnd,
                EventName::TouchCancel,
            ]
        );
    }

    #[test]
    fn test_failed_bind_rolls_back() {
        let mut source = ReplaySource::empty();
        source.subscribe(SurfaceId(0), EventName::TouchStart).unwrap();
        let result = PointerTracker::bind(
            &mut source,
            SurfaceId(0),
            Recorder::default(),
            PointerTypes::ALL,
            TrackerThresholds::default(),
        );
        assert!(result.is_err());
        assert_eq!(
            source.subscriptions(SurfaceId(0)),
            vec![EventName::TouchStart]
        );
    }

    #[test]
    fn test_widen_and_unbind() {
        let (mut source, mut tracker) = bound(PointerTypes::TOUCH_ONLY);
        tracker.widen(&mut source, PointerTypes::MOUSE_ONLY).unwrap();
        assert_eq!(tracker.pointer_types(), PointerTypes::ALL);
        assert!(source.is_subscribed(SurfaceId(0), EventName::MouseDown));

        tracker.unbind(&mut source);
        assert!(source.subscriptions(SurfaceId(0)).is_empty());
    }

    #[test]
    fn test_full_gesture_flow() {
        let (_source, mut tracker) = bound(PointerTypes::ALL);
        tracker.dispatch(PointerEvent::touch(PointerPhase::Start, 0.0, 0.0));
        let buffered = tracker.dispatch(PointerEvent::touch(PointerPhase::Move, 10.0, 0.0));
        assert_eq!(buffered.disposition, Disposition::Buffered);
        assert_eq!(buffered.is_vertical, None);

        let moved = tracker.dispatch(PointerEvent::touch(PointerPhase::Move, 60.0, 5.0));
        assert_eq!(moved.disposition, Disposition::Forwarded);
        assert_eq!(moved.is_vertical, Some(false));

        tracker.dispatch(PointerEvent::touch(PointerPhase::End, 80.0, 5.0));
        assert_eq!(
            tracker.handlers().calls,
            vec![
                "start (0, 0)",
                "move (60, 5) vertical=Some(false)",
                "end (80, 5) vertical=Some(false)",
            ]
        );
        assert!(!tracker.session().unwrap().is_active());
    }

    #[test]
    fn test_move_and_end_without_start_are_ignored() {
        let (_source, mut tracker) = bound(PointerTypes::ALL);
        let moved = tracker.dispatch(PointerEvent::mouse(PointerPhase::Move, 100.0, 100.0));
        let ended = tracker.dispatch(PointerEvent::mouse(PointerPhase::End, 100.0, 100.0));
        assert_eq!(moved.disposition, Disposition::Ignored);
        assert_eq!(ended.disposition, Disposition::Ignored);
        assert!(tracker.handlers().calls.is_empty());
    }

    #[test]
    fn test_end_without_moves_reports_vertical() {
        let (_source, mut tracker) = bound(PointerTypes::ALL);
        tracker.dispatch(PointerEvent::mouse(PointerPhase::Start, 0.0, 0.0));
        let ended = tracker.dispatch(PointerEvent::mouse(PointerPhase::End, 90.0, 0.0));
        assert_eq!(ended.is_vertical, Some(true));
    }

    #[test]
    fn test_cancel_deactivates_session() {
        let (_source, mut tracker) = bound(PointerTypes::ALL);
        tracker.dispatch(PointerEvent::touch(PointerPhase::Start, 0.0, 0.0));
        tracker.dispatch(PointerEvent::touch(PointerPhase::Cancel, 0.0, 0.0));
        let moved = tracker.dispatch(PointerEvent::touch(PointerPhase::Move, 0.0, 90.0));
        let ended = tracker.dispatch(PointerEvent::touch(PointerPhase::End, 0.0, 90.0));

        assert_eq!(moved.disposition, Disposition::Ignored);
        assert_eq!(ended.disposition, Disposition::Ignored);
        assert_eq!(tracker.handlers().calls, vec!["start (0, 0)", "cancel"]);
    }

    #[test]
    fn test_new_start_supersedes_session() {
        let (_source, mut tracker) = bound(PointerTypes::ALL);
        tracker.dispatch(PointerEvent::touch(PointerPhase::Start, 0.0, 0.0));
        tracker.dispatch(PointerEvent::touch(PointerPhase::Move, 100.0, 0.0));
        tracker.dispatch(PointerEvent::touch(PointerPhase::Start, 500.0, 500.0));

        let session = tracker.session().unwrap();
        assert_eq!(session.start(), Coordinate::new(500.0, 500.0));
        assert_eq!(session.totals(), (0.0, 0.0));
        assert!(!session.axis().is_decided());
    }

    #[test]
    fn test_unbound_pointer_type_is_ignored() {
        let (_source, mut tracker) = bound(PointerTypes::TOUCH_ONLY);
        let started = tracker.dispatch(PointerEvent::mouse(PointerPhase::Start, 0.0, 0.0));
        assert_eq!(started.disposition, Disposition::Ignored);
        assert!(tracker.session().is_none());
    }

    #[test]
    fn test_mouse_cancel_is_not_a_listener() {
        let (_source, mut tracker) = bound(PointerTypes::ALL);
        tracker.dispatch(PointerEvent::mouse(PointerPhase::Start, 0.0, 0.0));
        let cancelled = tracker.dispatch(PointerEvent::mouse(PointerPhase::Cancel, 0.0, 0.0));
        assert_eq!(cancelled.disposition, Disposition::Ignored);
        assert!(tracker.session().unwrap().is_active());
    }
}
