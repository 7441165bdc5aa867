use proptest::prelude::*;

use swipekit_common::config::TrackerThresholds;
use swipekit_model::{Coordinate, PointerEvent, PointerPhase, PointerTypes, SurfaceId};
use swipekit_pointer_tracker::{
    Disposition, GestureEvent, PointerHandlers, PointerTracker, ReplaySource,
};

#[derive(Default)]
struct MoveLog {
    moves: Vec<bool>,
}

impl PointerHandlers for MoveLog {
    fn on_move(&mut self, _coords: Coordinate, event: &mut GestureEvent) {
        self.moves.push(event.is_vertical.unwrap_or(true));
    }
}

fn tracker() -> PointerTracker<MoveLog> {
    let mut source = ReplaySource::empty();
    PointerTracker::bind(
        &mut source,
        SurfaceId(0),
        MoveLog::default(),
        PointerTypes::ALL,
        TrackerThresholds::default(),
    )
    .unwrap()
}

const QUIET_TRAVEL: f64 = 39.9;

/// Step lists whose cumulative absolute movement stays under 40px per axis.
/// Single steps may cover almost the whole buffer.
fn quiet_steps() -> impl Strategy<Value = Vec<(f64, f64)>> {
    prop::collection::vec((-39.0f64..39.0, -39.0f64..39.0), 0..7).prop_map(|mut steps| {
        let travel_x: f64 = steps.iter().map(|(dx, _)| dx.abs()).sum();
        let travel_y: f64 = steps.iter().map(|(_, dy)| dy.abs()).sum();
        let scale_x = if travel_x > QUIET_TRAVEL { QUIET_TRAVEL / travel_x } else { 1.0 };
        let scale_y = if travel_y > QUIET_TRAVEL { QUIET_TRAVEL / travel_y } else { 1.0 };
        for (dx, dy) in &mut steps {
            *dx *= scale_x;
            *dy *= scale_y;
        }
        steps
    })
}

fn steps() -> impl Strategy<Value = Vec<(f64, f64)>> {
    prop::collection::vec((-80.0f64..80.0, -80.0f64..80.0), 1..24)
}

proptest! {
    #[test]
    fn moves_inside_noise_buffer_never_fire(
        start in (0.0f64..1000.0, 0.0f64..1000.0),
        steps in quiet_steps(),
    ) {
        let mut tracker = tracker();
        tracker.dispatch(PointerEvent::touch(PointerPhase::Start, start.0, start.1));

        let (mut x, mut y) = start;
        for (dx, dy) in steps {
            x += dx;
            y += dy;
            let result = tracker.dispatch(PointerEvent::touch(PointerPhase::Move, x, y));
            prop_assert_eq!(result.disposition, Disposition::Buffered);
        }
        prop_assert!(tracker.handlers().moves.is_empty());
    }

    #[test]
    fn axis_decision_never_flips(
        start in (0.0f64..1000.0, 0.0f64..1000.0),
        steps in steps(),
    ) {
        let mut tracker = tracker();
        tracker.dispatch(PointerEvent::mouse(PointerPhase::Start, start.0, start.1));

        let (mut x, mut y) = start;
        for (dx, dy) in steps {
            x += dx;
            y += dy;
            tracker.dispatch(PointerEvent::mouse(PointerPhase::Move, x, y));
        }

        let moves = &tracker.handlers().moves;
        if let Some(first) = moves.first() {
            prop_assert!(moves.iter().all(|v| v == first));
        }
    }

    #[test]
    fn start_always_resets_accumulators(
        first in steps(),
        restart in (0.0f64..1000.0, 0.0f64..1000.0),
    ) {
        let mut tracker = tracker();
        tracker.dispatch(PointerEvent::mouse(PointerPhase::Start, 0.0, 0.0));
        let (mut x, mut y) = (0.0, 0.0);
        for (dx, dy) in first {
            x += dx;
            y += dy;
            tracker.dispatch(PointerEvent::mouse(PointerPhase::Move, x, y));
        }

        tracker.dispatch(PointerEvent::mouse(PointerPhase::Start, restart.0, restart.1));
        let session = tracker.session().unwrap();
        prop_assert_eq!(session.totals(), (0.0, 0.0));
        prop_assert!(!session.axis().is_decided());
        prop_assert!(session.is_active());
    }
}
