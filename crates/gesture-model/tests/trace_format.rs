use proptest::prelude::*;

use swipekit_model::{
    parse_trace, serialize_trace, Coordinate, PointerEvent, PointerPhase, ScrollMetrics,
    SurfaceId, Trace, TraceHeader, TraceRecord,
};

fn phase() -> impl Strategy<Value = PointerPhase> {
    prop_oneof![
        Just(PointerPhase::Start),
        Just(PointerPhase::Move),
        Just(PointerPhase::End),
        Just(PointerPhase::Cancel),
    ]
}

/// Whole-pixel positions, which survive a JSON round trip exactly.
fn position() -> impl Strategy<Value = (f64, f64)> {
    (-4000i32..4000, -4000i32..4000).prop_map(|(x, y)| (f64::from(x), f64::from(y)))
}

fn event() -> impl Strategy<Value = PointerEvent> {
    (any::<bool>(), phase(), position(), any::<u64>()).prop_map(|(touch, phase, (x, y), t)| {
        let event = if touch {
            PointerEvent::touch(phase, x, y)
        } else {
            PointerEvent::mouse(phase, x, y)
        };
        event.at(t)
    })
}

fn header() -> impl Strategy<Value = Option<TraceHeader>> {
    let scroll = (0u16..2000, 0u16..4000, 1u16..1200).prop_map(|(top, content, viewport)| {
        ScrollMetrics::new(f64::from(top), f64::from(content), f64::from(viewport))
    });
    prop::option::of((prop::option::of(scroll), any::<bool>()))
        .prop_map(|h| h.map(|(scroll, desktop)| TraceHeader::new(scroll, desktop)))
}

fn trace() -> impl Strategy<Value = Trace> {
    let record = (0usize..8, event()).prop_map(|(s, e)| TraceRecord::new(SurfaceId(s), e));
    (header(), prop::collection::vec(record, 0..32))
        .prop_map(|(header, records)| Trace { header, records })
}

proptest! {
    #[test]
    fn serialized_trace_parses_to_the_same_trace(original in trace()) {
        let jsonl = serialize_trace(&original).unwrap();
        prop_assert_eq!(parse_trace(&jsonl).unwrap(), original);
    }

    #[test]
    fn constructors_report_their_position(phase in phase(), (x, y) in position()) {
        prop_assert_eq!(PointerEvent::mouse(phase, x, y).coordinates(), Coordinate::new(x, y));
        prop_assert_eq!(PointerEvent::touch(phase, x, y).coordinates(), Coordinate::new(x, y));
    }
}
