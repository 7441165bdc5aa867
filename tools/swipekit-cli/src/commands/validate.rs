//! Check a trace for event ordering problems.

use std::collections::BTreeMap;
use std::path::PathBuf;

use swipekit_model::{EventName, PointerPhase, SurfaceId, Trace};

/// Ordering problems found in a trace. None of them stop a replay; the
/// recognizer ignores the offending events.
pub fn find_issues(trace: &Trace) -> Vec<String> {
    let mut issues = Vec::new();
    let mut active: BTreeMap<SurfaceId, bool> = BTreeMap::new();
    let mut last_timestamp: BTreeMap<SurfaceId, u64> = BTreeMap::new();

    for (idx, record) in trace.records.iter().enumerate() {
        let event = &record.event;
        let surface = record.surface;
        let n = idx + 1;

        if let Some(prev) = last_timestamp.insert(surface, event.timestamp_ns) {
            if event.timestamp_ns < prev {
                issues.push(format!("record {n}: timestamp goes backwards on {surface}"));
            }
        }

        if EventName::for_input(event.pointer, event.phase).is_none() {
            issues.push(format!(
                "record {n}: {:?} has no {:?} listener and is never delivered",
                event.phase, event.pointer
            ));
            continue;
        }

        let in_gesture = active.entry(surface).or_insert(false);
        match event.phase {
            PointerPhase::Start => *in_gesture = true,
            PointerPhase::Move if !*in_gesture => {
                issues.push(format!("record {n}: move without start on {surface}"));
            }
            PointerPhase::End if !*in_gesture => {
                issues.push(format!("record {n}: end without start on {surface}"));
            }
            PointerPhase::End | PointerPhase::Cancel => *in_gesture = false,
            PointerPhase::Move => {}
        }
    }

    issues
}

pub fn run(path: PathBuf) -> anyhow::Result<()> {
    println!("Validating trace: {}", path.display());

    let trace = super::load_trace(&path)?;

    match &trace.header {
        Some(header) => {
            println!("  Schema: {}", header.schema_version);
            println!("  Recorded: {}", header.recorded_at);
            if let Some(scroll) = header.scroll {
                println!(
                    "  Scroll: top={} content={} viewport={}",
                    scroll.scroll_top, scroll.content_height, scroll.viewport_height
                );
            }
            println!("  Desktop: {}", header.desktop);
        }
        None => println!("  Header: missing"),
    }
    println!("  Records: {}", trace.records.len());

    let issues = find_issues(&trace);
    if issues.is_empty() {
        println!("\nTrace is valid.");
    } else {
        println!("\nValidation issues:");
        for issue in &issues {
            println!("  - {issue}");
        }
        println!(
            "\n{} issue(s) found. Affected events will be ignored on replay.",
            issues.len()
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use swipekit_model::{PointerEvent, TraceRecord};

    fn trace(events: Vec<PointerEvent>) -> Trace {
        Trace {
            header: None,
            records: events
                .into_iter()
                .map(|e| TraceRecord::new(SurfaceId(0), e))
                .collect(),
        }
    }

    #[test]
    fn test_clean_gesture_has_no_issues() {
        let t = trace(vec![
            PointerEvent::touch(PointerPhase::Start, 0.0, 0.0).at(0),
            PointerEvent::touch(PointerPhase::Move, 50.0, 0.0).at(10),
            PointerEvent::touch(PointerPhase::End, 90.0, 0.0).at(20),
        ]);
        assert!(find_issues(&t).is_empty());
    }

    #[test]
    fn test_reports_ordering_problems() {
        let t = trace(vec![
            PointerEvent::mouse(PointerPhase::Move, 0.0, 0.0).at(10),
            PointerEvent::mouse(PointerPhase::Cancel, 0.0, 0.0).at(20),
            PointerEvent::mouse(PointerPhase::End, 0.0, 0.0).at(5),
        ]);
        let issues = find_issues(&t);
        assert_eq!(issues.len(), 4);
        assert!(issues[0].contains("move without start"));
        assert!(issues[1].contains("never delivered"));
        assert!(issues[2].contains("backwards"));
        assert!(issues[3].contains("end without start"));
    }
}
