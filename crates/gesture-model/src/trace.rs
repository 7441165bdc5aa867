//! Recorded pointer traces.
//!
//! A trace is JSONL: an optional header line prefixed with `# `, then one
//! [`TraceRecord`] per line. Traces let a host capture real input once and
//! replay it against the recognizer.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::event::PointerEvent;
use crate::surface::{ScrollMetrics, SurfaceId};

/// Current trace schema version.
pub const TRACE_SCHEMA_VERSION: &str = "1.0";

/// Metadata written as the first line of a trace.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TraceHeader {
    /// Schema version for forward compatibility.
    pub schema_version: String,

    /// Wall-clock time the trace was recorded.
    pub recorded_at: DateTime<Utc>,

    /// Scroll position of the surface while recording, if known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scroll: Option<ScrollMetrics>,

    /// Whether the recording host was a desktop (non-touch-primary) context.
    #[serde(default)]
    pub desktop: bool,
}

impl TraceHeader {
    pub fn new(scroll: Option<ScrollMetrics>, desktop: bool) -> Self {
        Self {
            schema_version: TRACE_SCHEMA_VERSION.to_string(),
            recorded_at: Utc::now(),
            scroll,
            desktop,
        }
    }
}

/// One recorded event and the surface it was delivered to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TraceRecord {
    #[serde(default = "default_surface")]
    pub surface: SurfaceId,

    #[serde(flatten)]
    pub event: PointerEvent,
}

fn default_surface() -> SurfaceId {
    SurfaceId(0)
}

impl TraceRecord {
    pub fn new(surface: SurfaceId, event: PointerEvent) -> Self {
        Self { surface, event }
    }
}

/// A parsed trace file.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Trace {
    pub header: Option<TraceHeader>,
    pub records: Vec<TraceRecord>,
}

/// A trace line that failed to parse.
#[derive(Debug, thiserror::Error)]
#[error("trace line {line}: {source}")]
pub struct TraceParseError {
    /// One-based line number.
    pub line: usize,
    #[source]
    pub source: serde_json::Error,
}

/// Parse a trace from JSONL content.
///
/// The first `# ` line is read as the header; other comment lines and
/// blank lines are skipped.
pub fn parse_trace(jsonl: &str) -> Result<Trace, TraceParseError> {
    let mut trace = Trace::default();

    for (idx, raw) in jsonl.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }
        let wrap = |source| TraceParseError {
            line: idx + 1,
            source,
        };
        if let Some(comment) = line.strip_prefix('#') {
            if trace.header.is_none() && trace.records.is_empty() {
                trace.header = Some(serde_json::from_str(comment.trim()).map_err(wrap)?);
            }
            continue;
        }
        trace
            .records
            .push(serde_json::from_str(line).map_err(wrap)?);
    }

    Ok(trace)
}

/// Serialize a trace to JSONL.
pub fn serialize_trace(trace: &Trace) -> Result<String, serde_json::Error> {
    let mut output = String::new();
    if let Some(header) = &trace.header {
        output.push_str("# ");
        output.push_str(&serde_json::to_string(header)?);
        output.push('\n');
    }
    for record in &trace.records {
        output.push_str(&serde_json::to_string(record)?);
        output.push('\n');
    }
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::{PointerKind, PointerPhase};

    #[test]
    fn test_parse_trace_with_header() {
        let jsonl = concat!(
            "# {\"schema_version\":\"1.0\",\"recorded_at\":\"2026-01-01T00:00:00Z\",",
            "\"scroll\":{\"scroll_top\":0.0,\"content_height\":800.0,\"viewport_height\":800.0},",
            "\"desktop\":true}\n",
            "{\"surface\":1,\"t\":0,\"phase\":\"start\",",
            "\"pointer\":\"mouse\",\"x\":100.0,\"y\":100.0}\n",
            "\n",
            "{\"t\":5,\"phase\":\"end\",\"pointer\":\"mouse\",\"x\":100.0,\"y\":50.0}\n",
        );

        let trace = parse_trace(jsonl).unwrap();
        let header = trace.header.unwrap();
        assert!(header.desktop);
        assert_eq!(header.scroll.unwrap().viewport_height, 800.0);

        assert_eq!(trace.records.len(), 2);
        assert_eq!(trace.records[0].surface, SurfaceId(1));
        assert_eq!(trace.records[0].event.pointer, PointerKind::Mouse);
        assert_eq!(trace.records[1].surface, SurfaceId(0));
        assert_eq!(trace.records[1].event.phase, PointerPhase::End);
    }

    #[test]
    fn test_parse_trace_reports_line_number() {
        let jsonl = concat!(
            "{\"phase\":\"start\",\"pointer\":\"touch\",\"x\":0,\"y\":0}\n",
            "{\"phase\":\"wiggle\"}\n",
        );
        let err = parse_trace(jsonl).unwrap_err();
        assert_eq!(err.line, 2);
    }

    #[test]
    fn test_serialized_trace_parses_back() {
        let trace = Trace {
            header: Some(TraceHeader::new(Some(ScrollMetrics::unscrollable(600.0)), false)),
            records: vec![
                TraceRecord::new(SurfaceId(0), PointerEvent::touch(PointerPhase::Start, 1.0, 2.0)),
                TraceRecord::new(SurfaceId(0), PointerEvent::touch(PointerPhase::End, 1.0, 90.0)),
            ],
        };
        let jsonl = serialize_trace(&trace).unwrap();
        assert!(jsonl.starts_with("# "));
        assert_eq!(parse_trace(&jsonl).unwrap(), trace);
    }
}
