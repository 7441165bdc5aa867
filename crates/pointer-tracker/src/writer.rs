//! Trace recording.
//!
//! [`TraceWriter`] streams a trace to any `Write` sink while it is being
//! captured; [`write_trace`] saves a complete [`Trace`] in one call. Both
//! keep a per-surface record count so callers can report what was captured.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use swipekit_common::error::SwipeResult;
use swipekit_model::{PointerEvent, SurfaceId, Trace, TraceHeader, TraceRecord};

/// Records written, per surface.
pub type SurfaceCounts = BTreeMap<SurfaceId, u64>;

/// Streams trace records as JSONL.
pub struct TraceWriter<W: Write> {
    out: W,
    header: Option<TraceHeader>,
    counts: SurfaceCounts,
}

impl TraceWriter<BufWriter<File>> {
    /// Create (or truncate) a trace file, creating parent directories.
    pub fn create(path: impl AsRef<Path>, header: Option<TraceHeader>) -> SwipeResult<Self> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        Self::new(BufWriter::new(File::create(path)?), header)
    }
}

impl<W: Write> TraceWriter<W> {
    /// Start a trace on `out`, writing the header line first when present.
    pub fn new(mut out: W, header: Option<TraceHeader>) -> SwipeResult<Self> {
        if let Some(header) = &header {
            out.write_all(b"# ")?;
            serde_json::to_writer(&mut out, header)?;
            out.write_all(b"\n")?;
        }
        Ok(Self {
            out,
            header,
            counts: SurfaceCounts::new(),
        })
    }

    /// Append one event delivered to `surface`.
    pub fn record(&mut self, surface: SurfaceId, event: &PointerEvent) -> SwipeResult<()> {
        self.append(&TraceRecord::new(surface, event.clone()))
    }

    /// Append an already-built record.
    pub fn append(&mut self, record: &TraceRecord) -> SwipeResult<()> {
        serde_json::to_writer(&mut self.out, record)?;
        self.out.write_all(b"\n")?;
        *self.counts.entry(record.surface).or_default() += 1;
        Ok(())
    }

    pub fn header(&self) -> Option<&TraceHeader> {
        self.header.as_ref()
    }

    pub fn counts(&self) -> &SurfaceCounts {
        &self.counts
    }

    /// Flush the sink and return the per-surface counts.
    pub fn finish(mut self) -> SwipeResult<SurfaceCounts> {
        self.out.flush()?;
        tracing::debug!(
            surfaces = self.counts.len(),
            records = self.counts.values().sum::<u64>(),
            "Trace written"
        );
        Ok(self.counts)
    }
}

/// Save `trace` to `path`.
pub fn write_trace(path: impl AsRef<Path>, trace: &Trace) -> SwipeResult<SurfaceCounts> {
    let mut writer = TraceWriter::create(path, trace.header.clone())?;
    for record in &trace.records {
        writer.append(record)?;
    }
    writer.finish()
}
