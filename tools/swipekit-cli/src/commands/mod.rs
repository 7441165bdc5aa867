pub mod config;
pub mod replay;
pub mod synth;
pub mod validate;

use std::path::Path;

use swipekit_model::{parse_trace, Trace};

/// Read and parse a trace file.
pub fn load_trace(path: &Path) -> anyhow::Result<Trace> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read trace {}: {e}", path.display()))?;
    parse_trace(&content).map_err(|e| anyhow::anyhow!("Failed to parse {}: {e}", path.display()))
}
