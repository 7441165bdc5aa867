//! Show the effective configuration.

use std::path::Path;

use swipekit_common::config::{config_file_path, SwipeConfig};

pub fn run(config: &SwipeConfig, explicit: Option<&Path>) -> anyhow::Result<()> {
    let path = explicit.map_or_else(config_file_path, Path::to_path_buf);
    let state = if path.exists() { "" } else { " (not found, using defaults)" };

    println!("Config file: {}{state}", path.display());
    println!("{}", serde_json::to_string_pretty(config)?);
    Ok(())
}
