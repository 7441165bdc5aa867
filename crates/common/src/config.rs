//! Recognition thresholds and application configuration.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{SwipeError, SwipeResult};

/// Global swipekit configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SwipeConfig {
    /// Pointer tracker thresholds (noise buffer, axis lock).
    pub tracker: TrackerThresholds,

    /// Swipe classifier thresholds.
    pub classifier: SwipeThresholds,

    /// Whether left/right swipes may be registered.
    ///
    /// Hosts that already run another horizontal gesture recognizer turn
    /// this off so the two never compete for the same input.
    pub horizontal_swipes: bool,

    /// Logging configuration.
    pub logging: LoggingConfig,
}

/// Thresholds used while accumulating movement.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackerThresholds {
    /// Cumulative movement (px, per axis) treated as noise before the
    /// first move is forwarded.
    pub move_buffer_radius: f64,

    /// `deltaY / deltaX` below this locks the gesture horizontal.
    ///
    /// Not normalized for aspect ratio or DPI.
    pub axis_ratio: f64,
}

/// Thresholds a completed gesture must satisfy to count as a swipe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SwipeThresholds {
    /// Maximum drift (px) allowed on the axis perpendicular to the swipe.
    pub max_other_axis_distance: f64,

    /// Minimum travel (px) along the swipe axis.
    pub min_distance: f64,

    /// Maximum `|other| / primary` ratio.
    pub max_ratio: f64,

    /// Class-name marker that exempts a target from default suppression.
    pub no_prevent_default_marker: String,
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "swipekit=debug,warn").
    pub level: String,

    /// Whether to output structured JSON logs.
    pub json: bool,
}

impl Default for SwipeConfig {
    fn default() -> Self {
        Self {
            tracker: TrackerThresholds::default(),
            classifier: SwipeThresholds::default(),
            horizontal_swipes: true,
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for TrackerThresholds {
    fn default() -> Self {
        Self {
            move_buffer_radius: 40.0,
            axis_ratio: 0.3,
        }
    }
}

impl Default for SwipeThresholds {
    fn default() -> Self {
        Self {
            max_other_axis_distance: 75.0,
            min_distance: 30.0,
            max_ratio: 0.3,
            no_prevent_default_marker: "noPreventDefault".to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
        }
    }
}

impl SwipeConfig {
    /// Load config from the standard location, falling back to defaults.
    pub fn load() -> Self {
        Self::load_or_default(&config_file_path())
    }

    /// Load and validate `path`. A missing file yields the defaults; any
    /// other failure is logged and replaced by them.
    fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }
        match Self::load_from(path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("Ignoring config at {:?}: {}", path, e);
                Self::default()
            }
        }
    }

    /// Load config from an explicit path. Unlike [`SwipeConfig::load`], a
    /// missing or malformed file is an error.
    pub fn load_from(path: &Path) -> SwipeResult<Self> {
        if !path.exists() {
            return Err(SwipeError::FileNotFound {
                path: path.to_path_buf(),
            });
        }
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Save config to the standard location.
    pub fn save(&self) -> Result<(), std::io::Error> {
        let config_path = config_file_path();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self).map_err(std::io::Error::other)?;
        std::fs::write(config_path, json)
    }

    /// Reject thresholds that would make recognition meaningless.
    pub fn validate(&self) -> SwipeResult<()> {
        let checks = [
            ("tracker.move_buffer_radius", self.tracker.move_buffer_radius),
            ("tracker.axis_ratio", self.tracker.axis_ratio),
            (
                "classifier.max_other_axis_distance",
                self.classifier.max_other_axis_distance,
            ),
            ("classifier.min_distance", self.classifier.min_distance),
            ("classifier.max_ratio", self.classifier.max_ratio),
        ];
        for (name, value) in checks {
            if !value.is_finite() || value < 0.0 {
                return Err(SwipeError::config(format!(
                    "{name} must be a non-negative number, got {value}"
                )));
            }
        }
        Ok(())
    }
}

/// Standard config file location.
pub fn config_file_path() -> PathBuf {
    let base = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").unwrap_or_else(|_| "/tmp".to_string());
            PathBuf::from(home).join(".config")
        });
    base.join("swipekit").join("config.json")
}
