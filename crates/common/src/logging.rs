//! Diagnostic logging for swipekit hosts and tools.
//!
//! Recognition logs axis locks, suppressed defaults, and fired swipes at
//! `debug`; the subscriber installed here decides whether any of it is shown.

use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;

const FALLBACK_LEVEL: &str = "info";

/// Pick the filter directives: a non-empty `RUST_LOG` value wins over the
/// configured level, and anything unparsable falls back to `info`.
fn filter_for(env: Option<&str>, level: &str) -> EnvFilter {
    env.filter(|directives| !directives.trim().is_empty())
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .or_else(|| EnvFilter::try_new(level).ok())
        .unwrap_or_else(|| EnvFilter::new(FALLBACK_LEVEL))
}

/// Install a stderr subscriber for `config`.
///
/// Returns `false` when a global subscriber is already installed; the
/// existing one is left in place.
pub fn init_logging(config: &LoggingConfig) -> bool {
    let env = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter_for(env.as_deref(), &config.level))
        .with_writer(std::io::stderr);

    let installed = if config.json {
        builder.json().try_init()
    } else {
        builder.compact().with_target(true).try_init()
    };
    installed.is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_directives_override_configured_level() {
        let filter = filter_for(Some("swipekit_classifier=trace"), "warn");
        assert_eq!(filter.to_string(), "swipekit_classifier=trace");
    }

    #[test]
    fn test_configured_level_used_without_env() {
        assert_eq!(filter_for(None, "warn").to_string(), "warn");
        assert_eq!(filter_for(Some("  "), "debug").to_string(), "debug");
    }

    #[test]
    fn test_second_init_keeps_first_subscriber() {
        init_logging(&LoggingConfig::default());
        let json = LoggingConfig {
            json: true,
            ..LoggingConfig::default()
        };
        assert!(!init_logging(&json));
    }
}
