//! Log subscriber setup
//!
//! `RUST_LOG` wins when set. Otherwise the configured level applies to this
//! crate and to tower-http request tracing; other crates log warnings only.

use tracing_subscriber::EnvFilter;

/// Filter directives used when `RUST_LOG` is unset
pub fn default_filter(level: &str) -> String {
    format!("warn,msgboard={level},tower_http={level}", level = level)
}

/// Install the global fmt subscriber
///
/// Calling it again is a no-op, so tests and repeated CLI runs are safe.
pub fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(level)));

    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init()
        .is_ok();

    if installed {
        tracing::debug!(level, "logging initialized");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter_parses() {
        let directives = default_filter("debug");
        assert_eq!(directives, "warn,msgboard=debug,tower_http=debug");
        assert!(EnvFilter::try_new(directives).is_ok());
    }

    #[test]
    fn test_init_twice_is_harmless() {
        init_logging("info");
        init_logging("info");
    }
}
