//! Logging setup.
//!
//! Thin wrapper over `tracing-subscriber` so every host initializes the
//! same way: `RUST_LOG` wins, otherwise the provided default filter.

use tracing_subscriber::EnvFilter;

/// Initialize logging with an `info` default.
pub fn init() {
    init_with_filter("info");
}

/// Initialize logging with the given default filter directive.
///
/// Safe to call more than once; later calls are no-ops.
pub fn init_with_filter(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn double_init_is_harmless() {
        init();
        init_with_filter("debug");
        tracing::debug!("logging initialized twice without panic");
    }
}
