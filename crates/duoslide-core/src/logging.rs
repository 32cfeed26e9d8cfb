use tracing_subscriber::EnvFilter;

use crate::config::LogConfig;

/// Install the default fmt subscriber.
pub fn init() -> bool {
    init_with(&LogConfig::default())
}

/// Install a fmt subscriber filtered by `RUST_LOG`, falling back to `config.filter`.
///
/// Returns `false` if a global subscriber was already set.
pub fn init_with(config: &LogConfig) -> bool {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(config.with_target)
        .try_init()
        .is_ok()
}
