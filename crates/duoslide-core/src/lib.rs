//! duoslide core
//!
//! Shared plumbing for the duoslide crates: logging setup, profiling hooks, math types and
//! process-level configuration.

pub mod config;
pub mod logging;
pub mod math;
pub mod profiling;

pub use config::{Config, LogConfig, ProfilingMode};

/// Apply a process-level [`Config`].
///
/// Installs the tracing subscriber and, when requested and compiled in, starts the profiler.
/// Safe to call more than once; later calls leave an already installed subscriber in place.
pub fn init(config: &Config) {
    logging::init_with(&config.logging);
    match config.profiling {
        ProfilingMode::Off => {}
        ProfilingMode::Scopes => profiling::enable_scopes(),
        ProfilingMode::WithWebserver => {
            profiling::enable_scopes();
            profiling::init_profiling(profiling::ProfilingBackend::PuffinHttp);
        }
    }
}
