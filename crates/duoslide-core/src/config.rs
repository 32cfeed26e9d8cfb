/// Process-level configuration for hosts embedding duoslide widgets.
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub logging: LogConfig,
    pub profiling: ProfilingMode,
}

/// Logging configuration consumed by [`crate::logging::init_with`].
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is not set.
    pub filter: String,
    /// Include the event target (module path) in output.
    pub with_target: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        LogConfig {
            filter: "info,duoslide_ui=debug".to_string(),
            with_target: true,
        }
    }
}

impl LogConfig {
    /// Log everything, including per-sample drag traces.
    pub fn verbose() -> Self {
        LogConfig {
            filter: "trace".to_string(),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProfilingMode {
    /// Profiling is disabled
    #[default]
    Off,
    /// Profiling scopes are recorded in-process
    Scopes,
    /// Profiling scopes are recorded and served to external tools such as 'puffin_viewer'
    WithWebserver,
}
