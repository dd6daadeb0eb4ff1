use crate::error::{ArmError, Result};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Logging settings
///
/// # Environment Variables
/// - `LOG_LEVEL`: default filter directive when `RUST_LOG` is not set (default: info)
/// - `LOG_USE_JSON`: emit json lines instead of human readable text (default: false)
/// - `LOG_USE_STDOUT`: write to stdout instead of stderr (default: false)
#[derive(serde::Deserialize, Clone, Debug, PartialEq)]
pub struct LoggingConfig {
    #[serde(default = "default_level")]
    pub level: String,
    #[serde(default)]
    pub use_json: bool,
    #[serde(default)]
    pub use_stdout: bool,
}

fn default_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            use_json: false,
            use_stdout: false,
        }
    }
}

pub fn load_tracing_config_from_env() -> Result<LoggingConfig> {
    envy::prefixed("LOG_")
        .from_env::<LoggingConfig>()
        .map_err(|e| ArmError::Config(format!("cannot read logging config from env: {e:?}")))
}

impl LoggingConfig {
    fn env_filter(&self) -> Result<EnvFilter> {
        match EnvFilter::try_from_default_env() {
            Ok(f) => Ok(f),
            Err(_) => EnvFilter::try_new(&self.level).map_err(|e| {
                ArmError::Config(format!("invalid log level: {}, error= {e:?}", self.level))
            }),
        }
    }
}

/// Install the global subscriber. Calling it twice returns an error instead of panicking.
pub fn tracing_init(conf: LoggingConfig) -> Result<()> {
    let filter = conf.env_filter()?;
    let registry = tracing_subscriber::registry().with(filter);
    let res = match (conf.use_json, conf.use_stdout) {
        (true, true) => registry
            .with(fmt::layer().json().with_writer(std::io::stdout))
            .try_init(),
        (true, false) => registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .try_init(),
        (false, true) => registry
            .with(fmt::layer().with_writer(std::io::stdout))
            .try_init(),
        (false, false) => registry
            .with(fmt::layer().with_writer(std::io::stderr))
            .try_init(),
    };
    res.map_err(|e| ArmError::OtherError(format!("tracing init error: {e:?}")))
}

/// Test helper: install a plain subscriber at `level`, ignoring repeated calls.
pub fn tracing_init_test(level: tracing::Level) {
    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_test_writer()
        .try_init();
}
