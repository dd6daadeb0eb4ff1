use config::ArmClientConfig;
use once_cell::sync::Lazy;

pub mod config;
pub mod error;
pub mod tracing;

pub static APP_NAME: &str = "azrm";

/// prefix of the client configuration environment variables
pub static ENV_PREFIX: &str = "AZURE_";

pub static DEFAULT_ENDPOINT: &str = "https://management.azure.com";

/// Client configuration read once from the environment. Falls back to defaults when the
/// environment holds invalid values (the error is logged).
pub static ARM_CLIENT_CONFIG: Lazy<ArmClientConfig> = Lazy::new(|| {
    ArmClientConfig::from_env()
        .inspect_err(|e| ::tracing::warn!("invalid client config in env, use default: {:?}", e))
        .unwrap_or_default()
});
