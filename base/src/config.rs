/// Connection settings for the resource-manager client
///
/// # Environment Variables
/// - `AZURE_ENDPOINT`: Resource manager endpoint (default: https://management.azure.com)
/// - `AZURE_TOKEN`: Bearer token used for every request (no default)
/// - `AZURE_USER_AGENT`: User-Agent header value (default: azrm/<version>)
/// - `AZURE_REQUEST_TIMEOUT_SEC`: Whole request timeout in seconds (default: 60)
/// - `AZURE_CONNECT_TIMEOUT_SEC`: Connect timeout in seconds (default: 10)
#[derive(serde::Deserialize, Clone, Debug, PartialEq)]
pub struct ArmClientConfig {
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    #[serde(default = "default_request_timeout_sec")]
    pub request_timeout_sec: u64,
    #[serde(default = "default_connect_timeout_sec")]
    pub connect_timeout_sec: u64,
}

fn default_endpoint() -> String {
    crate::DEFAULT_ENDPOINT.to_string()
}
fn default_user_agent() -> String {
    format!("{}/{}", crate::APP_NAME, env!("CARGO_PKG_VERSION"))
}
fn default_request_timeout_sec() -> u64 {
    60
}
fn default_connect_timeout_sec() -> u64 {
    10
}

impl Default for ArmClientConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            token: None,
            user_agent: default_user_agent(),
            request_timeout_sec: default_request_timeout_sec(),
            connect_timeout_sec: default_connect_timeout_sec(),
        }
    }
}

impl ArmClientConfig {
    /// Load configuration from `AZURE_*` environment variables (a `.env` file is read first)
    pub fn from_env() -> crate::error::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_iter(std::env::vars())
    }

    /// Same as `from_env` over an explicit set of variables
    pub fn from_iter<I>(vars: I) -> crate::error::Result<Self>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let conf = envy::prefixed(crate::ENV_PREFIX).from_iter::<_, Self>(vars)?;
        url::Url::parse(&conf.endpoint).map_err(|e| {
            crate::error::ArmError::Config(format!(
                "invalid endpoint: {}, error= {e:?}",
                conf.endpoint
            ))
        })?;
        Ok(conf)
    }

    pub fn request_timeout(&self) -> std::time::Duration {
        std::time::Duration::from_secs(self.request_timeout_sec)
    }

    pub fn connect_timeout(&self) -> std::time::Duration {
        std::time::Duration::from_secs(self.connect_timeout_sec)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_default_config() {
        let config = ArmClientConfig::from_iter(vars(&[])).unwrap();
        assert_eq!(config, ArmClientConfig::default());
        assert_eq!(config.endpoint, "https://management.azure.com");
        assert_eq!(config.request_timeout_sec, 60);
        assert_eq!(config.connect_timeout_sec, 10);
        assert!(config.user_agent.starts_with("azrm/"));
    }

    #[test]
    fn test_config_from_vars() {
        let config = ArmClientConfig::from_iter(vars(&[
            ("AZURE_ENDPOINT", "https://management.chinacloudapi.cn"),
            ("AZURE_TOKEN", "secret"),
            ("AZURE_REQUEST_TIMEOUT_SEC", "120"),
            ("UNRELATED", "ignored"),
        ]))
        .unwrap();
        assert_eq!(config.endpoint, "https://management.chinacloudapi.cn");
        assert_eq!(config.token.as_deref(), Some("secret"));
        assert_eq!(config.request_timeout().as_secs(), 120);
    }

    #[test]
    fn test_invalid_endpoint() {
        let err = ArmClientConfig::from_iter(vars(&[("AZURE_ENDPOINT", "not a url")]))
            .unwrap_err();
        assert!(err.to_string().contains("invalid endpoint"));
    }
}
