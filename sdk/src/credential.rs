use async_trait::async_trait;
use azrm_base::error::{ArmError, Result};
use std::fmt;

/// Source of the bearer token attached to every request.
#[async_trait]
pub trait TokenCredential: Send + Sync + fmt::Debug {
    async fn token(&self) -> Result<String>;
}

/// A token obtained elsewhere (e.g. `az account get-access-token`).
#[derive(Clone)]
pub struct StaticTokenCredential {
    token: String,
}

impl StaticTokenCredential {
    pub fn new(token: impl Into<String>) -> Result<Self> {
        let token = token.into();
        if token.trim().is_empty() {
            return Err(ArmError::Credential("empty bearer token".to_string()));
        }
        Ok(Self { token })
    }
}

impl fmt::Debug for StaticTokenCredential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StaticTokenCredential")
            .field("token", &"<redacted>")
            .finish()
    }
}

#[async_trait]
impl TokenCredential for StaticTokenCredential {
    async fn token(&self) -> Result<String> {
        Ok(self.token.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_static_token() {
        let c = StaticTokenCredential::new("abc").unwrap();
        assert_eq!(c.token().await.unwrap(), "abc");
        assert!(!format!("{c:?}").contains("abc"));
        assert!(StaticTokenCredential::new("  ").is_err());
    }
}
