use thiserror::Error;

#[derive(Debug, Error)]
pub enum ArmError {
    #[error("InvalidParameter({0})")]
    InvalidParameter(String),
    #[error("ResourceIdError({0})")]
    ResourceId(String),
    /// JSON structural error, `target` names the type (and variant) being decoded
    #[error("DecodeError(decoding {target}: {source})")]
    Decode {
        target: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("EncodeError(encoding {target}: {source})")]
    Encode {
        target: String,
        #[source]
        source: serde_json::Error,
    },
    #[error(
        "UnexpectedStatus(status={status}, code={}, message={})",
        .code.as_deref().unwrap_or("-"),
        .message.as_deref().unwrap_or("-")
    )]
    UnexpectedStatus {
        status: u16,
        code: Option<String>,
        message: Option<String>,
        body: String,
    },
    #[error("UrlError({0:?})")]
    UrlError(url::ParseError),
    #[error("HeaderError({0})")]
    HeaderError(String),
    #[error("ReqwestError({0:?})")]
    ReqwestError(reqwest::Error),
    #[error("ConfigError({0})")]
    Config(String),
    #[error("CredentialError({0})")]
    Credential(String),
    #[error("OtherError({0})")]
    OtherError(String),
}

impl ArmError {
    pub fn decode(target: impl Into<String>, source: serde_json::Error) -> Self {
        ArmError::Decode {
            target: target.into(),
            source,
        }
    }
    pub fn encode(target: impl Into<String>, source: serde_json::Error) -> Self {
        ArmError::Encode {
            target: target.into(),
            source,
        }
    }

    /// Status code of a failed response, if the error came from the service.
    pub fn status(&self) -> Option<u16> {
        match self {
            ArmError::UnexpectedStatus { status, .. } => Some(*status),
            ArmError::ReqwestError(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// true for 404 responses (resource or parent missing)
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}

impl From<reqwest::Error> for ArmError {
    fn from(e: reqwest::Error) -> Self {
        ArmError::ReqwestError(e)
    }
}
impl From<url::ParseError> for ArmError {
    fn from(e: url::ParseError) -> Self {
        ArmError::UrlError(e)
    }
}
impl From<envy::Error> for ArmError {
    fn from(e: envy::Error) -> Self {
        ArmError::Config(format!("cannot read config from env: {e:?}"))
    }
}
impl From<http::header::InvalidHeaderValue> for ArmError {
    fn from(e: http::header::InvalidHeaderValue) -> Self {
        ArmError::HeaderError(format!("header value error: {e:?}"))
    }
}
impl From<http::header::InvalidHeaderName> for ArmError {
    fn from(e: http::header::InvalidHeaderName) -> Self {
        ArmError::HeaderError(format!("header name error: {e:?}"))
    }
}

pub type Result<T> = std::result::Result<T, ArmError>;
