use crate::credential::{StaticTokenCredential, TokenCredential};
use azrm_base::{
    config::ArmClientConfig,
    error::{ArmError, Result},
};
use reqwest::{
    header::{HeaderMap, HeaderName, HeaderValue, ACCEPT, CONTENT_LENGTH, CONTENT_TYPE},
    Method, Url,
};
use serde::{de::DeserializeOwned, Deserialize};
use std::{str::FromStr, sync::Arc};

pub const CONTENT_TYPE_JSON: &str = "application/json; charset=utf-8";

/// Query parameters and headers contributed by an operation's option struct.
pub trait Options {
    fn to_headers(&self) -> Vec<(String, String)> {
        Vec::new()
    }
    fn to_query(&self) -> Vec<(String, String)> {
        Vec::new()
    }
}

/// No options.
impl Options for () {}

/// Description of one REST call.
#[derive(Clone, Debug, PartialEq)]
pub struct RequestOptions {
    pub content_type: &'static str,
    pub expected_status_codes: Vec<u16>,
    pub http_method: Method,
    /// path below the endpoint, usually a resource ID plus a suffix
    pub path: String,
    pub option_headers: Vec<(String, String)>,
    pub option_query: Vec<(String, String)>,
}

impl RequestOptions {
    pub fn new(http_method: Method, path: impl Into<String>, expected: &[u16]) -> Self {
        Self {
            content_type: CONTENT_TYPE_JSON,
            expected_status_codes: expected.to_vec(),
            http_method,
            path: path.into(),
            option_headers: Vec::new(),
            option_query: Vec::new(),
        }
    }

    pub fn with_options(mut self, options: &impl Options) -> Self {
        self.option_headers.extend(options.to_headers());
        self.option_query.extend(options.to_query());
        self
    }

    /// Full request URL: endpoint + path, `api-version`, then option query parameters.
    pub fn url(&self, endpoint: &Url, api_version: &str) -> Result<Url> {
        let mut url = endpoint.join(&self.path).map_err(|e| {
            ArmError::InvalidParameter(format!(
                "cannot join path {:?} to endpoint {}: {e:?}",
                self.path, endpoint
            ))
        })?;
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("api-version", api_version);
            for (k, v) in self.option_query.iter() {
                pairs.append_pair(k, v);
            }
        }
        Ok(url)
    }
}

/// Status, headers and body of a response that passed the expected-status check.
#[derive(Clone, Debug)]
pub struct RawResponse {
    pub status: u16,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

impl RawResponse {
    /// Decode the body as `T`; an empty body yields `None`.
    pub fn model<T: DeserializeOwned>(&self) -> Result<Option<T>> {
        decode_model(&self.body)
    }
}

/// Result of a typed operation.
#[derive(Clone, Debug)]
pub struct OperationResponse<T> {
    pub status: u16,
    pub headers: HeaderMap,
    pub model: Option<T>,
}

impl<T: DeserializeOwned> OperationResponse<T> {
    pub fn from_raw(raw: RawResponse) -> Result<Self> {
        let model = raw.model::<T>()?;
        Ok(Self {
            status: raw.status,
            headers: raw.headers,
            model,
        })
    }
}

impl OperationResponse<()> {
    /// For operations without a response model (the body is ignored).
    pub fn without_model(raw: RawResponse) -> Self {
        Self {
            status: raw.status,
            headers: raw.headers,
            model: None,
        }
    }
}

pub fn decode_model<T: DeserializeOwned>(body: &[u8]) -> Result<Option<T>> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(None);
    }
    serde_json::from_slice::<T>(body)
        .map(Some)
        .map_err(|e| ArmError::decode(std::any::type_name::<T>(), e))
}

#[derive(Deserialize)]
struct ErrorBody {
    error: Option<ErrorDetail>,
}

#[derive(Deserialize)]
struct ErrorDetail {
    code: Option<String>,
    message: Option<String>,
}

/// Check `status` against the expected set. A mismatch is decoded as an ARM error body when
/// possible.
pub fn check_status(status: u16, expected: &[u16], body: &[u8]) -> Result<()> {
    if expected.contains(&status) {
        return Ok(());
    }
    let parsed = serde_json::from_slice::<ErrorBody>(body).ok();
    let detail = parsed.and_then(|b| b.error);
    Err(ArmError::UnexpectedStatus {
        status,
        code: detail.as_ref().and_then(|d| d.code.clone()),
        message: detail.and_then(|d| d.message),
        body: String::from_utf8_lossy(body).into_owned(),
    })
}

/// Client for one resource provider API version.
#[derive(Clone, Debug)]
pub struct ResourceManagerClient {
    pub(crate) http: reqwest::Client,
    endpoint: Url,
    api_version: String,
    credential: Arc<dyn TokenCredential>,
}

impl ResourceManagerClient {
    pub fn new(
        config: &ArmClientConfig,
        api_version: impl Into<String>,
        credential: Arc<dyn TokenCredential>,
    ) -> Result<Self> {
        let endpoint = Url::from_str(&config.endpoint).map_err(|e| {
            ArmError::Config(format!(
                "cannot parse url from: {}, error= {e:?}",
                config.endpoint
            ))
        })?;
        let http = reqwest::Client::builder()
            .connect_timeout(config.connect_timeout())
            .timeout(config.request_timeout())
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(|e| ArmError::OtherError(format!("http client build error: {e:?}")))?;
        Ok(Self {
            http,
            endpoint,
            api_version: api_version.into(),
            credential,
        })
    }

    /// Client authenticated with the static token from the configuration.
    pub fn from_config(config: &ArmClientConfig, api_version: impl Into<String>) -> Result<Self> {
        let token = config.token.clone().ok_or_else(|| {
            ArmError::Credential(format!(
                "no token configured (set {}TOKEN)",
                azrm_base::ENV_PREFIX
            ))
        })?;
        Self::new(
            config,
            api_version,
            Arc::new(StaticTokenCredential::new(token)?),
        )
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    pub fn api_version(&self) -> &str {
        &self.api_version
    }

    /// Run one request described by `opts`. `body` is sent as JSON when present.
    pub async fn execute(
        &self,
        opts: &RequestOptions,
        body: Option<Vec<u8>>,
    ) -> Result<RawResponse> {
        let url = opts.url(&self.endpoint, &self.api_version)?;
        self.send(
            opts.http_method.clone(),
            url,
            &opts.option_headers,
            opts.content_type,
            body,
            &opts.expected_status_codes,
        )
        .await
    }

    pub(crate) async fn send(
        &self,
        method: Method,
        url: Url,
        option_headers: &[(String, String)],
        content_type: &str,
        body: Option<Vec<u8>>,
        expected: &[u16],
    ) -> Result<RawResponse> {
        let token = self.credential.token().await?;
        let mut hm = HeaderMap::new();
        hm.insert(ACCEPT, HeaderValue::from_static("application/json"));
        for (k, v) in option_headers.iter() {
            let k1: HeaderName = k.parse()?;
            let v1: HeaderValue = v.parse()?;
            hm.append(k1, v1);
        }
        let req = self
            .http
            .request(method.clone(), url.clone())
            .bearer_auth(token);
        let req = match body {
            Some(b) => {
                hm.insert(CONTENT_TYPE, HeaderValue::from_str(content_type)?);
                req.headers(hm).body(b)
            }
            None if method == Method::POST => {
                hm.insert(CONTENT_LENGTH, HeaderValue::from_static("0"));
                req.headers(hm)
            }
            None => req.headers(hm),
        };

        tracing::debug!("request: {} {}", method, url);
        let res = req.send().await?;
        let status = res.status().as_u16();
        let headers = res.headers().clone();
        let body = res.bytes().await?.to_vec();
        tracing::debug!("response: {} {} status={}", method, url, status);

        check_status(status, expected, &body)?;
        Ok(RawResponse {
            status,
            headers,
            body,
        })
    }
}
