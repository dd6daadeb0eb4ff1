//! `nextLink` pagination of ARM list operations.

use crate::client::{decode_model, RequestOptions, ResourceManagerClient};
use async_stream::stream;
use azrm_base::error::{ArmError, Result};
use futures::stream::{BoxStream, StreamExt};
use reqwest::{header::HeaderMap, Url};
use serde::{de::DeserializeOwned, Deserialize};

/// One page of an ARM list response.
#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(bound(deserialize = "T: DeserializeOwned"))]
pub struct Page<T> {
    #[serde(default = "Vec::new")]
    pub value: Vec<T>,
    #[serde(rename = "nextLink", default)]
    pub next_link: Option<String>,
}

impl<T> Page<T> {
    /// true when another page follows
    pub fn has_next(&self) -> bool {
        self.next_link.as_deref().is_some_and(|l| !l.is_empty())
    }
}

/// First page of a list operation together with the response metadata.
#[derive(Clone, Debug)]
pub struct PageResponse<T> {
    pub status: u16,
    pub headers: HeaderMap,
    pub page: Page<T>,
}

/// Complete result of a `*_complete` list operation.
#[derive(Clone, Debug, PartialEq)]
pub struct CompleteResponse<T> {
    pub items: Vec<T>,
    /// number of pages fetched
    pub pages: usize,
}

/// URL of the page after the current one.
///
/// `nextLink` is normally absolute and already carries `api-version`; a relative link is
/// resolved against `endpoint` and a missing `api-version` is appended.
pub fn next_page_url(endpoint: &Url, next_link: &str, api_version: &str) -> Result<Url> {
    let mut url = endpoint.join(next_link)?;
    if !url.query_pairs().any(|(k, _)| k == "api-version") {
        url.query_pairs_mut().append_pair("api-version", api_version);
    }
    Ok(url)
}

pub fn decode_page<T: DeserializeOwned>(body: &[u8]) -> Result<Page<T>> {
    Ok(decode_model::<Page<T>>(body)?.unwrap_or(Page {
        value: Vec::new(),
        next_link: None,
    }))
}

impl ResourceManagerClient {
    /// Fetch only the first page described by `opts`.
    pub async fn execute_page<T: DeserializeOwned>(
        &self,
        opts: &RequestOptions,
    ) -> Result<PageResponse<T>> {
        let raw = self.execute(opts, None).await?;
        let page = decode_page::<T>(&raw.body)?;
        Ok(PageResponse {
            status: raw.status,
            headers: raw.headers,
            page,
        })
    }

    /// Pages of the list described by `opts`, following `nextLink` until exhausted.
    /// The stream ends after the first error.
    pub fn list_pages<'a, T>(&'a self, opts: RequestOptions) -> BoxStream<'a, Result<Page<T>>>
    where
        T: DeserializeOwned + Send + 'a,
    {
        let st = stream! {
            let first = match self.execute_page::<T>(&opts).await {
                Ok(res) => res.page,
                Err(e) => {
                    yield Err(e);
                    return;
                }
            };
            let mut next = first.next_link.clone().filter(|l| !l.is_empty());
            yield Ok(first);

            while let Some(link) = next.take() {
                let page = match self.fetch_next::<T>(&opts, &link).await {
                    Ok(page) => page,
                    Err(e) => {
                        yield Err(e);
                        return;
                    }
                };
                next = page.next_link.clone().filter(|l| !l.is_empty());
                yield Ok(page);
            }
        };
        st.boxed()
    }

    /// All items of the list described by `opts`, in page order.
    pub async fn execute_paged<T>(&self, opts: RequestOptions) -> Result<CompleteResponse<T>>
    where
        T: DeserializeOwned + Send,
    {
        let mut pages = self.list_pages::<T>(opts);
        let mut items = Vec::new();
        let mut count = 0;
        while let Some(page) = pages.next().await {
            items.extend(page?.value);
            count += 1;
        }
        tracing::debug!("fetched {} items in {} pages", items.len(), count);
        Ok(CompleteResponse {
            items,
            pages: count,
        })
    }

    async fn fetch_next<T: DeserializeOwned>(
        &self,
        opts: &RequestOptions,
        next_link: &str,
    ) -> Result<Page<T>> {
        let url = next_page_url(self.endpoint(), next_link, self.api_version())?;
        let raw = self
            .send(
                opts.http_method.clone(),
                url,
                &opts.option_headers,
                opts.content_type,
                None,
                &opts.expected_status_codes,
            )
            .await?;
        decode_page::<T>(&raw.body).map_err(|e| match e {
            ArmError::Decode { target, source } => ArmError::Decode {
                target: format!("{target} (next page)"),
                source,
            },
            e => e,
        })
    }
}
