//! JSON client bound to one backend base URL.

use std::sync::Arc;
use std::time::Duration;

use reqwest::Method;
use reqwest::header::CONTENT_TYPE;
use serde::Serialize;
use serde::de::DeserializeOwned;
use url::Url;

use crate::models::ErrorBody;
use crate::repository::errors::{RepositoryError, RepositoryResult};

/// HTTP client for one of the REST backends.
#[derive(Clone)]
pub struct ApiClient {
    inner: Arc<ApiClientInner>,
}

struct ApiClientInner {
    client: reqwest::Client,
    base_url: String,
}

/// Raw response relayed by the `/api` proxy.
#[derive(Debug, Clone)]
pub struct ForwardedResponse {
    pub status: u16,
    pub content_type: Option<String>,
    pub body: Vec<u8>,
}

impl ApiClient {
    /// Create a client for `base_url` applying `timeout` to every request.
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client fails to build.
    pub fn new(base_url: &Url, timeout: Duration) -> RepositoryResult<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self {
            inner: Arc::new(ApiClientInner {
                client,
                base_url: base_url.as_str().trim_end_matches('/').to_string(),
            }),
        })
    }

    /// Base URL without its trailing slash.
    pub fn base_url(&self) -> &str {
        &self.inner.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.inner.base_url, path.trim_start_matches('/'))
    }

    /// GET a JSON document.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> RepositoryResult<T> {
        log::debug!("GET {}", self.url(path));
        let response = self.inner.client.get(self.url(path)).send().await?;
        Self::read_json(response)
            .await?
            .ok_or_else(|| RepositoryError::Decode(format!("empty response from {path}")))
    }

    /// GET a JSON document, mapping 404 to `None`.
    pub async fn get_optional<T: DeserializeOwned>(
        &self,
        path: &str,
    ) -> RepositoryResult<Option<T>> {
        match self.get(path).await {
            Ok(value) => Ok(Some(value)),
            Err(RepositoryError::NotFound) => Ok(None),
            Err(err) => Err(err),
        }
    }

    /// POST `body`; the response body is decoded when present.
    pub async fn post<T, B>(&self, path: &str, body: &B) -> RepositoryResult<Option<T>>
    where
        T: DeserializeOwned,
        B: Serialize + Sync + ?Sized,
    {
        self.send_json(Method::POST, path, body).await
    }

    /// PUT `body`; the response body is decoded when present.
    pub async fn put<T, B>(&self, path: &str, body: &B) -> RepositoryResult<Option<T>>
    where
        T: DeserializeOwned,
        B: Serialize + Sync + ?Sized,
    {
        self.send_json(Method::PUT, path, body).await
    }

    /// PATCH `body`, ignoring whatever the backend answers on success.
    pub async fn patch<B>(&self, path: &str, body: &B) -> RepositoryResult<()>
    where
        B: Serialize + Sync + ?Sized,
    {
        log::debug!("PATCH {}", self.url(path));
        let response = self
            .inner
            .client
            .patch(self.url(path))
            .json(body)
            .send()
            .await?;
        if response.status().is_success() {
            return Ok(());
        }
        Err(Self::parse_error(response).await)
    }

    /// Relay a request verbatim and return the backend's answer, whatever its status.
    pub async fn forward(
        &self,
        method: &str,
        path_and_query: &str,
        content_type: Option<&str>,
        body: Vec<u8>,
    ) -> RepositoryResult<ForwardedResponse> {
        let method = Method::from_bytes(method.as_bytes())
            .map_err(|_| RepositoryError::Rejected {
                status: 405,
                message: format!("unsupported method {method}"),
            })?;
        log::debug!("{method} {} (proxied)", self.url(path_and_query));

        let mut request = self.inner.client.request(method, self.url(path_and_query));
        if let Some(content_type) = content_type {
            request = request.header(CONTENT_TYPE, content_type);
        }
        if !body.is_empty() {
            request = request.body(body);
        }

        let response = request.send().await?;
        let status = response.status().as_u16();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string);
        let body = response.bytes().await?.to_vec();

        Ok(ForwardedResponse {
            status,
            content_type,
            body,
        })
    }

    async fn send_json<T, B>(
        &self,
        method: Method,
        path: &str,
        body: &B,
    ) -> RepositoryResult<Option<T>>
    where
        T: DeserializeOwned,
        B: Serialize + Sync + ?Sized,
    {
        log::debug!("{method} {}", self.url(path));
        let response = self
            .inner
            .client
            .request(method, self.url(path))
            .json(body)
            .send()
            .await?;
        Self::read_json(response).await
    }

    /// Decode a successful response; an empty body yields `None`.
    async fn read_json<T: DeserializeOwned>(
        response: reqwest::Response,
    ) -> RepositoryResult<Option<T>> {
        if !response.status().is_success() {
            return Err(Self::parse_error(response).await);
        }

        let text = response.text().await?;
        if text.trim().is_empty() {
            return Ok(None);
        }
        serde_json::from_str(&text)
            .map(Some)
            .map_err(|e| RepositoryError::Decode(format!("failed to parse response: {e}")))
    }

    /// Build an error from a failed response, preferring the backend's own message.
    async fn parse_error(response: reqwest::Response) -> RepositoryError {
        let status = response.status();
        let fallback = status
            .canonical_reason()
            .unwrap_or("unexpected status")
            .to_string();

        let message = match response.text().await {
            Ok(text) => serde_json::from_str::<ErrorBody>(&text)
                .ok()
                .and_then(ErrorBody::into_message)
                .or_else(|| {
                    let text = text.trim();
                    (!text.is_empty() && text.len() <= 200).then(|| text.to_string())
                })
                .unwrap_or(fallback),
            Err(_) => fallback,
        };

        RepositoryError::from_status(status.as_u16(), message)
    }
}
