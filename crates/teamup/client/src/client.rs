//! HTTP client for the TeamUp backend

use crate::envelope::unwrap_envelope;
use crate::error::ApiResult;
use reqwest::multipart::Form;
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use teamup_session::SessionStore;
use tracing::debug;

/// Base configuration for the envelope client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API base, prefixed to every request path.
    pub base_url: String,
    /// Per-request timeout.
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080/api".to_string(),
            timeout: Duration::from_secs(10),
        }
    }
}

/// Uniform mutation applied to every outgoing request before transmission.
///
/// This is the seam for attaching session credentials; the backend contract
/// does not mandate a particular header, so the mechanism stays pluggable.
pub trait RequestInterceptor: Send + Sync {
    fn intercept(&self, request: RequestBuilder) -> RequestBuilder;
}

/// Stock interceptor: sends the persisted login state as a bearer
/// `Authorization` header when present.
pub struct SessionAuth {
    store: Arc<dyn SessionStore>,
}

impl SessionAuth {
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self { store }
    }
}

impl RequestInterceptor for SessionAuth {
    fn intercept(&self, request: RequestBuilder) -> RequestBuilder {
        match self.store.token() {
            Some(token) if !token.is_empty() => request.bearer_auth(token),
            _ => request,
        }
    }
}

/// HTTP client enforcing the `{code, data, message}` envelope contract.
///
/// Constructed once from its configuration and passed to every caller; a
/// failed call is surfaced once, immediately, with no retries at this layer.
#[derive(Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
    interceptor: Option<Arc<dyn RequestInterceptor>>,
}

impl ApiClient {
    /// Create a new client.
    pub fn new(config: &ClientConfig) -> ApiResult<Self> {
        let http = Client::builder().timeout(config.timeout).build()?;
        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            interceptor: None,
        })
    }

    /// Install the outbound request interceptor.
    pub fn with_interceptor(mut self, interceptor: Arc<dyn RequestInterceptor>) -> Self {
        self.interceptor = Some(interceptor);
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        self.execute(self.http.get(self.url(path))).await
    }

    pub async fn get_query<Q, T>(&self, path: &str, query: &Q) -> ApiResult<T>
    where
        Q: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.execute(self.http.get(self.url(path)).query(query)).await
    }

    pub async fn post<B, T>(&self, path: &str, body: &B) -> ApiResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.execute(self.http.post(self.url(path)).json(body)).await
    }

    pub async fn put<B, T>(&self, path: &str, body: &B) -> ApiResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.execute(self.http.put(self.url(path)).json(body)).await
    }

    /// Multipart upload. Classification is identical to the JSON verbs: the
    /// response envelope decides, not the payload encoding.
    pub async fn upload<T: DeserializeOwned>(&self, path: &str, form: Form) -> ApiResult<T> {
        self.execute(self.http.post(self.url(path)).multipart(form))
            .await
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn execute<T: DeserializeOwned>(&self, request: RequestBuilder) -> ApiResult<T> {
        let request = match &self.interceptor {
            Some(interceptor) => interceptor.intercept(request),
            None => request,
        };
        let response = request.send().await?;
        debug!(status = %response.status(), url = %response.url(), "backend response");
        let body = response.error_for_status()?.bytes().await?;
        unwrap_envelope(&body)
    }
}
