//! User-visible failure surfacing
//!
//! The client core returns structured failures and stays silent; turning a
//! failure into something a human sees happens here, in one place. The
//! wrapper owns the invariant that a failed call notifies exactly once and
//! a successful call not at all, so individual callers cannot get it wrong.

use crate::client::ApiClient;
use crate::error::ApiResult;
use reqwest::multipart::Form;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;
use tracing::warn;

/// The single notification surface for human-readable failure text.
pub trait Notifier: Send + Sync {
    fn error(&self, message: &str);
}

/// Envelope client paired with the user-visible error channel.
///
/// Exposes the same verbs as [`ApiClient`]; all caller traffic goes through
/// these.
pub struct NotifyingClient {
    inner: ApiClient,
    notifier: Arc<dyn Notifier>,
}

impl NotifyingClient {
    pub fn new(inner: ApiClient, notifier: Arc<dyn Notifier>) -> Self {
        Self { inner, notifier }
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        self.surface(self.inner.get(path).await)
    }

    pub async fn get_query<Q, T>(&self, path: &str, query: &Q) -> ApiResult<T>
    where
        Q: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.surface(self.inner.get_query(path, query).await)
    }

    pub async fn post<B, T>(&self, path: &str, body: &B) -> ApiResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.surface(self.inner.post(path, body).await)
    }

    pub async fn put<B, T>(&self, path: &str, body: &B) -> ApiResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.surface(self.inner.put(path, body).await)
    }

    pub async fn upload<T: DeserializeOwned>(&self, path: &str, form: Form) -> ApiResult<T> {
        self.surface(self.inner.upload(path, form).await)
    }

    fn surface<T>(&self, result: ApiResult<T>) -> ApiResult<T> {
        if let Err(error) = &result {
            let text = error.user_message();
            warn!(kind = ?error.kind(), %text, "backend call failed");
            self.notifier.error(&text);
        }
        result
    }
}
