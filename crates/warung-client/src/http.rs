//! # HTTP Client
//!
//! Thin JSON-over-HTTP client for the remote store of record.
//!
//! ## Request Contract
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Request / Response Flow                            │
//! │                                                                         │
//! │  build request                                                          │
//! │    ├── JSON body (if any)                                               │
//! │    └── Authorization: Bearer <token>  (if a session holds one)          │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  send ── ONCE, no retry/backoff ── timeout from ClientConfig            │
//! │         │                                                               │
//! │         ├── transport failure ──► ApiError::Transport                   │
//! │         ├── non-2xx ──► decode ErrorBody ──► ApiError::Rejected         │
//! │         ├── 204 / empty body ──► Ok(None)   (no parse attempt)          │
//! │         └── 2xx JSON ──► Ok(Some(T))                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Arc, RwLock};

use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use crate::config::ClientConfig;
use crate::error::{ApiError, ApiResult, ErrorBody};

/// JSON API client for the remote store.
///
/// Cheap to clone: the underlying connection pool and the session token are
/// shared between clones.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    token: Arc<RwLock<Option<String>>>,
}

impl ApiClient {
    /// Creates a client from configuration.
    pub fn new(config: &ClientConfig) -> ApiResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(ApiClient {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            token: Arc::new(RwLock::new(None)),
        })
    }

    // =========================================================================
    // Token Management
    // =========================================================================

    /// Attaches a bearer token to all subsequent requests.
    pub fn set_token(&self, token: impl Into<String>) {
        *self.token.write().expect("token lock poisoned") = Some(token.into());
    }

    /// Drops the bearer token (logout).
    pub fn clear_token(&self) {
        *self.token.write().expect("token lock poisoned") = None;
    }

    /// Current bearer token, if any. Callers persist this across restarts;
    /// the client itself keeps it in memory only.
    pub fn token(&self) -> Option<String> {
        self.token.read().expect("token lock poisoned").clone()
    }

    // =========================================================================
    // Typed Requests
    // =========================================================================

    /// GET expecting a JSON body.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        self.send(Method::GET, path, None::<&()>)
            .await?
            .ok_or_else(|| ApiError::Decode("empty response body".to_string()))
    }

    /// POST with a JSON body, expecting a JSON body back.
    pub async fn post<T, B>(&self, path: &str, body: &B) -> ApiResult<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.send(Method::POST, path, Some(body))
            .await?
            .ok_or_else(|| ApiError::Decode("empty response body".to_string()))
    }

    /// PUT with a JSON body, expecting a JSON body back.
    pub async fn put<T, B>(&self, path: &str, body: &B) -> ApiResult<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.send(Method::PUT, path, Some(body))
            .await?
            .ok_or_else(|| ApiError::Decode("empty response body".to_string()))
    }

    /// PUT where the server may answer with no content.
    pub async fn put_no_content<B>(&self, path: &str, body: &B) -> ApiResult<()>
    where
        B: Serialize + ?Sized,
    {
        self.send::<serde_json::Value, B>(Method::PUT, path, Some(body))
            .await?;
        Ok(())
    }

    /// DELETE; the server may answer with a body or 204.
    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> ApiResult<Option<T>> {
        self.send(Method::DELETE, path, None::<&()>).await
    }

    // =========================================================================
    // Core Send
    // =========================================================================

    /// Sends one request. `Ok(None)` means the server answered success with
    /// no content (204 or a zero-length body).
    async fn send<T, B>(&self, method: Method, path: &str, body: Option<&B>) -> ApiResult<Option<T>>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let url = format!("{}{}", self.base_url, path);
        debug!(method = %method, path = %path, "api request");

        let mut request = self.http.request(method, &url);

        if let Some(token) = self.token() {
            request = request.bearer_auth(token);
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await?;
        let status = response.status();

        if !status.is_success() {
            // Error bodies are expected to be JSON with a `message` field.
            // Anything else decodes to the empty body and the caller gets
            // the generic fallback text.
            let body = match response.bytes().await {
                Ok(bytes) => serde_json::from_slice::<ErrorBody>(&bytes).unwrap_or_default(),
                Err(_) => ErrorBody::default(),
            };
            debug!(status = status.as_u16(), code = body.code.as_deref().unwrap_or(""), "api rejection");
            return Err(ApiError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        if status == StatusCode::NO_CONTENT {
            return Ok(None);
        }

        let bytes = response.bytes().await?;
        if bytes.is_empty() {
            return Ok(None);
        }

        let value =
            serde_json::from_slice(&bytes).map_err(|e| ApiError::Decode(e.to_string()))?;
        Ok(Some(value))
    }
}
