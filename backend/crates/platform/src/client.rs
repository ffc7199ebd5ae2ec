//! RescueConnect API client
//!
//! JSON-over-HTTP calls against the remote API, optionally authenticated
//! with a bearer token. Non-success responses are decoded for the API's
//! `{ "message": ... }` error payload so callers can surface it verbatim.

use std::time::Duration;

use http::HeaderValue;
use http::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

/// Error returned by [`ApiClient`]
#[derive(Debug, Error)]
pub enum ClientError {
    /// The client could not be constructed
    #[error("HTTP client setup failed: {0}")]
    Setup(String),

    /// The bearer token cannot be carried in a header
    #[error("Bearer token contains characters not allowed in a header")]
    InvalidToken,

    /// Connection, TLS, timeout or body transfer failure
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The API answered with a non-success status
    #[error("Request rejected with status {status}: {}", .message.as_deref().unwrap_or("no message"))]
    Rejected {
        status: u16,
        message: Option<String>,
    },

    /// The request or response body was not the expected JSON
    #[error("Invalid JSON body: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Error payload shape used by the API
#[derive(Debug, serde::Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

/// Build an `Authorization: Bearer <token>` header value
///
/// The value is marked sensitive so `Debug` output of requests never
/// contains the token.
pub fn bearer_authorization(token: &str) -> Result<HeaderValue, ClientError> {
    let mut value =
        HeaderValue::from_str(&format!("Bearer {}", token)).map_err(|_| ClientError::InvalidToken)?;
    value.set_sensitive(true);
    Ok(value)
}

/// API client bound to one base URL
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Create a client for `base_url` (e.g. `https://api.example.org`)
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ClientError::Setup(e.to_string()))?;

        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for an API path such as `/api/auth/login`
    pub fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    /// GET `path` and decode the JSON response
    pub async fn get_json<T>(&self, path: &str, bearer: Option<&str>) -> Result<T, ClientError>
    where
        T: DeserializeOwned,
    {
        let request = self.http.get(self.url(path));
        self.send(request, bearer).await
    }

    /// POST `body` as JSON to `path` and decode the JSON response
    pub async fn post_json<B, T>(
        &self,
        path: &str,
        body: &B,
        bearer: Option<&str>,
    ) -> Result<T, ClientError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let bytes = serde_json::to_vec(body)?;
        let request = self
            .http
            .post(self.url(path))
            .header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
            .body(bytes);
        self.send(request, bearer).await
    }

    async fn send<T>(
        &self,
        request: reqwest::RequestBuilder,
        bearer: Option<&str>,
    ) -> Result<T, ClientError>
    where
        T: DeserializeOwned,
    {
        let mut request = request.header(ACCEPT, HeaderValue::from_static("application/json"));
        if let Some(token) = bearer {
            request = request.header(AUTHORIZATION, bearer_authorization(token)?);
        }

        let response = request.send().await?;
        let status = response.status();
        let body = response.bytes().await?;

        tracing::debug!(
            status = status.as_u16(),
            bytes = body.len(),
            authenticated = bearer.is_some(),
            "API response received"
        );

        if !status.is_success() {
            let message = serde_json::from_slice::<ErrorBody>(&body)
                .ok()
                .and_then(|b| b.message);
            return Err(ClientError::Rejected {
                status: status.as_u16(),
                message,
            });
        }

        Ok(serde_json::from_slice(&body)?)
    }
}
