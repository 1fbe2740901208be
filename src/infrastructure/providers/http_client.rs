//! # HTTP Client Utilities
//!
//! Shared HTTP client wrapper for provider adapters with configurable
//! timeouts, JSON handling, and error mapping into [`ProviderError`].

use crate::infrastructure::providers::error::{ProviderError, ProviderResult};
use reqwest::header::HeaderMap;
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;

/// Maximum number of upstream body bytes carried into an error message.
const MAX_ERROR_BODY_LEN: usize = 2048;

/// HTTP client wrapper for provider adapters.
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    timeout_ms: u64,
}

impl HttpClient {
    /// Creates a client with the given per-request timeout.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError::Connection`] if the client cannot be built.
    pub fn new(timeout_ms: u64) -> ProviderResult<Self> {
        Self::with_headers(timeout_ms, HeaderMap::new())
    }

    /// Creates a client with default headers applied to every request.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError::Connection`] if the client cannot be built.
    pub fn with_headers(timeout_ms: u64, default_headers: HeaderMap) -> ProviderResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_millis(timeout_ms))
            .default_headers(default_headers)
            .build()
            .map_err(|e| {
                ProviderError::connection(format!("failed to build HTTP client: {e}"))
            })?;
        Ok(Self { client, timeout_ms })
    }

    /// Configured per-request timeout in milliseconds.
    #[inline]
    #[must_use]
    pub fn timeout_ms(&self) -> u64 {
        self.timeout_ms
    }

    /// GET with query parameters, optionally bearer-authenticated,
    /// deserializing the JSON response.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError`] on network failure, non-success status, or
    /// an unparseable body.
    pub async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        query: &[(&str, String)],
        bearer: Option<&str>,
    ) -> ProviderResult<T> {
        let mut request = self.client.get(url).query(query);
        if let Some(token) = bearer {
            request = request.bearer_auth(token);
        }
        let response = request.send().await.map_err(map_reqwest_error)?;
        handle_response(response).await
    }

    /// POST a JSON body, deserializing the JSON response.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError`] on network failure, non-success status, or
    /// an unparseable body.
    pub async fn post_json<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        url: &str,
        body: &B,
    ) -> ProviderResult<T> {
        let response = self
            .client
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(map_reqwest_error)?;
        handle_response(response).await
    }

    /// POST a URL-encoded form, deserializing the JSON response.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError`] on network failure, non-success status, or
    /// an unparseable body.
    pub async fn post_form<T: DeserializeOwned>(
        &self,
        url: &str,
        form: &[(&str, &str)],
    ) -> ProviderResult<T> {
        let response = self
            .client
            .post(url)
            .form(form)
            .send()
            .await
            .map_err(map_reqwest_error)?;
        handle_response(response).await
    }
}

async fn handle_response<T: DeserializeOwned>(response: Response) -> ProviderResult<T> {
    let status = response.status();
    if status.is_success() {
        return response
            .json::<T>()
            .await
            .map_err(|e| ProviderError::invalid_response(e.to_string()));
    }

    let mut body = response.text().await.unwrap_or_default();
    truncate_on_char_boundary(&mut body, MAX_ERROR_BODY_LEN);

    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
            Err(ProviderError::authentication(body))
        }
        StatusCode::TOO_MANY_REQUESTS => Err(ProviderError::rate_limited(body)),
        _ => Err(ProviderError::upstream_status(status.as_u16(), body)),
    }
}

/// Shortens `body` to at most `max_len` bytes without splitting a UTF-8
/// character. `String::truncate` asserts a char boundary and would panic on
/// multibyte upstream error pages.
fn truncate_on_char_boundary(body: &mut String, max_len: usize) {
    if body.len() <= max_len {
        return;
    }
    let mut len = max_len;
    while !body.is_char_boundary(len) {
        len -= 1;
    }
    body.truncate(len);
}

fn map_reqwest_error(error: reqwest::Error) -> ProviderError {
    if error.is_timeout() {
        ProviderError::timeout(error.to_string())
    } else {
        ProviderError::connection(error.to_string())
    }
}
