use bytes::Bytes;
use http::{HeaderMap, StatusCode};
use serde::de::DeserializeOwned;

use super::error::DiscordClientError;

/// Raw HTTP response captured from the transport.
///
/// The status code, headers, and body bytes are handed back exactly as
/// received. Error statuses are not translated into errors; callers inspect
/// [`status`](Self::status) or [`is_success`](Self::is_success) and decode
/// the body themselves.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    status: StatusCode,
    headers: HeaderMap,
    body: Bytes,
}

impl ApiResponse {
    /// Creates a response from already-captured parts.
    ///
    /// Mostly useful for test doubles standing in for a live transport.
    pub fn new(status: StatusCode, headers: HeaderMap, body: impl Into<Bytes>) -> Self {
        Self {
            status,
            headers,
            body: body.into(),
        }
    }

    /// Captures a [`reqwest::Response`], buffering the full body.
    ///
    /// # Errors
    ///
    /// [`DiscordClientError::ReqwestError`] when reading the body fails.
    pub async fn from_reqwest(response: reqwest::Response) -> Result<Self, DiscordClientError> {
        let status = response.status();
        let headers = response.headers().clone();
        let body = response.bytes().await?;
        Ok(Self {
            status,
            headers,
            body,
        })
    }

    /// The HTTP status code.
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Whether the status code is in the 2xx range.
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// The response headers.
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// The raw body bytes.
    pub fn body(&self) -> &Bytes {
        &self.body
    }

    /// The body decoded as UTF-8 text.
    ///
    /// # Errors
    ///
    /// [`DiscordClientError::Utf8Error`] when the body is not valid UTF-8.
    pub fn text(&self) -> Result<&str, DiscordClientError> {
        let text = std::str::from_utf8(&self.body)?;
        Ok(text)
    }

    /// The body deserialized from JSON.
    ///
    /// # Errors
    ///
    /// [`DiscordClientError::JsonError`] when the body is not valid JSON for
    /// the target type.
    pub fn json<T>(&self) -> Result<T, DiscordClientError>
    where
        T: DeserializeOwned,
    {
        let value = serde_json::from_slice(&self.body)?;
        Ok(value)
    }
}
