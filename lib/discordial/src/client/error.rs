use super::auth::AuthorizationError;

/// Errors that can occur when using the [`DiscordClient`](super::DiscordClient).
///
/// Credential validation problems are wrapped [`AuthorizationError`]s and are
/// raised before any network call. The remaining variants wrap failures from
/// the HTTP stack. Non-2xx responses are NOT errors; they come back to the
/// caller as ordinary [`ApiResponse`](super::ApiResponse) values.
#[derive(Debug, derive_more::Error, derive_more::Display, derive_more::From)]
pub enum DiscordClientError {
    /// Pre-flight credential validation failure.
    Authorization(AuthorizationError),

    /// HTTP transport error from the underlying reqwest client.
    ///
    /// Occurs when the connection fails, times out, or is interrupted.
    ReqwestError(reqwest::Error),

    /// URL parsing error when constructing request URLs.
    UrlError(url::ParseError),

    /// JSON serialization or deserialization error.
    ///
    /// Occurs when encoding a request body or decoding a response body.
    JsonError(serde_json::Error),

    /// Form serialization error.
    ///
    /// Occurs when the token-exchange body cannot be url-encoded.
    FormError(serde_urlencoded::ser::Error),

    /// Response body is not valid UTF-8.
    Utf8Error(std::str::Utf8Error),
}
