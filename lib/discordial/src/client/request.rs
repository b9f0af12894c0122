use bytes::Bytes;
use headers::{ContentType, Header, HeaderMapExt};
use http::{HeaderMap, HeaderName, HeaderValue, Method};
use serde::Serialize;
use url::Url;

use super::error::DiscordClientError;

/// Immutable request descriptor handed to an
/// [`HttpHandler`](super::HttpHandler) in a single call.
///
/// A descriptor is assembled completely (method, URL, headers, body) before
/// the transport sees it, so there is no in-flight request state shared
/// across steps. Body constructors set the matching `Content-Type` header.
///
/// The body bytes are skipped in `Debug` output; sensitive header values
/// (the `Authorization` header) stay redacted.
#[derive(Clone, derive_more::Debug)]
pub struct ApiRequest {
    method: Method,
    url: Url,
    headers: HeaderMap,
    #[debug(ignore)]
    body: Option<Bytes>,
}

impl ApiRequest {
    /// Creates a descriptor with no headers and no body.
    pub fn new(method: Method, url: Url) -> Self {
        Self {
            method,
            url,
            headers: HeaderMap::new(),
            body: None,
        }
    }

    /// Adds a typed header (for example [`headers::ContentType`]).
    pub fn with_typed_header(mut self, header: impl Header) -> Self {
        self.headers.typed_insert(header);
        self
    }

    /// Adds a raw header.
    pub fn with_header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }

    /// Serializes `body` as the JSON payload and sets
    /// `Content-Type: application/json`.
    ///
    /// # Errors
    ///
    /// [`DiscordClientError::JsonError`] when serialization fails.
    pub fn with_json_body<T>(mut self, body: &T) -> Result<Self, DiscordClientError>
    where
        T: Serialize + ?Sized,
    {
        let data = serde_json::to_vec(body)?;
        self.headers.typed_insert(ContentType::json());
        self.body = Some(Bytes::from(data));
        Ok(self)
    }

    /// Serializes `body` as the url-encoded payload and sets
    /// `Content-Type: application/x-www-form-urlencoded`.
    ///
    /// # Errors
    ///
    /// [`DiscordClientError::FormError`] when serialization fails.
    pub fn with_form_body<T>(mut self, body: &T) -> Result<Self, DiscordClientError>
    where
        T: Serialize + ?Sized,
    {
        let data = serde_urlencoded::to_string(body)?;
        self.headers.typed_insert(ContentType::form_url_encoded());
        self.body = Some(Bytes::from(data.into_bytes()));
        Ok(self)
    }

    /// The HTTP method.
    pub fn method(&self) -> &Method {
        &self.method
    }

    /// The absolute request URL.
    pub fn url(&self) -> &Url {
        &self.url
    }

    /// The assembled headers.
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// The body payload, if any.
    pub fn body(&self) -> Option<&Bytes> {
        self.body.as_ref()
    }

    /// Decomposes the descriptor for conversion into a concrete transport
    /// request.
    pub fn into_parts(self) -> (Method, Url, HeaderMap, Option<Bytes>) {
        let Self {
            method,
            url,
            headers,
            body,
        } = self;
        (method, url, headers, body)
    }
}
