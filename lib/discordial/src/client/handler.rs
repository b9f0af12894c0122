use std::future::Future;
use std::pin::Pin;

use reqwest::Body;

use super::error::DiscordClientError;
use super::request::ApiRequest;
use super::response::ApiResponse;

/// Boxed future returned by [`HttpHandler::execute`].
pub type HandlerFuture =
    Pin<Box<dyn Future<Output = Result<ApiResponse, DiscordClientError>> + Send>>;

/// Transport seam between the client and the wire.
///
/// The client assembles a complete [`ApiRequest`] and hands it over in a
/// single call; the handler owns everything from there (connection reuse,
/// TLS, timeouts). Implement this to route requests through a test double
/// or an instrumented transport.
///
/// ```
/// use discordial::{ApiRequest, ApiResponse, HandlerFuture, HttpHandler};
/// use http::{HeaderMap, StatusCode};
///
/// struct CannedHandler;
///
/// impl HttpHandler for CannedHandler {
///     fn execute(&self, _request: ApiRequest) -> HandlerFuture {
///         Box::pin(async {
///             Ok(ApiResponse::new(StatusCode::OK, HeaderMap::new(), "{}"))
///         })
///     }
/// }
/// ```
pub trait HttpHandler: Send + Sync {
    /// Performs the exchange described by `request`.
    fn execute(&self, request: ApiRequest) -> HandlerFuture;
}

/// Default transport backed by a shared [`reqwest::Client`].
#[derive(Debug, Clone, Default)]
pub struct ReqwestHandler {
    client: reqwest::Client,
}

impl ReqwestHandler {
    /// Wraps an existing [`reqwest::Client`], keeping its pool and TLS
    /// configuration.
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }
}

impl HttpHandler for ReqwestHandler {
    fn execute(&self, request: ApiRequest) -> HandlerFuture {
        let client = self.client.clone();
        Box::pin(async move {
            let request = reqwest::Request::from(request);
            let response = client.execute(request).await?;
            ApiResponse::from_reqwest(response).await
        })
    }
}

impl From<ApiRequest> for reqwest::Request {
    fn from(request: ApiRequest) -> Self {
        let (method, url, headers, body) = request.into_parts();
        let mut result = reqwest::Request::new(method, url);
        *result.headers_mut() = headers;
        if let Some(data) = body {
            *result.body_mut() = Some(Body::from(data));
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use headers::{ContentType, HeaderMapExt};
    use http::Method;
    use url::Url;

    use super::*;

    #[test]
    fn test_descriptor_converts_to_reqwest_request() {
        let url = Url::parse("https://discord.com/api/v10/users/@me").expect("should parse url");
        let request = ApiRequest::new(Method::GET, url).with_typed_header(ContentType::json());

        let converted = reqwest::Request::from(request);

        assert_eq!(converted.method(), &Method::GET);
        assert_eq!(
            converted.url().as_str(),
            "https://discord.com/api/v10/users/@me"
        );
        assert_eq!(
            converted.headers().typed_get::<ContentType>(),
            Some(ContentType::json())
        );
        assert!(converted.body().is_none());
    }

    #[test]
    fn test_conversion_carries_body_bytes() {
        let url = Url::parse("https://discord.com/api/v10/channels/1/messages")
            .expect("should parse url");
        let request = ApiRequest::new(Method::POST, url)
            .with_json_body(&serde_json::json!({"content": "hi"}))
            .expect("should serialize body");

        let converted = reqwest::Request::from(request);

        let body = converted.body().expect("should have a body");
        let bytes = body.as_bytes().expect("body should be buffered");
        assert_eq!(bytes, b"{\"content\":\"hi\"}");
    }

    #[test]
    fn test_reqwest_handler_is_object_safe() {
        let handler: Box<dyn HttpHandler> = Box::new(ReqwestHandler::default());
        let _ = &handler;
    }
}
