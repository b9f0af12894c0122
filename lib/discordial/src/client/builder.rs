use url::Url;

use super::auth::Authorization;
use super::error::DiscordClientError;
use super::handler::{HttpHandler, ReqwestHandler};
use super::{DEFAULT_BASE_URL, DEFAULT_TOKEN_URL, DiscordClient};

/// Builder for [`DiscordClient`].
///
/// The default configuration targets the public Discord REST API over the
/// bundled [`ReqwestHandler`] transport. URLs are kept as plain strings
/// until [`build`](Self::build), which reports invalid ones as
/// [`DiscordClientError::UrlError`].
///
/// ```
/// use discordial::{Authorization, AuthorizationKind, DiscordClient};
///
/// # fn main() -> Result<(), discordial::DiscordClientError> {
/// let client = DiscordClient::builder()
///     .with_authorization(
///         Authorization::default().with_authorization(AuthorizationKind::Bot, "bot-token"),
///     )
///     .build()?;
/// # let _ = client;
/// # Ok(())
/// # }
/// ```
#[derive(derive_more::Debug)]
pub struct DiscordClientBuilder {
    #[debug(ignore)]
    handler: Box<dyn HttpHandler>,
    authorization: Authorization,
    base_url: String,
    token_url: String,
}

impl Default for DiscordClientBuilder {
    fn default() -> Self {
        Self {
            handler: Box::new(ReqwestHandler::default()),
            authorization: Authorization::default(),
            base_url: DEFAULT_BASE_URL.to_string(),
            token_url: DEFAULT_TOKEN_URL.to_string(),
        }
    }
}

impl DiscordClientBuilder {
    /// Sets the credential holder used for authenticated calls and token
    /// exchange.
    #[must_use]
    pub fn with_authorization(mut self, authorization: Authorization) -> Self {
        self.authorization = authorization;
        self
    }

    /// Replaces the transport, e.g. with a test double.
    #[must_use]
    pub fn with_handler<H>(mut self, handler: H) -> Self
    where
        H: HttpHandler + 'static,
    {
        self.handler = Box::new(handler);
        self
    }

    /// Overrides the API root (default [`DEFAULT_BASE_URL`]).
    ///
    /// A trailing slash is tolerated; endpoint paths are joined with exactly
    /// one separator either way.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Overrides the OAuth2 token endpoint (default [`DEFAULT_TOKEN_URL`]).
    #[must_use]
    pub fn with_token_url(mut self, token_url: impl Into<String>) -> Self {
        self.token_url = token_url.into();
        self
    }

    /// Builds the client.
    ///
    /// # Errors
    ///
    /// [`DiscordClientError::UrlError`] when the base or token URL cannot be
    /// parsed as an absolute URL.
    pub fn build(self) -> Result<DiscordClient, DiscordClientError> {
        let Self {
            handler,
            authorization,
            base_url,
            token_url,
        } = self;

        let base_url = Url::parse(&base_url)?;
        let token_url = Url::parse(&token_url)?;

        Ok(DiscordClient {
            handler,
            authorization,
            base_url,
            token_url,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_builder_targets_discord() {
        let client = DiscordClientBuilder::default()
            .build()
            .expect("should build client");

        insta::assert_snapshot!(client.base_url.as_str(), @"https://discord.com/api/v10");
        insta::assert_snapshot!(client.token_url.as_str(), @"https://discord.com/api/oauth2/token");
    }

    #[test]
    fn test_builder_with_custom_urls() {
        let client = DiscordClientBuilder::default()
            .with_base_url("http://localhost:8080/api")
            .with_token_url("http://localhost:8080/oauth2/token")
            .build()
            .expect("should build client");

        insta::assert_snapshot!(client.base_url.as_str(), @"http://localhost:8080/api");
        insta::assert_snapshot!(client.token_url.as_str(), @"http://localhost:8080/oauth2/token");
    }

    #[test]
    fn test_builder_rejects_invalid_base_url() {
        let result = DiscordClientBuilder::default()
            .with_base_url("not a url")
            .build();

        let error = result.expect_err("should reject invalid URL");
        assert!(matches!(error, DiscordClientError::UrlError(_)));
    }

    #[test]
    fn test_builder_rejects_invalid_token_url() {
        let result = DiscordClientBuilder::default()
            .with_token_url("://missing-scheme")
            .build();

        let error = result.expect_err("should reject invalid URL");
        assert!(matches!(error, DiscordClientError::UrlError(_)));
    }

    #[test]
    fn test_builder_installs_authorization() {
        let authorization = Authorization::default().with_client_credentials("id", "secret");
        let client = DiscordClientBuilder::default()
            .with_authorization(authorization)
            .build()
            .expect("should build client");

        assert!(client.authorization().has_client_id());
        assert!(client.authorization().has_client_secret());
        assert!(!client.authorization().has_token());
    }
}
