use headers::ContentType;
use http::Method;
use percent_encoding::{NON_ALPHANUMERIC, utf8_percent_encode};
use serde::Serialize;
use tracing::debug;
use url::Url;

mod auth;
mod builder;
mod error;
mod handler;
mod request;
mod response;


pub use self::auth::{Authorization, AuthorizationError, AuthorizationKind, SecureString};
pub use self::builder::DiscordClientBuilder;
pub use self::error::DiscordClientError;
pub use self::handler::{HandlerFuture, HttpHandler, ReqwestHandler};
pub use self::request::ApiRequest;
pub use self::response::ApiResponse;

/// Default API root for versioned REST endpoints.
pub const DEFAULT_BASE_URL: &str = "https://discord.com/api/v10";

/// Default OAuth2 token endpoint. Not under the versioned API root.
pub const DEFAULT_TOKEN_URL: &str = "https://discord.com/api/oauth2/token";

/// Discord REST API client.
///
/// Every operation validates credentials first, assembles a complete
/// [`ApiRequest`], and hands it to the configured [`HttpHandler`] in a
/// single call. Responses come back as raw [`ApiResponse`] values; error
/// statuses are passed through untouched.
///
/// ```rust,no_run
/// use discordial::{Authorization, AuthorizationKind, DiscordClient};
///
/// # async fn example() -> Result<(), discordial::DiscordClientError> {
/// let authorization =
///     Authorization::default().with_authorization(AuthorizationKind::Bot, "bot-token");
/// let client = DiscordClient::builder()
///     .with_authorization(authorization)
///     .build()?;
///
/// let response = client.get_current_user().await?;
/// println!("{}: {}", response.status(), response.text()?);
/// # Ok(())
/// # }
/// ```
#[derive(derive_more::Debug)]
pub struct DiscordClient {
    #[debug(ignore)]
    handler: Box<dyn HttpHandler>,
    authorization: Authorization,
    base_url: Url,
    token_url: Url,
}

// Construction and configuration
impl DiscordClient {
    /// Creates a builder with the default Discord endpoints and transport.
    pub fn builder() -> DiscordClientBuilder {
        DiscordClientBuilder::default()
    }

    /// The credential holder consulted by every operation.
    pub fn authorization(&self) -> &Authorization {
        &self.authorization
    }

    /// Replaces the credential holder.
    ///
    /// Typical flow for the client-credentials grant: exchange the id/secret
    /// pair for an access token, then install that token as
    /// [`AuthorizationKind::Bearer`].
    pub fn set_authorization(&mut self, authorization: Authorization) {
        self.authorization = authorization;
    }

    /// Replaces the transport for subsequent requests.
    pub fn set_handler<H>(&mut self, handler: H)
    where
        H: HttpHandler + 'static,
    {
        self.handler = Box::new(handler);
    }
}

/// Form body for the OAuth2 client-credentials exchange.
#[derive(Debug, Serialize)]
struct TokenRequestForm<'a> {
    grant_type: &'static str,
    client_id: &'a str,
    client_secret: &'a SecureString,
    scope: String,
}

// Token exchange
impl DiscordClient {
    /// Exchanges the client id and secret for an access token
    /// (`POST` to the token URL, form-encoded client-credentials grant).
    ///
    /// `scopes` are joined with single spaces into the `scope` field; an
    /// empty slice sends an empty scope. The response body is returned raw,
    /// whatever the status code.
    ///
    /// # Errors
    ///
    /// [`AuthorizationError::MissingClientId`] then
    /// [`AuthorizationError::MissingClientSecret`] before any network I/O,
    /// [`DiscordClientError::ReqwestError`] when the exchange itself fails.
    pub async fn request_access_token<S>(
        &self,
        scopes: &[S],
    ) -> Result<ApiResponse, DiscordClientError>
    where
        S: AsRef<str>,
    {
        let (client_id, client_secret) = self.authorization.client_credentials()?;
        let scope = scopes
            .iter()
            .map(AsRef::as_ref)
            .collect::<Vec<_>>()
            .join(" ");

        let form = TokenRequestForm {
            grant_type: "client_credentials",
            client_id,
            client_secret,
            scope,
        };
        let request =
            ApiRequest::new(Method::POST, self.token_url.clone()).with_form_body(&form)?;
        self.execute(request).await
    }
}

// Authenticated endpoints
impl DiscordClient {
    /// Fetches the user or bot behind the current token
    /// (`GET /users/@me`).
    ///
    /// # Errors
    ///
    /// Credential errors before any network I/O, transport errors after.
    pub async fn get_current_user(&self) -> Result<ApiResponse, DiscordClientError> {
        let request = self.authorized_request(Method::GET, "/users/@me")?;
        self.execute(request).await
    }

    /// Lists the global application commands
    /// (`GET /applications/{application_id}/commands`).
    ///
    /// # Errors
    ///
    /// Credential errors before any network I/O, transport errors after.
    pub async fn get_global_application_commands(
        &self,
        application_id: &str,
    ) -> Result<ApiResponse, DiscordClientError> {
        let path = format!(
            "/applications/{}/commands",
            encode_path_segment(application_id)
        );
        let request = self.authorized_request(Method::GET, &path)?;
        self.execute(request).await
    }

    /// Replaces the full set of global application commands
    /// (`PUT /applications/{application_id}/commands`).
    ///
    /// The slice is serialized as a JSON array; an empty slice sends `[]`
    /// and unregisters every global command.
    ///
    /// # Errors
    ///
    /// Credential errors before any network I/O, transport errors after.
    pub async fn bulk_global_application_commands<T>(
        &self,
        application_id: &str,
        commands: &[T],
    ) -> Result<ApiResponse, DiscordClientError>
    where
        T: Serialize,
    {
        let path = format!(
            "/applications/{}/commands",
            encode_path_segment(application_id)
        );
        let request = self
            .authorized_request(Method::PUT, &path)?
            .with_json_body(commands)?;
        self.execute(request).await
    }

    /// Creates a guild-scoped application command
    /// (`POST /applications/{application_id}/guilds/{guild_id}/commands`).
    ///
    /// # Errors
    ///
    /// Credential errors before any network I/O, transport errors after.
    pub async fn create_guild_application_command<T>(
        &self,
        application_id: &str,
        guild_id: &str,
        command: &T,
    ) -> Result<ApiResponse, DiscordClientError>
    where
        T: Serialize,
    {
        let path = format!(
            "/applications/{}/guilds/{}/commands",
            encode_path_segment(application_id),
            encode_path_segment(guild_id)
        );
        let request = self
            .authorized_request(Method::POST, &path)?
            .with_json_body(command)?;
        self.execute(request).await
    }

    /// Posts a message to a channel
    /// (`POST /channels/{channel_id}/messages`).
    ///
    /// See [`types::CreateMessage`](crate::types::CreateMessage) for the
    /// common payload shape.
    ///
    /// # Errors
    ///
    /// Credential errors before any network I/O, transport errors after.
    pub async fn create_message<T>(
        &self,
        channel_id: &str,
        message: &T,
    ) -> Result<ApiResponse, DiscordClientError>
    where
        T: Serialize,
    {
        let path = format!("/channels/{}/messages", encode_path_segment(channel_id));
        let request = self
            .authorized_request(Method::POST, &path)?
            .with_json_body(message)?;
        self.execute(request).await
    }
}

// Request assembly and dispatch
impl DiscordClient {
    /// Builds a descriptor for an authenticated endpoint, with the
    /// `Authorization` header validated before anything else happens.
    fn authorized_request(
        &self,
        method: Method,
        path: &str,
    ) -> Result<ApiRequest, DiscordClientError> {
        let (header_name, header_value) = self.authorization.to_header()?;
        let url = self.endpoint_url(path)?;
        let request = ApiRequest::new(method, url)
            .with_typed_header(ContentType::json())
            .with_header(header_name, header_value);
        Ok(request)
    }

    /// Joins an endpoint path onto the API root with exactly one `/`.
    fn endpoint_url(&self, path: &str) -> Result<Url, DiscordClientError> {
        let url = format!(
            "{}/{}",
            self.base_url.as_str().trim_end_matches('/'),
            path.trim_start_matches('/')
        );
        let url = url.parse()?;
        Ok(url)
    }

    async fn execute(&self, request: ApiRequest) -> Result<ApiResponse, DiscordClientError> {
        debug!(?request, "sending API request");
        let response = self.handler.execute(request).await?;
        debug!(status = %response.status(), "received API response");
        Ok(response)
    }
}

/// Percent-encodes a path parameter so ids never break the URL structure.
fn encode_path_segment(value: &str) -> String {
    utf8_percent_encode(value, NON_ALPHANUMERIC).to_string()
}
