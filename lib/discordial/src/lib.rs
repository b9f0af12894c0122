//! # Discordial
//!
//! A small Discord REST API client built around explicit credentials and a
//! swappable transport.
//!
//! The entry point is [`DiscordClient`]. It reads credentials from an
//! [`Authorization`] holder, which carries either a token with its header
//! convention (`Bearer` or `Bot`) or an OAuth2 client-id/client-secret pair
//! for the client-credentials grant. Missing credentials are reported
//! before any network traffic happens, and responses come back raw:
//! status, headers, and body exactly as the API sent them.
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use discordial::{Authorization, AuthorizationKind, DiscordClient};
//!
//! # async fn example() -> Result<(), discordial::DiscordClientError> {
//! let authorization =
//!     Authorization::default().with_authorization(AuthorizationKind::Bot, "bot-token");
//! let client = DiscordClient::builder()
//!     .with_authorization(authorization)
//!     .build()?;
//!
//! let response = client.get_current_user().await?;
//! if response.is_success() {
//!     println!("{}", response.text()?);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## OAuth2 client-credentials grant
//!
//! ```rust,no_run
//! use discordial::{Authorization, AuthorizationKind, DiscordClient};
//!
//! # async fn example() -> Result<(), discordial::DiscordClientError> {
//! let mut client = DiscordClient::builder()
//!     .with_authorization(Authorization::default().with_client_credentials("id", "secret"))
//!     .build()?;
//!
//! let response = client.request_access_token(&["identify", "email"]).await?;
//! let token: serde_json::Value = response.json()?;
//!
//! // Install the fresh token for subsequent calls
//! if let Some(access_token) = token["access_token"].as_str() {
//!     client.set_authorization(
//!         Authorization::default().with_authorization(AuthorizationKind::Bearer, access_token),
//!     );
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Custom transports
//!
//! Every operation assembles an [`ApiRequest`] and hands it to an
//! [`HttpHandler`] in a single call. Implementing the trait routes traffic
//! through a proxy, a recorder, or a test double; [`ReqwestHandler`] is the
//! default.

mod client;

pub mod types;

pub use self::client::{
    ApiRequest, ApiResponse, Authorization, AuthorizationError, AuthorizationKind,
    DEFAULT_BASE_URL, DEFAULT_TOKEN_URL, DiscordClient, DiscordClientBuilder, DiscordClientError,
    HandlerFuture, HttpHandler, ReqwestHandler, SecureString,
};
