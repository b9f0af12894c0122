use std::fmt;

use http::HeaderValue;
use reqwest::header::{AUTHORIZATION, HeaderName};
use serde::{Deserialize, Serialize};
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Errors raised while validating credentials, before any network call.
///
/// Every variant maps to a missing or unusable field on [`Authorization`].
/// The dispatcher surfaces these directly; it never retries or recovers.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Error, derive_more::Display)]
pub enum AuthorizationError {
    /// Client-credentials grant attempted without a client id.
    #[display("Client ID is not set.")]
    MissingClientId,

    /// Client-credentials grant attempted without a client secret.
    #[display("Client Secret is not set.")]
    MissingClientSecret,

    /// Token-authenticated operation attempted without a token.
    #[display("Authorization token is not set.")]
    MissingToken,

    /// Token-authenticated operation attempted without a header convention.
    #[display("Authorization kind is not set.")]
    MissingAuthorizationKind,

    /// Token contains bytes that cannot appear in an HTTP header value.
    #[display("Authorization token contains invalid characters: {message}")]
    InvalidToken {
        /// Description of the invalid characters.
        message: String,
    },
}

/// Secret wrapper that zeroes its memory on drop.
///
/// `Debug` prints `[REDACTED]` and `Display` masks the value, so tokens and
/// client secrets stay out of logs. The plain value is reachable through
/// [`as_str`](Self::as_str) and through serde when building the
/// token-exchange form body.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct SecureString(String);

impl SecureString {
    /// Wraps the given value.
    pub fn new(value: String) -> Self {
        Self(value)
    }

    /// Returns the inner value.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true when the wrapped value is the empty string.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Masks the value for display: `***` for short values, else the first
    /// and last four characters around an ellipsis.
    fn mask_sensitive(value: &str) -> String {
        // Cut on char boundaries, not byte offsets.
        let char_count = value.chars().count();
        if char_count <= 8 {
            "***".to_string()
        } else {
            let prefix: String = value.chars().take(4).collect();
            let suffix: String = value.chars().skip(char_count - 4).collect();
            format!("{prefix}...{suffix}")
        }
    }
}

impl fmt::Debug for SecureString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecureString")
            .field("value", &"[REDACTED]")
            .finish()
    }
}

impl fmt::Display for SecureString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", Self::mask_sensitive(&self.0))
    }
}

impl From<String> for SecureString {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl From<&str> for SecureString {
    fn from(value: &str) -> Self {
        Self::new(value.to_string())
    }
}

impl Serialize for SecureString {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for SecureString {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        String::deserialize(deserializer).map(Self::new)
    }
}

/// Header convention for token-authenticated requests.
///
/// Discord accepts two schemes in the `Authorization` header: `Bearer` for
/// OAuth2 access tokens and `Bot` for long-lived bot tokens. The enum is
/// closed; dispatch is an exhaustive match with no defensive fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthorizationKind {
    /// OAuth2 access token, sent as `Authorization: Bearer <token>`.
    Bearer,
    /// Bot token, sent as `Authorization: Bot <token>`.
    Bot,
}

impl AuthorizationKind {
    /// Returns the scheme word used in the `Authorization` header.
    pub fn scheme(self) -> &'static str {
        match self {
            Self::Bearer => "Bearer",
            Self::Bot => "Bot",
        }
    }
}

impl fmt::Display for AuthorizationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.scheme())
    }
}

/// Credential holder consumed by [`DiscordClient`](crate::DiscordClient).
///
/// Holds two independent credential shapes: a token plus its
/// [`AuthorizationKind`], and an OAuth2 client-id/client-secret pair for the
/// client-credentials grant. Both may be set on the same value; each client
/// operation consults only the shape it needs.
///
/// A string field counts as present only when it is set AND non-empty; an
/// explicitly stored empty string behaves like an absent value.
///
/// # Examples
///
/// ```rust
/// use discordial::{Authorization, AuthorizationKind};
///
/// let auth = Authorization::default()
///     .with_authorization(AuthorizationKind::Bot, "my-bot-token");
/// assert!(auth.has_token());
/// assert!(auth.has_kind());
///
/// let auth = Authorization::default()
///     .with_client_credentials("client-id", "client-secret");
/// assert!(auth.has_client_id());
/// assert!(auth.has_client_secret());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Authorization {
    client_id: Option<String>,
    client_secret: Option<SecureString>,
    kind: Option<AuthorizationKind>,
    token: Option<SecureString>,
}

// Presence checks and accessors
impl Authorization {
    /// Returns true when a non-empty client id is set.
    pub fn has_client_id(&self) -> bool {
        self.client_id.as_deref().is_some_and(|value| !value.is_empty())
    }

    /// Returns true when a non-empty client secret is set.
    pub fn has_client_secret(&self) -> bool {
        self.client_secret.as_ref().is_some_and(|value| !value.is_empty())
    }

    /// Returns true when a non-empty token is set.
    pub fn has_token(&self) -> bool {
        self.token.as_ref().is_some_and(|value| !value.is_empty())
    }

    /// Returns true when a header convention is set.
    pub fn has_kind(&self) -> bool {
        self.kind.is_some()
    }

    /// The stored client id, if any.
    pub fn client_id(&self) -> Option<&str> {
        self.client_id.as_deref()
    }

    /// The stored client secret, if any.
    pub fn client_secret(&self) -> Option<&SecureString> {
        self.client_secret.as_ref()
    }

    /// The stored header convention, if any.
    pub fn kind(&self) -> Option<AuthorizationKind> {
        self.kind
    }

    /// The stored token, if any.
    pub fn token(&self) -> Option<&SecureString> {
        self.token.as_ref()
    }
}

// Chained configuration
impl Authorization {
    /// Stores the OAuth2 client id.
    pub fn with_client_id(mut self, client_id: impl Into<String>) -> Self {
        self.client_id = Some(client_id.into());
        self
    }

    /// Stores the OAuth2 client secret.
    pub fn with_client_secret(mut self, client_secret: impl Into<SecureString>) -> Self {
        self.client_secret = Some(client_secret.into());
        self
    }

    /// Stores both client-credential fields in one step.
    pub fn with_client_credentials(
        self,
        client_id: impl Into<String>,
        client_secret: impl Into<SecureString>,
    ) -> Self {
        self.with_client_id(client_id)
            .with_client_secret(client_secret)
    }

    /// Stores the header convention.
    pub fn with_kind(mut self, kind: AuthorizationKind) -> Self {
        self.kind = Some(kind);
        self
    }

    /// Stores the token.
    pub fn with_token(mut self, token: impl Into<SecureString>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Stores the header convention and the token in one step.
    pub fn with_authorization(
        self,
        kind: AuthorizationKind,
        token: impl Into<SecureString>,
    ) -> Self {
        self.with_kind(kind).with_token(token)
    }
}

// Pre-flight validation
impl Authorization {
    /// Produces the `Authorization` header for token-authenticated requests.
    ///
    /// Token presence is checked before kind presence, so the reported error
    /// is deterministic when both are missing. The produced header value is
    /// marked sensitive and stays redacted in debug output.
    ///
    /// # Errors
    ///
    /// [`AuthorizationError::MissingToken`] without a usable token,
    /// [`AuthorizationError::MissingAuthorizationKind`] without a convention,
    /// [`AuthorizationError::InvalidToken`] when the token cannot be encoded
    /// as a header value.
    pub fn to_header(&self) -> Result<(HeaderName, HeaderValue), AuthorizationError> {
        let token = self
            .token
            .as_ref()
            .filter(|value| !value.is_empty())
            .ok_or(AuthorizationError::MissingToken)?;
        let kind = self.kind.ok_or(AuthorizationError::MissingAuthorizationKind)?;

        let header_value = format!("{} {}", kind.scheme(), token.as_str());
        let mut value = HeaderValue::from_str(&header_value).map_err(|err| {
            AuthorizationError::InvalidToken {
                message: err.to_string(),
            }
        })?;
        value.set_sensitive(true);
        Ok((AUTHORIZATION, value))
    }

    /// Returns the validated client-credential pair for the token exchange.
    ///
    /// The client id is checked before the client secret, regardless of
    /// which of the two is missing.
    ///
    /// # Errors
    ///
    /// [`AuthorizationError::MissingClientId`] or
    /// [`AuthorizationError::MissingClientSecret`].
    pub fn client_credentials(&self) -> Result<(&str, &SecureString), AuthorizationError> {
        let client_id = self
            .client_id
            .as_deref()
            .filter(|value| !value.is_empty())
            .ok_or(AuthorizationError::MissingClientId)?;
        let client_secret = self
            .client_secret
            .as_ref()
            .filter(|value| !value.is_empty())
            .ok_or(AuthorizationError::MissingClientSecret)?;
        Ok((client_id, client_secret))
    }
}
