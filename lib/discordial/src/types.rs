//! Request payload types for application commands and messages.
//!
//! These model the common JSON shapes accepted by the command registration
//! and message endpoints. The endpoints themselves take any
//! [`serde::Serialize`] value, so hand-built payloads (for example
//! [`serde_json::Value`]) work just as well for fields not covered here.

use serde::Serialize;

/// Application command kind, serialized as its numeric code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(into = "u8")]
pub enum ApplicationCommandType {
    /// Slash command, the default.
    ChatInput = 1,
    /// Command shown in the user context menu.
    User = 2,
    /// Command shown in the message context menu.
    Message = 3,
    /// Launch point for an app's primary activity.
    PrimaryEntryPoint = 4,
}

impl From<ApplicationCommandType> for u8 {
    fn from(value: ApplicationCommandType) -> Self {
        value as Self
    }
}

/// Installation context a command is available in, serialized as its
/// numeric code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(into = "u8")]
pub enum IntegrationType {
    /// App installed to a guild.
    GuildInstall = 0,
    /// App installed to a user account.
    UserInstall = 1,
}

impl From<IntegrationType> for u8 {
    fn from(value: IntegrationType) -> Self {
        value as Self
    }
}

/// Surface a command can be invoked from, serialized as its numeric code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(into = "u8")]
pub enum InteractionContextType {
    /// Inside a guild.
    Guild = 0,
    /// In a DM with the app's bot user.
    BotDm = 1,
    /// In group DMs and DMs other than the bot's own.
    PrivateChannel = 2,
}

impl From<InteractionContextType> for u8 {
    fn from(value: InteractionContextType) -> Self {
        value as Self
    }
}

/// Payload for registering an application command.
///
/// Optional fields are omitted from the JSON entirely when unset, so the
/// API applies its own defaults.
///
/// ```rust
/// use discordial::types::{ApplicationCommand, ApplicationCommandType, IntegrationType};
///
/// let command = ApplicationCommand::new("ping")
///     .with_description("Replies with pong")
///     .with_kind(ApplicationCommandType::ChatInput)
///     .with_integration_types(vec![IntegrationType::GuildInstall]);
/// # let _ = command;
/// ```
#[derive(Debug, Clone, Serialize)]
pub struct ApplicationCommand {
    /// Command name, 1-32 characters.
    pub name: String,

    /// Description, required by the API for chat-input commands.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Command kind; the API defaults to chat input when omitted.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<ApplicationCommandType>,

    /// Installation contexts the command is available in.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub integration_types: Option<Vec<IntegrationType>>,

    /// Interaction contexts the command can be used in.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contexts: Option<Vec<InteractionContextType>>,
}

impl ApplicationCommand {
    /// Creates a command with only the name set.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            kind: None,
            integration_types: None,
            contexts: None,
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the command kind.
    #[must_use]
    pub fn with_kind(mut self, kind: ApplicationCommandType) -> Self {
        self.kind = Some(kind);
        self
    }

    /// Sets the installation contexts.
    #[must_use]
    pub fn with_integration_types(mut self, integration_types: Vec<IntegrationType>) -> Self {
        self.integration_types = Some(integration_types);
        self
    }

    /// Sets the interaction contexts.
    #[must_use]
    pub fn with_contexts(mut self, contexts: Vec<InteractionContextType>) -> Self {
        self.contexts = Some(contexts);
        self
    }
}

/// Payload for posting a message to a channel.
#[derive(Debug, Clone, Serialize)]
pub struct CreateMessage {
    /// Message text content.
    pub content: String,

    /// Send as a text-to-speech message.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tts: Option<bool>,
}

impl CreateMessage {
    /// Creates a plain text message.
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            tts: None,
        }
    }

    /// Marks the message as text-to-speech.
    #[must_use]
    pub fn with_tts(mut self, tts: bool) -> Self {
        self.tts = Some(tts);
        self
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_enums_serialize_as_numeric_codes() {
        assert_eq!(
            serde_json::to_value(ApplicationCommandType::ChatInput).expect("should serialize"),
            json!(1)
        );
        assert_eq!(
            serde_json::to_value(ApplicationCommandType::PrimaryEntryPoint)
                .expect("should serialize"),
            json!(4)
        );
        assert_eq!(
            serde_json::to_value(IntegrationType::GuildInstall).expect("should serialize"),
            json!(0)
        );
        assert_eq!(
            serde_json::to_value(InteractionContextType::PrivateChannel)
                .expect("should serialize"),
            json!(2)
        );
    }

    #[test]
    fn test_minimal_command_serializes_name_only() {
        let command = ApplicationCommand::new("ping");
        let value = serde_json::to_value(&command).expect("should serialize");

        assert_eq!(value, json!({"name": "ping"}));
    }

    #[test]
    fn test_full_command_serialization() {
        let command = ApplicationCommand::new("ping")
            .with_description("Replies with pong")
            .with_kind(ApplicationCommandType::ChatInput)
            .with_integration_types(vec![
                IntegrationType::GuildInstall,
                IntegrationType::UserInstall,
            ])
            .with_contexts(vec![
                InteractionContextType::Guild,
                InteractionContextType::BotDm,
                InteractionContextType::PrivateChannel,
            ]);

        let value = serde_json::to_value(&command).expect("should serialize");
        assert_eq!(
            value,
            json!({
                "name": "ping",
                "description": "Replies with pong",
                "type": 1,
                "integration_types": [0, 1],
                "contexts": [0, 1, 2],
            })
        );
    }

    #[test]
    fn test_kind_field_renames_to_type() {
        let command = ApplicationCommand::new("menu").with_kind(ApplicationCommandType::Message);
        let text = serde_json::to_string(&command).expect("should serialize");

        assert!(text.contains("\"type\":3"));
        assert!(!text.contains("kind"));
    }

    #[test]
    fn test_create_message_omits_unset_tts() {
        let message = CreateMessage::new("hello");
        let value = serde_json::to_value(&message).expect("should serialize");
        assert_eq!(value, json!({"content": "hello"}));

        let message = CreateMessage::new("hello").with_tts(true);
        let value = serde_json::to_value(&message).expect("should serialize");
        assert_eq!(value, json!({"content": "hello", "tts": true}));
    }
}
