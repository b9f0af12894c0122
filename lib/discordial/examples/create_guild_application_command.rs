// Registers a guild-scoped slash command.
//
// DISCORD_BOT_TOKEN=... DISCORD_APPLICATION_ID=... DISCORD_GUILD_ID=... \
//   cargo run --example create_guild_application_command

use discordial::types::{
    ApplicationCommand, ApplicationCommandType, IntegrationType, InteractionContextType,
};
use discordial::{Authorization, AuthorizationKind, DiscordClient};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().pretty().init();

    let token = std::env::var("DISCORD_BOT_TOKEN")?;
    let application_id = std::env::var("DISCORD_APPLICATION_ID")?;
    let guild_id = std::env::var("DISCORD_GUILD_ID")?;

    let authorization = Authorization::default().with_authorization(AuthorizationKind::Bot, token);
    let client = DiscordClient::builder()
        .with_authorization(authorization)
        .build()?;

    // Guild commands update instantly, unlike global ones
    let command = ApplicationCommand::new("ping")
        .with_description("Replies with pong")
        .with_kind(ApplicationCommandType::ChatInput)
        .with_integration_types(vec![IntegrationType::GuildInstall])
        .with_contexts(vec![InteractionContextType::Guild]);

    let response = client
        .create_guild_application_command(&application_id, &guild_id, &command)
        .await?;

    println!("status: {}", response.status());
    println!("{}", response.text()?);

    Ok(())
}
