// Fetches the bot user behind a bot token.
//
// DISCORD_BOT_TOKEN=... cargo run --example get_current_user

use discordial::{Authorization, AuthorizationKind, DiscordClient};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().pretty().init();

    let token = std::env::var("DISCORD_BOT_TOKEN")?;

    let authorization = Authorization::default().with_authorization(AuthorizationKind::Bot, token);
    let client = DiscordClient::builder()
        .with_authorization(authorization)
        .build()?;

    let response = client.get_current_user().await?;

    println!("status: {}", response.status());
    println!("{}", response.text()?);

    Ok(())
}
