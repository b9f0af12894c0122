// Exchanges an OAuth2 client id and secret for an access token.
//
// DISCORD_CLIENT_ID=... DISCORD_CLIENT_SECRET=... cargo run --example request_access_token

use discordial::{Authorization, DiscordClient};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().pretty().init();

    let client_id = std::env::var("DISCORD_CLIENT_ID")?;
    let client_secret = std::env::var("DISCORD_CLIENT_SECRET")?;

    // Client-credentials pair; no token needed for the exchange itself
    let authorization = Authorization::default().with_client_credentials(client_id, client_secret);
    let client = DiscordClient::builder()
        .with_authorization(authorization)
        .build()?;

    let response = client.request_access_token(&["identify", "email"]).await?;

    println!("status: {}", response.status());
    println!("{}", response.text()?);

    Ok(())
}
