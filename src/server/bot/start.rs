use serenity::all::{Client, GatewayIntents};

use crate::server::{bot::handler::Handler, config::Config, error::AppError, state::AppState};

/// Builds the Discord client without connecting it
///
/// # Arguments
/// - `config` - Application configuration holding the bot token
/// - `state` - Application context handed to the event handler
///
/// # Returns
/// - `Ok(Client)` - Client ready to be started
/// - `Err(AppError)` - Client construction failed
pub async fn init_bot(config: &Config, state: AppState) -> Result<Client, AppError> {
    let intents = GatewayIntents::GUILDS;

    let client = Client::builder(&config.discord_bot_token, intents)
        .event_handler(Handler::new(state))
        .await?;

    Ok(client)
}

/// Connects to the gateway and runs the bot until shutdown
///
/// A Ctrl-C listener shuts the shards down so the process leaves the gateway
/// cleanly when the hosting platform stops it.
///
/// # Returns
/// - `Ok(())` once all shards have shut down
/// - `Err(AppError)` if the gateway connection fails (e.g. invalid token)
pub async fn start_bot(mut client: Client) -> Result<(), AppError> {
    let shard_manager = client.shard_manager.clone();

    tokio::spawn(async move {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
            return;
        }
        tracing::info!("Received Ctrl-C, shutting down Discord bot");
        shard_manager.shutdown_all().await;
    });

    tracing::info!("Starting Discord bot...");

    client.start().await?;

    Ok(())
}
