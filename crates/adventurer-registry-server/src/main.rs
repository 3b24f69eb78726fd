use std::sync::Arc;

use anyhow::Context;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::EnvFilter;

use adventurer_registry::{ChatIntegration, CommandRouter};
use adventurer_registry_discord::{DiscordClient, DiscordConfig, DiscordIntegration};
use adventurer_registry_server::{BotConfig, PgCharacterRepository};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Respects RUST_LOG
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                EnvFilter::new("info,adventurer_registry=debug,adventurer_registry_server=debug")
            }),
        )
        .init();

    tracing::info!(
        "📜 Adventurer Registry v{} initializing...",
        env!("CARGO_PKG_VERSION")
    );

    let config = BotConfig::from_env().context("Failed to load configuration")?;
    tracing::info!(?config, "Loaded configuration");

    let pool = PgPoolOptions::new()
        .max_connections(config.database_max_connections)
        .connect(&config.database_url)
        .await
        .context("Failed to connect to the database")?;

    let repo = Arc::new(PgCharacterRepository::new(pool.clone()));
    repo.ensure_schema()
        .await
        .context("Failed to bootstrap the database schema")?;

    tracing::info!("✅ Database schema ready");

    let discord_config = DiscordConfig::new(&config.discord_token);
    match DiscordClient::new(&discord_config).health_check().await {
        Ok(true) => tracing::info!("🔑 Discord token verified"),
        _ => tracing::warn!("⚠️  Could not verify Discord token - continuing anyway"),
    }

    let router = Arc::new(CommandRouter::new(repo, config.command_prefix.clone()));
    let discord = DiscordIntegration::new(discord_config, router);

    let mut client = discord
        .into_client()
        .await
        .context("Failed to create the Discord client")?;

    let shard_manager = client.shard_manager.clone();
    tokio::spawn(async move {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for shutdown signal");
            return;
        }
        tracing::info!("🛑 Shutdown signal received, closing Discord connection");
        shard_manager.shutdown_all().await;
    });

    tracing::info!("✅ Adventurer Registry ready - press CTRL-C to exit");

    client
        .start()
        .await
        .context("Discord client stopped with an error")?;

    pool.close().await;
    tracing::info!("👋 Adventurer Registry stopped");

    Ok(())
}
