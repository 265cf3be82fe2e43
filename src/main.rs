use anyhow::{Result, Context};
use diesel::pg::PgConnection;
use diesel::r2d2::{ConnectionManager, Pool};
use serenity::all::GatewayIntents;
use serenity::Client;
use std::env;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{error, info};

use cfb_bot::db::postgres::run_migrations;
use cfb_bot::router::create_router;
use cfb_bot::{Bot, Config, League};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    info!("Starting league bot and API server...");

    // --- Configuration ---
    let config_path =
        env::var("CONFIG_PATH").unwrap_or_else(|_| "config/default.toml".to_string());
    info!("Loading configuration from: {}", config_path);
    let config = Config::load(&config_path)
        .with_context(|| format!("Failed to load configuration from {}", config_path))?;

    // --- Database Setup ---
    info!("Setting up database connection pool...");
    let manager = ConnectionManager::<PgConnection>::new(&config.database_url);
    let pool = Pool::builder()
        .build(manager)
        .context("Failed to create database connection pool")?;
    let db_pool = Arc::new(pool);
    info!("Database pool created successfully.");

    if config.run_migrations {
        let migration_pool = db_pool.clone();
        tokio::task::spawn_blocking(move || run_migrations(&migration_pool))
            .await
            .context("Migration task panicked")??;
        info!("Database migrations are up to date.");
    }

    // --- Initialize Components --- //
    let league = League::new(db_pool, config.final_week);
    let bot = Bot::new(league.clone(), &config);
    info!("Bot initialized.");

    let app = create_router(league);
    info!("Router created.");

    // --- Setup Discord Client ---
    let intents = GatewayIntents::GUILDS
        | GatewayIntents::GUILD_MESSAGES
        | GatewayIntents::MESSAGE_CONTENT;
    let mut client = Client::builder(&config.discord_token, intents)
        .event_handler(bot)
        .await
        .context("Failed to create Discord client")?;

    // --- Setup Server Task ---
    let addr: SocketAddr = config
        .listen_addr
        .parse()
        .with_context(|| format!("Invalid listen_addr format in config: {}", config.listen_addr))?;
    info!("API server listening on {}", addr);
    let listener = TcpListener::bind(addr)
        .await
        .context("Failed to bind TCP listener")?;
    let server = axum::serve(listener, app.into_make_service());

    // --- Run Concurrently --- //
    info!("Starting server and Discord client concurrently...");

    tokio::select! {
        res = server => {
            match res {
                Ok(_) => info!("Axum server finished gracefully."),
                Err(e) => error!(error = %e, "Axum server failed."),
            }
        },
        res = client.start() => {
            match res {
                Ok(_) => info!("Discord client finished gracefully."),
                Err(e) => error!(error = %e, "Discord client failed."),
            }
        },
        _ = tokio::signal::ctrl_c() => {
            info!("Received Ctrl-C, shutting down.");
        },
    }

    info!("Application shut down.");
    Ok(())
}
