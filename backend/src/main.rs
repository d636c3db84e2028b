//! Backend entry-point: loads settings, prepares persistence and serves the
//! REST API.
#![cfg_attr(not(any(test, doctest)), deny(clippy::unwrap_used))]
#![cfg_attr(not(any(test, doctest)), deny(clippy::expect_used))]

mod server;

use actix_web::cookie::SameSite;
use actix_web::web;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use emsx_backend::inbound::http::health::HealthState;
use emsx_backend::outbound::persistence::{DbPool, PoolConfig, run_pending_migrations};
use emsx_backend::settings::{AppSettings, BuildMode};
use ortho_config::OrthoConfig;

use server::{ServerConfig, create_server};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = AppSettings::load()
        .map_err(|error| std::io::Error::other(format!("load settings: {error}")))?;
    let key = settings
        .session_key(BuildMode::from_debug_assertions())
        .map_err(std::io::Error::other)?;
    if !settings.session_cookie_secure {
        warn!("session cookie Secure flag disabled");
    }

    let mut config = ServerConfig::new(
        key,
        settings.session_cookie_secure,
        SameSite::Lax,
        settings.bind_addr(),
    );
    if let Some(url) = settings.database_url.clone() {
        config = config.with_db_pool(connect(url).await?);
    }

    let health_state = web::Data::new(HealthState::new());
    info!(addr = %settings.bind_addr(), "starting server");
    let server = create_server(health_state, config)?;
    server.await
}

/// Apply migrations on a blocking thread, then open the async pool.
async fn connect(database_url: String) -> std::io::Result<DbPool> {
    let migration_url = database_url.clone();
    tokio::task::spawn_blocking(move || run_pending_migrations(&migration_url))
        .await
        .map_err(|error| std::io::Error::other(format!("migration task failed: {error}")))?
        .map_err(std::io::Error::other)?;

    DbPool::new(PoolConfig::new(database_url))
        .await
        .map_err(std::io::Error::other)
}
