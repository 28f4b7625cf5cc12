//! Backend entry-point: loads settings, picks a user store, and serves HTTP.
#![cfg_attr(not(any(test, doctest)), deny(clippy::unwrap_used))]
#![cfg_attr(not(any(test, doctest)), deny(clippy::expect_used))]

use std::ffi::OsString;
use std::sync::Arc;

use actix_web::web;
use color_eyre::eyre::{Context, Result};
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use roster_backend::domain::ports::UserRepository;
use roster_backend::inbound::http::health::HealthState;
use roster_backend::outbound::persistence::{InMemoryUserRepository, MongoStore, MongoUserRepository};
use roster_backend::server::{ServerConfig, ServerSettings, StoreSettings, create_server};

const PROGRAM: &str = "roster-backend";

async fn build_repository(
    server: &ServerSettings,
    store: &StoreSettings,
) -> Result<Arc<dyn UserRepository>> {
    if server.in_memory_store {
        warn!("using in-memory user store; data is lost on exit");
        return Ok(Arc::new(InMemoryUserRepository::new()));
    }

    let config = store.store_config();
    let mongo = MongoStore::connect(&config)
        .await
        .wrap_err("configure document store client")?;
    match mongo.ping().await {
        Ok(()) => info!(
            database = config.database(),
            collection = config.collection(),
            "connected to document store"
        ),
        Err(error) => warn!(
            %error,
            "document store not reachable yet; requests fail until it is"
        ),
    }
    Ok(Arc::new(MongoUserRepository::new(&mongo)))
}

/// Application bootstrap.
#[actix_web::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let server_settings = ServerSettings::load_from_iter([OsString::from(PROGRAM)])
        .wrap_err("load server settings")?;
    let store_settings = StoreSettings::load_from_iter([OsString::from(PROGRAM)])
        .wrap_err("load document store settings")?;

    let repository = build_repository(&server_settings, &store_settings).await?;
    let bind_addr = server_settings.bind_addr();
    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state, ServerConfig::new(bind_addr, repository))
        .wrap_err_with(|| format!("bind {bind_addr}"))?;

    info!(%bind_addr, "server listening");
    server.await.wrap_err("run HTTP server")
}
