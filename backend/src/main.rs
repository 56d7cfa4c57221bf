//! Trivia service entry-point: loads settings, opens the database pool and
//! serves the REST endpoints.

mod server;

use actix_web::web;
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use server::{ServerConfig, create_server};
use trivia::inbound::http::health::HealthState;
use trivia::outbound::persistence::DbPool;
use trivia::settings::TriviaSettings;

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

    let settings = TriviaSettings::load()
        .map_err(|e| std::io::Error::other(format!("failed to load settings: {e}")))?;
    let bind_addr = settings.bind_addr().map_err(std::io::Error::other)?;
    let pool_config = settings.pool_config().map_err(std::io::Error::other)?;

    let pool = DbPool::new(pool_config)
        .await
        .map_err(|e| std::io::Error::other(format!("database unavailable: {e}")))?;
    let (connections, idle) = pool.status();
    info!(%bind_addr, connections, idle, "database pool ready");

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(
        health_state.clone(),
        ServerConfig::new(bind_addr, pool),
    )?;
    let outcome = server.await;
    health_state.mark_unhealthy();
    outcome
}
