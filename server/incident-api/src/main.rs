//! Binary entrypoint for the incident API.

use std::sync::Arc;

use sqlx_postgres::PgPoolOptions;
use tracing::info;

use incident_api::{AppState, Config, PgStore};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
  init_tracing();

  let config = Config::from_env()?;
  info!(
    database_url = %config.database_url_masked(),
    listen_addr = %config.listen_addr,
    max_connections = config.database_max_connections,
    "configuration loaded"
  );

  let pool = PgPoolOptions::new()
    .max_connections(config.database_max_connections)
    .connect(&config.database_url)
    .await?;
  let store = PgStore::new(pool);
  store.ensure_schema().await?;
  info!("connected to database, schema ready");

  let app = incident_api::create_router(AppState::new(Arc::new(store.clone())));

  let listener = tokio::net::TcpListener::bind(config.listen_addr).await?;
  info!("incident-api listening on http://{}", config.listen_addr);

  axum::serve(listener, app)
    .with_graceful_shutdown(shutdown_signal())
    .await?;

  store.pool().close().await;
  info!("shutdown complete");
  Ok(())
}

fn init_tracing() {
  use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

  let filter = EnvFilter::try_from_default_env()
    .unwrap_or_else(|_| EnvFilter::new("info,incident_api=debug,tower_http=debug"));

  tracing_subscriber::registry()
    .with(filter)
    .with(fmt::layer().with_target(true))
    .init();
}

async fn shutdown_signal() {
  let ctrl_c = async {
    if let Err(e) = tokio::signal::ctrl_c().await {
      tracing::error!(error = %e, "failed to listen for ctrl-c");
      std::future::pending::<()>().await;
    }
  };

  #[cfg(unix)]
  let terminate = async {
    match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
      Ok(mut sig) => {
        sig.recv().await;
      }
      Err(e) => {
        tracing::error!(error = %e, "failed to install SIGTERM handler");
        std::future::pending::<()>().await;
      }
    }
  };

  #[cfg(not(unix))]
  let terminate = std::future::pending::<()>();

  tokio::select! {
    _ = ctrl_c => {},
    _ = terminate => {},
  }
  info!("shutdown signal received");
}
