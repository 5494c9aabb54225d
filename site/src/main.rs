// restaurant_site/src/main.rs

mod catalog;
mod config;
mod errors;
mod models;
mod sessions;
mod state;
mod web;

use crate::config::{AppConfig, LogFormat};
use crate::state::AppState;

use actix_web::{web as actix_data, App, HttpServer};
use menu_cart::NoPromotions;
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::EnvFilter;

const EVICTION_INTERVAL: Duration = Duration::from_secs(60);

fn init_tracing(format: LogFormat) {
  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
  let builder = tracing_subscriber::fmt()
    .with_env_filter(filter) // Allow RUST_LOG override
    .with_span_events(FmtSpan::CLOSE); // Log when spans close, showing duration
  match format {
    LogFormat::Json => builder.json().init(),
    LogFormat::Pretty => builder.init(),
  }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
  // Tracing comes up before the config load so its errors are logged; read
  // LOG_FORMAT (possibly from .env) ahead of the rest.
  dotenvy::dotenv().ok();
  let log_format = std::env::var("LOG_FORMAT")
    .ok()
    .and_then(|v| v.parse::<LogFormat>().ok())
    .unwrap_or_default();
  init_tracing(log_format);

  tracing::info!("Starting restaurant site server...");

  let app_config = match AppConfig::from_env() {
    Ok(cfg) => cfg,
    Err(e) => {
      tracing::error!(error = %e, "Failed to load application configuration.");
      return Err(std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string()));
    }
  };

  let catalog = match catalog::build_catalog(&app_config) {
    Ok(catalog) => catalog,
    Err(e) => {
      tracing::error!(error = %e, "Failed to set up the menu catalog.");
      return Err(std::io::Error::other(e.to_string()));
    }
  };

  tracing::info!(log_format = ?app_config.log_format, strategy = %app_config.catalog_strategy, "Catalog ready.");

  let server_address = app_config.bind_address();
  let idle = app_config.session_idle;
  let app_state = AppState::new(app_config, catalog, Arc::new(NoPromotions));

  let sessions = app_state.sessions.clone();
  tokio::spawn(async move {
    let mut ticker = tokio::time::interval(EVICTION_INTERVAL);
    loop {
      ticker.tick().await;
      if sessions.evict_idle(idle) > 0 {
        tracing::debug!(active_sessions = sessions.len(), "Session sweep finished.");
      }
    }
  });

  tracing::info!("Attempting to bind server to {}...", server_address);

  HttpServer::new(move || {
    App::new()
      .app_data(actix_data::Data::new(app_state.clone())) // Share AppState with handlers
      .wrap(tracing_actix_web::TracingLogger::default()) // Actix middleware for tracing requests
      .configure(web::configure_app_routes)
  })
  .bind(&server_address)?
  .run()
  .await
}
