// restaurant_site/src/config.rs

use crate::errors::{AppError, Result};
use chrono::TimeDelta;
use dotenvy::dotenv;
use menu_cart::{CatalogStrategy, HandoffTargets, TaxRate};
use std::env;
use std::str::FromStr;

const DEFAULT_DELIVEROO_URL: &str =
  "https://deliveroo.ie/menu/Dublin/city-hall/gala-temple-bar?day=today&geohash=gc7x3rhhv3ed&time=ASAP";
const DEFAULT_UBER_EATS_URL: &str =
  "https://www.ubereats.com/ie/store/pulari-desi/Z1s5JKUHXWuM7Qg9pPxCcA?diningMode=DELIVERY&sc=SEARCH_SUGGESTION";
const DEFAULT_PICKUP_PHONE: &str = "+353 87 973 8186";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
  #[default]
  Pretty,
  Json,
}

impl FromStr for LogFormat {
  type Err = String;

  fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
    match s.trim().to_ascii_lowercase().as_str() {
      "pretty" | "text" => Ok(LogFormat::Pretty),
      "json" => Ok(LogFormat::Json),
      other => Err(format!("unknown log format '{}'", other)),
    }
  }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
  pub server_host: String,
  pub server_port: u16,
  /// Absent means there is no remote catalog to talk to.
  pub database_url: Option<String>,
  pub catalog_strategy: CatalogStrategy,
  pub tax_rate: TaxRate,
  pub handoff: HandoffTargets,
  /// Carts untouched for this long are dropped.
  pub session_idle: TimeDelta,
  pub log_format: LogFormat,
}

impl AppConfig {
  pub fn from_env() -> Result<Self> {
    dotenv().ok(); // Load .env file if present
    Self::from_lookup(|name| env::var(name).ok())
  }

  /// Builds the config from any variable lookup, so tests never touch the
  /// process environment.
  pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
    let get_or = |name: &str, default: &str| {
      lookup(name)
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
    };

    let server_host = get_or("SERVER_HOST", "127.0.0.1");
    let server_port = parse_var::<u16>("SERVER_PORT", &get_or("SERVER_PORT", "8080"))?;
    let database_url = lookup("DATABASE_URL").filter(|v| !v.trim().is_empty());

    let catalog_strategy = parse_var::<CatalogStrategy>("CATALOG_STRATEGY", &get_or("CATALOG_STRATEGY", "remote-with-fallback"))?;
    if catalog_strategy.needs_remote() && database_url.is_none() {
      return Err(AppError::Config(format!(
        "CATALOG_STRATEGY={} requires DATABASE_URL",
        catalog_strategy
      )));
    }

    let tax_rate = parse_var::<TaxRate>("VAT_RATE_PERCENT", &get_or("VAT_RATE_PERCENT", "9"))?;

    let handoff = HandoffTargets {
      deliveroo_url: get_or("DELIVEROO_URL", DEFAULT_DELIVEROO_URL),
      uber_eats_url: get_or("UBER_EATS_URL", DEFAULT_UBER_EATS_URL),
      pickup_phone: get_or("PICKUP_PHONE", DEFAULT_PICKUP_PHONE),
    };

    let session_idle_minutes = parse_var::<i64>("SESSION_IDLE_MINUTES", &get_or("SESSION_IDLE_MINUTES", "120"))?;
    if session_idle_minutes <= 0 {
      return Err(AppError::Config("SESSION_IDLE_MINUTES must be positive".to_string()));
    }
    let session_idle = TimeDelta::try_minutes(session_idle_minutes)
      .ok_or_else(|| AppError::Config(format!("SESSION_IDLE_MINUTES is too large: {}", session_idle_minutes)))?;

    let log_format = parse_var::<LogFormat>("LOG_FORMAT", &get_or("LOG_FORMAT", "pretty"))?;

    tracing::info!(
      %catalog_strategy,
      %tax_rate,
      remote_catalog = database_url.is_some(),
      "Application configuration loaded successfully."
    );

    Ok(Self {
      server_host,
      server_port,
      database_url,
      catalog_strategy,
      tax_rate,
      handoff,
      session_idle,
      log_format,
    })
  }

  pub fn bind_address(&self) -> String {
    format!("{}:{}", self.server_host, self.server_port)
  }
}

fn parse_var<T>(name: &str, raw: &str) -> Result<T>
where
  T: FromStr,
  T::Err: std::fmt::Display,
{
  raw
    .trim()
    .parse::<T>()
    .map_err(|e| AppError::Config(format!("Invalid {}: {}", name, e)))
}
