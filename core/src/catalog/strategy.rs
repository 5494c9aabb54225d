// menu_cart/src/catalog/strategy.rs

//! Chooses between a remote catalog and the static fallback.

use crate::catalog::fallback::StaticFallbackCatalog;
use crate::catalog::source::CatalogSource;
use crate::error::{CartError, CartResult, CatalogError};
use crate::model::menu_item::{Menu, MenuItem};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use tracing::{event, instrument, Level};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CatalogStrategy {
  /// Remote menu when it has items, fallback when it is empty or fails.
  #[default]
  RemoteWithFallback,
  /// Remote menu only. Failures reach the caller.
  RemoteOnly,
  /// Never contact the remote catalog.
  StaticOnly,
}

impl CatalogStrategy {
  pub fn needs_remote(self) -> bool {
    matches!(self, CatalogStrategy::RemoteOnly)
  }
}

impl fmt::Display for CatalogStrategy {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      CatalogStrategy::RemoteWithFallback => write!(f, "remote-with-fallback"),
      CatalogStrategy::RemoteOnly => write!(f, "remote"),
      CatalogStrategy::StaticOnly => write!(f, "static"),
    }
  }
}

impl FromStr for CatalogStrategy {
  type Err = CartError;

  fn from_str(s: &str) -> CartResult<Self> {
    match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
      "remote-with-fallback" | "fallback" | "auto" => Ok(CatalogStrategy::RemoteWithFallback),
      "remote" | "remote-only" => Ok(CatalogStrategy::RemoteOnly),
      "static" | "static-only" => Ok(CatalogStrategy::StaticOnly),
      _ => Err(CartError::UnknownStrategy(s.to_string())),
    }
  }
}

/// A `CatalogSource` that applies a `CatalogStrategy` over an optional remote
/// source and the static fallback.
pub struct SelectingCatalog {
  strategy: CatalogStrategy,
  remote: Option<Arc<dyn CatalogSource>>,
  fallback: StaticFallbackCatalog,
}

impl SelectingCatalog {
  /// Fails only when the strategy requires a remote source and none is given.
  pub fn new(
    strategy: CatalogStrategy,
    remote: Option<Arc<dyn CatalogSource>>,
    fallback: StaticFallbackCatalog,
  ) -> Result<Self, CatalogError> {
    if strategy.needs_remote() && remote.is_none() {
      return Err(CatalogError::NotConfigured(format!(
        "strategy '{}' requires a remote catalog",
        strategy
      )));
    }
    if strategy == CatalogStrategy::RemoteWithFallback && remote.is_none() {
      event!(Level::WARN, "No remote catalog configured, serving the static fallback menu.");
    }
    Ok(Self {
      strategy,
      remote,
      fallback,
    })
  }

  pub fn strategy(&self) -> CatalogStrategy {
    self.strategy
  }

  fn active_remote(&self) -> Option<&Arc<dyn CatalogSource>> {
    match self.strategy {
      CatalogStrategy::StaticOnly => None,
      _ => self.remote.as_ref(),
    }
  }
}

#[async_trait]
impl CatalogSource for SelectingCatalog {
  fn name(&self) -> &str {
    "selecting"
  }

  #[instrument(name = "SelectingCatalog::load_menu", skip_all, fields(strategy = %self.strategy))]
  async fn load_menu(&self) -> Result<Menu, CatalogError> {
    let Some(remote) = self.active_remote() else {
      return self.fallback.load_menu().await;
    };

    match (self.strategy, remote.load_menu().await) {
      (CatalogStrategy::RemoteOnly, result) => result,
      (_, Ok(menu)) if !menu.is_empty() => {
        event!(Level::DEBUG, source = remote.name(), items = menu.item_count(), "Serving remote menu.");
        Ok(menu)
      }
      (_, Ok(_)) => {
        event!(Level::INFO, source = remote.name(), "Remote menu is empty, serving the static fallback.");
        self.fallback.load_menu().await
      }
      (_, Err(e)) => {
        event!(Level::WARN, source = remote.name(), error = %e, "Remote menu failed to load, serving the static fallback.");
        self.fallback.load_menu().await
      }
    }
  }

  // Agrees with what load_menu would show: the remote answer while the remote
  // is healthy, the fallback otherwise.
  #[instrument(name = "SelectingCatalog::find_item", skip(self), fields(strategy = %self.strategy))]
  async fn find_item(&self, id: &str) -> Result<Option<MenuItem>, CatalogError> {
    let Some(remote) = self.active_remote() else {
      return self.fallback.find_item(id).await;
    };

    match (self.strategy, remote.find_item(id).await) {
      (CatalogStrategy::RemoteOnly, result) => result,
      (_, Ok(Some(item))) => Ok(Some(item)),
      // A miss only counts if the remote menu is the one being served.
      (_, Ok(None)) => Ok(self.load_menu().await?.find_item(id).cloned()),
      (_, Err(e)) => {
        event!(Level::WARN, source = remote.name(), error = %e, "Remote item lookup failed, using the static fallback.");
        self.fallback.find_item(id).await
      }
    }
  }
}
