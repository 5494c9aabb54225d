// restaurant_site/src/catalog/mod.rs

pub mod remote;

pub use remote::RemoteCatalog;

use crate::config::AppConfig;
use crate::errors::Result;
use menu_cart::{CatalogSource, CatalogStrategy, SelectingCatalog, StaticFallbackCatalog};
use std::sync::Arc;

/// Builds the catalog the site serves from, as configured.
pub fn build_catalog(config: &AppConfig) -> Result<Arc<dyn CatalogSource>> {
  let remote: Option<Arc<dyn CatalogSource>> = match (&config.database_url, config.catalog_strategy) {
    (_, CatalogStrategy::StaticOnly) | (None, _) => None,
    (Some(url), _) => Some(Arc::new(RemoteCatalog::connect_lazy(url)?)),
  };
  let selecting = SelectingCatalog::new(config.catalog_strategy, remote, StaticFallbackCatalog::house_menu())?;
  Ok(Arc::new(selecting))
}
