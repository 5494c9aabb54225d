// restaurant_site/src/state.rs
use crate::config::AppConfig;
use crate::sessions::SessionCarts;
use menu_cart::{CatalogSource, PromoValidator};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
  pub catalog: Arc<dyn CatalogSource>,
  pub sessions: Arc<SessionCarts>,
  pub promos: Arc<dyn PromoValidator>,
  pub config: Arc<AppConfig>, // Share loaded config
}

impl AppState {
  pub fn new(config: AppConfig, catalog: Arc<dyn CatalogSource>, promos: Arc<dyn PromoValidator>) -> Self {
    Self {
      catalog,
      sessions: Arc::new(SessionCarts::new(config.tax_rate)),
      promos,
      config: Arc::new(config),
    }
  }
}
