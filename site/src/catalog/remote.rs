// restaurant_site/src/catalog/remote.rs

use crate::errors::AppError;
use crate::models::{MenuCategoryRow, MenuItemRow};
use async_trait::async_trait;
use menu_cart::{CatalogError, CatalogSource, Menu, MenuCategory, MenuItem};
use sqlx::postgres::{PgPool, PgPoolOptions};
use std::collections::HashMap;
use std::time::Duration;
use tracing::{event, instrument, Level};

const SOURCE_NAME: &str = "postgres";

const CATEGORIES_SQL: &str =
  "SELECT id::text AS id, name, description, display_order FROM menu_categories ORDER BY display_order ASC";

const ITEMS_SQL: &str = "SELECT id::text AS id, category_id::text AS category_id, name, description, \
   ROUND(price * 100)::BIGINT AS price_cents, image_url, is_vegetarian, is_vegan, is_gluten_free \
   FROM menu_items WHERE is_available = true";

const ITEM_BY_ID_SQL: &str = "SELECT id::text AS id, category_id::text AS category_id, name, description, \
   ROUND(price * 100)::BIGINT AS price_cents, image_url, is_vegetarian, is_vegan, is_gluten_free \
   FROM menu_items WHERE is_available = true AND id::text = $1";

/// The menu as stored in PostgreSQL.
pub struct RemoteCatalog {
  pool: PgPool,
}

impl RemoteCatalog {
  pub fn new(pool: PgPool) -> Self {
    Self { pool }
  }

  /// Creates the pool without connecting, so a database that is down at
  /// startup only costs the fallback menu, not the server.
  pub fn connect_lazy(database_url: &str) -> Result<Self, AppError> {
    let pool = PgPoolOptions::new()
      .max_connections(5)
      .acquire_timeout(Duration::from_secs(3))
      .connect_lazy(database_url)?;
    Ok(Self::new(pool))
  }
}

fn unavailable(e: sqlx::Error) -> CatalogError {
  CatalogError::Unavailable {
    source_name: SOURCE_NAME.to_string(),
    source: anyhow::Error::new(e),
  }
}

#[async_trait]
impl CatalogSource for RemoteCatalog {
  fn name(&self) -> &str {
    SOURCE_NAME
  }

  #[instrument(name = "RemoteCatalog::load_menu", skip(self))]
  async fn load_menu(&self) -> Result<Menu, CatalogError> {
    let category_rows: Vec<MenuCategoryRow> = sqlx::query_as(CATEGORIES_SQL)
      .fetch_all(&self.pool)
      .await
      .map_err(unavailable)?;

    let item_rows: Vec<MenuItemRow> = sqlx::query_as(ITEMS_SQL)
      .fetch_all(&self.pool)
      .await
      .map_err(unavailable)?;

    let mut by_category: HashMap<String, Vec<MenuItem>> = HashMap::new();
    for row in item_rows {
      let category_id = row.category_id.clone();
      by_category
        .entry(category_id)
        .or_default()
        .push(row.into_menu_item(SOURCE_NAME)?);
    }

    let categories = category_rows
      .into_iter()
      .map(|row| MenuCategory {
        items: by_category.remove(&row.id).unwrap_or_default(),
        id: row.id,
        name: row.name,
        description: row.description.unwrap_or_default(),
        display_order: row.display_order,
      })
      .collect();

    let menu = Menu::new(categories);
    event!(Level::DEBUG, items = menu.item_count(), "Loaded menu from database.");
    Ok(menu)
  }

  #[instrument(name = "RemoteCatalog::find_item", skip(self))]
  async fn find_item(&self, id: &str) -> Result<Option<MenuItem>, CatalogError> {
    let row: Option<MenuItemRow> = sqlx::query_as(ITEM_BY_ID_SQL)
      .bind(id)
      .fetch_optional(&self.pool)
      .await
      .map_err(unavailable)?;
    row.map(|r| r.into_menu_item(SOURCE_NAME)).transpose()
  }
}
