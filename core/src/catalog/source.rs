// menu_cart/src/catalog/source.rs

//! Defines the `CatalogSource` trait, the capability of producing the menu.

use crate::error::CatalogError;
use crate::model::menu_item::{Menu, MenuItem};
use async_trait::async_trait;

/// Anything that can produce the current menu: a remote database, a fixed
/// fallback menu, or a strategy choosing between the two.
///
/// Loads are independent of any cart. A failed load is reported to the caller
/// and leaves cart state alone.
#[async_trait]
pub trait CatalogSource: Send + Sync + 'static {
  /// Short name for logs, e.g. `"postgres"` or `"static-fallback"`.
  fn name(&self) -> &str;

  async fn load_menu(&self) -> Result<Menu, CatalogError>;

  /// Looks up a single dish. The default loads the whole menu; sources with
  /// an indexed backend can do better.
  async fn find_item(&self, id: &str) -> Result<Option<MenuItem>, CatalogError> {
    let menu = self.load_menu().await?;
    Ok(menu.find_item(id).cloned())
  }
}
