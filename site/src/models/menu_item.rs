// restaurant_site/src/models/menu_item.rs

use menu_cart::{CatalogError, MenuItem, Money};
use sqlx::FromRow;

#[derive(Debug, Clone, FromRow)]
pub struct MenuItemRow {
  pub id: String,
  pub category_id: String,
  pub name: String,
  pub description: Option<String>,
  pub price_cents: i64, // ROUND(price * 100) in the query
  pub image_url: Option<String>,
  pub is_vegetarian: bool,
  pub is_vegan: bool,
  pub is_gluten_free: bool,
}

impl MenuItemRow {
  pub fn into_menu_item(self, source_name: &str) -> Result<MenuItem, CatalogError> {
    if self.price_cents < 0 {
      return Err(CatalogError::Malformed {
        source_name: source_name.to_string(),
        message: format!("menu item {} has a negative price", self.id),
      });
    }
    let mut item = MenuItem::new(self.id, self.name, Money::from_cents(self.price_cents))
      .with_description(self.description.unwrap_or_default())
      .with_dietary(self.is_vegetarian, self.is_vegan, self.is_gluten_free);
    item.image_url = self.image_url;
    Ok(item)
  }
}
