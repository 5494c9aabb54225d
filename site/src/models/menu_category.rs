// restaurant_site/src/models/menu_category.rs

use sqlx::FromRow;

#[derive(Debug, Clone, FromRow)]
pub struct MenuCategoryRow {
  pub id: String,
  pub name: String,
  pub description: Option<String>,
  pub display_order: i32,
}
