// menu_cart/src/model/menu_item.rs

//! Read-only catalog data: dishes, the categories they are listed under, and
//! the menu as a whole.

use crate::model::money::Money;
use serde::{Deserialize, Serialize};

/// A single orderable dish. Loaded once per catalog fetch, immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
  /// Unique within a catalog.
  pub id: String,
  pub name: String,
  pub description: String,
  #[serde(rename = "price_cents")]
  pub price: Money,
  #[serde(default)]
  pub image_url: Option<String>,
  #[serde(default)]
  pub is_vegetarian: bool,
  #[serde(default)]
  pub is_vegan: bool,
  #[serde(default)]
  pub is_gluten_free: bool,
}

impl MenuItem {
  pub fn new(id: impl Into<String>, name: impl Into<String>, price: Money) -> Self {
    Self {
      id: id.into(),
      name: name.into(),
      description: String::new(),
      price,
      image_url: None,
      is_vegetarian: false,
      is_vegan: false,
      is_gluten_free: false,
    }
  }

  pub fn with_description(mut self, description: impl Into<String>) -> Self {
    self.description = description.into();
    self
  }

  pub fn with_image(mut self, image_url: impl Into<String>) -> Self {
    self.image_url = Some(image_url.into());
    self
  }

  /// Sets the three dietary flags in one go: vegetarian, vegan, gluten-free.
  pub fn with_dietary(mut self, vegetarian: bool, vegan: bool, gluten_free: bool) -> Self {
    self.is_vegetarian = vegetarian;
    self.is_vegan = vegan;
    self.is_gluten_free = gluten_free;
    self
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuCategory {
  pub id: String,
  pub name: String,
  #[serde(default)]
  pub description: String,
  #[serde(default)]
  pub display_order: i32,
  #[serde(default)]
  pub items: Vec<MenuItem>,
}

/// Dietary requirements a diner can filter the menu by. Every requested flag
/// must be set on an item for it to match; an empty filter matches everything.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct DietaryFilter {
  #[serde(default)]
  pub vegetarian: bool,
  #[serde(default)]
  pub vegan: bool,
  #[serde(default)]
  pub gluten_free: bool,
}

impl DietaryFilter {
  pub fn is_empty(&self) -> bool {
    !self.vegetarian && !self.vegan && !self.gluten_free
  }

  pub fn matches(&self, item: &MenuItem) -> bool {
    (!self.vegetarian || item.is_vegetarian) && (!self.vegan || item.is_vegan) && (!self.gluten_free || item.is_gluten_free)
  }
}

/// The full catalog, categories in display order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Menu {
  pub categories: Vec<MenuCategory>,
}

impl Menu {
  /// Builds a menu, ordering categories by `display_order` (stable for ties).
  pub fn new(mut categories: Vec<MenuCategory>) -> Self {
    categories.sort_by_key(|c| c.display_order);
    Self { categories }
  }

  pub fn item_count(&self) -> usize {
    self.categories.iter().map(|c| c.items.len()).sum()
  }

  /// A menu with nothing orderable on it.
  pub fn is_empty(&self) -> bool {
    self.item_count() == 0
  }

  pub fn items(&self) -> impl Iterator<Item = &MenuItem> {
    self.categories.iter().flat_map(|c| c.items.iter())
  }

  pub fn find_item(&self, id: &str) -> Option<&MenuItem> {
    self.items().find(|item| item.id == id)
  }

  /// Keeps only the items matching `filter`; categories left empty are dropped.
  pub fn filtered(&self, filter: &DietaryFilter) -> Menu {
    if filter.is_empty() {
      return self.clone();
    }
    let categories = self
      .categories
      .iter()
      .filter_map(|category| {
        let items: Vec<MenuItem> = category.items.iter().filter(|i| filter.matches(i)).cloned().collect();
        if items.is_empty() {
          None
        } else {
          Some(MenuCategory {
            items,
            ..category.clone()
          })
        }
      })
      .collect();
    Menu { categories }
  }
}
