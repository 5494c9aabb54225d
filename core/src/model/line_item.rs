// menu_cart/src/model/line_item.rs

use crate::model::menu_item::MenuItem;
use crate::model::money::Money;
use serde::{Deserialize, Serialize};

/// One distinct dish in the cart: a copy of the menu item's display fields,
/// how many of it, and the diner's note for the kitchen.
///
/// Two line items are equal when their ids are equal; quantity and note do
/// not take part in identity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineItem {
  #[serde(flatten)]
  pub item: MenuItem,
  /// Always >= 1. The cart removes a line instead of storing zero.
  pub quantity: u32,
  #[serde(default)]
  pub special_instructions: String,
}

impl LineItem {
  pub(crate) fn new(item: &MenuItem) -> Self {
    Self {
      item: item.clone(),
      quantity: 1,
      special_instructions: String::new(),
    }
  }

  pub fn id(&self) -> &str {
    &self.item.id
  }

  pub fn unit_price(&self) -> Money {
    self.item.price
  }

  pub fn line_total(&self) -> Money {
    self.item.price.times(self.quantity)
  }
}

impl PartialEq for LineItem {
  fn eq(&self, other: &Self) -> bool {
    self.item.id == other.item.id
  }
}

impl Eq for LineItem {}
