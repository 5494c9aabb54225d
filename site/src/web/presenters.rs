// restaurant_site/src/web/presenters.rs

//! JSON shapes the site renders. Amounts go out both as integer cents and as
//! the euro string a diner sees.

use menu_cart::{Cart, CheckoutChannel, Handoff, LineItem, Menu, MenuCategory, MenuItem, Money, RestoreReport};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct MoneyView {
  pub cents: i64,
  pub display: String,
}

impl From<Money> for MoneyView {
  fn from(money: Money) -> Self {
    Self {
      cents: money.cents(),
      display: money.to_string(),
    }
  }
}

#[derive(Debug, Serialize)]
pub struct MenuItemView {
  pub id: String,
  pub name: String,
  pub description: String,
  pub price: MoneyView,
  pub image_url: Option<String>,
  pub is_vegetarian: bool,
  pub is_vegan: bool,
  pub is_gluten_free: bool,
}

impl From<&MenuItem> for MenuItemView {
  fn from(item: &MenuItem) -> Self {
    Self {
      id: item.id.clone(),
      name: item.name.clone(),
      description: item.description.clone(),
      price: item.price.into(),
      image_url: item.image_url.clone(),
      is_vegetarian: item.is_vegetarian,
      is_vegan: item.is_vegan,
      is_gluten_free: item.is_gluten_free,
    }
  }
}

#[derive(Debug, Serialize)]
pub struct MenuCategoryView {
  pub id: String,
  pub name: String,
  pub description: String,
  pub items: Vec<MenuItemView>,
}

impl From<&MenuCategory> for MenuCategoryView {
  fn from(category: &MenuCategory) -> Self {
    Self {
      id: category.id.clone(),
      name: category.name.clone(),
      description: category.description.clone(),
      items: category.items.iter().map(MenuItemView::from).collect(),
    }
  }
}

#[derive(Debug, Serialize)]
pub struct MenuView {
  pub item_count: usize,
  pub categories: Vec<MenuCategoryView>,
}

impl From<&Menu> for MenuView {
  fn from(menu: &Menu) -> Self {
    Self {
      item_count: menu.item_count(),
      categories: menu.categories.iter().map(MenuCategoryView::from).collect(),
    }
  }
}

#[derive(Debug, Serialize)]
pub struct LineView {
  pub id: String,
  pub name: String,
  pub image_url: Option<String>,
  pub unit_price: MoneyView,
  pub quantity: u32,
  pub line_total: MoneyView,
  pub special_instructions: String,
}

impl From<&LineItem> for LineView {
  fn from(line: &LineItem) -> Self {
    Self {
      id: line.id().to_string(),
      name: line.item.name.clone(),
      image_url: line.item.image_url.clone(),
      unit_price: line.unit_price().into(),
      quantity: line.quantity,
      line_total: line.line_total().into(),
      special_instructions: line.special_instructions.clone(),
    }
  }
}

#[derive(Debug, Serialize)]
pub struct DiscountView {
  pub code: String,
  pub amount: MoneyView,
}

#[derive(Debug, Serialize)]
pub struct CartView {
  pub items: Vec<LineView>,
  pub count: u64,
  pub subtotal: MoneyView,
  /// e.g. `VAT (9%)`
  pub tax_label: String,
  pub tax: MoneyView,
  pub discount: Option<DiscountView>,
  pub total: MoneyView,
}

impl From<&Cart> for CartView {
  fn from(cart: &Cart) -> Self {
    let totals = cart.totals();
    Self {
      items: cart.items().iter().map(LineView::from).collect(),
      count: totals.count,
      subtotal: totals.subtotal.into(),
      tax_label: format!("VAT ({})", totals.tax_rate),
      tax: totals.tax.into(),
      discount: cart.discount().map(|d| DiscountView {
        code: d.code().to_string(),
        amount: d.amount().into(),
      }),
      total: totals.total.into(),
    }
  }
}

#[derive(Debug, Serialize)]
pub struct RestoreView {
  pub report: RestoreReport,
  pub cart: CartView,
}

#[derive(Debug, Serialize)]
pub struct HandoffView {
  pub channel: CheckoutChannel,
  pub label: &'static str,
  pub target: String,
  /// Web channels open in a new browsing context; the phone channel dials.
  pub opens_new_context: bool,
}

impl From<Handoff> for HandoffView {
  fn from(handoff: Handoff) -> Self {
    Self {
      opens_new_context: handoff.channel != CheckoutChannel::Phone,
      channel: handoff.channel,
      label: handoff.label,
      target: handoff.target,
    }
  }
}
