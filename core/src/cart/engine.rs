// menu_cart/src/cart/engine.rs

//! The `Cart` engine: an ordered, id-deduplicated list of line items and the
//! totals derived from it.
//!
//! Every mutation runs to completion before observers hear about it, and no
//! total is ever stored: count, subtotal, VAT and total are recomputed from the
//! line items on each call.

use crate::cart::observer::{CartEvent, Observer, Observers, RemovalReason, SubscriptionId};
use crate::error::{CartError, CartResult};
use crate::model::line_item::LineItem;
use crate::model::menu_item::MenuItem;
use crate::model::money::{Money, TaxRate};
use crate::promo::Discount;
use serde::Serialize;
use tracing::{event, Level};

/// What a mutation did. References to ids that are not in the cart are not
/// errors: they simply leave the cart untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
  Applied,
  /// The id was present but the call would not change anything.
  Unchanged,
  NotFound,
}

/// Totals as presented to a diner. A point-in-time copy, recomputed by
/// `Cart::totals()` whenever it is asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Totals {
  pub count: u64,
  pub subtotal: Money,
  pub tax_rate: TaxRate,
  pub tax: Money,
  pub discount: Money,
  pub total: Money,
}

pub struct Cart {
  items: Vec<LineItem>,
  tax_rate: TaxRate,
  discount: Option<Discount>,
  observers: Observers,
}

impl Cart {
  /// An empty cart taxed at `tax_rate`. The rate comes from configuration;
  /// the engine has no built-in VAT.
  pub fn new(tax_rate: TaxRate) -> Self {
    Self {
      items: Vec::new(),
      tax_rate,
      discount: None,
      observers: Observers::default(),
    }
  }

  // --- Mutations ---

  /// Adds one of `item`. An id already in the cart gets its quantity bumped
  /// and keeps both its position and its special instructions.
  pub fn add_item(&mut self, item: &MenuItem) -> Outcome {
    let event = match self.position(&item.id) {
      Some(idx) => {
        let line = &mut self.items[idx];
        line.quantity = line.quantity.saturating_add(1);
        CartEvent::QuantityChanged {
          id: item.id.clone(),
          quantity: line.quantity,
        }
      }
      None => {
        self.items.push(LineItem::new(item));
        CartEvent::Added { id: item.id.clone() }
      }
    };
    self.emit(event);
    self.drop_stale_discount();
    Outcome::Applied
  }

  /// Removes the line for `id`. Removing an absent id is a no-op, so calling
  /// this twice has the same effect as calling it once.
  pub fn remove_item(&mut self, id: &str) -> Outcome {
    self.remove_with_reason(id, RemovalReason::Requested)
  }

  /// Sets the quantity to exactly `quantity`. Zero or less removes the line.
  pub fn set_quantity(&mut self, id: &str, quantity: i64) -> Outcome {
    if quantity <= 0 {
      return self.remove_with_reason(id, RemovalReason::QuantityNotPositive);
    }
    let Some(idx) = self.position(id) else {
      event!(Level::TRACE, %id, "set_quantity ignored, id not in cart.");
      return Outcome::NotFound;
    };
    let quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
    let line = &mut self.items[idx];
    if line.quantity == quantity {
      return Outcome::Unchanged;
    }
    line.quantity = quantity;
    self.emit(CartEvent::QuantityChanged {
      id: id.to_string(),
      quantity,
    });
    self.drop_stale_discount();
    Outcome::Applied
  }

  /// Replaces the note for `id`. Free text, no length limit.
  pub fn set_special_instructions(&mut self, id: &str, text: impl Into<String>) -> Outcome {
    let Some(idx) = self.position(id) else {
      event!(Level::TRACE, %id, "set_special_instructions ignored, id not in cart.");
      return Outcome::NotFound;
    };
    let text = text.into();
    let line = &mut self.items[idx];
    if line.special_instructions == text {
      return Outcome::Unchanged;
    }
    line.special_instructions = text;
    self.emit(CartEvent::InstructionsChanged { id: id.to_string() });
    Outcome::Applied
  }

  /// Empties the cart and drops any applied discount.
  pub fn clear(&mut self) -> Outcome {
    if self.items.is_empty() && self.discount.is_none() {
      return Outcome::Unchanged;
    }
    self.items.clear();
    self.discount = None;
    self.emit(CartEvent::Cleared);
    Outcome::Applied
  }

  /// Applies a discount from `promo::validate_promo`. Refused with
  /// `PromoStale` when the subtotal moved since the validator looked at it.
  pub fn apply_discount(&mut self, discount: Discount) -> CartResult<Outcome> {
    if discount.validated_subtotal() != self.subtotal() {
      return Err(CartError::PromoStale {
        code: discount.code().to_string(),
      });
    }
    if self.discount.as_ref() == Some(&discount) {
      return Ok(Outcome::Unchanged);
    }
    self.discount = Some(discount);
    self.emit(CartEvent::DiscountChanged);
    Ok(Outcome::Applied)
  }

  pub fn remove_discount(&mut self) -> Outcome {
    if self.discount.take().is_none() {
      return Outcome::Unchanged;
    }
    self.emit(CartEvent::DiscountChanged);
    Outcome::Applied
  }

  // --- Queries ---

  pub fn items(&self) -> &[LineItem] {
    &self.items
  }

  pub fn get(&self, id: &str) -> Option<&LineItem> {
    self.items.iter().find(|line| line.id() == id)
  }

  pub fn is_empty(&self) -> bool {
    self.items.is_empty()
  }

  pub fn tax_rate(&self) -> TaxRate {
    self.tax_rate
  }

  pub fn discount(&self) -> Option<&Discount> {
    self.discount.as_ref()
  }

  /// Sum of quantities across all lines.
  pub fn count(&self) -> u64 {
    self.items.iter().map(|line| u64::from(line.quantity)).sum()
  }

  /// Sum of unit price times quantity, exact to the cent.
  pub fn subtotal(&self) -> Money {
    self.items.iter().map(LineItem::line_total).sum()
  }

  /// VAT on the subtotal, rounded to the cent.
  pub fn tax_amount(&self) -> Money {
    self.tax_rate.apply(self.subtotal())
  }

  /// Subtotal plus VAT, minus an applied discount. Never below zero.
  pub fn total(&self) -> Money {
    let gross = self.subtotal() + self.tax_amount();
    match &self.discount {
      Some(discount) => (gross - discount.amount()).max(Money::ZERO),
      None => gross,
    }
  }

  pub fn totals(&self) -> Totals {
    let subtotal = self.subtotal();
    let tax = self.tax_rate.apply(subtotal);
    let discount = self.discount.as_ref().map_or(Money::ZERO, Discount::amount);
    Totals {
      count: self.count(),
      subtotal,
      tax_rate: self.tax_rate,
      tax,
      discount,
      total: (subtotal + tax - discount).max(Money::ZERO),
    }
  }

  // --- Observers ---

  pub fn subscribe(&mut self, observer: impl Fn(&CartEvent, &Cart) + Send + Sync + 'static) -> SubscriptionId {
    let boxed: Observer = Box::new(observer);
    self.observers.subscribe(boxed)
  }

  pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
    self.observers.unsubscribe(id)
  }

  // --- Internals shared with the snapshot module ---

  pub(crate) fn replace_items(&mut self, items: Vec<LineItem>) {
    self.items = items;
    self.discount = None;
    self.emit(CartEvent::Restored);
  }

  fn position(&self, id: &str) -> Option<usize> {
    self.items.iter().position(|line| line.id() == id)
  }

  fn remove_with_reason(&mut self, id: &str, reason: RemovalReason) -> Outcome {
    let Some(idx) = self.position(id) else {
      event!(Level::TRACE, %id, ?reason, "remove ignored, id not in cart.");
      return Outcome::NotFound;
    };
    self.items.remove(idx);
    self.emit(CartEvent::Removed {
      id: id.to_string(),
      reason,
    });
    self.drop_stale_discount();
    Outcome::Applied
  }

  // A discount is only good for the contents it was validated against.
  fn drop_stale_discount(&mut self) {
    let stale = match &self.discount {
      Some(discount) => self.items.is_empty() || discount.validated_subtotal() != self.subtotal(),
      None => false,
    };
    if stale {
      self.discount = None;
      event!(Level::INFO, "Cart contents changed, dropping the applied discount.");
      self.emit(CartEvent::DiscountChanged);
    }
  }

  fn emit(&self, cart_event: CartEvent) {
    event!(Level::DEBUG, event = ?cart_event, lines = self.items.len(), "Cart changed.");
    self.observers.notify(&cart_event, self);
  }
}

// Observers are boxed closures, so Debug is written by hand.
impl std::fmt::Debug for Cart {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("Cart")
      .field("items", &self.items)
      .field("tax_rate", &self.tax_rate)
      .field("discount", &self.discount)
      .field("observer_count", &self.observers.len())
      .finish()
  }
}
