// menu_cart/src/cart/observer.rs

//! Synchronous change notification for a `Cart`.
//!
//! Views that show cart state (count badge, totals panel, a session logger)
//! subscribe a callback. Callbacks run on the mutating thread, in subscription
//! order, after the mutation has fully applied, so anything they read from the
//! cart is already consistent with the event.

use crate::cart::engine::Cart;
use serde::Serialize;

/// What changed in the cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CartEvent {
  /// A new line was appended with quantity 1.
  Added { id: String },
  QuantityChanged { id: String, quantity: u32 },
  Removed { id: String, reason: RemovalReason },
  InstructionsChanged { id: String },
  Cleared,
  DiscountChanged,
  /// Contents were replaced from a persisted snapshot.
  Restored,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RemovalReason {
  Requested,
  /// `set_quantity` was called with zero or a negative number.
  QuantityNotPositive,
}

/// Callback type for cart observers. Receives the event and the cart as it is
/// after the change.
pub type Observer = Box<dyn Fn(&CartEvent, &Cart) + Send + Sync>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

#[derive(Default)]
pub(crate) struct Observers {
  next_id: u64,
  entries: Vec<(SubscriptionId, Observer)>,
}

impl Observers {
  pub(crate) fn subscribe(&mut self, observer: Observer) -> SubscriptionId {
    let id = SubscriptionId(self.next_id);
    self.next_id += 1;
    self.entries.push((id, observer));
    id
  }

  pub(crate) fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
    let before = self.entries.len();
    self.entries.retain(|(existing, _)| *existing != id);
    self.entries.len() != before
  }

  pub(crate) fn len(&self) -> usize {
    self.entries.len()
  }

  pub(crate) fn notify(&self, event: &CartEvent, cart: &Cart) {
    for (_, observer) in &self.entries {
      observer(event, cart);
    }
  }
}
