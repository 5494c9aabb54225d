// restaurant_site/src/sessions.rs

use chrono::{DateTime, Duration, Utc};
use menu_cart::{Cart, CartEvent, CartHandle, TaxRate};
use parking_lot::Mutex;
use std::collections::HashMap;
use tracing::{event, Level};

struct SessionEntry {
  cart: CartHandle,
  last_seen: DateTime<Utc>,
}

/// Owns one cart per client session. A cart is created empty the first time
/// its session id is seen and lives until the session is ended or goes idle.
pub struct SessionCarts {
  tax_rate: TaxRate,
  carts: Mutex<HashMap<String, SessionEntry>>,
}

impl SessionCarts {
  pub fn new(tax_rate: TaxRate) -> Self {
    Self {
      tax_rate,
      carts: Mutex::new(HashMap::new()),
    }
  }

  /// The cart for `session_id`, created on first use.
  pub fn cart_for(&self, session_id: &str) -> CartHandle {
    self.cart_for_at(session_id, Utc::now())
  }

  fn cart_for_at(&self, session_id: &str, now: DateTime<Utc>) -> CartHandle {
    let mut carts = self.carts.lock();
    if let Some(entry) = carts.get_mut(session_id) {
      entry.last_seen = now;
      return entry.cart.clone();
    }

    let mut cart = Cart::new(self.tax_rate);
    let tag = session_id.to_string();
    cart.subscribe(move |cart_event: &CartEvent, cart: &Cart| {
      event!(Level::DEBUG, session_id = %tag, event = ?cart_event, count = cart.count(), "Session cart changed.");
    });
    let handle = CartHandle::new(cart);
    carts.insert(
      session_id.to_string(),
      SessionEntry {
        cart: handle.clone(),
        last_seen: now,
      },
    );
    event!(Level::INFO, %session_id, "Created cart for new session.");
    handle
  }

  /// Ends a session. Returns false when it was not known.
  pub fn remove(&self, session_id: &str) -> bool {
    self.carts.lock().remove(session_id).is_some()
  }

  /// Drops every session not seen for `idle`. Returns how many were dropped.
  pub fn evict_idle(&self, idle: Duration) -> usize {
    self.evict_idle_at(idle, Utc::now())
  }

  fn evict_idle_at(&self, idle: Duration, now: DateTime<Utc>) -> usize {
    let mut carts = self.carts.lock();
    let before = carts.len();
    carts.retain(|_, entry| now - entry.last_seen < idle);
    let evicted = before - carts.len();
    if evicted > 0 {
      event!(Level::INFO, evicted, remaining = carts.len(), "Evicted idle session carts.");
    }
    evicted
  }

  #[allow(clippy::len_without_is_empty)]
  pub fn len(&self) -> usize {
    self.carts.lock().len()
  }
}
