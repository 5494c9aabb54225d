// menu_cart/src/checkout.rs

//! Checkout handoff: the point where the diner leaves this system to finish
//! the order on a delivery platform or by phone.
//!
//! A handoff is navigation only. The cart's contents are not sent anywhere and
//! the cart is left as it was.

use crate::cart::engine::Cart;
use crate::error::{CartError, CartResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckoutChannel {
  Deliveroo,
  UberEats,
  /// Call the restaurant for pickup.
  Phone,
}

impl CheckoutChannel {
  pub const ALL: [CheckoutChannel; 3] = [CheckoutChannel::Deliveroo, CheckoutChannel::UberEats, CheckoutChannel::Phone];

  pub fn as_str(self) -> &'static str {
    match self {
      CheckoutChannel::Deliveroo => "deliveroo",
      CheckoutChannel::UberEats => "uber_eats",
      CheckoutChannel::Phone => "phone",
    }
  }

  pub fn label(self) -> &'static str {
    match self {
      CheckoutChannel::Deliveroo => "Order on Deliveroo",
      CheckoutChannel::UberEats => "Order on Uber Eats",
      CheckoutChannel::Phone => "Call for Pickup",
    }
  }
}

impl fmt::Display for CheckoutChannel {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

impl FromStr for CheckoutChannel {
  type Err = CartError;

  fn from_str(s: &str) -> CartResult<Self> {
    match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
      "deliveroo" => Ok(CheckoutChannel::Deliveroo),
      "uber_eats" | "ubereats" => Ok(CheckoutChannel::UberEats),
      "phone" | "pickup" => Ok(CheckoutChannel::Phone),
      _ => Err(CartError::UnknownChannel(s.to_string())),
    }
  }
}

/// Where each channel sends the diner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandoffTargets {
  pub deliveroo_url: String,
  pub uber_eats_url: String,
  /// Human-readable number, e.g. `+353 87 973 8186`.
  pub pickup_phone: String,
}

/// The navigation target for one checkout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Handoff {
  pub channel: CheckoutChannel,
  pub label: &'static str,
  /// An `https://` URL to open in a new context, or a `tel:` URI.
  pub target: String,
}

impl HandoffTargets {
  pub fn target(&self, channel: CheckoutChannel) -> Handoff {
    let target = match channel {
      CheckoutChannel::Deliveroo => self.deliveroo_url.clone(),
      CheckoutChannel::UberEats => self.uber_eats_url.clone(),
      CheckoutChannel::Phone => tel_uri(&self.pickup_phone),
    };
    Handoff {
      channel,
      label: channel.label(),
      target,
    }
  }

  pub fn all(&self) -> Vec<Handoff> {
    CheckoutChannel::ALL.iter().map(|c| self.target(*c)).collect()
  }

  /// The handoff for a checkout of `cart`. There is nothing to order from an
  /// empty cart, so that is refused.
  pub fn handoff(&self, channel: CheckoutChannel, cart: &Cart) -> CartResult<Handoff> {
    if cart.is_empty() {
      return Err(CartError::EmptyCart);
    }
    let handoff = self.target(channel);
    tracing::info!(
      channel = %channel,
      items = cart.count(),
      total = %cart.total(),
      "Handing checkout off to external channel."
    );
    Ok(handoff)
  }
}

fn tel_uri(phone: &str) -> String {
  let digits: String = phone.chars().filter(|c| c.is_ascii_digit() || *c == '+').collect();
  format!("tel:{}", digits)
}
