// menu_cart/src/promo.rs

//! The promo code seam.
//!
//! A `PromoValidator` (typically one that asks a backend) answers with a
//! `PromoVerdict`. Only `validate_promo` turns an accepted verdict into a
//! `Discount`, and `Discount` has no public constructor, so a cart can never
//! carry a discount that no validator approved. The validator shipped with this
//! crate, `NoPromotions`, accepts nothing.

use crate::cart::engine::Totals;
use crate::error::{CartError, CartResult};
use crate::model::money::Money;
use async_trait::async_trait;
use serde::Serialize;
use tracing::{event, Level};

/// A discount a validator granted for a specific code, bound to the subtotal
/// it was granted against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Discount {
  code: String,
  amount: Money,
  #[serde(skip)]
  validated_subtotal: Money,
}

impl Discount {
  // Negative amounts are treated as zero.
  pub(crate) fn granted(code: impl Into<String>, amount: Money, validated_subtotal: Money) -> Self {
    Self {
      code: code.into(),
      amount: amount.max(Money::ZERO),
      validated_subtotal,
    }
  }

  pub fn code(&self) -> &str {
    &self.code
  }

  pub fn amount(&self) -> Money {
    self.amount
  }

  /// The cart subtotal the validator saw. The cart drops the discount as soon
  /// as its subtotal differs from this.
  pub fn validated_subtotal(&self) -> Money {
    self.validated_subtotal
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromoVerdict {
  Accepted { amount: Money },
  Rejected { reason: String },
}

#[async_trait]
pub trait PromoValidator: Send + Sync + 'static {
  /// Checks `code` against the cart's current totals. An `Err` means the
  /// validator itself could not answer (backend down, etc.), not a rejection.
  async fn validate(&self, code: &str, totals: &Totals) -> CartResult<PromoVerdict>;
}

/// Asks `validator` about `code` and, when it accepts, returns the `Discount`
/// to hand to `Cart::apply_discount`. A rejection is `CartError::PromoRejected`.
pub async fn validate_promo(validator: &dyn PromoValidator, code: &str, totals: &Totals) -> CartResult<Discount> {
  let code = code.trim();
  if code.is_empty() {
    return Err(CartError::PromoRejected {
      code: String::new(),
      reason: "promo code is empty".to_string(),
    });
  }
  match validator.validate(code, totals).await? {
    PromoVerdict::Accepted { amount } => {
      event!(Level::DEBUG, %code, %amount, subtotal = %totals.subtotal, "Promo code accepted.");
      Ok(Discount::granted(code, amount, totals.subtotal))
    }
    PromoVerdict::Rejected { reason } => Err(CartError::PromoRejected {
      code: code.to_string(),
      reason,
    }),
  }
}

/// Rejects every code. Used until a real promotions backend exists.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoPromotions;

#[async_trait]
impl PromoValidator for NoPromotions {
  async fn validate(&self, code: &str, _totals: &Totals) -> CartResult<PromoVerdict> {
    tracing::debug!(%code, "Promo code rejected, no promotions are configured.");
    Ok(PromoVerdict::Rejected {
      reason: "promo codes are not available".to_string(),
    })
  }
}
