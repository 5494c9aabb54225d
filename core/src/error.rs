// menu_cart/src/error.rs
use anyhow::Error as AnyhowError;
use thiserror::Error;

/// Failures of a catalog source. These never touch cart state; the caller
/// decides whether to fall back or surface a retry message.
#[derive(Debug, Error)]
pub enum CatalogError {
  #[error("Catalog source '{source_name}' is unavailable. Source: {source}")]
  Unavailable {
    source_name: String,
    #[source]
    source: AnyhowError,
  },

  #[error("Catalog source '{source_name}' returned malformed data: {message}")]
  Malformed { source_name: String, message: String },

  #[error("Catalog is not configured: {0}")]
  NotConfigured(String),
}

#[derive(Debug, Error)]
pub enum CartError {
  #[error("Invalid price '{input}': {reason}")]
  InvalidPrice { input: String, reason: String },

  #[error("Invalid tax rate '{input}': {reason}")]
  InvalidTaxRate { input: String, reason: String },

  #[error("Unknown checkout channel: {0}")]
  UnknownChannel(String),

  #[error("Unknown catalog strategy: {0}")]
  UnknownStrategy(String),

  #[error("Cannot hand off an empty cart")]
  EmptyCart,

  #[error("Promo code '{code}' was not accepted: {reason}")]
  PromoRejected { code: String, reason: String },

  #[error("Promo code '{code}' was validated against a cart that has since changed")]
  PromoStale { code: String },

  #[error(transparent)]
  Catalog(#[from] CatalogError),

  #[error("Error in an external collaborator. Source: {source}")]
  External {
    #[source]
    source: AnyhowError,
  },
}

// Validators and catalog adapters are free to use anyhow internally.
impl From<AnyhowError> for CartError {
  fn from(err: AnyhowError) -> Self {
    match err.downcast::<CatalogError>() {
      Ok(catalog_err) => CartError::Catalog(catalog_err),
      Err(err) => CartError::External { source: err },
    }
  }
}

pub type CartResult<T, E = CartError> = std::result::Result<T, E>;
