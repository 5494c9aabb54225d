// src/lib.rs

//! menu_cart: the ordering core of a restaurant site.
//!
//! The crate owns everything that has state or derived values:
//!  - A typed menu catalog (`MenuItem`, `MenuCategory`, `Menu`) and the
//!    `CatalogSource` capability, with a static fallback menu and a strategy
//!    for choosing between a remote source and the fallback.
//!  - The `Cart` engine: an ordered, id-deduplicated list of line items with
//!    integer-cent subtotal, VAT and total, plus synchronous change observers.
//!  - `CartHandle`, the shared handle a session passes to its views.
//!  - Checkout handoff targets (delivery platforms or a phone call).
//!  - A promo validation seam that never applies an unvalidated discount.
//!  - The persisted snapshot layout used to carry a cart across reloads.

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod error;
pub mod model;
pub mod promo;

// --- Re-exports for the Public API ---

pub use crate::cart::engine::{Cart, Outcome, Totals};
pub use crate::cart::handle::CartHandle;
pub use crate::cart::observer::{CartEvent, RemovalReason, SubscriptionId};
pub use crate::cart::snapshot::{CartSnapshot, RestoreReport, SnapshotEntry};

pub use crate::model::line_item::LineItem;
pub use crate::model::menu_item::{DietaryFilter, Menu, MenuCategory, MenuItem};
pub use crate::model::money::{Money, TaxRate};

pub use crate::catalog::fallback::StaticFallbackCatalog;
pub use crate::catalog::source::CatalogSource;
pub use crate::catalog::strategy::{CatalogStrategy, SelectingCatalog};

pub use crate::checkout::{CheckoutChannel, Handoff, HandoffTargets};
pub use crate::promo::{validate_promo, Discount, NoPromotions, PromoValidator, PromoVerdict};

pub use crate::error::{CartError, CartResult, CatalogError};
