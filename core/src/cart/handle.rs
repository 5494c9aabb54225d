// menu_cart/src/cart/handle.rs
use crate::cart::engine::Cart;
use crate::model::money::TaxRate;
use parking_lot::{MappedRwLockReadGuard, RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::sync::Arc;

/// Shared ownership of one session's cart, passed explicitly to every view
/// that reads or mutates it.
///
/// Mutations go through the write lock, so two requests for the same session
/// are applied one after the other and the one-line-per-id invariant holds.
///
/// IMPORTANT: Lock guards obtained from this struct are blocking and MUST NOT
/// be held across `.await` suspension points in asynchronous code.
#[derive(Debug)]
pub struct CartHandle(Arc<RwLock<Cart>>);

impl CartHandle {
  pub fn new(cart: Cart) -> Self {
    CartHandle(Arc::new(RwLock::new(cart)))
  }

  pub fn empty(tax_rate: TaxRate) -> Self {
    Self::new(Cart::new(tax_rate))
  }

  /// Acquires a read lock. The returned guard MUST be dropped before any `.await` point.
  pub fn read(&self) -> RwLockReadGuard<'_, Cart> {
    self.0.read()
  }

  /// Acquires a write lock. The returned guard MUST be dropped before any `.await` point.
  pub fn write(&self) -> RwLockWriteGuard<'_, Cart> {
    self.0.write()
  }

  pub fn try_read(&self) -> Option<RwLockReadGuard<'_, Cart>> {
    self.0.try_read()
  }

  pub fn try_write(&self) -> Option<RwLockWriteGuard<'_, Cart>> {
    self.0.try_write()
  }

  // Guard to a single part of the cart, e.g. `handle.map_read(|c| c.items())`.
  pub fn map_read<F, U: ?Sized>(&self, f: F) -> MappedRwLockReadGuard<'_, U>
  where
    F: FnOnce(&Cart) -> &U,
  {
    RwLockReadGuard::map(self.read(), f)
  }

  /// Runs `f` under the read lock and returns its result.
  pub fn with<R>(&self, f: impl FnOnce(&Cart) -> R) -> R {
    f(&self.read())
  }

  /// Runs `f` under the write lock and returns its result.
  pub fn update<R>(&self, f: impl FnOnce(&mut Cart) -> R) -> R {
    f(&mut self.write())
  }

  /// True when both handles point at the same cart.
  pub fn same_cart(&self, other: &CartHandle) -> bool {
    Arc::ptr_eq(&self.0, &other.0)
  }
}

impl Clone for CartHandle {
  fn clone(&self) -> Self {
    CartHandle(Arc::clone(&self.0))
  }
}
