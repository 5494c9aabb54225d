// tests/common/mod.rs
#![allow(dead_code)] // Allow unused code in this common test module

use async_trait::async_trait;
use menu_cart::{
  validate_promo, Cart, CartResult, CatalogError, CatalogSource, Discount, Menu, MenuCategory, MenuItem, Money,
  PromoValidator, PromoVerdict, TaxRate, Totals,
};
use once_cell::sync::Lazy;
use std::sync::{
  atomic::{AtomicUsize, Ordering},
  Arc,
};
use tracing::Level;

// --- Common Fixtures ---
pub fn nine_percent() -> TaxRate {
  TaxRate::from_basis_points(900).unwrap()
}

/// €4.99
pub fn item_a() -> MenuItem {
  MenuItem::new("a", "Garlic Bread", Money::from_cents(499)).with_dietary(true, false, false)
}

/// €5.99
pub fn item_b() -> MenuItem {
  MenuItem::new("b", "House Salad", Money::from_cents(599)).with_dietary(true, true, true)
}

/// €12.00
pub fn item_c() -> MenuItem {
  MenuItem::new("c", "Fish Cakes", Money::from_euros(12))
}

pub fn test_menu() -> Menu {
  Menu::new(vec![
    MenuCategory {
      id: "mains".to_string(),
      name: "Mains".to_string(),
      description: String::new(),
      display_order: 2,
      items: vec![item_c()],
    },
    MenuCategory {
      id: "sides".to_string(),
      name: "Sides".to_string(),
      description: String::new(),
      display_order: 1,
      items: vec![item_a(), item_b()],
    },
  ])
}

// --- Test catalog sources ---

/// How a `ScriptedCatalog` answers `load_menu`.
#[derive(Clone, Copy, Debug)]
pub enum Script {
  Serve,
  Empty,
  Fail,
}

pub struct ScriptedCatalog {
  pub script: Script,
  pub menu: Menu,
}

impl ScriptedCatalog {
  pub fn new(script: Script) -> Arc<dyn CatalogSource> {
    Arc::new(Self {
      script,
      menu: test_menu(),
    })
  }
}

#[async_trait]
impl CatalogSource for ScriptedCatalog {
  fn name(&self) -> &str {
    "scripted"
  }

  async fn load_menu(&self) -> Result<Menu, CatalogError> {
    REMOTE_LOAD_COUNTER.fetch_add(1, Ordering::SeqCst);
    match self.script {
      Script::Serve => Ok(self.menu.clone()),
      Script::Empty => Ok(Menu::default()),
      Script::Fail => Err(CatalogError::Unavailable {
        source_name: "scripted".to_string(),
        source: anyhow::anyhow!("connection refused"),
      }),
    }
  }

  async fn find_item(&self, id: &str) -> Result<Option<MenuItem>, CatalogError> {
    REMOTE_FIND_COUNTER.fetch_add(1, Ordering::SeqCst);
    match self.script {
      Script::Serve => Ok(self.menu.find_item(id).cloned()),
      Script::Empty => Ok(None),
      Script::Fail => Err(CatalogError::Unavailable {
        source_name: "scripted".to_string(),
        source: anyhow::anyhow!("connection refused"),
      }),
    }
  }
}

// --- Test promo validator ---

/// Accepts `TEST` (€1.00 off) and `HUGE` (€1000 off). `BROKEN` fails like an
/// unreachable backend, `MENU_DOWN` like a backend whose catalog lookup failed.
pub struct FixedPromos;

#[async_trait]
impl PromoValidator for FixedPromos {
  async fn validate(&self, code: &str, _totals: &Totals) -> CartResult<PromoVerdict> {
    match code {
      "TEST" => Ok(PromoVerdict::Accepted {
        amount: Money::from_cents(100),
      }),
      "HUGE" => Ok(PromoVerdict::Accepted {
        amount: Money::from_euros(1_000),
      }),
      "BROKEN" => {
        let reply: Result<PromoVerdict, anyhow::Error> = Err(anyhow::anyhow!("promo backend timed out"));
        Ok(reply?)
      }
      "MENU_DOWN" => {
        let reply: Result<PromoVerdict, anyhow::Error> = Err(
          CatalogError::Unavailable {
            source_name: "promo-menu".to_string(),
            source: anyhow::anyhow!("connection refused"),
          }
          .into(),
        );
        Ok(reply?)
      }
      _ => Ok(PromoVerdict::Rejected {
        reason: "unknown code".to_string(),
      }),
    }
  }
}

/// A discount for `code` validated against the cart as it is now.
pub async fn grant(cart: &Cart, code: &str) -> Discount {
  validate_promo(&FixedPromos, code, &cart.totals()).await.unwrap()
}

// --- Helper for Tracing Setup (call once per test run if needed) ---
static TRACING_INIT: Lazy<()> = Lazy::new(|| {
  tracing_subscriber::fmt()
    .with_max_level(Level::DEBUG)
    .with_test_writer() // Important for tests to capture output
    .try_init()
    .ok(); // Allow multiple initializations in tests (ok if fails)
});

pub fn setup_tracing() {
  Lazy::force(&TRACING_INIT);
}

// --- Atomic counters for checking execution counts ---
pub static REMOTE_LOAD_COUNTER: Lazy<Arc<AtomicUsize>> = Lazy::new(|| Arc::new(AtomicUsize::new(0)));

pub static REMOTE_FIND_COUNTER: Lazy<Arc<AtomicUsize>> = Lazy::new(|| Arc::new(AtomicUsize::new(0)));

pub fn reset_counters() {
  REMOTE_LOAD_COUNTER.store(0, Ordering::SeqCst);
  REMOTE_FIND_COUNTER.store(0, Ordering::SeqCst);
}
