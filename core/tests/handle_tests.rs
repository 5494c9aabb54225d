// tests/handle_tests.rs
mod common;

use common::*;
use menu_cart::CartHandle;
use std::thread;

#[test]
fn test_handle_clone_shares_cart() {
  setup_tracing();
  let handle = CartHandle::empty(nine_percent());
  let view = handle.clone();

  handle.update(|cart| cart.add_item(&item_a()));
  assert_eq!(view.with(|cart| cart.count()), 1);

  {
    view.write().set_special_instructions("a", "well done");
  }
  assert_eq!(handle.read().get("a").unwrap().special_instructions, "well done");
  assert!(handle.same_cart(&view));
  assert!(!handle.same_cart(&CartHandle::empty(nine_percent())));
}

#[test]
fn test_concurrent_adds_keep_one_line_per_id() {
  setup_tracing();
  let handle = CartHandle::empty(nine_percent());

  let workers: Vec<_> = (0..8)
    .map(|_| {
      let h = handle.clone();
      thread::spawn(move || {
        for _ in 0..50 {
          h.update(|cart| cart.add_item(&item_a()));
          h.update(|cart| cart.add_item(&item_b()));
        }
      })
    })
    .collect();
  for w in workers {
    w.join().unwrap();
  }

  let cart = handle.read();
  assert_eq!(cart.items().len(), 2);
  assert_eq!(cart.get("a").unwrap().quantity, 400);
  assert_eq!(cart.get("b").unwrap().quantity, 400);
  assert_eq!(cart.count(), 800);
}

#[test]
fn test_map_read_narrows_guard() {
  let handle = CartHandle::empty(nine_percent());
  handle.update(|cart| {
    cart.add_item(&item_a());
    cart.add_item(&item_c());
  });
  let items = handle.map_read(|cart| cart.items());
  assert_eq!(items.len(), 2);
  assert!(handle.try_write().is_none());
  drop(items);
  assert!(handle.try_write().is_some());

  let writer = handle.write();
  assert!(handle.try_read().is_none());
  drop(writer);
  assert_eq!(handle.try_read().map(|cart| cart.count()), Some(2));
}

#[tokio::test]
async fn test_handle_locks_with_await() {
  setup_tracing();
  let handle = CartHandle::empty(nine_percent());

  let view_logic = async {
    let count = {
      // Scope for read lock
      handle.read().count()
    }; // Read lock dropped

    tokio::time::sleep(std::time::Duration::from_millis(1)).await;

    {
      let mut cart = handle.write();
      cart.add_item(&item_a());
      cart.set_quantity("a", count as i64 + 3);
    }
  };

  view_logic.await;
  assert_eq!(handle.read().count(), 3);
}
