// tests/cart_engine_tests.rs
mod common;

use common::*;
use menu_cart::{Cart, CartError, MenuItem, Money, Outcome, TaxRate};

fn cart() -> Cart {
  setup_tracing();
  Cart::new(nine_percent())
}

fn distinct_items(n: usize) -> Vec<MenuItem> {
  (0..n)
    .map(|i| MenuItem::new(format!("dish-{}", i), format!("Dish {}", i), Money::from_cents(100 + i as i64)))
    .collect()
}

#[test]
fn test_adding_distinct_ids_creates_one_line_each() {
  for n in [0usize, 1, 2, 7, 25] {
    let mut cart = cart();
    for item in distinct_items(n) {
      assert_eq!(cart.add_item(&item), Outcome::Applied);
    }
    assert_eq!(cart.count(), n as u64);
    assert_eq!(cart.items().len(), n);
    assert!(cart.items().iter().all(|line| line.quantity == 1));
  }
}

#[test]
fn test_adding_same_id_n_times_yields_one_line_with_quantity_n() {
  for n in [1u32, 2, 5, 40] {
    let mut cart = cart();
    for _ in 0..n {
      cart.add_item(&item_a());
    }
    assert_eq!(cart.items().len(), 1);
    assert_eq!(cart.get("a").unwrap().quantity, n);
    assert_eq!(cart.count(), u64::from(n));
  }
}

#[test]
fn test_re_adding_keeps_position_and_instructions() {
  let mut cart = cart();
  cart.add_item(&item_a());
  cart.add_item(&item_b());
  cart.set_special_instructions("a", "extra crispy");
  cart.add_item(&item_a());

  let ids: Vec<&str> = cart.items().iter().map(|l| l.id()).collect();
  assert_eq!(ids, vec!["a", "b"]);
  let line = cart.get("a").unwrap();
  assert_eq!(line.quantity, 2);
  assert_eq!(line.special_instructions, "extra crispy");
}

#[test]
fn test_set_quantity_zero_removes_line_and_count_drops_by_prior_quantity() {
  let mut cart = cart();
  cart.add_item(&item_a());
  cart.add_item(&item_b());
  cart.set_quantity("b", 4);
  let before = cart.count();
  let prior = u64::from(cart.get("b").unwrap().quantity);

  assert_eq!(cart.set_quantity("b", 0), Outcome::Applied);
  assert!(cart.get("b").is_none());
  assert_eq!(cart.count(), before - prior);
}

#[test]
fn test_negative_quantity_is_removal_not_error() {
  let mut cart = cart();
  cart.add_item(&item_a());
  assert_eq!(cart.set_quantity("a", -3), Outcome::Applied);
  assert!(cart.is_empty());
}

#[test]
fn test_set_quantity_is_absolute_and_ignores_absent_ids() {
  let mut cart = cart();
  cart.add_item(&item_a());
  assert_eq!(cart.set_quantity("a", 6), Outcome::Applied);
  assert_eq!(cart.get("a").unwrap().quantity, 6);
  assert_eq!(cart.set_quantity("a", 6), Outcome::Unchanged);
  assert_eq!(cart.set_quantity("a", 2), Outcome::Applied);
  assert_eq!(cart.get("a").unwrap().quantity, 2);

  assert_eq!(cart.set_quantity("zzz", 3), Outcome::NotFound);
  assert_eq!(cart.set_quantity("zzz", 0), Outcome::NotFound);
  assert_eq!(cart.items().len(), 1);
}

#[test]
fn test_huge_quantity_saturates() {
  let mut cart = cart();
  cart.add_item(&item_a());
  cart.set_quantity("a", i64::MAX);
  assert_eq!(cart.get("a").unwrap().quantity, u32::MAX);
}

#[test]
fn test_remove_item_twice_is_same_as_once() {
  let mut once = cart();
  let mut twice = cart();
  for c in [&mut once, &mut twice] {
    c.add_item(&item_a());
    c.add_item(&item_b());
  }

  assert_eq!(once.remove_item("a"), Outcome::Applied);
  assert_eq!(twice.remove_item("a"), Outcome::Applied);
  assert_eq!(twice.remove_item("a"), Outcome::NotFound);

  assert_eq!(once.count(), twice.count());
  assert_eq!(once.subtotal(), twice.subtotal());
  assert_eq!(once.snapshot(), twice.snapshot());
}

#[test]
fn test_totals_identity_holds() {
  let mut cart = cart();
  let items = distinct_items(9);
  for (i, item) in items.iter().enumerate() {
    cart.add_item(item);
    cart.set_quantity(&item.id, (i as i64 % 4) + 1);

    assert_eq!(cart.total(), cart.subtotal() + cart.tax_amount());
    assert_eq!(cart.tax_amount(), nine_percent().apply(cart.subtotal()));
  }
}

#[test]
fn test_clear_resets_count_and_subtotal() {
  let mut cart = cart();
  assert_eq!(cart.clear(), Outcome::Unchanged);
  cart.add_item(&item_a());
  cart.add_item(&item_c());
  assert_eq!(cart.clear(), Outcome::Applied);
  assert_eq!(cart.count(), 0);
  assert_eq!(cart.subtotal(), Money::ZERO);
  assert_eq!(cart.subtotal().to_string(), "€0.00");
  assert_eq!(cart.total(), Money::ZERO);
}

#[test]
fn test_scenario_two_a_and_one_b() {
  let mut cart = cart();
  cart.add_item(&item_a());
  cart.add_item(&item_a());
  assert_eq!(cart.get("a").unwrap().quantity, 2);
  cart.add_item(&item_b());

  assert_eq!(cart.count(), 3);
  assert_eq!(cart.subtotal(), Money::from_cents(1597));
  assert_eq!(cart.tax_amount(), Money::from_cents(144));
  assert_eq!(cart.total(), Money::from_cents(1741));
  assert_eq!(cart.total().to_string(), "€17.41");
}

#[test]
fn test_scenario_instructions_survive_removing_absent_item() {
  let mut cart = cart();
  cart.add_item(&item_a());
  assert_eq!(cart.set_special_instructions("a", "no onions"), Outcome::Applied);
  assert_eq!(cart.remove_item("b"), Outcome::NotFound);
  assert_eq!(cart.get("a").unwrap().special_instructions, "no onions");
}

#[test]
fn test_scenario_clear_then_behaves_as_fresh_cart() {
  let mut cart = cart();
  for item in [item_a(), item_b(), item_c()] {
    cart.add_item(&item);
  }
  cart.clear();
  assert_eq!(cart.count(), 0);

  cart.add_item(&item_b());
  cart.add_item(&item_b());
  let mut fresh = Cart::new(nine_percent());
  fresh.add_item(&item_b());
  fresh.add_item(&item_b());
  assert_eq!(cart.snapshot(), fresh.snapshot());
  assert_eq!(cart.totals(), fresh.totals());
}

#[test]
fn test_instructions_are_unbounded_and_ignore_absent_ids() {
  let mut cart = cart();
  cart.add_item(&item_a());
  let long_note = "x".repeat(20_000);
  cart.set_special_instructions("a", long_note.clone());
  assert_eq!(cart.get("a").unwrap().special_instructions.len(), long_note.len());
  assert_eq!(cart.set_special_instructions("a", long_note), Outcome::Unchanged);
  assert_eq!(cart.set_special_instructions("nope", "hi"), Outcome::NotFound);
}

#[test]
fn test_tax_rate_is_taken_from_construction() {
  let mut untaxed = Cart::new(TaxRate::zero());
  untaxed.add_item(&item_c());
  assert_eq!(untaxed.tax_amount(), Money::ZERO);
  assert_eq!(untaxed.total(), Money::from_euros(12));

  let mut reduced = Cart::new("13.5".parse().unwrap());
  reduced.add_item(&item_c());
  // 12.00 * 0.135 = 1.62
  assert_eq!(reduced.tax_amount(), Money::from_cents(162));
}

#[tokio::test]
async fn test_discount_only_applies_when_granted_and_clamps_at_zero() {
  let mut cart = cart();
  cart.add_item(&item_a());
  assert_eq!(cart.totals().discount, Money::ZERO);
  assert_eq!(cart.total(), cart.subtotal() + cart.tax_amount());

  let test = grant(&cart, "TEST").await;
  assert_eq!(cart.apply_discount(test.clone()).unwrap(), Outcome::Applied);
  assert_eq!(cart.apply_discount(test).unwrap(), Outcome::Unchanged);
  // 4.99 + 0.45 - 1.00
  assert_eq!(cart.total(), Money::from_cents(444));
  assert_eq!(cart.totals().total, cart.total());

  let huge = grant(&cart, "HUGE").await;
  cart.apply_discount(huge).unwrap();
  assert_eq!(cart.total(), Money::ZERO);

  assert_eq!(cart.remove_discount(), Outcome::Applied);
  assert_eq!(cart.remove_discount(), Outcome::Unchanged);
  assert_eq!(cart.total(), cart.subtotal() + cart.tax_amount());

  let test = grant(&cart, "TEST").await;
  cart.apply_discount(test).unwrap();
  cart.clear();
  assert!(cart.discount().is_none());
}

#[tokio::test]
async fn test_discount_dropped_when_cart_emptied_line_by_line() {
  let mut cart = cart();
  cart.add_item(&item_c());
  let discount = grant(&cart, "TEST").await;
  cart.apply_discount(discount).unwrap();

  assert_eq!(cart.remove_item("c"), Outcome::Applied);
  assert!(cart.discount().is_none());
  assert_eq!(cart.totals().discount, Money::ZERO);

  // Nothing carries over to what is added next.
  cart.add_item(&item_a());
  assert!(cart.discount().is_none());
  assert_eq!(cart.total(), Money::from_cents(544));
}

#[tokio::test]
async fn test_discount_dropped_when_contents_change() {
  let mut cart = cart();
  cart.add_item(&item_a());
  cart.add_item(&item_b());

  let discount = grant(&cart, "TEST").await;
  cart.apply_discount(discount).unwrap();
  cart.set_quantity("b", 0);
  assert!(cart.discount().is_none());

  let discount = grant(&cart, "TEST").await;
  cart.apply_discount(discount).unwrap();
  cart.add_item(&item_a());
  assert!(cart.discount().is_none());

  // Notes do not move the subtotal, so the discount stays.
  let discount = grant(&cart, "TEST").await;
  cart.apply_discount(discount).unwrap();
  cart.set_special_instructions("a", "well done");
  assert!(cart.discount().is_some());
}

#[tokio::test]
async fn test_discount_validated_against_other_contents_is_refused() {
  let mut cart = cart();
  cart.add_item(&item_c());
  let discount = grant(&cart, "TEST").await;

  // The cart changes while the validator is being asked.
  cart.clear();
  let err = cart.apply_discount(discount).unwrap_err();
  assert!(matches!(err, CartError::PromoStale { ref code } if code == "TEST"));
  assert!(cart.discount().is_none());
}

#[test]
fn test_line_items_compare_by_id() {
  let mut cart = cart();
  cart.add_item(&item_a());
  let first = cart.get("a").unwrap().clone();
  cart.set_quantity("a", 9);
  cart.set_special_instructions("a", "changed");
  assert_eq!(&first, cart.get("a").unwrap());
}
