use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use menu_cart::{Cart, CartHandle, MenuItem, Money, StaticFallbackCatalog, TaxRate};

// --- Common Benchmark Fixtures ---
fn dishes(n: usize) -> Vec<MenuItem> {
  (0..n)
    .map(|i| MenuItem::new(format!("dish-{}", i), format!("Dish {}", i), Money::from_cents(250 + (i as i64 % 40) * 25)))
    .collect()
}

fn vat() -> TaxRate {
  TaxRate::from_basis_points(900).unwrap()
}

// --- Benchmark Functions ---

fn bench_add_items(c: &mut Criterion) {
  let mut group = c.benchmark_group("CartAddItems");

  for num_lines in [10usize, 100, 1_000].iter() {
    let items = dishes(*num_lines);
    group.throughput(Throughput::Elements(*num_lines as u64));
    group.bench_with_input(BenchmarkId::from_parameter(num_lines), &items, |b, items| {
      b.iter(|| {
        let mut cart = Cart::new(vat());
        for item in items {
          cart.add_item(item);
        }
        // Second pass hits the increment path.
        for item in items {
          cart.add_item(item);
        }
        cart.count()
      })
    });
  }
  group.finish();
}

fn bench_totals(c: &mut Criterion) {
  let mut group = c.benchmark_group("CartTotals");

  for num_lines in [10usize, 100, 1_000].iter() {
    let mut cart = Cart::new(vat());
    for (i, item) in dishes(*num_lines).iter().enumerate() {
      cart.add_item(item);
      cart.set_quantity(&item.id, (i as i64 % 5) + 1);
    }
    group.bench_with_input(BenchmarkId::from_parameter(num_lines), &cart, |b, cart| b.iter(|| cart.totals()));
  }
  group.finish();
}

fn bench_observed_handle(c: &mut Criterion) {
  let menu = StaticFallbackCatalog::house_menu().menu().clone();
  let items: Vec<MenuItem> = menu.items().cloned().collect();

  c.bench_function("CartHandleWithObserver", |b| {
    b.iter(|| {
      let handle = CartHandle::empty(vat());
      handle.update(|cart| {
        cart.subscribe(|_, cart| {
          criterion::black_box(cart.total());
        })
      });
      for item in &items {
        handle.update(|cart| cart.add_item(item));
      }
      handle.with(|cart| cart.total())
    })
  });
}

criterion_group!(benches, bench_add_items, bench_totals, bench_observed_handle);
criterion_main!(benches);
