use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use kiyho::{CartManager, Catalog, MemoryStore, Product, ProductId};
use std::sync::Arc;

// --- Benchmark Catalog ---
fn bench_catalog(size: u64) -> Arc<Catalog> {
  let products = (1..=size)
    .map(|n| Product {
      id: ProductId::Int(n),
      brand: format!("Brand {}", n % 7),
      name: format!("Bag {}", n),
      price: 100.0 + n as f64,
      description: String::new(),
      image: String::new(),
    })
    .collect();
  Arc::new(Catalog::new(products).expect("bench ids are unique"))
}

// --- Benchmark Functions ---

// Every mutation re-serializes the whole cart, so cost grows with the number of lines.
fn bench_add_items(c: &mut Criterion) {
  let mut group = c.benchmark_group("Cart Add Items");
  for &lines in [1u64, 10, 50].iter() {
    let catalog = bench_catalog(lines);
    group.throughput(Throughput::Elements(lines * 2));
    group.bench_with_input(BenchmarkId::from_parameter(lines), &lines, |b, &lines| {
      b.iter(|| {
        let mut cart = CartManager::new(MemoryStore::new(), catalog.clone());
        for n in 1..=lines {
          cart.add_item(&ProductId::Int(n));
          cart.add_item(&ProductId::Int(n));
        }
        cart.total_price()
      });
    });
  }
  group.finish();
}

fn bench_restore(c: &mut Criterion) {
  let mut group = c.benchmark_group("Cart Restore");
  for &lines in [10u64, 100].iter() {
    let catalog = bench_catalog(lines);
    let store = MemoryStore::new();
    let mut seed = CartManager::new(store.clone(), catalog.clone());
    for n in 1..=lines {
      seed.add_item(&ProductId::Int(n));
    }
    group.bench_with_input(BenchmarkId::from_parameter(lines), &lines, |b, _| {
      b.iter(|| CartManager::restored(store.clone(), catalog.clone()).total_item_count());
    });
  }
  group.finish();
}

criterion_group!(benches, bench_add_items, bench_restore);
criterion_main!(benches);
