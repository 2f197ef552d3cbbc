// tests/cart_properties.rs
mod common;

use common::*;
use kiyho::{CartManager, ProductId};
use proptest::prelude::*;
use std::collections::HashMap;

#[derive(Debug, Clone)]
enum Op {
  Add(u64),
  Update(u64, i64),
  Remove(u64),
}

fn op() -> impl Strategy<Value = Op> {
  // Id 4 is not in the fixture catalog.
  let ids = 1u64..=4;
  prop_oneof![
    3 => ids.clone().prop_map(Op::Add),
    2 => (ids.clone(), -3i64..=3).prop_map(|(id, d)| Op::Update(id, d)),
    1 => ids.prop_map(Op::Remove),
  ]
}

fn unit_price(n: u64) -> Option<f64> {
  match n {
    CLUTCH => Some(100.0),
    TOTE => Some(50.0),
    SATCHEL => Some(12.5),
    _ => None,
  }
}

proptest! {
  #[test]
  fn totals_match_lines_for_any_sequence(ops in prop::collection::vec(op(), 0..40)) {
    let (mut cart, store) = fresh_cart();
    // Quantities tracked independently of the cart.
    let mut model: HashMap<u64, u32> = HashMap::new();
    for op in &ops {
      match *op {
        Op::Add(n) => {
          cart.add_item(&id(n));
          if unit_price(n).is_some() {
            *model.entry(n).or_insert(0) += 1;
          }
        }
        Op::Update(n, d) => {
          cart.update_quantity(&id(n), d);
          if let Some(q) = model.get(&n).copied() {
            let next = i64::from(q) + d;
            if next <= 0 {
              model.remove(&n);
            } else {
              model.insert(n, next as u32);
            }
          }
        }
        Op::Remove(n) => {
          cart.remove_item(&id(n));
          model.remove(&n);
        }
      }
    }

    // Prices are exact in f64, so summation order does not matter.
    let expected_total: f64 = model.iter().map(|(n, q)| unit_price(*n).unwrap_or(0.0) * f64::from(*q)).sum();
    let expected_count: u64 = model.values().map(|q| u64::from(*q)).sum();
    prop_assert_eq!(cart.total_price(), expected_total);
    prop_assert_eq!(cart.total_item_count(), expected_count);
    prop_assert_eq!(cart.len(), model.len());
    for (n, q) in &model {
      prop_assert_eq!(cart.line(&id(*n)).map(|l| l.quantity), Some(*q));
    }

    // Invariants: no zero quantities, no repeated ids, unknown id never present.
    prop_assert!(cart.lines().iter().all(|l| l.quantity >= 1));
    let mut ids: Vec<ProductId> = cart.lines().iter().map(|l| l.id.clone()).collect();
    ids.sort();
    ids.dedup();
    prop_assert_eq!(ids.len(), cart.len());
    prop_assert!(!cart.contains(&id(4)));

    // Every state change was written through, so a fresh manager restores the same lines.
    let restored = CartManager::restored(store.clone(), fixture_catalog());
    prop_assert_eq!(restored.lines(), cart.lines());
  }
}
