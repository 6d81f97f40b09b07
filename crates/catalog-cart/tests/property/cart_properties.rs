//! Property tests for cart aggregation.

use std::collections::HashSet;

use proptest::prelude::*;

use catalog_cart::{add_to_cart, cart_count, decrement, increment, remove};
use catalog_core::models::{CartLine, Product, ProductId};
use test_fixtures::product;

#[derive(Debug, Clone)]
enum Op {
    Add(u64),
    Increment(u64),
    Decrement(u64),
    Remove(u64),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        (1u64..6).prop_map(Op::Add),
        (1u64..6).prop_map(Op::Increment),
        (1u64..6).prop_map(Op::Decrement),
        (1u64..6).prop_map(Op::Remove),
    ]
}

fn catalog_product(id: u64) -> Product {
    product(id, &format!("Item {id}")).price(id as i64).build()
}

fn apply(lines: &[CartLine], op: &Op) -> Vec<CartLine> {
    match *op {
        Op::Add(id) => add_to_cart(lines, &catalog_product(id)),
        Op::Increment(id) => increment(lines, ProductId(id)),
        Op::Decrement(id) => decrement(lines, ProductId(id)),
        Op::Remove(id) => remove(lines, ProductId(id)),
    }
}

proptest! {
    #[test]
    fn prop_one_line_per_id_and_quantity_at_least_one(ops in prop::collection::vec(op_strategy(), 0..60)) {
        let mut lines: Vec<CartLine> = Vec::new();
        for op in &ops {
            lines = apply(&lines, op);
            let ids: HashSet<ProductId> = lines.iter().map(|l| l.product_id).collect();
            prop_assert_eq!(ids.len(), lines.len());
            prop_assert!(lines.iter().all(|l| l.quantity >= 1));
        }
    }
}

proptest! {
    #[test]
    fn prop_n_adds_make_quantity_n(n in 1u32..40) {
        let p = catalog_product(1);
        let mut lines = Vec::new();
        for _ in 0..n {
            lines = add_to_cart(&lines, &p);
        }
        prop_assert_eq!(lines.len(), 1);
        prop_assert_eq!(lines[0].quantity, n);
        prop_assert_eq!(cart_count(&lines), u64::from(n));
    }
}

proptest! {
    #[test]
    fn prop_decrement_never_drops_a_line(n in 1u32..10, extra in 0u32..10) {
        let p = catalog_product(2);
        let mut lines = Vec::new();
        for _ in 0..n {
            lines = add_to_cart(&lines, &p);
        }
        for _ in 0..(n + extra) {
            lines = decrement(&lines, p.id);
        }
        prop_assert_eq!(lines.len(), 1);
        prop_assert_eq!(lines[0].quantity, 1);
    }
}
