//! Cart aggregation: merging by id, the quantity floor, and totals.

use catalog_cart::{add_to_cart, cart_count, cart_total, decrement, increment, remove, CartSummary};
use catalog_core::models::{CartLine, ProductId};
use rust_decimal::Decimal;
use test_fixtures::{product, shoes};

fn quantities(lines: &[CartLine]) -> Vec<(u64, u32)> {
    lines.iter().map(|l| (l.product_id.0, l.quantity)).collect()
}

// ═══════════════════════════════════════════════════════════════════════════
// Aggregation
// ═══════════════════════════════════════════════════════════════════════════

/// [] add(7) ⇒ [{7,1}]; add ⇒ [{7,2}]; decrement ⇒ [{7,1}]; decrement ⇒ [{7,1}].
#[test]
fn add_add_decrement_decrement() {
    let p = product(7, "Kite").price(10).build();
    let lines = add_to_cart(&[], &p);
    assert_eq!(quantities(&lines), vec![(7, 1)]);
    let lines = add_to_cart(&lines, &p);
    assert_eq!(quantities(&lines), vec![(7, 2)]);
    let lines = decrement(&lines, ProductId(7));
    assert_eq!(quantities(&lines), vec![(7, 1)]);
    let lines = decrement(&lines, ProductId(7));
    assert_eq!(quantities(&lines), vec![(7, 1)]);
}

#[test]
fn distinct_products_get_distinct_lines_in_add_order() {
    let [red, blue] = <[_; 2]>::try_from(shoes()).unwrap();
    let lines = add_to_cart(&add_to_cart(&add_to_cart(&[], &blue), &red), &blue);
    assert_eq!(quantities(&lines), vec![(2, 2), (1, 1)]);
}

/// Snapshot fields are copied at add time and do not follow later edits.
#[test]
fn lines_snapshot_name_and_price() {
    let mut p = product(3, "Lamp").price(25).build();
    let lines = add_to_cart(&[], &p);
    p.name = "Desk Lamp".to_string();
    p.price = Decimal::from(99);
    let lines = add_to_cart(&lines, &p);
    assert_eq!(lines[0].name, "Lamp");
    assert_eq!(lines[0].price, Decimal::from(25));
    assert_eq!(lines[0].quantity, 2);
}

#[test]
fn operations_do_not_mutate_input() {
    let p = product(1, "Ball").build();
    let original = add_to_cart(&[], &p);
    let snapshot = original.clone();
    let _ = add_to_cart(&original, &p);
    let _ = increment(&original, p.id);
    let _ = remove(&original, p.id);
    assert_eq!(original, snapshot);
}

// ═══════════════════════════════════════════════════════════════════════════
// Increment / decrement / remove
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn unknown_ids_are_noops() {
    let lines = add_to_cart(&[], &product(1, "Ball").build());
    assert_eq!(increment(&lines, ProductId(9)), lines);
    assert_eq!(decrement(&lines, ProductId(9)), lines);
    assert_eq!(remove(&lines, ProductId(9)), lines);
}

#[test]
fn remove_ignores_quantity_and_readd_starts_fresh() {
    let p = product(4, "Bat").build();
    let lines = increment(&increment(&add_to_cart(&[], &p), p.id), p.id);
    assert_eq!(lines[0].quantity, 3);
    let lines = remove(&lines, p.id);
    assert!(lines.is_empty());
    let lines = add_to_cart(&lines, &p);
    assert_eq!(quantities(&lines), vec![(4, 1)]);
}

// ═══════════════════════════════════════════════════════════════════════════
// Totals
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn totals_are_exact() {
    let a = product(1, "a").price_decimal(Decimal::new(1999, 2)).build();
    let b = product(2, "b").price_decimal(Decimal::new(10, 2)).build();
    let lines = add_to_cart(&add_to_cart(&add_to_cart(&[], &a), &a), &b);
    assert_eq!(cart_total(&lines), Decimal::new(4008, 2));
    assert_eq!(cart_count(&lines), 3);

    let summary = CartSummary::of(&lines);
    assert_eq!(summary.line_count, 2);
    assert_eq!(summary.item_count, 3);
    assert_eq!(summary.total, Decimal::new(4008, 2));
}

#[test]
fn empty_cart_totals() {
    assert_eq!(cart_total(&[]), Decimal::ZERO);
    assert_eq!(cart_count(&[]), 0);
    assert!(CartSummary::of(&[]).is_empty());
}
