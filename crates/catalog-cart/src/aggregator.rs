use catalog_core::models::{CartLine, Product, ProductId};
use rust_decimal::Decimal;
use tracing::trace;

/// Add one unit of `product`. An existing line for the same id is bumped;
/// otherwise a new line snapshots the product's name and price.
pub fn add_to_cart(lines: &[CartLine], product: &Product) -> Vec<CartLine> {
    let mut out = lines.to_vec();
    match out.iter_mut().find(|l| l.product_id == product.id) {
        Some(line) => {
            line.quantity = line.quantity.saturating_add(1);
            trace!(id = %product.id, quantity = line.quantity, "cart line incremented");
        }
        None => {
            out.push(CartLine::from_product(product));
            trace!(id = %product.id, "cart line added");
        }
    }
    out
}

/// Quantity + 1. Unknown id ⇒ unchanged.
pub fn increment(lines: &[CartLine], id: ProductId) -> Vec<CartLine> {
    map_line(lines, id, |q| q.saturating_add(1))
}

/// Quantity - 1, never below 1. A single-unit line is kept, not removed.
pub fn decrement(lines: &[CartLine], id: ProductId) -> Vec<CartLine> {
    map_line(lines, id, |q| q.saturating_sub(1).max(1))
}

/// Drop the line for `id` whatever its quantity.
pub fn remove(lines: &[CartLine], id: ProductId) -> Vec<CartLine> {
    lines.iter().filter(|l| l.product_id != id).cloned().collect()
}

/// Sum of `price * quantity`.
pub fn cart_total(lines: &[CartLine]) -> Decimal {
    lines.iter().map(CartLine::line_total).sum()
}

/// Sum of quantities (the cart badge).
pub fn cart_count(lines: &[CartLine]) -> u64 {
    lines.iter().map(|l| u64::from(l.quantity)).sum()
}

fn map_line(lines: &[CartLine], id: ProductId, f: impl Fn(u32) -> u32) -> Vec<CartLine> {
    lines
        .iter()
        .map(|l| {
            if l.product_id == id {
                CartLine {
                    quantity: f(l.quantity),
                    ..l.clone()
                }
            } else {
                l.clone()
            }
        })
        .collect()
}
