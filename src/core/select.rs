use crate::core::Product;

/// Returns the highest-priced product, or `None` for an empty slice.
///
/// A later product replaces the current best only on a strictly greater
/// price, so when several products share the maximum the first one seen
/// wins.
pub fn most_expensive(products: &[Product]) -> Option<&Product> {
    let mut best = products.first()?;
    for product in &products[1..] {
        if product.price > best.price {
            best = product;
        }
    }
    Some(best)
}
