//! Cart state and its mutations.
//!
//! [`CartState`] is the single source of truth for the user's selected
//! items. It is owned exclusively by the storefront's cart store; views
//! read lines and derived aggregates but never touch the sequence
//! directly. The aggregates (`item_count`, `total`) are computed fresh
//! from the line sequence on every read, so they cannot drift from the
//! lines the way incrementally maintained counters can.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::{Product, ProductId};

/// One product-plus-quantity entry in the cart.
///
/// Identity is the product id: the cart never holds two lines for the
/// same product. The product is denormalized into the line so the cart
/// renders without re-fetching the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    #[serde(flatten)]
    pub product: Product,
    /// Always at least 1; a decrement to zero removes the line instead.
    pub quantity: u32,
}

impl CartLine {
    /// Price of this line: unit price times quantity.
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.product.price * Decimal::from(self.quantity)
    }
}

/// Ordered sequence of cart lines, in insertion order.
///
/// Mutated only through [`add`](Self::add),
/// [`update_quantity`](Self::update_quantity),
/// [`remove`](Self::remove), and [`clear`](Self::clear).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CartState {
    lines: Vec<CartLine>,
}

impl CartState {
    /// Create an empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self { lines: Vec::new() }
    }

    /// Add one unit of a product.
    ///
    /// If a line for the product already exists its quantity increments
    /// by 1; otherwise a new line with quantity 1 is appended. Always
    /// succeeds.
    pub fn add(&mut self, product: Product) {
        if let Some(line) = self.lines.iter_mut().find(|l| l.product.id == product.id) {
            line.quantity = line.quantity.saturating_add(1);
        } else {
            self.lines.push(CartLine {
                product,
                quantity: 1,
            });
        }
    }

    /// Set a line's quantity.
    ///
    /// A quantity of zero or less removes the line, same as
    /// [`remove`](Self::remove). Unknown product ids are a no-op.
    pub fn update_quantity(&mut self, product_id: ProductId, new_quantity: i64) {
        if new_quantity <= 0 {
            self.remove(product_id);
            return;
        }
        let quantity = u32::try_from(new_quantity).unwrap_or(u32::MAX);
        if let Some(line) = self.lines.iter_mut().find(|l| l.product.id == product_id) {
            line.quantity = quantity;
        }
    }

    /// Remove the line for a product, if present.
    pub fn remove(&mut self, product_id: ProductId) {
        self.lines.retain(|l| l.product.id != product_id);
    }

    /// Empty the line sequence.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// The lines in insertion order.
    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Sum of quantities over all lines.
    #[must_use]
    pub fn item_count(&self) -> u64 {
        self.lines.iter().map(|l| u64::from(l.quantity)).sum()
    }

    /// Sum of `price * quantity` over all lines.
    #[must_use]
    pub fn total(&self) -> Decimal {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    /// True when no lines are present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use rust_decimal::dec;

    use super::*;
    use crate::types::Rating;

    fn product(id: i32, price: Decimal) -> Product {
        Product {
            id: ProductId::new(id),
            title: format!("Product {id}"),
            price,
            description: String::new(),
            category: "electronics".into(),
            image: format!("https://example.com/{id}.jpg"),
            rating: Rating {
                rate: dec!(4.5),
                count: 10,
            },
        }
    }

    #[test]
    fn test_add_new_product_appends_line() {
        let mut cart = CartState::new();
        cart.add(product(1, dec!(10.00)));
        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.item_count(), 1);
    }

    #[test]
    fn test_repeated_add_keeps_one_line() {
        let mut cart = CartState::new();
        for _ in 0..5 {
            cart.add(product(1, dec!(10.00)));
        }
        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.lines()[0].quantity, 5);
        assert_eq!(cart.item_count(), 5);
    }

    #[test]
    fn test_insertion_order_preserved() {
        let mut cart = CartState::new();
        cart.add(product(3, dec!(1.00)));
        cart.add(product(1, dec!(2.00)));
        cart.add(product(2, dec!(3.00)));
        let ids: Vec<i32> = cart.lines().iter().map(|l| l.product.id.as_i32()).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[test]
    fn test_update_quantity_sets_value() {
        let mut cart = CartState::new();
        cart.add(product(1, dec!(10.00)));
        cart.update_quantity(ProductId::new(1), 7);
        assert_eq!(cart.lines()[0].quantity, 7);
        assert_eq!(cart.item_count(), 7);
    }

    #[test]
    fn test_update_quantity_zero_removes_line() {
        let mut cart = CartState::new();
        cart.add(product(1, dec!(10.00)));
        cart.update_quantity(ProductId::new(1), 0);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_update_quantity_negative_removes_line() {
        let mut cart = CartState::new();
        cart.add(product(1, dec!(10.00)));
        cart.update_quantity(ProductId::new(1), -5);
        assert!(cart.is_empty());
        assert!(cart.lines().iter().all(|l| l.quantity >= 1));
    }

    #[test]
    fn test_update_quantity_unknown_id_is_noop() {
        let mut cart = CartState::new();
        cart.add(product(1, dec!(10.00)));
        cart.update_quantity(ProductId::new(99), 3);
        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.lines()[0].quantity, 1);
    }

    #[test]
    fn test_remove_deletes_only_that_line() {
        let mut cart = CartState::new();
        cart.add(product(1, dec!(10.00)));
        cart.add(product(2, dec!(20.00)));
        cart.remove(ProductId::new(1));
        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.lines()[0].product.id, ProductId::new(2));
    }

    #[test]
    fn test_remove_unknown_id_is_noop() {
        let mut cart = CartState::new();
        cart.add(product(1, dec!(10.00)));
        cart.remove(ProductId::new(99));
        assert_eq!(cart.lines().len(), 1);
    }

    #[test]
    fn test_clear_empties_everything() {
        let mut cart = CartState::new();
        cart.add(product(1, dec!(10.00)));
        cart.add(product(2, dec!(20.00)));
        cart.clear();
        assert!(cart.is_empty());
        assert_eq!(cart.item_count(), 0);
        assert_eq!(cart.total(), Decimal::ZERO);
    }

    #[test]
    fn test_total_is_sum_of_line_totals() {
        let mut cart = CartState::new();
        cart.add(product(1, dec!(10.00)));
        cart.add(product(1, dec!(10.00)));
        cart.add(product(2, dec!(25.00)));
        assert_eq!(cart.total(), dec!(45.00));
    }

    #[test]
    fn test_total_tracks_every_mutation() {
        let mut cart = CartState::new();
        cart.add(product(1, dec!(3.50)));
        assert_eq!(cart.total(), dec!(3.50));
        cart.update_quantity(ProductId::new(1), 4);
        assert_eq!(cart.total(), dec!(14.00));
        cart.remove(ProductId::new(1));
        assert_eq!(cart.total(), Decimal::ZERO);
    }

    #[test]
    fn test_serde_roundtrip_preserves_lines() {
        let mut cart = CartState::new();
        cart.add(product(1, dec!(109.95)));
        cart.add(product(1, dec!(109.95)));
        let json = serde_json::to_string(&cart).unwrap();
        let back: CartState = serde_json::from_str(&json).unwrap();
        assert_eq!(back, cart);
        assert_eq!(back.item_count(), 2);
        assert_eq!(back.total(), dec!(219.90));
    }

    #[test]
    fn test_line_serializes_flattened() {
        let mut cart = CartState::new();
        cart.add(product(7, dec!(5.00)));
        let value = serde_json::to_value(&cart).unwrap();
        assert_eq!(value["lines"][0]["id"], 7);
        assert_eq!(value["lines"][0]["quantity"], 1);
    }
}
