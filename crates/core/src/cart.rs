//! Cart line items and the ordered cart container.
//!
//! A [`Cart`] is an ordered sequence of [`CartItem`] with unique product
//! IDs, in insertion order. Uniqueness is maintained by find-or-append
//! logic in the mutation helpers rather than by a set type, so iteration
//! order is always the order items were first added.
//!
//! Mutations are pure: each helper returns the next cart (or `None` when
//! the target item is absent) and never touches `self`. The store layer
//! validates against live stock, persists the next cart, and only then
//! publishes it.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::catalog::ProductRecord;
use crate::types::ProductId;

/// A single cart line: one product and the quantity requested.
///
/// Product attributes (`name`, `price`, `image`) are denormalized copies
/// taken from the catalog when the item was first added.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    pub id: ProductId,
    pub name: String,
    pub price: Decimal,
    pub image: String,
    /// Requested quantity (>= 1).
    pub amount: i64,
}

impl CartItem {
    /// Build a cart line from a catalog product record.
    #[must_use]
    pub fn from_product(product: ProductRecord, amount: i64) -> Self {
        Self {
            id: product.id,
            name: product.name,
            price: product.price,
            image: product.image,
            amount,
        }
    }

    /// Line total: unit price times quantity.
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.price * Decimal::from(self.amount)
    }
}

/// Ordered list of cart line items with unique product IDs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    /// Create an empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Build a cart from previously persisted items.
    ///
    /// Items are taken as-is: callers are expected to pass a snapshot that
    /// was produced by this type, so IDs are already unique.
    #[must_use]
    pub fn from_items(items: Vec<CartItem>) -> Self {
        Self { items }
    }

    /// The line items, in insertion order.
    #[must_use]
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Consume the cart, yielding its line items.
    #[must_use]
    pub fn into_items(self) -> Vec<CartItem> {
        self.items
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Find the line item for a product, if present.
    #[must_use]
    pub fn find(&self, id: ProductId) -> Option<&CartItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Quantity currently in the cart for a product (0 if absent).
    #[must_use]
    pub fn quantity_of(&self, id: ProductId) -> i64 {
        self.find(id).map_or(0, |item| item.amount)
    }

    /// Total units across all line items.
    #[must_use]
    pub fn total_quantity(&self) -> i64 {
        self.items.iter().map(|item| item.amount).sum()
    }

    /// Sum of all line totals.
    #[must_use]
    pub fn subtotal(&self) -> Decimal {
        self.items.iter().map(CartItem::line_total).sum()
    }

    /// Next cart with the product's quantity set to exactly `amount`.
    ///
    /// Returns `None` if the product is not in the cart. All other lines
    /// are untouched and keep their relative order.
    #[must_use]
    pub fn with_quantity(&self, id: ProductId, amount: i64) -> Option<Self> {
        self.find(id)?;
        let items = self
            .items
            .iter()
            .map(|item| {
                if item.id == id {
                    CartItem {
                        amount,
                        ..item.clone()
                    }
                } else {
                    item.clone()
                }
            })
            .collect();
        Some(Self { items })
    }

    /// Next cart with `item` appended at the end.
    ///
    /// Callers must check for an existing line first (via [`Self::find`] or
    /// [`Self::with_quantity`]); appending a duplicate ID would break the
    /// uniqueness invariant.
    #[must_use]
    pub fn with_appended(&self, item: CartItem) -> Self {
        debug_assert!(self.find(item.id).is_none(), "duplicate cart line");
        let mut items = self.items.clone();
        items.push(item);
        Self { items }
    }

    /// Next cart with the product's line removed.
    ///
    /// Returns `None` if the product is not in the cart. Remaining items
    /// keep their relative order.
    #[must_use]
    pub fn without(&self, id: ProductId) -> Option<Self> {
        self.find(id)?;
        let items = self
            .items
            .iter()
            .filter(|item| item.id != id)
            .cloned()
            .collect();
        Some(Self { items })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: i32, amount: i64) -> CartItem {
        CartItem {
            id: ProductId::new(id),
            name: format!("Sneaker {id}"),
            price: Decimal::new(9990, 2),
            image: format!("https://cdn.example.com/{id}.jpg"),
            amount,
        }
    }

    fn cart(lines: &[(i32, i64)]) -> Cart {
        Cart::from_items(lines.iter().map(|&(id, amount)| item(id, amount)).collect())
    }

    #[test]
    fn quantity_of_absent_product_is_zero() {
        let cart = cart(&[(1, 2)]);
        assert_eq!(cart.quantity_of(ProductId::new(1)), 2);
        assert_eq!(cart.quantity_of(ProductId::new(9)), 0);
    }

    #[test]
    fn with_quantity_sets_exactly_and_leaves_others_untouched() {
        let cart = cart(&[(1, 2), (2, 1), (3, 4)]);
        let next = cart
            .with_quantity(ProductId::new(2), 7)
            .expect("product 2 is present");

        assert_eq!(next.quantity_of(ProductId::new(2)), 7);
        assert_eq!(next.quantity_of(ProductId::new(1)), 2);
        assert_eq!(next.quantity_of(ProductId::new(3)), 4);
        // Order preserved
        let ids: Vec<i32> = next.items().iter().map(|i| i.id.as_i32()).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn with_quantity_on_absent_product_is_none() {
        let cart = cart(&[(1, 1)]);
        assert!(cart.with_quantity(ProductId::new(2), 1).is_none());
    }

    #[test]
    fn with_appended_preserves_insertion_order() {
        let cart = cart(&[(1, 1)]).with_appended(item(5, 1)).with_appended(item(3, 1));
        let ids: Vec<i32> = cart.items().iter().map(|i| i.id.as_i32()).collect();
        assert_eq!(ids, vec![1, 5, 3]);
    }

    #[test]
    fn without_removes_only_the_target_line() {
        let cart = cart(&[(1, 1), (2, 2), (3, 3)]);
        let next = cart.without(ProductId::new(2)).expect("product 2 is present");

        let ids: Vec<i32> = next.items().iter().map(|i| i.id.as_i32()).collect();
        assert_eq!(ids, vec![1, 3]);
        assert_eq!(next.quantity_of(ProductId::new(3)), 3);
    }

    #[test]
    fn without_on_absent_product_is_none() {
        let cart = cart(&[(1, 1)]);
        assert!(cart.without(ProductId::new(2)).is_none());
        // Original untouched either way
        assert_eq!(cart.len(), 1);
    }

    #[test]
    fn totals_sum_over_lines() {
        let cart = cart(&[(1, 2), (2, 3)]);
        assert_eq!(cart.total_quantity(), 5);
        // 5 units at $99.90
        assert_eq!(cart.subtotal(), Decimal::new(49950, 2));
    }

    #[test]
    fn from_product_copies_denormalized_fields() {
        let product = ProductRecord {
            id: ProductId::new(4),
            name: "Court Classic".to_string(),
            price: Decimal::new(12500, 2),
            image: "https://cdn.example.com/court-classic.jpg".to_string(),
        };
        let line = CartItem::from_product(product.clone(), 1);
        assert_eq!(line.id, product.id);
        assert_eq!(line.name, product.name);
        assert_eq!(line.price, product.price);
        assert_eq!(line.image, product.image);
        assert_eq!(line.amount, 1);
    }

    #[test]
    fn serde_roundtrip_preserves_ids_amounts_and_order() {
        let cart = cart(&[(3, 1), (1, 4), (2, 2)]);
        let json = serde_json::to_string(&cart).expect("cart serializes");
        let restored: Cart = serde_json::from_str(&json).expect("cart deserializes");
        assert_eq!(restored, cart);
    }
}
