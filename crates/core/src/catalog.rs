//! Records served by the stock-and-product catalog.
//!
//! The catalog is remote-authoritative: stock levels are never cached by
//! the cart, and product attributes are copied into cart items at
//! insertion time and never refreshed afterwards.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::ProductId;

/// Available stock for a product, as reported by the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockLevel {
    pub id: ProductId,
    /// Units available for purchase (>= 0).
    pub amount: i64,
}

/// Base product data from the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductRecord {
    pub id: ProductId,
    pub name: String,
    pub price: Decimal,
    pub image: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stock_level_parses_catalog_payload() {
        let stock: StockLevel = serde_json::from_str(r#"{"id": 5, "amount": 3}"#)
            .expect("stock payload should parse");
        assert_eq!(stock.id, ProductId::new(5));
        assert_eq!(stock.amount, 3);
    }

    #[test]
    fn product_record_parses_catalog_payload() {
        let json = r#"{
            "id": 5,
            "name": "Trail Runner Low",
            "price": 139.9,
            "image": "https://cdn.example.com/trail-runner-low.jpg"
        }"#;
        let product: ProductRecord =
            serde_json::from_str(json).expect("product payload should parse");
        assert_eq!(product.id, ProductId::new(5));
        assert_eq!(product.name, "Trail Runner Low");
        assert_eq!(product.price, Decimal::new(1399, 1));
        assert_eq!(product.image, "https://cdn.example.com/trail-runner-low.jpg");
    }
}
