//! Typed outcomes for cart operations.

use thiserror::Error;

use shoebox_core::ProductId;

use crate::catalog::CatalogError;
use crate::storage::StorageError;

/// Error returned by cart store operations.
///
/// Three categories surface to the user: stock exceeded (which also covers
/// non-positive requested quantities), item not in the cart, and any
/// catalog or storage failure. The boundary layer decides how to present
/// them; [`crate::store::CartStore`] additionally reports the storefront's
/// literal messages through its notifier.
#[derive(Debug, Error)]
pub enum CartError {
    /// The requested quantity exceeds available stock, or is not positive.
    #[error("requested {requested} of product {product_id}, {available} in stock")]
    OutOfStock {
        product_id: ProductId,
        requested: i64,
        available: i64,
    },

    /// The product is not in the cart.
    #[error("product {0} is not in the cart")]
    NotInCart(ProductId),

    /// Stock or product lookup failed.
    #[error("catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// Persisting the cart snapshot failed.
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),
}

impl CartError {
    /// Whether this is the stock-exceeded category (distinct user message).
    #[must_use]
    pub const fn is_out_of_stock(&self) -> bool {
        matches!(self, Self::OutOfStock { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_stock_display_names_the_product() {
        let err = CartError::OutOfStock {
            product_id: ProductId::new(5),
            requested: 4,
            available: 3,
        };
        assert_eq!(err.to_string(), "requested 4 of product 5, 3 in stock");
        assert!(err.is_out_of_stock());
    }

    #[test]
    fn not_in_cart_is_not_out_of_stock() {
        let err = CartError::NotInCart(ProductId::new(2));
        assert_eq!(err.to_string(), "product 2 is not in the cart");
        assert!(!err.is_out_of_stock());
    }
}
