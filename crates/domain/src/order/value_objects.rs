//! Value objects for the order domain.

use std::sync::Arc;

use crate::catalog::Product;
use crate::money::Money;

/// A line in an order: a catalog product and how many of it.
///
/// The product is shared with the catalog, not copied.
#[derive(Debug, Clone, PartialEq)]
pub struct LineItem {
    product: Arc<Product>,
    quantity: u32,
}

impl LineItem {
    pub(crate) fn new(product: Arc<Product>, quantity: u32) -> Self {
        Self { product, quantity }
    }

    pub fn product(&self) -> &Arc<Product> {
        &self.product
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Returns the total price for this line (quantity * unit price).
    pub fn total_price(&self) -> Money {
        self.product.price().multiply(self.quantity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_item_total_price() {
        let product = Product::new("Widget", Money::from_cents(1000), "", "Misc", 3.0).unwrap();
        let item = LineItem::new(Arc::new(product), 3);
        assert_eq!(item.total_price().cents(), 3000);
        assert_eq!(item.quantity(), 3);
        assert_eq!(item.product().name(), "Widget");
    }
}
