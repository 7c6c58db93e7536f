//! Sample data for a fresh store.

use common::UserId;

use crate::catalog::Product;
use crate::error::DomainError;
use crate::money::Money;
use crate::store::Store;

/// Login of the sample user.
pub const SAMPLE_LOGIN: &str = "user1";

/// Password of the sample user.
pub const SAMPLE_PASSWORD: &str = "password1";

/// The three sample products, in catalog order.
pub fn sample_products() -> Result<Vec<Product>, DomainError> {
    Ok(vec![
        Product::new(
            "Laptop",
            Money::from_units(1500),
            "High-performance laptop",
            "Electronics",
            4.8,
        )?,
        Product::new(
            "Phone",
            Money::from_units(800),
            "Modern smartphone",
            "Electronics",
            4.6,
        )?,
        Product::new(
            "Book",
            Money::from_units(20),
            "Bestseller of the year",
            "Books",
            4.9,
        )?,
    ])
}

/// Fills `store` with the sample products and registers the sample user.
///
/// Returns the id of the sample user.
pub fn seed_store(store: &mut Store) -> Result<UserId, DomainError> {
    for product in sample_products()? {
        store.add_product(product);
    }
    store.register_user(SAMPLE_LOGIN, SAMPLE_PASSWORD)
}
