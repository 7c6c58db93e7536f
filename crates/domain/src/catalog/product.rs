//! Product entity.

use serde::Serialize;

use crate::error::DomainError;
use crate::money::Money;

/// Highest rating a product can carry.
pub const MAX_RATING: f64 = 5.0;

/// A product offered by the store.
///
/// Products are validated on construction and immutable afterwards. The
/// catalog hands them out as `Arc<Product>` so order lines share the same
/// instance instead of copying it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Product {
    name: String,
    price: Money,
    description: String,
    category: String,
    rating: f64,
}

impl Product {
    /// Creates a new product.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidArgument`] when the name is blank, the
    /// price is negative, or the rating is outside `0.0..=5.0` (NaN included).
    pub fn new(
        name: impl Into<String>,
        price: Money,
        description: impl Into<String>,
        category: impl Into<String>,
        rating: f64,
    ) -> Result<Self, DomainError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::invalid("name", "must not be empty"));
        }

        if price.is_negative() {
            return Err(DomainError::invalid(
                "price",
                format!("{price} must not be negative"),
            ));
        }

        if !(0.0..=MAX_RATING).contains(&rating) {
            return Err(DomainError::invalid(
                "rating",
                format!("{rating} must be between 0.0 and {MAX_RATING:.1}"),
            ));
        }

        Ok(Self {
            name,
            price,
            description: description.into(),
            category: category.into(),
            rating,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> Money {
        self.price
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn rating(&self) -> f64 {
        self.rating
    }

    /// Returns true if the product belongs to `category`, ignoring case.
    pub fn in_category(&self, category: &str) -> bool {
        eq_ignore_case(&self.category, category)
    }

    /// Returns true if the product is called `name`, ignoring case.
    pub fn is_named(&self, name: &str) -> bool {
        eq_ignore_case(&self.name, name)
    }
}

// Full Unicode lowercasing; category names are not limited to ASCII.
fn eq_ignore_case(a: &str, b: &str) -> bool {
    a == b || a.to_lowercase() == b.to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn laptop() -> Product {
        Product::new(
            "Laptop",
            Money::from_units(1500),
            "High-performance laptop",
            "Electronics",
            4.8,
        )
        .unwrap()
    }

    #[test]
    fn test_new_product_keeps_fields() {
        let product = laptop();
        assert_eq!(product.name(), "Laptop");
        assert_eq!(product.price(), Money::from_units(1500));
        assert_eq!(product.description(), "High-performance laptop");
        assert_eq!(product.category(), "Electronics");
        assert_eq!(product.rating(), 4.8);
    }

    #[test]
    fn test_blank_name_is_rejected() {
        let result = Product::new("  ", Money::zero(), "", "Misc", 1.0);
        assert!(matches!(
            result,
            Err(DomainError::InvalidArgument { field: "name", .. })
        ));
    }

    #[test]
    fn test_negative_price_is_rejected() {
        let result = Product::new("Thing", Money::from_cents(-1), "", "Misc", 1.0);
        assert!(matches!(
            result,
            Err(DomainError::InvalidArgument { field: "price", .. })
        ));
    }

    #[test]
    fn test_rating_bounds() {
        assert!(Product::new("A", Money::zero(), "", "Misc", 0.0).is_ok());
        assert!(Product::new("B", Money::zero(), "", "Misc", 5.0).is_ok());
        for rating in [-0.1, 5.1, f64::NAN, f64::INFINITY] {
            let result = Product::new("C", Money::zero(), "", "Misc", rating);
            assert!(matches!(
                result,
                Err(DomainError::InvalidArgument { field: "rating", .. })
            ));
        }
    }

    #[test]
    fn test_category_and_name_match_ignore_case() {
        let product = laptop();
        assert!(product.in_category("electronics"));
        assert!(product.in_category("ELECTRONICS"));
        assert!(!product.in_category("Books"));
        assert!(product.is_named("laptop"));
        assert!(!product.is_named("lap"));
    }

    #[test]
    fn test_non_ascii_category_matches_ignore_case() {
        let product =
            Product::new("Книга", Money::from_units(20), "", "Книги", 4.9).unwrap();
        assert!(product.in_category("книги"));
        assert!(product.is_named("КНИГА"));
    }

    #[test]
    fn test_product_serializes_price_in_cents() {
        let json = serde_json::to_value(laptop()).unwrap();
        assert_eq!(json["name"], "Laptop");
        assert_eq!(json["price"], 150000);
        assert_eq!(json["category"], "Electronics");
    }
}
