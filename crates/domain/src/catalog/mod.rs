//! Product catalog and search.

mod product;

use std::sync::Arc;

use tracing::debug;

use crate::money::Money;

pub use product::{MAX_RATING, Product};

/// Search capability over a set of products.
///
/// Every search is a linear scan that preserves insertion order. A search
/// never fails; no match yields an empty `Vec`.
pub trait Searchable {
    /// Products whose category equals `category`, ignoring case.
    fn search_by_category(&self, category: &str) -> Vec<Arc<Product>>;

    /// Products priced within `min..=max`. Empty when `min > max`.
    fn search_by_price_range(&self, min: Money, max: Money) -> Vec<Arc<Product>>;

    /// Products rated at least `min_rating`. A NaN threshold matches nothing.
    fn search_by_rating(&self, min_rating: f64) -> Vec<Arc<Product>>;
}

/// The set of all products known to the store, in insertion order.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: Vec<Arc<Product>>,
}

impl Catalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a product and returns the shared handle to it.
    ///
    /// Products are not deduplicated.
    pub fn add_product(&mut self, product: Product) -> Arc<Product> {
        let product = Arc::new(product);
        self.products.push(Arc::clone(&product));
        product
    }

    /// Returns all products in insertion order.
    pub fn list_all(&self) -> &[Arc<Product>] {
        &self.products
    }

    /// Returns the first product with the given name, ignoring case.
    pub fn find_by_name(&self, name: &str) -> Option<Arc<Product>> {
        self.products.iter().find(|p| p.is_named(name)).cloned()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    fn filter(&self, predicate: impl Fn(&Product) -> bool) -> Vec<Arc<Product>> {
        self.products
            .iter()
            .filter(|p| predicate(p))
            .cloned()
            .collect()
    }
}

impl Searchable for Catalog {
    fn search_by_category(&self, category: &str) -> Vec<Arc<Product>> {
        let found = self.filter(|p| p.in_category(category));
        debug!(category, matches = found.len(), "search by category");
        found
    }

    fn search_by_price_range(&self, min: Money, max: Money) -> Vec<Arc<Product>> {
        let found = self.filter(|p| min <= p.price() && p.price() <= max);
        debug!(%min, %max, matches = found.len(), "search by price range");
        found
    }

    fn search_by_rating(&self, min_rating: f64) -> Vec<Arc<Product>> {
        let found = self.filter(|p| p.rating() >= min_rating);
        debug!(min_rating, matches = found.len(), "search by rating");
        found
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(name: &str, units: i64, category: &str, rating: f64) -> Product {
        Product::new(name, Money::from_units(units), "", category, rating).unwrap()
    }

    fn names(products: &[Arc<Product>]) -> Vec<&str> {
        products.iter().map(|p| p.name()).collect()
    }

    fn sample() -> Catalog {
        let mut catalog = Catalog::new();
        catalog.add_product(product("Laptop", 1500, "Electronics", 4.8));
        catalog.add_product(product("Phone", 800, "Electronics", 4.6));
        catalog.add_product(product("Book", 20, "Books", 4.9));
        catalog
    }

    #[test]
    fn test_list_all_keeps_insertion_order() {
        let catalog = sample();
        assert_eq!(names(catalog.list_all()), ["Laptop", "Phone", "Book"]);
        assert_eq!(catalog.len(), 3);
        assert!(!catalog.is_empty());
    }

    #[test]
    fn test_add_product_does_not_deduplicate() {
        let mut catalog = sample();
        catalog.add_product(product("Book", 20, "Books", 4.9));
        assert_eq!(catalog.len(), 4);
        assert_eq!(catalog.search_by_category("books").len(), 2);
    }

    #[test]
    fn test_add_product_returns_shared_handle() {
        let mut catalog = Catalog::new();
        let handle = catalog.add_product(product("Pen", 2, "Office", 3.0));
        assert!(Arc::ptr_eq(&handle, &catalog.list_all()[0]));
    }

    #[test]
    fn test_search_by_category_ignores_case() {
        let catalog = sample();
        assert_eq!(
            names(&catalog.search_by_category("electronics")),
            ["Laptop", "Phone"]
        );
        assert!(catalog.search_by_category("Toys").is_empty());
    }

    #[test]
    fn test_search_by_price_range_is_inclusive() {
        let catalog = sample();
        assert_eq!(
            names(&catalog.search_by_price_range(Money::zero(), Money::from_units(100))),
            ["Book"]
        );
        assert_eq!(
            names(&catalog.search_by_price_range(Money::from_units(800), Money::from_units(1500))),
            ["Laptop", "Phone"]
        );
    }

    #[test]
    fn test_search_by_price_range_inverted_is_empty() {
        let catalog = sample();
        let found = catalog.search_by_price_range(Money::from_units(1000), Money::from_units(10));
        assert!(found.is_empty());
    }

    #[test]
    fn test_search_by_rating_includes_boundary() {
        let catalog = sample();
        assert_eq!(names(&catalog.search_by_rating(4.7)), ["Laptop", "Book"]);
        assert_eq!(names(&catalog.search_by_rating(4.6)), ["Laptop", "Phone", "Book"]);
        assert!(catalog.search_by_rating(f64::NAN).is_empty());
    }

    #[test]
    fn test_find_by_name() {
        let catalog = sample();
        let phone = catalog.find_by_name("PHONE").unwrap();
        assert_eq!(phone.price(), Money::from_units(800));
        assert!(catalog.find_by_name("Tablet").is_none());
    }
}
