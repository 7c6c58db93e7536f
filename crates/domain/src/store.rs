//! The `Store` aggregate: catalog, users and the global order log.

use std::sync::Arc;

use chrono::Utc;
use common::UserId;
use tracing::{info, warn};

use crate::auth::{CredentialCheck, PlaintextCredentials, User, UserDirectory};
use crate::catalog::{Catalog, Product, Searchable};
use crate::error::DomainError;
use crate::money::Money;
use crate::order::Order;

/// The storefront aggregate.
///
/// Owns the product catalog, the registered users, and the log of every
/// placed order. A placed order is shared between its user's history and the
/// log, so both always hold the same entries.
#[derive(Debug)]
pub struct Store {
    catalog: Catalog,
    users: UserDirectory,
    orders: Vec<Arc<Order>>,
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

impl Store {
    /// Creates an empty store that keeps passwords in plaintext.
    pub fn new() -> Self {
        Self::with_credentials(PlaintextCredentials)
    }

    /// Creates an empty store that guards passwords with `credentials`.
    pub fn with_credentials(credentials: impl CredentialCheck + 'static) -> Self {
        Self {
            catalog: Catalog::new(),
            users: UserDirectory::new(credentials),
            orders: Vec::new(),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn users(&self) -> &UserDirectory {
        &self.users
    }

    /// Appends a product to the catalog and returns the shared handle.
    #[tracing::instrument(skip(self, product), fields(name = product.name()))]
    pub fn add_product(&mut self, product: Product) -> Arc<Product> {
        let product = self.catalog.add_product(product);
        metrics::counter!("store_products_added_total").increment(1);
        info!(size = self.catalog.len(), "Product added");
        product
    }

    /// Registers a new user.
    ///
    /// # Errors
    ///
    /// See [`UserDirectory::register`].
    #[tracing::instrument(skip(self, password))]
    pub fn register_user(&mut self, login: &str, password: &str) -> Result<UserId, DomainError> {
        let id = self.users.register(login, password)?;
        metrics::counter!("store_users_registered_total").increment(1);
        Ok(id)
    }

    /// Returns the user whose login and password both match exactly.
    #[tracing::instrument(skip(self, password))]
    pub fn authenticate(&self, login: &str, password: &str) -> Option<&User> {
        let user = self.users.authenticate(login, password);
        let outcome = if user.is_some() { "success" } else { "failure" };
        metrics::counter!("store_logins_total", "outcome" => outcome).increment(1);
        if user.is_none() {
            warn!("Authentication failed");
        }
        user
    }

    pub fn user(&self, id: UserId) -> Option<&User> {
        self.users.get(id)
    }

    /// Places `order` on behalf of `user_id`.
    ///
    /// The order is marked placed, stamped with the current time, and
    /// appended once to the user's history and once to the store log. Empty
    /// orders are accepted; skipping them is the caller's decision.
    ///
    /// # Errors
    ///
    /// [`DomainError::UserNotFound`] if no user has this id. The order is
    /// dropped unchanged in that case.
    #[tracing::instrument(skip(self, order), fields(order_id = %order.id()))]
    pub fn place_order(
        &mut self,
        user_id: UserId,
        mut order: Order,
    ) -> Result<Arc<Order>, DomainError> {
        if !self.users.contains(user_id) {
            warn!("Order rejected, unknown user");
            return Err(DomainError::UserNotFound(user_id));
        }

        order.mark_placed(Utc::now())?;
        let order = Arc::new(order);
        self.users.record_order(user_id, Arc::clone(&order))?;
        self.orders.push(Arc::clone(&order));

        metrics::counter!("store_orders_placed_total").increment(1);
        metrics::histogram!("store_order_total_cents").record(order.total().cents() as f64);
        info!(
            items = order.item_count(),
            total = %order.total(),
            log_size = self.orders.len(),
            "Order placed"
        );
        Ok(order)
    }

    /// Every placed order, oldest first.
    pub fn orders(&self) -> &[Arc<Order>] {
        &self.orders
    }

    /// Orders placed by `user_id`; empty for an unknown user.
    pub fn orders_for(&self, user_id: UserId) -> &[Arc<Order>] {
        self.users
            .get(user_id)
            .map(User::order_history)
            .unwrap_or_default()
    }

    /// All products in insertion order.
    pub fn list_all(&self) -> &[Arc<Product>] {
        self.catalog.list_all()
    }

    /// First product with this name, ignoring case.
    pub fn find_product(&self, name: &str) -> Option<Arc<Product>> {
        self.catalog.find_by_name(name)
    }
}

impl Searchable for Store {
    fn search_by_category(&self, category: &str) -> Vec<Arc<Product>> {
        self.catalog.search_by_category(category)
    }

    fn search_by_price_range(&self, min: Money, max: Money) -> Vec<Arc<Product>> {
        self.catalog.search_by_price_range(min, max)
    }

    fn search_by_rating(&self, min_rating: f64) -> Vec<Arc<Product>> {
        self.catalog.search_by_rating(min_rating)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::order::OrderState;

    fn store_with_user() -> (Store, UserId) {
        let mut store = Store::new();
        store.add_product(
            Product::new("Book", Money::from_units(20), "Bestseller", "Books", 4.9).unwrap(),
        );
        let user_id = store.register_user("user1", "password1").unwrap();
        (store, user_id)
    }

    #[test]
    fn test_place_order_appends_to_user_and_log() {
        let (mut store, user_id) = store_with_user();
        let book = store.find_product("book").unwrap();

        let mut order = Order::new();
        order.add_item(book, 3).unwrap();
        let placed = store.place_order(user_id, order).unwrap();

        assert_eq!(placed.state(), OrderState::Placed);
        assert!(placed.placed_at().is_some());
        assert_eq!(store.orders().len(), 1);
        assert_eq!(store.orders_for(user_id).len(), 1);
        assert!(Arc::ptr_eq(&store.orders()[0], &placed));
        assert!(Arc::ptr_eq(&store.orders_for(user_id)[0], &placed));
    }

    #[test]
    fn test_place_empty_order_is_allowed() {
        let (mut store, user_id) = store_with_user();
        let placed = store.place_order(user_id, Order::new()).unwrap();
        assert!(!placed.has_items());
        assert_eq!(store.orders().len(), 1);
    }

    #[test]
    fn test_place_order_for_unknown_user_changes_nothing() {
        let (mut store, _) = store_with_user();
        let result = store.place_order(UserId::new(), Order::new());
        assert!(matches!(result, Err(DomainError::UserNotFound(_))));
        assert!(store.orders().is_empty());
    }

    #[test]
    fn test_orders_for_unknown_user_is_empty() {
        let (store, _) = store_with_user();
        assert!(store.orders_for(UserId::new()).is_empty());
    }

    #[test]
    fn test_authenticate_through_store() {
        let (store, user_id) = store_with_user();
        assert_eq!(
            store.authenticate("user1", "password1").map(User::id),
            Some(user_id)
        );
        assert!(store.authenticate("USER1", "password1").is_none());
    }

    #[test]
    fn test_store_is_searchable() {
        let (store, _) = store_with_user();
        assert_eq!(store.search_by_category("BOOKS").len(), 1);
        assert_eq!(
            store
                .search_by_price_range(Money::zero(), Money::from_units(19))
                .len(),
            0
        );
        assert_eq!(store.search_by_rating(4.9).len(), 1);
    }
}
