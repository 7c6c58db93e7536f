//! Order aggregate implementation.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use common::OrderId;

use crate::catalog::Product;
use crate::money::Money;

use super::{LineItem, OrderError, OrderState};

/// Status label given to every new order.
pub const DEFAULT_STATUS: &str = "pending";

/// Order aggregate root.
///
/// Starts empty in [`OrderState::Building`], grows by appending line items,
/// and is frozen once the store places it. The running total is updated on
/// every add, so it always equals the sum of the line totals.
#[derive(Debug, Clone)]
pub struct Order {
    id: OrderId,
    items: Vec<LineItem>,
    total: Money,
    status: String,
    state: OrderState,
    placed_at: Option<DateTime<Utc>>,
}

impl Default for Order {
    fn default() -> Self {
        Self::new()
    }
}

// Query methods
impl Order {
    /// Creates an empty order with status `"pending"`.
    pub fn new() -> Self {
        Self {
            id: OrderId::new(),
            items: Vec::new(),
            total: Money::zero(),
            status: DEFAULT_STATUS.to_string(),
            state: OrderState::Building,
            placed_at: None,
        }
    }

    pub fn id(&self) -> OrderId {
        self.id
    }

    /// Returns the line items in the order they were added.
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Returns the number of line items.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Returns the total quantity across all lines.
    pub fn total_quantity(&self) -> u32 {
        self.items.iter().map(LineItem::quantity).sum()
    }

    /// Returns the running total.
    pub fn total(&self) -> Money {
        self.total
    }

    /// Returns true if the order has items.
    pub fn has_items(&self) -> bool {
        !self.items.is_empty()
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn state(&self) -> OrderState {
        self.state
    }

    /// When the store placed the order, if it has been placed.
    pub fn placed_at(&self) -> Option<DateTime<Utc>> {
        self.placed_at
    }

    pub fn is_placed(&self) -> bool {
        self.state.is_terminal()
    }
}

// Command methods
impl Order {
    /// Appends a line item and updates the running total.
    ///
    /// Adding a product that is already in the order creates a second line.
    ///
    /// # Errors
    ///
    /// - [`OrderError::InvalidQuantity`] if `quantity` is zero.
    /// - [`OrderError::InvalidStateTransition`] if the order was already placed.
    /// - [`OrderError::TotalOverflow`] if the line or the new total would not
    ///   fit in a [`Money`]. The order is left unchanged.
    pub fn add_item(&mut self, product: Arc<Product>, quantity: u32) -> Result<(), OrderError> {
        if !self.state.can_modify_items() {
            return Err(OrderError::InvalidStateTransition {
                current_state: self.state,
                action: "add item",
            });
        }

        if quantity == 0 {
            return Err(OrderError::InvalidQuantity { quantity });
        }

        let unit_price = product.price();
        let total = unit_price
            .checked_multiply(quantity)
            .and_then(|line| self.total.checked_add(line))
            .ok_or(OrderError::TotalOverflow { unit_price, quantity })?;

        self.items.push(LineItem::new(product, quantity));
        self.total = total;
        Ok(())
    }

    /// Replaces the free-form status label.
    pub fn set_status(&mut self, status: impl Into<String>) {
        self.status = status.into();
    }

    /// Moves the order to [`OrderState::Placed`].
    pub(crate) fn mark_placed(&mut self, at: DateTime<Utc>) -> Result<(), OrderError> {
        if !self.state.can_place() {
            return Err(OrderError::InvalidStateTransition {
                current_state: self.state,
                action: "place",
            });
        }

        self.state = OrderState::Placed;
        self.placed_at = Some(at);
        Ok(())
    }
}
