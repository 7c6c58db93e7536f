//! Order aggregate and related types.

mod aggregate;
mod state;
mod value_objects;

pub use aggregate::{DEFAULT_STATUS, Order};
pub use state::OrderState;
pub use value_objects::LineItem;

use thiserror::Error;

use crate::money::Money;

/// Errors that can occur during order operations.
#[derive(Debug, Error)]
pub enum OrderError {
    /// Order is not in the expected state.
    #[error("Invalid state transition: cannot {action} from {current_state} state")]
    InvalidStateTransition {
        current_state: OrderState,
        action: &'static str,
    },

    /// Invalid quantity.
    #[error("Invalid quantity: {quantity} (must be greater than 0)")]
    InvalidQuantity { quantity: u32 },

    /// The line or the order total does not fit in a money amount.
    #[error("Order total overflow: adding {quantity} x {unit_price} exceeds the maximum amount")]
    TotalOverflow { unit_price: Money, quantity: u32 },
}
