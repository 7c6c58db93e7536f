//! Order state machine.

use serde::{Deserialize, Serialize};

/// The state of an order in its lifecycle.
///
/// State transitions:
/// ```text
/// Building ──► Placed
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum OrderState {
    /// Order is being assembled, items can be added.
    #[default]
    Building,

    /// Order has been committed to the user's history and the store log (terminal state).
    Placed,
}

impl OrderState {
    /// Returns true if items can be added in this state.
    pub fn can_modify_items(&self) -> bool {
        matches!(self, OrderState::Building)
    }

    /// Returns true if the order can be placed in this state.
    pub fn can_place(&self) -> bool {
        matches!(self, OrderState::Building)
    }

    /// Returns true if this is a terminal state (no further transitions possible).
    pub fn is_terminal(&self) -> bool {
        matches!(self, OrderState::Placed)
    }

    /// Returns the state name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderState::Building => "Building",
            OrderState::Placed => "Placed",
        }
    }
}

impl std::fmt::Display for OrderState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
