//! User entity.

use std::sync::Arc;

use common::UserId;

use crate::order::Order;

/// A registered user and their order history.
///
/// The stored credential is whatever the directory's credential scheme
/// produced; it is never exposed and is redacted from `Debug`.
#[derive(Clone)]
pub struct User {
    id: UserId,
    login: String,
    credential: String,
    history: Vec<Arc<Order>>,
}

impl User {
    pub(crate) fn new(login: String, credential: String) -> Self {
        Self {
            id: UserId::new(),
            login,
            credential,
            history: Vec::new(),
        }
    }

    pub fn id(&self) -> UserId {
        self.id
    }

    pub fn login(&self) -> &str {
        &self.login
    }

    /// Orders placed by this user, oldest first.
    pub fn order_history(&self) -> &[Arc<Order>] {
        &self.history
    }

    pub(crate) fn credential(&self) -> &str {
        &self.credential
    }

    // History is append-only; there is no removal counterpart.
    pub(crate) fn record_order(&mut self, order: Arc<Order>) {
        self.history.push(order);
    }
}

impl std::fmt::Debug for User {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("User")
            .field("id", &self.id)
            .field("login", &self.login)
            .field("credential", &"<redacted>")
            .field("orders", &self.history.len())
            .finish()
    }
}
