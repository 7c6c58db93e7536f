//! User registration and login.

mod credentials;
mod user;

use std::sync::Arc;

use common::UserId;
use tracing::{info, warn};

use crate::error::DomainError;
use crate::order::Order;

pub use credentials::{
    Argon2Credentials, CredentialCheck, CredentialError, PlaintextCredentials,
};
pub use user::User;

/// Registered users plus the credential scheme that guards them.
#[derive(Debug)]
pub struct UserDirectory {
    users: Vec<User>,
    credentials: Box<dyn CredentialCheck>,
}

impl UserDirectory {
    /// Creates an empty directory using the given credential scheme.
    pub fn new(credentials: impl CredentialCheck + 'static) -> Self {
        Self {
            users: Vec::new(),
            credentials: Box::new(credentials),
        }
    }

    /// Registers a user.
    ///
    /// # Errors
    ///
    /// - [`DomainError::InvalidArgument`] for a blank login.
    /// - [`DomainError::LoginTaken`] if the login is already registered
    ///   (exact, case-sensitive comparison).
    /// - [`DomainError::Credential`] if the scheme fails to seal the password.
    pub fn register(&mut self, login: &str, password: &str) -> Result<UserId, DomainError> {
        if login.trim().is_empty() {
            return Err(DomainError::invalid("login", "must not be empty"));
        }

        if self.find(login).is_some() {
            warn!(login, "registration rejected, login taken");
            return Err(DomainError::LoginTaken {
                login: login.to_string(),
            });
        }

        let credential = self.credentials.seal(password)?;
        let user = User::new(login.to_string(), credential);
        let id = user.id();
        self.users.push(user);

        info!(
            login,
            user_id = %id,
            scheme = self.credentials.scheme(),
            size = self.users.len(),
            "User registered"
        );
        Ok(id)
    }

    /// Returns the user whose login and password both match, or `None`.
    ///
    /// The login comparison is exact and case-sensitive.
    pub fn authenticate(&self, login: &str, password: &str) -> Option<&User> {
        self.find(login)
            .filter(|user| self.credentials.verify(password, user.credential()))
    }

    pub fn get(&self, id: UserId) -> Option<&User> {
        self.users.iter().find(|u| u.id() == id)
    }

    /// All users in registration order.
    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    pub(crate) fn record_order(
        &mut self,
        id: UserId,
        order: Arc<Order>,
    ) -> Result<(), DomainError> {
        let user = self
            .users
            .iter_mut()
            .find(|u| u.id() == id)
            .ok_or(DomainError::UserNotFound(id))?;
        user.record_order(order);
        Ok(())
    }

    pub(crate) fn contains(&self, id: UserId) -> bool {
        self.get(id).is_some()
    }

    fn find(&self, login: &str) -> Option<&User> {
        self.users.iter().find(|u| u.login() == login)
    }
}

impl Default for UserDirectory {
    fn default() -> Self {
        Self::new(PlaintextCredentials)
    }
}
