//! Domain error types.

use common::UserId;
use thiserror::Error;

use crate::auth::CredentialError;
use crate::order::OrderError;

/// Errors that can occur during store operations.
///
/// Absence of a match (unknown product name, failed login) is not an error;
/// those lookups return `Option` or an empty `Vec`.
#[derive(Debug, Error)]
pub enum DomainError {
    /// A value passed to the core is out of range.
    #[error("Invalid argument `{field}`: {reason}")]
    InvalidArgument {
        field: &'static str,
        reason: String,
    },

    /// Another user already registered this login.
    #[error("Login already taken: {login}")]
    LoginTaken { login: String },

    /// No user with this id is registered.
    #[error("User not found: {0}")]
    UserNotFound(UserId),

    /// An error occurred in the order aggregate.
    #[error("Order error: {0}")]
    Order(#[from] OrderError),

    /// The credential scheme failed to seal a password.
    #[error("Credential error: {0}")]
    Credential(#[from] CredentialError),
}

impl DomainError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        DomainError::InvalidArgument {
            field,
            reason: reason.into(),
        }
    }
}
