//! CLI error types with exit code mapping.

use domain::{DomainError, MoneyError};
use thiserror::Error;

/// Errors that end a session.
#[derive(Debug, Error)]
pub enum CliError {
    /// Reading from or writing to the console failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The store rejected an operation.
    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    /// Every login attempt was rejected.
    #[error("Login failed after {attempts} attempt(s)")]
    LoginFailed { attempts: u32 },
}

impl CliError {
    /// Process exit code for this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            CliError::LoginFailed { .. } => 2,
            CliError::Io(_) | CliError::Domain(_) => 1,
        }
    }
}

/// Console input that could not be turned into a value.
///
/// These never end a session; the menu reports them and carries on.
#[derive(Debug, Error)]
pub enum InputError {
    /// Price text is not a decimal amount.
    #[error("invalid price: {0}")]
    Price(#[from] MoneyError),

    /// Rating text is not a finite number.
    #[error("invalid rating: {0:?}")]
    Rating(String),

    /// Quantity text is not a whole number.
    #[error("invalid quantity: {0:?}")]
    Quantity(String),
}
