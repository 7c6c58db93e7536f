//! Core of the storefront.
//!
//! This crate provides:
//! - The entity model: [`Product`], [`User`], [`Order`] and [`Money`]
//! - The [`Catalog`] and the [`Searchable`] capability
//! - The [`UserDirectory`] with pluggable [`CredentialCheck`] schemes
//! - The [`Store`] aggregate tying them together
//!
//! Everything is in memory, synchronous and single-owner.

pub mod auth;
pub mod catalog;
pub mod error;
pub mod money;
pub mod order;
pub mod seed;
pub mod store;

pub use auth::{
    Argon2Credentials, CredentialCheck, CredentialError, PlaintextCredentials, User, UserDirectory,
};
pub use catalog::{Catalog, MAX_RATING, Product, Searchable};
pub use common::{OrderId, UserId};
pub use error::DomainError;
pub use money::{Money, MoneyError};
pub use order::{DEFAULT_STATUS, LineItem, Order, OrderError, OrderState};
pub use store::Store;
