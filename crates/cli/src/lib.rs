//! Interactive text front end for the storefront.
//!
//! Provides the menu session, console parsing and rendering, plus the
//! configuration and tracing setup used by the `storefront` binary.

pub mod config;
pub mod error;
pub mod input;
pub mod render;
pub mod session;

use std::io;

use domain::{Argon2Credentials, Store, seed};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use config::{Config, CredentialScheme, LogFormat};
use error::CliError;

pub use session::Session;

/// Installs the global tracing subscriber.
///
/// Logs go to stderr so they never interleave with the menu on stdout.
pub fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new("warn"));

    let (json, text) = match config.log_format {
        LogFormat::Json => (Some(fmt::layer().json().with_writer(io::stderr)), None),
        LogFormat::Text => (None, Some(fmt::layer().with_writer(io::stderr))),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(json)
        .with(text)
        .init();
}

/// Creates the store described by `config`.
pub fn build_store(config: &Config) -> Result<Store, CliError> {
    let mut store = match config.credentials {
        CredentialScheme::Plaintext => Store::new(),
        CredentialScheme::Argon2 => Store::with_credentials(Argon2Credentials),
    };

    if config.seed {
        seed::seed_store(&mut store)?;
    }

    tracing::info!(
        products = store.list_all().len(),
        users = store.users().len(),
        "Store ready"
    );
    Ok(store)
}
