//! Application configuration loaded from environment variables.

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

/// How user passwords are stored and checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CredentialScheme {
    #[default]
    Plaintext,
    Argon2,
}

/// Session configuration with sensible defaults.
///
/// Reads from environment variables:
/// - `RUST_LOG`: tracing filter directive (default: `"warn"`)
/// - `STORE_LOG_FORMAT`: `text` or `json` (default: `text`)
/// - `STORE_SEED`: load the sample catalog and user (default: `true`)
/// - `STORE_MAX_LOGIN_ATTEMPTS`: login tries before exiting (default: `3`)
/// - `STORE_CREDENTIALS`: `plaintext` or `argon2` (default: `plaintext`)
///
/// Unparsable values fall back to the default.
#[derive(Debug, Clone)]
pub struct Config {
    pub log_level: String,
    pub log_format: LogFormat,
    pub seed: bool,
    pub max_login_attempts: u32,
    pub credentials: CredentialScheme,
}

impl Config {
    /// Loads configuration from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Loads configuration through `lookup`, falling back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            log_level: lookup("RUST_LOG").unwrap_or(defaults.log_level),
            log_format: match lookup("STORE_LOG_FORMAT").as_deref().map(str::trim) {
                Some(v) if v.eq_ignore_ascii_case("json") => LogFormat::Json,
                Some(v) if v.eq_ignore_ascii_case("text") => LogFormat::Text,
                _ => defaults.log_format,
            },
            seed: lookup("STORE_SEED")
                .and_then(|v| parse_bool(&v))
                .unwrap_or(defaults.seed),
            max_login_attempts: lookup("STORE_MAX_LOGIN_ATTEMPTS")
                .and_then(|v| v.trim().parse().ok())
                .filter(|n| *n > 0)
                .unwrap_or(defaults.max_login_attempts),
            credentials: match lookup("STORE_CREDENTIALS").as_deref().map(str::trim) {
                Some(v) if v.eq_ignore_ascii_case("argon2") => CredentialScheme::Argon2,
                Some(v) if v.eq_ignore_ascii_case("plaintext") => CredentialScheme::Plaintext,
                _ => defaults.credentials,
            },
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: "warn".to_string(),
            log_format: LogFormat::Text,
            seed: true,
            max_login_attempts: 3,
            credentials: CredentialScheme::Plaintext,
        }
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
