use std::path::PathBuf;

use rand::distr::{Alphanumeric, SampleString};
use zealous_core::compose::BusinessProfile;

/// A configuration variable was present but malformed.
#[derive(Debug, thiserror::Error)]
#[error("{var} must be {expected}, got '{value}'")]
pub struct ConfigError {
    pub var: &'static str,
    pub expected: &'static str,
    pub value: String,
}

/// Server configuration loaded from environment variables.
///
/// All fields have defaults suitable for local development. Mail settings
/// live in [`zealous_events::EmailConfig`].
#[derive(Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `5000`).
    pub port: u16,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Directory served under `/static` and copied by the exporter.
    pub static_dir: PathBuf,
    /// Process secret. Generated per process when `SECRET_KEY` is unset.
    pub secret_key: String,
    /// Company details and notification recipients.
    pub business: BusinessProfile,
}

impl std::fmt::Debug for ServerConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServerConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("static_dir", &self.static_dir)
            .field("secret_key", &"<redacted>")
            .field("business", &self.business)
            .finish()
    }
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                              |
    /// |------------------------|--------------------------------------|
    /// | `HOST`                 | `0.0.0.0`                            |
    /// | `PORT`                 | `5000`                               |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                                 |
    /// | `STATIC_DIR`           | `static`                             |
    /// | `SECRET_KEY`           | random, regenerated on every start   |
    /// | `BUSINESS_RECIPIENTS`  | the company's two notification inboxes |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with an injectable variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let host = lookup("HOST").unwrap_or_else(|| "0.0.0.0".into());
        let port = parse_var(&lookup, "PORT", "a valid port", 5000)?;
        let request_timeout_secs = parse_var(
            &lookup,
            "REQUEST_TIMEOUT_SECS",
            "a whole number of seconds",
            30,
        )?;
        let static_dir = lookup("STATIC_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("static"));

        let secret_key = match lookup("SECRET_KEY").filter(|k| !k.is_empty()) {
            Some(key) => key,
            None => {
                tracing::warn!("SECRET_KEY is not set, using a random per-process key");
                Alphanumeric.sample_string(&mut rand::rng(), 48)
            }
        };

        let mut business = BusinessProfile::default();
        if let Some(raw) = lookup("BUSINESS_RECIPIENTS") {
            let recipients: Vec<String> = raw
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect();
            if recipients.is_empty() {
                return Err(ConfigError {
                    var: "BUSINESS_RECIPIENTS",
                    expected: "a comma-separated list of addresses",
                    value: raw,
                });
            }
            business.recipients = recipients;
        }

        Ok(Self {
            host,
            port,
            request_timeout_secs,
            static_dir,
            secret_key,
            business,
        })
    }
}

fn parse_var<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    var: &'static str,
    expected: &'static str,
    default: T,
) -> Result<T, ConfigError> {
    match lookup(var) {
        Some(value) => value.trim().parse().map_err(|_| ConfigError {
            var,
            expected,
            value,
        }),
        None => Ok(default),
    }
}
