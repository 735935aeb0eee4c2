use std::{env, path::PathBuf, sync::Arc};

use crate::error::{AppError, Res};

#[derive(Clone, Debug)]
/// Configuration for the billing API clients.
///
/// Holds the secret key every request is authenticated with and the
/// logging preferences used by `logger::setup`.
pub struct Config {
    // environment
    pub environment: String, // development or production
    /// Stripe secret key sent as the token of every call.
    pub stripe_secret_key: String,
    /// A boolean indicating whether console logging is enabled.
    pub console_logging_enabled: bool,
    /// Level name for the logger (`error`, `warn`, `info`, `debug`, `trace`).
    pub log_level: String,
    /// Optional file the logger writes to in addition to stdout.
    pub log_file: Option<PathBuf>,
}

impl Config {
    /// Creates a `Config` with the given key and default logging settings.
    pub fn new(stripe_secret_key: impl Into<String>) -> Self {
        Config {
            environment: "development".to_string(),
            stripe_secret_key: stripe_secret_key.into(),
            console_logging_enabled: true,
            log_level: "debug".to_string(),
            log_file: None,
        }
    }

    /// Creates a new `Config` instance from environment variables.
    ///
    /// Loads `.env` first when present.
    ///
    /// # Environment Variables
    ///
    /// Required:
    /// - `STRIPE_SECRET_KEY`: Secret key used as the API token
    ///
    /// Optional (with defaults):
    /// - `ENVIRONMENT`: (default: "development")
    /// - `ENABLE_CONSOLE_LOGGING`: Whether to enable console logging (default: true)
    /// - `LOG_LEVEL`: (default: "debug")
    /// - `LOG_FILE`: Log file path (default: none)
    pub fn from_env() -> Res<Arc<Self>> {
        dotenvy::dotenv().ok();

        let config = Self::from_vars(|name| env::var(name).ok())?;
        log::debug!("Loaded configuration for {} environment", config.environment);
        Ok(Arc::new(config))
    }

    /// Builds a `Config` from an arbitrary variable lookup.
    pub fn from_vars<F>(lookup: F) -> Res<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let stripe_secret_key = lookup("STRIPE_SECRET_KEY")
            .filter(|key| !key.is_empty())
            .ok_or_else(|| AppError::Config("STRIPE_SECRET_KEY must be set".to_string()))?;

        Ok(Config {
            environment: lookup("ENVIRONMENT").unwrap_or_else(|| "development".to_string()),
            stripe_secret_key,
            console_logging_enabled: lookup("ENABLE_CONSOLE_LOGGING")
                .unwrap_or_else(|| "true".to_string())
                .to_lowercase()
                == "true",
            log_level: lookup("LOG_LEVEL").unwrap_or_else(|| "debug".to_string()),
            log_file: lookup("LOG_FILE")
                .filter(|path| !path.is_empty())
                .map(PathBuf::from),
        })
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}
