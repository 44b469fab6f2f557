//! Environment based configuration.
//!
//! All settings are read once at startup by [`Config::from_env`]. Only `DATABASE_URL`
//! is required, everything else falls back to a development friendly default.

use std::{env, str::FromStr};

use crate::server::error::config::ConfigError;

/// JWT secret used when `JWT_SECRET` is unset. Rejected when `APP_ENV=production`.
pub const DEFAULT_JWT_SECRET: &str = "development_secret_key_change_in_production";

/// Deployment environment, read from `APP_ENV`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AppEnv {
    /// Local development, verbose logging
    Development,
    /// Production deployment, default secrets are refused
    Production,
    /// Automated tests
    Test,
}

impl FromStr for AppEnv {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_ascii_lowercase().as_str() {
            "development" => Ok(Self::Development),
            "production" => Ok(Self::Production),
            "test" => Ok(Self::Test),
            other => Err(ConfigError::InvalidEnvValue {
                var: "APP_ENV".to_string(),
                reason: format!(
                    "expected development, production or test but got {:?}",
                    other
                ),
            }),
        }
    }
}

/// Application configuration.
pub struct Config {
    /// sea-orm connection URL, `sqlite://…` or `postgres://…`
    pub database_url: String,
    /// HMAC secret used to sign bearer tokens
    pub jwt_secret: String,
    /// Lifetime of issued tokens in hours
    pub jwt_expiration_hours: i64,
    /// Interface to bind
    pub host: String,
    /// Port to bind
    pub port: u16,
    /// Origin allowed by the CORS layer
    pub cors_origin: String,
    /// Directory for the daily rolling log file, console only when unset
    pub log_dir: Option<String>,
    /// Deployment environment
    pub app_env: AppEnv,
}

impl Config {
    /// Reads the configuration from the process environment.
    ///
    /// # Returns
    /// - `Ok(Config)` - All variables present and parsable
    /// - `Err(ConfigError::MissingEnvVar)` - `DATABASE_URL` is not set
    /// - `Err(ConfigError::InvalidEnvValue)` - A number or `APP_ENV` failed to parse, or the
    ///   default JWT secret is used in production
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    ///
    /// Split from [`Config::from_env`] so parsing can be tested without touching
    /// process-wide environment variables.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL")
            .filter(|value| !value.is_empty())
            .ok_or_else(|| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?;

        let app_env = match lookup("APP_ENV") {
            Some(value) => value.parse::<AppEnv>()?,
            None => AppEnv::Development,
        };

        let jwt_secret = lookup("JWT_SECRET").unwrap_or_else(|| DEFAULT_JWT_SECRET.to_string());
        if app_env == AppEnv::Production && jwt_secret == DEFAULT_JWT_SECRET {
            return Err(ConfigError::InvalidEnvValue {
                var: "JWT_SECRET".to_string(),
                reason: "the development default must not be used in production".to_string(),
            });
        }

        Ok(Self {
            database_url,
            jwt_secret,
            jwt_expiration_hours: parse_or(&lookup, "JWT_EXPIRATION_HOURS", 24)?,
            host: lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port: parse_or(&lookup, "PORT", 4000)?,
            cors_origin: lookup("CORS_ORIGIN")
                .unwrap_or_else(|| "http://localhost:3000".to_string()),
            log_dir: lookup("LOG_DIR").filter(|value| !value.is_empty()),
            app_env,
        })
    }
}

fn parse_or<F, T>(lookup: &F, var: &str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(var) {
        None => Ok(default),
        Some(value) => value
            .parse::<T>()
            .map_err(|e| ConfigError::InvalidEnvValue {
                var: var.to_string(),
                reason: e.to_string(),
            }),
    }
}
