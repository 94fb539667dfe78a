//! Server configuration read from the environment.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use chrono::TimeDelta;
use crisissim_scenario::domain::catalog::TemplateCatalog;

use crate::error::AppError;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3000;
const DEFAULT_REAPER_INTERVAL_SECS: u64 = 30 * 60;
const DEFAULT_SESSION_MAX_AGE_SECS: i64 = 60 * 60;

/// Runtime configuration for the API server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Interface to bind.
    pub host: String,
    /// Port to bind.
    pub port: u16,
    /// How often the reaper sweeps.
    pub reaper_interval: Duration,
    /// Sessions older than this are reaped.
    pub session_max_age: TimeDelta,
    /// Optional YAML catalog replacing the built-in templates.
    pub templates_path: Option<PathBuf>,
}

impl ServerConfig {
    /// Reads `HOST`, `PORT`, `REAPER_INTERVAL_SECS`, `SESSION_MAX_AGE_SECS`
    /// and `CRISISSIM_TEMPLATES` from the process environment.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if a value is present but invalid.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if a value is present but invalid.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let host = lookup("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());

        let port = match lookup("PORT") {
            Some(raw) => raw
                .parse()
                .map_err(|e| AppError::Config(format!("PORT must be a valid u16: {e}")))?,
            None => DEFAULT_PORT,
        };

        let interval_secs: u64 = match lookup("REAPER_INTERVAL_SECS") {
            Some(raw) => raw.parse().map_err(|e| {
                AppError::Config(format!("REAPER_INTERVAL_SECS must be a whole number: {e}"))
            })?,
            None => DEFAULT_REAPER_INTERVAL_SECS,
        };
        if interval_secs == 0 {
            return Err(AppError::Config(
                "REAPER_INTERVAL_SECS must be greater than zero".into(),
            ));
        }

        let max_age_secs: i64 = match lookup("SESSION_MAX_AGE_SECS") {
            Some(raw) => raw.parse().map_err(|e| {
                AppError::Config(format!("SESSION_MAX_AGE_SECS must be a whole number: {e}"))
            })?,
            None => DEFAULT_SESSION_MAX_AGE_SECS,
        };
        let session_max_age = TimeDelta::try_seconds(max_age_secs)
            .filter(|age| *age > TimeDelta::zero())
            .ok_or_else(|| {
                AppError::Config(format!(
                    "SESSION_MAX_AGE_SECS must be a positive number of seconds, got {max_age_secs}"
                ))
            })?;

        let templates_path = lookup("CRISISSIM_TEMPLATES")
            .filter(|path| !path.trim().is_empty())
            .map(PathBuf::from);

        Ok(Self {
            host,
            port,
            reaper_interval: Duration::from_secs(interval_secs),
            session_max_age,
            templates_path,
        })
    }

    /// Returns the address to bind.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if `host:port` is not a socket address.
    pub fn socket_addr(&self) -> Result<SocketAddr, AppError> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| AppError::Config(format!("invalid HOST:PORT combination: {e}")))
    }

    /// Loads the configured template catalog, or the built-in one.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Server` if the file cannot be read and
    /// `AppError::Catalog` if it is invalid.
    pub fn load_catalog(&self) -> Result<TemplateCatalog, AppError> {
        let catalog = match &self.templates_path {
            Some(path) => TemplateCatalog::from_yaml_str(&std::fs::read_to_string(path)?)?,
            None => TemplateCatalog::builtin()?,
        };
        Ok(catalog)
    }
}
