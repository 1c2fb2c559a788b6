use std::{path::PathBuf, str::FromStr, time::Duration};

use crate::server::{
    error::config::ConfigError,
    service::{
        inventory::{FallbackPolicy, InventorySettings},
        parish::reference::ReferencePaths,
        retry::RetryPolicy,
    },
};

pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";
pub const DEFAULT_PARISH_CATALOG_PATH: &str = "data/parishes.json";
pub const DEFAULT_PARISH_ALIAS_PATH: &str = "data/parish-aliases.json";
pub const DEFAULT_DIOCESE: &str = "Guadix";
pub const DEFAULT_IMAGE_STORAGE_DIR: &str = "data/images";
pub const DEFAULT_IMPORT_REPORT_PATH: &str = "import-report.json";

/// Application configuration read from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub bind_address: String,
    pub reference: ReferencePaths,
    pub default_diocese: String,
    pub image_storage_dir: PathBuf,
    pub inventory: InventorySettings,
    pub dry_run: bool,
    pub import_report_path: PathBuf,
}

impl Config {
    /// Reads the configuration from the process environment
    ///
    /// Only `DATABASE_URL` is required, everything else has a default.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Reads the configuration through `lookup`, which returns the value of a variable if set
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());
        let or_default = |name: &str, default: &str| var(name).unwrap_or_else(|| default.to_string());

        let database_url =
            var("DATABASE_URL").ok_or_else(|| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?;

        let max_attempts: u32 = parse_var(&var, "INVENTORY_MAX_ATTEMPTS")?
            .unwrap_or(RetryPolicy::DEFAULT_MAX_ATTEMPTS);
        if max_attempts == 0 {
            return Err(ConfigError::InvalidEnvValue {
                var: "INVENTORY_MAX_ATTEMPTS".to_string(),
                reason: "must be at least 1".to_string(),
            });
        }
        let initial_backoff = parse_var::<u64, _>(&var, "INVENTORY_BACKOFF_MS")?
            .map(Duration::from_millis)
            .unwrap_or(RetryPolicy::DEFAULT_INITIAL_BACKOFF);
        let fallback: FallbackPolicy =
            parse_var(&var, "INVENTORY_FALLBACK")?.unwrap_or_default();

        Ok(Self {
            database_url,
            bind_address: or_default("BIND_ADDRESS", DEFAULT_BIND_ADDRESS),
            reference: ReferencePaths {
                catalog: or_default("PARISH_CATALOG_PATH", DEFAULT_PARISH_CATALOG_PATH).into(),
                aliases: or_default("PARISH_ALIAS_PATH", DEFAULT_PARISH_ALIAS_PATH).into(),
            },
            default_diocese: or_default("DEFAULT_DIOCESE", DEFAULT_DIOCESE),
            image_storage_dir: or_default("IMAGE_STORAGE_DIR", DEFAULT_IMAGE_STORAGE_DIR).into(),
            inventory: InventorySettings {
                retry: RetryPolicy {
                    max_attempts,
                    initial_backoff,
                    max_backoff: RetryPolicy::DEFAULT_MAX_BACKOFF.max(initial_backoff),
                },
                fallback,
            },
            dry_run: parse_var(&var, "DRY_RUN")?.unwrap_or(false),
            import_report_path: or_default("IMPORT_REPORT_PATH", DEFAULT_IMPORT_REPORT_PATH)
                .into(),
        })
    }
}

fn parse_var<T, V>(var: &V, name: &str) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
    V: Fn(&str) -> Option<String>,
{
    var(name)
        .map(|value| {
            value
                .trim()
                .parse::<T>()
                .map_err(|err| ConfigError::InvalidEnvValue {
                    var: name.to_string(),
                    reason: err.to_string(),
                })
        })
        .transpose()
}
