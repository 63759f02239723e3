//! Configuration for the cost estimator

use core_config::{ConfigError, FromEnv, env_optional, env_or_default};
use domain_pricing::PricingTable;
use eyre::{Result, WrapErr};
use std::path::{Path, PathBuf};
use tracing::info;

pub const DEFAULT_REGION: &str = "us-east-1";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Pricing table overlaid on the bundled one
    pub pricing_table_path: Option<PathBuf>,
    /// Region for lookups that do not name one
    pub default_region: String,
}

impl FromEnv for Config {
    fn from_env() -> Result<Self, ConfigError> {
        let default_region = env_or_default("DEFAULT_REGION", DEFAULT_REGION);
        if default_region.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                key: "DEFAULT_REGION".to_string(),
                details: "region must not be blank".to_string(),
            });
        }

        Ok(Self {
            pricing_table_path: env_optional("PRICING_TABLE_PATH").map(PathBuf::from),
            default_region,
        })
    }
}

impl Config {
    /// Bundled table, overlaid with `path` or else the configured table file
    pub fn load_pricing(&self, path: Option<&Path>) -> Result<PricingTable> {
        let table = PricingTable::bundled().wrap_err("Bundled pricing table is invalid")?;

        let Some(path) = path.or(self.pricing_table_path.as_deref()) else {
            return Ok(table);
        };

        let overrides = PricingTable::from_path(path)
            .wrap_err_with(|| format!("Failed to load pricing table {}", path.display()))?;
        info!(path = %path.display(), rates = overrides.len(), "Using pricing overrides");
        Ok(table.merge(overrides))
    }
}
