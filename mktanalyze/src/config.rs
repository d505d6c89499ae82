//! Application configuration management.
//!
//! Configuration is merged from default values, an optional TOML file, and
//! environment variables, in increasing order of precedence.

use mkt_core::models::AnalysisConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// The application configuration
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
pub struct AppConfig {
    /// Marginal cost, supply filters, quantity scheme, and display flags
    #[serde(default)]
    pub analysis: AnalysisConfig,
}

impl AppConfig {
    /// Load configuration from multiple sources with precedence:
    /// 1. Environment variables (highest priority)
    /// 2. Config file given by the CLI
    /// 3. Default values (lowest priority)
    ///
    /// Environment variables are mapped using the pattern:
    /// `MKT_<SECTION>__<KEY>` maps to `<section>.<key>`
    ///
    /// # Examples
    ///
    /// ```bash
    /// # Price production at 180 per ton
    /// export MKT_ANALYSIS__MARGINAL_COST=180
    ///
    /// # Report the equilibrium
    /// export MKT_ANALYSIS__DISPLAY__EQUILIBRIUM=true
    /// ```
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let mut config = config::Config::builder();

        // Start with default values
        config = config.add_source(config::Config::try_from(&Self::default())?);

        // Layer on config file if it is specified and exists
        if let Some(path) = path {
            if path.exists() {
                config = config.add_source(config::File::from(path))
            } else {
                return Err(anyhow::anyhow!(
                    "Config file {} does not exist",
                    path.display()
                ));
            }
        }

        // Override with environment variables
        // This maps MKT_ANALYSIS__MARGINAL_COST to analysis.marginal_cost
        config = config.add_source(
            config::Environment::with_prefix("MKT")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let built_config = config.build()?;
        built_config.try_deserialize().map_err(Into::into)
    }
}
