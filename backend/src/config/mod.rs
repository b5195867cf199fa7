//! Configuration management for the Garden Advisor backend
//!
//! Configuration is loaded hierarchically:
//! 1. Default values (in code)
//! 2. TOML config files (config/development.toml or config/production.toml)
//! 3. Environment variables (prefix: GA__)

use anyhow::Result;
use garden_advisor_shared::{Locale, DEFAULT_GROWTH_DAYS, MAX_GROWTH_DAYS};
use serde::{Deserialize, Serialize};
use std::env;

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    #[serde(default)]
    pub advisor: AdvisorConfig,
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// Advisory defaults
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdvisorConfig {
    /// Locale code used when a request names none
    pub default_locale: String,
    pub default_growth_days: u32,
    pub max_growth_days: u32,
    /// Fixed seed for the shared generator; random when unset
    #[serde(default)]
    pub rng_seed: Option<u64>,
}

impl Default for AdvisorConfig {
    fn default() -> Self {
        Self {
            default_locale: Locale::English.code().to_string(),
            default_growth_days: DEFAULT_GROWTH_DAYS,
            max_growth_days: MAX_GROWTH_DAYS,
            rng_seed: None,
        }
    }
}

impl AdvisorConfig {
    /// Configured default locale, English when the code is unknown
    pub fn locale(&self) -> Locale {
        self.default_locale.parse().unwrap_or_default()
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 8080,
            },
            advisor: AdvisorConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from files and environment
    ///
    /// Loading order (later sources override earlier):
    /// 1. Default values
    /// 2. Config file based on RUST_ENV (development.toml or production.toml)
    /// 3. Environment variables with GA__ prefix
    pub fn load() -> Result<Self> {
        let env = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());
        let config_file = format!("config/{}.toml", env);

        let config = config::Config::builder()
            .add_source(config::Config::try_from(&AppConfig::default())?)
            .add_source(config::File::with_name(&config_file).required(false))
            // e.g., GA__SERVER__PORT=9000 sets server.port
            .add_source(config::Environment::with_prefix("GA").separator("__"))
            .build()?;

        Ok(config.try_deserialize()?)
    }

    /// Check if running in production mode
    pub fn is_production() -> bool {
        env::var("RUST_ENV")
            .map(|v| v == "production")
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.advisor.default_growth_days, 30);
        assert_eq!(config.advisor.max_growth_days, 365);
        assert!(config.advisor.rng_seed.is_none());
    }

    #[test]
    fn test_locale_falls_back_to_english() {
        let mut advisor = AdvisorConfig::default();
        assert_eq!(advisor.locale(), Locale::English);

        advisor.default_locale = "tamil".to_string();
        assert_eq!(advisor.locale(), Locale::Tamil);

        advisor.default_locale = "esperanto".to_string();
        assert_eq!(advisor.locale(), Locale::English);
    }

    #[test]
    fn test_is_production() {
        // Default should be false (development)
        assert!(!AppConfig::is_production());
    }
}
