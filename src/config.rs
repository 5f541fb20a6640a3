use config::{Config, ConfigError, File};
use serde::{Deserialize, Serialize};
use std::env;

/// Application configuration loaded from config.toml or environment variables
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub network: NetworkConfig,
    pub classification: ClassificationConfig,
}

/// Default network used when the CLI does not name one
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkConfig {
    pub name: String,
}

/// Classification behaviour defaults
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassificationConfig {
    pub strict: bool,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            name: "bitcoin".to_string(),
        }
    }
}

impl Default for ClassificationConfig {
    fn default() -> Self {
        Self { strict: false }
    }
}

impl AppConfig {
    /// Load configuration from config.toml file and environment variables
    /// Environment variables take precedence over file configuration
    pub fn load() -> Result<Self, ConfigError> {
        let config = Config::builder()
            .set_default("network.name", NetworkConfig::default().name)?
            .set_default("classification.strict", ClassificationConfig::default().strict)?
            // Load from config.toml if it exists
            .add_source(File::with_name("config").required(false))
            .build()?;

        let mut app_config: AppConfig = config.try_deserialize()?;

        // SCRIPT_NETWORK and SCRIPT_STRICT override file configuration
        if let Ok(name) = env::var("SCRIPT_NETWORK") {
            app_config.network.name = name;
        }
        if let Ok(strict) = env::var("SCRIPT_STRICT") {
            app_config.classification.strict =
                strict == "1" || strict.eq_ignore_ascii_case("true");
        }

        Ok(app_config)
    }
}
