use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Config {
    pub storage: StorageConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct StorageConfig {
    /// Key the record collection is stored under
    pub key: String,
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[storage]
key = "sales_data_v1"
"#;

impl Config {
    pub fn from_toml_str(contents: &str) -> anyhow::Result<Self> {
        let config: Config = toml::from_str(contents)?;
        if config.storage.key.trim().is_empty() {
            anyhow::bail!("storage.key must not be empty");
        }
        Ok(config)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            storage: StorageConfig {
                key: "sales_data_v1".to_string(),
            },
        }
    }
}

/// Embedded default configuration
pub fn default_config() -> anyhow::Result<Config> {
    tracing::debug!("Using default embedded configuration");
    Config::from_toml_str(DEFAULT_CONFIG)
}
