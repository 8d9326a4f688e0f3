// Configuration module entry point
// Loads layered tool configuration: file, environment variables, defaults

mod types;

pub use types::{AssetsConfig, Config, CustomMappingConfig, LoggingConfig, OutputConfig};

use crate::mime::ContentTypeMapping;

impl Config {
    /// Load configuration from the specified file path (without extension)
    /// Default config file is "config.toml" when no path specified
    pub fn load_from(config_path: &str) -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(config_path).required(false))
            .add_source(config::Environment::with_prefix("ASSETMIME"))
            .set_default("assets.root", "wwwroot")?
            .set_default("output.manifest", "asset-manifest.json")?
            .set_default("output.fallback_content_type", "application/octet-stream")?
            .set_default("logging.level", "info")?
            .build()?;

        settings.try_deserialize()
    }

    /// Declared overrides converted to mapping values, declaration order kept
    pub fn custom_mappings(&self) -> Vec<ContentTypeMapping> {
        self.mappings
            .iter()
            .map(CustomMappingConfig::to_mapping)
            .collect()
    }

    /// Serialize the configuration as pretty TOML
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Write a starter configuration file
    pub fn write_default(path: &str) -> std::io::Result<()> {
        let body = Self::default()
            .to_toml()
            .map_err(|err| std::io::Error::new(std::io::ErrorKind::InvalidData, err))?;
        std::fs::write(path, body)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            assets: AssetsConfig {
                root: "wwwroot".to_string(),
            },
            output: OutputConfig {
                manifest: "asset-manifest.json".to_string(),
                fallback_content_type: "application/octet-stream".to_string(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                log_file: None,
                error_log_file: None,
            },
            mappings: Vec::new(),
        }
    }
}
