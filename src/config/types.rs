// Configuration types module
// Defines the tool's configuration data structures

use crate::mime::ContentTypeMapping;
use serde::{Deserialize, Serialize};

/// Main configuration structure
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Config {
    pub assets: AssetsConfig,
    pub output: OutputConfig,
    pub logging: LoggingConfig,
    /// Caller-declared content-type overrides, in declaration order
    #[serde(default)]
    pub mappings: Vec<CustomMappingConfig>,
}

/// Asset discovery configuration
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AssetsConfig {
    /// Root directory whose files are treated as assets
    pub root: String,
}

/// Manifest output configuration
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct OutputConfig {
    /// Path of the generated manifest file
    pub manifest: String,
    /// Content type recorded for assets no pattern matches
    pub fallback_content_type: String,
}

/// Logging configuration
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct LoggingConfig {
    pub level: String,
    /// Log file path (optional, stdout if not set)
    #[serde(default)]
    pub log_file: Option<String>,
    /// Error log file path (optional, stderr if not set)
    #[serde(default)]
    pub error_log_file: Option<String>,
}

/// One declared content-type override
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct CustomMappingConfig {
    /// Glob pattern, e.g. `*.customext`
    pub pattern: String,
    /// MIME type to record for matching assets
    pub mime_type: String,
    #[serde(default)]
    pub encoding: Option<String>,
    #[serde(default = "default_priority")]
    pub priority: i32,
}

#[allow(clippy::missing_const_for_fn)]
fn default_priority() -> i32 {
    1
}

impl CustomMappingConfig {
    /// Convert to the resolver's mapping value type
    pub fn to_mapping(&self) -> ContentTypeMapping {
        ContentTypeMapping::new(
            &self.pattern,
            &self.mime_type,
            self.encoding.clone(),
            self.priority,
        )
    }
}
