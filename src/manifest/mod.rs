//! Asset manifest module
//!
//! Serializable record of the content type resolved for every asset,
//! written as pretty JSON by the driver.

use chrono::Local;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::Path;

const MANIFEST_VERSION: u32 = 1;

/// One resolved asset
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ManifestEntry {
    /// Asset path relative to the configured root, `/`-separated
    pub path: String,
    pub content_type: String,
    /// Pattern that produced the content type; absent for fallback entries
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
}

/// The full manifest for one driver run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssetManifest {
    pub version: u32,
    /// RFC 3339 timestamp of the run
    pub generated_at: String,
    pub assets: Vec<ManifestEntry>,
}

impl AssetManifest {
    pub fn new() -> Self {
        Self {
            version: MANIFEST_VERSION,
            generated_at: Local::now().to_rfc3339(),
            assets: Vec::new(),
        }
    }

    pub fn push(&mut self, entry: ManifestEntry) {
        self.assets.push(entry);
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Write the manifest, creating parent directories as needed
    pub fn write_to(&self, path: &str) -> io::Result<()> {
        let body = self.to_json()?;
        if let Some(parent) = Path::new(path).parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(path, body)
    }
}

impl Default for AssetManifest {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_shape() {
        let mut manifest = AssetManifest::new();
        manifest.push(ManifestEntry {
            path: "js/app.js".to_string(),
            content_type: "text/javascript".to_string(),
            pattern: Some("*.js".to_string()),
        });

        let json = manifest.to_json().unwrap();
        assert!(json.contains(r#""version": 1"#));
        assert!(json.contains(r#""path": "js/app.js""#));
        assert!(json.contains(r#""content_type": "text/javascript""#));
        assert!(json.contains(r#""pattern": "*.js""#));
    }

    #[test]
    fn test_fallback_entry_omits_pattern() {
        let mut manifest = AssetManifest::new();
        manifest.push(ManifestEntry {
            path: "Makefile".to_string(),
            content_type: "application/octet-stream".to_string(),
            pattern: None,
        });
        let json = manifest.to_json().unwrap();
        assert!(!json.contains("pattern"));
    }

    #[test]
    fn test_round_trip() {
        let mut manifest = AssetManifest::new();
        manifest.push(ManifestEntry {
            path: "css/site.css".to_string(),
            content_type: "text/css".to_string(),
            pattern: Some("*.css".to_string()),
        });

        let parsed: AssetManifest = serde_json::from_str(&manifest.to_json().unwrap()).unwrap();
        assert_eq!(parsed.version, MANIFEST_VERSION);
        assert_eq!(parsed.assets, manifest.assets);
    }
}
