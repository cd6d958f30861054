//! Configuration management for ria.
//!
//! Configuration is read from `~/.config/ria/config.toml` at startup.
//! If the file doesn't exist, a default configuration with comments is created.

pub mod explore;
pub mod network;

pub use explore::ExploreConfig;
pub use network::NetworkConfig;

use serde::Deserialize;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Main configuration struct.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub explore: ExploreConfig,
    pub network: NetworkConfig,
}

impl Config {
    /// Load configuration from the default path.
    ///
    /// If the config file doesn't exist, creates a default one with comments.
    /// If the config file exists but is invalid, returns an error.
    /// Missing fields in the config file will use default values.
    pub fn load() -> Result<Self, ConfigError> {
        let config_path = Self::default_config_path()?;
        Self::load_from(&config_path)
    }

    pub fn load_from(config_path: &Path) -> Result<Self, ConfigError> {
        if !config_path.exists() {
            Self::create_default_config(config_path)?;
            return Ok(Self::default());
        }

        let content = fs::read_to_string(config_path).map_err(|e| ConfigError::Io {
            path: config_path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: config_path.to_path_buf(),
            source: e,
        })?;

        Ok(config)
    }

    /// Get the default config file path: `~/.config/ria/config.toml`
    pub fn default_config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
        Ok(config_dir.join("ria").join("config.toml"))
    }

    fn create_default_config(path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| ConfigError::Io {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let mut file = fs::File::create(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        file.write_all(Self::default_config_content().as_bytes())
            .map_err(|e| ConfigError::Io {
                path: path.to_path_buf(),
                source: e,
            })?;

        Ok(())
    }

    /// Generate the default config file content with comments.
    fn default_config_content() -> String {
        r##"# ria configuration

[explore]
# Category order of the daily feed, repeated until every pool is drained.
# Categories: product, story, place, moodboard
template = ["product", "story", "place", "product", "moodboard", "story"]

# Locale used for the date label. Unknown locales fall back to Portuguese
# weekday and month names.
locale = "pt_PT"
label_format = "%A, %-d de %B"

[explore.caps]
product = 4
story = 3
place = 3
moodboard = 1

[network]
timeout_secs = 12
user_agent = "RemarAoTacho/1.0"
wikipedia_endpoint = "https://pt.wikipedia.org/api/rest_v1/page/summary"
commons_endpoint = "https://commons.wikimedia.org/w/api.php"
overpass_endpoint = "https://overpass-api.de/api/interpreter"
overpass_fallback_endpoint = "https://overpass.kumi.systems/api/interpreter"

# Overpass retries: attempt N waits N * retry_backoff_ms before the next one
overpass_attempts = 3
retry_backoff_ms = 2000

# Place results are cached per set of place types
places_cache_ttl_secs = 300

# Width requested for Commons thumbnails
image_width = 1200
"##
        .to_string()
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Could not determine config directory")]
    NoConfigDir,

    #[error("Failed to read/write config file at {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::explore::ContentCategory;

    #[test]
    fn test_default_config_deserializes() {
        let content = Config::default_config_content();
        let config: Config = toml::from_str(&content).expect("Default config should be valid TOML");

        assert_eq!(config.explore.template.len(), 6);
        assert_eq!(config.explore.caps.product, 4);
        assert_eq!(config.network.overpass_attempts, 3);
    }

    #[test]
    fn test_partial_config() {
        let content = r##"
[explore]
template = ["moodboard"]

[network]
timeout_secs = 3
"##;
        let config: Config = toml::from_str(content).expect("Partial config should work");

        assert_eq!(config.explore.template, vec![ContentCategory::Moodboard]);
        assert_eq!(config.network.timeout_secs, 3);
        // Defaults for the rest
        assert_eq!(config.explore.caps.story, 3);
        assert_eq!(config.network.image_width, 1200);
    }

    #[test]
    fn test_empty_config() {
        let config: Config = toml::from_str("").expect("Empty config should work");
        assert_eq!(config.explore.locale, "pt_PT");
        assert_eq!(config.network.user_agent, "RemarAoTacho/1.0");
    }

    #[test]
    fn test_invalid_category_is_rejected() {
        let content = r#"
[explore]
template = ["video"]
"#;
        assert!(toml::from_str::<Config>(content).is_err());
    }

    #[test]
    fn test_load_creates_default_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ria").join("config.toml");

        let config = Config::load_from(&path).unwrap();
        assert!(path.exists());
        assert_eq!(config.explore.caps, crate::explore::CategoryCaps::default());

        // Second load parses the file that was written
        let reloaded = Config::load_from(&path).unwrap();
        assert_eq!(reloaded.network.timeout_secs, 12);
    }

    #[test]
    fn test_load_reports_parse_errors() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[explore\n").unwrap();

        assert!(matches!(
            Config::load_from(&path),
            Err(ConfigError::Parse { .. })
        ));
    }
}
