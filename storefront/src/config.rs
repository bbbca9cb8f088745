//! Storefront configuration.

use brew_observability::LoggingConfig;
use serde::{Deserialize, Serialize};

use crate::motion::Stagger;

const EMBEDDED: &str = include_str!("../storefront.toml");

/// Top-level storefront settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StorefrontConfig {
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub motion: MotionConfig,
}

impl StorefrontConfig {
    /// Parse a TOML settings document.
    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Settings compiled into the binary.
    pub fn embedded() -> Result<Self, toml::de::Error> {
        Self::from_toml_str(EMBEDDED)
    }
}

/// `[store]`: names and copy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    pub name: String,
    /// Document title.
    pub title: String,
    /// Meta description.
    pub description: String,
    /// Product list heading.
    pub heading: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            name: "Brew".to_string(),
            title: "Brew Coffee".to_string(),
            description: String::new(),
            heading: "Select a Coffee".to_string(),
        }
    }
}

/// `[motion]`: enter/exit transition timing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MotionConfig {
    /// Turn all transitions off.
    pub enabled: bool,
    /// Length of one enter animation.
    pub duration_ms: u32,
    /// Time the leaving page gets before navigation happens.
    pub exit_ms: u32,
    /// Delay before the first product card appears.
    pub list_delay_ms: u32,
    /// Gap between successive product cards.
    pub list_stagger_ms: u32,
    /// Gap between successive detail page blocks.
    pub detail_stagger_ms: u32,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            duration_ms: 600,
            exit_ms: 200,
            list_delay_ms: 200,
            list_stagger_ms: 200,
            detail_stagger_ms: 70,
        }
    }
}

impl MotionConfig {
    pub fn list_stagger(&self) -> Stagger {
        Stagger::new(self.list_delay_ms, self.list_stagger_ms)
    }

    pub fn detail_stagger(&self) -> Stagger {
        Stagger::new(0, self.detail_stagger_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use brew_observability::{LogFormat, LogLevel};

    #[test]
    fn test_embedded_config_parses() {
        let config = StorefrontConfig::embedded().unwrap();
        assert_eq!(config.store.heading, "Select a Coffee");
        assert_eq!(config.logging.level, LogLevel::Debug);
        assert_eq!(config.logging.format, LogFormat::Human);
        assert!(config.motion.enabled);
        assert_eq!(config.motion.detail_stagger_ms, 70);
    }

    #[test]
    fn test_missing_sections_use_defaults() {
        let config = StorefrontConfig::from_toml_str("[motion]\nenabled = false\n").unwrap();
        assert_eq!(config.store, StoreConfig::default());
        assert!(!config.motion.enabled);
        assert_eq!(config.motion.exit_ms, 200);
    }

    #[test]
    fn test_staggers() {
        let motion = MotionConfig::default();
        assert_eq!(motion.list_stagger().delay_for(2), 600);
        assert_eq!(motion.detail_stagger().delay_for(3), 210);
    }
}
