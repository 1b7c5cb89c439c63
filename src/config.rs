//! Site Configuration
//!
//! A YAML base file, an optional `*.local.yaml` override deep-merged on top,
//! then environment variables. Missing files fall back to defaults; the
//! `aesthetics` section goes through the validated merge and can never make
//! startup fail.

use serde::{Deserialize, Serialize};
use serde_yaml::Value as YamlValue;
use std::env;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, info, warn};

use crate::aesthetics::{merge_aesthetic_config_value, AestheticConfig, DEFAULT_AESTHETIC_CONFIG};
use crate::error::SiteError;
use crate::i18n::Locale;

pub const DEFAULT_CONFIG_PATH: &str = "site.yaml";
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SiteConfig {
    pub bind_addr: String,
    pub default_locale: Locale,
    pub aesthetics: AestheticConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            default_locale: Locale::En,
            aesthetics: DEFAULT_AESTHETIC_CONFIG,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct SiteConfigFile {
    #[serde(default)]
    bind_addr: Option<String>,
    #[serde(default)]
    default_locale: Option<String>,
    #[serde(default)]
    aesthetics: Option<serde_json::Value>,
}

impl SiteConfig {
    /// Load from `CV_CONFIG` (default `site.yaml`), its local override, and env.
    pub async fn load() -> Result<Self, SiteError> {
        let base = PathBuf::from(env::var("CV_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string()));
        let custom = local_override_path(&base);

        let mut config = Self::load_with_customization(&base, &custom).await?;
        config.apply_env(|key| env::var(key).ok())?;

        info!(
            "Site config loaded: bind={} locale={} aesthetics_enabled={}",
            config.bind_addr, config.default_locale, config.aesthetics.enabled
        );
        Ok(config)
    }

    /// Base file overlaid with `custom`; either may be absent.
    pub async fn load_with_customization(base: &Path, custom: &Path) -> Result<Self, SiteError> {
        let mut merged = read_yaml(base).await?.unwrap_or(YamlValue::Null);
        if let Some(overlay) = read_yaml(custom).await? {
            debug!("Applying config override from {:?}", custom);
            merge_yaml(&mut merged, overlay);
        }

        if merged.is_null() {
            return Ok(Self::default());
        }

        let file: SiteConfigFile = serde_yaml::from_value(merged).map_err(|source| SiteError::Config {
            path: base.to_path_buf(),
            source,
        })?;
        Self::from_file(file)
    }

    fn from_file(file: SiteConfigFile) -> Result<Self, SiteError> {
        let mut config = Self::default();
        if let Some(addr) = file.bind_addr {
            config.bind_addr = addr;
        }
        if let Some(tag) = file.default_locale {
            config.default_locale = Locale::parse(&tag).ok_or(SiteError::UnknownLocale(tag))?;
        }
        if let Some(aesthetics) = file.aesthetics {
            config.aesthetics = merge_aesthetic_config_value(&aesthetics);
        }
        Ok(config)
    }

    /// Environment overrides, read through `lookup` so tests need not touch
    /// the process environment.
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<(), SiteError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(addr) = lookup("CV_BIND_ADDR") {
            self.bind_addr = addr;
        }
        if let Some(tag) = lookup("CV_DEFAULT_LOCALE") {
            self.default_locale = Locale::parse(&tag).ok_or(SiteError::UnknownLocale(tag))?;
        }
        if let Some(flag) = lookup("CV_AESTHETICS_ENABLED") {
            match parse_flag(&flag) {
                Some(enabled) => self.aesthetics.enabled = enabled,
                None => warn!("Ignoring CV_AESTHETICS_ENABLED={:?}: expected true/false", flag),
            }
        }
        Ok(())
    }
}

/// `site.yaml` -> `site.local.yaml`
pub fn local_override_path(base: &Path) -> PathBuf {
    base.with_extension("local.yaml")
}

async fn read_yaml(path: &Path) -> Result<Option<YamlValue>, SiteError> {
    let content = match fs::read_to_string(path).await {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            debug!("Config file {:?} not found, skipping", path);
            return Ok(None);
        }
        Err(source) => {
            return Err(SiteError::Io {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    serde_yaml::from_str(&content)
        .map(Some)
        .map_err(|source| SiteError::Config {
            path: path.to_path_buf(),
            source,
        })
}

/// Deep merge: mappings merge key by key, anything else is replaced.
fn merge_yaml(base: &mut YamlValue, overlay: YamlValue) {
    match (base, overlay) {
        (YamlValue::Mapping(base_map), YamlValue::Mapping(overlay_map)) => {
            for (key, value) in overlay_map {
                match base_map.get_mut(&key) {
                    Some(existing) => merge_yaml(existing, value),
                    None => {
                        base_map.insert(key, value);
                    }
                }
            }
        }
        (slot, value) => *slot = value,
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_missing_files_yield_defaults() {
        let dir = tempdir().unwrap();
        let base = dir.path().join("site.yaml");
        let loaded = SiteConfig::load_with_customization(&base, &local_override_path(&base))
            .await
            .unwrap();
        assert_eq!(loaded, SiteConfig::default());
    }

    #[tokio::test]
    async fn test_override_wins_over_base() {
        let dir = tempdir().unwrap();
        let base = dir.path().join("site.yaml");
        let custom = local_override_path(&base);
        std::fs::write(
            &base,
            "bind_addr: \"127.0.0.1:8080\"\ndefault_locale: zh-hk\naesthetics:\n  intensity:\n    glow: 0.2\n    tilt: 0.1\n",
        )
        .unwrap();
        std::fs::write(&custom, "aesthetics:\n  intensity:\n    glow: 0.9\n").unwrap();

        let loaded = SiteConfig::load_with_customization(&base, &custom).await.unwrap();
        assert_eq!(loaded.bind_addr, "127.0.0.1:8080");
        assert_eq!(loaded.default_locale, Locale::ZhHk);
        assert_eq!(loaded.aesthetics.intensity.glow, 0.9);
        assert_eq!(loaded.aesthetics.intensity.tilt, 0.1);
    }

    #[tokio::test]
    async fn test_invalid_aesthetics_degrade_to_default() {
        let dir = tempdir().unwrap();
        let base = dir.path().join("site.yaml");
        std::fs::write(&base, "aesthetics:\n  intensity:\n    scatter: 1.5\n").unwrap();

        let loaded = SiteConfig::load_with_customization(&base, &local_override_path(&base))
            .await
            .unwrap();
        assert_eq!(loaded.aesthetics, DEFAULT_AESTHETIC_CONFIG);
    }

    #[tokio::test]
    async fn test_malformed_yaml_is_an_error() {
        let dir = tempdir().unwrap();
        let base = dir.path().join("site.yaml");
        std::fs::write(&base, "bind_addr: [unclosed\n").unwrap();

        let result = SiteConfig::load_with_customization(&base, &local_override_path(&base)).await;
        assert!(matches!(result, Err(SiteError::Config { .. })));
    }

    #[tokio::test]
    async fn test_unknown_locale_is_an_error() {
        let dir = tempdir().unwrap();
        let base = dir.path().join("site.yaml");
        std::fs::write(&base, "default_locale: fr\n").unwrap();

        let result = SiteConfig::load_with_customization(&base, &local_override_path(&base)).await;
        assert!(matches!(result, Err(SiteError::UnknownLocale(tag)) if tag == "fr"));
    }

    #[test]
    fn test_env_overrides() {
        let vars: HashMap<&str, &str> = HashMap::from([
            ("CV_BIND_ADDR", "127.0.0.1:4000"),
            ("CV_DEFAULT_LOCALE", "zh-hk"),
            ("CV_AESTHETICS_ENABLED", "off"),
        ]);
        let mut config = SiteConfig::default();
        config
            .apply_env(|key| vars.get(key).map(|v| v.to_string()))
            .unwrap();

        assert_eq!(config.bind_addr, "127.0.0.1:4000");
        assert_eq!(config.default_locale, Locale::ZhHk);
        assert!(!config.aesthetics.enabled);
    }

    #[test]
    fn test_env_bad_flag_is_ignored() {
        let mut config = SiteConfig::default();
        config
            .apply_env(|key| (key == "CV_AESTHETICS_ENABLED").then(|| "maybe".to_string()))
            .unwrap();
        assert!(config.aesthetics.enabled);
    }

    #[test]
    fn test_local_override_path() {
        assert_eq!(local_override_path(Path::new("conf/site.yaml")), PathBuf::from("conf/site.local.yaml"));
    }

    #[test]
    fn test_merge_yaml_nested() {
        let mut base: YamlValue = serde_yaml::from_str("a: 1\nb:\n  c: 2\n  d: 3\n").unwrap();
        let overlay: YamlValue = serde_yaml::from_str("b:\n  d: 4\ne: 5\n").unwrap();
        merge_yaml(&mut base, overlay);
        let expected: YamlValue = serde_yaml::from_str("a: 1\nb:\n  c: 2\n  d: 4\ne: 5\n").unwrap();
        assert_eq!(base, expected);
    }
}
