//! Share feature settings.
//!
//! Read once at startup: from `LocalStorage` in the browser and from
//! `<config dir>/nextsound/share.json` on native targets. Anything missing
//! or unreadable falls back to the defaults below.

use dioxus::logger::tracing::{info, warn};
use serde::{Deserialize, Serialize};

#[cfg(target_arch = "wasm32")]
use gloo_storage::{errors::StorageError, LocalStorage, Storage};

#[cfg(target_arch = "wasm32")]
const CONFIG_KEY: &str = "nextsound.share_config";

pub const DEFAULT_MAX_SELECTION: usize = 10;
pub const DEFAULT_DISMISS_ANIMATION_MS: u64 = 300;
pub const DEFAULT_BRAND: &str = "NextSound";

#[derive(Debug)]
pub enum ConfigError {
    NotFound,
    Io(String),
    Parse(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::NotFound => write!(f, "no share config found"),
            ConfigError::Io(msg) => write!(f, "failed to read share config: {msg}"),
            ConfigError::Parse(msg) => write!(f, "invalid share config: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShareConfig {
    #[serde(default = "default_max_selection")]
    pub max_selection: usize,
    #[serde(default = "default_toast_ttl_ms")]
    pub toast_ttl_ms: u64,
    #[serde(default = "default_dismiss_animation_ms")]
    pub dismiss_animation_ms: u64,
    #[serde(default = "default_brand")]
    pub brand: String,
}

fn default_max_selection() -> usize {
    DEFAULT_MAX_SELECTION
}

fn default_toast_ttl_ms() -> u64 {
    crate::toast::DEFAULT_TOAST_TTL_MS
}

fn default_dismiss_animation_ms() -> u64 {
    DEFAULT_DISMISS_ANIMATION_MS
}

fn default_brand() -> String {
    DEFAULT_BRAND.to_string()
}

impl Default for ShareConfig {
    fn default() -> Self {
        Self {
            max_selection: default_max_selection(),
            toast_ttl_ms: default_toast_ttl_ms(),
            dismiss_animation_ms: default_dismiss_animation_ms(),
            brand: default_brand(),
        }
    }
}

impl ShareConfig {
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: ShareConfig =
            serde_json::from_str(raw).map_err(|e| ConfigError::Parse(e.to_string()))?;
        Ok(config.normalized())
    }

    /// A selection limit of zero would make every selection fail.
    fn normalized(mut self) -> Self {
        if self.max_selection == 0 {
            warn!("max_selection of 0 is not usable; using {DEFAULT_MAX_SELECTION}");
            self.max_selection = DEFAULT_MAX_SELECTION;
        }
        if self.brand.trim().is_empty() {
            self.brand = default_brand();
        }
        self
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn read_config() -> Result<ShareConfig, ConfigError> {
    let path = dirs::config_dir()
        .ok_or(ConfigError::NotFound)?
        .join("nextsound")
        .join("share.json");
    let raw = match std::fs::read_to_string(&path) {
        Ok(raw) => raw,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Err(ConfigError::NotFound),
        Err(e) => return Err(ConfigError::Io(format!("{}: {e}", path.display()))),
    };
    ShareConfig::from_json(&raw)
}

#[cfg(target_arch = "wasm32")]
fn read_config() -> Result<ShareConfig, ConfigError> {
    let config: ShareConfig = LocalStorage::get(CONFIG_KEY).map_err(|e| match e {
        StorageError::KeyNotFound(_) => ConfigError::NotFound,
        StorageError::SerdeError(e) => ConfigError::Parse(e.to_string()),
        other => ConfigError::Io(other.to_string()),
    })?;
    Ok(config.normalized())
}

pub fn load_config() -> ShareConfig {
    match read_config() {
        Ok(config) => {
            info!(?config, "loaded share config");
            config
        }
        Err(ConfigError::NotFound) => ShareConfig::default(),
        Err(e) => {
            warn!("{e}; using defaults");
            ShareConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_use_defaults() {
        let config = ShareConfig::from_json(r#"{ "max_selection": 4 }"#).expect("parses");
        assert_eq!(config.max_selection, 4);
        assert_eq!(config.toast_ttl_ms, 3000);
        assert_eq!(config.dismiss_animation_ms, 300);
        assert_eq!(config.brand, "NextSound");
    }

    #[test]
    fn zero_limit_and_blank_brand_are_replaced() {
        let config =
            ShareConfig::from_json(r#"{ "max_selection": 0, "brand": " " }"#).expect("parses");
        assert_eq!(config.max_selection, DEFAULT_MAX_SELECTION);
        assert_eq!(config.brand, DEFAULT_BRAND);
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let err = ShareConfig::from_json("{ nope").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
