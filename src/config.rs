//! Runtime Configuration
//!
//! The host page may define `window.__AVATAR_CONFIG__` before the wasm bundle
//! loads; any field it omits keeps its default.
//!
//! ```html
//! <script>
//!   window.__AVATAR_CONFIG__ = { api_base: "https://avatar.example.com" };
//! </script>
//! ```

use leptos::prelude::*;
use serde::{Deserialize, Serialize};

/// Name of the global object read by [`AppConfig::from_window`].
pub const CONFIG_GLOBAL: &str = "__AVATAR_CONFIG__";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Prefix for every backend call. Empty means same origin.
    pub api_base: String,
    /// Image model sent with character generation requests
    pub image_model: String,
    /// Display name attached to uploaded characters
    pub upload_name: String,
    /// Display name attached to composed avatars
    pub avatar_name: String,
    /// Voice preselected in the audio stage
    pub default_voice: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            image_model: "imagen4".to_string(),
            upload_name: "Uploaded Character".to_string(),
            avatar_name: "My Talking Avatar".to_string(),
            default_voice: "Rachel".to_string(),
        }
    }
}

impl AppConfig {
    /// Read the config object from the host page, falling back to defaults.
    pub fn from_window() -> Self {
        let Some(window) = web_sys::window() else {
            return Self::default();
        };

        let value = match js_sys::Reflect::get(&window, &CONFIG_GLOBAL.into()) {
            Ok(value) if !value.is_undefined() && !value.is_null() => value,
            _ => return Self::default(),
        };

        serde_wasm_bindgen::from_value(value).unwrap_or_else(|e| {
            log::warn!("Ignoring malformed {}: {}", CONFIG_GLOBAL, e);
            Self::default()
        })
    }

    /// Parse a JSON config document.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

pub fn provide_config(config: AppConfig) {
    provide_context(config);
}

pub fn use_config() -> AppConfig {
    use_context::<AppConfig>().unwrap_or_default()
}
