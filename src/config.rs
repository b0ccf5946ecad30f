//! Storage key, document attribute, and element ids the controller uses.
//!
//! SYSTEM CONTEXT
//! ==============
//! The host page owns the markup. Defaults match the conventional toggle
//! markup; a page can override any field with a JSON object, and fields it
//! omits keep their defaults.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::theme::{Icon, ThemeName};

pub const DEFAULT_STORAGE_KEY: &str = "pref-theme";
pub const DEFAULT_ATTRIBUTE: &str = "data-theme";
pub const DEFAULT_TRIGGER_ID: &str = "theme-toggle";

/// Element ids of the three toggle icons.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct IconIds {
    pub moon: String,
    pub sun: String,
    pub bolt: String,
}

impl Default for IconIds {
    fn default() -> Self {
        Self {
            moon: "moon".into(),
            sun: "sun".into(),
            bolt: "synthwave".into(),
        }
    }
}

impl IconIds {
    pub fn id(&self, icon: Icon) -> &str {
        match icon {
            Icon::Moon => &self.moon,
            Icon::Sun => &self.sun,
            Icon::Bolt => &self.bolt,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Key of the persisted preference entry.
    pub storage_key: String,
    /// Attribute set on the document root element.
    pub attribute: String,
    pub trigger_id: String,
    pub icons: IconIds,
    /// Theme used when nothing valid is persisted.
    pub default_theme: ThemeName,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.into(),
            attribute: DEFAULT_ATTRIBUTE.into(),
            trigger_id: DEFAULT_TRIGGER_ID.into(),
            icons: IconIds::default(),
            default_theme: ThemeName::Light,
        }
    }
}

impl ThemeConfig {
    /// Parse a JSON override object.
    ///
    /// # Errors
    ///
    /// Returns the `serde_json` error when `raw` is not a valid object of
    /// this shape.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    /// Parse an optional override, falling back to defaults on absence or
    /// malformed input.
    pub fn from_optional_json(raw: Option<&str>) -> Self {
        let Some(raw) = raw else {
            return Self::default();
        };
        match Self::from_json(raw) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("theme config ignored: {e}");
                Self::default()
            }
        }
    }
}
