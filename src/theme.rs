//! Theme names and their fixed cycle order.
//!
//! DESIGN
//! ======
//! `ThemeName::ALL` is the single source of cycle order. Everything that
//! advances or previews a theme goes through it rather than matching on
//! string labels.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// One of the three supported page themes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeName {
    #[default]
    Light,
    Dark,
    Synthwave,
}

/// Which of the three toggle icons is visible.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Icon {
    Moon,
    Sun,
    Bolt,
}

impl Icon {
    pub const ALL: [Icon; 3] = [Icon::Moon, Icon::Sun, Icon::Bolt];
}

/// Returned when a stored or configured label is not a known theme.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown theme: {0:?}")]
pub struct ParseThemeError(pub String);

impl ThemeName {
    /// Cycle order: light -> dark -> synthwave -> light.
    pub const ALL: [ThemeName; 3] = [ThemeName::Light, ThemeName::Dark, ThemeName::Synthwave];

    /// The label written to the document attribute and to storage.
    pub fn as_str(self) -> &'static str {
        match self {
            ThemeName::Light => "light",
            ThemeName::Dark => "dark",
            ThemeName::Synthwave => "synthwave",
        }
    }

    /// Position within [`ThemeName::ALL`].
    pub fn position(self) -> usize {
        Self::ALL.iter().position(|t| *t == self).unwrap_or(0)
    }

    /// The theme one step further along the cycle.
    pub fn next(self) -> ThemeName {
        Self::ALL[(self.position() + 1) % Self::ALL.len()]
    }

    /// The icon shown while this theme is active.
    ///
    /// The icon previews where the next click goes, not the current theme:
    /// light shows the moon, dark shows the bolt, synthwave shows the sun.
    pub fn preview_icon(self) -> Icon {
        match self.next() {
            ThemeName::Dark => Icon::Moon,
            ThemeName::Synthwave => Icon::Bolt,
            ThemeName::Light => Icon::Sun,
        }
    }

    /// Parse a stored label, treating anything unrecognized as no preference.
    pub fn from_stored(raw: Option<&str>) -> Option<ThemeName> {
        raw.and_then(|value| value.parse().ok())
    }
}

impl FromStr for ThemeName {
    type Err = ParseThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| ParseThemeError(s.to_owned()))
    }
}

impl fmt::Display for ThemeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
