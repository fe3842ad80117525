use serde::{Deserialize, Serialize};

use crate::config::ThemeConfig;
use crate::models::error::ThemeError;

/// Light or dark color scheme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Literal stored in localStorage and written to the root attribute
    pub const fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// The other theme
    pub const fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Persisted choice wins; otherwise follow the system hint.
    pub const fn resolve(persisted: Option<Self>, prefers_dark: bool) -> Self {
        match persisted {
            Some(theme) => theme,
            None if prefers_dark => Theme::Dark,
            None => Theme::Light,
        }
    }

    /// Reads an applied attribute value. Anything but `"dark"` counts as light.
    pub fn from_attribute(value: Option<&str>) -> Self {
        match value {
            Some(value) if value == Theme::Dark.as_str() => Theme::Dark,
            _ => Theme::Light,
        }
    }

    /// Icon class for this theme; the icon shows where a click would take you.
    pub fn icon_class(self, config: &ThemeConfig) -> &str {
        match self {
            Theme::Dark => &config.sun_icon_class,
            Theme::Light => &config.moon_icon_class,
        }
    }

    /// Icon class that must be absent while this theme is applied
    pub fn inactive_icon_class(self, config: &ThemeConfig) -> &str {
        self.toggled().icon_class(config)
    }

    /// Accessible label describing the action a click performs
    pub const fn toggle_label(self) -> &'static str {
        match self {
            Theme::Dark => "Switch to light mode",
            Theme::Light => "Switch to dark mode",
        }
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Theme {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(ThemeError::UnknownTheme(other.to_string())),
        }
    }
}
