/// Configuration constants for the theme toggle
pub struct Config;

impl Config {
    /// localStorage key holding the persisted theme
    pub const STORAGE_KEY: &'static str = "theme";

    /// Attribute on `<html>` read by the page's stylesheet
    pub const ROOT_ATTRIBUTE: &'static str = "data-bs-theme";

    /// Id of the clickable toggle control
    pub const TOGGLE_ID: &'static str = "theme-toggle";

    /// Id of the icon indicator inside the toggle
    pub const ICON_ID: &'static str = "theme-icon";

    /// Icon class shown while dark mode is applied
    pub const SUN_ICON_CLASS: &'static str = "bi-sun-fill";

    /// Icon class shown while light mode is applied
    pub const MOON_ICON_CLASS: &'static str = "bi-moon-fill";

    /// Media query signalling a system-wide dark preference
    pub const DARK_MEDIA_QUERY: &'static str = "(prefers-color-scheme: dark)";
}

/// Runtime configuration, defaulting to the [`Config`] constants.
///
/// Pages using different ids or icon sets can override individual fields:
///
/// ```rust
/// use theme_toggle::config::ThemeConfig;
///
/// let config = ThemeConfig {
///     toggle_id: "dark-mode-button".to_string(),
///     ..ThemeConfig::default()
/// };
/// assert_eq!(config.storage_key, "theme");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeConfig {
    pub storage_key: String,
    pub root_attribute: String,
    pub toggle_id: String,
    pub icon_id: String,
    pub sun_icon_class: String,
    pub moon_icon_class: String,
    pub dark_media_query: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            storage_key: Config::STORAGE_KEY.to_string(),
            root_attribute: Config::ROOT_ATTRIBUTE.to_string(),
            toggle_id: Config::TOGGLE_ID.to_string(),
            icon_id: Config::ICON_ID.to_string(),
            sun_icon_class: Config::SUN_ICON_CLASS.to_string(),
            moon_icon_class: Config::MOON_ICON_CLASS.to_string(),
            dark_media_query: Config::DARK_MEDIA_QUERY.to_string(),
        }
    }
}
