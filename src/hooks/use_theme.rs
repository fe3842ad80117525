use yew::prelude::*;

use crate::components::dom_view::apply_theme_to_document;
use crate::config::ThemeConfig;
use crate::controller::resolve_preferred_theme;
use crate::models::Theme;
use crate::services::{LocalThemeStore, MediaQueryPreference, ThemeStore};

/// Handle returned by `use_theme` hook
#[derive(Clone, PartialEq)]
pub struct ThemeHandle {
    pub theme: Theme,
    pub toggle: Callback<()>,
}

/// Theme state for Yew-rendered pages, persisted to localStorage
#[hook]
pub fn use_theme(config: ThemeConfig) -> ThemeHandle {
    // Persisted preference, else system preference
    let theme = {
        let config = config.clone();
        use_state(move || {
            let signal = MediaQueryPreference::new(config.dark_media_query.clone());
            resolve_preferred_theme(&LocalThemeStore, &signal, &config.storage_key)
        })
    };

    // Effect: reflect on <html> and persist
    use_effect_with(*theme, move |theme| {
        if let Err(e) = apply_theme_to_document(&config.root_attribute, *theme) {
            log::warn!("Failed to set theme attribute: {e}");
        }
        if let Err(e) = LocalThemeStore.set(&config.storage_key, *theme) {
            log::warn!("Failed to save theme: {e}");
        }
        || ()
    });

    let toggle = {
        let theme = theme.clone();
        Callback::from(move |()| theme.set(theme.toggled()))
    };

    ThemeHandle {
        theme: *theme,
        toggle,
    }
}
