use gloo::events::EventListener;
use theme_toggle::components::DomThemeView;
use theme_toggle::components::dom_view::is_parsed;
use theme_toggle::services::{LocalThemeStore, MediaQueryPreference};
use theme_toggle::{ThemeConfig, bootstrap};

fn start() {
    let config = ThemeConfig::default();
    let signal = MediaQueryPreference::new(config.dark_media_query.clone());
    // The click listener owns the controller from here on
    let _controller = bootstrap(
        LocalThemeStore,
        signal,
        DomThemeView::from_document(&config),
        &config,
    );
}

fn main() {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Warn
    };
    if let Err(e) = console_log::init_with_level(level) {
        web_sys::console::warn_1(&format!("Failed to initialise logging: {e}").into());
    }

    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        log::warn!("No document available, theme toggle disabled");
        return;
    };

    if is_parsed(&document.ready_state()) {
        start();
    } else {
        EventListener::once(&document, "DOMContentLoaded", |_| start()).forget();
    }
}
