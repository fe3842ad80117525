use yew::prelude::*;

use crate::config::ThemeConfig;
use crate::hooks::use_theme::use_theme;

#[derive(Properties, PartialEq)]
pub struct ThemeToggleProps {
    #[prop_or_default]
    pub config: ThemeConfig,
}

/// Theme toggle button for Yew apps. Renders the same ids and icon classes
/// as the server-rendered markup `DomThemeView` binds to, so only one of the
/// two should be used on a page.
#[function_component(ThemeToggle)]
pub fn theme_toggle(props: &ThemeToggleProps) -> Html {
    let theme_handle = use_theme(props.config.clone());
    let theme = theme_handle.theme;

    let label = theme.toggle_label();
    let icon_class = classes!("bi", theme.icon_class(&props.config).to_string());

    let onclick = {
        let toggle = theme_handle.toggle;
        Callback::from(move |_| toggle.emit(()))
    };

    html! {
        <button
            id={props.config.toggle_id.clone()}
            class="theme-toggle"
            type="button"
            {onclick}
            aria-label={label}
        >
            <i id={props.config.icon_id.clone()} class={icon_class}></i>
        </button>
    }
}
