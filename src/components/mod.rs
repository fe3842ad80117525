pub mod dom_view;
pub mod theme_toggle;

pub use dom_view::DomThemeView;
pub use theme_toggle::ThemeToggle;
