use std::cell::RefCell;
use std::rc::Rc;

use crate::config::ThemeConfig;
use crate::models::{Theme, ThemeError};
use crate::services::{PreferenceSignal, ThemeStore};

pub type ClickHandler = Box<dyn FnMut()>;

/// The page elements the controller drives: the toggle control, its icon
/// indicator and the document root carrying the theme attribute.
pub trait ThemeView {
    /// Theme currently reflected on the document root
    fn current_applied_theme(&self) -> Theme;

    fn apply_theme_attribute(&mut self, theme: Theme) -> Result<(), ThemeError>;

    /// Show exactly the glyph belonging to `theme`
    fn set_icon_state(&mut self, theme: Theme) -> Result<(), ThemeError>;

    fn set_accessible_label(&mut self, label: &str) -> Result<(), ThemeError>;

    /// Register the toggle's click handler
    fn on_click(&mut self, handler: ClickHandler);
}

/// Controller shared between the page and the click handler
pub type SharedController<S, P, V> = Rc<RefCell<ThemeController<S, P, V>>>;

/// Resolves, applies, persists and toggles the page theme.
pub struct ThemeController<S, P, V> {
    store: S,
    signal: P,
    view: V,
    storage_key: String,
}

/// Persisted theme if there is one, otherwise the system hint.
pub fn resolve_preferred_theme(
    store: &impl ThemeStore,
    signal: &impl PreferenceSignal,
    storage_key: &str,
) -> Theme {
    let persisted = store.get(storage_key);
    let theme = Theme::resolve(persisted, signal.prefers_dark());
    match persisted {
        Some(_) => log::debug!("Using persisted theme: {theme}"),
        None => log::debug!("No persisted theme, following system preference: {theme}"),
    }
    theme
}

impl<S, P, V> ThemeController<S, P, V>
where
    S: ThemeStore,
    P: PreferenceSignal,
    V: ThemeView,
{
    pub fn new(store: S, signal: P, view: V, config: &ThemeConfig) -> Self {
        Self {
            store,
            signal,
            view,
            storage_key: config.storage_key.clone(),
        }
    }

    pub fn resolve_preferred_theme(&self) -> Theme {
        resolve_preferred_theme(&self.store, &self.signal, &self.storage_key)
    }

    /// Reflect `theme` on the page and persist it.
    ///
    /// Each step is attempted regardless of earlier failures; failures are
    /// logged and never reach the caller.
    pub fn apply_theme(&mut self, theme: Theme) {
        if let Err(e) = self.view.apply_theme_attribute(theme) {
            log::warn!("Failed to set theme attribute: {e}");
        }
        if let Err(e) = self.store.set(&self.storage_key, theme) {
            log::warn!("Failed to save theme: {e}");
        }
        if let Err(e) = self.view.set_icon_state(theme) {
            log::warn!("Failed to update theme icon: {e}");
        }
        if let Err(e) = self.view.set_accessible_label(theme.toggle_label()) {
            log::warn!("Failed to update toggle label: {e}");
        }
        log::debug!("Applied theme: {theme}");
    }

    /// Resolve the initial theme and apply it
    pub fn initialize(&mut self) -> Theme {
        let theme = self.resolve_preferred_theme();
        self.apply_theme(theme);
        theme
    }

    /// Flip the theme read back from the document root, not from storage.
    pub fn on_toggle_clicked(&mut self) -> Theme {
        let theme = self.view.current_applied_theme().toggled();
        self.apply_theme(theme);
        theme
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn view(&self) -> &V {
        &self.view
    }
}

impl<S, P, V> ThemeController<S, P, V>
where
    S: ThemeStore + 'static,
    P: PreferenceSignal + 'static,
    V: ThemeView + 'static,
{
    /// Initialize and wire the toggle's click handler.
    ///
    /// The handler holds the controller, so a view that keeps its handler
    /// keeps the controller alive for as long as the page.
    pub fn mount(self) -> SharedController<S, P, V> {
        let shared = Rc::new(RefCell::new(self));
        shared.borrow_mut().initialize();

        let handler: ClickHandler = {
            let controller = Rc::clone(&shared);
            Box::new(move || {
                controller.borrow_mut().on_toggle_clicked();
            })
        };
        shared.borrow_mut().view.on_click(handler);
        shared
    }
}

/// Mount a controller over `view`, or log and do nothing when the view
/// could not be built (e.g. the toggle is missing from the page).
pub fn bootstrap<S, P, V>(
    store: S,
    signal: P,
    view: Result<V, ThemeError>,
    config: &ThemeConfig,
) -> Option<SharedController<S, P, V>>
where
    S: ThemeStore + 'static,
    P: PreferenceSignal + 'static,
    V: ThemeView + 'static,
{
    match view {
        Ok(view) => Some(ThemeController::new(store, signal, view, config).mount()),
        Err(e @ ThemeError::MissingElement { .. }) => {
            log::warn!("Theme toggle button or icon not found: {e}");
            None
        }
        Err(e) => {
            log::warn!("Theme toggle disabled: {e}");
            None
        }
    }
}
