use gloo::events::EventListener;
use web_sys::{Document, Element};

use crate::config::ThemeConfig;
use crate::controller::{ClickHandler, ThemeView};
use crate::models::{Theme, ThemeError};

/// [`ThemeView`] over a server-rendered page: the toggle and icon are found
/// by id, the theme attribute lives on `<html>`.
pub struct DomThemeView {
    root: Element,
    toggle: Element,
    icon: Element,
    config: ThemeConfig,
    click_listener: Option<EventListener>,
}

impl DomThemeView {
    /// Look up both elements on the current document.
    pub fn from_document(config: &ThemeConfig) -> Result<Self, ThemeError> {
        let document = current_document()?;
        let find = |id: &str| {
            document
                .get_element_by_id(id)
                .ok_or_else(|| ThemeError::MissingElement { id: id.to_string() })
        };
        let toggle = find(&config.toggle_id)?;
        let icon = find(&config.icon_id)?;
        let root = document
            .document_element()
            .ok_or_else(|| ThemeError::Dom("document has no root element".to_string()))?;

        Ok(Self {
            root,
            toggle,
            icon,
            config: config.clone(),
            click_listener: None,
        })
    }
}

impl ThemeView for DomThemeView {
    fn current_applied_theme(&self) -> Theme {
        Theme::from_attribute(self.root.get_attribute(&self.config.root_attribute).as_deref())
    }

    fn apply_theme_attribute(&mut self, theme: Theme) -> Result<(), ThemeError> {
        set_theme_attribute(&self.root, &self.config.root_attribute, theme)
    }

    fn set_icon_state(&mut self, theme: Theme) -> Result<(), ThemeError> {
        let classes = self.icon.class_list();
        classes
            .remove_1(theme.inactive_icon_class(&self.config))
            .and_then(|()| classes.add_1(theme.icon_class(&self.config)))
            .map_err(|e| ThemeError::Dom(format!("{e:?}")))
    }

    fn set_accessible_label(&mut self, label: &str) -> Result<(), ThemeError> {
        self.toggle
            .set_attribute("aria-label", label)
            .map_err(|e| ThemeError::Dom(format!("{e:?}")))
    }

    fn on_click(&mut self, mut handler: ClickHandler) {
        let listener = EventListener::new(&self.toggle, "click", move |_event| handler());
        // Replacing drops (and detaches) any previous listener
        self.click_listener = Some(listener);
    }
}

fn current_document() -> Result<Document, ThemeError> {
    web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| ThemeError::Dom("document unavailable".to_string()))
}

fn set_theme_attribute(root: &Element, attribute: &str, theme: Theme) -> Result<(), ThemeError> {
    root.set_attribute(attribute, theme.as_str())
        .map_err(|e| ThemeError::Dom(format!("{e:?}")))
}

/// Set the theme attribute on `<html>` of the current document
pub fn apply_theme_to_document(attribute: &str, theme: Theme) -> Result<(), ThemeError> {
    let root = current_document()?
        .document_element()
        .ok_or_else(|| ThemeError::Dom("document has no root element".to_string()))?;
    set_theme_attribute(&root, attribute, theme)
}

/// Whether `document.readyState` says the markup has been parsed
pub fn is_parsed(ready_state: &str) -> bool {
    ready_state != "loading"
}
