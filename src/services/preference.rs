/// OS/browser-level color scheme hint
pub trait PreferenceSignal {
    fn prefers_dark(&self) -> bool;
}

/// Evaluates a media query such as `(prefers-color-scheme: dark)`
#[derive(Debug, Clone)]
pub struct MediaQueryPreference {
    query: String,
}

impl MediaQueryPreference {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
        }
    }
}

impl PreferenceSignal for MediaQueryPreference {
    fn prefers_dark(&self) -> bool {
        web_sys::window()
            .and_then(|w| w.match_media(&self.query).ok().flatten())
            .is_some_and(|mq| mq.matches())
    }
}

/// Constant answer, for tests and pages that pin a default
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedPreference(pub bool);

impl PreferenceSignal for FixedPreference {
    fn prefers_dark(&self) -> bool {
        self.0
    }
}
