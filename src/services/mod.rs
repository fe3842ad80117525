pub mod preference;
pub mod storage;

pub use preference::{FixedPreference, MediaQueryPreference, PreferenceSignal};
pub use storage::{LocalThemeStore, MemoryThemeStore, ThemeStore};
