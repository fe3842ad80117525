#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ThemeError {
    #[error("Required element not found: #{id}")]
    MissingElement { id: String },

    #[error("Unknown theme: {0}")]
    UnknownTheme(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("DOM error: {0}")]
    Dom(String),
}
