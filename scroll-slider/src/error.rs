//! Error types

/// Errors raised while setting up or driving a slider.
#[derive(Debug, thiserror::Error)]
pub enum SliderError {
    /// An element the slider needs is not registered.
    #[error("Element '{id}' not found")]
    MissingElement { id: String },

    /// Terminal I/O failed.
    #[error("Terminal I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl SliderError {
    /// Creates a new missing element error.
    pub fn missing(id: impl Into<String>) -> Self {
        Self::MissingElement { id: id.into() }
    }
}
