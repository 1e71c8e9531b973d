/// Result type used across the crate.
pub type UvResult<T> = Result<T, UvError>;

/// Every failure the pipeline surfaces, grouped by stage.
#[derive(thiserror::Error, Debug)]
pub enum UvError {
    /// The bytes are neither a readable binary FBX nor a readable text FBX.
    #[error("container error: {0}")]
    Container(String),

    /// The node tree loaded but its mesh arrays are missing or inconsistent.
    #[error("decode error: {0}")]
    Decode(String),

    /// Invalid user-provided settings.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors while rasterizing, compositing or encoding the image.
    #[error("render error: {0}")]
    Render(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl UvError {
    /// Build a [`UvError::Container`] value.
    pub fn container(msg: impl Into<String>) -> Self {
        Self::Container(msg.into())
    }

    /// Build a [`UvError::Decode`] value.
    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }

    /// Build a [`UvError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`UvError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
