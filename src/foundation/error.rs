/// Convenience result type used across the crate.
pub type BubbleResult<T> = Result<T, BubbleError>;

/// Top-level error taxonomy used by the public API.
#[derive(thiserror::Error, Debug)]
pub enum BubbleError {
    /// Invalid user-provided input (spinner spec, frame count).
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors while evaluating the animation state for a frame.
    #[error("evaluation error: {0}")]
    Evaluation(String),

    /// Errors raised by a raster backend.
    #[error("render error: {0}")]
    Render(String),

    /// Errors while encoding a rendered frame to an image.
    #[error("encode error: {0}")]
    Encode(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

// Message-only constructors, one per string variant.
#[allow(missing_docs)]
impl BubbleError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn evaluation(msg: impl Into<String>) -> Self {
        Self::Evaluation(msg.into())
    }

    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }

    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
