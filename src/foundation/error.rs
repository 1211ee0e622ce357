/// Convenience alias used by fallible `maskform` APIs.
pub type MaskformResult<T> = Result<T, MaskformError>;

/// Top-level error type returned by `maskform`.
#[derive(thiserror::Error, Debug)]
pub enum MaskformError {
    /// Input bytes could not be decoded into a raster image.
    #[error("decode error: {0}")]
    Decode(String),

    /// A masked raster could not be encoded into its upload payload.
    #[error("encode error: {0}")]
    Encode(String),

    /// The generation endpoint could not be reached or answered with garbage.
    #[error("transport error: {0}")]
    Transport(String),

    /// Configuration could not be read or parsed.
    #[error("config error: {0}")]
    Config(String),

    /// Input value failed validation.
    #[error("validation error: {0}")]
    Validation(String),

    /// Wrapped lower-level error.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl MaskformError {
    /// Build a [`MaskformError::Decode`] value.
    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }

    /// Build a [`MaskformError::Encode`] value.
    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }

    /// Build a [`MaskformError::Transport`] value.
    pub fn transport(msg: impl Into<String>) -> Self {
        Self::Transport(msg.into())
    }

    /// Build a [`MaskformError::Config`] value.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Build a [`MaskformError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
