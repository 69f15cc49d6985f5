/// Convenience result type used across fresco.
pub type FrescoResult<T> = Result<T, FrescoError>;

/// Top-level error taxonomy used by library APIs.
#[derive(thiserror::Error, Debug)]
pub enum FrescoError {
    /// Invalid user-provided dimensions, catalog data or settings.
    #[error("validation error: {0}")]
    Validation(String),

    /// Failures while serializing a canvas into the lossless container.
    #[error("encode error: {0}")]
    Encode(String),

    /// Malformed or corrupted container bytes.
    #[error("decode error: {0}")]
    Decode(String),

    /// Failures of the external lossy transcoder.
    #[error("transcode error: {0}")]
    Transcode(String),

    /// Errors when serializing or deserializing catalog documents.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl FrescoError {
    /// Build a [`FrescoError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`FrescoError::Encode`] value.
    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }

    /// Build a [`FrescoError::Decode`] value.
    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }

    /// Build a [`FrescoError::Transcode`] value.
    pub fn transcode(msg: impl Into<String>) -> Self {
        Self::Transcode(msg.into())
    }

    /// Build a [`FrescoError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
