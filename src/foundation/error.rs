/// Convenience result type used across the crate.
pub type GlassResult<T> = Result<T, GlassError>;

/// Top-level error taxonomy used by the card, ingestion, and pipeline APIs.
#[derive(thiserror::Error, Debug)]
pub enum GlassError {
    /// Invalid user-provided card data or generation parameters.
    #[error("validation error: {0}")]
    Validation(String),

    /// Malformed record or image source at the ingestion boundary.
    #[error("ingest error: {0}")]
    Ingest(String),

    /// A canvas paint or snapshot capture failed.
    #[error("capture error: {0}")]
    Capture(String),

    /// The output archive could not be serialized.
    #[error("archive error: {0}")]
    Archive(String),

    /// The shared card state is locked by a running batch.
    #[error("state is busy: {0}")]
    Busy(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl GlassError {
    /// Build a [`GlassError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`GlassError::Ingest`] value.
    pub fn ingest(msg: impl Into<String>) -> Self {
        Self::Ingest(msg.into())
    }

    /// Build a [`GlassError::Capture`] value.
    pub fn capture(msg: impl Into<String>) -> Self {
        Self::Capture(msg.into())
    }

    /// Build a [`GlassError::Archive`] value.
    pub fn archive(msg: impl Into<String>) -> Self {
        Self::Archive(msg.into())
    }

    /// Build a [`GlassError::Busy`] value.
    pub fn busy(msg: impl Into<String>) -> Self {
        Self::Busy(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
