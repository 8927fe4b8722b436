/// Convenience result type used across Scrollyte.
pub type ScrollyteResult<T> = Result<T, ScrollyteError>;

/// Top-level error taxonomy used by engine APIs.
///
/// Every variant is a configuration-time failure. Frame updates never return errors: runtime
/// input is clamped instead.
#[derive(thiserror::Error, Debug)]
pub enum ScrollyteError {
    /// Invalid user-provided configuration.
    #[error("validation error: {0}")]
    Validation(String),

    /// A region interval that is empty, reversed, or not finite.
    #[error("invalid range error: {0}")]
    InvalidRange(String),

    /// Two pinned regions overlap by more than the configured tolerance.
    #[error("pin overlap error: {0}")]
    PinOverlap(String),

    /// Errors while validating property timelines.
    #[error("animation error: {0}")]
    Animation(String),

    /// Errors when serializing or deserializing definitions.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ScrollyteError {
    /// Build a [`ScrollyteError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`ScrollyteError::InvalidRange`] value.
    pub fn invalid_range(msg: impl Into<String>) -> Self {
        Self::InvalidRange(msg.into())
    }

    /// Build a [`ScrollyteError::PinOverlap`] value.
    pub fn pin_overlap(msg: impl Into<String>) -> Self {
        Self::PinOverlap(msg.into())
    }

    /// Build a [`ScrollyteError::Animation`] value.
    pub fn animation(msg: impl Into<String>) -> Self {
        Self::Animation(msg.into())
    }

    /// Build a [`ScrollyteError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }

    /// Return `true` for [`ScrollyteError::InvalidRange`].
    pub fn is_invalid_range(&self) -> bool {
        matches!(self, Self::InvalidRange(_))
    }
}

impl From<serde_json::Error> for ScrollyteError {
    fn from(err: serde_json::Error) -> Self {
        Self::serde(err.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
