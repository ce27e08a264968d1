/// Convenience result type used across Kinema.
pub type KinemaResult<T> = Result<T, KinemaError>;

/// Top-level error taxonomy used by engine APIs.
///
/// Every error is surfaced synchronously to the caller of the operation that raised it.
/// Nothing is retried internally.
#[derive(thiserror::Error, Debug)]
pub enum KinemaError {
    /// Malformed or degenerate geometric input.
    #[error("geometry error: {0}")]
    Geometry(String),

    /// An animation references an object that must be, but is not, in the scene graph.
    #[error("animation target error: {0}")]
    AnimationTarget(String),

    /// The frame sink refused a frame. Aborts the running `play` call.
    #[error("sink error: {0}")]
    Sink(String),

    /// Invalid user-provided configuration or parameters.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl KinemaError {
    /// Build a [`KinemaError::Geometry`] value.
    pub fn geometry(msg: impl Into<String>) -> Self {
        Self::Geometry(msg.into())
    }

    /// Build a [`KinemaError::AnimationTarget`] value.
    pub fn animation_target(msg: impl Into<String>) -> Self {
        Self::AnimationTarget(msg.into())
    }

    /// Build a [`KinemaError::Sink`] value.
    pub fn sink(msg: impl Into<String>) -> Self {
        Self::Sink(msg.into())
    }

    /// Build a [`KinemaError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`KinemaError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
