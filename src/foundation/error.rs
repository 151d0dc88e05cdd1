/// Convenience result type used across cutface.
pub type CutfaceResult<T> = Result<T, CutfaceError>;

/// Top-level error taxonomy used by engine APIs.
#[derive(thiserror::Error, Debug)]
pub enum CutfaceError {
    /// An offscreen buffer could not be obtained. Recoverable: the frame is drawn without the wipe.
    #[error("allocation failure: {0}")]
    Allocation(String),

    /// A row/column/region index violates its bounds.
    #[error("out of range: {0}")]
    OutOfRange(String),

    /// Invalid caller-provided geometry or style data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Display surface protocol violations (e.g. capturing twice).
    #[error("surface error: {0}")]
    Surface(String),

    /// Settings could not be parsed or contain invalid values.
    #[error("settings error: {0}")]
    Settings(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CutfaceError {
    /// Build a [`CutfaceError::Allocation`] value.
    pub fn allocation(msg: impl Into<String>) -> Self {
        Self::Allocation(msg.into())
    }

    /// Build a [`CutfaceError::OutOfRange`] value.
    pub fn out_of_range(msg: impl Into<String>) -> Self {
        Self::OutOfRange(msg.into())
    }

    /// Build a [`CutfaceError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`CutfaceError::Surface`] value.
    pub fn surface(msg: impl Into<String>) -> Self {
        Self::Surface(msg.into())
    }

    /// Build a [`CutfaceError::Settings`] value.
    pub fn settings(msg: impl Into<String>) -> Self {
        Self::Settings(msg.into())
    }

    /// `true` when the error only costs the current frame its wipe effect.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::Allocation(_))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
