//! Error types for the control layer.

use tactile_core::TactileError;

use crate::control::ControlEvents;

/// Result type alias for control operations.
pub type Result<T> = std::result::Result<T, ControlError>;

/// Errors that can occur in the control layer.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ControlError {
    /// An identifier that names no control event.
    #[error("Unknown control event '{0}'")]
    UnknownEvent(String),

    /// A mask that does not hold exactly one control event.
    #[error("Expected exactly one control event, got {0}")]
    NotSingleEvent(ControlEvents),

    /// A core error, such as a control accessed off its thread.
    #[error(transparent)]
    Core(#[from] TactileError),
}

impl ControlError {
    /// Create an unknown event error.
    pub fn unknown_event(identifier: impl Into<String>) -> Self {
        Self::UnknownEvent(identifier.into())
    }
}
