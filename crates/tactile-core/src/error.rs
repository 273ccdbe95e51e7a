//! Error types for Tactile.

use std::fmt;
use std::thread::ThreadId;

/// The main error type for Tactile core operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TactileError {
    /// Signal-related error.
    Signal(SignalError),
    /// An object with thread affinity was accessed from another thread.
    WrongThread {
        /// The thread the object is bound to.
        expected: ThreadId,
        /// The thread the access came from.
        actual: ThreadId,
    },
}

impl fmt::Display for TactileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Signal(err) => write!(f, "Signal error: {err}"),
            Self::WrongThread { expected, actual } => {
                write!(
                    f,
                    "Accessed from thread {actual:?}, but bound to thread {expected:?}"
                )
            }
        }
    }
}

impl std::error::Error for TactileError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Signal(err) => Some(err),
            Self::WrongThread { .. } => None,
        }
    }
}

impl From<SignalError> for TactileError {
    fn from(err: SignalError) -> Self {
        Self::Signal(err)
    }
}

/// Signal-specific errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignalError {
    /// The connection ID is invalid or has already been disconnected.
    InvalidConnection,
    /// The signal has been dropped and is no longer available.
    SignalDropped,
}

impl fmt::Display for SignalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidConnection => write!(f, "Invalid or disconnected connection ID"),
            Self::SignalDropped => write!(f, "Signal has been dropped"),
        }
    }
}

impl std::error::Error for SignalError {}

/// A specialized Result type for Tactile core operations.
pub type Result<T> = std::result::Result<T, TactileError>;
