//! Prelude module for Tactile.
//!
//! ```ignore
//! use tactile::prelude::*;
//! ```

// ============================================================================
// Signal/Slot System
// ============================================================================

pub use crate::signal::{ConnectionGuard, ConnectionId, Signal};

// ============================================================================
// Controls
// ============================================================================

pub use crate::control::{
    Control, ControlBuilder, ControlConfig, ControlEvent, ControlEventSource, ControlEvents,
    ControlSignalTable, StoreAllocation,
};

// ============================================================================
// Errors
// ============================================================================

pub use crate::{ControlError, Result};
