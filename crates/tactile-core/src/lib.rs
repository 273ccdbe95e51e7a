//! Core systems for Tactile.
//!
//! This crate provides the foundational pieces the control layer is built on:
//!
//! - **Signal/Slot System**: Type-safe, synchronous observable channels
//! - **Thread Affinity**: Runtime checks that UI objects stay on their thread
//! - **Logging**: `tracing` targets for every subsystem
//!
//! # Signal/Slot Example
//!
//! ```
//! use tactile_core::Signal;
//!
//! // Create a signal that notifies when a value changes
//! let value_changed = Signal::<i32>::new();
//!
//! // Connect a slot to handle the signal
//! let conn_id = value_changed.connect(|value| {
//!     println!("Value changed to: {}", value);
//! });
//!
//! // Emit the signal
//! value_changed.emit(42);
//!
//! // Disconnect when done
//! value_changed.disconnect(conn_id);
//! ```

mod error;
pub mod logging;
pub mod signal;
pub mod thread_check;

pub use error::{Result, SignalError, TactileError};
pub use signal::{ConnectionGuard, ConnectionId, Signal};
pub use thread_check::{are_thread_checks_enabled, set_thread_checks_enabled, ThreadAffinity};
