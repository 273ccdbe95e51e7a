//! Interaction signals for native controls.
//!
//! A native control raises interaction events (touches, drags, value
//! changes, text editing) through its toolkit's target/action mechanism.
//! This module gives every such event a [`Signal`](tactile_core::Signal)
//! instead, created on demand and scoped to one control instance.
//!
//! # Key Types
//!
//! - [`ControlEvent`] - The closed set of event kinds and their identifiers
//! - [`ControlEvents`] - Native event masks
//! - [`ControlEventSource`] - The toolkit boundary: register a target for a mask
//! - [`Control`] - A native control paired with its signals
//! - [`ControlSignalTable`] - Signals for controls owned elsewhere
//! - [`SignalStore`] - The per-control signal map behind both
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use std::sync::atomic::{AtomicUsize, Ordering};
//! use tactile::control::{Control, ControlEvent};
//! use tactile::control::headless::HeadlessControl;
//!
//! let field = Control::new(HeadlessControl::new());
//! let edits = Arc::new(AtomicUsize::new(0));
//!
//! let edits_clone = edits.clone();
//! field.on_editing_changed().connect(move |()| {
//!     edits_clone.fetch_add(1, Ordering::SeqCst);
//! });
//!
//! field.native().send_actions(ControlEvent::EditingChanged.into());
//! field.native().send_actions(ControlEvent::EditingDidEnd.into());
//! assert_eq!(edits.load(Ordering::SeqCst), 1);
//! ```

mod bridge;
mod config;
mod event_kind;
mod events;
pub mod headless;
mod signals;
mod source;
mod store;
mod table;

pub use config::{ControlBuilder, ControlConfig, StoreAllocation};
pub use event_kind::ControlEvent;
pub use events::ControlEvents;
pub use signals::Control;
pub use source::{ControlAction, ControlEventSource};
pub use store::{BindingState, SignalStore};
pub use table::ControlSignalTable;
