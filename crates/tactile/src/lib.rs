//! Tactile: reactive signals for native GUI controls.
//!
//! Tactile attaches one [`Signal`] per interaction event kind to a native
//! control, so application code subscribes to taps, drags, value changes and
//! editing events through a single observable API instead of registering
//! target/action callbacks with the toolkit.
//!
//! Signals are created lazily. The first request for a kind on a control
//! creates its signal and registers exactly one native target; every later
//! request returns the same signal.
//!
//! # Example
//!
//! ```
//! use tactile::prelude::*;
//! use tactile::control::headless::HeadlessControl;
//!
//! let slider = Control::new(HeadlessControl::new());
//! slider.on_value_changed().connect(|()| println!("slider moved"));
//!
//! slider.native().send_actions(ControlEvent::ValueChanged.into());
//! ```

pub mod control;
mod error;
pub mod prelude;

pub use error::{ControlError, Result};
pub use tactile_core::*;
