//! The boundary to the native toolkit's event notification mechanism.

use std::sync::Arc;

use super::events::ControlEvents;

/// A callback the native toolkit invokes, with no arguments, each time a
/// registered event occurs.
pub type ControlAction = Box<dyn Fn() + Send + Sync>;

/// A native control that can notify registered targets of its events.
///
/// This is the toolkit's own target/action registration. Implementations
/// must keep `action` for as long as the control exists and invoke it on the
/// UI thread every time an event in `events` occurs. Registrations are never
/// removed; they are released together with the control.
///
/// # Example
///
/// ```
/// use parking_lot::Mutex;
/// use tactile::control::{ControlAction, ControlEventSource, ControlEvents};
///
/// #[derive(Default)]
/// struct NativeSwitch {
///     targets: Mutex<Vec<(ControlEvents, ControlAction)>>,
/// }
///
/// impl ControlEventSource for NativeSwitch {
///     fn add_target(&self, events: ControlEvents, action: ControlAction) {
///         self.targets.lock().push((events, action));
///     }
/// }
/// ```
pub trait ControlEventSource {
    /// Register `action` to be invoked whenever one of `events` occurs.
    fn add_target(&self, events: ControlEvents, action: ControlAction);
}

impl<T: ControlEventSource + ?Sized> ControlEventSource for &T {
    fn add_target(&self, events: ControlEvents, action: ControlAction) {
        (**self).add_target(events, action);
    }
}

impl<T: ControlEventSource + ?Sized> ControlEventSource for Box<T> {
    fn add_target(&self, events: ControlEvents, action: ControlAction) {
        (**self).add_target(events, action);
    }
}

impl<T: ControlEventSource + ?Sized> ControlEventSource for Arc<T> {
    fn add_target(&self, events: ControlEvents, action: ControlAction) {
        (**self).add_target(events, action);
    }
}
