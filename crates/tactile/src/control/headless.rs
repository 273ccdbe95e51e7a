//! An in-process native control.
//!
//! [`HeadlessControl`] implements [`ControlEventSource`] without any
//! windowing system behind it. It keeps registered targets in registration
//! order and delivers events by mask, the way native toolkits do, which
//! makes it suitable for tests, off-screen automation and demos.

use std::sync::Arc;

use parking_lot::Mutex;

use super::event_kind::ControlEvent;
use super::events::ControlEvents;
use super::source::{ControlAction, ControlEventSource};

type SharedAction = Arc<dyn Fn() + Send + Sync>;

struct Target {
    events: ControlEvents,
    action: SharedAction,
}

/// A native control with no windowing system behind it.
///
/// # Example
///
/// ```
/// use tactile::control::{Control, ControlEvent};
/// use tactile::control::headless::HeadlessControl;
///
/// let control = Control::new(HeadlessControl::new());
/// control.on_value_changed().connect(|()| println!("changed"));
///
/// control.native().send_actions(ControlEvent::ValueChanged.into());
/// ```
#[derive(Default)]
pub struct HeadlessControl {
    targets: Mutex<Vec<Target>>,
}

impl std::fmt::Debug for HeadlessControl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HeadlessControl")
            .field("targets", &self.target_count())
            .field("registered", &self.registered_events())
            .finish()
    }
}

impl HeadlessControl {
    /// Create a control with no targets.
    pub fn new() -> Self {
        Self::default()
    }

    /// Deliver `events` to every target registered for any of them.
    ///
    /// Targets run synchronously, in registration order, each at most once
    /// per call even if its mask matches several of `events`. Returns the
    /// number of targets invoked.
    pub fn send_actions(&self, events: ControlEvents) -> usize {
        // Targets may register more targets while running.
        let actions: Vec<SharedAction> = self
            .targets
            .lock()
            .iter()
            .filter(|target| target.events.intersects(events))
            .map(|target| target.action.clone())
            .collect();

        for action in &actions {
            action();
        }
        actions.len()
    }

    /// Deliver a complete tap: touch down followed by touch up inside.
    pub fn tap(&self) {
        self.send_actions(ControlEvent::TouchDown.into());
        self.send_actions(ControlEvent::TouchUpInside.into());
    }

    /// Number of registered targets.
    pub fn target_count(&self) -> usize {
        self.targets.lock().len()
    }

    /// Number of targets registered for `event`.
    pub fn targets_for(&self, event: ControlEvent) -> usize {
        self.targets
            .lock()
            .iter()
            .filter(|target| target.events.contains(event))
            .count()
    }

    /// Union of every registered mask.
    pub fn registered_events(&self) -> ControlEvents {
        self.targets
            .lock()
            .iter()
            .fold(ControlEvents::empty(), |all, target| all | target.events)
    }
}

impl ControlEventSource for HeadlessControl {
    fn add_target(&self, events: ControlEvents, action: ControlAction) {
        self.targets.lock().push(Target {
            events,
            action: Arc::from(action),
        });
    }
}

static_assertions::assert_impl_all!(HeadlessControl: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;

    fn recorder(log: &Arc<Mutex<Vec<&'static str>>>, name: &'static str) -> ControlAction {
        let log = log.clone();
        Box::new(move || log.lock().push(name))
    }

    #[test]
    fn test_delivers_by_mask_in_registration_order() {
        let native = HeadlessControl::new();
        let log = Arc::new(Mutex::new(Vec::new()));

        native.add_target(ControlEvent::TouchUpInside.into(), recorder(&log, "up"));
        native.add_target(ControlEvents::ALL_TOUCH_EVENTS, recorder(&log, "any-touch"));
        native.add_target(ControlEvent::ValueChanged.into(), recorder(&log, "value"));

        let invoked = native.send_actions(ControlEvent::TouchDown | ControlEvent::TouchUpInside);

        assert_eq!(invoked, 2);
        assert_eq!(*log.lock(), vec!["up", "any-touch"]);
    }

    #[test]
    fn test_tap() {
        let native = HeadlessControl::new();
        let log = Arc::new(Mutex::new(Vec::new()));

        native.add_target(ControlEvent::TouchDown.into(), recorder(&log, "down"));
        native.add_target(ControlEvent::TouchUpInside.into(), recorder(&log, "up"));
        native.tap();

        assert_eq!(*log.lock(), vec!["down", "up"]);
    }

    #[test]
    fn test_registration_bookkeeping() {
        let native = HeadlessControl::new();
        assert_eq!(native.registered_events(), ControlEvents::empty());

        native.add_target(ControlEvent::EditingDidBegin.into(), Box::new(|| {}));
        native.add_target(ControlEvents::ALL_EDITING_EVENTS, Box::new(|| {}));

        assert_eq!(native.target_count(), 2);
        assert_eq!(native.targets_for(ControlEvent::EditingDidBegin), 2);
        assert_eq!(native.targets_for(ControlEvent::EditingDidEnd), 1);
        assert_eq!(native.targets_for(ControlEvent::TouchDown), 0);
        assert_eq!(native.registered_events(), ControlEvents::ALL_EDITING_EVENTS);
    }
}
