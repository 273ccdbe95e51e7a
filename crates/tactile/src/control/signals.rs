//! A native control paired with its interaction signals.

use std::sync::Arc;

use tactile_core::logging::targets;
use tactile_core::{Signal, ThreadAffinity};

use crate::error::Result;

use super::config::{ControlBuilder, ControlConfig};
use super::event_kind::ControlEvent;
use super::source::ControlEventSource;
use super::store::SignalStore;

/// A native control together with one lazily created signal per event kind.
///
/// `Control` owns the native handle and the signal store side by side, so
/// both share one lifetime. Dropping the control drops the store; any
/// native registration that outlives it (because the native handle is shared
/// elsewhere) stops delivering.
///
/// Each accessor returns the same [`Signal`] for the lifetime of the
/// control. The first call for a kind registers a single target with the
/// native control; later calls register nothing.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use std::sync::atomic::{AtomicUsize, Ordering};
/// use tactile::control::Control;
/// use tactile::control::headless::HeadlessControl;
///
/// let button = Control::new(HeadlessControl::new());
/// let taps = Arc::new(AtomicUsize::new(0));
///
/// let taps_clone = taps.clone();
/// button.on_touch_up_inside().connect(move |()| {
///     taps_clone.fetch_add(1, Ordering::SeqCst);
/// });
///
/// button.native().tap();
/// assert_eq!(taps.load(Ordering::SeqCst), 1);
/// ```
pub struct Control<W: ControlEventSource> {
    native: W,
    store: SignalStore,
    affinity: ThreadAffinity,
    config: ControlConfig,
}

impl<W: ControlEventSource> std::fmt::Debug for Control<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Control")
            .field("config", &self.config)
            .field("store", &self.store)
            .finish_non_exhaustive()
    }
}

/// Generates one named accessor per event kind.
macro_rules! event_accessors {
    ($($(#[$doc:meta])* $name:ident => $kind:ident;)*) => {
        $(
            $(#[$doc])*
            pub fn $name(&self) -> Arc<Signal<()>> {
                self.signal(ControlEvent::$kind)
            }
        )*
    };
}

impl<W: ControlEventSource> Control<W> {
    /// Wrap a native control with the default configuration.
    pub fn new(native: W) -> Self {
        ControlBuilder::new().build(native)
    }

    /// Wrap a native control with the given configuration.
    ///
    /// The calling thread becomes the control's thread.
    pub fn with_config(native: W, config: ControlConfig) -> Self {
        tracing::debug!(
            target: targets::CONTROL,
            control = %config.name,
            allocation = ?config.allocation,
            "creating control"
        );
        Self {
            native,
            store: SignalStore::new(config.name.clone(), config.allocation),
            affinity: ThreadAffinity::current(),
            config,
        }
    }

    /// The wrapped native control.
    pub fn native(&self) -> &W {
        &self.native
    }

    /// The control's name.
    pub fn name(&self) -> &str {
        &self.config.name
    }

    /// The configuration the control was built with.
    pub fn config(&self) -> &ControlConfig {
        &self.config
    }

    /// The control's signal store.
    pub fn store(&self) -> &SignalStore {
        &self.store
    }

    /// The signal for `kind`, created and wired on first use.
    ///
    /// # Panics
    ///
    /// Panics when thread affinity is enforced, thread checks are enabled,
    /// and this is called off the control's thread. Use
    /// [`try_signal`](Self::try_signal) to get an error instead.
    pub fn signal(&self, kind: ControlEvent) -> Arc<Signal<()>> {
        if self.config.enforce_thread_affinity {
            self.affinity
                .verify("control signals must be accessed on the thread that created the control");
        }
        self.store.signal_for(kind, &self.native)
    }

    /// The signal for `kind`, or an error when accessed off the control's
    /// thread with affinity enforced.
    pub fn try_signal(&self, kind: ControlEvent) -> Result<Arc<Signal<()>>> {
        if self.config.enforce_thread_affinity {
            self.affinity.check()?;
        }
        Ok(self.store.signal_for(kind, &self.native))
    }

    event_accessors! {
        /// Fires for each touch down event.
        on_touch_down => TouchDown;
        /// Fires for each touch down repeat event.
        on_touch_down_repeat => TouchDownRepeat;
        /// Fires for each touch drag inside event.
        on_touch_drag_inside => TouchDragInside;
        /// Fires for each touch drag outside event.
        on_touch_drag_outside => TouchDragOutside;
        /// Fires for each touch drag enter event.
        on_touch_drag_enter => TouchDragEnter;
        /// Fires for each touch drag exit event.
        on_touch_drag_exit => TouchDragExit;
        /// Fires for each touch up inside event.
        on_touch_up_inside => TouchUpInside;
        /// Fires for each touch up outside event.
        on_touch_up_outside => TouchUpOutside;
        /// Fires for each touch cancel event.
        on_touch_cancel => TouchCancel;
        /// Fires for each value changed event.
        on_value_changed => ValueChanged;
        /// Fires for each editing did begin event.
        on_editing_did_begin => EditingDidBegin;
        /// Fires for each editing changed event.
        on_editing_changed => EditingChanged;
        /// Fires for each editing did end event.
        on_editing_did_end => EditingDidEnd;
        /// Fires for each editing did end on exit event.
        on_editing_did_end_on_exit => EditingDidEndOnExit;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::control::headless::HeadlessControl;
    use crate::control::BindingState;
    use crate::error::ControlError;

    #[test]
    fn test_named_accessors_match_kinds() {
        let control = Control::new(HeadlessControl::new());
        let accessors: [(fn(&Control<HeadlessControl>) -> Arc<Signal<()>>, ControlEvent); 14] = [
            (Control::on_touch_down, ControlEvent::TouchDown),
            (Control::on_touch_down_repeat, ControlEvent::TouchDownRepeat),
            (Control::on_touch_drag_inside, ControlEvent::TouchDragInside),
            (Control::on_touch_drag_outside, ControlEvent::TouchDragOutside),
            (Control::on_touch_drag_enter, ControlEvent::TouchDragEnter),
            (Control::on_touch_drag_exit, ControlEvent::TouchDragExit),
            (Control::on_touch_up_inside, ControlEvent::TouchUpInside),
            (Control::on_touch_up_outside, ControlEvent::TouchUpOutside),
            (Control::on_touch_cancel, ControlEvent::TouchCancel),
            (Control::on_value_changed, ControlEvent::ValueChanged),
            (Control::on_editing_did_begin, ControlEvent::EditingDidBegin),
            (Control::on_editing_changed, ControlEvent::EditingChanged),
            (Control::on_editing_did_end, ControlEvent::EditingDidEnd),
            (Control::on_editing_did_end_on_exit, ControlEvent::EditingDidEndOnExit),
        ];

        for (accessor, kind) in accessors {
            assert_eq!(control.store().state(kind), BindingState::Unbound);
            let signal = accessor(&control);
            assert!(Arc::ptr_eq(&signal, &control.signal(kind)), "{kind}");
            assert_eq!(control.native().targets_for(kind), 1, "{kind}");
        }
        assert_eq!(control.native().target_count(), ControlEvent::ALL.len());
    }

    #[test]
    fn test_try_signal_off_thread() {
        let control = Arc::new(Control::new(HeadlessControl::new()));

        let remote = control.clone();
        let result = std::thread::spawn(move || remote.try_signal(ControlEvent::TouchDown).map(|_| ()))
            .join()
            .unwrap();

        assert!(matches!(result, Err(ControlError::Core(_))));
        assert!(control.store().is_empty());
    }

    #[test]
    fn test_affinity_not_enforced() {
        let control = Arc::new(
            ControlBuilder::new()
                .enforce_thread_affinity(false)
                .build(HeadlessControl::new()),
        );

        let remote = control.clone();
        std::thread::spawn(move || {
            remote.on_value_changed();
            remote.try_signal(ControlEvent::TouchDown).unwrap();
        })
        .join()
        .unwrap();

        assert_eq!(control.store().len(), 2);
    }
}
