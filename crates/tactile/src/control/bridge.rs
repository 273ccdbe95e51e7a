//! Routing from native control notifications to signals.

use std::sync::Weak;

use tactile_core::logging::targets;

use super::event_kind::ControlEvent;
use super::source::ControlAction;
use super::store::StoreInner;

/// Build the action registered with the native control for `kind`.
///
/// The action emits the store's signal for `kind` with no payload each time
/// the native control invokes it. It performs no filtering or coalescing.
///
/// The store is only held weakly. Once it is gone the action does nothing,
/// which happens while a control is being torn down.
pub(super) fn dispatch_action(store: Weak<StoreInner>, kind: ControlEvent) -> ControlAction {
    Box::new(move || dispatch(&store, kind))
}

fn dispatch(store: &Weak<StoreInner>, kind: ControlEvent) {
    let Some(store) = store.upgrade() else {
        tracing::trace!(
            target: targets::BRIDGE,
            event = kind.identifier(),
            "store released, dropping native event"
        );
        return;
    };

    // Bridges are only registered after their signal is stored.
    let Some(signal) = store.lookup(kind) else {
        missing_signal(store.name(), kind);
    };

    tracing::trace!(
        target: targets::BRIDGE,
        control = %store.name(),
        event = kind.identifier(),
        "dispatching native event"
    );
    signal.emit(());
}

#[cold]
#[inline(never)]
fn missing_signal(control: &str, kind: ControlEvent) -> ! {
    tracing::error!(
        target: targets::BRIDGE,
        control,
        event = kind.identifier(),
        "native event for a kind that was never bound"
    );
    panic!(
        "control '{control}' received a native {kind} event, but no signal is bound \
         for it; the native control delivered an event to a bridge it was not \
         registered for"
    )
}
