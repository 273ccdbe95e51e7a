//! Per-control, per-event-kind lazy signal storage.
//!
//! A [`SignalStore`] belongs to exactly one control. It maps each event
//! kind's identifier to the signal for that kind, creating the signal and
//! wiring the native dispatch the first time the kind is requested.
//!
//! # Binding
//!
//! Every (control, kind) pair moves from [`BindingState::Unbound`] to
//! [`BindingState::Bound`] exactly once, on the first
//! [`signal_for`](SignalStore::signal_for) call for that kind. From then on
//! the same signal is returned and no further native registration happens.
//! Nothing moves a pair back; the signal and the registration are released
//! together when the control goes away.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::Mutex;
use tactile_core::logging::targets;
use tactile_core::Signal;

use super::bridge;
use super::config::StoreAllocation;
use super::event_kind::ControlEvent;
use super::events::ControlEvents;
use super::source::ControlEventSource;

/// Whether a control event kind has been wired up on a control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BindingState {
    /// No signal exists and nothing is registered with the native control.
    Unbound,
    /// The signal exists and the dispatch bridge is registered.
    Bound,
}

/// State shared between a store and the bridges it registers.
///
/// Bridges hold this weakly, so a native control that outlives its store
/// never keeps the signals alive.
pub(super) struct StoreInner {
    name: String,
    signals: Mutex<HashMap<&'static str, Arc<Signal<()>>>>,
}

impl StoreInner {
    pub(super) fn name(&self) -> &str {
        &self.name
    }

    pub(super) fn lookup(&self, kind: ControlEvent) -> Option<Arc<Signal<()>>> {
        self.signals.lock().get(kind.identifier()).cloned()
    }
}

/// The lazily populated signal map of one control.
///
/// Lookup-or-create runs under a per-store lock, so at most one signal ever
/// exists per event kind even if the store is shared between threads. The
/// lock is released before the native registration and is never held while
/// a signal emits.
pub struct SignalStore {
    inner: Arc<StoreInner>,
}

impl std::fmt::Debug for SignalStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SignalStore")
            .field("name", &self.inner.name)
            .field("bound", &self.bound_events())
            .finish()
    }
}

impl SignalStore {
    /// Create an empty store.
    pub fn new(name: impl Into<String>, allocation: StoreAllocation) -> Self {
        let capacity = match allocation {
            StoreAllocation::Lazy => 0,
            StoreAllocation::Eager => ControlEvent::ALL.len(),
        };
        Self {
            inner: Arc::new(StoreInner {
                name: name.into(),
                signals: Mutex::new(HashMap::with_capacity(capacity)),
            }),
        }
    }

    /// The name reported in log fields.
    pub fn name(&self) -> &str {
        self.inner.name()
    }

    /// Get the signal for `kind`, creating and wiring it on first use.
    ///
    /// On the first call for a kind this creates the signal, stores it, and
    /// registers a dispatch bridge for that kind with `source`. Later calls
    /// return the same signal and leave `source` untouched.
    ///
    /// `source` must be the native control this store belongs to.
    pub fn signal_for<S>(&self, kind: ControlEvent, source: &S) -> Arc<Signal<()>>
    where
        S: ControlEventSource + ?Sized,
    {
        let key = kind.identifier();
        let signal = {
            let mut signals = self.inner.signals.lock();
            if let Some(existing) = signals.get(key) {
                return existing.clone();
            }
            let signal = Arc::new(Signal::new());
            signals.insert(key, signal.clone());
            signal
        };

        tracing::debug!(
            target: targets::STORE,
            control = %self.inner.name,
            event = key,
            "binding control event"
        );
        source.add_target(
            ControlEvents::from_event(kind),
            bridge::dispatch_action(Arc::downgrade(&self.inner), kind),
        );
        signal
    }

    /// Get the signal for `kind` if it has already been created.
    ///
    /// Never creates a signal or touches the native control.
    pub fn existing(&self, kind: ControlEvent) -> Option<Arc<Signal<()>>> {
        self.inner.lookup(kind)
    }

    /// The binding state of `kind`.
    pub fn state(&self, kind: ControlEvent) -> BindingState {
        if self.is_bound(kind) {
            BindingState::Bound
        } else {
            BindingState::Unbound
        }
    }

    /// Whether `kind` has a signal.
    pub fn is_bound(&self, kind: ControlEvent) -> bool {
        self.inner.signals.lock().contains_key(kind.identifier())
    }

    /// Every kind that has a signal.
    pub fn bound_events(&self) -> ControlEvents {
        let signals = self.inner.signals.lock();
        ControlEvent::all()
            .filter(|kind| signals.contains_key(kind.identifier()))
            .collect()
    }

    /// Number of signals created so far.
    pub fn len(&self) -> usize {
        self.inner.signals.lock().len()
    }

    /// Whether no signal has been created yet.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[cfg(test)]
    pub(super) fn downgrade_inner(&self) -> std::sync::Weak<StoreInner> {
        Arc::downgrade(&self.inner)
    }

    #[cfg(test)]
    pub(super) fn capacity(&self) -> usize {
        self.inner.signals.lock().capacity()
    }
}

static_assertions::assert_impl_all!(SignalStore: Send, Sync);
